//! Errors raised while turning a command line into a render request.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a request from turning into a render job.
///
/// Help is not in here: asking for usage is [`crate::args::ParseOutcome::Help`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A flag was last on the line, or one of its arguments was not a number.
    #[error("{flag} needs {expected}")]
    InvalidArgument {
        flag: &'static str,
        expected: &'static str,
    },

    #[error("{flag}: {value} is out of range")]
    OutOfRange { flag: &'static str, value: String },

    #[error("File {} does not exist", .path.display())]
    MissingFile { path: PathBuf },

    #[error("Cannot place more than {limit} markers")]
    TooManyMarkers { limit: usize },

    #[error("Nothing to render: {reason}")]
    NothingToRender { reason: &'static str },

    #[error("Nothing to render: no region data in {}", .region_dir.display())]
    EmptyWorld { region_dir: PathBuf },

    #[error("Cannot split terrain in more than {max} units.")]
    TooManySplits { max: i64 },
}
