//! # mcmap
//!
//! Front-end of an isometric map renderer: it turns a command line into a
//! validated description of which part of a saved world to draw.
//!
//! Three things feed into that description:
//!
//! - **Defaults**, built in ([`settings`]) or stored in `mcmap.toml` ([`config`])
//! - **Flags** from the command line ([`args`])
//! - **The save itself**: which region files exist ([`scan`])
//!
//! [`resolve`] merges them and rejects requests that cannot produce an image.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use mcmap::args::{ParseOutcome, parse_args};
//! use mcmap::resolve::resolve;
//! use mcmap::scan::RegionDirScanner;
//! use mcmap::settings::WorldOptions;
//!
//! let argv: Vec<std::ffi::OsString> = std::env::args_os().skip(1).collect();
//! if let Ok(ParseOutcome::Options(opts)) = parse_args(&argv, WorldOptions::default()) {
//!     let job = resolve(*opts, &RegionDirScanner).unwrap();
//!     println!("{:?}", job.boundary);
//! }
//! ```

/// Command-line flag grammar and parser.
///
/// Contains [`FLAGS`](args::FLAGS), [`parse_args`](args::parse_args) and the
/// [`ParseOutcome`](args::ParseOutcome) that separates help from errors.
pub mod args;

/// Horizontal extent, vertical slice and orientation of the render area.
pub mod boundary;

/// Optional `mcmap.toml` with stored defaults.
pub mod config;

/// Dimension identifiers and their region directories.
pub mod dimension;

/// [`SettingsError`](error::SettingsError), shared by parsing and resolution.
pub mod error;

/// Bounded list of map markers.
pub mod markers;

/// Spinner and status lines for the binary.
pub mod progress;

/// Crop the request against the saved world and validate it.
pub mod resolve;

/// Region directory discovery.
///
/// [`WorldScanner`](scan::WorldScanner) is the seam; [`RegionDirScanner`](scan::RegionDirScanner)
/// reads `r.<x>.<z>.mca` names from disk.
pub mod scan;

/// [`WorldOptions`](settings::WorldOptions) and the constants behind its defaults.
pub mod settings;

pub use args::{ParseOutcome, parse_args};
pub use error::SettingsError;
pub use resolve::resolve;
pub use settings::WorldOptions;
