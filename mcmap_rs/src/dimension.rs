//! Dimension identifiers and where each dimension keeps its region files.

use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_NAMESPACE: &str = "minecraft";

pub const OVERWORLD: &str = "overworld";
pub const THE_NETHER: &str = "the_nether";
pub const THE_END: &str = "the_end";

/// A sub-world with its own coordinate space, e.g. `minecraft:the_nether`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub namespace: String,
    pub id: String,
}

impl Dimension {
    pub fn new(namespace: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            id: id.into(),
        }
    }

    /// Parse `id` or `namespace:id`. Only the first `:` separates, so
    /// `a:b:c` is id `b:c` in namespace `a`.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((namespace, id)) => Self::new(namespace, id),
            None => Self::new(DEFAULT_NAMESPACE, raw),
        }
    }

    pub fn overworld() -> Self {
        Self::new(DEFAULT_NAMESPACE, OVERWORLD)
    }

    pub fn nether() -> Self {
        Self::new(DEFAULT_NAMESPACE, THE_NETHER)
    }

    pub fn end() -> Self {
        Self::new(DEFAULT_NAMESPACE, THE_END)
    }

    /// Region directory relative to the save folder.
    ///
    /// The three vanilla dimensions live at fixed legacy locations; anything
    /// else follows the `dimensions/<ns>/<id>/region` layout.
    pub fn region_subpath(&self) -> PathBuf {
        match self.id.as_str() {
            OVERWORLD => PathBuf::from("region"),
            THE_NETHER => PathBuf::from("DIM-1").join("region"),
            THE_END => PathBuf::from("DIM1").join("region"),
            _ => PathBuf::from("dimensions")
                .join(&self.namespace)
                .join(&self.id)
                .join("region"),
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::overworld()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}
