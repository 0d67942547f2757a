//! Discovery of the area a save actually covers.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::boundary::{Extent, HorizontalBounds};

/// Blocks along one side of a region file (32 chunks of 16 blocks).
pub const REGION_SIZE: i32 = 512;

static REGION_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^r\.(-?\d+)\.(-?\d+)\.mca$").expect("valid region regex"));

/// Reports which blocks of a dimension have stored data.
///
/// Never fails: a missing or empty directory is simply `Undefined`.
pub trait WorldScanner {
    fn scan(&self, region_dir: &Path) -> HorizontalBounds;
}

/// Reads region coordinates off `r.<x>.<z>.mca` file names.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegionDirScanner;

impl WorldScanner for RegionDirScanner {
    fn scan(&self, region_dir: &Path) -> HorizontalBounds {
        scan_world_directory(region_dir)
    }
}

/// Region coordinates encoded in a file name, if it is a region file.
pub fn region_coords(file_name: &str) -> Option<(i32, i32)> {
    let caps = REGION_FILE.captures(file_name)?;
    let x = caps.get(1)?.as_str().parse().ok()?;
    let z = caps.get(2)?.as_str().parse().ok()?;
    Some((x, z))
}

/// Block extent covered by one region.
pub fn region_extent(x: i32, z: i32) -> Extent {
    let start = |r: i32| r.saturating_mul(REGION_SIZE);
    let end = |r: i32| r.saturating_add(1).saturating_mul(REGION_SIZE).saturating_sub(1);
    Extent::new(start(x), end(x), start(z), end(z))
}

pub fn scan_world_directory(region_dir: &Path) -> HorizontalBounds {
    let mut found = HorizontalBounds::Undefined;
    if !region_dir.is_dir() {
        debug!(dir = %region_dir.display(), "no region directory");
        return found;
    }

    let mut regions = 0usize;
    for entry in WalkDir::new(region_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(dir = %region_dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some((x, z)) = entry.file_name().to_str().and_then(region_coords) else {
            continue;
        };
        // Freshly created regions can be zero bytes and hold no chunks.
        let empty = entry.metadata().map(|m| m.len() == 0).unwrap_or(true);
        if empty {
            debug!(file = %entry.path().display(), "skipping empty region");
            continue;
        }
        found.include(&region_extent(x, z));
        regions += 1;
    }

    debug!(dir = %region_dir.display(), regions, ?found, "scanned region directory");
    found
}
