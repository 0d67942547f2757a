//! The render request as it is built up by the parser and the resolver.

use std::path::PathBuf;

use crate::boundary::CoordinateBoundary;
use crate::dimension::Dimension;
use crate::markers::MarkerRegistry;

pub const MIN_TERRAIN_HEIGHT: i32 = 0;
pub const MAX_TERRAIN_HEIGHT: i32 = 255;

pub const MIB: u64 = 1024 * 1024;
pub const DEFAULT_MEM_LIMIT_MB: u64 = 2000;

pub const DEFAULT_OUTPUT: &str = "output.png";
pub const DEFAULT_COLORS: &str = "colors.json";
pub const DEFAULT_PADDING: u16 = 5;
pub const DEFAULT_SPLITS: u16 = 1;

/// Vertical pixel offset between two block layers in the isometric view.
pub const OFFSET_Y: i32 = 3;

/// Everything the renderer needs to know about one job.
///
/// Built once with defaults, mutated in place by [`crate::args`], then
/// consumed and finalized by [`crate::resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldOptions {
    pub save_name: PathBuf,
    pub out_file: PathBuf,
    pub color_file: PathBuf,

    pub dimension: Dimension,
    pub boundary: CoordinateBoundary,
    pub splits: u16,

    pub padding: u16,
    pub hide_water: bool,
    pub hide_beacons: bool,
    pub shading: bool,

    pub markers: MarkerRegistry,

    pub offset_y: i32,
    /// Bytes.
    pub mem_limit: u64,
    pub mem_limit_set: bool,
    /// Set by the resolver when no area was requested and the whole saved
    /// world was taken instead.
    pub whole_world: bool,
}

impl Default for WorldOptions {
    fn default() -> Self {
        Self {
            save_name: PathBuf::new(),
            out_file: PathBuf::from(DEFAULT_OUTPUT),
            color_file: PathBuf::from(DEFAULT_COLORS),
            dimension: Dimension::overworld(),
            boundary: CoordinateBoundary::default(),
            splits: DEFAULT_SPLITS,
            padding: DEFAULT_PADDING,
            hide_water: false,
            hide_beacons: false,
            shading: false,
            markers: MarkerRegistry::new(),
            offset_y: OFFSET_Y,
            mem_limit: DEFAULT_MEM_LIMIT_MB * MIB,
            mem_limit_set: false,
            whole_world: false,
        }
    }
}

impl WorldOptions {
    /// Directory holding the `r.X.Z.mca` files of the selected dimension.
    pub fn region_dir(&self) -> PathBuf {
        self.save_name.join(self.dimension.region_subpath())
    }

    pub fn set_mem_limit_mb(&mut self, megabytes: u64) {
        self.mem_limit = megabytes.saturating_mul(MIB);
        self.mem_limit_set = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults() {
        let opts = WorldOptions::default();
        assert_eq!(opts.out_file, Path::new("output.png"));
        assert_eq!(opts.color_file, Path::new("colors.json"));
        assert_eq!(opts.splits, 1);
        assert_eq!(opts.padding, 5);
        assert_eq!(opts.offset_y, 3);
        assert_eq!(opts.mem_limit, 2000 * 1024 * 1024);
        assert!(!opts.mem_limit_set);
        assert!(opts.boundary.is_undefined());
        assert!(opts.markers.is_empty());
    }

    #[test]
    fn region_dir_joins_save_and_dimension() {
        let mut opts = WorldOptions {
            save_name: PathBuf::from("saves/World"),
            ..WorldOptions::default()
        };
        assert_eq!(opts.region_dir(), Path::new("saves/World/region"));
        opts.dimension = Dimension::nether();
        assert_eq!(opts.region_dir(), Path::new("saves/World/DIM-1/region"));
    }

    #[test]
    fn mem_limit_is_recorded_in_bytes() {
        let mut opts = WorldOptions::default();
        opts.set_mem_limit_mb(512);
        assert_eq!(opts.mem_limit, 512 * MIB);
        assert!(opts.mem_limit_set);
    }
}
