//! Horizontal and vertical limits of the area to render.

use std::fmt;

use crate::settings::{MAX_TERRAIN_HEIGHT, MIN_TERRAIN_HEIGHT};

/// Which corner of the map ends up at the top of the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    NW,
    SW,
    NE,
    SE,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Orientation::NW => "NW",
            Orientation::SW => "SW",
            Orientation::NE => "NE",
            Orientation::SE => "SE",
        };
        f.write_str(label)
    }
}

/// Inclusive block rectangle on the X/Z plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent {
    pub min_x: i32,
    pub max_x: i32,
    pub min_z: i32,
    pub max_z: i32,
}

impl Extent {
    pub fn new(min_x: i32, max_x: i32, min_z: i32, max_z: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Everything; used as the starting point when only one corner is given.
    pub fn unbounded() -> Self {
        Self::new(i32::MIN, i32::MAX, i32::MIN, i32::MAX)
    }

    pub fn is_ordered(&self) -> bool {
        self.min_x <= self.max_x && self.min_z <= self.max_z
    }

    /// Number of blocks along X. Computed wide so `i32::MIN..=i32::MAX` fits.
    pub fn length_x(&self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x) + 1
    }

    pub fn length_z(&self) -> i64 {
        i64::from(self.max_z) - i64::from(self.min_z) + 1
    }

    /// Shrink to the part that also lies inside `other`.
    ///
    /// The result may come out inverted when the two do not overlap; callers
    /// check [`Extent::is_ordered`] afterwards.
    pub fn crop(&mut self, other: &Extent) {
        self.min_x = self.min_x.max(other.min_x);
        self.max_x = self.max_x.min(other.max_x);
        self.min_z = self.min_z.max(other.min_z);
        self.max_z = self.max_z.min(other.max_z);
    }

    /// Grow to also cover `other`.
    pub fn include(&mut self, other: &Extent) {
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_z = self.min_z.min(other.min_z);
        self.max_z = self.max_z.max(other.max_z);
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X {}..{}, Z {}..{}",
            self.min_x, self.max_x, self.min_z, self.max_z
        )
    }
}

/// Horizontal part of a boundary: either nothing was asked for yet, or a
/// concrete rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalBounds {
    #[default]
    Undefined,
    Defined(Extent),
}

impl HorizontalBounds {
    pub fn is_undefined(&self) -> bool {
        matches!(self, HorizontalBounds::Undefined)
    }

    pub fn extent(&self) -> Option<&Extent> {
        match self {
            HorizontalBounds::Undefined => None,
            HorizontalBounds::Defined(extent) => Some(extent),
        }
    }

    /// The current extent, or an unbounded one when nothing was set yet.
    fn extent_or_unbounded(&self) -> Extent {
        self.extent().copied().unwrap_or_else(Extent::unbounded)
    }

    /// Widen to also cover `other`.
    pub fn include(&mut self, other: &Extent) {
        match self {
            HorizontalBounds::Undefined => *self = HorizontalBounds::Defined(*other),
            HorizontalBounds::Defined(extent) => extent.include(other),
        }
    }
}

/// The selected area: horizontal rectangle, vertical slice and view direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoordinateBoundary {
    pub horizontal: HorizontalBounds,
    pub min_y: i32,
    pub max_y: i32,
    pub orientation: Orientation,
}

impl Default for CoordinateBoundary {
    fn default() -> Self {
        Self {
            horizontal: HorizontalBounds::Undefined,
            min_y: MIN_TERRAIN_HEIGHT,
            max_y: MAX_TERRAIN_HEIGHT,
            orientation: Orientation::default(),
        }
    }
}

impl CoordinateBoundary {
    /// `-from X Z`. The opposite corner stays unbounded until set or cropped.
    pub fn set_from(&mut self, x: i32, z: i32) {
        let mut extent = self.horizontal.extent_or_unbounded();
        extent.min_x = x;
        extent.min_z = z;
        self.horizontal = HorizontalBounds::Defined(extent);
    }

    /// `-to X Z`.
    pub fn set_to(&mut self, x: i32, z: i32) {
        let mut extent = self.horizontal.extent_or_unbounded();
        extent.max_x = x;
        extent.max_z = z;
        self.horizontal = HorizontalBounds::Defined(extent);
    }

    /// Floor of the vertical slice, never below the terrain floor.
    pub fn set_min_y(&mut self, y: i32) {
        self.min_y = y.max(MIN_TERRAIN_HEIGHT);
    }

    /// Ceiling of the vertical slice, never above the build limit.
    pub fn set_max_y(&mut self, y: i32) {
        self.max_y = y.min(MAX_TERRAIN_HEIGHT);
    }

    pub fn is_undefined(&self) -> bool {
        self.horizontal.is_undefined()
    }

    pub fn extent(&self) -> Option<&Extent> {
        self.horizontal.extent()
    }
}
