//! Points of interest drawn on top of the map.

use crate::error::SettingsError;

pub const MAX_MARKERS: usize = 256;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    pub x: i32,
    pub z: i32,
    /// Opaque to this crate; the renderer reads it as a color name.
    pub label: String,
}

/// Append-only list of markers, at most [`MAX_MARKERS`] long.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkerRegistry {
    markers: Vec<Marker>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: i32, z: i32, label: impl Into<String>) -> Result<(), SettingsError> {
        if self.markers.len() >= MAX_MARKERS {
            return Err(SettingsError::TooManyMarkers { limit: MAX_MARKERS });
        }
        self.markers.push(Marker {
            x,
            z,
            label: label.into(),
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }
}

impl<'a> IntoIterator for &'a MarkerRegistry {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_up_to_limit() {
        let mut registry = MarkerRegistry::new();
        for i in 0..MAX_MARKERS {
            registry
                .push(i as i32, -(i as i32), format!("label{i}"))
                .expect("below limit");
        }
        assert_eq!(registry.len(), MAX_MARKERS);
        for (i, marker) in registry.iter().enumerate() {
            assert_eq!(marker.x, i as i32);
            assert_eq!(marker.z, -(i as i32));
            assert_eq!(marker.label, format!("label{i}"));
        }
    }

    #[test]
    fn rejects_marker_past_limit() {
        let mut registry = MarkerRegistry::new();
        for _ in 0..MAX_MARKERS {
            registry.push(0, 0, "red").expect("below limit");
        }
        let err = registry.push(1, 1, "blue").unwrap_err();
        assert!(matches!(err, SettingsError::TooManyMarkers { limit: 256 }));
        assert_eq!(registry.len(), MAX_MARKERS);
        assert_eq!(registry.as_slice().last().map(|m| m.label.as_str()), Some("red"));
    }
}
