//! Reconciling the requested area with what is actually on disk.

use tracing::{debug, info};

use crate::boundary::HorizontalBounds;
use crate::error::SettingsError;
use crate::scan::WorldScanner;
use crate::settings::WorldOptions;

const INVERTED_HORIZONTAL: &str = "-from X Z has to be <= -to X Z";
const INVERTED_VERTICAL: &str = "-min Y has to be <= -max Y";
const OUTSIDE_SAVED_DATA: &str = "the requested area lies outside the saved regions";

/// Finalize parsed options against the saved world.
///
/// With no `-from`/`-to` the whole saved world is taken. Otherwise the
/// request is cropped to the saved data, so nothing outside it is ever drawn.
/// On error the options are dropped; there is no partially resolved state.
pub fn resolve(
    mut opts: WorldOptions,
    scanner: &dyn WorldScanner,
) -> Result<WorldOptions, SettingsError> {
    let region_dir = opts.region_dir();
    let found = scanner.scan(&region_dir);
    debug!(dir = %region_dir.display(), ?found, "discovered extent");

    if let Some(requested) = opts.boundary.extent() {
        if !requested.is_ordered() {
            return Err(SettingsError::NothingToRender {
                reason: INVERTED_HORIZONTAL,
            });
        }
    }

    let HorizontalBounds::Defined(existing) = found else {
        return Err(SettingsError::EmptyWorld { region_dir });
    };

    let area = match opts.boundary.horizontal {
        HorizontalBounds::Undefined => {
            opts.whole_world = true;
            existing
        }
        HorizontalBounds::Defined(mut requested) => {
            requested.crop(&existing);
            requested
        }
    };
    opts.boundary.horizontal = HorizontalBounds::Defined(area);

    // The request itself was ordered, so an inverted crop means no overlap.
    if !area.is_ordered() {
        return Err(SettingsError::NothingToRender {
            reason: OUTSIDE_SAVED_DATA,
        });
    }
    if opts.boundary.max_y < opts.boundary.min_y {
        return Err(SettingsError::NothingToRender {
            reason: INVERTED_VERTICAL,
        });
    }

    let length = area.length_x();
    if i64::from(opts.splits) > length {
        return Err(SettingsError::TooManySplits { max: length });
    }

    info!(
        dimension = %opts.dimension,
        area = %area,
        min_y = opts.boundary.min_y,
        max_y = opts.boundary.max_y,
        whole_world = opts.whole_world,
        "resolved render area"
    );
    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{ParseOutcome, parse_args};
    use crate::boundary::Extent;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    /// Returns a fixed extent and remembers where it was asked to look.
    struct FixedScanner {
        found: HorizontalBounds,
        seen: RefCell<Vec<PathBuf>>,
    }

    impl FixedScanner {
        fn new(found: HorizontalBounds) -> Self {
            Self {
                found,
                seen: RefCell::new(Vec::new()),
            }
        }

        fn extent(min_x: i32, max_x: i32, min_z: i32, max_z: i32) -> Self {
            Self::new(HorizontalBounds::Defined(Extent::new(min_x, max_x, min_z, max_z)))
        }
    }

    impl WorldScanner for FixedScanner {
        fn scan(&self, region_dir: &Path) -> HorizontalBounds {
            self.seen.borrow_mut().push(region_dir.to_path_buf());
            self.found
        }
    }

    fn parsed(tokens: &[&str]) -> WorldOptions {
        let args: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        match parse_args(&args, WorldOptions::default()).expect("parse") {
            ParseOutcome::Options(opts) => *opts,
            ParseOutcome::Help => panic!("unexpected help"),
        }
    }

    fn area(opts: &WorldOptions) -> Extent {
        *opts.boundary.extent().expect("resolved area")
    }

    #[test]
    fn adopts_discovered_extent_without_from_to() {
        for (min_x, max_x, min_z, max_z) in [(0, 511, 0, 511), (-1024, 2047, -3, 9), (7, 7, 7, 7)] {
            let scanner = FixedScanner::extent(min_x, max_x, min_z, max_z);
            let opts = resolve(parsed(&[]), &scanner).expect("resolve");
            assert_eq!(area(&opts), Extent::new(min_x, max_x, min_z, max_z));
            assert!(opts.whole_world);
        }
    }

    #[test]
    fn crops_request_to_discovered_extent() {
        let scanner = FixedScanner::extent(-5, 5, -5, 5);
        let opts = resolve(parsed(&["-from", "-10", "-10", "-to", "10", "10"]), &scanner)
            .expect("resolve");
        assert_eq!(area(&opts), Extent::new(-5, 5, -5, 5));
        assert!(!opts.whole_world);
    }

    #[test]
    fn keeps_request_inside_discovered_extent() {
        let scanner = FixedScanner::extent(-100, 100, -100, 100);
        let opts = resolve(parsed(&["-from", "-1", "2", "-to", "3", "4"]), &scanner)
            .expect("resolve");
        assert_eq!(area(&opts), Extent::new(-1, 3, 2, 4));
    }

    #[test]
    fn single_corner_extends_to_saved_data() {
        let scanner = FixedScanner::extent(-50, 50, -60, 60);
        let opts = resolve(parsed(&["-from", "0", "0"]), &scanner).expect("resolve");
        assert_eq!(area(&opts), Extent::new(0, 50, 0, 60));

        let opts = resolve(parsed(&["-to", "10", "-10"]), &scanner).expect("resolve");
        assert_eq!(area(&opts), Extent::new(-50, 10, -60, -10));
    }

    #[test]
    fn inverted_request_is_nothing_to_render() {
        let expected = SettingsError::NothingToRender {
            reason: INVERTED_HORIZONTAL,
        };
        for scanner in [
            FixedScanner::extent(-5, 5, -5, 5),
            FixedScanner::extent(-1000, 1000, -1000, 1000),
            FixedScanner::new(HorizontalBounds::Undefined),
        ] {
            let err = resolve(parsed(&["-from", "5", "5", "-to", "0", "0"]), &scanner).unwrap_err();
            assert_eq!(err, expected);
        }
    }

    #[test]
    fn request_outside_saved_data_is_nothing_to_render() {
        let scanner = FixedScanner::extent(-5, 5, -5, 5);
        let err = resolve(parsed(&["-from", "100", "100", "-to", "200", "200"]), &scanner)
            .unwrap_err();
        assert_eq!(
            err,
            SettingsError::NothingToRender {
                reason: OUTSIDE_SAVED_DATA
            }
        );
        assert_eq!(
            err.to_string(),
            "Nothing to render: the requested area lies outside the saved regions"
        );

        // Overlapping on one axis only is still no overlap.
        let err = resolve(parsed(&["-from", "0", "100", "-to", "5", "200"]), &scanner).unwrap_err();
        assert_eq!(
            err,
            SettingsError::NothingToRender {
                reason: OUTSIDE_SAVED_DATA
            }
        );
    }

    #[test]
    fn inverted_heights_are_nothing_to_render() {
        let scanner = FixedScanner::extent(0, 15, 0, 15);
        let err = resolve(parsed(&["-min", "100", "-max", "50"]), &scanner).unwrap_err();
        assert_eq!(
            err,
            SettingsError::NothingToRender {
                reason: INVERTED_VERTICAL
            }
        );
        assert!(resolve(parsed(&["-min", "50", "-max", "50"]), &scanner).is_ok());
    }

    #[test]
    fn empty_world_is_reported() {
        let scanner = FixedScanner::new(HorizontalBounds::Undefined);
        let err = resolve(parsed(&[]), &scanner).unwrap_err();
        assert!(matches!(err, SettingsError::EmptyWorld { .. }));
    }

    #[test]
    fn split_count_is_bounded_by_length() {
        let scanner = FixedScanner::extent(0, 9, 0, 100);
        let err = resolve(parsed(&["-splits", "11"]), &scanner).unwrap_err();
        assert_eq!(err, SettingsError::TooManySplits { max: 10 });
        assert_eq!(err.to_string(), "Cannot split terrain in more than 10 units.");

        assert!(resolve(parsed(&["-splits", "10"]), &scanner).is_ok());
        assert!(resolve(parsed(&[]), &scanner).is_ok());

        let single = FixedScanner::extent(3, 3, 3, 3);
        assert!(resolve(parsed(&[]), &single).is_ok());
    }

    #[test]
    fn scans_region_dir_of_selected_dimension() {
        let scanner = FixedScanner::extent(0, 0, 0, 0);
        let mut opts = parsed(&["-end"]);
        opts.save_name = PathBuf::from("world");
        resolve(opts, &scanner).expect("resolve");
        assert_eq!(scanner.seen.borrow().as_slice(), [PathBuf::from("world/DIM1/region")]);
    }

    #[test]
    fn resolving_twice_is_identical() {
        let scanner = FixedScanner::extent(-300, 700, -20, 20);
        let tokens = ["-from", "-400", "0", "-to", "100", "900", "-shading", "-marker", "1", "2", "red"];
        let first = resolve(parsed(&tokens), &scanner).expect("first");
        let second = resolve(parsed(&tokens), &scanner).expect("second");
        assert_eq!(first, second);
    }
}
