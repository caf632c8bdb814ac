use std::path::{Path, PathBuf};

use geo::Point;
use log::{debug, warn};

pub mod error;
pub mod extractor;
pub mod output;

pub use error::{ExtractError, FileError};

/// What to do with a file that yields no usable position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the failure and keep going; the file contributes no feature.
    Skip,
    /// Stop the run on the first failure.
    Abort,
}

/// Extract the GPS position recorded in a single photo.
pub fn process_file(path: &Path) -> error::Result<Point<f64>> {
    extractor::extract_position(path)
}

/// Extract positions from all files in order, one file at a time.
///
/// The returned positions follow the input order, minus the files that
/// failed under the skip policy. Under the abort policy the first failure
/// is returned together with the offending path.
pub fn process_files(
    files: &[PathBuf],
    policy: FailurePolicy,
) -> Result<Vec<Point<f64>>, FileError> {
    let mut points = Vec::new();

    for file in files {
        match extractor::extract_position(file) {
            Ok(point) => {
                debug!(
                    "{}: position ({}, {})",
                    file.display(),
                    point.y(),
                    point.x()
                );
                points.push(point);
            }
            Err(source) => match policy {
                FailurePolicy::Abort => {
                    return Err(FileError {
                        path: file.clone(),
                        source,
                    })
                }
                FailurePolicy::Skip => warn!("{}: {}", file.display(), source),
            },
        }
    }

    Ok(points)
}
