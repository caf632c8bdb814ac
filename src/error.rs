use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for per-file extraction.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Reasons a single input file can fail to yield a position.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Path does not exist or cannot be opened.
    #[error("cannot read file: {0}")]
    FileUnreadable(#[from] std::io::Error),

    /// File has no parseable EXIF block.
    #[error("no EXIF metadata: {0}")]
    NoMetadataContainer(#[source] exif::Error),

    /// EXIF block present but the GPS tags are not.
    #[error("no GPS position recorded")]
    NoLocationData,

    /// GPS tags present but unusable.
    #[error("malformed GPS tag: {reason}")]
    MalformedCoordinate { reason: String },
}

impl ExtractError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedCoordinate {
            reason: reason.into(),
        }
    }
}

/// An extraction failure tied to the file it came from. Returned when the
/// abort policy is in effect and a single bad file stops the whole run.
#[derive(Error, Debug)]
#[error("{}: {source}", .path.display())]
pub struct FileError {
    pub path: PathBuf,
    #[source]
    pub source: ExtractError,
}
