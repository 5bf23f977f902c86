use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ShapeError>;

#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("failed to read model '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed model document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Raised instead of emitting a box with unbounded coordinates.
    #[error("model contains no geometry")]
    NoGeometry,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
