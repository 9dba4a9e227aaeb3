use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid target size {0} (must be a positive pixel count)")]
    InvalidSize(i32),
    #[error("Unknown resize direction: {0:?}")]
    UnknownDirection(String),
    #[error("Failed to encode {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
