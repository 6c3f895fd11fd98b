use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a single logo conversion run
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("failed to load image from {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode PNG")]
    Encode {
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
