use std::collections::TryReserveError;

use thiserror::Error;

/// Everything that can go wrong while building a scene or writing a frame.
///
/// Rendering itself never fails: every ray either hits a sphere or resolves
/// to the background colour.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to grow {collection} collection")]
    Allocation {
        collection: &'static str,
        #[source]
        source: TryReserveError,
    },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("malformed scene manifest: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid sphere #{index}: {reason}")]
    InvalidSphere { index: usize, reason: String },
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
