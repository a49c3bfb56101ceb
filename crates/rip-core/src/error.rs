//! Error types for rip-core

use thiserror::Error;

/// Result type for rip-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the RIP pipeline
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The source image could not be decoded.
    #[error("failed to load source image {path}: {source}")]
    ImageLoad {
        path: String,
        #[source]
        source: image::ImageError,
    },

    /// An ICC profile file is absent, unreadable, or not a valid profile.
    #[error("failed to open ICC profile {path}")]
    ProfileOpen { path: String },

    /// The color transform could not be constructed or applied.
    #[error("color transform failed: {0}")]
    ColorTransform(String),

    /// A blue-noise threshold mask file is missing or undecodable.
    #[error("failed to load threshold mask {path}: {source}")]
    MaskLoad {
        path: String,
        #[source]
        source: image::ImageError,
    },

    /// Output path not writable, short write, or other disk error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A pipeline operation was invoked out of order.
    #[error("pipeline operation invoked out of order: {0}")]
    State(&'static str),

    /// A size or consistency invariant was violated. Should be unreachable.
    #[error("internal invariant violated: {0}")]
    Internal(String),
}
