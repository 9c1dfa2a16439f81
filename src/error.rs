//! Error types for the placeholder value model.
//!
//! Every failure in this crate is a contract violation raised synchronously at
//! the call site: an empty payload, an out-of-range magnitude, or an
//! unrecognized unit selector. There are no recoverable runtime failures and
//! no retries; a failed call leaves the value it was invoked on unchanged.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for value construction and mutation.
pub type ValueResult<T> = Result<T, ValueError>;

/// Invalid-argument errors raised by the value model.
#[derive(Debug, Error)]
pub enum ValueError {
    /// Image resource constructed from an empty byte payload.
    #[error("image resource payload is empty")]
    EmptyImageData,

    /// File extension maps to no supported image format.
    #[error("file extension '{extension}' maps to no supported image format")]
    UnsupportedImageFormat { extension: String },

    /// Reading image bytes from disk failed.
    #[error("failed to read image file '{path}'")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Width passed to the dimension API was zero, negative, or NaN.
    #[error("parameter 'width' value {value} must be > 0")]
    NonPositiveWidth { value: f64 },

    /// Height passed to the dimension API was zero, negative, or NaN.
    #[error("parameter 'height' value {value} must be > 0")]
    NonPositiveHeight { value: f64 },

    /// Unit selector names no supported unit of length.
    #[error("unknown unit of length '{name}'")]
    UnknownUnit { name: String },
}
