//! Error types for gust-headers
//!
//! The value grammar itself is lenient and never fails. These errors only
//! cover cursor construction and the `http` crate boundary.

use thiserror::Error;

/// Result type alias for gust-headers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for header value handling
#[derive(Debug, Error)]
pub enum Error {
    /// Cursor bounds are inverted or exceed the buffer
    #[error("Invalid cursor range: {lower}..{upper} over buffer of {len} bytes")]
    InvalidCursor { lower: usize, upper: usize, len: usize },

    /// Cursor bound splits a multi-byte character
    #[error("Cursor bound {0} is not on a char boundary")]
    CharBoundary(usize),

    /// Header value contains bytes that are not visible ASCII
    #[cfg(feature = "http")]
    #[error("Header value is not visible ASCII text")]
    NonTextValue(#[from] http::header::ToStrError),

    /// Formatted output cannot be carried in a header value
    #[cfg(feature = "http")]
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}
