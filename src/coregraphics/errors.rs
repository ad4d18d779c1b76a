//! Custom error types for the native image adapter

use std::fmt;
use std::io;

/// Errors raised while probing, seeking, or reading a native image container
#[derive(Debug)]
pub enum ImageIoError {
    /// I/O error
    IoError(io::Error),
    /// The path is not a container the native decoder recognizes
    InvalidContainer(String),
    /// Requested page index is past the container's page count
    PageNotFound { page: usize, page_count: usize },
    /// Negative index, unsupported mip level or malformed row range
    InvalidArgument(String),
    /// Bits per component outside {8, 16, 32}
    UnsupportedSampleDepth(u32),
    /// Container-reported row stride disagrees with the computed layout
    StrideMismatch { expected: usize, reported: usize },
    /// Requested row window exceeds the decoded buffer
    OutOfRange { start: usize, length: usize, available: usize },
    /// Type identifier absent from the extension table (diagnostic only)
    UnknownTypeIdentifier(String),
    /// The native decoder failed to produce an existing page
    DecodeFailed { page: usize },
    /// The native decoder failed to hand over the raw pixel buffer
    PixelDataUnavailable,
    /// No container is open
    NotOpen,
    /// A failed re-decode left the handle unusable until it is closed
    InvalidState,
    /// Configuration could not be parsed
    Config(String),
}

impl fmt::Display for ImageIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageIoError::IoError(e) => write!(f, "I/O error: {}", e),
            ImageIoError::InvalidContainer(path) => write!(f, "Not a readable image container: {}", path),
            ImageIoError::PageNotFound { page, page_count } => {
                write!(f, "Page {} not found (container has {} pages)", page, page_count)
            }
            ImageIoError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ImageIoError::UnsupportedSampleDepth(bits) => {
                write!(f, "Unsupported bits per component: {}", bits)
            }
            ImageIoError::StrideMismatch { expected, reported } => write!(
                f,
                "Row stride mismatch: layout needs {} bytes per row, container reports {}",
                expected, reported
            ),
            ImageIoError::OutOfRange { start, length, available } => write!(
                f,
                "Requested data out of range: {} bytes at offset {} (buffer holds {})",
                length, start, available
            ),
            ImageIoError::UnknownTypeIdentifier(uti) => write!(f, "Unknown type identifier: '{}'", uti),
            ImageIoError::DecodeFailed { page } => write!(f, "Native decoder failed on page {}", page),
            ImageIoError::PixelDataUnavailable => write!(f, "Native decoder returned no pixel data"),
            ImageIoError::NotOpen => write!(f, "No image container is open"),
            ImageIoError::InvalidState => {
                write!(f, "Image container is in an invalid state; close it before reuse")
            }
            ImageIoError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ImageIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageIoError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ImageIoError {
    fn from(error: io::Error) -> Self {
        ImageIoError::IoError(error)
    }
}

/// Result type for adapter operations
pub type ImageIoResult<T> = Result<T, ImageIoError>;
