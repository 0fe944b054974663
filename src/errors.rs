//! Definitions of error related things.

use std::fmt;

/// Errors of this crate
#[derive(Debug)]
#[non_exhaustive]
pub enum LasPointError {
    /// The point format id is not one of 0..=10
    UnsupportedPointFormat(u8),
    /// The buffer given to decode a record is shorter than
    /// the record length of the point format
    BufferTooSmall { buffer_len: usize, record_len: usize },
    /// The point size (record length + extra bytes) is smaller than
    /// the record length of the point format
    PointSizeTooSmall { point_size: usize, record_len: usize },
    BufferLenNotMultipleOfPointSize {
        buffer_len: usize,
        point_size: usize,
    },
    /// A wave packet field was requested on a point that has none.
    MissingWavePacket,
    /// Wrapper around and io error from the std lib
    IoError(std::io::Error),
}

impl From<std::io::Error> for LasPointError {
    fn from(e: std::io::Error) -> Self {
        LasPointError::IoError(e)
    }
}

impl fmt::Display for LasPointError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LasPointError::UnsupportedPointFormat(id) => {
                write!(f, "Point format {} is not supported", id)
            }
            LasPointError::BufferTooSmall {
                buffer_len,
                record_len,
            } => write!(
                f,
                "The buffer ({} bytes) is too small to hold a point record of {} bytes",
                buffer_len, record_len
            ),
            LasPointError::PointSizeTooSmall {
                point_size,
                record_len,
            } => write!(
                f,
                "The point size ({}) is smaller than the record length of the format ({})",
                point_size, record_len
            ),
            LasPointError::BufferLenNotMultipleOfPointSize {
                buffer_len: bl,
                point_size: ps,
            } => write!(
                f,
                "The len of the buffer ({}) is not a multiple of the point size {}",
                bl, ps
            ),
            LasPointError::MissingWavePacket => {
                write!(f, "The point does not have a wave packet")
            }
            LasPointError::IoError(e) => write!(f, "IoError: {}", e),
        }
    }
}

impl std::error::Error for LasPointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LasPointError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LasPointError>;
