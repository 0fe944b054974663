//! Decoding of many points, from a stream or from a buffer.

use std::io::{ErrorKind, Read};

use tracing::{debug, trace};

use crate::errors::{LasPointError, Result};
use crate::las::format::PointFormat;
use crate::las::record::{check_point_size, PointRecord};

/// Reads consecutive point records from a source positioned
/// at the start of the point data.
///
/// ```
/// use laspoint::las::{PointFormat, PointRecordReader};
/// use std::io::Cursor;
///
/// # fn main() -> laspoint::Result<()> {
/// let format = PointFormat::new(0)?;
/// let data = vec![0u8; 2 * format.record_len()];
/// let reader = PointRecordReader::new(Cursor::new(data), format, format.record_len())?;
/// let points = reader.collect::<laspoint::Result<Vec<_>>>()?;
/// assert_eq!(points.len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct PointRecordReader<R> {
    src: R,
    format: PointFormat,
    buffer: Vec<u8>,
    num_read: u64,
}

impl<R: Read> PointRecordReader<R> {
    /// `point_size` is the size of one record in the source,
    /// extra bytes included.
    pub fn new(src: R, format: PointFormat, point_size: usize) -> Result<Self> {
        check_point_size(format, point_size)?;
        Ok(Self {
            src,
            format,
            buffer: vec![0u8; point_size],
            num_read: 0,
        })
    }

    pub fn format(&self) -> PointFormat {
        self.format
    }

    pub fn point_size(&self) -> usize {
        self.buffer.len()
    }

    /// Number of points successfully read so far
    pub fn num_read(&self) -> u64 {
        self.num_read
    }

    /// Reads the next point.
    ///
    /// Returns `None` when the source ends exactly on a record boundary,
    /// a source that ends in the middle of a record is an error.
    pub fn read_next(&mut self) -> Option<Result<PointRecord>> {
        match self.fill_buffer() {
            Ok(false) => {
                debug!("End of points reached after {} points", self.num_read);
                None
            }
            Ok(true) => {
                let record = PointRecord::unpack_from(self.format, &self.buffer);
                if record.is_ok() {
                    self.num_read += 1;
                    trace!("Read point {}", self.num_read);
                }
                Some(record)
            }
            Err(e) => Some(Err(e)),
        }
    }

    pub fn into_inner(self) -> R {
        self.src
    }

    fn fill_buffer(&mut self) -> Result<bool> {
        let mut filled = 0usize;
        while filled < self.buffer.len() {
            match self.src.read(&mut self.buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        if filled == 0 {
            Ok(false)
        } else if filled < self.buffer.len() {
            debug!(
                "Truncated point: got {} bytes out of {}",
                filled,
                self.buffer.len()
            );
            Err(LasPointError::IoError(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "the source ended in the middle of a point record",
            )))
        } else {
            Ok(true)
        }
    }
}

impl<R: Read> Iterator for PointRecordReader<R> {
    type Item = Result<PointRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next()
    }
}

fn check_buffer_len(buffer_len: usize, point_size: usize) -> Result<()> {
    if buffer_len % point_size != 0 {
        Err(LasPointError::BufferLenNotMultipleOfPointSize {
            buffer_len,
            point_size,
        })
    } else {
        Ok(())
    }
}

/// Decodes all the points contained in the buffer.
///
/// The length of `points_data` must be a multiple of `point_size`.
pub fn decode_buffer(
    format: PointFormat,
    point_size: usize,
    points_data: &[u8],
) -> Result<Vec<PointRecord>> {
    check_point_size(format, point_size)?;
    check_buffer_len(points_data.len(), point_size)?;
    debug!(
        "Decoding {} points of format {}",
        points_data.len() / point_size,
        format.id()
    );
    points_data
        .chunks_exact(point_size)
        .map(|point_data| PointRecord::unpack_from(format, point_data))
        .collect()
}

/// Decodes all the points contained in the buffer in parallel.
///
/// Just like [`decode_buffer`] but the decoding is done using multiple threads
///
/// # Note
///
/// Point order is conserved
///
/// [`decode_buffer`]: fn.decode_buffer.html
#[cfg(feature = "parallel")]
pub fn par_decode_buffer(
    format: PointFormat,
    point_size: usize,
    points_data: &[u8],
) -> Result<Vec<PointRecord>> {
    use rayon::prelude::*;

    check_point_size(format, point_size)?;
    check_buffer_len(points_data.len(), point_size)?;
    debug!(
        "Decoding {} points of format {} in parallel",
        points_data.len() / point_size,
        format.id()
    );
    points_data
        .par_chunks_exact(point_size)
        .map(|point_data| PointRecord::unpack_from(format, point_data))
        .collect()
}
