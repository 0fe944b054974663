//! Typed, read-only access to the fields of LAS point data records.
//!
//! A [`PointRecord`] is one point decoded from its binary LAS representation,
//! in any of the point formats 0 to 10.
//! [`PointRecordView`] is what users should read points through: it gives a
//! named accessor for every field of the LAS specification, decodes the bit packed
//! fields and hides the differences between the legacy (0 to 5) and the
//! extended (6 to 10) formats.
//!
//! # Examples
//!
//! ```
//! use laspoint::las::{LasWavepacket, PointFormat, PointRecord};
//!
//! # fn main() -> laspoint::Result<()> {
//! let format = PointFormat::new(4)?;
//! let mut point = PointRecord::new(format);
//! point.set_gps_time(42.0);
//! point.set_wavepacket(LasWavepacket {
//!     descriptor_index: 1,
//!     offset: 60,
//!     size: 128,
//!     ..Default::default()
//! });
//!
//! let view = point.view();
//! assert_eq!(view.gps_time(), 42.0);
//! if view.has_wave_packet() {
//!     assert_eq!(view.byte_offset_to_waveform_data(), 60);
//!     assert_eq!(view.waveform_packet_size_in_bytes(), 128);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Points of a stream are read with a [`PointRecordReader`], points already in
//! memory can be decoded with [`decode_buffer`].
//!
//! # Parallelism
//!
//! This crates has an optional feature 'parallel'.
//! When using this feature, [`par_decode_buffer`] is exposed.
//!
//! [`PointRecord`]: las/record/struct.PointRecord.html
//! [`PointRecordView`]: las/view/struct.PointRecordView.html
//! [`PointRecordReader`]: las/reader/struct.PointRecordReader.html
//! [`decode_buffer`]: las/reader/fn.decode_buffer.html
//! [`par_decode_buffer`]: las/reader/fn.par_decode_buffer.html

pub mod errors;
pub mod las;
pub mod packers;

pub use errors::{LasPointError, Result};
#[cfg(feature = "parallel")]
pub use las::par_decode_buffer;
pub use las::{decode_buffer, PointFormat, PointRecord, PointRecordReader, PointRecordView};
