//! The LAS point data record formats, their components,
//! and the view over a decoded point.
pub mod format;
pub mod gps;
pub mod nir;
pub mod point0;
pub mod point6;
pub mod reader;
pub mod record;
pub mod rgb;
pub mod view;
pub mod wavepacket;

pub use crate::las::format::PointFormat;
pub use crate::las::gps::GpsTime;
pub use crate::las::nir::Nir;
pub use crate::las::point0::Point0;
pub use crate::las::point6::Point6;
#[cfg(feature = "parallel")]
pub use crate::las::reader::par_decode_buffer;
pub use crate::las::reader::{decode_buffer, PointRecordReader};
pub use crate::las::record::{PointCore, PointRecord};
pub use crate::las::rgb::RGB;
pub use crate::las::view::PointRecordView;
pub use crate::las::wavepacket::LasWavepacket;
