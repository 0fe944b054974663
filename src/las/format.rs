//! Description of the LAS point data record formats.

use std::convert::TryFrom;

use crate::errors::{LasPointError, Result};
use crate::las::gps::GpsTime;
use crate::las::nir::Nir;
use crate::las::point0::Point0;
use crate::las::point6::Point6;
use crate::las::rgb::RGB;
use crate::las::wavepacket::LasWavepacket;

/// One of the point data record formats (0 to 10) of the LAS specification.
///
/// The format determines which optional components follow the
/// core of the point, and in which order:
///
/// | id | components               |
/// |----|--------------------------|
/// | 0  | Point0                   |
/// | 1  | Point0 Gps               |
/// | 2  | Point0 RGB               |
/// | 3  | Point0 Gps RGB           |
/// | 4  | Point0 Gps Wavepacket    |
/// | 5  | Point0 Gps RGB Wavepacket|
/// | 6  | Point6                   |
/// | 7  | Point6 RGB               |
/// | 8  | Point6 RGB NIR           |
/// | 9  | Point6 Wavepacket        |
/// | 10 | Point6 RGB NIR Wavepacket|
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PointFormat {
    id: u8,
}

impl PointFormat {
    pub const MAX_ID: u8 = 10;

    pub fn new(id: u8) -> Result<Self> {
        if id > Self::MAX_ID {
            Err(LasPointError::UnsupportedPointFormat(id))
        } else {
            Ok(Self { id })
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// Formats 6 to 10, introduced in LAS 1.4, built on [`Point6`].
    ///
    /// [`Point6`]: ../point6/struct.Point6.html
    pub fn is_extended(&self) -> bool {
        self.id >= 6
    }

    pub fn has_gps_time(&self) -> bool {
        // Point6 always carries the gps time
        !matches!(self.id, 0 | 2)
    }

    pub fn has_rgb(&self) -> bool {
        matches!(self.id, 2 | 3 | 5 | 7 | 8 | 10)
    }

    pub fn has_nir(&self) -> bool {
        matches!(self.id, 8 | 10)
    }

    pub fn has_wavepacket(&self) -> bool {
        matches!(self.id, 4 | 5 | 9 | 10)
    }

    /// Size in bytes of a record of this format, without extra bytes.
    pub fn record_len(&self) -> usize {
        let mut len = if self.is_extended() {
            Point6::SIZE
        } else {
            Point0::SIZE
        };
        if self.has_gps_time() && !self.is_extended() {
            len += GpsTime::SIZE;
        }
        if self.has_rgb() {
            len += RGB::SIZE;
        }
        if self.has_nir() {
            len += Nir::SIZE;
        }
        if self.has_wavepacket() {
            len += LasWavepacket::SIZE;
        }
        len
    }
}

impl TryFrom<u8> for PointFormat {
    type Error = LasPointError;

    fn try_from(id: u8) -> Result<Self> {
        Self::new(id)
    }
}
