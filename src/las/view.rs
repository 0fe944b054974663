//! Read-only, typed access to the fields of a decoded point.
//!
//! [`PointRecordView`] hides the differences between the point formats:
//! the bit packing of the return fields, where the classification flags
//! live, and which optional components the format has.
//! Every scalar field can be read for every format, fields that a format
//! does not define read as zero.
//!
//! The only exception is the wave packet: its accessors must only be called
//! when [`has_wave_packet`] returns `true`, calling them otherwise is a
//! programming error and panics.
//!
//! ```
//! use laspoint::las::{PointFormat, PointRecord};
//!
//! # fn main() -> laspoint::Result<()> {
//! let format = PointFormat::new(1)?;
//! let mut bytes = vec![0u8; format.record_len()];
//! bytes[14] = 0b0001_0010; // return 2 of 2
//! bytes[15] = 0b1010_0010; // ground, synthetic and withheld
//! let record = PointRecord::unpack_from(format, &bytes)?;
//!
//! let view = record.view();
//! assert_eq!(view.return_number(), 2);
//! assert_eq!(view.number_of_returns(), 2);
//! assert_eq!(view.classification(), 2);
//! assert!(view.is_synthetic());
//! assert!(!view.is_key_point());
//! assert!(view.is_withheld());
//! assert!(!view.has_wave_packet());
//! # Ok(())
//! # }
//! ```
//!
//! [`PointRecordView`]: struct.PointRecordView.html
//! [`has_wave_packet`]: struct.PointRecordView.html#method.has_wave_packet

use crate::errors::{LasPointError, Result};
use crate::las::format::PointFormat;
use crate::las::record::{PointCore, PointRecord};
use crate::las::wavepacket::LasWavepacket;

/// A view over one decoded point, it cannot outlive the point.
#[derive(Debug, Copy, Clone)]
pub struct PointRecordView<'a> {
    record: &'a PointRecord,
}

impl<'a> From<&'a PointRecord> for PointRecordView<'a> {
    fn from(record: &'a PointRecord) -> Self {
        Self::wrap(record)
    }
}

impl<'a> PointRecordView<'a> {
    pub fn wrap(record: &'a PointRecord) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &'a PointRecord {
        self.record
    }

    pub fn format(&self) -> PointFormat {
        self.record.format()
    }

    /// True for the formats 6 to 10
    pub fn is_extended(&self) -> bool {
        self.format().is_extended()
    }

    /// "X" as stored, not scaled nor offset
    pub fn x(&self) -> i32 {
        match self.record.core() {
            PointCore::Legacy(p) => p.x,
            PointCore::Extended(p) => p.x,
        }
    }

    /// "Y" as stored, not scaled nor offset
    pub fn y(&self) -> i32 {
        match self.record.core() {
            PointCore::Legacy(p) => p.y,
            PointCore::Extended(p) => p.y,
        }
    }

    /// "Z" as stored, not scaled nor offset
    pub fn z(&self) -> i32 {
        match self.record.core() {
            PointCore::Legacy(p) => p.z,
            PointCore::Extended(p) => p.z,
        }
    }

    pub fn intensity(&self) -> u16 {
        match self.record.core() {
            PointCore::Legacy(p) => p.intensity,
            PointCore::Extended(p) => p.intensity,
        }
    }

    /// "Return Number" on 3 bits, so in `0..=7`.
    ///
    /// For the extended formats (4 bits) the value is mapped the way
    /// LASzip maps it when it converts a point to a legacy format,
    /// see [`extended_return_number`] for the value as stored.
    ///
    /// [`extended_return_number`]: #method.extended_return_number
    pub fn return_number(&self) -> u8 {
        match self.record.core() {
            PointCore::Legacy(p) => p.return_number(),
            PointCore::Extended(p) => p.legacy_return_number(),
        }
    }

    /// "Number of Returns (given pulse)" on 3 bits, so in `0..=7`.
    ///
    /// For the extended formats the value saturates at 7,
    /// see [`extended_number_of_returns`] for the value as stored.
    ///
    /// [`extended_number_of_returns`]: #method.extended_number_of_returns
    pub fn number_of_returns(&self) -> u8 {
        match self.record.core() {
            PointCore::Legacy(p) => p.number_of_returns_of_given_pulse(),
            PointCore::Extended(p) => p.legacy_number_of_returns(),
        }
    }

    /// Return number on 4 bits for the extended formats, 3 bits otherwise.
    pub fn extended_return_number(&self) -> u8 {
        match self.record.core() {
            PointCore::Legacy(p) => p.return_number(),
            PointCore::Extended(p) => p.return_number(),
        }
    }

    /// Number of returns on 4 bits for the extended formats, 3 bits otherwise.
    pub fn extended_number_of_returns(&self) -> u8 {
        match self.record.core() {
            PointCore::Legacy(p) => p.number_of_returns_of_given_pulse(),
            PointCore::Extended(p) => p.number_of_returns_of_given_pulse(),
        }
    }

    /// "Scan Direction Flag", 0 or 1
    pub fn scan_direction_flag(&self) -> u8 {
        let flag = match self.record.core() {
            PointCore::Legacy(p) => p.scan_direction_flag(),
            PointCore::Extended(p) => p.scan_direction_flag(),
        };
        flag as u8
    }

    /// "Edge of Flight Line", 0 or 1
    pub fn edge_of_flight_line(&self) -> u8 {
        let flag = match self.record.core() {
            PointCore::Legacy(p) => p.edge_of_flight_line(),
            PointCore::Extended(p) => p.edge_of_flight_line(),
        };
        flag as u8
    }

    /// The class of the point, without the synthetic, key-point and withheld bits.
    ///
    /// 5 bits for the legacy formats, 8 bits for the extended ones.
    pub fn classification(&self) -> u8 {
        match self.record.core() {
            PointCore::Legacy(p) => p.classification(),
            PointCore::Extended(p) => p.classification,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        match self.record.core() {
            PointCore::Legacy(p) => p.synthetic(),
            PointCore::Extended(p) => p.synthetic(),
        }
    }

    pub fn is_key_point(&self) -> bool {
        match self.record.core() {
            PointCore::Legacy(p) => p.key_point(),
            PointCore::Extended(p) => p.key_point(),
        }
    }

    pub fn is_withheld(&self) -> bool {
        match self.record.core() {
            PointCore::Legacy(p) => p.withheld(),
            PointCore::Extended(p) => p.withheld(),
        }
    }

    /// Only the extended formats have the overlap flag.
    pub fn is_overlap(&self) -> bool {
        match self.record.core() {
            PointCore::Legacy(_) => false,
            PointCore::Extended(p) => p.overlap(),
        }
    }

    /// Only the extended formats have a scanner channel, 0 otherwise.
    pub fn scanner_channel(&self) -> u8 {
        match self.record.core() {
            PointCore::Legacy(_) => 0,
            PointCore::Extended(p) => p.scanner_channel(),
        }
    }

    /// "Scan Angle Rank (-90 to +90) - Left side", in whole degrees
    pub fn scan_angle_rank(&self) -> i8 {
        match self.record.core() {
            PointCore::Legacy(p) => p.scan_angle_rank,
            PointCore::Extended(p) => p.legacy_scan_angle_rank(),
        }
    }

    /// The scan angle in degrees, with the 0.006° precision of the
    /// extended formats when available.
    pub fn scan_angle_degrees(&self) -> f32 {
        match self.record.core() {
            PointCore::Legacy(p) => f32::from(p.scan_angle_rank),
            PointCore::Extended(p) => p.scan_angle_degrees(),
        }
    }

    pub fn user_data(&self) -> u8 {
        match self.record.core() {
            PointCore::Legacy(p) => p.user_data,
            PointCore::Extended(p) => p.user_data,
        }
    }

    pub fn point_source_id(&self) -> u16 {
        match self.record.core() {
            PointCore::Legacy(p) => p.point_source_id,
            PointCore::Extended(p) => p.point_source_id,
        }
    }

    pub fn has_gps_time(&self) -> bool {
        self.format().has_gps_time()
    }

    /// 0.0 for formats 0 and 2
    pub fn gps_time(&self) -> f64 {
        self.record.gps_time().unwrap_or(0.0)
    }

    pub fn has_rgb(&self) -> bool {
        self.format().has_rgb()
    }

    pub fn red(&self) -> u16 {
        self.record.rgb().map_or(0, |rgb| rgb.red)
    }

    pub fn green(&self) -> u16 {
        self.record.rgb().map_or(0, |rgb| rgb.green)
    }

    pub fn blue(&self) -> u16 {
        self.record.rgb().map_or(0, |rgb| rgb.blue)
    }

    pub fn has_nir(&self) -> bool {
        self.format().has_nir()
    }

    pub fn nir(&self) -> u16 {
        self.record.nir().map_or(0, |nir| nir.value())
    }

    pub fn extra_bytes(&self) -> &'a [u8] {
        self.record.extra_bytes()
    }

    pub fn has_wave_packet(&self) -> bool {
        self.record.wavepacket().is_some()
    }

    pub fn wave_packet(&self) -> Option<&'a LasWavepacket> {
        self.record.wavepacket()
    }

    pub fn try_wave_packet(&self) -> Result<&'a LasWavepacket> {
        self.record
            .wavepacket()
            .ok_or(LasPointError::MissingWavePacket)
    }

    fn ensure_wave_packet(&self) -> &'a LasWavepacket {
        match self.try_wave_packet() {
            Ok(wavepacket) => wavepacket,
            Err(e) => panic!("{}", e),
        }
    }

    /// "Wave Packet Descriptor Index"
    ///
    /// # Panics
    ///
    /// If the point has no wave packet.
    pub fn wave_packet_descriptor_index(&self) -> u8 {
        self.ensure_wave_packet().descriptor_index()
    }

    /// "Byte offset to waveform data"
    ///
    /// # Panics
    ///
    /// If the point has no wave packet.
    pub fn byte_offset_to_waveform_data(&self) -> u64 {
        self.ensure_wave_packet().byte_offset_to_waveform_data()
    }

    /// "Waveform packet size in bytes"
    ///
    /// # Panics
    ///
    /// If the point has no wave packet.
    pub fn waveform_packet_size_in_bytes(&self) -> u32 {
        self.ensure_wave_packet().waveform_packet_size_in_bytes()
    }

    /// "Return Point Waveform Location"
    ///
    /// # Panics
    ///
    /// If the point has no wave packet.
    pub fn return_point_waveform_location(&self) -> f32 {
        self.ensure_wave_packet().return_point_waveform_location()
    }

    /// "X(t)"
    ///
    /// # Panics
    ///
    /// If the point has no wave packet.
    pub fn xt(&self) -> f32 {
        self.ensure_wave_packet().xt()
    }

    /// "Y(t)"
    ///
    /// # Panics
    ///
    /// If the point has no wave packet.
    pub fn yt(&self) -> f32 {
        self.ensure_wave_packet().yt()
    }

    /// "Z(t)"
    ///
    /// # Panics
    ///
    /// If the point has no wave packet.
    pub fn zt(&self) -> f32 {
        self.ensure_wave_packet().zt()
    }
}
