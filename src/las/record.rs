//! A decoded point data record, of any of the point formats.

use std::io::{Read, Write};

use tracing::{debug, trace};

use crate::errors::{LasPointError, Result};
use crate::las::format::PointFormat;
use crate::las::gps::GpsTime;
use crate::las::nir::Nir;
use crate::las::point0::Point0;
use crate::las::point6::Point6;
use crate::las::rgb::RGB;
use crate::las::view::PointRecordView;
use crate::las::wavepacket::LasWavepacket;
use crate::packers::Packable;

/// The first bytes of every record, their layout
/// depends on the generation of the point format.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointCore {
    /// Formats 0 to 5
    Legacy(Point0),
    /// Formats 6 to 10
    Extended(Point6),
}

/// One point, decoded from its LAS binary representation.
///
/// Components that the format does not define are `None`,
/// bytes past the end of the format's record are kept as extra bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    format: PointFormat,
    core: PointCore,
    // only for the legacy formats, Point6 has its own
    gps_time: Option<GpsTime>,
    rgb: Option<RGB>,
    nir: Option<Nir>,
    wavepacket: Option<LasWavepacket>,
    extra_bytes: Vec<u8>,
}

fn unpack_component<T: Packable>(input: &[u8], offset: &mut usize, size: usize) -> T {
    let value = T::unpack_from(&input[*offset..*offset + size]);
    *offset += size;
    value
}

fn pack_component<T: Packable>(value: &T, output: &mut [u8], offset: &mut usize, size: usize) {
    value.pack_into(&mut output[*offset..*offset + size]);
    *offset += size;
}

impl PointRecord {
    /// Decodes a record from the bytes of one point.
    ///
    /// `input` must contain at least `format.record_len()` bytes,
    /// the remaining bytes are the extra bytes of the point.
    pub fn unpack_from(format: PointFormat, input: &[u8]) -> Result<Self> {
        let record_len = format.record_len();
        if input.len() < record_len {
            debug!(
                "Cannot decode point of format {}: got {} bytes, expected {}",
                format.id(),
                input.len(),
                record_len
            );
            return Err(LasPointError::BufferTooSmall {
                buffer_len: input.len(),
                record_len,
            });
        }

        let mut offset = 0usize;
        let core = if format.is_extended() {
            PointCore::Extended(unpack_component(input, &mut offset, Point6::SIZE))
        } else {
            PointCore::Legacy(unpack_component(input, &mut offset, Point0::SIZE))
        };
        let gps_time = if format.has_gps_time() && !format.is_extended() {
            Some(unpack_component(input, &mut offset, GpsTime::SIZE))
        } else {
            None
        };
        let rgb = if format.has_rgb() {
            Some(unpack_component(input, &mut offset, RGB::SIZE))
        } else {
            None
        };
        let nir = if format.has_nir() {
            Some(unpack_component(input, &mut offset, Nir::SIZE))
        } else {
            None
        };
        let wavepacket = if format.has_wavepacket() {
            Some(unpack_component(input, &mut offset, LasWavepacket::SIZE))
        } else {
            None
        };
        debug_assert_eq!(offset, record_len);

        Ok(Self {
            format,
            core,
            gps_time,
            rgb,
            nir,
            wavepacket,
            extra_bytes: input[record_len..].to_vec(),
        })
    }

    /// Reads exactly `point_size` bytes from the source and decodes them.
    pub fn read_from<R: Read>(format: PointFormat, point_size: usize, src: &mut R) -> Result<Self> {
        check_point_size(format, point_size)?;
        let mut buffer = vec![0u8; point_size];
        src.read_exact(&mut buffer)?;
        trace!("Read point of format {} ({} bytes)", format.id(), point_size);
        Self::unpack_from(format, &buffer)
    }

    /// Encodes the record, extra bytes included, into `output`.
    pub fn pack_into(&self, output: &mut [u8]) -> Result<()> {
        let point_size = self.point_size();
        if output.len() < point_size {
            return Err(LasPointError::BufferTooSmall {
                buffer_len: output.len(),
                record_len: point_size,
            });
        }

        let mut offset = 0usize;
        match &self.core {
            PointCore::Legacy(p) => pack_component(p, output, &mut offset, Point0::SIZE),
            PointCore::Extended(p) => pack_component(p, output, &mut offset, Point6::SIZE),
        }
        if let Some(gps_time) = &self.gps_time {
            pack_component(gps_time, output, &mut offset, GpsTime::SIZE);
        }
        if let Some(rgb) = &self.rgb {
            pack_component(rgb, output, &mut offset, RGB::SIZE);
        }
        if let Some(nir) = &self.nir {
            pack_component(nir, output, &mut offset, Nir::SIZE);
        }
        if let Some(wavepacket) = &self.wavepacket {
            pack_component(wavepacket, output, &mut offset, LasWavepacket::SIZE);
        }
        output[offset..point_size].copy_from_slice(&self.extra_bytes);
        Ok(())
    }

    pub fn write_to<W: Write>(&self, dst: &mut W) -> Result<()> {
        let mut buffer = vec![0u8; self.point_size()];
        self.pack_into(&mut buffer)?;
        dst.write_all(&buffer)?;
        Ok(())
    }

    /// A zeroed point, with all the components its format defines.
    pub fn new(format: PointFormat) -> Self {
        let core = if format.is_extended() {
            PointCore::Extended(Point6::default())
        } else {
            PointCore::Legacy(Point0::default())
        };
        Self {
            format,
            core,
            gps_time: if format.has_gps_time() && !format.is_extended() {
                Some(GpsTime::default())
            } else {
                None
            },
            rgb: if format.has_rgb() {
                Some(RGB::default())
            } else {
                None
            },
            nir: if format.has_nir() {
                Some(Nir::default())
            } else {
                None
            },
            wavepacket: if format.has_wavepacket() {
                Some(LasWavepacket::default())
            } else {
                None
            },
            extra_bytes: vec![],
        }
    }

    pub fn view(&self) -> PointRecordView<'_> {
        PointRecordView::wrap(self)
    }

    pub fn format(&self) -> PointFormat {
        self.format
    }

    pub fn core(&self) -> &PointCore {
        &self.core
    }

    /// The core of a point of format 0 to 5, `None` otherwise.
    pub fn legacy_mut(&mut self) -> Option<&mut Point0> {
        match &mut self.core {
            PointCore::Legacy(p) => Some(p),
            PointCore::Extended(_) => None,
        }
    }

    /// The core of a point of format 6 to 10, `None` otherwise.
    pub fn extended_mut(&mut self) -> Option<&mut Point6> {
        match &mut self.core {
            PointCore::Extended(p) => Some(p),
            PointCore::Legacy(_) => None,
        }
    }

    /// Replaces the core, returns false if its generation
    /// does not match the format.
    pub fn set_core(&mut self, new_val: PointCore) -> bool {
        let is_extended = matches!(new_val, PointCore::Extended(_));
        if is_extended != self.format.is_extended() {
            return false;
        }
        self.core = new_val;
        true
    }

    /// Record length of the format plus the extra bytes
    pub fn point_size(&self) -> usize {
        self.format.record_len() + self.extra_bytes.len()
    }

    pub fn gps_time(&self) -> Option<f64> {
        match &self.core {
            PointCore::Extended(p) => Some(p.gps_time),
            PointCore::Legacy(_) => self.gps_time.map(f64::from),
        }
    }

    pub fn rgb(&self) -> Option<&RGB> {
        self.rgb.as_ref()
    }

    pub fn nir(&self) -> Option<Nir> {
        self.nir
    }

    pub fn wavepacket(&self) -> Option<&LasWavepacket> {
        self.wavepacket.as_ref()
    }

    pub fn extra_bytes(&self) -> &[u8] {
        &self.extra_bytes
    }

    /// Sets the gps time, returns false if the format has none.
    pub fn set_gps_time(&mut self, new_val: f64) -> bool {
        match &mut self.core {
            PointCore::Extended(p) => {
                p.gps_time = new_val;
                true
            }
            PointCore::Legacy(_) => match &mut self.gps_time {
                Some(gps_time) => {
                    gps_time.value = new_val;
                    true
                }
                None => false,
            },
        }
    }

    /// Sets the colors, returns false if the format has none.
    pub fn set_rgb(&mut self, new_val: RGB) -> bool {
        match &mut self.rgb {
            Some(rgb) => {
                *rgb = new_val;
                true
            }
            None => false,
        }
    }

    /// Sets the near infrared, returns false if the format has none.
    pub fn set_nir(&mut self, new_val: u16) -> bool {
        match &mut self.nir {
            Some(nir) => {
                *nir = Nir(new_val);
                true
            }
            None => false,
        }
    }

    /// Sets the wave packet, returns false if the format has none.
    pub fn set_wavepacket(&mut self, new_val: LasWavepacket) -> bool {
        match &mut self.wavepacket {
            Some(wavepacket) => {
                *wavepacket = new_val;
                true
            }
            None => false,
        }
    }

    pub fn set_extra_bytes(&mut self, extra_bytes: Vec<u8>) {
        self.extra_bytes = extra_bytes;
    }
}

pub(crate) fn check_point_size(format: PointFormat, point_size: usize) -> Result<()> {
    let record_len = format.record_len();
    if point_size < record_len {
        debug!(
            "Point size {} is too small for point format {}",
            point_size,
            format.id()
        );
        Err(LasPointError::PointSizeTooSmall {
            point_size,
            record_len,
        })
    } else {
        Ok(())
    }
}
