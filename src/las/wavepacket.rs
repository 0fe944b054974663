use crate::packers::Packable;

/// ASPRS definition of wavepacket data.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct LasWavepacket {
    pub descriptor_index: u8,
    // offset in bytes to waveform data
    pub offset: u64,
    // in bytes
    pub size: u32,
    pub return_point: f32,
    // parametric line equation of the waveform
    pub dx: f32,
    pub dy: f32,
    pub dz: f32,
}

impl LasWavepacket {
    pub const SIZE: usize = 29;

    pub fn descriptor_index(&self) -> u8 {
        self.descriptor_index
    }

    pub fn byte_offset_to_waveform_data(&self) -> u64 {
        self.offset
    }

    pub fn waveform_packet_size_in_bytes(&self) -> u32 {
        self.size
    }

    pub fn return_point_waveform_location(&self) -> f32 {
        self.return_point
    }

    pub fn xt(&self) -> f32 {
        self.dx
    }

    pub fn yt(&self) -> f32 {
        self.dy
    }

    pub fn zt(&self) -> f32 {
        self.dz
    }
}

impl Packable for LasWavepacket {
    fn unpack_from(input: &[u8]) -> Self {
        assert!(
            input.len() >= LasWavepacket::SIZE,
            "LasWavepacket::unpack_from expected buffer of {} bytes",
            LasWavepacket::SIZE
        );
        Self {
            descriptor_index: u8::unpack_from(&input[0..1]),
            offset: u64::unpack_from(&input[1..9]),
            size: u32::unpack_from(&input[9..13]),
            return_point: f32::unpack_from(&input[13..17]),
            dx: f32::unpack_from(&input[17..21]),
            dy: f32::unpack_from(&input[21..25]),
            dz: f32::unpack_from(&input[25..29]),
        }
    }

    fn pack_into(&self, output: &mut [u8]) {
        assert!(
            output.len() >= LasWavepacket::SIZE,
            "LasWavepacket::pack_into expected buffer of {} bytes",
            LasWavepacket::SIZE
        );
        self.descriptor_index.pack_into(&mut output[0..1]);
        self.offset.pack_into(&mut output[1..9]);
        self.size.pack_into(&mut output[9..13]);
        self.return_point.pack_into(&mut output[13..17]);
        self.dx.pack_into(&mut output[17..21]);
        self.dy.pack_into(&mut output[21..25]);
        self.dz.pack_into(&mut output[25..29]);
    }
}
