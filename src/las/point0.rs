/*
===============================================================================

  PROGRAMMERS:

    martin.isenburg@rapidlasso.com  -  http://rapidlasso.com
    uday.karan@gmail.com - Hobu, Inc.

  COPYRIGHT:

    (c) 2007-2014, martin isenburg, rapidlasso - tools to catch reality
    (c) 2014, Uday Verma, Hobu, Inc.
    (c) 2019, Thomas Montaigu

    This is free software; you can redistribute and/or modify it under the
    terms of the GNU Lesser General Licence as published by the Free Software
    Foundation. See the COPYING file for more information.

    This software is distributed WITHOUT ANY WARRANTY and without even the
    implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.

===============================================================================
*/

//! Defines the core of the legacy Point Formats (0 to 5)

use crate::packers::Packable;

/// The 20 bytes shared by point formats 0 to 5.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
pub struct Point0 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub intensity: u16,

    // return number: 3 bits
    // number of returns: 3 bits
    // scan direction: 1 bit
    // edge of flight line: 1 bit
    pub bit_fields: u8,

    // 5 bits for classification the rest are bit flags
    pub classification: u8,

    pub scan_angle_rank: i8,
    pub user_data: u8,
    pub point_source_id: u16,
}

impl Point0 {
    pub const SIZE: usize = 20;

    const SYNTHETIC_MASK: u8 = 0b0010_0000;
    const KEY_POINT_MASK: u8 = 0b0100_0000;
    const WITHHELD_MASK: u8 = 0b1000_0000;

    pub fn return_number(&self) -> u8 {
        self.bit_fields & 0x7
    }

    pub fn number_of_returns_of_given_pulse(&self) -> u8 {
        (self.bit_fields >> 3) & 0x7
    }

    pub fn scan_direction_flag(&self) -> bool {
        ((self.bit_fields >> 6) & 0x1) != 0
    }

    pub fn edge_of_flight_line(&self) -> bool {
        ((self.bit_fields >> 7) & 0x1) != 0
    }

    /// The class, without the 3 flag bits
    pub fn classification(&self) -> u8 {
        self.classification & 0x1F
    }

    pub fn synthetic(&self) -> bool {
        self.classification & Self::SYNTHETIC_MASK != 0
    }

    pub fn key_point(&self) -> bool {
        self.classification & Self::KEY_POINT_MASK != 0
    }

    pub fn withheld(&self) -> bool {
        self.classification & Self::WITHHELD_MASK != 0
    }

    pub fn set_bit_fields(
        &mut self,
        return_number: u8,
        number_of_returns: u8,
        scan_direction_flag: bool,
        edge_of_flight_line: bool,
    ) {
        self.bit_fields = ((edge_of_flight_line as u8) << 7)
            | ((scan_direction_flag as u8) << 6)
            | (number_of_returns & 0x7) << 3
            | (return_number & 0x7);
    }

    pub fn set_classification_and_flags(
        &mut self,
        classification: u8,
        synthetic: bool,
        key_point: bool,
        withheld: bool,
    ) {
        let mut byte = classification & 0x1F;
        if synthetic {
            byte |= Self::SYNTHETIC_MASK;
        }
        if key_point {
            byte |= Self::KEY_POINT_MASK;
        }
        if withheld {
            byte |= Self::WITHHELD_MASK;
        }
        self.classification = byte;
    }
}

impl Packable for Point0 {
    fn unpack_from(input: &[u8]) -> Self {
        assert!(
            input.len() >= Point0::SIZE,
            "Point0::unpack_from expected buffer of {} bytes",
            Point0::SIZE
        );
        Self {
            x: i32::unpack_from(&input[0..4]),
            y: i32::unpack_from(&input[4..8]),
            z: i32::unpack_from(&input[8..12]),
            intensity: u16::unpack_from(&input[12..14]),
            bit_fields: input[14],
            classification: input[15],
            scan_angle_rank: i8::unpack_from(&input[16..17]),
            user_data: input[17],
            point_source_id: u16::unpack_from(&input[18..20]),
        }
    }

    fn pack_into(&self, output: &mut [u8]) {
        assert!(
            output.len() >= Point0::SIZE,
            "Point0::pack_into expected buffer of {} bytes",
            Point0::SIZE
        );
        self.x.pack_into(&mut output[0..4]);
        self.y.pack_into(&mut output[4..8]);
        self.z.pack_into(&mut output[8..12]);
        self.intensity.pack_into(&mut output[12..14]);
        output[14] = self.bit_fields;
        output[15] = self.classification;
        self.scan_angle_rank.pack_into(&mut output[16..17]);
        output[17] = self.user_data;
        self.point_source_id.pack_into(&mut output[18..20]);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bit_fields() {
        let mut p = Point0::default();
        p.set_bit_fields(2, 3, true, false);
        assert_eq!(p.bit_fields, 0b0101_1010);
        assert_eq!(p.return_number(), 2);
        assert_eq!(p.number_of_returns_of_given_pulse(), 3);
        assert!(p.scan_direction_flag());
        assert!(!p.edge_of_flight_line());

        p.bit_fields = 0xFF;
        assert_eq!(p.return_number(), 7);
        assert_eq!(p.number_of_returns_of_given_pulse(), 7);
        assert!(p.edge_of_flight_line());
    }

    #[test]
    fn test_classification_flags_are_distinct_bits() {
        let mut p = Point0::default();
        p.set_classification_and_flags(2, false, true, false);
        assert_eq!(p.classification, 0b0100_0010);
        assert_eq!(p.classification(), 2);
        assert!(!p.synthetic());
        assert!(p.key_point());
        assert!(!p.withheld());

        p.set_classification_and_flags(31, true, false, true);
        assert_eq!(p.classification(), 31);
        assert!(p.synthetic());
        assert!(!p.key_point());
        assert!(p.withheld());
    }

    #[test]
    fn test_unpack_layout() {
        let mut buf = [0u8; Point0::SIZE];
        buf[0..4].copy_from_slice(&(-5i32).to_le_bytes());
        buf[12..14].copy_from_slice(&65535u16.to_le_bytes());
        buf[14] = 0b1001_0001;
        buf[15] = 0b1000_0110;
        buf[16] = (-90i8) as u8;
        buf[17] = 200;
        buf[18..20].copy_from_slice(&4242u16.to_le_bytes());

        let p = Point0::unpack_from(&buf);
        assert_eq!(p.x, -5);
        assert_eq!(p.intensity, 65535);
        assert_eq!(p.return_number(), 1);
        assert_eq!(p.number_of_returns_of_given_pulse(), 2);
        assert!(p.edge_of_flight_line());
        assert_eq!(p.classification(), 6);
        assert!(p.withheld());
        assert_eq!(p.scan_angle_rank, -90);
        assert_eq!(p.user_data, 200);
        assert_eq!(p.point_source_id, 4242);

        let mut out = [0u8; Point0::SIZE];
        p.pack_into(&mut out);
        assert_eq!(out, buf);
    }
}
