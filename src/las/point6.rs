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

//! Defines the core of the extended Point Formats (6 to 10)

use num_traits::clamp;

use crate::packers::Packable;

/// Scan angle unit of the extended formats, in degrees.
pub const SCAN_ANGLE_SCALE: f32 = 0.006;

/// The 30 bytes shared by point formats 6 to 10.
#[derive(Default, Copy, Clone, Debug, PartialEq)]
pub struct Point6 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub intensity: u16,

    // return number: 4 bits
    // number of returns: 4 bits
    pub bit_fields: u8,

    // classification flags: 4 bits
    // scanner channel: 2 bits
    // scan direction: 1 bit
    // edge of flight line: 1 bit
    pub flags: u8,

    pub classification: u8,
    pub user_data: u8,
    pub scan_angle: i16,
    pub point_source_id: u16,
    pub gps_time: f64,
}

impl Point6 {
    pub const SIZE: usize = 30;

    const SYNTHETIC_MASK: u8 = 0b0000_0001;
    const KEY_POINT_MASK: u8 = 0b0000_0010;
    const WITHHELD_MASK: u8 = 0b0000_0100;
    const OVERLAP_MASK: u8 = 0b0000_1000;

    pub fn return_number(&self) -> u8 {
        self.bit_fields & 0b0000_1111
    }

    pub fn number_of_returns_of_given_pulse(&self) -> u8 {
        (self.bit_fields & 0b1111_0000) >> 4
    }

    pub fn classification_flags(&self) -> u8 {
        self.flags & 0b0000_1111
    }

    pub fn synthetic(&self) -> bool {
        self.flags & Self::SYNTHETIC_MASK != 0
    }

    pub fn key_point(&self) -> bool {
        self.flags & Self::KEY_POINT_MASK != 0
    }

    pub fn withheld(&self) -> bool {
        self.flags & Self::WITHHELD_MASK != 0
    }

    pub fn overlap(&self) -> bool {
        self.flags & Self::OVERLAP_MASK != 0
    }

    pub fn scanner_channel(&self) -> u8 {
        (self.flags & 0b0011_0000) >> 4
    }

    pub fn scan_direction_flag(&self) -> bool {
        self.flags & 0b0100_0000 != 0
    }

    pub fn edge_of_flight_line(&self) -> bool {
        self.flags & 0b1000_0000 != 0
    }

    pub fn scan_angle_degrees(&self) -> f32 {
        SCAN_ANGLE_SCALE * f32::from(self.scan_angle)
    }

    /// Number of returns as it would be stored in a legacy (3 bits) field.
    pub fn legacy_number_of_returns(&self) -> u8 {
        self.number_of_returns_of_given_pulse().min(7)
    }

    /// Return number as it would be stored in a legacy (3 bits) field.
    ///
    /// When the pulse has more than 7 returns, the first 4 keep their number
    /// and the last ones are squeezed into 5, 6 and 7.
    pub fn legacy_return_number(&self) -> u8 {
        let number_of_returns = self.number_of_returns_of_given_pulse();
        let return_number = self.return_number();
        if number_of_returns <= 7 {
            return_number.min(7)
        } else if return_number <= 4 {
            return_number
        } else {
            let return_count_difference =
                i16::from(number_of_returns) - i16::from(return_number);
            if return_count_difference <= 0 {
                7
            } else if return_count_difference >= 3 {
                4
            } else {
                7 - return_count_difference as u8
            }
        }
    }

    /// The scan angle rounded to whole degrees and clamped to an i8.
    pub fn legacy_scan_angle_rank(&self) -> i8 {
        let degrees = self.scan_angle_degrees().round() as i32;
        clamp(degrees, i32::from(i8::MIN), i32::from(i8::MAX)) as i8
    }

    pub fn set_number_of_returns(&mut self, new_val: u8) {
        self.bit_fields ^= self.bit_fields & 0b1111_0000;
        self.bit_fields |= (new_val << 4) & 0b1111_0000;
    }

    pub fn set_return_number(&mut self, new_val: u8) {
        self.bit_fields ^= self.bit_fields & 0b0000_1111;
        self.bit_fields |= new_val & 0b0000_1111;
    }

    pub fn set_scanner_channel(&mut self, new_val: u8) {
        self.flags ^= self.flags & 0b0011_0000;
        self.flags |= (new_val << 4) & 0b0011_0000;
    }
}

impl Packable for Point6 {
    fn unpack_from(input: &[u8]) -> Self {
        assert!(
            input.len() >= Point6::SIZE,
            "Point6::unpack_from expected buffer of {} bytes",
            Point6::SIZE
        );
        Self {
            x: i32::unpack_from(&input[0..4]),
            y: i32::unpack_from(&input[4..8]),
            z: i32::unpack_from(&input[8..12]),
            intensity: u16::unpack_from(&input[12..14]),
            bit_fields: input[14],
            flags: input[15],
            classification: input[16],
            user_data: input[17],
            scan_angle: i16::unpack_from(&input[18..20]),
            point_source_id: u16::unpack_from(&input[20..22]),
            gps_time: f64::unpack_from(&input[22..30]),
        }
    }

    fn pack_into(&self, output: &mut [u8]) {
        assert!(
            output.len() >= Point6::SIZE,
            "Point6::pack_into expected buffer of {} bytes",
            Point6::SIZE
        );
        self.x.pack_into(&mut output[0..4]);
        self.y.pack_into(&mut output[4..8]);
        self.z.pack_into(&mut output[8..12]);
        self.intensity.pack_into(&mut output[12..14]);
        output[14] = self.bit_fields;
        output[15] = self.flags;
        output[16] = self.classification;
        output[17] = self.user_data;
        self.scan_angle.pack_into(&mut output[18..20]);
        self.point_source_id.pack_into(&mut output[20..22]);
        self.gps_time.pack_into(&mut output[22..30]);
    }
}
