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

//! Defines the GpsTime component of the legacy point formats 1, 3, 4 and 5

use crate::packers::Packable;

/// Struct to store GpsTime
///
/// The extended formats store it inside their core,
/// see [`Point6`](../point6/struct.Point6.html).
#[derive(Default, Copy, Clone, Debug, PartialEq)]
pub struct GpsTime {
    pub value: f64,
}

impl GpsTime {
    pub const SIZE: usize = 8;
}

impl From<f64> for GpsTime {
    fn from(value: f64) -> Self {
        Self { value }
    }
}

impl From<GpsTime> for f64 {
    fn from(gps: GpsTime) -> Self {
        gps.value
    }
}

impl Packable for GpsTime {
    fn unpack_from(input: &[u8]) -> Self {
        Self {
            value: f64::unpack_from(input),
        }
    }

    fn pack_into(&self, output: &mut [u8]) {
        self.value.pack_into(output)
    }
}
