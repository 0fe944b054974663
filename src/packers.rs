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

//! Little endian (un)packing of the fixed size fields found in LAS point records.

use byteorder::{ByteOrder, LittleEndian};

/// Types that have a fixed size little endian representation in a point record.
///
/// Both functions panic if the slice is shorter than the packed size
/// of the type.
pub trait Packable: Sized {
    fn unpack_from(input: &[u8]) -> Self;
    fn pack_into(&self, output: &mut [u8]);
}

macro_rules! impl_packable_for_num {
    ($type:ty, $size:literal, $read:ident, $write:ident) => {
        impl Packable for $type {
            fn unpack_from(input: &[u8]) -> Self {
                assert!(
                    input.len() >= $size,
                    concat!(stringify!($type), "::unpack_from expected a buffer of ", $size, " bytes")
                );
                LittleEndian::$read(input)
            }

            fn pack_into(&self, output: &mut [u8]) {
                assert!(
                    output.len() >= $size,
                    concat!(stringify!($type), "::pack_into expected a buffer of ", $size, " bytes")
                );
                LittleEndian::$write(output, *self)
            }
        }
    };
}

impl_packable_for_num!(u16, 2, read_u16, write_u16);
impl_packable_for_num!(i16, 2, read_i16, write_i16);
impl_packable_for_num!(u32, 4, read_u32, write_u32);
impl_packable_for_num!(i32, 4, read_i32, write_i32);
impl_packable_for_num!(u64, 8, read_u64, write_u64);
impl_packable_for_num!(f32, 4, read_f32, write_f32);
impl_packable_for_num!(f64, 8, read_f64, write_f64);

impl Packable for u8 {
    fn unpack_from(input: &[u8]) -> Self {
        input[0]
    }

    fn pack_into(&self, output: &mut [u8]) {
        output[0] = *self;
    }
}

impl Packable for i8 {
    fn unpack_from(input: &[u8]) -> Self {
        input[0] as i8
    }

    fn pack_into(&self, output: &mut [u8]) {
        output[0] = *self as u8;
    }
}
