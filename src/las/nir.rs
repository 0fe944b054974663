use crate::packers::Packable;

/// Near infrared channel of point formats 8 and 10
#[derive(Default, Copy, Clone, Debug, PartialOrd, PartialEq)]
pub struct Nir(pub u16);

impl Nir {
    pub const SIZE: usize = 2;

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl Packable for Nir {
    fn unpack_from(input: &[u8]) -> Self {
        Nir(u16::unpack_from(input))
    }

    fn pack_into(&self, output: &mut [u8]) {
        self.0.pack_into(output)
    }
}
