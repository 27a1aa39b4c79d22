/// a color channel byte that can carry one hidden bit
pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for &mut u8 {
    #[inline(always)]
    fn hide_bit(self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

/// reads the hidden bit back from a color channel byte
pub trait UnveilBit {
    fn unveil_bit(self) -> bool;
}

impl UnveilBit for &u8 {
    #[inline(always)]
    fn unveil_bit(self) -> bool {
        *self & 1 == 1
    }
}
