/// A contiguous run of bits inside a 32-bit word, identified by the
/// index of its least significant bit (0 = rightmost) and its width.
///
/// The word is treated as unsigned throughout; there is no sign
/// extension anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    lsb: u32,
    width: u32,
}

impl BitField {
    /// Builds the half-open bit range `[lsb, lsb + width)`.
    ///
    /// A zero width is legal and denotes the empty field.
    ///
    /// # Panics
    ///
    /// Panics when the range does not fit in a 32-bit word.
    #[must_use]
    pub const fn new(lsb: u32, width: u32) -> Self {
        assert!(
            lsb <= 32 && width <= 32 - lsb,
            "bit field must fit in a 32-bit word"
        );
        Self { lsb, width }
    }

    #[must_use]
    pub const fn lsb(self) -> u32 {
        self.lsb
    }

    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// A word with `width` contiguous one-bits starting at `lsb`.
    ///
    /// Zero for the empty field; may span all 32 bits.
    #[must_use]
    pub const fn mask(self) -> u32 {
        // Computed in 64 bits so a full-word field does not overflow
        // the shift.
        (((1_u64 << self.width) - 1) << self.lsb) as u32
    }

    /// Forces every bit of the field in `value` to 0, leaving all
    /// other bits unchanged.
    #[must_use]
    pub const fn clear(self, value: u32) -> u32 {
        value & !self.mask()
    }

    /// Replaces the field in `dst` with the low `width` bits of `src`,
    /// leaving all other bits of `dst` unchanged.
    #[must_use]
    pub const fn insert(self, dst: u32, src: u32) -> u32 {
        let mask = self.mask();
        (dst & !mask) | (src.wrapping_shl(self.lsb) & mask)
    }

    /// Reads the field out of `value`, moved down to bit 0 and
    /// zero-extended.
    #[must_use]
    pub const fn extract(self, value: u32) -> u32 {
        (value & self.mask()).wrapping_shr(self.lsb)
    }
}
