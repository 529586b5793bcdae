use std::fmt::{self, Display};

use tracing::trace;

use crate::field::BitField;

/// Clears the whole word; the result is always zero.
pub const LOW_WORD: BitField = BitField::new(0, 32);

/// Clears the low half-word, keeping the high half-word.
pub const LOW_HALF: BitField = BitField::new(0, 16);

/// Clears bits 15 through 30, keeping bit 31 and bits 0 through 14.
pub const MID_16_AT_15: BitField = BitField::new(15, 16);

const DEMO_FIELDS: [BitField; 3] = [LOW_WORD, LOW_HALF, MID_16_AT_15];

/// One executed clear, kept together with its operands so it can be
/// rendered later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCase {
    pub input: u32,
    pub field: BitField,
    pub output: u32,
}

impl Display for DemoCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bfc({:#010x}, {}, {}) = {:#010x}",
            self.input,
            self.field.lsb(),
            self.field.width(),
            self.output
        )
    }
}

/// Applies the three demonstration clears to `input`, in table order.
#[must_use]
pub fn demonstrate(input: u32) -> [DemoCase; 3] {
    DEMO_FIELDS.map(|field| {
        let output = field.clear(input);
        trace!(
            lsb = field.lsb(),
            width = field.width(),
            "bfc {input:#010x} -> {output:#010x}"
        );

        DemoCase {
            input,
            field,
            output,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn demo_fields_are_the_documented_ones() {
        assert_eq!(LOW_WORD.mask(), 0xffff_ffff);
        assert_eq!(LOW_HALF.mask(), 0x0000_ffff);
        assert_eq!(MID_16_AT_15.mask(), 0x7fff_8000);
    }

    #[test]
    fn all_ones_input() {
        let [full, low, mid] = demonstrate(u32::MAX);

        assert_eq!(full.output, 0x0000_0000);
        assert_eq!(low.output, 0xffff_0000);
        assert_eq!(mid.output, 0x8000_7fff);
    }

    #[test]
    fn cases_render_as_driver_lines() {
        let lines = demonstrate(u32::MAX).map(|case| case.to_string());

        assert_eq!(
            lines,
            [
                "bfc(0xffffffff, 0, 32) = 0x00000000",
                "bfc(0xffffffff, 0, 16) = 0xffff0000",
                "bfc(0xffffffff, 15, 16) = 0x80007fff",
            ]
        );
    }

    #[test]
    fn zero_input_stays_zero() {
        for case in demonstrate(0) {
            assert_eq!(case.output, 0);
        }
    }
}
