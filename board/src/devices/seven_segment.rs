//! The HEX5..0 7-segment displays.
//!
//! Each display occupies one byte of its bank register, segment `a` in
//! bit 0 through segment `g` in bit 6, lit high.

use super::RegisterWindow;
use crate::{address_map, memory::MemoryMapper, Result};

pub const DISPLAY_COUNT: usize = 6;

/// Segment patterns for the digits 0..=F.
const DIGIT_PATTERNS: [u8; 16] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, 0x77, 0x7C, 0x39, 0x5E, 0x79,
    0x71,
];

const BLANK: u8 = 0x00;

/// Segment pattern for a single hexadecimal digit (low nibble of `value`).
pub fn digit_pattern(value: u8) -> u8 {
    DIGIT_PATTERNS[(value & 0x0F) as usize]
}

pub struct SevenSegment<'a> {
    low: RegisterWindow<'a>,
    high: RegisterWindow<'a>,
}

impl<'a> SevenSegment<'a> {
    pub(crate) fn new<M: MemoryMapper>(memory: &'a M) -> Result<Self> {
        Ok(Self {
            low: RegisterWindow::new(memory, address_map::HEX3_HEX0_OFFSET, 1)?,
            high: RegisterWindow::new(memory, address_map::HEX5_HEX4_OFFSET, 1)?,
        })
    }

    /// Shows `value` in decimal on HEX3..0, leading zeros blanked.
    ///
    /// Values above 9999 wrap; the exercises keep their counters below
    /// that themselves.
    pub fn show_decimal(&mut self, value: u32) {
        let value = value % 10_000;

        let mut word = 0u32;
        let mut remainder = value;
        for position in 0..4 {
            let digit = (remainder % 10) as u8;
            let pattern = if position > 0 && remainder == 0 {
                BLANK
            } else {
                digit_pattern(digit)
            };
            word |= (pattern as u32) << (position * 8);
            remainder /= 10;
        }

        self.low.write(0, word);
    }

    /// Shows a single hexadecimal digit on HEX0, leaving HEX3..1 alone.
    pub fn show_low_digit(&mut self, value: u8) {
        let current = self.low.read(0);
        self.low
            .write(0, (current & 0xFFFF_FF00) | digit_pattern(value) as u32);
    }

    /// Blanks all six displays.
    pub fn clear(&mut self) {
        self.low.write(0, 0);
        self.high.write(0, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{memory::SliceMapper, Board};

    fn board() -> Board<SliceMapper> {
        Board::new(SliceMapper::new(address_map::LW_BRIDGE_SPAN))
    }

    #[test]
    fn digit_patterns_use_the_low_nibble() {
        assert_eq!(digit_pattern(0), 0x3F);
        assert_eq!(digit_pattern(8), 0x7F);
        assert_eq!(digit_pattern(0xF), 0x71);
        assert_eq!(digit_pattern(0x1F), 0x71);
    }

    #[test]
    fn decimal_blanks_leading_zeros() {
        let board = board();
        let mut hex = board.seven_segment().unwrap();

        hex.show_decimal(7);
        assert_eq!(
            board.memory().peek(address_map::HEX3_HEX0_OFFSET),
            digit_pattern(7) as u32
        );

        hex.show_decimal(90);
        assert_eq!(
            board.memory().peek(address_map::HEX3_HEX0_OFFSET),
            (digit_pattern(9) as u32) << 8 | digit_pattern(0) as u32
        );

        hex.show_decimal(1234);
        let expected = (digit_pattern(1) as u32) << 24
            | (digit_pattern(2) as u32) << 16
            | (digit_pattern(3) as u32) << 8
            | digit_pattern(4) as u32;
        assert_eq!(board.memory().peek(address_map::HEX3_HEX0_OFFSET), expected);
    }

    #[test]
    fn decimal_wraps_at_ten_thousand() {
        let board = board();
        let mut hex = board.seven_segment().unwrap();

        hex.show_decimal(10_001);
        assert_eq!(
            board.memory().peek(address_map::HEX3_HEX0_OFFSET),
            digit_pattern(1) as u32
        );
    }

    #[test]
    fn low_digit_preserves_the_other_displays() {
        let board = board();
        let mut hex = board.seven_segment().unwrap();

        hex.show_decimal(1234);
        hex.show_low_digit(0xA);

        let expected = (digit_pattern(1) as u32) << 24
            | (digit_pattern(2) as u32) << 16
            | (digit_pattern(3) as u32) << 8
            | digit_pattern(0xA) as u32;
        assert_eq!(board.memory().peek(address_map::HEX3_HEX0_OFFSET), expected);
    }

    #[test]
    fn clear_blanks_both_banks() {
        let board = board();
        let mut hex = board.seven_segment().unwrap();

        hex.show_decimal(8888);
        hex.clear();
        assert_eq!(board.memory().peek(address_map::HEX3_HEX0_OFFSET), 0);
        assert_eq!(board.memory().peek(address_map::HEX5_HEX4_OFFSET), 0);
    }
}
