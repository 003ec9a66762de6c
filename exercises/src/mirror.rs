//! The entered value is shown in two places at once: the external
//! decoder on JP1's low pins and the HEX0 display.

use de1soc_board::devices::{expansion_port::ExpansionPort, seven_segment::SevenSegment};

pub fn show(jp1: &mut ExpansionPort<'_>, hex: &mut SevenSegment<'_>, value: u32) {
    jp1.write(value);
    hex.show_low_digit(value as u8);
}

pub fn clear(jp1: &mut ExpansionPort<'_>, hex: &mut SevenSegment<'_>) {
    jp1.write(0);
    hex.clear();
}
