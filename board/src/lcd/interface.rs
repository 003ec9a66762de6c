//! Wire driver for the ST7565 class controller on the LCD module.
//!
//! The module hangs off an expansion port; command and data bytes are
//! bit-banged most-significant-bit first over a chip select, an A0
//! (command/data) line, a clock and a data line.

use super::{Framebuffer, PAGES, WIDTH};
use crate::devices::expansion_port::ExpansionPort;
use tracing::debug;

// Pin assignments on the expansion port.
const PIN_SCLK: u8 = 0;
const PIN_MOSI: u8 = 1;
const PIN_CS_N: u8 = 2;
const PIN_A0: u8 = 3;
const PIN_RST_N: u8 = 4;
const PIN_BACKLIGHT: u8 = 5;

const PIN_MASK: u32 = 0b11_1111;

// ST7565 command set, as far as this module needs it.
const CMD_SOFT_RESET: u8 = 0xE2;
const CMD_BIAS_1_9: u8 = 0xA2;
const CMD_ADC_NORMAL: u8 = 0xA0;
const CMD_COM_REVERSED: u8 = 0xC8;
const CMD_RESISTOR_RATIO: u8 = 0x27;
const CMD_VOLUME_MODE: u8 = 0x81;
const CMD_VOLUME_VALUE: u8 = 0x10;
const CMD_POWER_ALL_ON: u8 = 0x2F;
const CMD_DISPLAY_ON: u8 = 0xAF;
const CMD_DISPLAY_OFF: u8 = 0xAE;
const CMD_PAGE_BASE: u8 = 0xB0;
const CMD_COLUMN_HIGH_BASE: u8 = 0x10;
const CMD_COLUMN_LOW_BASE: u8 = 0x00;
const CMD_START_LINE_0: u8 = 0x40;

pub struct LcdInterface<'a> {
    port: ExpansionPort<'a>,
}

impl<'a> LcdInterface<'a> {
    /// Takes over the port, driving the LCD pins as outputs in their idle
    /// state (deselected, not in reset).
    pub fn new(mut port: ExpansionPort<'a>) -> Self {
        port.set_directions(PIN_MASK);
        port.set_pin(PIN_CS_N, true);
        port.set_pin(PIN_RST_N, true);
        port.set_pin(PIN_SCLK, false);

        Self { port }
    }

    /// Resets the controller and runs the panel's init sequence.
    pub fn init(&mut self) {
        debug!("initialising LCD controller");

        self.port.set_pin(PIN_RST_N, false);
        self.port.set_pin(PIN_RST_N, true);

        for command in [
            CMD_SOFT_RESET,
            CMD_BIAS_1_9,
            CMD_ADC_NORMAL,
            CMD_COM_REVERSED,
            CMD_RESISTOR_RATIO,
            CMD_VOLUME_MODE,
            CMD_VOLUME_VALUE,
            CMD_POWER_ALL_ON,
            CMD_START_LINE_0,
            CMD_DISPLAY_ON,
        ] {
            self.command(command);
        }
    }

    pub fn backlight(&mut self, on: bool) {
        self.port.set_pin(PIN_BACKLIGHT, on);
    }

    pub fn display_off(&mut self) {
        self.command(CMD_DISPLAY_OFF);
    }

    /// Streams the whole frame to the panel, page by page.
    pub fn refresh(&mut self, frame: &Framebuffer) {
        for page in 0..PAGES {
            self.command(CMD_PAGE_BASE | page as u8);
            self.command(CMD_COLUMN_HIGH_BASE);
            self.command(CMD_COLUMN_LOW_BASE);

            for column in 0..WIDTH as usize {
                self.data(frame.page(page)[column]);
            }
        }
    }

    fn command(&mut self, byte: u8) {
        self.transfer(byte, false);
    }

    fn data(&mut self, byte: u8) {
        self.transfer(byte, true);
    }

    fn transfer(&mut self, byte: u8, is_data: bool) {
        self.port.set_pin(PIN_A0, is_data);
        self.port.set_pin(PIN_CS_N, false);

        for bit in (0..8).rev() {
            self.port.set_pin(PIN_SCLK, false);
            self.port.set_pin(PIN_MOSI, byte & (1 << bit) != 0);
            self.port.set_pin(PIN_SCLK, true);
        }

        self.port.set_pin(PIN_SCLK, false);
        self.port.set_pin(PIN_CS_N, true);
    }
}
