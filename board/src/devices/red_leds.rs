//! The LEDR9..0 red LEDs.

use super::RegisterWindow;
use crate::{address_map, memory::MemoryMapper, Result};

pub const LED_COUNT: usize = 10;
const LED_BITS: u32 = (1 << LED_COUNT) - 1;

pub struct RedLeds<'a> {
    regs: RegisterWindow<'a>,
}

impl<'a> RedLeds<'a> {
    pub(crate) fn new<M: MemoryMapper>(memory: &'a M) -> Result<Self> {
        Ok(Self {
            regs: RegisterWindow::new(memory, address_map::LEDR_OFFSET, 1)?,
        })
    }

    /// Lights the LEDs whose bits are set, one bit per LED.
    pub fn set(&mut self, bits: u32) {
        self.regs.write(0, bits & LED_BITS);
    }

    pub fn clear(&mut self) {
        self.set(0);
    }
}
