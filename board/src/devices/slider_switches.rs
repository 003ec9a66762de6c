//! The SW9..0 slider switches.

use super::RegisterWindow;
use crate::{address_map, memory::MemoryMapper, Result};

pub const SWITCH_COUNT: usize = 10;
const SWITCH_BITS: u32 = (1 << SWITCH_COUNT) - 1;

/// The exercises read SW3..0 as a 4 bit binary number.
const NIBBLE_BITS: u32 = 0x0F;

pub struct SliderSwitches<'a> {
    regs: RegisterWindow<'a>,
}

impl<'a> SliderSwitches<'a> {
    pub(crate) fn new<M: MemoryMapper>(memory: &'a M) -> Result<Self> {
        Ok(Self {
            regs: RegisterWindow::new(memory, address_map::SW_OFFSET, 1)?,
        })
    }

    /// State of all ten switches, one bit per switch, up is high.
    pub fn state(&self) -> u32 {
        self.regs.read(0) & SWITCH_BITS
    }

    /// The value entered on SW3..0.
    pub fn low_nibble(&self) -> u32 {
        self.regs.read(0) & NIBBLE_BITS
    }

    pub fn is_on(&self, switch: usize) -> bool {
        assert!(switch < SWITCH_COUNT);
        self.state() & (1 << switch) != 0
    }
}
