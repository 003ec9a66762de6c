//! The KEY3..0 pushbuttons.
//!
//! A pressed key reads as a 1 in the data register. The edge capture
//! register latches presses until cleared by writing the captured bits
//! back.

use super::RegisterWindow;
use crate::{address_map, memory::MemoryMapper, Result};

const DATA: usize = 0;
const INTERRUPT_MASK: usize = 2;
const EDGE_CAPTURE: usize = 3;

pub const KEY_COUNT: usize = 4;
const KEY_BITS: u32 = (1 << KEY_COUNT) - 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Key0,
    Key1,
    Key2,
    Key3,
}

impl Key {
    pub const ALL: [Key; KEY_COUNT] = [Key::Key0, Key::Key1, Key::Key2, Key::Key3];

    pub fn bit(self) -> u32 {
        1 << self as u32
    }
}

pub struct Pushbuttons<'a> {
    regs: RegisterWindow<'a>,
}

impl<'a> Pushbuttons<'a> {
    pub(crate) fn new<M: MemoryMapper>(memory: &'a M) -> Result<Self> {
        Ok(Self {
            regs: RegisterWindow::new(memory, address_map::KEY_OFFSET, 4)?,
        })
    }

    /// Current state of all keys, one bit per key, pressed high.
    pub fn state(&self) -> u32 {
        self.regs.read(DATA) & KEY_BITS
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.state() & key.bit() != 0
    }

    /// Takes the presses latched since the last call.
    ///
    /// Clears exactly the bits that were observed, so a press landing
    /// between the read and the clear is kept for the next call.
    pub fn take_edges(&mut self) -> u32 {
        let captured = self.regs.read(EDGE_CAPTURE) & KEY_BITS;
        if captured != 0 {
            self.regs.write(EDGE_CAPTURE, captured);
        }
        captured
    }

    /// Masks or unmasks the per-key interrupt sources.
    ///
    /// Nothing in this crate handles interrupts; this exists to park the
    /// mask in a known state.
    pub fn set_interrupt_mask(&mut self, mask: u32) {
        self.regs.write(INTERRUPT_MASK, mask & KEY_BITS);
    }
}
