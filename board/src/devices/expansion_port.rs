//! The JP1/JP2 expansion ports.
//!
//! Each port is a 32 bit parallel GPIO block: data register at +0 and a
//! direction register at +4 (1 = output). The exercises drive their lower
//! four bits as outputs into an external 7-segment decoder; the LCD flush
//! path bit-bangs single pins.

use super::RegisterWindow;
use crate::{memory::MemoryMapper, Result};
use tracing::debug;

const DATA: usize = 0;
const DIRECTION: usize = 1;

pub struct ExpansionPort<'a> {
    regs: RegisterWindow<'a>,
}

impl<'a> ExpansionPort<'a> {
    pub(crate) fn new<M: MemoryMapper>(memory: &'a M, offset: usize) -> Result<Self> {
        Ok(Self {
            regs: RegisterWindow::new(memory, offset, 2)?,
        })
    }

    /// Configures pin directions; a set bit makes that pin an output.
    pub fn set_directions(&mut self, outputs: u32) {
        debug!("expansion port direction mask: {outputs:#010x}");
        self.regs.write(DIRECTION, outputs);
    }

    pub fn directions(&self) -> u32 {
        self.regs.read(DIRECTION)
    }

    pub fn write(&mut self, bits: u32) {
        self.regs.write(DATA, bits);
    }

    pub fn read(&self) -> u32 {
        self.regs.read(DATA)
    }

    /// Drives a single output pin, leaving the rest of the port alone.
    pub fn set_pin(&mut self, pin: u8, high: bool) {
        let mask = 1u32 << pin;
        let current = self.regs.read(DATA);
        let next = if high { current | mask } else { current & !mask };
        self.regs.write(DATA, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{address_map, memory::SliceMapper, Board};

    #[test]
    fn direction_and_data_are_separate_registers() {
        let board = Board::new(SliceMapper::new(address_map::LW_BRIDGE_SPAN));

        let mut jp1 = board.jp1().unwrap();
        jp1.set_directions(0x0000_000F);
        jp1.write(0b1010);

        assert_eq!(board.memory().peek(address_map::JP1_OFFSET + 4), 0xF);
        assert_eq!(board.memory().peek(address_map::JP1_OFFSET), 0b1010);
        assert_eq!(jp1.directions(), 0xF);
        assert_eq!(jp1.read(), 0b1010);
    }

    #[test]
    fn set_pin_read_modify_writes() {
        let board = Board::new(SliceMapper::new(address_map::LW_BRIDGE_SPAN));

        let mut jp2 = board.jp2().unwrap();
        jp2.write(0b0001);
        jp2.set_pin(3, true);
        assert_eq!(jp2.read(), 0b1001);

        jp2.set_pin(0, false);
        assert_eq!(jp2.read(), 0b1000);
    }

    #[test]
    fn jp1_and_jp2_do_not_alias() {
        let board = Board::new(SliceMapper::new(address_map::LW_BRIDGE_SPAN));

        let mut jp1 = board.jp1().unwrap();
        let mut jp2 = board.jp2().unwrap();
        jp1.write(0x1);
        jp2.write(0x2);

        assert_eq!(board.memory().peek(address_map::JP1_OFFSET), 0x1);
        assert_eq!(board.memory().peek(address_map::JP2_OFFSET), 0x2);
    }
}
