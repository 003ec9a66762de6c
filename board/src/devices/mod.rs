//! Typed accessors for the lightweight bridge peripherals.

pub mod expansion_port;
pub mod pushbuttons;
pub mod red_leds;
pub mod seven_segment;
pub mod slider_switches;

use crate::{memory::MemoryMapper, Error, Result};
use std::{marker::PhantomData, ptr::NonNull};

/// A small run of 32 bit registers inside the mapped window.
///
/// Constructed from a borrow of the mapper, so a window can never outlive
/// the mapping it points into. All access is volatile.
pub(crate) struct RegisterWindow<'a> {
    base: NonNull<u32>,
    words: usize,
    _memory: PhantomData<&'a ()>,
}

impl<'a> RegisterWindow<'a> {
    pub(crate) fn new<M: MemoryMapper>(memory: &'a M, offset: usize, words: usize) -> Result<Self> {
        let len = words * 4;
        if offset + len > memory.len() {
            return Err(Error::WindowOutOfRange {
                offset,
                len,
                span: memory.len(),
            });
        }

        // In range per the check above, and the mapper keeps the region
        // alive for at least 'a.
        let base = unsafe { NonNull::new_unchecked(memory.as_ptr().add(offset).cast::<u32>()) };

        Ok(Self {
            base,
            words,
            _memory: PhantomData,
        })
    }

    pub(crate) fn read(&self, word: usize) -> u32 {
        assert!(word < self.words);
        unsafe { std::ptr::read_volatile(self.base.as_ptr().add(word)) }
    }

    pub(crate) fn write(&mut self, word: usize, value: u32) {
        assert!(word < self.words);
        unsafe {
            std::ptr::write_volatile(self.base.as_ptr().add(word), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::SliceMapper;

    #[test]
    fn window_must_fit_in_span() {
        let memory = SliceMapper::new(0x10);

        assert!(RegisterWindow::new(&memory, 0x0, 4).is_ok());
        assert!(matches!(
            RegisterWindow::new(&memory, 0x8, 4),
            Err(Error::WindowOutOfRange {
                offset: 0x8,
                len: 0x10,
                span: 0x10,
            })
        ));
    }

    #[test]
    fn reads_and_writes_land_at_the_window_offset() {
        let mut memory = SliceMapper::new(0x100);
        memory.poke(0x44, 0xDEAD_BEEF);

        let mut window = RegisterWindow::new(&memory, 0x40, 2).unwrap();
        assert_eq!(window.read(0), 0);
        assert_eq!(window.read(1), 0xDEAD_BEEF);

        window.write(0, 0x0000_000F);
        assert_eq!(memory.peek(0x40), 0x0000_000F);
    }
}
