//! Userspace access to the memory mapped peripherals of a DE1-SoC class
//! development board.
//!
//! The HPS-to-FPGA lightweight bridge exposes the University Program
//! peripherals (switches, pushbuttons, LEDs, 7-segment displays, expansion
//! ports) as a small window of 32 bit registers at a fixed physical
//! address. [`Board`] maps that window via `/dev/mem` and hands out typed
//! accessors into it.
//!
//! Everything is generic over [`memory::MemoryMapper`] so the register
//! logic can be exercised against plain RAM in tests.

pub mod address_map;
pub mod devices;
pub mod io;
pub mod lcd;
pub mod memory;

mod error;

pub use error::{Error, Result};

use devices::{
    expansion_port::ExpansionPort, pushbuttons::Pushbuttons, red_leds::RedLeds,
    seven_segment::SevenSegment, slider_switches::SliderSwitches,
};
use memory::{DevMemMapper, MemoryMapper};

/// A handle to the board's lightweight bridge peripherals.
pub struct Board<M> {
    memory: M,
}

impl Board<DevMemMapper> {
    /// Maps the lightweight bridge window through `/dev/mem`.
    ///
    /// Requires permission to open `/dev/mem`, i.e. root on a stock board
    /// image. The mapping is released when the `Board` is dropped.
    pub fn open() -> Result<Self> {
        let memory = DevMemMapper::map(address_map::LW_BRIDGE_BASE, address_map::LW_BRIDGE_SPAN)?;
        Ok(Self::new(memory))
    }
}

impl<M: MemoryMapper> Board<M> {
    pub fn new(memory: M) -> Self {
        Self { memory }
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    pub fn pushbuttons(&self) -> Result<Pushbuttons<'_>> {
        Pushbuttons::new(&self.memory)
    }

    pub fn slider_switches(&self) -> Result<SliderSwitches<'_>> {
        SliderSwitches::new(&self.memory)
    }

    pub fn red_leds(&self) -> Result<RedLeds<'_>> {
        RedLeds::new(&self.memory)
    }

    pub fn seven_segment(&self) -> Result<SevenSegment<'_>> {
        SevenSegment::new(&self.memory)
    }

    pub fn jp1(&self) -> Result<ExpansionPort<'_>> {
        ExpansionPort::new(&self.memory, address_map::JP1_OFFSET)
    }

    pub fn jp2(&self) -> Result<ExpansionPort<'_>> {
        ExpansionPort::new(&self.memory, address_map::JP2_OFFSET)
    }
}
