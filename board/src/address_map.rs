//! Physical addresses of the DE1-SoC University Program peripherals.
//!
//! Offsets are relative to the lightweight bridge base, matching the
//! board support package's `address_map_arm.h`.

/// Physical base address of the HPS-to-FPGA lightweight bridge.
pub const LW_BRIDGE_BASE: usize = 0xFF20_0000;

/// Span of the peripheral window within the bridge.
pub const LW_BRIDGE_SPAN: usize = 0x0000_5000;

/// Red LEDs LEDR9..0.
pub const LEDR_OFFSET: usize = 0x0000;

/// 7-segment displays HEX3..0.
pub const HEX3_HEX0_OFFSET: usize = 0x0020;

/// 7-segment displays HEX5..4.
pub const HEX5_HEX4_OFFSET: usize = 0x0030;

/// Slider switches SW9..0.
pub const SW_OFFSET: usize = 0x0040;

/// Pushbuttons KEY3..0 (data, interrupt mask at +8, edge capture at +0xC).
pub const KEY_OFFSET: usize = 0x0050;

/// Expansion port JP1 (data, direction at +4).
pub const JP1_OFFSET: usize = 0x0060;

/// Expansion port JP2 (data, direction at +4).
pub const JP2_OFFSET: usize = 0x0070;
