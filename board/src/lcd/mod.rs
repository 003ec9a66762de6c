//! The 128x64 monochrome LCD module.
//!
//! Drawing happens through `embedded-graphics` on a host-side
//! [`Framebuffer`]; [`LcdInterface`] owns the wire to the controller (a
//! serial bit-bang over an expansion port) and pushes whole frames.

mod framebuffer;
mod interface;

pub use framebuffer::Framebuffer;
pub use interface::LcdInterface;

pub const WIDTH: u32 = 128;
pub const HEIGHT: u32 = 64;

/// The controller addresses the panel as 8-row pages.
pub const PAGES: usize = (HEIGHT as usize) / 8;
