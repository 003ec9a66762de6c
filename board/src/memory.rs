//! Physical memory mapping.
//!
//! [`DevMemMapper`] is the real thing: an `mmap` of `/dev/mem` over the
//! peripheral window. [`SliceMapper`] maps a plain heap buffer so register
//! logic can run under `cargo test` on any host.

use crate::{Error, Result};
use std::{
    fs::{File, OpenOptions},
    os::unix::{fs::OpenOptionsExt, io::AsRawFd},
    ptr::NonNull,
};
use tracing::debug;

/// A mapped region of (what the rest of the crate treats as) physical
/// memory.
///
/// The returned pointer refers to the base of the requested window, not
/// the page-aligned base of the underlying mapping. All accesses through
/// it must be volatile; implementations guarantee the region stays mapped
/// for as long as the mapper is alive.
pub trait MemoryMapper {
    fn as_ptr(&self) -> *mut u8;

    /// Length of the usable window in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An `mmap` of `/dev/mem` over a physical address window.
pub struct DevMemMapper {
    ptr: NonNull<u8>,
    span: usize,
    page_offset: usize,
    _device: File,
}

// The pointer refers to hardware registers, not host memory shared with
// other threads; all access through it is volatile.
unsafe impl Send for DevMemMapper {}

impl DevMemMapper {
    /// Maps `span` bytes at physical address `base`.
    ///
    /// The request is page aligned before being handed to `mmap`; the
    /// pointer reported by the mapper still refers to `base` itself.
    pub fn map(base: usize, span: usize) -> Result<Self> {
        let device = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_SYNC)
            .open("/dev/mem")
            .map_err(Error::OpenDevMem)?;

        let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) } as usize;
        let page_offset = base % page_size;
        let map_base = base - page_offset;
        let map_span = span + page_offset;

        let ptr = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                map_span,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                device.as_raw_fd(),
                map_base as libc::off_t,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(Error::Mmap {
                base,
                span,
                source: std::io::Error::last_os_error(),
            });
        }

        debug!("mapped {span:#x} bytes at physical address {base:#x}");

        // Step past the alignment padding so offset 0 is `base`.
        let ptr = unsafe { NonNull::new_unchecked((ptr as *mut u8).add(page_offset)) };

        Ok(Self {
            ptr,
            span,
            page_offset,
            _device: device,
        })
    }
}

impl MemoryMapper for DevMemMapper {
    fn as_ptr(&self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    fn len(&self) -> usize {
        self.span
    }
}

impl Drop for DevMemMapper {
    fn drop(&mut self) {
        let map_ptr = unsafe { self.ptr.as_ptr().sub(self.page_offset) };
        let map_span = self.span + self.page_offset;
        unsafe {
            libc::munmap(map_ptr.cast(), map_span);
        }
    }
}

/// A zero filled heap buffer standing in for the peripheral window.
pub struct SliceMapper {
    ptr: NonNull<u32>,
    len: usize,
}

impl SliceMapper {
    /// `len` is in bytes and must be a whole number of 32 bit registers.
    pub fn new(len: usize) -> Self {
        assert_eq!(len % 4, 0);
        // Backed by u32 words so register access is aligned. Manually
        // managed so `as_ptr` can hand out a write-capable pointer from
        // a shared borrow, same as the real mapping.
        let buffer = vec![0u32; len / 4].into_boxed_slice();
        let ptr = unsafe { NonNull::new_unchecked(Box::into_raw(buffer) as *mut u32) };
        Self { ptr, len }
    }

    /// Stores a register value directly, bypassing any device accessor.
    /// Intended for seeding input registers in tests.
    pub fn poke(&mut self, offset: usize, value: u32) {
        assert_eq!(offset % 4, 0);
        assert!(offset + 4 <= self.len);
        unsafe {
            std::ptr::write_volatile(self.ptr.as_ptr().add(offset / 4), value);
        }
    }

    /// Reads a register value directly, bypassing any device accessor.
    pub fn peek(&self, offset: usize) -> u32 {
        assert_eq!(offset % 4, 0);
        assert!(offset + 4 <= self.len);
        unsafe { std::ptr::read_volatile(self.ptr.as_ptr().add(offset / 4)) }
    }
}

impl MemoryMapper for SliceMapper {
    fn as_ptr(&self) -> *mut u8 {
        self.ptr.as_ptr().cast()
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl Drop for SliceMapper {
    fn drop(&mut self) {
        unsafe {
            drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr(),
                self.len / 4,
            )));
        }
    }
}
