//! # Printer Transport Layer
//!
//! This module provides the byte pipe between a [`crate::Printer`] and the
//! device. There is no framing here: bytes in, bytes out.
//!
//! ## Available Transports
//!
//! - [`HealingTransport`]: wraps any [`Dial`] target and transparently
//!   re-establishes the stream once after a transient failure
//! - [`TcpTarget`]: network printers (raw port 9100)
//! - [`DeviceTarget`]: local device files such as `/dev/usb/lp0`
//! - [`MemoryTransport`]: records writes and serves scripted replies, for
//!   tests and dry runs
//!
//! ## Redial
//!
//! Network printers drop idle connections. When a read or write fails with
//! a broken pipe or an elapsed deadline, [`HealingTransport`] closes the stale
//! stream, dials the same target again, and retries the failed operation
//! exactly once. If the redial fails, both errors are reported together as
//! [`HoinError::Redial`]. There is no backoff and no retry loop.

pub mod device;
pub mod healing;
pub mod memory;
pub mod tcp;

use std::fmt::Display;
use std::io::{Read, Write};

use crate::error::HoinError;

pub use device::DeviceTarget;
pub use healing::HealingTransport;
pub use memory::MemoryTransport;
pub use tcp::{DEFAULT_PORT, TcpTarget};

/// A duplex byte stream to the printer.
pub trait Transport {
    /// Write every byte of `data`, or fail.
    fn write_all(&mut self, data: &[u8]) -> Result<(), HoinError>;

    /// Read at most `buf.len()` bytes, blocking until at least one arrives.
    /// Returns 0 at end of stream.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, HoinError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write_all(&mut self, data: &[u8]) -> Result<(), HoinError> {
        (**self).write_all(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, HoinError> {
        (**self).read(buf)
    }
}

/// Something a [`HealingTransport`] can (re)connect to.
pub trait Dial: Display {
    type Stream: Read + Write;

    /// Open a fresh stream to the target.
    fn dial(&self) -> std::io::Result<Self::Stream>;
}
