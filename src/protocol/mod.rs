//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level, stateless command builders for
//! ESC/POS-compatible thermal receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic printer commands (init, beep, cut, feed, spacing)
//! - [`text`]: Text styling (bold, rotation, font, justification, tabs)
//! - [`barcode`]: 1D barcodes with per-symbology validation
//! - [`graphics`]: Bit image strips
//! - [`status`]: Real-time status queries and reply decoding
//! - [`validate`]: Range, choice, and charset checks shared by the builders
//!
//! Builders never perform I/O. Anything with a documented range returns
//! `Result<Vec<u8>, ValidationError>`, so invalid input is caught before a
//! single byte is sent.
//!
//! ## Usage Example
//!
//! ```
//! use hoin::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::justify(text::Justification::Center));
//! data.extend(text::bold(true));
//! data.extend(b"RECEIPT\n");
//! data.extend(text::bold(false));
//! data.extend(commands::cut_feed(40).unwrap());
//! ```

pub mod barcode;
pub mod commands;
pub mod graphics;
pub mod status;
pub mod text;
pub mod validate;
