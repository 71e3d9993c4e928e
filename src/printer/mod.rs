//! # Printer Module
//!
//! The session that drives a printer, and the presets that configure it.
//!
//! ## Modules
//!
//! - [`config`]: Printer presets (width, address, timeout, pacing)
//! - [`session`]: [`Printer`], one method per device operation

pub mod config;
pub mod session;

pub use config::PrinterConfig;
pub use session::Printer;
