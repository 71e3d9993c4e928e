//! # Hoin - ESC/POS Receipt Printer Driver
//!
//! Hoin drives Hoin HOP-E802 style thermal receipt printers over a raw TCP
//! socket or a local device file. It provides:
//!
//! - **Protocol implementation**: ESC/POS command builders with parameter validation
//! - **Rasterization**: bitmaps to 8-dot or 24-dot bit image strips
//! - **Transport**: a connection that redials once when it goes stale
//! - **Status**: decoding of the four real-time status replies
//!
//! ## Quick Start
//!
//! ```no_run
//! use hoin::{
//!     printer::{Printer, PrinterConfig},
//!     protocol::{barcode::Symbology, text::Justification},
//!     transport::{HealingTransport, TcpTarget},
//! };
//!
//! let config = PrinterConfig::HOP_E802;
//! let target = TcpTarget::new("192.168.1.23").with_timeout(config.io_timeout);
//! let mut printer = Printer::with_config(HealingTransport::connect(target)?, &config);
//!
//! printer.initialize()?;
//! printer.justify(Justification::Center)?;
//! printer.println("Thank you!")?;
//! printer.print_barcode(Symbology::Jan13, "4006381333931")?;
//! printer.cut_feed(3)?;
//!
//! let paper = printer.transmit_paper_sensor_status()?;
//! if paper.near_end {
//!     eprintln!("paper is running low");
//! }
//! # Ok::<(), hoin::HoinError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders and status decoding |
//! | [`render`] | Bitmap to bit image strips |
//! | [`transport`] | TCP and device backends, redialing |
//! | [`printer`] | Session and printer presets |
//! | [`morse`] | Morse code on the buzzer |
//! | [`error`] | Error types |

pub mod error;
pub mod morse;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod transport;

// Re-exports for convenience
pub use error::{HoinError, ValidationError};
pub use printer::{Printer, PrinterConfig};
