//! # Printer Session
//!
//! [`Printer`] owns a [`Transport`] and exposes every device operation as a
//! method. Each method validates its parameters, encodes the command and
//! hands it to the transport in a single write. A validation failure returns
//! before anything is written.
//!
//! Methods take `&mut self`, so one session can only have one operation in
//! flight. To share a session across threads wrap it in a `Mutex`; the
//! device cannot tell interleaved commands apart.
//!
//! The session caches no device state. Every setter is sent every time.
//!
//! ## Example
//!
//! ```
//! use hoin::printer::Printer;
//! use hoin::protocol::text::Justification;
//! use hoin::transport::MemoryTransport;
//!
//! let mut printer = Printer::new(MemoryTransport::new());
//! printer.initialize()?;
//! printer.justify(Justification::Center)?;
//! printer.println("hello")?;
//! printer.cut_feed(3)?;
//!
//! assert_eq!(printer.transport().writes().len(), 4);
//! # Ok::<(), hoin::HoinError>(())
//! ```

use tracing::debug;

use super::PrinterConfig;
use crate::error::HoinError;
use crate::protocol::barcode::{self, HriPosition, Symbology};
use crate::protocol::commands;
use crate::protocol::graphics::{Density, DotMode};
use crate::protocol::status::{
    self, ErrorStatus, OfflineStatus, PaperSensorStatus, PrinterStatus, StatusClass,
};
use crate::protocol::text::{self, Font, Justification};
use crate::render::raster::{Grayscale, rasterize};
use crate::transport::Transport;

/// A session with one printer.
pub struct Printer<T: Transport> {
    transport: T,
    pace_images: bool,
}

impl<T: Transport> Printer<T> {
    /// Session with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, &PrinterConfig::default())
    }

    /// Session honoring the pacing choice in `config`.
    pub fn with_config(transport: T, config: &PrinterConfig) -> Self {
        Self {
            transport,
            pace_images: config.pace_images,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    fn send(&mut self, op: &'static str, cmd: &[u8]) -> Result<(), HoinError> {
        debug!(op, bytes = cmd.len(), "send");
        self.transport.write_all(cmd)
    }

    // ========================================================================
    // Control
    // ========================================================================

    /// Reset the printer to its power-on state (ESC @).
    pub fn initialize(&mut self) -> Result<(), HoinError> {
        self.send("initialize", &commands::init())
    }

    /// Sound the buzzer `n` times (1-9) for `t` x 100 ms (1-9).
    pub fn beep(&mut self, n: i32, t: i32) -> Result<(), HoinError> {
        let cmd = commands::beep(n, t)?;
        self.send("beep", &cmd)
    }

    /// Pass an already-encoded command straight through.
    pub fn write_raw(&mut self, data: &[u8]) -> Result<(), HoinError> {
        self.send("write_raw", data)
    }

    // ========================================================================
    // Paper movement
    // ========================================================================

    pub fn horizontal_tab(&mut self) -> Result<(), HoinError> {
        self.send("horizontal_tab", &commands::horizontal_tab())
    }

    pub fn line_feed(&mut self) -> Result<(), HoinError> {
        self.send("line_feed", &commands::line_feed())
    }

    pub fn carriage_return(&mut self) -> Result<(), HoinError> {
        self.send("carriage_return", &commands::carriage_return())
    }

    /// Full cut without feeding.
    pub fn cut(&mut self) -> Result<(), HoinError> {
        self.send("cut", &commands::cut())
    }

    /// Feed `n` (0-255) motion units, then cut.
    pub fn cut_feed(&mut self, n: i32) -> Result<(), HoinError> {
        let cmd = commands::cut_feed(n)?;
        self.send("cut_feed", &cmd)
    }

    pub fn reset_line_spacing(&mut self) -> Result<(), HoinError> {
        self.send("reset_line_spacing", &commands::reset_line_spacing())
    }

    /// Line spacing in motion units (0-255).
    pub fn set_line_spacing(&mut self, n: i32) -> Result<(), HoinError> {
        let cmd = commands::set_line_spacing(n)?;
        self.send("set_line_spacing", &cmd)
    }

    /// Print the buffer and feed `n` (0-255) motion units.
    pub fn feed(&mut self, n: i32) -> Result<(), HoinError> {
        let cmd = commands::feed(n)?;
        self.send("feed", &cmd)
    }

    /// Print the buffer and feed `n` (0-255) lines.
    pub fn feed_lines(&mut self, n: i32) -> Result<(), HoinError> {
        let cmd = commands::feed_lines(n)?;
        self.send("feed_lines", &cmd)
    }

    // ========================================================================
    // Text
    // ========================================================================

    /// Replace all tab stops. At most 32 positions, each 1-255.
    pub fn set_tab_stops(&mut self, positions: &[i32]) -> Result<(), HoinError> {
        let cmd = text::set_tab_stops(positions)?;
        self.send("set_tab_stops", &cmd)
    }

    /// Tab stops every `width` (1-255) columns.
    pub fn set_tab_width(&mut self, width: i32) -> Result<(), HoinError> {
        let positions = text::tab_positions_every(width)?;
        let cmd = text::set_tab_stops(&positions)?;
        self.send("set_tab_width", &cmd)
    }

    pub fn set_bold(&mut self, on: bool) -> Result<(), HoinError> {
        self.send("set_bold", &text::bold(on))
    }

    pub fn set_rotate_90(&mut self, on: bool) -> Result<(), HoinError> {
        self.send("set_rotate_90", &text::rotate_90(on))
    }

    /// White-on-black printing.
    pub fn set_reverse(&mut self, on: bool) -> Result<(), HoinError> {
        self.send("set_reverse", &text::reverse(on))
    }

    pub fn set_font(&mut self, font: Font) -> Result<(), HoinError> {
        self.send("set_font", &text::font(font))
    }

    pub fn justify(&mut self, justification: Justification) -> Result<(), HoinError> {
        self.send("justify", &text::justify(justification))
    }

    pub fn print(&mut self, s: &str) -> Result<(), HoinError> {
        self.send("print", &text::text(s))
    }

    /// `s` followed by LF, in one write.
    pub fn println(&mut self, s: &str) -> Result<(), HoinError> {
        let mut cmd = text::text(s);
        cmd.push(commands::LF);
        self.send("println", &cmd)
    }

    // ========================================================================
    // Barcodes
    // ========================================================================

    pub fn set_hri_position(&mut self, position: HriPosition) -> Result<(), HoinError> {
        self.send("set_hri_position", &barcode::hri_position(position))
    }

    /// Barcode height in dots (1-255).
    pub fn set_barcode_height(&mut self, n: i32) -> Result<(), HoinError> {
        let cmd = barcode::height(n)?;
        self.send("set_barcode_height", &cmd)
    }

    pub fn reset_barcode_height(&mut self) -> Result<(), HoinError> {
        self.set_barcode_height(barcode::DEFAULT_HEIGHT)
    }

    /// Validate `data` against the symbology's length and charset rules,
    /// then print it.
    pub fn print_barcode(&mut self, symbology: Symbology, data: &str) -> Result<(), HoinError> {
        let cmd = barcode::barcode(symbology, data)?;
        self.send("print_barcode", &cmd)
    }

    // ========================================================================
    // Images
    // ========================================================================

    /// Print `bitmap` as a series of bit image strips.
    ///
    /// The image is rasterized before anything is written. Each strip is
    /// sent as zero line spacing, the strip, then LF. With pacing on, an
    /// error status query after each strip holds the next one back until
    /// the device has caught up.
    pub fn print_image<B: Grayscale + ?Sized>(
        &mut self,
        bitmap: &B,
        density: Density,
        mode: DotMode,
    ) -> Result<(), HoinError> {
        let strips = rasterize(bitmap, mode)?;
        debug!(
            strips = strips.len(),
            width = bitmap.width(),
            dots = u8::from(mode),
            "print image"
        );

        for strip in &strips {
            self.set_line_spacing(0)?;
            self.send("bit_image", &strip.to_command(density))?;
            self.line_feed()?;
            if self.pace_images {
                self.transmit_error_status()?;
            }
        }
        Ok(())
    }

    pub fn print_image8<B: Grayscale + ?Sized>(
        &mut self,
        bitmap: &B,
        density: Density,
    ) -> Result<(), HoinError> {
        self.print_image(bitmap, density, DotMode::Eight)
    }

    pub fn print_image24<B: Grayscale + ?Sized>(
        &mut self,
        bitmap: &B,
        density: Density,
    ) -> Result<(), HoinError> {
        self.print_image(bitmap, density, DotMode::TwentyFour)
    }

    // ========================================================================
    // Status
    // ========================================================================

    /// Send one status query and read back its single reply byte.
    fn query_status(&mut self, class: StatusClass) -> Result<u8, HoinError> {
        self.send("transmit_status", &status::query(class))?;
        let mut reply = [0u8; 1];
        if self.transport.read(&mut reply)? == 0 {
            return Err(HoinError::UnexpectedEof);
        }
        debug!(class = u8::from(class), reply = format_args!("{:#010b}", reply[0]), "status");
        Ok(reply[0])
    }

    pub fn transmit_printer_status(&mut self) -> Result<PrinterStatus, HoinError> {
        self.query_status(StatusClass::Printer).map(PrinterStatus::from)
    }

    pub fn transmit_offline_status(&mut self) -> Result<OfflineStatus, HoinError> {
        self.query_status(StatusClass::Offline).map(OfflineStatus::from)
    }

    pub fn transmit_error_status(&mut self) -> Result<ErrorStatus, HoinError> {
        self.query_status(StatusClass::Error).map(ErrorStatus::from)
    }

    pub fn transmit_paper_sensor_status(&mut self) -> Result<PaperSensorStatus, HoinError> {
        self.query_status(StatusClass::PaperSensor).map(PaperSensorStatus::from)
    }
}
