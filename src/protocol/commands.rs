//! # ESC/POS Basic Commands
//!
//! This module implements the basic control commands of ESC/POS-compatible
//! thermal receipt printers (Hoin HOP-E802 and similar).
//!
//! ## Protocol Overview
//!
//! Commands are byte sequences starting with a control byte that selects a
//! printer function, followed by parameter bytes:
//!
//! - Single byte: `LF`, `HT`, `CR`
//! - Two bytes: `ESC @`, `ESC 2`
//! - Multi-byte with parameters: `ESC J n`, `GS V m n`
//!
//! Every builder here is a pure function. Builders whose parameters have a
//! documented range return `Result` and never produce bytes for an invalid
//! value.
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

use super::validate::check_range;
use crate::error::ValidationError;

// ============================================================================
// CONTROL BYTE CONSTANTS
// ============================================================================

/// HT (Horizontal Tab) - Advance to next tab position
pub const HT: u8 = 0x09;

/// LF (Line Feed) - Print buffer contents and advance one line
pub const LF: u8 = 0x0A;

/// CR (Carriage Return)
pub const CR: u8 = 0x0D;

/// DLE (Data Link Escape) - Real-time command prefix
///
/// Used by the real-time status transmission `DLE EOT n`, which the printer
/// answers immediately, even while its print buffer is busy.
pub const DLE: u8 = 0x10;

/// EOT (End Of Transmission) - Second byte of the status query
pub const EOT: u8 = 0x04;

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for cutter, barcode, and reverse printing commands.
pub const GS: u8 = 0x1D;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets every mode to its power-on default.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Example
///
/// ```
/// use hoin::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Beep (ESC B n t)
///
/// Sounds the buzzer `n` times for `t` units each.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC B n t |
/// | Hex     | 1B 42 n t |
///
/// ## Parameters
///
/// - `n`: Number of beeps (1-9)
/// - `t`: Duration of each beep (1-9). On the HOP-E802 one unit is
///   roughly 100ms.
///
/// ## Example
///
/// ```
/// use hoin::protocol::commands;
///
/// assert_eq!(commands::beep(2, 3).unwrap(), vec![0x1B, 0x42, 2, 3]);
/// assert!(commands::beep(0, 3).is_err());
/// ```
pub fn beep(n: i32, t: i32) -> Result<Vec<u8>, ValidationError> {
    let n = check_range("n", n, 1, 9)?;
    let t = check_range("t", t, 1, 9)?;
    Ok(vec![ESC, b'B', n, t])
}

// ============================================================================
// PRINT POSITION
// ============================================================================

/// Horizontal tab (HT)
///
/// Moves the print position to the next tab stop. Does nothing until tab
/// stops have been configured with [`super::text::set_tab_stops`].
#[inline]
pub fn horizontal_tab() -> Vec<u8> {
    vec![HT]
}

/// Line feed (LF): prints the buffer and feeds one line.
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

/// Carriage return (CR)
#[inline]
pub fn carriage_return() -> Vec<u8> {
    vec![CR]
}

// ============================================================================
// CUTTER CONTROL
// ============================================================================

/// # Cut Paper (GS V 0)
///
/// Cuts the paper at the current position.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V NUL |
/// | Hex     | 1D 56 00 |
#[inline]
pub fn cut() -> Vec<u8> {
    vec![GS, b'V', 0]
}

/// # Feed and Cut (GS V B n)
///
/// Feeds the paper by `n` motion units, then cuts.
///
/// ## Protocol Details
///
/// | Format  | Bytes      |
/// |---------|------------|
/// | ASCII   | GS V B n   |
/// | Hex     | 1D 56 42 n |
///
/// ## Parameters
///
/// - `n`: Feed amount before cutting (0-255)
///
/// ## Example
///
/// ```
/// use hoin::protocol::commands;
///
/// assert_eq!(commands::cut_feed(5).unwrap(), vec![0x1D, 0x56, 0x42, 0x05]);
/// ```
pub fn cut_feed(n: i32) -> Result<Vec<u8>, ValidationError> {
    let n = check_range("n", n, 0, 255)?;
    Ok(vec![GS, b'V', 66, n])
}

// ============================================================================
// LINE SPACING
// ============================================================================

/// # Reset Line Spacing (ESC 2)
///
/// Selects the default spacing of 1/6 inch (about 4.23mm).
#[inline]
pub fn reset_line_spacing() -> Vec<u8> {
    vec![ESC, b'2']
}

/// # Set Line Spacing (ESC 3 n)
///
/// Sets the line spacing to `n` vertical motion units.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC 3 n  |
/// | Hex     | 1B 33 n  |
///
/// ## Parameters
///
/// - `n`: Spacing in motion units (0-255). Zero is used before every image
///   strip so consecutive strips print without gaps.
pub fn set_line_spacing(n: i32) -> Result<Vec<u8>, ValidationError> {
    let n = check_range("n", n, 0, 255)?;
    Ok(vec![ESC, b'3', n])
}

// ============================================================================
// PAPER FEED
// ============================================================================

/// # Print and Feed (ESC J n)
///
/// Prints the buffer and feeds the paper by `n` motion units.
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC J n   |
/// | Hex     | 1B 4A n   |
/// | Decimal | 27 74 n   |
///
/// ## Example
///
/// ```
/// use hoin::protocol::commands;
///
/// assert_eq!(commands::feed(12).unwrap(), vec![0x1B, 0x4A, 12]);
/// ```
pub fn feed(n: i32) -> Result<Vec<u8>, ValidationError> {
    let n = check_range("n", n, 0, 255)?;
    Ok(vec![ESC, b'J', n])
}

/// # Print and Feed Lines (ESC d n)
///
/// Prints the buffer and feeds `n` lines (0-255).
pub fn feed_lines(n: i32) -> Result<Vec<u8>, ValidationError> {
    let n = check_range("n", n, 0, 255)?;
    Ok(vec![ESC, b'd', n])
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use hoin::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(576), [0x40, 0x02]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

/// Encode a boolean toggle as its parameter byte.
#[inline]
pub const fn toggle(on: bool) -> u8 {
    if on { 1 } else { 0 }
}

// ============================================================================
// TESTS
// ============================================================================
