//! # ESC/POS Text Styling Commands
//!
//! This module implements text formatting commands.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Bold | ESC E n | **Emphasized** text |
//! | Rotate | ESC V n | 90° clockwise rotation |
//! | Reverse | GS B n | White on black |
//! | Font | ESC M n | Font A or B |
//! | Justify | ESC a n | Left, center, right |
//! | Tab stops | ESC D ... NUL | Horizontal tab positions |
//!
//! The printer keeps these modes until changed or until `ESC @`. Nothing
//! here caches device state: every call produces the full command again.

use clap::ValueEnum;

use super::commands::{ESC, GS, toggle};
use super::validate::{check_choice, check_range};
use crate::error::ValidationError;

/// Maximum number of horizontal tab positions per `ESC D` command
pub const MAX_TAB_STOPS: usize = 32;

// ============================================================================
// TEXT EMPHASIS
// ============================================================================

/// # Bold (ESC E n)
///
/// | Hex | Effect |
/// |-----|--------|
/// | 1B 45 01 | Bold on |
/// | 1B 45 00 | Bold off |
#[inline]
pub fn bold(on: bool) -> Vec<u8> {
    vec![ESC, b'E', toggle(on)]
}

/// # Rotate 90° (ESC V n)
///
/// Turns clockwise rotation of printed characters on or off. Double width
/// or double height text is mirrored while rotation is active.
#[inline]
pub fn rotate_90(on: bool) -> Vec<u8> {
    vec![ESC, b'V', toggle(on)]
}

/// # Reverse Printing (GS B n)
///
/// When on, characters print white on a black background.
#[inline]
pub fn reverse(on: bool) -> Vec<u8> {
    vec![GS, b'B', toggle(on)]
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Device fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Font {
    /// Font A: 12×24 dots
    #[default]
    A = 0,
    /// Font B: 9×17 dots
    B = 1,
}

impl Font {
    pub const ALL: [Font; 2] = [Font::A, Font::B];
}

impl From<Font> for u8 {
    fn from(f: Font) -> u8 {
        f as u8
    }
}

impl TryFrom<u8> for Font {
    type Error = ValidationError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        check_choice(n, &Font::ALL)
    }
}

/// # Select Font (ESC M n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC M n |
/// | Hex     | 1B 4D n |
///
/// ## Example
///
/// ```
/// use hoin::protocol::text::{font, Font};
///
/// assert_eq!(font(Font::B), vec![0x1B, 0x4D, 0x01]);
/// ```
pub fn font(f: Font) -> Vec<u8> {
    vec![ESC, b'M', f.into()]
}

// ============================================================================
// JUSTIFICATION
// ============================================================================

/// Text justification options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Justification {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl Justification {
    pub const ALL: [Justification; 3] = [
        Justification::Left,
        Justification::Center,
        Justification::Right,
    ];
}

impl From<Justification> for u8 {
    fn from(j: Justification) -> u8 {
        j as u8
    }
}

impl TryFrom<u8> for Justification {
    type Error = ValidationError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        check_choice(n, &Justification::ALL)
    }
}

/// # Justify (ESC a n)
///
/// Sets the alignment of subsequent lines. Takes effect at the start of a
/// line.
///
/// ```
/// use hoin::protocol::text::{justify, Justification};
///
/// assert_eq!(justify(Justification::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn justify(j: Justification) -> Vec<u8> {
    vec![ESC, b'a', j.into()]
}

// ============================================================================
// TAB STOPS
// ============================================================================

/// # Set Horizontal Tab Positions (ESC D n1 ... nk NUL)
///
/// Replaces every previously configured tab stop.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC D n1 ... nk NUL |
/// | Hex     | 1B 44 n1 ... nk 00 |
///
/// ## Parameters
///
/// - `positions`: Column of each stop (1-255), at most 32 entries. An empty
///   slice clears all tab stops.
///
/// ## Example
///
/// ```
/// use hoin::protocol::text::set_tab_stops;
///
/// assert_eq!(set_tab_stops(&[]).unwrap(), vec![0x1B, 0x44, 0x00]);
/// assert_eq!(set_tab_stops(&[8, 16]).unwrap(), vec![0x1B, 0x44, 8, 16, 0x00]);
/// ```
pub fn set_tab_stops(positions: &[i32]) -> Result<Vec<u8>, ValidationError> {
    if positions.len() > MAX_TAB_STOPS {
        return Err(ValidationError::TooManyTabStops {
            count: positions.len(),
            max: MAX_TAB_STOPS,
        });
    }

    let mut cmd = Vec::with_capacity(3 + positions.len());
    cmd.push(ESC);
    cmd.push(b'D');
    for &pos in positions {
        cmd.push(check_range("tab position", pos, 1, 255)?);
    }
    cmd.push(0);
    Ok(cmd)
}

/// Tab stop positions spaced every `width` columns.
///
/// Produces `width, 2*width, ...` for as long as the position fits in a
/// byte, capped at [`MAX_TAB_STOPS`] entries.
pub fn tab_positions_every(width: i32) -> Result<Vec<i32>, ValidationError> {
    let width = i32::from(check_range("tab width", width, 1, 255)?);
    Ok((1..=MAX_TAB_STOPS as i32)
        .map(|i| i * width)
        .take_while(|&pos| pos <= 255)
        .collect())
}

// ============================================================================
// TEXT
// ============================================================================

/// Raw text payload.
///
/// Text is sent as-is; the device renders it with its current font and code
/// page.
#[inline]
pub fn text(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}
