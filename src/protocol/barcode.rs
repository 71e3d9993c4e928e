//! # ESC/POS Barcode Commands
//!
//! This module implements 1D barcode printing (`GS k`) and the settings
//! that go with it (HRI position, bar height).
//!
//! ## Supported Symbologies
//!
//! | Symbology | Selector | Length | Alphabet | Framing |
//! |-----------|----------|--------|----------|---------|
//! | UPC-A | 0 | 11-12 | digits | NUL-terminated |
//! | UPC-E | 1 | 6-7 | digits | NUL-terminated |
//! | JAN13 (EAN13) | 2 | 12-13 | digits | NUL-terminated |
//! | JAN8 (EAN8) | 3 | 7-8 | digits | NUL-terminated |
//! | CODE39 | 4 | 0-14 | alnum + symbols | NUL-terminated |
//! | ITF | 5 | 0-22 | digits | NUL-terminated |
//! | CODABAR | 6 | 2-19 | wrapped body | NUL-terminated |
//! | CODE93 | 72 | 1-17 | alnum + symbols | length-prefixed |
//! | CODE128 | 73 | 0-60 | alnum + symbols | length-prefixed |
//!
//! ## CODE128 Length
//!
//! The device documentation allows up to 255 bytes, but real hardware misbehaves
//! well below that: on a HOP-E802 the HRI text breaks at 34 characters and
//! printing stops entirely around 65. The 60-byte ceiling used here is the
//! largest length observed to print reliably. Anomalies near that boundary are
//! a hardware limitation, not something the encoder tries to work around.
//!
//! ## Usage
//!
//! ```
//! use hoin::protocol::barcode::{self, HriPosition, Symbology};
//!
//! let mut data = Vec::new();
//! data.extend(barcode::hri_position(HriPosition::Below));
//! data.extend(barcode::height(80).unwrap());
//! data.extend(barcode::barcode(Symbology::Codabar, "A1234B").unwrap());
//! ```

use clap::ValueEnum;

use super::commands::GS;
use super::validate::{check_charset, check_choice, check_range};
use crate::error::ValidationError;

/// Bar height the printer uses after power-on
pub const DEFAULT_HEIGHT: i32 = 162;

const DIGITS: &str = "0123456789";
const ALNUM_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-.*$/+% ";
const CODABAR_WRAPPERS: &str = "ABCD";
const CODABAR_BODY: &str = "0123456789-$:/.+ABCD";

// ============================================================================
// SYMBOLOGIES
// ============================================================================

/// 1D barcode symbology
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Symbology {
    UpcA = 0,
    UpcE = 1,
    Jan13 = 2,
    Jan8 = 3,
    Code39 = 4,
    Itf = 5,
    Codabar = 6,
    Code93 = 72,
    Code128 = 73,
}

/// Character set accepted by a symbology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Charset {
    Digits,
    AlnumSymbols,
    Codabar,
}

/// Validation and framing rules for one symbology
#[derive(Debug, Clone, Copy)]
struct Rules {
    name: &'static str,
    min_len: usize,
    max_len: usize,
    charset: Charset,
    length_prefixed: bool,
}

impl Symbology {
    pub const ALL: [Symbology; 9] = [
        Symbology::UpcA,
        Symbology::UpcE,
        Symbology::Jan13,
        Symbology::Jan8,
        Symbology::Code39,
        Symbology::Itf,
        Symbology::Codabar,
        Symbology::Code93,
        Symbology::Code128,
    ];

    fn rules(self) -> Rules {
        use Charset::*;
        let (name, min_len, max_len, charset, length_prefixed) = match self {
            Symbology::UpcA => ("UPC-A", 11, 12, Digits, false),
            Symbology::UpcE => ("UPC-E", 6, 7, Digits, false),
            Symbology::Jan13 => ("JAN13", 12, 13, Digits, false),
            Symbology::Jan8 => ("JAN8", 7, 8, Digits, false),
            Symbology::Code39 => ("CODE39", 0, 14, AlnumSymbols, false),
            Symbology::Itf => ("ITF", 0, 22, Digits, false),
            Symbology::Codabar => ("CODABAR", 2, 19, Codabar, false),
            Symbology::Code93 => ("CODE93", 1, 17, AlnumSymbols, true),
            Symbology::Code128 => ("CODE128", 0, 60, AlnumSymbols, true),
        };
        Rules {
            name,
            min_len,
            max_len,
            charset,
            length_prefixed,
        }
    }

    /// Display name used in error messages
    pub fn name(self) -> &'static str {
        self.rules().name
    }

    /// Inclusive payload length bounds in bytes
    pub fn length_bounds(self) -> (usize, usize) {
        let r = self.rules();
        (r.min_len, r.max_len)
    }

    /// True when the payload is preceded by its byte length instead of
    /// being terminated with NUL.
    pub fn is_length_prefixed(self) -> bool {
        self.rules().length_prefixed
    }
}

impl From<Symbology> for u8 {
    fn from(s: Symbology) -> u8 {
        s as u8
    }
}

impl TryFrom<u8> for Symbology {
    type Error = ValidationError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        check_choice(n, &Symbology::ALL)
    }
}

// ============================================================================
// HRI AND HEIGHT
// ============================================================================

/// Where the human-readable interpretation is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HriPosition {
    /// No HRI text
    #[default]
    None = 0,
    Above = 1,
    Below = 2,
    Both = 3,
}

impl HriPosition {
    pub const ALL: [HriPosition; 4] = [
        HriPosition::None,
        HriPosition::Above,
        HriPosition::Below,
        HriPosition::Both,
    ];
}

impl From<HriPosition> for u8 {
    fn from(p: HriPosition) -> u8 {
        p as u8
    }
}

impl TryFrom<u8> for HriPosition {
    type Error = ValidationError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        check_choice(n, &HriPosition::ALL)
    }
}

/// # Select HRI Position (GS H n)
///
/// | Hex | Position |
/// |-----|----------|
/// | 1D 48 00 | None |
/// | 1D 48 01 | Above |
/// | 1D 48 02 | Below |
/// | 1D 48 03 | Above and below |
pub fn hri_position(p: HriPosition) -> Vec<u8> {
    vec![GS, b'H', p.into()]
}

/// # Set Barcode Height (GS h n)
///
/// Sets the bar height to `n` dots (1-255).
pub fn height(n: i32) -> Result<Vec<u8>, ValidationError> {
    let n = check_range("barcode height", n, 1, 255)?;
    Ok(vec![GS, b'h', n])
}

// ============================================================================
// BARCODE
// ============================================================================

/// Check a payload against its symbology's length bound and alphabet.
///
/// The length bound is checked first, then the alphabet. For CODABAR the
/// start/stop letters are checked before the body characters.
pub fn validate(symbology: Symbology, data: &str) -> Result<(), ValidationError> {
    let rules = symbology.rules();

    if data.len() < rules.min_len || data.len() > rules.max_len {
        return Err(ValidationError::LengthOutOfRange {
            symbology: rules.name,
            length: data.len(),
            min: rules.min_len,
            max: rules.max_len,
        });
    }

    match rules.charset {
        Charset::Digits => check_charset(data, DIGITS),
        Charset::AlnumSymbols => check_charset(data, ALNUM_SYMBOLS),
        Charset::Codabar => {
            let wrapped = |c: Option<char>| c.is_some_and(|c| CODABAR_WRAPPERS.contains(c));
            if !wrapped(data.chars().next()) || !wrapped(data.chars().last()) {
                return Err(ValidationError::CodabarWrapper {
                    wrappers: CODABAR_WRAPPERS,
                });
            }
            check_charset(data, CODABAR_BODY)
        }
    }
}

/// # Print Barcode (GS k m ...)
///
/// ## Protocol Details
///
/// | Framing | Bytes |
/// |---------|-------|
/// | NUL-terminated (m = 0-6) | 1D 6B m d1...dk 00 |
/// | Length-prefixed (m = 72, 73) | 1D 6B m k d1...dk |
///
/// ## Example
///
/// ```
/// use hoin::protocol::barcode::{barcode, Symbology};
///
/// let cmd = barcode(Symbology::Code93, "AB").unwrap();
/// assert_eq!(cmd, vec![0x1D, 0x6B, 72, 2, b'A', b'B']);
///
/// let cmd = barcode(Symbology::Itf, "12").unwrap();
/// assert_eq!(cmd, vec![0x1D, 0x6B, 5, b'1', b'2', 0x00]);
/// ```
pub fn barcode(symbology: Symbology, data: &str) -> Result<Vec<u8>, ValidationError> {
    validate(symbology, data)?;

    let mut cmd = Vec::with_capacity(5 + data.len());
    cmd.push(GS);
    cmd.push(b'k');
    cmd.push(symbology.into());
    if symbology.is_length_prefixed() {
        // max_len <= 60, so the length always fits a byte
        cmd.push(data.len() as u8);
        cmd.extend_from_slice(data.as_bytes());
    } else {
        cmd.extend_from_slice(data.as_bytes());
        cmd.push(0);
    }
    Ok(cmd)
}
