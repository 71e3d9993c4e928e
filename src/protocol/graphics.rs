//! # ESC/POS Bit Image Commands
//!
//! This module implements the bit image command (`ESC *`) used to print
//! raster images one horizontal strip at a time.
//!
//! ## Strip Format
//!
//! A strip is 8 or 24 dots tall and as wide as the image. Its data is
//! column-major: every byte of column 0, then column 1, and so on. Within a
//! column the topmost dot is the most significant bit of the first byte.
//!
//! ```text
//!            column 0   column 1   column 2
//!          ┌──────────┬──────────┬──────────┐
//! 8-dot    │ d0       │ d1       │ d2       │   1 byte per column
//!          └──────────┴──────────┴──────────┘
//!          ┌──────────┬──────────┬──────────┐
//! 24-dot   │ d0 d1 d2 │ d3 d4 d5 │ d6 d7 d8 │   3 bytes per column
//!          └──────────┴──────────┴──────────┘
//! ```
//!
//! ## Resolution
//!
//! | Mode | Density | Horizontal | Vertical |
//! |------|---------|------------|----------|
//! | 8-dot | single | 90 dpi | 60 dpi |
//! | 8-dot | double | 180 dpi | 60 dpi |
//! | 24-dot | single | 90 dpi | 180 dpi |
//! | 24-dot | double | 180 dpi | 180 dpi |

use clap::ValueEnum;

use super::commands::{ESC, u16_le};
use super::validate::check_choice;
use crate::error::ValidationError;

/// Horizontal dot density for bit images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Density {
    /// 90 dpi
    #[default]
    Single = 0,
    /// 180 dpi
    Double = 1,
}

impl Density {
    pub const ALL: [Density; 2] = [Density::Single, Density::Double];
}

impl From<Density> for u8 {
    fn from(d: Density) -> u8 {
        d as u8
    }
}

impl TryFrom<u8> for Density {
    type Error = ValidationError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        check_choice(n, &Density::ALL)
    }
}

/// Vertical dots per strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DotMode {
    /// 8 dots per strip, 1 byte per column
    Eight,
    /// 24 dots per strip, 3 bytes per column
    #[default]
    TwentyFour,
}

impl DotMode {
    pub const ALL: [DotMode; 2] = [DotMode::Eight, DotMode::TwentyFour];

    /// Strip height in dots
    #[inline]
    pub const fn height(self) -> u32 {
        match self {
            DotMode::Eight => 8,
            DotMode::TwentyFour => 24,
        }
    }

    /// Bytes emitted per column of a strip
    #[inline]
    pub const fn bytes_per_column(self) -> usize {
        (self.height() / 8) as usize
    }

    /// Mode byte for `ESC *` at the given density
    #[inline]
    pub fn format_tag(self, density: Density) -> u8 {
        match self {
            DotMode::Eight => u8::from(density),
            DotMode::TwentyFour => 32 + u8::from(density),
        }
    }
}

impl From<DotMode> for u8 {
    fn from(m: DotMode) -> u8 {
        m.height() as u8
    }
}

impl TryFrom<u8> for DotMode {
    type Error = ValidationError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        check_choice(n, &DotMode::ALL)
    }
}

/// # Select Bit Image Mode (ESC * m nL nH d1...dk)
///
/// Prints one strip. The command does not advance the paper by itself; a
/// line feed after it flushes the strip to paper.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC * m nL nH d1...dk |
/// | Hex     | 1B 2A m nL nH d1...dk |
///
/// ## Parameters
///
/// - `m`: Format tag, `density` for 8-dot strips and `32 + density` for
///   24-dot strips
/// - `nL, nH`: Width in columns, little-endian
/// - `d1...dk`: Packed column data, k = width × bytes per column
///
/// ## Example
///
/// ```
/// use hoin::protocol::graphics::{bit_image, Density, DotMode};
///
/// let cmd = bit_image(DotMode::TwentyFour, Density::Double, 2, &[0; 6]);
/// assert_eq!(&cmd[..5], &[0x1B, 0x2A, 33, 2, 0]);
/// assert_eq!(cmd.len(), 5 + 6);
/// ```
pub fn bit_image(mode: DotMode, density: Density, width: u16, data: &[u8]) -> Vec<u8> {
    debug_assert!(
        data.len() == width as usize * mode.bytes_per_column(),
        "Strip data must be exactly width * bytes_per_column bytes. Expected {}, got {}",
        width as usize * mode.bytes_per_column(),
        data.len()
    );

    let [nl, nh] = u16_le(width);

    let mut cmd = Vec::with_capacity(5 + data.len());
    cmd.push(ESC);
    cmd.push(b'*');
    cmd.push(mode.format_tag(density));
    cmd.push(nl);
    cmd.push(nh);
    cmd.extend_from_slice(data);
    cmd
}
