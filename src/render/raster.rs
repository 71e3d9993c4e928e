//! # Strip Rasterizer
//!
//! Converts a grayscale bitmap into the column-major strips that
//! [`crate::protocol::graphics::bit_image`] sends to the printer.
//!
//! ## Thresholding
//!
//! A pixel is ink when its luma is below mid-gray (0x80). No dithering is
//! performed; convert photos before rasterizing if halftones matter.
//!
//! ## Packing
//!
//! For each strip of `mode.height()` rows and each column `x`, the column's
//! dots are packed top-to-bottom, most significant bit first:
//!
//! ```text
//!  y0+0  ──► bit 7 of byte 0
//!  y0+1  ──► bit 6 of byte 0
//!  ...
//!  y0+7  ──► bit 0 of byte 0
//!  y0+8  ──► bit 7 of byte 1     (24-dot mode only)
//!  ...
//! ```
//!
//! Rows past the bottom of the image are white, so the last strip is
//! zero-padded instead of reading out of bounds.

use image::{DynamicImage, GenericImageView, GrayImage, ImageBuffer, Pixel};

use crate::error::ValidationError;
use crate::protocol::graphics::{Density, DotMode, bit_image};

/// Luma values below this print as ink
pub const THRESHOLD: u8 = 0x80;

/// Read access to a grayscale bitmap.
///
/// This is the only thing the rasterizer needs from an image, so any pixel
/// source can be printed by implementing it.
pub trait Grayscale {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Luma at `(x, y)`, 0 = black, 255 = white. Only called in bounds.
    fn luma(&self, x: u32, y: u32) -> u8;

    #[inline]
    fn is_ink(&self, x: u32, y: u32) -> bool {
        self.luma(x, y) < THRESHOLD
    }
}

impl Grayscale for GrayImage {
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn luma(&self, x: u32, y: u32) -> u8 {
        ImageBuffer::get_pixel(self, x, y).0[0]
    }
}

impl Grayscale for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn luma(&self, x: u32, y: u32) -> u8 {
        self.get_pixel(x, y).to_luma().0[0]
    }
}

/// One horizontal band of a rasterized image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    pub mode: DotMode,
    /// Width in columns
    pub width: u16,
    /// Column-major packed dots, `width * mode.bytes_per_column()` bytes
    pub data: Vec<u8>,
}

impl Strip {
    /// The `ESC *` command for this strip at the given density.
    pub fn to_command(&self, density: Density) -> Vec<u8> {
        bit_image(self.mode, density, self.width, &self.data)
    }
}

/// Split `bitmap` into strips, top to bottom.
///
/// Fails only when the image is wider than the 2-byte column count of the
/// bit image header can express. An image with zero height yields no strips.
///
/// ## Example
///
/// ```
/// use hoin::protocol::graphics::DotMode;
/// use hoin::render::raster::rasterize;
/// use image::{GrayImage, Luma};
///
/// let img = GrayImage::from_pixel(4, 10, Luma([0]));
/// let strips = rasterize(&img, DotMode::Eight).unwrap();
/// assert_eq!(strips.len(), 2);
/// assert_eq!(strips[1].data, vec![0b1100_0000; 4]);
/// ```
pub fn rasterize<B: Grayscale + ?Sized>(bitmap: &B, mode: DotMode) -> Result<Vec<Strip>, ValidationError> {
    let width = bitmap.width();
    let height = bitmap.height();
    let width_cols = u16::try_from(width).map_err(|_| ValidationError::ImageTooWide {
        width,
        max: u32::from(u16::MAX),
    })?;

    let unit = mode.height();
    let bytes_per_column = mode.bytes_per_column();

    let strips = (0..height)
        .step_by(unit as usize)
        .map(|top| {
            let mut data = Vec::with_capacity(width as usize * bytes_per_column);
            for x in 0..width {
                for byte in 0..bytes_per_column as u32 {
                    data.push(pack_byte(bitmap, x, top + byte * 8));
                }
            }
            Strip {
                mode,
                width: width_cols,
                data,
            }
        })
        .collect();

    Ok(strips)
}

/// Pack the 8 dots of column `x` starting at row `y0`, MSB = top.
fn pack_byte<B: Grayscale + ?Sized>(bitmap: &B, x: u32, y0: u32) -> u8 {
    let height = bitmap.height();
    (0..8u32).fold(0u8, |acc, i| {
        let y = y0 + i;
        let ink = y < height && bitmap.is_ink(x, y);
        (acc << 1) | u8::from(ink)
    })
}
