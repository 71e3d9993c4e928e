//! # Rendering
//!
//! Turns bitmaps into the strip format the bit image command prints.

pub mod raster;
