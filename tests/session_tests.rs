//! # Session Tests
//!
//! Drive [`Printer`] end to end over an in-memory transport and check the
//! exact bytes that would reach the device.
//!
//! ## Test Coverage
//!
//! - **Commands**: every operation writes one command with the documented bytes
//! - **Validation**: rejected parameters never reach the transport
//! - **Images**: strip sequencing, padding and pacing
//! - **Status**: query bytes and reply decoding

use hoin::printer::{Printer, PrinterConfig};
use hoin::protocol::barcode::{HriPosition, Symbology};
use hoin::protocol::graphics::{Density, DotMode};
use hoin::protocol::text::{Font, Justification};
use hoin::transport::MemoryTransport;
use hoin::{HoinError, ValidationError};
use image::{GrayImage, Luma};
use pretty_assertions::assert_eq;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn printer() -> Printer<MemoryTransport> {
    Printer::new(MemoryTransport::new())
}

fn unpaced() -> Printer<MemoryTransport> {
    let config = PrinterConfig::HOP_E802.with_pacing(false);
    Printer::with_config(MemoryTransport::new(), &config)
}

/// Run `op` on a fresh session and return what it wrote.
fn written(op: impl FnOnce(&mut Printer<MemoryTransport>) -> Result<(), HoinError>) -> Vec<Vec<u8>> {
    let mut p = printer();
    op(&mut p).unwrap();
    p.transport().writes().to_vec()
}

/// Run `op` on a fresh session, expecting a validation error and no writes.
fn rejected(op: impl FnOnce(&mut Printer<MemoryTransport>) -> Result<(), HoinError>) -> ValidationError {
    let mut p = printer();
    let err = op(&mut p).unwrap_err();
    assert!(p.transport().writes().is_empty(), "bytes written despite {err}");
    match err {
        HoinError::Validation(v) => v,
        other => panic!("expected validation error, got {other:?}"),
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

#[test]
fn test_fixed_commands() {
    assert_eq!(written(|p| p.initialize()), vec![vec![0x1B, 0x40]]);
    assert_eq!(written(|p| p.horizontal_tab()), vec![vec![0x09]]);
    assert_eq!(written(|p| p.line_feed()), vec![vec![0x0A]]);
    assert_eq!(written(|p| p.carriage_return()), vec![vec![0x0D]]);
    assert_eq!(written(|p| p.cut()), vec![vec![0x1D, 0x56, 0x00]]);
    assert_eq!(written(|p| p.reset_line_spacing()), vec![vec![0x1B, 0x32]]);
    assert_eq!(written(|p| p.reset_barcode_height()), vec![vec![0x1D, 0x68, 162]]);
}

#[test]
fn test_ranged_commands_accept_bounds() {
    for v in [0, 1, 128, 255] {
        let b = v as u8;
        assert_eq!(written(|p| p.feed(v)), vec![vec![0x1B, 0x4A, b]]);
        assert_eq!(written(|p| p.feed_lines(v)), vec![vec![0x1B, 0x64, b]]);
        assert_eq!(written(|p| p.cut_feed(v)), vec![vec![0x1D, 0x56, 0x42, b]]);
        assert_eq!(written(|p| p.set_line_spacing(v)), vec![vec![0x1B, 0x33, b]]);
    }
    assert_eq!(written(|p| p.beep(9, 1)), vec![vec![0x1B, 0x42, 9, 1]]);
    assert_eq!(written(|p| p.set_barcode_height(1)), vec![vec![0x1D, 0x68, 1]]);
}

#[test]
fn test_ranged_commands_reject_out_of_bounds() {
    for v in [-1, 256] {
        assert!(matches!(rejected(|p| p.feed(v)), ValidationError::OutOfRange { .. }));
        assert!(matches!(rejected(|p| p.feed_lines(v)), ValidationError::OutOfRange { .. }));
        assert!(matches!(rejected(|p| p.cut_feed(v)), ValidationError::OutOfRange { .. }));
        assert!(matches!(rejected(|p| p.set_line_spacing(v)), ValidationError::OutOfRange { .. }));
    }
    for (n, t) in [(0, 1), (10, 1), (1, 0), (1, 10)] {
        rejected(|p| p.beep(n, t));
    }
    rejected(|p| p.set_barcode_height(0));
    rejected(|p| p.set_tab_width(0));
}

#[test]
fn test_out_of_range_message() {
    let err = rejected(|p| p.beep(12, 1));
    assert_eq!(err.to_string(), "n must be between 1 and 9, got 12");
}

#[test]
fn test_text_settings() {
    assert_eq!(
        written(|p| {
            p.set_bold(true)?;
            p.set_rotate_90(false)?;
            p.set_reverse(true)?;
            p.set_font(Font::B)?;
            p.justify(Justification::Right)
        }),
        vec![
            vec![0x1B, 0x45, 1],
            vec![0x1B, 0x56, 0],
            vec![0x1D, 0x42, 1],
            vec![0x1B, 0x4D, 1],
            vec![0x1B, 0x61, 2],
        ]
    );
}

#[test]
fn test_print_and_raw() {
    assert_eq!(
        written(|p| {
            p.print("a\tb")?;
            p.println("c")?;
            p.write_raw(&[0x1B, 0x40])
        }),
        vec![b"a\tb".to_vec(), b"c\n".to_vec(), vec![0x1B, 0x40]]
    );
}

// ============================================================================
// TAB STOPS
// ============================================================================

#[test]
fn test_tab_stops() {
    assert_eq!(written(|p| p.set_tab_stops(&[])), vec![vec![0x1B, 0x44, 0x00]]);
    assert_eq!(
        written(|p| p.set_tab_stops(&[4, 8, 12])),
        vec![vec![0x1B, 0x44, 4, 8, 12, 0x00]]
    );

    let too_many: Vec<i32> = (1..=33).collect();
    assert_eq!(
        rejected(|p| p.set_tab_stops(&too_many)),
        ValidationError::TooManyTabStops { count: 33, max: 32 }
    );
    rejected(|p| p.set_tab_stops(&[8, 0]));
}

#[test]
fn test_tab_width() {
    assert_eq!(
        written(|p| p.set_tab_width(100)),
        vec![vec![0x1B, 0x44, 100, 200, 0x00]]
    );

    let writes = written(|p| p.set_tab_width(1));
    assert_eq!(writes[0].len(), 2 + 32 + 1);
}

// ============================================================================
// BARCODES
// ============================================================================

#[test]
fn test_barcode_sequence() {
    assert_eq!(
        written(|p| {
            p.set_hri_position(HriPosition::Below)?;
            p.print_barcode(Symbology::Codabar, "A1234B")
        }),
        vec![
            vec![0x1D, 0x48, 2],
            vec![0x1D, 0x6B, 6, b'A', b'1', b'2', b'3', b'4', b'B', 0x00],
        ]
    );
}

#[test]
fn test_barcode_rejections() {
    assert!(matches!(
        rejected(|p| p.print_barcode(Symbology::Codabar, "1234")),
        ValidationError::CodabarWrapper { .. }
    ));
    assert!(matches!(
        rejected(|p| p.print_barcode(Symbology::Itf, "12A4")),
        ValidationError::InvalidCharacter { character: 'A', .. }
    ));
    assert!(matches!(
        rejected(|p| p.print_barcode(Symbology::UpcA, "123")),
        ValidationError::LengthOutOfRange { .. }
    ));
}

#[test]
fn test_length_prefixed_barcode() {
    assert_eq!(
        written(|p| p.print_barcode(Symbology::Code128, "AB-12")),
        vec![vec![0x1D, 0x6B, 73, 5, b'A', b'B', b'-', b'1', b'2']]
    );
}

// ============================================================================
// IMAGES
// ============================================================================

#[test]
fn test_image_white_and_black_blocks() {
    let mut p = unpaced();
    p.print_image8(&GrayImage::from_pixel(8, 8, Luma([255])), Density::Single).unwrap();
    p.print_image8(&GrayImage::from_pixel(8, 8, Luma([0])), Density::Single).unwrap();

    let writes = p.transport().writes();
    assert_eq!(writes.len(), 6);
    assert_eq!(&writes[1][..5], &[0x1B, 0x2A, 0, 8, 0]);
    assert_eq!(&writes[1][5..], &[0x00; 8]);
    assert_eq!(&writes[4][..5], &[0x1B, 0x2A, 0, 8, 0]);
    assert_eq!(&writes[4][5..], &[0xFF; 8]);
}

#[test]
fn test_image_strip_sequence_and_padding() {
    let mut p = unpaced();
    let img = GrayImage::from_pixel(3, 10, Luma([0]));
    p.print_image(&img, Density::Double, DotMode::Eight).unwrap();

    assert_eq!(
        p.transport().writes(),
        &[
            vec![0x1B, 0x33, 0],
            vec![0x1B, 0x2A, 1, 3, 0, 0xFF, 0xFF, 0xFF],
            vec![0x0A],
            vec![0x1B, 0x33, 0],
            vec![0x1B, 0x2A, 1, 3, 0, 0xC0, 0xC0, 0xC0],
            vec![0x0A],
        ]
    );
}

#[test]
fn test_image_24_dot_header() {
    let mut p = unpaced();
    let img = GrayImage::from_pixel(2, 24, Luma([0]));
    p.print_image24(&img, Density::Double).unwrap();

    let strip = &p.transport().writes()[1];
    assert_eq!(&strip[..5], &[0x1B, 0x2A, 33, 2, 0]);
    assert_eq!(&strip[5..], &[0xFF; 6]);
}

#[test]
fn test_image_paced_by_error_status() {
    let mut p = Printer::new(MemoryTransport::with_replies([0x12, 0x12]));
    let img = GrayImage::from_pixel(1, 16, Luma([255]));
    p.print_image8(&img, Density::Single).unwrap();

    let writes = p.transport().writes();
    assert_eq!(writes.len(), 8);
    assert_eq!(writes[3], vec![0x10, 0x04, 0x03]);
    assert_eq!(writes[7], vec![0x10, 0x04, 0x03]);
}

#[test]
fn test_empty_image_writes_nothing() {
    let mut p = printer();
    p.print_image24(&GrayImage::new(5, 0), Density::Single).unwrap();
    assert!(p.transport().writes().is_empty());
}

// ============================================================================
// STATUS
// ============================================================================

#[test]
fn test_status_decoding() {
    let mut p = Printer::new(MemoryTransport::with_replies([
        0b0000_0100,
        0b0010_0100,
        0b0100_1000,
        0b0110_0000,
    ]));

    assert!(p.transmit_printer_status().unwrap().drawer_open);

    let offline = p.transmit_offline_status().unwrap();
    assert!(offline.cover_open);
    assert!(offline.printing_stopped);
    assert!(!offline.feed_button);
    assert!(!offline.error_occurred);

    let error = p.transmit_error_status().unwrap();
    assert!(error.auto_cutter);
    assert!(error.auto_recoverable);
    assert!(!error.unrecoverable);

    let paper = p.transmit_paper_sensor_status().unwrap();
    assert!(paper.roll_end);
    assert!(!paper.near_end);

    assert_eq!(
        p.transport().writes(),
        &[
            vec![0x10, 0x04, 1],
            vec![0x10, 0x04, 2],
            vec![0x10, 0x04, 3],
            vec![0x10, 0x04, 4],
        ]
    );
}

#[test]
fn test_status_eof() {
    let mut p = printer();
    assert!(matches!(
        p.transmit_paper_sensor_status(),
        Err(HoinError::UnexpectedEof)
    ));
}
