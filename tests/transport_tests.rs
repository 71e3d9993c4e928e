//! # Transport Tests
//!
//! A [`Printer`] over a [`HealingTransport`] whose target hands out scripted
//! streams, plus one run against a real local socket.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, ErrorKind, Read, Write};
use std::net::TcpListener;
use std::rc::Rc;
use std::time::Duration;

use hoin::printer::{Printer, PrinterConfig};
use hoin::transport::{Dial, HealingTransport, TcpTarget};
use hoin::HoinError;
use pretty_assertions::assert_eq;

/// Everything written through any stream the script handed out
type Wire = Rc<RefCell<Vec<u8>>>;

struct ScriptedStream {
    fail_write: Option<ErrorKind>,
    fail_read: Option<ErrorKind>,
    wire: Wire,
    replies: VecDeque<u8>,
}

impl Read for ScriptedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(kind) = self.fail_read.take() {
            return Err(kind.into());
        }
        match self.replies.pop_front() {
            Some(b) => {
                buf[0] = b;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

impl Write for ScriptedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(kind) = self.fail_write.take() {
            return Err(kind.into());
        }
        self.wire.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct ScriptedTarget {
    streams: RefCell<VecDeque<ScriptedStream>>,
}

impl fmt::Display for ScriptedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scripted")
    }
}

impl Dial for ScriptedTarget {
    type Stream = ScriptedStream;

    fn dial(&self) -> io::Result<ScriptedStream> {
        self.streams
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| io::Error::new(ErrorKind::ConnectionRefused, "printer unplugged"))
    }
}

fn stream(wire: &Wire, fail_write: Option<ErrorKind>, replies: &[u8]) -> ScriptedStream {
    ScriptedStream {
        fail_write,
        fail_read: None,
        wire: Rc::clone(wire),
        replies: replies.iter().copied().collect(),
    }
}

fn session(streams: Vec<ScriptedStream>) -> Printer<HealingTransport<ScriptedTarget>> {
    let target = ScriptedTarget {
        streams: RefCell::new(streams.into()),
    };
    Printer::new(HealingTransport::connect(target).unwrap())
}

#[test]
fn test_idle_disconnect_is_invisible() {
    let wire = Wire::default();
    let mut printer = session(vec![
        stream(&wire, Some(ErrorKind::BrokenPipe), &[]),
        stream(&wire, None, &[]),
    ]);

    printer.initialize().unwrap();
    printer.println("ok").unwrap();

    assert_eq!(*wire.borrow(), vec![0x1B, 0x40, b'o', b'k', 0x0A]);
}

#[test]
fn test_write_deadline_resends_query() {
    let wire = Wire::default();
    let mut printer = session(vec![
        stream(&wire, Some(ErrorKind::WouldBlock), &[]),
        stream(&wire, None, &[0b0000_1100]),
    ]);

    let paper = printer.transmit_paper_sensor_status().unwrap();
    assert!(paper.near_end);
    assert!(!paper.roll_end);
    assert_eq!(*wire.borrow(), vec![0x10, 0x04, 0x04]);
}

#[test]
fn test_read_deadline_rereads_on_new_stream() {
    let wire = Wire::default();
    let mut stale = stream(&wire, None, &[]);
    stale.fail_read = Some(ErrorKind::TimedOut);
    let mut printer = session(vec![stale, stream(&wire, None, &[0b0000_0100])]);

    assert!(printer.transmit_printer_status().unwrap().drawer_open);
    assert_eq!(*wire.borrow(), vec![0x10, 0x04, 0x01]);
}

#[test]
fn test_missing_reply_is_eof() {
    let wire = Wire::default();
    let mut printer = session(vec![stream(&wire, None, &[])]);

    assert!(matches!(
        printer.transmit_offline_status(),
        Err(HoinError::UnexpectedEof)
    ));
}

#[test]
fn test_device_gone_reports_both_errors() {
    let wire = Wire::default();
    let mut printer = session(vec![stream(&wire, Some(ErrorKind::BrokenPipe), &[])]);

    let err = printer.cut().unwrap_err();
    let message = err.to_string();
    assert!(matches!(err, HoinError::Redial { .. }));
    assert!(message.contains("broken pipe"), "{message}");
    assert!(message.contains("printer unplugged"), "{message}");
}

#[test]
fn test_validation_failure_never_writes() {
    let wire = Wire::default();
    let mut printer = session(vec![stream(&wire, Some(ErrorKind::BrokenPipe), &[])]);

    assert!(printer.feed(300).unwrap_err().is_validation());
    assert!(wire.borrow().is_empty());
}

#[test]
fn test_tcp_round_trip() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let server = std::thread::spawn(move || {
        let (mut conn, _) = listener.accept().unwrap();
        let mut buf = [0u8; 5];
        conn.read_exact(&mut buf).unwrap();
        conn.write_all(&[0b0100_0000]).unwrap();
        buf
    });

    let config = PrinterConfig::HOP_E802.with_timeout(Some(Duration::from_secs(5)));
    let target = TcpTarget::new(addr).with_timeout(config.io_timeout);
    let mut printer = Printer::with_config(HealingTransport::connect(target).unwrap(), &config);

    printer.initialize().unwrap();
    let error = printer.transmit_error_status().unwrap();

    assert!(error.auto_recoverable);
    assert_eq!(server.join().unwrap(), [0x1B, 0x40, 0x10, 0x04, 0x03]);
}
