//! # Raw TCP Target (port 9100)
//!
//! Network receipt printers listen on the raw "JetDirect" port and accept
//! command bytes directly. Status replies come back on the same socket.

use std::fmt;
use std::io;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::debug;

use super::Dial;

/// Default raw TCP port
pub const DEFAULT_PORT: u16 = 9100;

/// A network printer address.
///
/// The optional timeout is applied as the socket's read/write deadline and as
/// the connect timeout. An elapsed deadline is one of the failures that makes
/// [`super::HealingTransport`] redial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcpTarget {
    addr: String,
    timeout: Option<Duration>,
}

impl TcpTarget {
    /// Target `addr`, appending [`DEFAULT_PORT`] when no port is given.
    ///
    /// ```
    /// use hoin::transport::TcpTarget;
    ///
    /// assert_eq!(TcpTarget::new("192.168.1.23").addr(), "192.168.1.23:9100");
    /// assert_eq!(TcpTarget::new("printer:9101").addr(), "printer:9101");
    /// ```
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: with_default_port(addr.into()),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }
}

fn with_default_port(addr: String) -> String {
    // Bracketed IPv6 literals carry colons of their own
    let has_port = match addr.rfind(']') {
        Some(close) => addr[close..].contains(':'),
        None => addr.contains(':'),
    };
    if has_port {
        addr
    } else {
        format!("{addr}:{DEFAULT_PORT}")
    }
}

impl fmt::Display for TcpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tcp://{}", self.addr)
    }
}

impl Dial for TcpTarget {
    type Stream = TcpStream;

    fn dial(&self) -> io::Result<TcpStream> {
        let stream = match self.timeout {
            None => TcpStream::connect(&self.addr)?,
            Some(timeout) => connect_timeout(&self.addr, timeout)?,
        };
        stream.set_read_timeout(self.timeout)?;
        stream.set_write_timeout(self.timeout)?;
        stream.set_nodelay(true)?;
        debug!(addr = %self.addr, "socket open");
        Ok(stream)
    }
}

/// Try each resolved address in turn, returning the last error if none connect.
fn connect_timeout(addr: &str, timeout: Duration) -> io::Result<TcpStream> {
    let mut last_err = None;
    for sock in addr.to_socket_addrs()? {
        match TcpStream::connect_timeout(&sock, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => last_err = Some(e),
        }
    }
    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{addr} did not resolve to any address"),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    #[test]
    fn test_default_port() {
        assert_eq!(TcpTarget::new("10.0.0.5").addr(), "10.0.0.5:9100");
        assert_eq!(TcpTarget::new("10.0.0.5:1234").addr(), "10.0.0.5:1234");
        assert_eq!(TcpTarget::new("[::1]").addr(), "[::1]:9100");
        assert_eq!(TcpTarget::new("[::1]:9000").addr(), "[::1]:9000");
    }

    #[test]
    fn test_display() {
        assert_eq!(TcpTarget::new("printer").to_string(), "tcp://printer:9100");
    }

    #[test]
    fn test_dial_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let server = std::thread::spawn(move || {
            let (mut conn, _) = listener.accept().unwrap();
            let mut buf = [0u8; 3];
            conn.read_exact(&mut buf).unwrap();
            conn.write_all(&[0x12]).unwrap();
            buf
        });

        let target = TcpTarget::new(addr).with_timeout(Some(Duration::from_secs(5)));
        let mut stream = target.dial().unwrap();
        stream.write_all(&[0x10, 0x04, 0x01]).unwrap();
        let mut reply = [0u8; 1];
        stream.read_exact(&mut reply).unwrap();

        assert_eq!(reply, [0x12]);
        assert_eq!(server.join().unwrap(), [0x10, 0x04, 0x01]);
    }
}
