//! # Self-Healing Transport
//!
//! Holds exactly one live stream plus the target it was dialed from. The
//! stream is replaced on transient failure; callers only see latency.

use std::io::{self, ErrorKind, Read, Write};

use tracing::{info, warn};

use super::{Dial, Transport};
use crate::error::HoinError;

/// Errors that mean "the connection went stale", as opposed to "the device
/// is gone". Socket deadlines surface as `WouldBlock` on Unix and
/// `TimedOut` on Windows.
pub fn is_transient(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::BrokenPipe | ErrorKind::TimedOut | ErrorKind::WouldBlock
    )
}

/// # Redialing Transport
///
/// ## Example
///
/// ```no_run
/// use hoin::transport::{HealingTransport, TcpTarget, Transport};
///
/// let mut transport = HealingTransport::connect(TcpTarget::new("192.168.1.23"))?;
/// transport.write_all(&[0x1B, 0x40])?;
/// # Ok::<(), hoin::HoinError>(())
/// ```
pub struct HealingTransport<D: Dial> {
    target: D,
    stream: Option<D::Stream>,
}

impl<D: Dial> HealingTransport<D> {
    /// Dial `target` and wrap the resulting stream.
    pub fn connect(target: D) -> Result<Self, HoinError> {
        let stream = target
            .dial()
            .map_err(|e| HoinError::transport(format!("could not dial {target}"), e))?;
        info!(printer = %target, "connected");
        Ok(Self {
            target,
            stream: Some(stream),
        })
    }

    /// The target this transport dials.
    pub fn target(&self) -> &D {
        &self.target
    }

    /// The live stream, dialing first if a previous redial left none.
    fn stream(&mut self) -> Result<&mut D::Stream, HoinError> {
        let stream = match self.stream.take() {
            Some(stream) => stream,
            None => self
                .target
                .dial()
                .map_err(|e| HoinError::transport(format!("could not dial {}", self.target), e))?,
        };
        Ok(self.stream.insert(stream))
    }

    /// Close the stale stream and dial the target again.
    fn redial(&mut self) -> io::Result<()> {
        self.stream = None;
        self.stream = Some(self.target.dial()?);
        Ok(())
    }

    /// Run `op` on the stream; on a transient failure redial and run it once more.
    fn with_redial<R>(
        &mut self,
        what: &'static str,
        mut op: impl FnMut(&mut D::Stream) -> io::Result<R>,
    ) -> Result<R, HoinError> {
        let first = {
            let stream = self.stream()?;
            op(stream)
        };
        let original = match first {
            Ok(r) => return Ok(r),
            Err(e) if is_transient(&e) => e,
            Err(e) => {
                return Err(HoinError::transport(
                    format!("could not {what} {}", self.target),
                    e,
                ));
            }
        };

        warn!(printer = %self.target, error = %original, "{what} failed, redialing");
        if let Err(redial) = self.redial() {
            return Err(HoinError::Redial { original, redial });
        }
        info!(printer = %self.target, "redialed");

        let stream = self.stream()?;
        op(stream).map_err(|e| {
            HoinError::transport(format!("could not {what} {} after redial", self.target), e)
        })
    }
}

impl<D: Dial> Transport for HealingTransport<D> {
    fn write_all(&mut self, data: &[u8]) -> Result<(), HoinError> {
        self.with_redial("write to", |stream| {
            stream.write_all(data)?;
            stream.flush()
        })
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, HoinError> {
        self.with_redial("read from", |stream| stream.read(buf))
    }
}
