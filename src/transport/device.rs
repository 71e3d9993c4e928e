//! # Local Device Target
//!
//! USB and serial printers show up as device files (`/dev/usb/lp0`,
//! `/dev/ttyUSB0`). The file is opened read-write so status replies can be
//! read back from the same handle.
//!
//! ## TTY Configuration
//!
//! When the device is a TTY it is switched to raw mode so binary data is
//! transmitted without modification:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR, ICRNL
//! - **No software flow control**: IXON, IXOFF, IXANY (0x11/0x13 occur in image data)
//! - **No output processing**: OPOST (no LF to CRLF translation)
//! - **8-bit characters**: CS8, no parity
//! - **Non-canonical, no echo**: ICANON, ECHO, ECHONL, ISIG, IEXTEN cleared
//!
//! Line printer devices are not TTYs and are used as-is.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Dial;

/// Default USB line printer device
pub const DEFAULT_DEVICE: &str = "/dev/usb/lp0";

/// A printer reachable through a device file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceTarget {
    path: PathBuf,
}

impl DeviceTarget {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for DeviceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl Dial for DeviceTarget {
    type Stream = File;

    fn dial(&self) -> io::Result<File> {
        let file = OpenOptions::new().read(true).write(true).open(&self.path)?;
        configure_if_tty(&file)?;
        debug!(path = %self.path.display(), "device open");
        Ok(file)
    }
}

#[cfg(unix)]
fn configure_if_tty(file: &File) -> io::Result<()> {
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    if unsafe { libc::isatty(fd) } != 1 {
        return Ok(());
    }
    configure_tty_raw(fd)
}

#[cfg(not(unix))]
fn configure_if_tty(_file: &File) -> io::Result<()> {
    Ok(())
}

/// Put a TTY file descriptor into raw mode.
#[cfg(unix)]
fn configure_tty_raw(fd: i32) -> io::Result<()> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    if unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) } != 0 {
        return Err(io::Error::last_os_error());
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    // Block until the single status byte arrives
    termios.c_cc[libc::VMIN] = 1;
    termios.c_cc[libc::VTIME] = 0;

    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}
