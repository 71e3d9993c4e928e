//! # Morse Beeping
//!
//! Spells a message on the buzzer. A message becomes a flat list of timing
//! units: `1` is a dot, `3` a dash, `0` a unit of silence. Each symbol is
//! followed by one silent unit, each letter by three more, each word by
//! seven. Words are separated by single spaces; characters without a morse
//! code are skipped.
//!
//! ```
//! use hoin::morse::to_timings;
//!
//! let e = to_timings("e");
//! assert_eq!(e[..5], [1, 0, 0, 0, 0]);
//! assert_eq!(e.len(), 5 + 7);
//! ```

use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::error::HoinError;
use crate::printer::Printer;
use crate::transport::Transport;

/// Pause after every timing unit, sounding or silent
pub const UNIT_PAUSE: Duration = Duration::from_millis(100);

const DOT: u8 = 1;
const DASH: u8 = 3;
const LETTER_GAP: usize = 3;
const WORD_GAP: usize = 7;

fn code(c: char) -> Option<&'static str> {
    let code = match c.to_ascii_lowercase() {
        'a' => ".-",
        'b' => "-...",
        'c' => "-.-.",
        'd' => "-..",
        'e' => ".",
        'f' => "..-.",
        'g' => "--.",
        'h' => "....",
        'i' => "..",
        'j' => ".---",
        'k' => "-.-",
        'l' => ".-..",
        'm' => "--",
        'n' => "-.",
        'o' => "---",
        'p' => ".--.",
        'q' => "--.-",
        'r' => ".-.",
        's' => "...",
        't' => "-",
        'u' => "..-",
        'v' => "...-",
        'w' => ".--",
        'x' => "-..-",
        'y' => "-.--",
        'z' => "--..",
        '0' => "-----",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        _ => return None,
    };
    Some(code)
}

/// Timing units for `message`.
pub fn to_timings(message: &str) -> Vec<u8> {
    let mut units = Vec::new();
    for word in message.split(' ') {
        for c in word.chars() {
            let Some(code) = code(c) else { continue };
            for symbol in code.chars() {
                units.push(if symbol == '-' { DASH } else { DOT });
                units.push(0);
            }
            units.extend([0; LETTER_GAP]);
        }
        units.extend([0; WORD_GAP]);
    }
    units
}

impl<T: Transport> Printer<T> {
    /// Beep `message` in morse code.
    ///
    /// Each sounding unit is one `beep(1, t)`. The session sleeps
    /// [`UNIT_PAUSE`] after every unit so the buzzer is not flooded.
    pub fn morse(&mut self, message: &str) -> Result<(), HoinError> {
        self.morse_paced(message, UNIT_PAUSE)
    }

    pub(crate) fn morse_paced(&mut self, message: &str, pause: Duration) -> Result<(), HoinError> {
        let units = to_timings(message);
        debug!(units = units.len(), "morse");
        for t in units {
            if t != 0 {
                self.beep(1, i32::from(t))?;
            }
            thread::sleep(pause);
        }
        Ok(())
    }
}
