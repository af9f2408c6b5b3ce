//! Logical key events decoded from a raw terminal byte stream.
//!
//! In raw mode the terminal delivers bytes exactly as typed, including
//! multi-byte arrow-key escape sequences. The decoder collapses that stream
//! into a small closed set of events the engine cares about and swallows
//! everything else, so the engine never sees a partial or ambiguous key.

use std::io::{self, BufRead};

/// One decoded key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Space,
    /// A single ASCII letter, interpreted per prompt variant (`r`, `q`, ...).
    Cmd(char),
}

/// Decoder over a blocking byte stream.
///
/// Owns the input stream for the duration of a prompt run; the search query
/// phase borrows the same stream through [`KeyDecoder::read_line`] so key
/// events and line reads can never interleave from two readers.
pub struct KeyDecoder<R> {
    input: R,
}

impl<R: BufRead> KeyDecoder<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Block until one recognized key event is available.
    ///
    /// Unrecognized bytes and garbled escape sequences are consumed without
    /// producing an event.
    pub fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(key) = self.decode_next()? {
                return Ok(key);
            }
        }
    }

    /// Attempt to decode exactly one event from the stream.
    ///
    /// Returns `None` when the consumed byte (or escape sequence) maps to no
    /// event; the caller decides whether to keep reading.
    fn decode_next(&mut self) -> io::Result<Option<Key>> {
        let byte = self.read_byte()?;
        match byte {
            13 | 10 => Ok(Some(Key::Enter)),
            32 => Ok(Some(Key::Space)),
            27 => self.decode_escape(),
            b if b.is_ascii_alphabetic() => Ok(Some(Key::Cmd(b as char))),
            _ => Ok(None),
        }
    }

    /// Decode the two bytes following an ESC (27).
    ///
    /// Only `ESC [ A` and `ESC [ B` map to events. Anything else is
    /// swallowed: the mismatching byte is consumed and decoding resumes at
    /// the next byte, so a garbled sequence can never surface as a spurious
    /// letter command.
    fn decode_escape(&mut self) -> io::Result<Option<Key>> {
        if self.read_byte()? != 91 {
            return Ok(None);
        }
        match self.read_byte()? {
            65 => Ok(Some(Key::Up)),
            66 => Ok(Some(Key::Down)),
            _ => Ok(None),
        }
    }

    /// Consume one byte of any kind: the "press any key to continue" path.
    pub fn read_any(&mut self) -> io::Result<()> {
        self.read_byte().map(|_| ())
    }

    /// Read one line in canonical mode (the search query phase).
    ///
    /// Returns the line without its trailing newline. EOF surfaces as
    /// `UnexpectedEof` so a closed stream is not mistaken for an empty query.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        self.input.read_exact(&mut buf)?;
        Ok(buf[0])
    }
}
