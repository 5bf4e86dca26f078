//! Line-oriented character source for the scanner.
//!
//! [`LineBuffer`] holds one physical line of the source at a time and hands
//! it out character by character. When the line is used up it reads the next
//! one, bumps the line counter and echoes the raw line to the listing.
//! One character of pushback is kept in an explicit slot.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::{LexError, Result};
use crate::reporter::Listing;

/// A buffered reader that yields characters line by line.
///
/// # Example
///
/// ```
/// use tinyc_lex::{LineBuffer, Listing};
///
/// let mut listing = Listing::disabled();
/// let mut buffer = LineBuffer::new("ab".as_bytes());
///
/// assert_eq!(buffer.next_char(&mut listing).unwrap(), Some('a'));
/// buffer.pushback();
/// assert_eq!(buffer.next_char(&mut listing).unwrap(), Some('a'));
/// assert_eq!(buffer.next_char(&mut listing).unwrap(), Some('b'));
/// assert_eq!(buffer.next_char(&mut listing).unwrap(), None);
/// ```
pub struct LineBuffer<R> {
    /// The underlying source.
    reader: R,

    /// Raw bytes of the last physical line read.
    raw: Vec<u8>,

    /// Decoded content of the current line, including its `\n` if any.
    line: String,

    /// Byte offset of the next character in `line`.
    pos: usize,

    /// Number of physical lines read so far.
    lineno: u32,

    /// Set once the source has no more lines.
    eof: bool,

    /// Character to return before reading any further.
    pushed_back: Option<char>,

    /// Last character handed out, if it can be pushed back.
    last: Option<char>,
}

impl<R: BufRead> LineBuffer<R> {
    /// Creates a buffer over `reader`. Nothing is read until the first call
    /// to [`next_char`](Self::next_char).
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            raw: Vec::new(),
            line: String::new(),
            pos: 0,
            lineno: 0,
            eof: false,
            pushed_back: None,
            last: None,
        }
    }

    /// Returns the next character, or `None` at end of input.
    ///
    /// Once `None` has been returned every later call returns `None` too.
    /// A failed read is reported once and then treated as end of input.
    pub fn next_char(&mut self, listing: &mut Listing<'_>) -> Result<Option<char>> {
        if let Some(c) = self.pushed_back.take() {
            self.last = Some(c);
            return Ok(Some(c));
        }

        loop {
            if let Some(c) = self.line[self.pos..].chars().next() {
                self.pos += c.len_utf8();
                self.last = Some(c);
                return Ok(Some(c));
            }

            self.last = None;
            if self.eof || !self.refill(listing)? {
                return Ok(None);
            }
        }
    }

    /// Returns the last character to the buffer so the next
    /// [`next_char`](Self::next_char) yields it again.
    ///
    /// Only one character can be pushed back at a time, and pushing back
    /// after end of input does nothing.
    pub fn pushback(&mut self) {
        if let Some(c) = self.last.take() {
            debug_assert!(self.pushed_back.is_none(), "double pushback");
            self.pushed_back = Some(c);
        }
    }

    /// Reads the next physical line. Returns `false` at end of input.
    fn refill(&mut self, listing: &mut Listing<'_>) -> Result<bool> {
        self.raw.clear();
        match self.reader.read_until(b'\n', &mut self.raw) {
            Ok(0) => {
                self.eof = true;
                debug!(lines = self.lineno, "end of source");
                Ok(false)
            },
            Ok(len) => {
                self.lineno += 1;
                self.line.clear();
                self.line.push_str(&String::from_utf8_lossy(&self.raw));
                self.pos = 0;
                trace!(line = self.lineno, bytes = len, "read source line");
                listing.echo_line(self.lineno, &self.line)?;
                Ok(true)
            },
            Err(source) => {
                self.eof = true;
                Err(LexError::Read {
                    line: self.lineno + 1,
                    source,
                })
            },
        }
    }

    /// Returns the number of physical lines read so far.
    pub fn line(&self) -> u32 {
        self.lineno
    }

    /// Returns true once the source is exhausted and nothing is pending.
    pub fn is_at_end(&self) -> bool {
        self.eof && self.pushed_back.is_none() && self.pos >= self.line.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::ScanOptions;
    use std::io::{self, Read};

    fn drain(source: &str) -> (Vec<char>, u32) {
        let mut listing = Listing::disabled();
        let mut buffer = LineBuffer::new(source.as_bytes());
        let mut out = Vec::new();
        while let Some(c) = buffer.next_char(&mut listing).unwrap() {
            out.push(c);
        }
        (out, buffer.line())
    }

    #[test]
    fn test_yields_every_character() {
        let (chars, lines) = drain("ab\ncd");
        assert_eq!(chars, vec!['a', 'b', '\n', 'c', 'd']);
        assert_eq!(lines, 2);
    }

    #[test]
    fn test_empty_source() {
        let (chars, lines) = drain("");
        assert!(chars.is_empty());
        assert_eq!(lines, 0);
    }

    #[test]
    fn test_line_counter_advances_on_refill() {
        let mut listing = Listing::disabled();
        let mut buffer = LineBuffer::new("a\nb\n".as_bytes());
        assert_eq!(buffer.line(), 0);
        assert_eq!(buffer.next_char(&mut listing).unwrap(), Some('a'));
        assert_eq!(buffer.line(), 1);
        assert_eq!(buffer.next_char(&mut listing).unwrap(), Some('\n'));
        assert_eq!(buffer.line(), 1);
        assert_eq!(buffer.next_char(&mut listing).unwrap(), Some('b'));
        assert_eq!(buffer.line(), 2);
    }

    #[test]
    fn test_blank_lines_are_counted() {
        let (chars, lines) = drain("\n\n\nx");
        assert_eq!(chars, vec!['\n', '\n', '\n', 'x']);
        assert_eq!(lines, 4);
    }

    #[test]
    fn test_pushback_across_line_end() {
        let mut listing = Listing::disabled();
        let mut buffer = LineBuffer::new("a\nb".as_bytes());
        buffer.next_char(&mut listing).unwrap();
        assert_eq!(buffer.next_char(&mut listing).unwrap(), Some('\n'));
        buffer.pushback();
        assert_eq!(buffer.next_char(&mut listing).unwrap(), Some('\n'));
        assert_eq!(buffer.line(), 1);
        assert_eq!(buffer.next_char(&mut listing).unwrap(), Some('b'));
    }

    #[test]
    fn test_pushback_after_eof_is_noop() {
        let mut listing = Listing::disabled();
        let mut buffer = LineBuffer::new("x".as_bytes());
        assert_eq!(buffer.next_char(&mut listing).unwrap(), Some('x'));
        assert_eq!(buffer.next_char(&mut listing).unwrap(), None);
        buffer.pushback();
        assert!(buffer.is_at_end());
        assert_eq!(buffer.next_char(&mut listing).unwrap(), None);
        assert_eq!(buffer.next_char(&mut listing).unwrap(), None);
        assert_eq!(buffer.line(), 1);
    }

    #[test]
    fn test_second_pushback_without_read_is_ignored() {
        let mut listing = Listing::disabled();
        let mut buffer = LineBuffer::new("xy".as_bytes());
        buffer.next_char(&mut listing).unwrap();
        buffer.pushback();
        buffer.pushback();
        assert_eq!(buffer.next_char(&mut listing).unwrap(), Some('x'));
        assert_eq!(buffer.next_char(&mut listing).unwrap(), Some('y'));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut listing = Listing::disabled();
        let bytes: &[u8] = b"a\xffb";
        let mut buffer = LineBuffer::new(bytes);
        assert_eq!(buffer.next_char(&mut listing).unwrap(), Some('a'));
        assert_eq!(
            buffer.next_char(&mut listing).unwrap(),
            Some(char::REPLACEMENT_CHARACTER)
        );
        assert_eq!(buffer.next_char(&mut listing).unwrap(), Some('b'));
    }

    #[test]
    fn test_echo_numbers_each_line() {
        let mut out = Vec::new();
        {
            let mut listing = Listing::new(&mut out, ScanOptions::default());
            let mut buffer = LineBuffer::new("x\n\ny".as_bytes());
            while buffer.next_char(&mut listing).unwrap().is_some() {}
        }
        assert_eq!(String::from_utf8(out).unwrap(), "1: x\n2: \n3: y\n");
    }

    #[test]
    fn test_long_line_is_not_split() {
        let source = "a".repeat(1000);
        let (chars, lines) = drain(&source);
        assert_eq!(chars.len(), 1000);
        assert_eq!(lines, 1);
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_read_failure_then_eof() {
        let mut listing = Listing::disabled();
        let mut buffer = LineBuffer::new(io::BufReader::new(BrokenReader));
        let err = buffer.next_char(&mut listing).unwrap_err();
        assert!(matches!(err, LexError::Read { line: 1, .. }));
        assert_eq!(buffer.next_char(&mut listing).unwrap(), None);
    }
}
