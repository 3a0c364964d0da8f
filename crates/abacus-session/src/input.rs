//! Whitespace-delimited token reading over any buffered input.

use std::collections::VecDeque;
use std::io::BufRead;

/// Reads one whitespace-delimited token at a time, pulling further lines
/// from the underlying reader only when the current line is used up.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// The next token, or `None` once the input is exhausted.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// garbled token still reaches validation.
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        let mut line = Vec::new();
        while self.pending.is_empty() {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
        Ok(self.pending.pop_front())
    }
}
