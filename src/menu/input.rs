//! Line-based input port for the text menu.

use std::io::{self, BufRead};

/// Reads one answer per line from any buffered reader.
pub struct InputPort<R> {
    reader: R,
}

impl<R: BufRead> InputPort<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read the next line without its terminator. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
