use std::io;

use crate::error::RuntimeError;

/// Collects the printed values of one line.
///
/// The first value is written as `>> v`, every later one as ` v`. Nothing
/// reaches the sink until [`OutputBuffer::commit`] is called, which only
/// happens once the whole line has run; a failed line simply drops its
/// buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputBuffer {
    buffer:      String,
    has_printed: bool,
    capacity:    usize,
}

impl OutputBuffer {
    /// Creates an empty buffer holding at most `capacity` bytes, the trailing
    /// newline added by [`commit`](Self::commit) included.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { buffer: String::new(),
               has_printed: false,
               capacity }
    }

    /// Appends one printed value.
    ///
    /// # Errors
    /// Returns `OutputBufferFull` if the value, plus the newline added on
    /// commit, would not fit. The buffer is unchanged in that case.
    ///
    /// # Example
    /// ```
    /// use plang::interpreter::output::OutputBuffer;
    ///
    /// let mut out = OutputBuffer::new(64);
    /// out.write(50).unwrap();
    /// out.write(-3).unwrap();
    /// assert_eq!(out.as_str(), ">> 50 -3");
    /// ```
    pub fn write(&mut self, value: i64) -> Result<(), RuntimeError> {
        let piece = if self.has_printed {
            format!(" {value}")
        } else {
            format!(">> {value}")
        };

        if self.buffer.len() + piece.len() + 1 > self.capacity {
            return Err(RuntimeError::OutputBufferFull { capacity: self.capacity });
        }

        self.buffer.push_str(&piece);
        self.has_printed = true;
        Ok(())
    }

    /// Returns `true` once at least one value was written.
    #[must_use]
    pub const fn has_printed(&self) -> bool {
        self.has_printed
    }

    /// The buffered text, without the trailing newline.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Writes the buffered line plus a newline to `sink`.
    ///
    /// A line that printed nothing writes nothing at all.
    ///
    /// # Errors
    /// Propagates I/O errors from the sink.
    pub fn commit<W: io::Write>(mut self, sink: &mut W) -> io::Result<()> {
        if !self.has_printed() {
            return Ok(());
        }
        self.buffer.push('\n');
        sink.write_all(self.buffer.as_bytes())?;
        sink.flush()
    }

    /// Consumes the buffer and returns the committed text, newline included,
    /// or an empty string if nothing was printed.
    #[must_use]
    pub fn into_line(self) -> String {
        if !self.has_printed() {
            return String::new();
        }
        let mut line = self.buffer;
        line.push('\n');
        line
    }
}
