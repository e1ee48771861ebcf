//! Output sinks.
//!
//! The writer produces text through a [`Sink`]. [`StringSink`] builds
//! the document in memory; [`FileSink`] streams it to a buffered file.
//! The write surface is infallible: file I/O errors are deferred and
//! surface on [`FileSink::flush`] or [`FileSink::finish`].

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Destination for emitted text.
///
/// The writer drives a sink during emission. Different implementations
/// support in-memory strings, file output, or other destinations.
pub trait Sink {
    /// Write a text fragment.
    fn write_str(&mut self, text: &str);

    /// Write a newline (Unix-style `\n`).
    fn write_newline(&mut self);

    /// Write indentation as the given number of spaces.
    fn write_indent(&mut self, spaces: usize);

    /// Write a single space.
    fn write_space(&mut self);
}

/// String-based sink for in-memory emission.
///
/// This is the default sink; it accumulates the document and hands it
/// back through [`StringSink::output`].
#[derive(Default)]
pub struct StringSink {
    buffer: String,
}

impl StringSink {
    /// Create a new string sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the current length of the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get the emitted text.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Sink for StringSink {
    fn write_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn write_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn write_indent(&mut self, spaces: usize) {
        for _ in 0..spaces {
            self.buffer.push(' ');
        }
    }

    fn write_space(&mut self) {
        self.buffer.push(' ');
    }
}

/// File-based sink streaming output through a buffered writer.
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Create a sink writing to the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Flush any buffered output to the file.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails, including errors deferred
    /// from earlier writes.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Finish writing and surface any deferred error.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Sink for FileSink {
    fn write_str(&mut self, text: &str) {
        // Errors are deferred; callers check flush()/finish().
        let _ = self.writer.write_all(text.as_bytes());
    }

    fn write_newline(&mut self) {
        let _ = self.writer.write_all(b"\n");
    }

    fn write_indent(&mut self, spaces: usize) {
        for _ in 0..spaces {
            let _ = self.writer.write_all(b" ");
        }
    }

    fn write_space(&mut self) {
        let _ = self.writer.write_all(b" ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_sink_basic() {
        let mut sink = StringSink::new();
        sink.write_str("digraph");
        sink.write_space();
        sink.write_str("{");
        assert_eq!(sink.output(), "digraph {");
    }

    #[test]
    fn string_sink_newline() {
        let mut sink = StringSink::new();
        sink.write_str("a;");
        sink.write_newline();
        sink.write_str("b;");
        assert_eq!(sink.output(), "a;\nb;");
    }

    #[test]
    fn string_sink_indentation() {
        let mut sink = StringSink::new();
        sink.write_indent(4);
        sink.write_str("a;");
        sink.write_newline();
        sink.write_indent(8);
        sink.write_str("b;");
        assert_eq!(sink.output(), "    a;\n        b;");
    }

    #[test]
    fn string_sink_with_capacity() {
        let sink = StringSink::with_capacity(1024);
        assert!(sink.is_empty());
        assert_eq!(sink.len(), 0);
    }
}
