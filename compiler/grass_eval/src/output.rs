//! Output sinks for the `out` primitive.
//!
//! Output can be directed to different destinations:
//! - Stdout: the `grass` binary
//! - Buffer: tests and embedders that inspect output afterwards
//! - Silent: runs where only the result matters
//!
//! Uses enum dispatch instead of trait objects; `out` is called once per
//! byte.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// How characters are rendered.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum OutputMode {
    /// The raw byte.
    #[default]
    Bytes,
    /// `code(char)`, e.g. `119(w)`, for inspecting non-printing output.
    Numeric,
}

impl OutputMode {
    fn encode(self, byte: u8, buf: &mut Vec<u8>) {
        match self {
            OutputMode::Bytes => buf.push(byte),
            OutputMode::Numeric => {
                let rendered = format!("{byte}({})", char::from(byte));
                buf.extend_from_slice(rendered.as_bytes());
            }
        }
    }
}

/// Writes to the process's standard output.
pub struct StdoutOutput {
    mode: OutputMode,
}

impl StdoutOutput {
    pub fn new(mode: OutputMode) -> Self {
        StdoutOutput { mode }
    }

    pub fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        let mut encoded = Vec::with_capacity(1);
        self.mode.encode(byte, &mut encoded);
        io::stdout().lock().write_all(&encoded)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}

/// Captures output in a shared buffer.
///
/// Clones share the buffer, so a caller can keep one handle and read the
/// output after the machine that owned the other is gone.
#[derive(Clone, Default)]
pub struct BufferOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
    mode: OutputMode,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        BufferOutput {
            buffer: Arc::default(),
            mode,
        }
    }

    pub fn write_byte(&self, byte: u8) {
        self.mode.encode(byte, &mut self.buffer.lock());
    }

    /// All captured bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// Captured output as text, replacing invalid UTF-8.
    pub fn contents_lossy(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Output sink using enum dispatch.
pub enum OutputSink {
    Stdout(StdoutOutput),
    Buffer(BufferOutput),
    /// Discards everything.
    Silent,
}

impl OutputSink {
    pub fn stdout(mode: OutputMode) -> Self {
        OutputSink::Stdout(StdoutOutput::new(mode))
    }

    pub fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.write_byte(byte),
            Self::Buffer(h) => {
                h.write_byte(byte);
                Ok(())
            }
            Self::Silent => Ok(()),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.flush(),
            Self::Buffer(_) | Self::Silent => Ok(()),
        }
    }
}
