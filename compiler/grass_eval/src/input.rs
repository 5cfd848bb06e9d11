//! Input sources for the `in` primitive.
//!
//! Sources yield one byte per read. Exhaustion is `Ok(None)`, never an
//! error. Uses enum dispatch, like [`OutputSink`](crate::OutputSink).

use std::collections::VecDeque;
use std::io::{self, Read};

/// Reads from the process's standard input.
#[derive(Default)]
pub struct StdinInput;

impl StdinInput {
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        let mut stdin = io::stdin().lock();
        loop {
            match stdin.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

/// Reads from an in-memory byte buffer.
#[derive(Clone, Debug, Default)]
pub struct BufferInput {
    bytes: VecDeque<u8>,
}

impl BufferInput {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        BufferInput {
            bytes: bytes.into().into(),
        }
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        self.bytes.pop_front()
    }

    /// Bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

/// Input source using enum dispatch.
#[derive(Default)]
pub enum InputSource {
    Stdin(StdinInput),
    Buffer(BufferInput),
    /// Always exhausted.
    #[default]
    Empty,
}

impl InputSource {
    pub fn stdin() -> Self {
        InputSource::Stdin(StdinInput)
    }

    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        InputSource::Buffer(BufferInput::new(bytes))
    }

    /// Read one byte, or `None` when the source is exhausted.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        match self {
            Self::Stdin(h) => h.read_byte(),
            Self::Buffer(h) => Ok(h.read_byte()),
            Self::Empty => Ok(None),
        }
    }
}
