//! Character cursor over program text.
//!
//! Positions are byte offsets into the source and always sit on character
//! boundaries, so slices taken between two cursor positions are valid
//! `&str`.

/// Cursor over a source string, advancing one character at a time.
///
/// The cursor is [`Copy`], so scanners can snapshot it for lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte offset).
    pos: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// The character at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    /// Advance past the current character. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8() as u32;
        }
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.source.get(self.pos as usize..).unwrap_or("")
    }

    /// Source text between `start` and the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.source
            .get(start as usize..self.pos as usize)
            .unwrap_or("")
    }

    /// Advance while `pred` holds for the current character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8() as u32;
        }
    }

    /// Advance past the next occurrence of `byte`, or to EOF if there is none.
    ///
    /// Returns `true` if `byte` was found. `byte` must be ASCII so the cursor
    /// stays on a character boundary.
    pub fn eat_past(&mut self, byte: u8) -> bool {
        debug_assert!(byte.is_ascii(), "eat_past needs an ASCII delimiter");
        match memchr::memchr(byte, self.rest().as_bytes()) {
            Some(offset) => {
                self.pos += offset as u32 + 1;
                true
            }
            None => {
                self.pos = self.source.len() as u32;
                false
            }
        }
    }
}
