//! Run-oriented text builder for Grass output.

/// Lowercase `w`: arities and argument distances.
pub const LOWER: char = 'w';
/// Uppercase `W`: function distances.
pub const UPPER: char = 'W';
/// Segment separator.
pub const SEPARATOR: char = 'v';

/// Builds Grass text one run at a time, optionally wrapping lines.
#[derive(Default)]
pub struct GrassWriter {
    buffer: String,
    /// Characters per line; `None` never wraps.
    width: Option<usize>,
    column: usize,
}

impl GrassWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Break lines after `width` characters. A width of zero disables
    /// wrapping.
    pub fn with_width(width: usize) -> Self {
        GrassWriter {
            width: (width > 0).then_some(width),
            ..Self::default()
        }
    }

    /// Append `count` copies of `letter`.
    pub fn run(&mut self, letter: char, count: u32) {
        for _ in 0..count {
            self.push(letter);
        }
    }

    /// Append a separator unless the text is empty or already ends in one.
    pub fn separate(&mut self) {
        if !self.buffer.is_empty() && !self.ends_with_separator() {
            self.push(SEPARATOR);
        }
    }

    pub fn ends_with_separator(&self) -> bool {
        self.buffer.ends_with(SEPARATOR)
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The finished text, without a trailing separator.
    pub fn finish(mut self) -> String {
        if self.buffer.ends_with(SEPARATOR) {
            self.buffer.pop();
            // A line break is only ever written before a letter.
            if self.buffer.ends_with('\n') {
                self.buffer.pop();
            }
        }
        self.buffer
    }

    fn push(&mut self, letter: char) {
        if let Some(width) = self.width {
            if self.column == width {
                self.buffer.push('\n');
                self.column = 0;
            }
        }
        self.buffer.push(letter);
        self.column += 1;
    }
}
