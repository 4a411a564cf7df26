//! Forward-only cursor over input lines with bounded lookahead.

/// Cursor over the lines of a document.
///
/// Lines are stored untrimmed; classification helpers trim on access. The
/// position only moves forward.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor over `text`.
    ///
    /// Surrounding whitespace of the whole text is dropped before splitting,
    /// so leading and trailing blank lines never produce entries.
    pub fn new(text: &'a str) -> Self {
        let trimmed = text.trim();
        let lines = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('\n').collect()
        };
        Self { lines, pos: 0 }
    }

    /// Current position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether every line has been consumed.
    pub fn is_done(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Trimmed line at the current position.
    pub fn current(&self) -> Option<&'a str> {
        self.line(self.pos)
    }

    /// Trimmed line at `index`.
    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).map(|line| line.trim())
    }

    /// Move to the next line.
    pub fn advance(&mut self) {
        self.advance_to(self.pos + 1);
    }

    /// Move to `index`.
    ///
    /// Moving backwards is ignored; moving past the end clamps to the end.
    pub fn advance_to(&mut self, index: usize) {
        debug_assert!(index >= self.pos, "cursor moved backwards");
        self.pos = index.clamp(self.pos, self.lines.len());
    }

    /// Index of the first non-blank line at or after the current position.
    ///
    /// Only whitespace-only lines count as blank here; `---` separators are
    /// content for lookahead purposes.
    pub fn peek_non_blank(&self) -> Option<usize> {
        (self.pos..self.lines.len()).find(|&i| !self.lines[i].trim().is_empty())
    }
}
