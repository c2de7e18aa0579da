//! Line table: the corpus split on `\r\n`, each line tagged with its absolute byte range.

use serde::Serialize;

/// Line terminator the corpus is split on.
pub const LINE_TERMINATOR: &str = "\r\n";

/// One line of the corpus.
///
/// `[from, to)` is the byte range of `text` inside the corpus. The terminator
/// occupies `[to, to + 2)`, so the next line starts at `to + 2`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub index: usize,
    pub from: usize,
    pub to: usize,
}

impl Line {
    /// Length of the line text in bytes (terminator excluded).
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

/// All lines of the corpus in ascending index order.
///
/// Built once at load time and read-only afterwards.
#[derive(Debug, Default)]
pub struct LineTable {
    lines: Vec<Line>,
    corpus_len: usize,
}

impl LineTable {
    /// Split `text` into lines and record their byte ranges.
    ///
    /// Always yields at least one line (an empty corpus is one empty line).
    pub fn build(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut from = 0;
        for (index, part) in text.split(LINE_TERMINATOR).enumerate() {
            let to = from + part.len();
            lines.push(Line {
                text: part.to_string(),
                index,
                from,
                to,
            });
            from = to + LINE_TERMINATOR.len();
        }
        Self {
            lines,
            corpus_len: text.len(),
        }
    }

    /// Map an absolute byte offset back to the line that owns it.
    ///
    /// A line owns its text plus its trailing terminator, so every offset in
    /// `0..corpus_len` resolves to exactly one line. Offsets past the end of
    /// the corpus resolve to `None`.
    pub fn resolve(&self, offset: usize) -> Option<&Line> {
        if offset >= self.corpus_len {
            return None;
        }
        let after = self.lines.partition_point(|line| line.from <= offset);
        after.checked_sub(1).and_then(|i| self.lines.get(i))
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the last line (0 for an empty table).
    pub fn last_index(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Total corpus length in bytes, terminators included.
    pub fn corpus_len(&self) -> usize {
        self.corpus_len
    }
}
