//! Positions, ranges, and text edits over note source text.
//!
//! [`Position`] and [`Range`] are plain value types addressing the note's
//! original text. A [`TextEdit`] describes a single replacement against that
//! original text; the synthesizers in [`crate::synthesize`] return
//! `Option<TextEdit>`, with `None` meaning the document is already correct.

use serde::{Deserialize, Serialize};

use crate::error::NoteGroomError;

/// A point in a text document. `line` and `column` are 1-based; `column` is a
/// byte offset within its line plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

/// A contiguous span of the source text. `start == end` denotes pure
/// insertion at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Range { start, end }
    }

    /// The insertion range at `pos`.
    pub const fn empty_at(pos: Position) -> Self {
        Range {
            start: pos,
            end: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A single replacement against the original document. Replacing the text at
/// `range` with `new_text` yields the desired document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

impl TextEdit {
    /// Realizes the edit against `source`, returning the updated text.
    ///
    /// Application is in-memory only; persisting the result is the caller's
    /// concern. Fails when either end of the range does not lie inside the
    /// source text.
    pub fn apply(&self, source: &NoteSource) -> Result<String, NoteGroomError> {
        let start = byte_offset(&source.text, &source.eol, self.range.start)?;
        let end = byte_offset(&source.text, &source.eol, self.range.end)?;
        if end < start {
            return Err(NoteGroomError::OutOfBounds {
                line: self.range.end.line,
                column: self.range.end.column,
            });
        }
        let mut updated = String::with_capacity(source.text.len() + self.new_text.len());
        updated.push_str(&source.text[..start]);
        updated.push_str(&self.new_text);
        updated.push_str(&source.text[end..]);
        Ok(updated)
    }
}

fn byte_offset(text: &str, eol: &str, pos: Position) -> Result<usize, NoteGroomError> {
    let out_of_bounds = NoteGroomError::OutOfBounds {
        line: pos.line,
        column: pos.column,
    };
    let column = pos.column.checked_sub(1).ok_or(out_of_bounds.clone())? as usize;
    let mut offset = 0usize;
    let mut line = 1u32;
    for segment in text.split(eol) {
        if line == pos.line {
            if column > segment.len() {
                return Err(out_of_bounds);
            }
            return Ok(offset + column);
        }
        offset += segment.len() + eol.len();
        line += 1;
    }
    Err(out_of_bounds)
}

/// Per-note source metadata as produced by the upstream parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSource {
    /// Full original text of the document.
    pub text: String,
    /// End-of-line sequence in use. Generated text echoes this verbatim so
    /// the edit matches the document's line-ending convention.
    pub eol: String,
    /// End of the document.
    pub end: Position,
    /// First body line after any leading front-matter block; `(1, 1)` when no
    /// front matter is present.
    pub content_start: Position,
}

impl NoteSource {
    /// Derives source metadata from raw text: end-of-line detection, the end
    /// position, and the content start after a leading `---` front-matter
    /// fence.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let eol = if text.contains("\r\n") { "\r\n" } else { "\n" }.to_string();
        let lines: Vec<&str> = text.split(eol.as_str()).collect();
        let end = Position::new(
            lines.len() as u32,
            lines.last().map(|l| l.len()).unwrap_or(0) as u32 + 1,
        );
        let content_start = match lines.first() {
            Some(&"---") => lines
                .iter()
                .enumerate()
                .skip(1)
                .find(|(_, line)| **line == "---")
                // Body starts on the line after the closing fence.
                .map(|(close, _)| Position::new((close + 2).min(lines.len()) as u32, 1))
                .unwrap_or(Position::new(1, 1)),
            _ => Position::new(1, 1),
        };
        NoteSource {
            text,
            eol,
            end,
            content_start,
        }
    }
}
