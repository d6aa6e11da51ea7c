//! Note records and link-reference definitions.
//!
//! A [`Note`] is the parsed view of one markdown document that the
//! synthesizers operate on. [`Definition`] entries describe the
//! link-reference definitions currently written in the document;
//! [`LinkReference`] entries describe the references the graph says the
//! document should contain. Both stringify through the same canonical
//! single-line form so old and new blocks compare verbatim.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::source::{NoteSource, Range};

/// First line of a generated reference block. Written as a definition itself
/// so markdown parsers round-trip it with the block.
pub const LINK_REFERENCE_DEFINITION_HEADER: &str =
    "[//begin]: # \"Autogenerated link references for markdown compatibility\"";

/// Last line of a generated reference block.
pub const LINK_REFERENCE_DEFINITION_FOOTER: &str =
    "[//end]: # \"Autogenerated link references\"";

/// Stable note identifier within a graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NoteId(pub String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        NoteId(id.into())
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> NoteId {
        NoteId(id.to_string())
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One outbound reference the graph reports for a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkReference {
    pub label: String,
    pub url: String,
    pub title: Option<String>,
}

/// One link-reference definition as currently written in a document, with its
/// source span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub label: String,
    pub url: String,
    pub title: Option<String>,
    pub range: Range,
}

// Canonical single-line form shared by desired references and existing
// definitions: `[label]: url`, url wrapped in angle brackets when it contains
// a space, trailing quoted title when present.
fn write_definition(
    f: &mut Formatter<'_>,
    label: &str,
    url: &str,
    title: Option<&str>,
) -> fmt::Result {
    if url.contains(' ') {
        write!(f, "[{label}]: <{url}>")?;
    } else {
        write!(f, "[{label}]: {url}")?;
    }
    match title {
        Some(title) if !title.is_empty() => write!(f, " \"{title}\""),
        _ => Ok(()),
    }
}

impl Display for LinkReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_definition(f, &self.label, &self.url, self.title.as_deref())
    }
}

impl Display for Definition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_definition(f, &self.label, &self.url, self.title.as_deref())
    }
}

/// The parsed view of one markdown note.
///
/// Produced upstream by a markdown parser; this crate consumes it read-only.
/// `definitions` are in document order and non-overlapping, a guarantee owned
/// by the parser and not re-validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Canonical file-derived slug, input to heading derivation.
    pub slug: String,
    /// Explicit note title, when one exists. An empty string counts as
    /// absent.
    pub title: Option<String>,
    pub source: NoteSource,
    pub definitions: Vec<Definition>,
}
