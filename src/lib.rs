//! # note-groom
//!
//! Position-exact text-edit synthesis for markdown note graphs.
//!
//! Given a note's parsed structure (existing link-reference definitions,
//! title, source text with position metadata) and the note's computed link
//! graph, note-groom produces minimal edits that keep two derived regions of
//! the document in sync with graph-derived truth:
//!
//! - a trailing block of markdown link-reference definitions mirroring the
//!   note's current outbound links, and
//! - a leading `# Heading` line derived from the file name when no title
//!   exists.
//!
//! The synthesizers are pure and idempotent: they return `Option<TextEdit>`
//! descriptions of edits (`None` when the document is already correct) and
//! never touch the document themselves. Markdown parsing, link resolution,
//! and persisting edits to disk are the consuming layer's concerns; they
//! enter this crate only through the data model in [`note`] and [`source`]
//! and the [`graph::GraphView`] seam.
//!
//! ## Quick start
//!
//! ```rust
//! use note_groom::{
//!     graph::{GraphNote, StaticGraph},
//!     note::{Note, NoteId},
//!     source::NoteSource,
//!     synthesize::synthesize_reference_block,
//! };
//!
//! let mut graph = StaticGraph::default();
//! graph.insert(
//!     NoteId::from("a"),
//!     GraphNote {
//!         slug: "first-note".to_string(),
//!         title: "First Note".to_string(),
//!         path: "first-note.md".to_string(),
//!         outbound: vec![NoteId::from("b")],
//!     },
//! );
//! graph.insert(
//!     NoteId::from("b"),
//!     GraphNote {
//!         slug: "second-note".to_string(),
//!         title: "Second Note".to_string(),
//!         path: "second-note.md".to_string(),
//!         outbound: vec![],
//!     },
//! );
//!
//! let note = Note {
//!     id: NoteId::from("a"),
//!     slug: "first-note".to_string(),
//!     title: Some("First Note".to_string()),
//!     source: NoteSource::from_text("# First Note\n\nSee [second-note].\n"),
//!     definitions: vec![],
//! };
//!
//! let edit = synthesize_reference_block(Some(&note), &graph, false)
//!     .expect("note has no reference block yet");
//! assert!(edit
//!     .new_text
//!     .contains("[second-note]: second-note \"Second Note\""));
//!
//! // The edit applies at the end of the document; re-running after applying
//! // it yields `None`.
//! let updated = edit.apply(&note.source).unwrap();
//! assert!(updated.ends_with("[//end]: # \"Autogenerated link references\""));
//! ```
//!
//! ## Heading synthesis and the title check
//!
//! [`synthesize::synthesize_heading`] refuses to touch any note with a
//! non-empty `title`. Upstream parsers that default a note's title to its
//! file name therefore make this synthesizer inert for files without explicit
//! headings. That check is preserved as-is; whether heading generation should
//! instead inspect the parsed sections is an upstream decision this crate
//! does not preempt.
//!
//! ## Module guide
//!
//! - [`synthesize`] — the three entry points.
//! - [`source`] — `Position`, `Range`, `TextEdit`, `NoteSource`.
//! - [`note`] — `Note`, `Definition`, `LinkReference`, block markers.
//! - [`graph`] — the `GraphView` seam and an in-memory implementation.
//! - [`slug`] — slug canonicalization with caller-owned dedup state.
//! - [`config`] — TOML-loadable synthesis settings.

pub mod config;
pub mod error;
pub mod graph;
pub mod note;
pub mod slug;
pub mod source;
pub mod synthesize;
#[cfg(test)]
mod tests;

pub use error::*;
