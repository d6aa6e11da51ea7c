//! Read-only graph views reporting a note's current outbound links.
//!
//! The synthesizers only need one question answered: which ordered markdown
//! references should this note carry right now? [`GraphView`] is that seam.
//! Link resolution, identifier computation, and graph maintenance stay in the
//! consuming layer; [`StaticGraph`] is a minimal in-memory implementation for
//! tooling and tests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::note::{LinkReference, NoteId};

/// Read-only view over a note graph.
///
/// Implementations must be deterministic: the same graph state and arguments
/// always yield the same ordered sequence, so the same stringified block.
pub trait GraphView {
    /// The ordered markdown references `id`'s document should contain.
    /// `include_extensions` controls whether reference targets keep their
    /// file extension.
    fn link_references_for(&self, id: &NoteId, include_extensions: bool) -> Vec<LinkReference>;
}

/// One note record inside a [`StaticGraph`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNote {
    pub slug: String,
    pub title: String,
    /// Workspace-relative path, extension included.
    pub path: String,
    /// Outbound link targets in document order.
    pub outbound: Vec<NoteId>,
}

/// In-memory [`GraphView`] built from explicit note records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticGraph {
    notes: BTreeMap<NoteId, GraphNote>,
}

impl StaticGraph {
    pub fn insert(&mut self, id: NoteId, note: GraphNote) {
        self.notes.insert(id, note);
    }

    pub fn get(&self, id: &NoteId) -> Option<&GraphNote> {
        self.notes.get(id)
    }
}

impl GraphView for StaticGraph {
    fn link_references_for(&self, id: &NoteId, include_extensions: bool) -> Vec<LinkReference> {
        let Some(note) = self.notes.get(id) else {
            return Vec::new();
        };
        note.outbound
            .iter()
            .filter_map(|target_id| self.notes.get(target_id))
            .map(|target| {
                let url = if include_extensions {
                    target.path.clone()
                } else {
                    strip_extension(&target.path)
                };
                LinkReference {
                    label: target.slug.clone(),
                    url,
                    title: (!target.title.is_empty()).then(|| target.title.clone()),
                }
            })
            .collect()
    }
}

fn strip_extension(path: &str) -> String {
    match path.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.contains('/') => stem.to_string(),
        _ => path.to_string(),
    }
}
