//! Edit synthesis for derived note regions.
//!
//! Two synthesizers share the note data model:
//!
//! - [`synthesize_reference_block`] reconciles a note's trailing
//!   link-reference-definition block with the graph's current view of its
//!   outbound links.
//! - [`synthesize_heading`] inserts a `# Heading` derived from the file name
//!   when a note has no title.
//!
//! Both are pure: they describe an edit against the original text and never
//! mutate anything. `None` means the document is already correct, so a
//! synthesize/apply cycle converges after one applied edit. The two returned
//! edits never overlap (reference block at end of document, heading at
//! content start), so callers may apply both independently as long as they
//! apply bottom-to-top.

use tracing::{debug, trace};

use crate::{
    graph::GraphView,
    note::{Note, LINK_REFERENCE_DEFINITION_FOOTER, LINK_REFERENCE_DEFINITION_HEADER},
    slug::{heading_text_for, Slugger},
    source::{Range, TextEdit},
};

/// Computes the edit reconciling `note`'s reference-definition block with the
/// graph, or `None` when the block is already current (or there is no note).
///
/// `include_extensions` passes through to the graph's reference builder and
/// controls whether generated targets keep their file extension.
pub fn synthesize_reference_block(
    note: Option<&Note>,
    graph: &dyn GraphView,
    include_extensions: bool,
) -> Option<TextEdit> {
    let note = note?;
    let eol = note.source.eol.as_str();

    let references = graph.link_references_for(&note.id, include_extensions);
    let new_block = if references.is_empty() {
        String::new()
    } else {
        let mut lines = Vec::with_capacity(references.len() + 2);
        lines.push(LINK_REFERENCE_DEFINITION_HEADER.to_string());
        lines.extend(references.iter().map(|r| r.to_string()));
        lines.push(LINK_REFERENCE_DEFINITION_FOOTER.to_string());
        lines.join(eol)
    };

    if note.definitions.is_empty() {
        if new_block.is_empty() {
            trace!(note = %note.id, "no definitions and no outbound links");
            return None;
        }
        // A document ending at column 1 already closes with a line break, so
        // one more line break yields the blank separator; otherwise two are
        // needed.
        let padding = if note.source.end.column == 1 {
            eol.to_string()
        } else {
            format!("{eol}{eol}")
        };
        debug!(note = %note.id, "inserting reference block at end of document");
        return Some(TextEdit {
            range: Range::empty_at(note.source.end),
            new_text: format!("{padding}{new_block}"),
        });
    }

    let old_block = note
        .definitions
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(eol);
    if old_block == new_block {
        trace!(note = %note.id, "reference block already current");
        return None;
    }

    // Existing definitions are one atomic region, first start to last end.
    // Surrounding blank lines stay outside the range, so no extra padding.
    let first = note.definitions.first()?;
    let last = note.definitions.last()?;
    debug!(note = %note.id, "replacing reference block");
    Some(TextEdit {
        range: Range::new(first.range.start, last.range.end),
        new_text: new_block,
    })
}

/// Computes the heading insertion for an untitled note, or `None` when the
/// note already has a title (or there is no note).
///
/// Note: upstream parsers that default `title` to the file name make the
/// title check permanently true and this synthesizer inert for files without
/// explicit headings. That behavior is preserved as-is; see the crate
/// documentation.
pub fn synthesize_heading(note: Option<&Note>) -> Option<TextEdit> {
    let note = note?;
    if note.title.as_deref().is_some_and(|title| !title.is_empty()) {
        trace!(note = %note.id, "note already titled");
        return None;
    }

    let source = &note.source;
    let eol = source.eol.as_str();
    let frontmatter_exists = source.content_start.line != 1;

    let mut blank_line_after_frontmatter = false;
    if frontmatter_exists {
        let lines: Vec<&str> = source.text.split(eol).collect();
        let index = source.content_start.line as usize - 1;
        blank_line_after_frontmatter = lines.get(index).is_some_and(|line| line.is_empty());
    }

    let padding_start = if frontmatter_exists { eol } else { "" };
    let padding_end = if blank_line_after_frontmatter {
        eol.to_string()
    } else {
        format!("{eol}{eol}")
    };

    let heading = heading_text_for(&note.slug);
    debug!(note = %note.id, heading = %heading, "inserting derived heading");
    Some(TextEdit {
        range: Range::empty_at(source.content_start),
        new_text: format!("{padding_start}# {heading}{padding_end}"),
    })
}

/// Returns the canonical slug form of `file_name`, or `None` when the name is
/// already canonical.
///
/// Dedup state lives in the caller-owned `slugger`, so repeated checks of the
/// same name within one instance pick up `-N` suffixes. Use a fresh
/// [`Slugger`] per independent batch.
pub fn normalize_file_name_casing(slugger: &mut Slugger, file_name: &str) -> Option<String> {
    let slugged = slugger.slug(file_name);
    if slugged == file_name {
        None
    } else {
        Some(slugged)
    }
}
