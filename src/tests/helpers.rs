//! Shared test utilities for edit synthesis testing

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    graph::{GraphNote, StaticGraph},
    note::{Definition, LinkReference, Note, NoteId},
    source::{NoteSource, Position, Range},
};

/// Initialize logging for tests
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// An untitled note whose slug equals its id, with no existing definitions.
pub fn create_test_note(id: &str, text: &str) -> Note {
    Note {
        id: NoteId::from(id),
        slug: id.to_string(),
        title: None,
        source: NoteSource::from_text(text),
        definitions: vec![],
    }
}

/// A graph where each `(id, outbound)` record becomes a note with slug `id`,
/// title `id`, and path `id.md`.
pub fn create_test_graph(records: &[(&str, &[&str])]) -> StaticGraph {
    init_logging();
    let mut graph = StaticGraph::default();
    for (id, outbound) in records {
        graph.insert(
            NoteId::from(*id),
            GraphNote {
                slug: (*id).to_string(),
                title: (*id).to_string(),
                path: format!("{id}.md"),
                outbound: outbound.iter().map(|o| NoteId::from(*o)).collect(),
            },
        );
    }
    graph
}

fn definition_at(label: &str, url: &str, title: Option<&str>, line: u32) -> Definition {
    let mut definition = Definition {
        label: label.to_string(),
        url: url.to_string(),
        title: title.map(str::to_string),
        range: Range::new(Position::new(line, 1), Position::new(line, 1)),
    };
    let width = definition.to_string().len() as u32;
    definition.range.end = Position::new(line, width + 1);
    definition
}

/// The definitions a correctly-written reference block parses into: header
/// marker, one definition per reference, footer marker, on consecutive lines
/// starting at `start_line`.
pub fn block_definitions(references: &[LinkReference], start_line: u32) -> Vec<Definition> {
    let mut definitions = vec![definition_at(
        "//begin",
        "#",
        Some("Autogenerated link references for markdown compatibility"),
        start_line,
    )];
    for (offset, reference) in references.iter().enumerate() {
        definitions.push(definition_at(
            &reference.label,
            &reference.url,
            reference.title.as_deref(),
            start_line + offset as u32 + 1,
        ));
    }
    definitions.push(definition_at(
        "//end",
        "#",
        Some("Autogenerated link references"),
        start_line + references.len() as u32 + 1,
    ));
    definitions
}

static DEFINITION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\[([^\]]+)\]: (\S+)(?: "(.*)")?$"#).expect("static pattern"));

/// Stand-in for the upstream parser: extracts link-reference definitions with
/// their source ranges from raw text.
pub fn parse_definitions(text: &str, eol: &str) -> Vec<Definition> {
    text.split(eol)
        .enumerate()
        .filter_map(|(index, line)| {
            DEFINITION_LINE.captures(line).map(|caps| {
                definition_at(
                    caps.get(1).map_or("", |m| m.as_str()),
                    caps.get(2).map_or("", |m| m.as_str()),
                    caps.get(3).map(|m| m.as_str()),
                    index as u32 + 1,
                )
            })
        })
        .collect()
}
