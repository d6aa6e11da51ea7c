//! Slug canonicalization and heading-text derivation.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use titlecase::titlecase;
use unicode_normalization::UnicodeNormalization;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s-]").expect("static pattern compiles"));

/// Lowercases, strips punctuation, and hyphenates a single name. Deterministic
/// and collision-unaware; see [`Slugger`] for batch deduplication.
pub fn slugify(value: &str) -> String {
    let normalized: String = value.nfc().collect();
    let lowered = normalized.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lowered, "")
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Batch slug context with collision deduplication: the second and later
/// occurrences of a base slug get `-1`, `-2`, … suffixes.
///
/// The dedup state is caller-owned. Results depend on call order within one
/// instance, so independent checking passes that need call-order-independent
/// answers must each use a fresh `Slugger`.
#[derive(Debug, Clone, Default)]
pub struct Slugger {
    occurrences: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Slugger::default()
    }

    pub fn slug(&mut self, value: &str) -> String {
        let base = slugify(value);
        let seen = self.occurrences.entry(base.clone()).or_insert(0);
        let slug = if *seen == 0 {
            base.clone()
        } else {
            format!("{base}-{seen}")
        };
        *seen += 1;
        slug
    }
}

/// Human heading text for a file-derived slug, e.g. `my-first-note` becomes
/// `My First Note`.
pub fn heading_text_for(slug: &str) -> String {
    titlecase(&slug.replace('-', " "))
}
