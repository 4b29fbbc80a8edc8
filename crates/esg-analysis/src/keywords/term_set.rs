//! A deduplicated set of substring terms backed by one Aho-Corasick
//! automaton.

use std::collections::BTreeSet;

use aho_corasick::{AhoCorasick, BuildError};

use esg_core::config::MatchMode;

/// Immutable term set. Terms are trimmed and lowercased; empty terms and
/// duplicates are dropped.
#[derive(Debug, Clone)]
pub struct TermSet {
    terms: Vec<String>,
    matcher: Option<AhoCorasick>,
}

impl TermSet {
    pub fn new<I, S>(terms: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let matcher = if terms.is_empty() {
            None
        } else {
            Some(AhoCorasick::new(&terms)?)
        };

        Ok(Self { terms, matcher })
    }

    pub fn empty() -> Self {
        Self {
            terms: Vec::new(),
            matcher: None,
        }
    }

    /// Terms in sorted order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True if any term occurs in `text`.
    pub fn contains_any(&self, text: &str) -> bool {
        self.matcher.as_ref().is_some_and(|m| m.is_match(text))
    }

    /// Number of distinct terms present in `text`.
    pub fn count_present(&self, text: &str) -> u32 {
        let Some(matcher) = &self.matcher else {
            return 0;
        };
        let mut seen = vec![false; self.terms.len()];
        for m in matcher.find_overlapping_iter(text) {
            seen[m.pattern().as_usize()] = true;
        }
        seen.into_iter().filter(|&s| s).count() as u32
    }

    /// Sum over terms of each term's non-overlapping occurrence count,
    /// the same count `str::matches(term).count()` gives.
    pub fn count_occurrences(&self, text: &str) -> u32 {
        let Some(matcher) = &self.matcher else {
            return 0;
        };
        // Overlapping matches arrive ordered by end offset, so per term they
        // also arrive ordered by start.
        let mut next_free = vec![0usize; self.terms.len()];
        let mut count = 0u32;
        for m in matcher.find_overlapping_iter(text) {
            let pid = m.pattern().as_usize();
            if m.start() >= next_free[pid] {
                next_free[pid] = m.end();
                count += 1;
            }
        }
        count
    }

    pub fn count(&self, text: &str, mode: MatchMode) -> u32 {
        match mode {
            MatchMode::Presence => self.count_present(text),
            MatchMode::Occurrence => self.count_occurrences(text),
        }
    }
}
