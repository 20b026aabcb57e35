use std::collections::HashSet;

use super::types::Candidate;

/// Order-stable, URL-keyed collection. The first insert for a URL wins.
#[derive(Debug, Default)]
pub struct ResultSet {
    seen: HashSet<String>,
    entries: Vec<Candidate>,
}

impl ResultSet {
    pub fn new() -> Self { Self::default() }

    /// Returns false when the URL was already present; the stored entry is left untouched.
    pub fn insert(&mut self, candidate: Candidate) -> bool {
        if self.seen.contains(&candidate.url) { return false; }
        self.seen.insert(candidate.url.clone());
        self.entries.push(candidate);
        true
    }

    pub fn into_vec(self) -> Vec<Candidate> { self.entries }
}
