use std::collections::{BTreeMap, BTreeSet};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

/// Symmetric similarity relation between catalog records, keyed by ISBN.
///
/// Neighbours are kept sorted so recommendations come back in a stable order.
#[derive(Debug, Default)]
pub struct RecommendationGraph {
    adjacency: BTreeMap<String, BTreeSet<String>>,
}

impl RecommendationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(&mut self, book: &dyn Identifiable) {
        self.adjacency.entry(book.id()).or_default();
    }

    pub fn remove_book(&mut self, isbn: &str) {
        if let Some(neighbours) = self.adjacency.remove(isbn) {
            for neighbour in neighbours {
                if let Some(links) = self.adjacency.get_mut(&neighbour) {
                    links.remove(isbn);
                }
            }
        }
    }

    pub fn contains(&self, isbn: &str) -> bool {
        self.adjacency.contains_key(isbn)
    }

    /// Links two books both ways. Returns whether the pair was not linked before; a self-link
    /// is accepted and never added.
    pub fn connect(&mut self, first: &str, second: &str) -> LibraryResult<bool> {
        for isbn in [first, second] {
            if !self.contains(isbn) {
                return Err(LibraryError::not_found(
                    format!("book {} is not part of the recommendation graph", isbn).as_str()));
            }
        }
        if first == second {
            return Ok(false);
        }
        let added = self.link(first, second);
        let mirrored = self.link(second, first);
        Ok(added || mirrored)
    }

    // connects every pair of books in the group, O(n^2) in the group size; returns the number of
    // pairs that were newly linked
    pub fn connect_group(&mut self, isbns: &[String]) -> usize {
        let mut connected = 0;
        for (i, first) in isbns.iter().enumerate() {
            for second in isbns.iter().skip(i + 1) {
                if let Ok(true) = self.connect(first, second) {
                    connected += 1;
                }
            }
        }
        connected
    }

    pub fn related(&self, isbn: &str, max_count: usize) -> Vec<String> {
        match self.adjacency.get(isbn) {
            Some(neighbours) => neighbours.iter().take(max_count).cloned().collect(),
            None => vec![],
        }
    }

    fn link(&mut self, from: &str, to: &str) -> bool {
        match self.adjacency.get_mut(from) {
            Some(links) => links.insert(to.to_string()),
            None => false,
        }
    }
}
