use crate::entity::Isbn;
use std::collections::BTreeSet;
use vodca::{AsRefln, Fromln};

/// ISBNs a member currently holds. A book appears at most once.
#[derive(Debug, Clone, Default, Eq, PartialEq, Fromln, AsRefln)]
pub struct BorrowedBooks(BTreeSet<Isbn>);

impl BorrowedBooks {
    pub fn contains(&self, isbn: &Isbn) -> bool {
        self.0.contains(isbn)
    }

    /// Returns `false` if the book was already held.
    pub fn insert(&mut self, isbn: Isbn) -> bool {
        self.0.insert(isbn)
    }

    /// Returns `false` if the book was not held.
    pub fn remove(&mut self, isbn: &Isbn) -> bool {
        self.0.remove(isbn)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Isbn> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
