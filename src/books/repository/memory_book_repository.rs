use std::collections::{BTreeMap, HashMap};
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

/// In-process index set over the catalog.
///
/// `books` owns every record keyed by ISBN. The title and genre indexes only hold ISBNs, so a
/// state change made through one lookup path is visible through all of them.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: HashMap<String, BookEntity>,
    title_index: BTreeMap<String, String>,
    genre_index: BTreeMap<String, Vec<String>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve<'a>(&'a self, isbns: impl Iterator<Item = &'a String>) -> Vec<&'a BookEntity> {
        isbns.filter_map(|isbn| self.books.get(isbn)).collect()
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        let genre_entries: usize = self.genre_index.values().map(Vec::len).sum();
        let sizes_match = self.books.len() == self.title_index.len() && self.books.len() == genre_entries;
        let titles_match = self.title_index.iter()
            .all(|(title, isbn)| self.books.get(isbn).map(|b| &b.title == title).unwrap_or(false));
        let genres_match = self.genre_index.iter().all(|(genre, isbns)| {
            !isbns.is_empty()
                && isbns.iter().all(|isbn| self.books.get(isbn).map(|b| &b.genre == genre).unwrap_or(false))
        });
        sizes_match && titles_match && genres_match
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: BookEntity) -> LibraryResult<usize> {
        if self.books.contains_key(&entity.isbn) {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", entity.isbn).as_str()));
        }
        if let Some(existing) = self.title_index.get(&entity.title) {
            return Err(LibraryError::duplicate_key(
                format!("title '{}' is already used by isbn {}", entity.title, existing).as_str()));
        }
        self.title_index.insert(entity.title.to_string(), entity.isbn.to_string());
        self.genre_index.entry(entity.genre.to_string()).or_default().push(entity.isbn.to_string());
        self.books.insert(entity.isbn.to_string(), entity);
        Ok(1)
    }

    fn get(&self, id: &str) -> Option<&BookEntity> {
        self.books.get(id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut BookEntity> {
        self.books.get_mut(id)
    }

    fn delete(&mut self, id: &str) -> LibraryResult<BookEntity> {
        let removed = self.books.remove(id).ok_or_else(|| {
            LibraryError::not_found(format!("book not found for {}", id).as_str())
        })?;
        self.title_index.remove(&removed.title);
        if let Some(isbns) = self.genre_index.get_mut(&removed.genre) {
            isbns.retain(|isbn| isbn != id);
            if isbns.is_empty() {
                self.genre_index.remove(&removed.genre);
            }
        }
        Ok(removed)
    }

    fn count(&self) -> usize {
        self.books.len()
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_by_title(&self, title: &str) -> Option<&BookEntity> {
        self.title_index.get(title).and_then(|isbn| self.books.get(isbn))
    }

    fn find_by_genre(&self, genre: &str) -> Vec<&BookEntity> {
        match self.genre_index.get(genre) {
            Some(isbns) => self.resolve(isbns.iter()),
            None => vec![],
        }
    }

    // no dedicated index, a scan in title order keeps the result deterministic
    fn find_by_release_year(&self, year: i32) -> Vec<&BookEntity> {
        self.find_all_sorted_by_title().into_iter()
            .filter(|b| b.release_year == Some(year))
            .collect()
    }

    fn find_all_sorted_by_title(&self) -> Vec<&BookEntity> {
        self.resolve(self.title_index.values())
    }

    fn genres(&self) -> Vec<String> {
        self.genre_index.keys().cloned().collect()
    }
}
