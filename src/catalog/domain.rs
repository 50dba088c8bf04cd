pub mod service;

use std::sync::Arc;
use tokio::sync::Mutex;
use crate::books::dto::BookDto;
use crate::circulation::domain::model::CirculationRequest;
use crate::circulation::dto::{ProcessedAction, UndoneAction};
use crate::core::library::{LibraryResult, LookupMode};
use crate::recommendation::criteria::RecommendationCriteria;

pub trait CatalogService: Send {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto>;
    fn remove_book(&mut self, isbn: &str) -> LibraryResult<BookDto>;
    fn find_book(&self, key: &str, mode: LookupMode) -> Option<BookDto>;
    fn find_books_by_genre(&self, genre: &str) -> Vec<BookDto>;
    fn find_books_by_release_year(&self, year: i32) -> Vec<BookDto>;
    fn list_books(&self) -> Vec<BookDto>;
    fn list_genres(&self) -> Vec<String>;
    fn request_borrow(&mut self, patron_id: &str, key: &str, mode: LookupMode) -> LibraryResult<CirculationRequest>;
    fn request_return(&mut self, patron_id: &str, key: &str, mode: LookupMode) -> LibraryResult<CirculationRequest>;
    fn process_next(&mut self) -> Option<ProcessedAction>;
    fn process_queue(&mut self) -> Vec<ProcessedAction>;
    fn pending_count(&self) -> usize;
    // queued requests in the order they will be processed
    fn pending_requests(&self) -> Vec<CirculationRequest>;
    fn undo_last(&mut self) -> LibraryResult<UndoneAction>;
    fn undo_depth(&self) -> usize;
    fn recommend(&self, criteria: &RecommendationCriteria) -> Vec<BookDto>;
    fn connect_books(&mut self, first_isbn: &str, second_isbn: &str) -> LibraryResult<()>;
    fn build_genre_connections(&mut self) -> usize;
    fn recommend_related(&self, isbn: &str, max_count: usize) -> Vec<String>;
}

// SharedCatalog is the single lock around the whole catalog; one command holds it for the
// duration of one operation, so the indexes, the queue and the undo log change together.
pub type SharedCatalog = Arc<Mutex<Box<dyn CatalogService>>>;
