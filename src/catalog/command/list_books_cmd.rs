use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::SharedCatalog;
use crate::circulation::domain::model::CirculationRequest;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog: SharedCatalog,
}

impl ListBooksCommand {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListBooksCommandRequest {
    pub genre: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn new(genre: Option<&str>) -> Self {
        Self {
            genre: genre.map(|g| g.to_string()),
        }
    }
}

// ListBooksCommandResponse is a snapshot of the catalog, books are sorted by title unless a genre
// is given, in which case they keep the order they were added in.
#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
    pub genres: Vec<String>,
    pub pending: Vec<CirculationRequest>,
    pub undo_depth: usize,
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let catalog = self.catalog.lock().await;
        let books = match req.genre {
            Some(genre) => catalog.find_books_by_genre(genre.as_str()),
            None => catalog.list_books(),
        };
        Ok(ListBooksCommandResponse {
            books,
            genres: catalog.list_genres(),
            pending: catalog.pending_requests(),
            undo_depth: catalog.undo_depth(),
        })
    }
}
