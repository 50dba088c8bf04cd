use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::SharedCatalog;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::recommendation::criteria::validate_release_year;

pub struct AddBookCommand {
    catalog: SharedCatalog,
    max_release_year: i32,
}

impl AddBookCommand {
    pub fn new(config: &Configuration, catalog: SharedCatalog) -> Self {
        Self {
            catalog,
            max_release_year: config.max_release_year,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddBookCommandRequest {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub release_year: Option<i32>,
    pub quantity: u32,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author: &str, genre: &str,
               release_year: Option<i32>, quantity: u32) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            release_year,
            quantity,
        }
    }

    pub fn build_book(&self, max_release_year: i32) -> LibraryResult<BookDto> {
        for (field, value) in [("isbn", &self.isbn), ("title", &self.title),
            ("author", &self.author), ("genre", &self.genre)] {
            if value.trim().is_empty() {
                return Err(LibraryError::validation(format!("{} must not be empty", field).as_str(), Some("400".to_string())));
            }
        }
        if self.quantity == 0 {
            return Err(LibraryError::validation("quantity must be positive", Some("400".to_string())));
        }
        let release_year = match self.release_year {
            Some(year) => Some(validate_release_year(year, max_release_year)?),
            None => None,
        };
        Ok(BookDto::new(self.isbn.trim(), self.title.trim(), self.author.trim(), self.genre.trim(),
                        release_year, self.quantity))
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book(self.max_release_year)?;
        let mut catalog = self.catalog.lock().await;
        catalog.add_book(&book).map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
