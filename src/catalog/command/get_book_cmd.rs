use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::SharedCatalog;
use crate::core::command::{Command, CommandError};
use crate::core::library::LookupMode;

pub struct GetBookCommand {
    catalog: SharedCatalog,
}

impl GetBookCommand {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub key: String,
    pub mode: LookupMode,
}

impl GetBookCommandRequest {
    pub fn new(key: &str, mode: LookupMode) -> Self {
        Self {
            key: key.to_string(),
            mode,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let catalog = self.catalog.lock().await;
        catalog.find_book(req.key.as_str(), req.mode)
            .map(GetBookCommandResponse::new)
            .ok_or_else(|| CommandError::NotFound {
                message: format!("book with {} '{}' not found", req.mode, req.key),
            })
    }
}
