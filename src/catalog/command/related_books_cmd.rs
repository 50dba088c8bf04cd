use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::SharedCatalog;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;

pub struct RelatedBooksCommand {
    catalog: SharedCatalog,
    max_recommendations: usize,
}

impl RelatedBooksCommand {
    pub fn new(config: &Configuration, catalog: SharedCatalog) -> Self {
        Self {
            catalog,
            max_recommendations: config.max_recommendations,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RelatedBooksCommandRequest {
    pub isbn: String,
    pub max_count: Option<usize>,
    // links every pair of books sharing a genre before reading neighbours
    #[serde(default)]
    pub rebuild: bool,
}

impl RelatedBooksCommandRequest {
    pub fn new(isbn: &str, max_count: Option<usize>, rebuild: bool) -> Self {
        Self {
            isbn: isbn.to_string(),
            max_count,
            rebuild,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RelatedBooksCommandResponse {
    pub isbn: String,
    pub related: Vec<String>,
    pub connections_added: usize,
}

#[async_trait]
impl Command<RelatedBooksCommandRequest, RelatedBooksCommandResponse> for RelatedBooksCommand {
    async fn execute(&self, req: RelatedBooksCommandRequest) -> Result<RelatedBooksCommandResponse, CommandError> {
        let mut catalog = self.catalog.lock().await;
        let connections_added = if req.rebuild { catalog.build_genre_connections() } else { 0 };
        let related = catalog.recommend_related(req.isbn.as_str(), req.max_count.unwrap_or(self.max_recommendations));
        Ok(RelatedBooksCommandResponse {
            isbn: req.isbn,
            related,
            connections_added,
        })
    }
}
