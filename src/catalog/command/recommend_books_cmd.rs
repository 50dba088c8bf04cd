use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::SharedCatalog;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::recommendation::criteria::RecommendationCriteria;

pub struct RecommendBooksCommand {
    catalog: SharedCatalog,
    max_release_year: i32,
}

impl RecommendBooksCommand {
    pub fn new(config: &Configuration, catalog: SharedCatalog) -> Self {
        Self {
            catalog,
            max_release_year: config.max_release_year,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendBooksCommandRequest {
    pub criteria: String,
    #[serde(default)]
    pub by_year: bool,
}

impl RecommendBooksCommandRequest {
    pub fn by_genre(genre: &str) -> Self {
        Self {
            criteria: genre.to_string(),
            by_year: false,
        }
    }

    pub fn by_year(year: &str) -> Self {
        Self {
            criteria: year.to_string(),
            by_year: true,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendBooksCommandResponse {
    pub criteria: RecommendationCriteria,
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<RecommendBooksCommandRequest, RecommendBooksCommandResponse> for RecommendBooksCommand {
    async fn execute(&self, req: RecommendBooksCommandRequest) -> Result<RecommendBooksCommandResponse, CommandError> {
        let criteria = RecommendationCriteria::parse(req.criteria.as_str(), req.by_year, self.max_release_year)?;
        let catalog = self.catalog.lock().await;
        let books = catalog.recommend(&criteria);
        Ok(RecommendBooksCommandResponse {
            criteria,
            books,
        })
    }
}
