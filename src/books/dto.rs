use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookDto is a data transfer object for Catalog service, a detached snapshot of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub release_year: Option<i32>,
    pub total_quantity: u32,
    pub available_quantity: u32,
    pub borrow_count: u32,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, genre: &str,
               release_year: Option<i32>, quantity: u32) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            release_year,
            total_quantity: quantity,
            available_quantity: quantity,
            borrow_count: 0,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            release_year: other.release_year,
            total_quantity: other.total_quantity,
            available_quantity: other.available_quantity,
            borrow_count: other.borrow_count,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    // a new record always starts with every copy on the shelf
    fn from(other: &BookDto) -> Self {
        BookEntity::new(other.isbn.as_str(), other.title.as_str(), other.author.as_str(),
                        other.genre.as_str(), other.release_year, other.total_quantity)
    }
}
