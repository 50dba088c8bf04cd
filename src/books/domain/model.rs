use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::date::serializer;

// BookEntity abstracts a catalog record; it tracks how many copies the branch owns and how many
// of them are currently on the shelf.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
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

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, genre: &str,
               release_year: Option<i32>, quantity: u32) -> Self {
        Self {
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

    pub fn borrow(&mut self) -> LibraryResult<()> {
        self.take_copy()?;
        self.borrow_count += 1;
        Ok(())
    }

    pub fn return_copy(&mut self) -> LibraryResult<()> {
        if self.available_quantity >= self.total_quantity {
            return Err(LibraryError::already_returned(
                format!("all {} copies of '{}' are already on the shelf", self.total_quantity, self.title).as_str()));
        }
        self.available_quantity += 1;
        self.touch();
        Ok(())
    }

    // compensates a logged borrow, which also takes the loan off the borrow counter
    pub fn revert_borrow(&mut self) -> LibraryResult<()> {
        self.return_copy()?;
        self.borrow_count = self.borrow_count.saturating_sub(1);
        Ok(())
    }

    // compensates a logged return; taking the copy back off the shelf is not a new loan
    pub fn revert_return(&mut self) -> LibraryResult<()> {
        self.take_copy()
    }

    fn take_copy(&mut self) -> LibraryResult<()> {
        if self.available_quantity == 0 {
            return Err(LibraryError::no_stock(
                format!("no copies of '{}' are available", self.title).as_str()));
        }
        self.available_quantity -= 1;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now().naive_utc();
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("isbn", "title", "author", "genre", Some(1965), 4);
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!(4, book.total_quantity);
        assert_eq!(4, book.available_quantity);
        assert_eq!(0, book.borrow_count);
    }

    #[tokio::test]
    async fn test_should_borrow_until_out_of_stock() {
        let mut book = BookEntity::new("isbn", "title", "author", "genre", None, 2);
        book.borrow().expect("should borrow first copy");
        book.borrow().expect("should borrow second copy");
        assert_eq!(0, book.available_quantity);
        assert_eq!(2, book.borrow_count);

        let version = book.version;
        let res = book.borrow();
        assert!(matches!(res, Err(LibraryError::NoStockAvailable { .. })));
        assert_eq!(0, book.available_quantity);
        assert_eq!(2, book.borrow_count);
        assert_eq!(version, book.version);
    }

    #[tokio::test]
    async fn test_should_not_return_when_all_copies_on_shelf() {
        let mut book = BookEntity::new("isbn", "title", "author", "genre", None, 1);
        let res = book.return_copy();
        assert!(matches!(res, Err(LibraryError::AlreadyReturned { .. })));
        assert_eq!(1, book.available_quantity);
        assert_eq!(0, book.version);
    }

    #[tokio::test]
    async fn test_should_restore_availability_after_borrow_and_return() {
        let mut book = BookEntity::new("isbn", "title", "author", "genre", None, 3);
        book.borrow().expect("should borrow");
        book.return_copy().expect("should return");
        assert_eq!(3, book.available_quantity);
        assert_eq!(1, book.borrow_count);
    }

    #[tokio::test]
    async fn test_should_revert_borrow_and_return() {
        let mut book = BookEntity::new("isbn", "title", "author", "genre", None, 3);
        book.borrow().expect("should borrow");
        book.revert_borrow().expect("should revert borrow");
        assert_eq!(3, book.available_quantity);
        assert_eq!(0, book.borrow_count);

        book.borrow().expect("should borrow");
        book.return_copy().expect("should return");
        book.revert_return().expect("should revert return");
        assert_eq!(2, book.available_quantity);
        assert_eq!(1, book.borrow_count);
    }
}
