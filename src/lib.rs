pub mod books;
pub mod catalog;
pub mod circulation;
pub mod core;
pub mod gateway;
pub mod recommendation;
pub mod utils;
