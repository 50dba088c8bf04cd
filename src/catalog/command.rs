pub mod add_book_cmd;
pub mod get_book_cmd;
pub mod list_books_cmd;
pub mod process_queue_cmd;
pub mod recommend_books_cmd;
pub mod related_books_cmd;
pub mod remove_book_cmd;
pub mod request_action_cmd;
pub mod undo_action_cmd;
