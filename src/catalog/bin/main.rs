use std::error::Error;
use tracing::{info, warn, Level};
use lms_catalog::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use lms_catalog::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use lms_catalog::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use lms_catalog::catalog::command::process_queue_cmd::{ProcessQueueCommand, ProcessQueueCommandRequest};
use lms_catalog::catalog::command::recommend_books_cmd::{RecommendBooksCommand, RecommendBooksCommandRequest};
use lms_catalog::catalog::command::related_books_cmd::{RelatedBooksCommand, RelatedBooksCommandRequest};
use lms_catalog::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use lms_catalog::catalog::command::request_action_cmd::{RequestActionCommand, RequestActionCommandRequest};
use lms_catalog::catalog::command::undo_action_cmd::{UndoActionCommand, UndoActionCommandRequest};
use lms_catalog::catalog::factory::create_shared_catalog;
use lms_catalog::core::command::Command;
use lms_catalog::core::domain::Configuration;
use lms_catalog::core::library::LookupMode;
use lms_catalog::utils::logging::setup_tracing;

// Usage: catalog [config.json]
fn load_config() -> Result<Configuration, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(path.as_str())?;
            Ok(Configuration::from_json(json.as_str())?)
        }
        None => Ok(Configuration::default()),
    }
}

fn sample_books() -> Vec<AddBookCommandRequest> {
    vec![
        AddBookCommandRequest::new("978-0134685991", "Effective Modern C++", "Scott Meyers", "Programming", Some(2014), 3),
        AddBookCommandRequest::new("978-0321563842", "The C++ Programming Language", "Bjarne Stroustrup", "Programming", Some(2013), 2),
        AddBookCommandRequest::new("978-0596809485", "JavaScript: The Good Parts", "Douglas Crockford", "Programming", Some(2008), 1),
        AddBookCommandRequest::new("978-0132350884", "Clean Code", "Robert Martin", "Programming", Some(2008), 4),
        AddBookCommandRequest::new("978-0201633610", "Design Patterns", "Gang of Four", "Software Engineering", Some(1994), 2),
        AddBookCommandRequest::new("978-1617294136", "Grokking Algorithms", "Aditya Bhargava", "Computer Science", Some(2016), 1),
        AddBookCommandRequest::new("978-0441172719", "Dune", "Frank Herbert", "Science Fiction", Some(1965), 4),
        AddBookCommandRequest::new("978-0345339683", "The Hobbit", "J.R.R. Tolkien", "Fantasy", Some(1937), 2),
    ]
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing(Level::INFO);
    let config = load_config()?;
    info!(branch_id = config.branch_id.as_str(), "starting catalog");

    let catalog = create_shared_catalog(&config);
    let add_cmd = AddBookCommand::new(&config, catalog.clone());
    let get_cmd = GetBookCommand::new(catalog.clone());
    let list_cmd = ListBooksCommand::new(catalog.clone());
    let request_cmd = RequestActionCommand::new(catalog.clone());
    let process_cmd = ProcessQueueCommand::new(catalog.clone());
    let undo_cmd = UndoActionCommand::new(catalog.clone());
    let recommend_cmd = RecommendBooksCommand::new(&config, catalog.clone());
    let related_cmd = RelatedBooksCommand::new(&config, catalog.clone());
    let remove_cmd = RemoveBookCommand::new(catalog.clone());

    for req in sample_books() {
        let _ = add_cmd.execute(req).await?;
    }
    let listing = list_cmd.execute(ListBooksCommandRequest::default()).await?;
    println!("{}", serde_json::to_string_pretty(&listing)?);

    let found = get_cmd.execute(GetBookCommandRequest::new("Dune", LookupMode::ByTitle)).await?;
    println!("{}", serde_json::to_string_pretty(&found)?);

    // one copy of Grokking Algorithms, so the second borrow is rejected when processed
    for patron in ["u1", "u2"] {
        let _ = request_cmd.execute(RequestActionCommandRequest::borrow(patron, "Grokking Algorithms", LookupMode::ByTitle)).await?;
    }
    let _ = request_cmd.execute(RequestActionCommandRequest::borrow("u3", "978-0441172719", LookupMode::ByIsbn)).await?;
    let _ = request_cmd.execute(RequestActionCommandRequest::returned("u1", "Grokking Algorithms", LookupMode::ByTitle)).await?;

    let first = process_cmd.execute(ProcessQueueCommandRequest::next()).await?;
    println!("{}", serde_json::to_string_pretty(&first)?);
    let rest = process_cmd.execute(ProcessQueueCommandRequest::all()).await?;
    println!("{}", serde_json::to_string_pretty(&rest)?);

    loop {
        match undo_cmd.execute(UndoActionCommandRequest::default()).await {
            Ok(res) => println!("{}", serde_json::to_string_pretty(&res)?),
            Err(err) => {
                warn!("undo stopped: {}", err);
                break;
            }
        }
    }

    let by_genre = recommend_cmd.execute(RecommendBooksCommandRequest::by_genre("Programming")).await?;
    println!("{}", serde_json::to_string_pretty(&by_genre)?);
    let by_year = recommend_cmd.execute(RecommendBooksCommandRequest::by_year("2008")).await?;
    println!("{}", serde_json::to_string_pretty(&by_year)?);
    let related = related_cmd.execute(RelatedBooksCommandRequest::new("978-0132350884", None, true)).await?;
    println!("{}", serde_json::to_string_pretty(&related)?);

    let removed = remove_cmd.execute(RemoveBookCommandRequest::new("978-0345339683")).await?;
    info!(isbn = removed.book.isbn.as_str(), "removed sample book");
    let listing = list_cmd.execute(ListBooksCommandRequest::default()).await?;
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
