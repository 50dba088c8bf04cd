use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::circulation::domain::model::CirculationRequest;
use crate::circulation::dto::{ProcessedAction, UndoneAction};
use crate::circulation::history::UndoLog;
use crate::circulation::queue::ActionQueue;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{ActionKind, LibraryError, LibraryResult, LookupMode};
use crate::gateway::events::EventPublisher;
use crate::recommendation::criteria::RecommendationCriteria;
use crate::recommendation::graph::RecommendationGraph;

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    pending: ActionQueue,
    undo_log: UndoLog,
    graph: RecommendationGraph,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            pending: ActionQueue::new(),
            undo_log: UndoLog::new(),
            graph: RecommendationGraph::new(),
            events_publisher,
        }
    }

    fn resolve(&self, key: &str, mode: LookupMode) -> Option<&BookEntity> {
        debug!(key, %mode, "resolving book");
        match mode {
            LookupMode::ByIsbn => self.book_repository.get(key),
            LookupMode::ByTitle => self.book_repository.find_by_title(key),
        }
    }

    fn request_action(&mut self, patron_id: &str, key: &str, mode: LookupMode,
                      kind: ActionKind) -> LibraryResult<CirculationRequest> {
        let isbn = self.resolve(key, mode).map(|b| b.isbn.to_string()).ok_or_else(|| {
            LibraryError::not_found(format!("book with {} '{}' not found", mode, key).as_str())
        })?;
        let request = CirculationRequest::new(patron_id, isbn.as_str(), kind);
        self.pending.enqueue(request.clone());
        info!(patron_id, isbn = isbn.as_str(), %kind, pending = self.pending.len(), "queued circulation request");
        Ok(request)
    }

    // applies one dequeued request against the live record; only a changed record reaches the
    // undo log
    fn apply(&mut self, request: CirculationRequest) -> ProcessedAction {
        let outcome = match self.book_repository.get_mut(request.isbn.as_str()) {
            None => Err(LibraryError::not_found(
                format!("book {} requested by {} not found", request.isbn, request.patron_id).as_str())),
            Some(book) => {
                let res = match request.kind {
                    ActionKind::Borrow => book.borrow(),
                    ActionKind::Return => book.return_copy(),
                };
                res.map(|_| BookDto::from(&*book))
            }
        };
        match &outcome {
            Ok(book) => {
                info!(patron_id = request.patron_id.as_str(), isbn = book.isbn.as_str(), kind = %request.kind,
                    available = book.available_quantity, "applied circulation request");
                self.undo_log.push(request.clone());
                let kind = match request.kind {
                    ActionKind::Borrow => DomainEventType::Borrowed,
                    ActionKind::Return => DomainEventType::Returned,
                };
                self.publish(DomainEvent::with_kind(event_name(request.kind), "circulation", book.isbn.as_str(),
                                                    kind, &self.request_metadata(&request), book));
            }
            Err(err) => {
                warn!(patron_id = request.patron_id.as_str(), isbn = request.isbn.as_str(), kind = %request.kind,
                    "rejected circulation request: {}", err);
                self.publish(DomainEvent::with_kind("request_rejected", "circulation", request.isbn.as_str(),
                                                    DomainEventType::Rejected, &self.request_metadata(&request), &err.to_string()));
            }
        }
        ProcessedAction::new(request, outcome)
    }

    fn request_metadata(&self, request: &CirculationRequest) -> HashMap<String, String> {
        HashMap::from([
            ("branch_id".to_string(), self.branch_id.to_string()),
            ("request_id".to_string(), request.id()),
            ("patron_id".to_string(), request.patron_id.to_string()),
            ("kind".to_string(), request.kind.to_string()),
        ])
    }

    fn branch_metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // a failed publish is logged, the catalog change it describes has already been committed
    fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!("failed to publish domain event: {}", err);
        }
    }

    fn snapshot(books: Vec<&BookEntity>) -> Vec<BookDto> {
        books.into_iter().map(BookDto::from).collect()
    }
}

fn event_name(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Borrow => "book_borrowed",
        ActionKind::Return => "book_returned",
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto> {
        let entity = BookEntity::from(book);
        let added = BookDto::from(&entity);
        self.book_repository.create(entity)?;
        self.graph.add_book(&added);
        info!(isbn = added.isbn.as_str(), title = added.title.as_str(), genre = added.genre.as_str(), "added book");
        self.publish(DomainEvent::added("books", "books", added.isbn.as_str(), &self.branch_metadata(), &added));
        Ok(added)
    }

    fn remove_book(&mut self, isbn: &str) -> LibraryResult<BookDto> {
        let removed = self.book_repository.delete(isbn).map(|b| BookDto::from(&b))?;
        self.graph.remove_book(isbn);
        info!(isbn, title = removed.title.as_str(), "removed book");
        let data = isbn.to_string();
        self.publish(DomainEvent::deleted("books", "books", isbn, &self.branch_metadata(), &data));
        Ok(removed)
    }

    fn find_book(&self, key: &str, mode: LookupMode) -> Option<BookDto> {
        self.resolve(key, mode).map(BookDto::from)
    }

    fn find_books_by_genre(&self, genre: &str) -> Vec<BookDto> {
        Self::snapshot(self.book_repository.find_by_genre(genre))
    }

    fn find_books_by_release_year(&self, year: i32) -> Vec<BookDto> {
        Self::snapshot(self.book_repository.find_by_release_year(year))
    }

    fn list_books(&self) -> Vec<BookDto> {
        Self::snapshot(self.book_repository.find_all_sorted_by_title())
    }

    fn list_genres(&self) -> Vec<String> {
        self.book_repository.genres()
    }

    fn request_borrow(&mut self, patron_id: &str, key: &str, mode: LookupMode) -> LibraryResult<CirculationRequest> {
        self.request_action(patron_id, key, mode, ActionKind::Borrow)
    }

    fn request_return(&mut self, patron_id: &str, key: &str, mode: LookupMode) -> LibraryResult<CirculationRequest> {
        self.request_action(patron_id, key, mode, ActionKind::Return)
    }

    fn process_next(&mut self) -> Option<ProcessedAction> {
        let request = self.pending.dequeue()?;
        Some(self.apply(request))
    }

    fn process_queue(&mut self) -> Vec<ProcessedAction> {
        let mut processed = Vec::with_capacity(self.pending.len());
        while let Some(request) = self.pending.dequeue() {
            processed.push(self.apply(request));
        }
        processed
    }

    fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn pending_requests(&self) -> Vec<CirculationRequest> {
        self.pending.iter().cloned().collect()
    }

    fn undo_last(&mut self) -> LibraryResult<UndoneAction> {
        let request = self.undo_log.pop_last()
            .ok_or_else(|| LibraryError::nothing_to_undo("no applied action to undo"))?;
        // the entry is consumed even when the record can no longer be compensated
        let outcome = match self.book_repository.get_mut(request.isbn.as_str()) {
            None => Err(LibraryError::not_found(
                format!("book {} of undone {} not found", request.isbn, request.kind).as_str())),
            Some(book) => {
                let res = match request.kind {
                    ActionKind::Borrow => book.revert_borrow(),
                    ActionKind::Return => book.revert_return(),
                };
                res.map(|_| BookDto::from(&*book)).map_err(|err| {
                    let reason = match err {
                        LibraryError::NoStockAvailable { .. } => "NoStockAvailable",
                        LibraryError::AlreadyReturned { .. } => "AlreadyReturned",
                        _ => "Unknown",
                    };
                    LibraryError::undo_failed(
                        format!("cannot undo {} of {} by {}: {}", request.kind, request.isbn, request.patron_id, err).as_str(),
                        Some(reason.to_string()))
                })
            }
        };
        match outcome {
            Ok(book) => {
                info!(patron_id = request.patron_id.as_str(), isbn = book.isbn.as_str(), kind = %request.kind,
                    applied = %request.kind.inverse(), available = book.available_quantity, "undid circulation request");
                self.publish(DomainEvent::with_kind("request_undone", "circulation", book.isbn.as_str(),
                                                    DomainEventType::Undone, &self.request_metadata(&request), &book));
                Ok(UndoneAction::new(request, book))
            }
            Err(err) => {
                warn!(patron_id = request.patron_id.as_str(), isbn = request.isbn.as_str(), kind = %request.kind,
                    "undo refused: {}", err);
                self.publish(DomainEvent::with_kind("undo_rejected", "circulation", request.isbn.as_str(),
                                                    DomainEventType::Rejected, &self.request_metadata(&request), &err.to_string()));
                Err(err)
            }
        }
    }

    fn undo_depth(&self) -> usize {
        self.undo_log.len()
    }

    fn recommend(&self, criteria: &RecommendationCriteria) -> Vec<BookDto> {
        debug!(%criteria, "recommending books");
        match criteria {
            RecommendationCriteria::Genre(genre) => self.find_books_by_genre(genre),
            RecommendationCriteria::ReleaseYear(year) => self.find_books_by_release_year(*year),
        }
    }

    fn connect_books(&mut self, first_isbn: &str, second_isbn: &str) -> LibraryResult<()> {
        self.graph.connect(first_isbn, second_isbn).map(|_| ())
    }

    fn build_genre_connections(&mut self) -> usize {
        let mut connected = 0;
        for genre in self.book_repository.genres() {
            let isbns: Vec<String> = self.book_repository.find_by_genre(genre.as_str())
                .iter().map(|b| b.isbn.to_string()).collect();
            connected += self.graph.connect_group(&isbns);
        }
        info!(connected, "built genre connections");
        connected
    }

    fn recommend_related(&self, isbn: &str, max_count: usize) -> Vec<String> {
        self.graph.related(isbn, max_count)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::books::factory::create_book_repository;
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEventType;
    use crate::core::library::{ActionKind, LibraryError, LookupMode};
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::recommendation::criteria::RecommendationCriteria;

    fn build_service() -> (CatalogServiceImpl, MemoryPublisher) {
        let publisher = MemoryPublisher::new();
        let svc = CatalogServiceImpl::new(&Configuration::new("test"), create_book_repository(),
                                          Box::new(publisher.clone()));
        (svc, publisher)
    }

    fn add_test_books(svc: &mut CatalogServiceImpl) {
        let books = vec![
            BookDto::new("978-0345339683", "The Hobbit", "J.R.R. Tolkien", "Fantasy", Some(1937), 3),
            BookDto::new("978-0618053267", "The Lord of the Rings", "J.R.R. Tolkien", "Fantasy", Some(1954), 2),
            BookDto::new("978-0441172719", "Dune", "Frank Herbert", "Science Fiction", Some(1965), 4),
            BookDto::new("978-0451524935", "1984", "George Orwell", "Dystopia", Some(1949), 5),
            BookDto::new("978-0553803717", "Foundation", "Isaac Asimov", "Science Fiction", Some(1951), 2),
            BookDto::new("978-0441569595", "Neuromancer", "William Gibson", "Science Fiction", Some(1984), 3),
        ];
        for book in books {
            let _ = svc.add_book(&book).expect("should add book");
        }
    }

    fn available(svc: &CatalogServiceImpl, isbn: &str) -> u32 {
        svc.find_book(isbn, LookupMode::ByIsbn).expect("should find book").available_quantity
    }

    #[tokio::test]
    async fn test_should_add_and_find_book() {
        let (mut svc, publisher) = build_service();
        let book = BookDto::new("X1", "Dune", "Frank Herbert", "Science Fiction", Some(1965), 4);
        let added = svc.add_book(&book).expect("should add book");
        assert_eq!("X1", added.isbn.as_str());

        let by_isbn = svc.find_book("X1", LookupMode::ByIsbn).expect("should find by isbn");
        let by_title = svc.find_book("Dune", LookupMode::ByTitle).expect("should find by title");
        assert_eq!(by_isbn, by_title);
        assert!(svc.find_book("Dune", LookupMode::ByIsbn).is_none());
        assert_eq!(1, svc.list_books().iter().filter(|b| b.isbn == "X1").count());
        assert_eq!(1, svc.find_books_by_genre("Science Fiction").len());
        assert_eq!(DomainEventType::Added, publisher.published()[0].kind);
    }

    #[tokio::test]
    async fn test_should_reject_duplicates_without_side_effects() {
        let (mut svc, _) = build_service();
        add_test_books(&mut svc);
        let res = svc.add_book(&BookDto::new("978-0441172719", "Other", "a", "Other", None, 1));
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        let res = svc.add_book(&BookDto::new("other-isbn", "Dune", "a", "Other", None, 1));
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        assert!(svc.find_books_by_genre("Other").is_empty());
        assert_eq!(6, svc.list_books().len());
    }

    #[tokio::test]
    async fn test_should_process_borrow_undo_and_return() {
        let (mut svc, publisher) = build_service();
        let _ = svc.add_book(&BookDto::new("X1", "Dune", "Frank Herbert", "Science Fiction", None, 4)).expect("should add book");

        svc.request_borrow("u1", "X1", LookupMode::ByIsbn).expect("should queue borrow");
        svc.request_borrow("u1", "X1", LookupMode::ByIsbn).expect("should queue borrow");
        assert_eq!(2, svc.pending_count());
        assert_eq!(4, available(&svc, "X1"));

        let processed = svc.process_queue();
        assert_eq!(2, processed.len());
        assert!(processed.iter().all(|p| p.is_applied()));
        assert_eq!(2, available(&svc, "X1"));
        assert_eq!(2, svc.undo_depth());
        assert_eq!(0, svc.pending_count());

        let undone = svc.undo_last().expect("should undo");
        assert_eq!(ActionKind::Borrow, undone.request.kind);
        assert_eq!(3, undone.book.available_quantity);
        assert_eq!(3, available(&svc, "X1"));
        assert_eq!(1, svc.undo_depth());

        svc.request_return("u1", "X1", LookupMode::ByIsbn).expect("should queue return");
        let processed = svc.process_queue();
        assert!(processed[0].is_applied());
        assert_eq!(4, available(&svc, "X1"));

        let kinds: Vec<DomainEventType> = publisher.published().iter().map(|e| e.kind).collect();
        assert_eq!(vec![DomainEventType::Added, DomainEventType::Borrowed, DomainEventType::Borrowed,
                        DomainEventType::Undone, DomainEventType::Returned], kinds);
    }

    #[tokio::test]
    async fn test_should_report_no_stock_and_keep_undo_log() {
        let (mut svc, _) = build_service();
        let _ = svc.add_book(&BookDto::new("X1", "Dune", "Frank Herbert", "Science Fiction", None, 1)).expect("should add book");
        svc.request_borrow("u1", "Dune", LookupMode::ByTitle).expect("should queue borrow");
        let _ = svc.process_queue();
        assert_eq!(0, available(&svc, "X1"));
        assert_eq!(1, svc.undo_depth());

        svc.request_borrow("u2", "Dune", LookupMode::ByTitle).expect("should queue borrow");
        let processed = svc.process_queue();
        assert!(matches!(processed[0].outcome, Err(LibraryError::NoStockAvailable { .. })));
        assert_eq!(0, available(&svc, "X1"));
        assert_eq!(1, svc.undo_depth());
        assert_eq!("u1", svc.undo_last().expect("should undo").request.patron_id.as_str());
    }

    #[tokio::test]
    async fn test_should_report_already_returned() {
        let (mut svc, _) = build_service();
        add_test_books(&mut svc);
        svc.request_return("u1", "1984", LookupMode::ByTitle).expect("should queue return");
        let processed = svc.process_next().expect("should process");
        assert!(matches!(processed.outcome, Err(LibraryError::AlreadyReturned { .. })));
        assert_eq!(5, available(&svc, "978-0451524935"));
        assert_eq!(0, svc.undo_depth());
    }

    #[tokio::test]
    async fn test_should_not_queue_unknown_books() {
        let (mut svc, _) = build_service();
        add_test_books(&mut svc);
        let res = svc.request_borrow("u1", "Missing", LookupMode::ByTitle);
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        let res = svc.request_return("u1", "missing-isbn", LookupMode::ByIsbn);
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        assert_eq!(0, svc.pending_count());
    }

    #[tokio::test]
    async fn test_should_process_in_arrival_order() {
        let (mut svc, _) = build_service();
        add_test_books(&mut svc);
        svc.request_borrow("u1", "Dune", LookupMode::ByTitle).expect("should queue");
        svc.request_return("u2", "Dune", LookupMode::ByTitle).expect("should queue");
        svc.request_borrow("u3", "Foundation", LookupMode::ByTitle).expect("should queue");

        let first = svc.process_next().expect("should process first");
        assert_eq!("u1", first.request.patron_id.as_str());
        assert_eq!(2, svc.pending_count());

        let rest = svc.process_queue();
        let patrons: Vec<&str> = rest.iter().map(|p| p.request.patron_id.as_str()).collect();
        assert_eq!(vec!["u2", "u3"], patrons);
        // the return succeeds only because the borrow before it was applied first
        assert!(rest[0].is_applied());
        assert!(svc.process_next().is_none());
        assert!(svc.process_queue().is_empty());
    }

    #[tokio::test]
    async fn test_should_report_nothing_to_undo() {
        let (mut svc, publisher) = build_service();
        add_test_books(&mut svc);
        let before = svc.list_books();
        let res = svc.undo_last();
        assert!(matches!(res, Err(LibraryError::NothingToUndo { .. })));
        assert_eq!(before, svc.list_books());
        assert_eq!(6, publisher.published().len());
    }

    #[tokio::test]
    async fn test_should_undo_return() {
        let (mut svc, _) = build_service();
        add_test_books(&mut svc);
        svc.request_borrow("u1", "Dune", LookupMode::ByTitle).expect("should queue");
        svc.request_return("u1", "Dune", LookupMode::ByTitle).expect("should queue");
        let _ = svc.process_queue();
        assert_eq!(4, available(&svc, "978-0441172719"));

        let undone = svc.undo_last().expect("should undo return");
        assert_eq!(ActionKind::Return, undone.request.kind);
        assert_eq!(3, available(&svc, "978-0441172719"));
        assert_eq!(1, undone.book.borrow_count);
    }

    #[tokio::test]
    async fn test_should_undo_in_reverse_order() {
        let (mut svc, _) = build_service();
        let _ = svc.add_book(&BookDto::new("X1", "Dune", "Frank Herbert", "Science Fiction", None, 1)).expect("should add book");
        svc.request_borrow("u1", "X1", LookupMode::ByIsbn).expect("should queue");
        svc.request_borrow("u2", "X1", LookupMode::ByIsbn).expect("should queue");
        svc.request_return("u1", "X1", LookupMode::ByIsbn).expect("should queue");
        let _ = svc.process_queue();
        // log holds [borrow u1, return u1]; u2 was rejected
        assert_eq!(2, svc.undo_depth());
        assert_eq!(1, available(&svc, "X1"));

        svc.request_borrow("u3", "X1", LookupMode::ByIsbn).expect("should queue");
        let _ = svc.process_queue();
        let _ = svc.undo_last().expect("should undo u3 borrow");
        let _ = svc.undo_last().expect("should undo u1 return");
        assert_eq!(0, available(&svc, "X1"));

        svc.request_borrow("u4", "X1", LookupMode::ByIsbn).expect("should queue");
        let processed = svc.process_queue();
        assert!(!processed[0].is_applied());

        let _ = svc.undo_last().expect("should undo u1 borrow");
        assert_eq!(1, available(&svc, "X1"));
        assert_eq!(0, svc.undo_depth());
    }

    #[tokio::test]
    async fn test_should_report_undo_failed_and_consume_entry() {
        let (mut svc, publisher) = build_service();
        let _ = svc.add_book(&BookDto::new("X1", "Dune", "Frank Herbert", "Science Fiction", None, 1)).expect("should add book");
        svc.request_borrow("u1", "X1", LookupMode::ByIsbn).expect("should queue");
        let _ = svc.process_queue();
        let _ = svc.remove_book("X1").expect("should remove");
        let _ = svc.add_book(&BookDto::new("X1", "Dune", "Frank Herbert", "Science Fiction", None, 1)).expect("should add book");

        let res = svc.undo_last();
        assert!(matches!(res, Err(LibraryError::UndoFailed { ref reason_code, .. }) if reason_code.as_deref() == Some("AlreadyReturned")));
        assert_eq!(1, available(&svc, "X1"));
        assert_eq!(0, svc.undo_depth());
        let last = publisher.published().pop().expect("should publish undo rejection");
        assert_eq!(DomainEventType::Rejected, last.kind);
        assert_eq!("undo_rejected", last.name.as_str());
        assert_eq!("X1", last.key.as_str());
    }

    #[tokio::test]
    async fn test_should_report_removed_books_in_queue_and_undo() {
        let (mut svc, publisher) = build_service();
        add_test_books(&mut svc);
        svc.request_borrow("u1", "1984", LookupMode::ByTitle).expect("should queue");
        let _ = svc.process_queue();
        svc.request_borrow("u2", "1984", LookupMode::ByTitle).expect("should queue");
        svc.request_borrow("u3", "Dune", LookupMode::ByTitle).expect("should queue");
        let removed = svc.remove_book("978-0451524935").expect("should remove");
        assert_eq!("1984", removed.title.as_str());
        assert!(svc.find_book("1984", LookupMode::ByTitle).is_none());
        assert!(svc.find_books_by_genre("Dystopia").is_empty());

        let processed = svc.process_queue();
        assert!(matches!(processed[0].outcome, Err(LibraryError::NotFound { .. })));
        assert!(processed[1].is_applied());

        let _ = svc.undo_last().expect("should undo dune borrow");
        let res = svc.undo_last();
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        assert_eq!(0, svc.undo_depth());
        let last = publisher.published().pop().expect("should publish undo rejection");
        assert_eq!(DomainEventType::Rejected, last.kind);
        assert_eq!("undo_rejected", last.name.as_str());
        assert_eq!("978-0451524935", last.key.as_str());
        assert!(publisher.published().iter().any(|e| e.kind == DomainEventType::Deleted));
        assert!(publisher.published().iter().any(|e| e.kind == DomainEventType::Rejected));
    }

    #[tokio::test]
    async fn test_should_recommend_by_genre_and_year() {
        let (mut svc, _) = build_service();
        add_test_books(&mut svc);
        let fantasy = svc.recommend(&RecommendationCriteria::Genre("Fantasy".to_string()));
        let titles: Vec<&str> = fantasy.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["The Hobbit", "The Lord of the Rings"], titles);
        assert!(fantasy.iter().all(|b| b.genre == "Fantasy"));

        let year = svc.recommend(&RecommendationCriteria::ReleaseYear(1965));
        assert_eq!(1, year.len());
        assert_eq!("Dune", year[0].title.as_str());
        assert!(svc.recommend(&RecommendationCriteria::ReleaseYear(2001)).is_empty());
        assert_eq!(vec!["Dystopia", "Fantasy", "Science Fiction"], svc.list_genres());
    }

    #[tokio::test]
    async fn test_should_recommend_related_books() {
        let (mut svc, _) = build_service();
        add_test_books(&mut svc);
        assert!(svc.recommend_related("978-0441172719", 5).is_empty());

        assert_eq!(4, svc.build_genre_connections());
        assert_eq!(0, svc.build_genre_connections());
        assert_eq!(vec!["978-0441569595", "978-0553803717"], svc.recommend_related("978-0441172719", 5));
        assert_eq!(vec!["978-0441569595"], svc.recommend_related("978-0441172719", 1));
        assert!(svc.recommend_related("978-0451524935", 5).is_empty());
        assert!(svc.recommend_related("missing", 5).is_empty());

        svc.connect_books("978-0451524935", "978-0441172719").expect("should connect");
        assert_eq!(vec!["978-0441172719"], svc.recommend_related("978-0451524935", 5));
        let res = svc.connect_books("978-0451524935", "missing");
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));

        let _ = svc.remove_book("978-0441172719").expect("should remove");
        assert!(svc.recommend_related("978-0451524935", 5).is_empty());
    }
}
