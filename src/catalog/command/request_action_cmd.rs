use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::SharedCatalog;
use crate::circulation::domain::model::CirculationRequest;
use crate::core::command::{Command, CommandError};
use crate::core::library::{ActionKind, LookupMode};

// RequestActionCommand queues a borrow or a return; nothing is applied until the queue is processed
pub struct RequestActionCommand {
    catalog: SharedCatalog,
}

impl RequestActionCommand {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RequestActionCommandRequest {
    pub patron_id: String,
    pub key: String,
    pub mode: LookupMode,
    pub kind: ActionKind,
}

impl RequestActionCommandRequest {
    pub fn new(patron_id: &str, key: &str, mode: LookupMode, kind: ActionKind) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            key: key.to_string(),
            mode,
            kind,
        }
    }

    pub fn borrow(patron_id: &str, key: &str, mode: LookupMode) -> Self {
        Self::new(patron_id, key, mode, ActionKind::Borrow)
    }

    pub fn returned(patron_id: &str, key: &str, mode: LookupMode) -> Self {
        Self::new(patron_id, key, mode, ActionKind::Return)
    }
}

#[derive(Debug, Serialize)]
pub struct RequestActionCommandResponse {
    pub request: CirculationRequest,
    pub pending: usize,
}

#[async_trait]
impl Command<RequestActionCommandRequest, RequestActionCommandResponse> for RequestActionCommand {
    async fn execute(&self, req: RequestActionCommandRequest) -> Result<RequestActionCommandResponse, CommandError> {
        if req.patron_id.trim().is_empty() {
            return Err(CommandError::Validation {
                message: "patron_id must not be empty".to_string(),
                reason_code: Some("400".to_string()),
            });
        }
        let mut catalog = self.catalog.lock().await;
        let request = match req.kind {
            ActionKind::Borrow => catalog.request_borrow(req.patron_id.as_str(), req.key.as_str(), req.mode),
            ActionKind::Return => catalog.request_return(req.patron_id.as_str(), req.key.as_str(), req.mode),
        }?;
        Ok(RequestActionCommandResponse {
            request,
            pending: catalog.pending_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::request_action_cmd::{RequestActionCommand, RequestActionCommandRequest};
    use crate::catalog::factory::create_shared_catalog;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::{ActionKind, LookupMode};

    #[tokio::test]
    async fn test_should_run_request_action() {
        let config = Configuration::new("test");
        let catalog = create_shared_catalog(&config);
        let add_cmd = AddBookCommand::new(&config, catalog.clone());
        let request_cmd = RequestActionCommand::new(catalog.clone());
        let _ = add_cmd.execute(AddBookCommandRequest::new("X1", "Dune", "Frank Herbert", "Science Fiction", None, 4))
            .await.expect("should add book");

        let res = request_cmd.execute(RequestActionCommandRequest::borrow("u1", "Dune", LookupMode::ByTitle))
            .await.expect("should queue borrow");
        assert_eq!("X1", res.request.isbn.as_str());
        assert_eq!(ActionKind::Borrow, res.request.kind);
        assert_eq!(1, res.pending);

        let res = request_cmd.execute(RequestActionCommandRequest::returned("u2", "X1", LookupMode::ByIsbn))
            .await.expect("should queue return");
        assert_eq!(ActionKind::Return, res.request.kind);
        assert_eq!(2, res.pending);

        // queueing alone never touches stock
        let book = catalog.lock().await.find_book("X1", LookupMode::ByIsbn).expect("should find book");
        assert_eq!(4, book.available_quantity);
    }

    #[tokio::test]
    async fn test_should_not_queue_unknown_book() {
        let config = Configuration::new("test");
        let catalog = create_shared_catalog(&config);
        let request_cmd = RequestActionCommand::new(catalog.clone());

        let res = request_cmd.execute(RequestActionCommandRequest::borrow("u1", "Missing", LookupMode::ByTitle)).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
        let res = request_cmd.execute(RequestActionCommandRequest::borrow(" ", "Missing", LookupMode::ByTitle)).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
        assert_eq!(0, catalog.lock().await.pending_count());
    }
}
