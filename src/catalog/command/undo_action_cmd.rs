use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::SharedCatalog;
use crate::circulation::dto::UndoneAction;
use crate::core::command::{Command, CommandError};

pub struct UndoActionCommand {
    catalog: SharedCatalog,
}

impl UndoActionCommand {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UndoActionCommandRequest {}

#[derive(Debug, Serialize)]
pub struct UndoActionCommandResponse {
    pub undone: UndoneAction,
    pub depth: usize,
}

#[async_trait]
impl Command<UndoActionCommandRequest, UndoActionCommandResponse> for UndoActionCommand {
    async fn execute(&self, _req: UndoActionCommandRequest) -> Result<UndoActionCommandResponse, CommandError> {
        let mut catalog = self.catalog.lock().await;
        let undone = catalog.undo_last()?;
        Ok(UndoActionCommandResponse {
            undone,
            depth: catalog.undo_depth(),
        })
    }
}
