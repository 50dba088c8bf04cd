use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::SharedCatalog;
use crate::circulation::dto::ActionReport;
use crate::core::command::{Command, CommandError};

pub struct ProcessQueueCommand {
    catalog: SharedCatalog,
}

impl ProcessQueueCommand {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProcessQueueCommandRequest {
    pub only_next: bool,
}

impl ProcessQueueCommandRequest {
    pub fn all() -> Self {
        Self { only_next: false }
    }

    pub fn next() -> Self {
        Self { only_next: true }
    }
}

#[derive(Debug, Serialize)]
pub struct ProcessQueueCommandResponse {
    pub reports: Vec<ActionReport>,
    pub pending: usize,
    pub undo_depth: usize,
}

impl ProcessQueueCommandResponse {
    pub fn applied(&self) -> usize {
        self.reports.iter().filter(|r| r.book.is_some()).count()
    }
}

#[async_trait]
impl Command<ProcessQueueCommandRequest, ProcessQueueCommandResponse> for ProcessQueueCommand {
    async fn execute(&self, req: ProcessQueueCommandRequest) -> Result<ProcessQueueCommandResponse, CommandError> {
        let mut catalog = self.catalog.lock().await;
        let processed = if req.only_next {
            catalog.process_next().into_iter().collect()
        } else {
            catalog.process_queue()
        };
        Ok(ProcessQueueCommandResponse {
            reports: processed.iter().map(ActionReport::from).collect(),
            pending: catalog.pending_count(),
            undo_depth: catalog.undo_depth(),
        })
    }
}
