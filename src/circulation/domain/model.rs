use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::ActionKind;
use crate::utils::date::serializer;

// CirculationRequest abstracts a borrow or return asked for by a patron. It names the record by
// ISBN only, the record is looked up again when the request is processed or undone.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CirculationRequest {
    pub request_id: String,
    pub patron_id: String,
    pub isbn: String,
    pub kind: ActionKind,
    #[serde(with = "serializer")]
    pub requested_at: NaiveDateTime,
}

impl CirculationRequest {
    pub fn new(patron_id: &str, isbn: &str, kind: ActionKind) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            patron_id: patron_id.to_string(),
            isbn: isbn.to_string(),
            kind,
            requested_at: Utc::now().naive_utc(),
        }
    }

    pub fn borrow(patron_id: &str, isbn: &str) -> Self {
        Self::new(patron_id, isbn, ActionKind::Borrow)
    }

    pub fn returned(patron_id: &str, isbn: &str) -> Self {
        Self::new(patron_id, isbn, ActionKind::Return)
    }
}

impl Identifiable for CirculationRequest {
    fn id(&self) -> String {
        self.request_id.to_string()
    }
}
