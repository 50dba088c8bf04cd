use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Identifiable defines common traits that can be shared by catalog objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the catalog of a library branch
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Configuration {
    pub branch_id: String,
    pub max_recommendations: usize,
    pub max_release_year: i32,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_recommendations: 5,
            max_release_year: 2025,
        }
    }

    pub fn from_json(json: &str) -> LibraryResult<Self> {
        let config: Configuration = serde_json::from_str(json)?;
        if config.branch_id.trim().is_empty() {
            return Err(LibraryError::validation("branch_id must not be empty", Some("400".to_string())));
        }
        if config.max_release_year <= 0 {
            return Err(LibraryError::validation(format!("max_release_year must be positive but was {}",
                                                        config.max_release_year).as_str(), Some("400".to_string())));
        }
        Ok(config)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new("main")
    }
}
