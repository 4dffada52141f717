//! Canonical catalog types served by `/models` (no dependencies on cache or upstream).

use serde::{Deserialize, Serialize};

use crate::core::app;

/// One entry of the unified catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub id: String,
    /// Unix seconds; upstream creation time when known, otherwise production time.
    pub created: i64,
    pub object: String,
    pub owned_by: String,
}

impl ModelRecord {
    /// Record tagged as a `model` owned by the upstream provider.
    pub fn bedrock(id: impl Into<String>, created: i64) -> Self {
        Self {
            id: id.into(),
            created,
            object: "model".to_string(),
            owned_by: app::PROVIDER.to_string(),
        }
    }
}

/// The `/models` response payload. `data` keeps production order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub object: String,
    pub data: Vec<ModelRecord>,
}

impl ModelCatalog {
    pub fn from_records(data: Vec<ModelRecord>) -> Self {
        Self {
            object: "list".to_string(),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether a record with this id is listed.
    #[cfg(test)]
    pub fn contains(&self, id: &str) -> bool {
        self.data.iter().any(|m| m.id == id)
    }
}
