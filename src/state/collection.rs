use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::IdGenerator;
use crate::state::request::ApiRequest;

/// Named group of saved requests, owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub requests: Vec<ApiRequest>,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Collection {
    pub fn new(
        ids: &mut dyn IdGenerator,
        now: DateTime<Utc>,
        name: impl Into<String>,
        description: Option<&str>,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            id: ids.next_id(),
            name: name.into(),
            description: description.map(str::to_owned),
            requests: Vec::new(),
            owner_id: owner_id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
