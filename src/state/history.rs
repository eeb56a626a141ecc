use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::request::ApiRequest;
use crate::state::response::ResponseData;

/// One past request/response pairing. `response` is `None` when the call
/// never reached a server. Entries are never mutated after creation; the
/// list only grows at the front or is cleared in bulk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub request: ApiRequest,
    pub response: Option<ResponseData>,
}
