use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signed-in identity. Round-tripped through the user storage port; the
/// password never leaves the mock directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}
