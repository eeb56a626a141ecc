use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::IdGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// GET never carries a body, even when one was typed into the request.
    pub fn allows_body(&self) -> bool {
        *self != HttpMethod::Get
    }
}

/// One header, query parameter or form row. Disabled rows are kept in the
/// record but dropped at send time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
    pub enabled: bool,
}

impl Default for KeyValuePair {
    fn default() -> Self {
        Self {
            key: String::new(),
            value: String::new(),
            enabled: true,
        }
    }
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RequestBody {
    #[default]
    None,
    Json(String),
    Form(Vec<KeyValuePair>),
    Raw(String),
    Binary(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub id: String,
    pub name: String,
    pub method: HttpMethod,
    /// May contain `{{variable}}` placeholders; resolved at send time.
    pub url: String,
    pub headers: Vec<KeyValuePair>,
    pub params: Vec<KeyValuePair>,
    pub body: RequestBody,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ApiRequest {
    pub fn new(ids: &mut dyn IdGenerator, now: DateTime<Utc>) -> Self {
        Self {
            id: ids.next_id(),
            name: String::from("Untitled Request"),
            method: HttpMethod::default(),
            url: String::new(),
            headers: Vec::new(),
            params: Vec::new(),
            body: RequestBody::None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialGenerator;

    #[test]
    fn test_new_request_uses_injected_ids() {
        let mut ids = SequentialGenerator::new("req");
        let now = DateTime::UNIX_EPOCH;
        let a = ApiRequest::new(&mut ids, now);
        let b = ApiRequest::new(&mut ids, now);
        assert_eq!(a.id, "req-1");
        assert_eq!(b.id, "req-2");
        assert_eq!(a.method, HttpMethod::Get);
        assert_eq!(a.body, RequestBody::None);
    }

    #[test]
    fn test_only_get_refuses_a_body() {
        assert!(!HttpMethod::Get.allows_body());
        assert!(HttpMethod::Post.allows_body());
        assert!(HttpMethod::Delete.allows_body());
        assert!(HttpMethod::Head.allows_body());
    }
}
