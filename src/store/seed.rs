//! Demo content matching a fresh install: one collection with two
//! jsonplaceholder requests, plus Development and Production environments.

use chrono::{DateTime, Utc};

use crate::id::IdGenerator;
use crate::state::collection::Collection;
use crate::state::request::{ApiRequest, HttpMethod, KeyValuePair, RequestBody};
use crate::store::environment_store::EnvironmentStore;
use crate::store::request_store::RequestStore;

pub fn demo_request_store(ids: &mut dyn IdGenerator, now: DateTime<Utc>) -> RequestStore {
    let mut get_users = ApiRequest::new(ids, now);
    get_users.name = "Get Users".to_string();
    get_users.url = "https://jsonplaceholder.typicode.com/users".to_string();
    get_users.headers = vec![KeyValuePair::new("Accept", "application/json")];
    get_users.description = Some("Fetch a list of users".to_string());

    let mut create_post = ApiRequest::new(ids, now);
    create_post.name = "Create Post".to_string();
    create_post.method = HttpMethod::Post;
    create_post.url = "https://jsonplaceholder.typicode.com/posts".to_string();
    create_post.headers = vec![
        KeyValuePair::new("Content-Type", "application/json"),
        KeyValuePair::new("Accept", "application/json"),
    ];
    create_post.body = RequestBody::Json(
        "{\n  \"title\": \"foo\",\n  \"body\": \"bar\",\n  \"userId\": 1\n}".to_string(),
    );
    create_post.description = Some("Create a new post".to_string());

    let mut collection = Collection::new(
        ids,
        now,
        "Demo APIs",
        Some("A collection of demo API endpoints"),
        "1",
    );
    collection.requests = vec![get_users.clone(), create_post];

    RequestStore {
        collections: vec![collection],
        current_request: Some(get_users),
        ..Default::default()
    }
}

pub fn demo_environment_store(ids: &mut dyn IdGenerator) -> EnvironmentStore {
    let store = EnvironmentStore::default()
        .create_environment(ids, "Development")
        .create_environment(ids, "Production");
    let dev = store.environments[0].id.clone();
    let prod = store.environments[1].id.clone();

    store
        .add_variable(ids, &dev, "baseUrl", "https://dev-api.example.com")
        .add_variable(ids, &dev, "apiKey", "dev-api-key-123")
        .add_variable(ids, &prod, "baseUrl", "https://api.example.com")
        .add_variable(ids, &prod, "apiKey", "prod-api-key-456")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialGenerator;
    use chrono::DateTime;

    #[test]
    fn test_demo_collection_shape() {
        let mut ids = SequentialGenerator::new("seed");
        let store = demo_request_store(&mut ids, DateTime::UNIX_EPOCH);
        assert_eq!(store.collections.len(), 1);
        assert_eq!(store.collections[0].requests.len(), 2);
        assert_eq!(store.collections[0].requests[1].method, HttpMethod::Post);
        assert_eq!(
            store.current_request.as_ref().map(|r| r.name.as_str()),
            Some("Get Users")
        );
        assert!(store.history.is_empty());
    }

    #[test]
    fn test_demo_environments_resolve_dev_by_default() {
        let mut ids = SequentialGenerator::new("seed");
        let store = demo_environment_store(&mut ids);
        assert_eq!(
            store.resolver().resolve("{{baseUrl}}/users"),
            "https://dev-api.example.com/users"
        );
    }
}
