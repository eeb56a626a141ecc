use chrono::{DateTime, Utc};
use reqwest::Client;

use crate::env::resolver::VarResolver;
use crate::http::executor::{self, Execution};
use crate::id::IdGenerator;
use crate::state::collection::Collection;
use crate::state::history::HistoryEntry;
use crate::state::request::ApiRequest;
use crate::state::response::ResponseData;

/// All request-side state: saved collections, the transient current
/// request/response slots, execution history and favorites.
///
/// Every transition consumes the store and returns the next one. Identifier
/// generation and timestamps are injected by the caller, so transitions are
/// deterministic and testable without a UI. Overlapping executions are not
/// coordinated: each one overwrites `current_response` and prepends its own
/// history entry in completion order.
#[derive(Debug, Clone, Default)]
pub struct RequestStore {
    pub collections: Vec<Collection>,
    pub current_request: Option<ApiRequest>,
    pub current_response: Option<ResponseData>,
    /// Newest first.
    pub history: Vec<HistoryEntry>,
    /// Ids of requests marked as favorites.
    pub favorites: Vec<String>,
    pub in_flight: bool,
    /// Last execution error; held until the next execution begins.
    pub error: Option<String>,
}

impl RequestStore {
    pub fn create_collection(
        mut self,
        ids: &mut dyn IdGenerator,
        now: DateTime<Utc>,
        name: &str,
        description: Option<&str>,
        owner_id: &str,
    ) -> Self {
        self.collections
            .push(Collection::new(ids, now, name, description, owner_id));
        self
    }

    /// Apply an in-place edit to one collection and bump its `updated_at`.
    /// Unknown ids are a no-op.
    pub fn update_collection(
        mut self,
        now: DateTime<Utc>,
        collection_id: &str,
        apply: impl FnOnce(&mut Collection),
    ) -> Self {
        if let Some(collection) = self.collections.iter_mut().find(|c| c.id == collection_id) {
            apply(collection);
            collection.updated_at = now;
        }
        self
    }

    pub fn delete_collection(mut self, collection_id: &str) -> Self {
        self.collections.retain(|c| c.id != collection_id);
        self
    }

    /// Add a fresh request to a collection and make it current. The caller
    /// customizes it afterwards via [`RequestStore::update_request`].
    pub fn create_request(
        mut self,
        ids: &mut dyn IdGenerator,
        now: DateTime<Utc>,
        collection_id: &str,
    ) -> Self {
        let request = ApiRequest::new(ids, now);
        if let Some(collection) = self.collections.iter_mut().find(|c| c.id == collection_id) {
            collection.requests.push(request.clone());
            collection.updated_at = now;
        }
        self.current_request = Some(request);
        self.current_response = None;
        self
    }

    /// Apply an edit to a saved request, bumping its timestamp and the
    /// collection's. The current-request slot is kept in sync when it holds
    /// the same request.
    pub fn update_request(
        mut self,
        now: DateTime<Utc>,
        collection_id: &str,
        request_id: &str,
        apply: impl Fn(&mut ApiRequest),
    ) -> Self {
        if let Some(collection) = self.collections.iter_mut().find(|c| c.id == collection_id) {
            if let Some(request) = collection.requests.iter_mut().find(|r| r.id == request_id) {
                apply(request);
                request.updated_at = now;
                collection.updated_at = now;
            }
        }
        if let Some(current) = &mut self.current_request {
            if current.id == request_id {
                apply(current);
                current.updated_at = now;
            }
        }
        self
    }

    pub fn delete_request(
        mut self,
        now: DateTime<Utc>,
        collection_id: &str,
        request_id: &str,
    ) -> Self {
        if let Some(collection) = self.collections.iter_mut().find(|c| c.id == collection_id) {
            collection.requests.retain(|r| r.id != request_id);
            collection.updated_at = now;
        }
        if self
            .current_request
            .as_ref()
            .is_some_and(|r| r.id == request_id)
        {
            self.current_request = None;
        }
        self
    }

    /// Swap the current-request slot; the stale response is dropped with it.
    pub fn set_current_request(mut self, request: Option<ApiRequest>) -> Self {
        self.current_request = request;
        self.current_response = None;
        self
    }

    /// First half of an execution: mark in-flight and clear the previous
    /// outcome. The UI reflects this as a loading indicator.
    pub fn begin_execution(mut self) -> Self {
        self.in_flight = true;
        self.error = None;
        self.current_response = None;
        self
    }

    /// Second half of an execution: record the outcome and prepend exactly
    /// one history entry, success or failure.
    pub fn finish_execution(
        mut self,
        ids: &mut dyn IdGenerator,
        now: DateTime<Utc>,
        request: ApiRequest,
        outcome: &Execution,
    ) -> Self {
        let response = outcome.response().cloned();
        self.current_response = response.clone();
        self.error = outcome.error_message().map(str::to_owned);
        self.in_flight = false;
        self.history.insert(
            0,
            HistoryEntry {
                id: ids.next_id(),
                timestamp: now,
                request,
                response,
            },
        );
        self
    }

    /// Execute `request` end to end, threading the store through the
    /// begin/finish transitions.
    pub async fn execute(
        self,
        client: &Client,
        resolver: &VarResolver,
        ids: &mut dyn IdGenerator,
        request: ApiRequest,
    ) -> (Self, Execution) {
        let store = self.begin_execution();
        let outcome = executor::execute(client, &request, resolver).await;
        let store = store.finish_execution(ids, Utc::now(), request, &outcome);
        (store, outcome)
    }

    pub fn add_favorite(mut self, request_id: &str) -> Self {
        if !self.favorites.iter().any(|id| id == request_id) {
            self.favorites.push(request_id.to_string());
        }
        self
    }

    pub fn remove_favorite(mut self, request_id: &str) -> Self {
        self.favorites.retain(|id| id != request_id);
        self
    }

    pub fn clear_history(mut self) -> Self {
        self.history.clear();
        self
    }
}
