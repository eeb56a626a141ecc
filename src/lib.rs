//! Courier: a headless API client engine.
//!
//! Build HTTP requests, execute them against arbitrary servers, and organize
//! them into collections with environment-scoped `{{variable}}` substitution.
//! All state lives in plain store values whose transitions consume the store
//! and return the next one, so the whole engine is testable without a UI.

pub mod env;
pub mod error;
pub mod http;
pub mod id;
pub mod state;
pub mod storage;
pub mod store;

pub use error::CourierError;
