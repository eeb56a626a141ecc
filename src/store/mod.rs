pub mod auth_store;
pub mod environment_store;
pub mod request_store;
pub mod seed;

pub use auth_store::AuthStore;
pub use environment_store::EnvironmentStore;
pub use request_store::RequestStore;
