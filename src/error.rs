/// Errors from the engine's fallible seams (today: user persistence).
/// Execution failures are values, not errors — see
/// [`crate::http::executor::Execution`].
#[derive(Debug, thiserror::Error)]
pub enum CourierError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
