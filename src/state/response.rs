use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ResponseBody {
    #[default]
    Empty,
    Text(String),
    Binary(Vec<u8>),
}

/// Immutable record of one server response. Produced by the executor and
/// never mutated; a new execution replaces the current one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResponseData {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: ResponseBody,
    /// Wall-clock time around the call, including body download.
    pub elapsed_ms: u64,
    /// Byte length of the body as received.
    pub size_bytes: usize,
}
