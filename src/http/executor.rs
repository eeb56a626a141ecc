use std::time::Instant;

use reqwest::Client;
use tracing::debug;

use super::builder::build_request;
use crate::env::resolver::VarResolver;
use crate::state::request::ApiRequest;
use crate::state::response::{ResponseBody, ResponseData};

/// Outcome of one execution.
///
/// A non-2xx status is a failure that still carries the server's response;
/// a transport failure (DNS, refused connection, broken stream) carries
/// only a message. All three variants are recoverable values, not errors.
#[derive(Debug, Clone)]
pub enum Execution {
    Success { response: ResponseData },
    HttpFailure { response: ResponseData, message: String },
    TransportFailure { message: String },
}

impl Execution {
    pub fn response(&self) -> Option<&ResponseData> {
        match self {
            Execution::Success { response } | Execution::HttpFailure { response, .. } => {
                Some(response)
            }
            Execution::TransportFailure { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Execution::Success { .. } => None,
            Execution::HttpFailure { message, .. }
            | Execution::TransportFailure { message } => Some(message),
        }
    }
}

/// Run one request to completion or failure. No retry, no cancellation;
/// elapsed time is measured around the whole call including body download.
pub async fn execute(client: &Client, request: &ApiRequest, resolver: &VarResolver) -> Execution {
    let start = Instant::now();

    let outgoing = match build_request(client, request, resolver).build() {
        Ok(outgoing) => outgoing,
        Err(err) => {
            return Execution::TransportFailure {
                message: err.to_string(),
            };
        }
    };
    debug!(method = request.method.as_str(), url = %outgoing.url(), "sending request");

    match client.execute(outgoing).await {
        Ok(response) => read_response(response, start).await,
        Err(err) => {
            debug!(error = %err, "transport failure");
            Execution::TransportFailure {
                message: err.to_string(),
            }
        }
    }
}

async fn read_response(response: reqwest::Response, start: Instant) -> Execution {
    let status = response.status();
    let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();

    let headers: Vec<(String, String)> = response
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            return Execution::TransportFailure {
                message: err.to_string(),
            };
        }
    };
    let elapsed_ms = start.elapsed().as_millis() as u64;

    let data = ResponseData {
        status: status.as_u16(),
        status_text: status_text.clone(),
        headers,
        body: decode_body(&content_type, &bytes),
        elapsed_ms,
        size_bytes: bytes.len(),
    };
    debug!(status = data.status, elapsed_ms, size = data.size_bytes, "response received");

    if status.is_success() {
        Execution::Success { response: data }
    } else {
        Execution::HttpFailure {
            message: format!("Error: {} {}", data.status, status_text),
            response: data,
        }
    }
}

fn decode_body(content_type: &str, bytes: &[u8]) -> ResponseBody {
    if bytes.is_empty() {
        return ResponseBody::Empty;
    }
    if content_type.contains("application/json") {
        // Pretty-print when it parses; fall back to the raw text
        if let Ok(json) = serde_json::from_slice::<serde_json::Value>(bytes) {
            if let Ok(pretty) = serde_json::to_string_pretty(&json) {
                return ResponseBody::Text(pretty);
            }
        }
        return ResponseBody::Text(String::from_utf8_lossy(bytes).into_owned());
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => ResponseBody::Text(text.to_string()),
        Err(_) => ResponseBody::Binary(bytes.to_vec()),
    }
}
