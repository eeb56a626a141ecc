use reqwest::Client;

/// Shared client for all executions. No per-request timeout or retry is
/// configured; a call runs to completion or transport failure exactly once.
pub fn build_client() -> Client {
    Client::builder()
        .use_rustls_tls()
        .build()
        .expect("Failed to build HTTP client")
}
