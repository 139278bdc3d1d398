// --- File: crates/parkify_common/src/http/client.rs ---
use once_cell::sync::Lazy;
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A shared HTTP client with the default timeout.
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    create_client(DEFAULT_TIMEOUT_SECS).unwrap_or_else(|err| {
        tracing::warn!("Falling back to an unconfigured HTTP client: {}", err);
        Client::new()
    })
});

/// Creates a new HTTP client with the given request timeout.
///
/// A timeout of zero disables the timeout entirely.
pub fn create_client(timeout_secs: u64) -> Result<Client, ReqwestError> {
    let builder = Client::builder();
    let builder = if timeout_secs > 0 {
        builder.timeout(Duration::from_secs(timeout_secs))
    } else {
        builder
    };
    builder.build()
}
