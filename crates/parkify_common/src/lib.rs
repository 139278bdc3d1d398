// --- File: crates/parkify_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities

pub use error::{
    config_error, conflict, external_service_error, not_found, validation_error,
    HttpStatusCode, ParkifyError,
};

pub use http::{
    client::{create_client, DEFAULT_TIMEOUT_SECS, HTTP_CLIENT},
    handle_json_result,
};

pub use logging::{init, init_with_level, log_error, log_result};
