// --- File: crates/parkify_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{HttpStatusCode, ParkifyError};

pub mod client;

/// Renders the error as `{"error": {"message": ..., "code": ...}}` with the mapped status.
impl IntoResponse for ParkifyError {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
            }
        }));

        (status_code, body).into_response()
    }
}

/// Converts a `Result<T, ParkifyError>` into a JSON handler result.
pub fn handle_json_result<T>(result: Result<T, ParkifyError>) -> Result<Json<T>, Response>
where
    T: serde::Serialize,
{
    result.map(Json).map_err(|err| err.into_response())
}
