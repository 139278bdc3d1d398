// --- File: crates/parkify_slots/src/error.rs ---
use parkify_common::ParkifyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotsError {
    /// Transport-level failure talking to the booked-slots service
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Booked-slots API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Booking not found: {0}")]
    NotFound(String),

    #[error("Failed to decode booked-slots response: {0}")]
    Decode(String),

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("No parking slots available! All {total} slots are taken")]
    NoSlotsAvailable { total: usize },
}

impl From<SlotsError> for ParkifyError {
    fn from(err: SlotsError) -> Self {
        match err {
            SlotsError::Request(e) => ParkifyError::HttpError(e.to_string()),
            SlotsError::Api { .. } => ParkifyError::ExternalServiceError {
                service_name: "bookedSlots".to_string(),
                message: err.to_string(),
            },
            SlotsError::NotFound(id) => ParkifyError::NotFoundError(format!("booking {}", id)),
            SlotsError::Decode(msg) => ParkifyError::ParseError(msg),
            SlotsError::UnknownField(name) => {
                ParkifyError::ValidationError(format!("unknown form field {}", name))
            }
            SlotsError::NoSlotsAvailable { .. } => ParkifyError::ConflictError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkify_common::HttpStatusCode;

    #[test]
    fn test_conversion_keeps_http_semantics() {
        let not_found: ParkifyError = SlotsError::NotFound("17".into()).into();
        assert_eq!(not_found.status_code(), 404);

        let upstream: ParkifyError = SlotsError::Api {
            status: 503,
            message: "unavailable".into(),
        }
        .into();
        assert_eq!(upstream.status_code(), 502);

        let full: ParkifyError = SlotsError::NoSlotsAvailable { total: 10 }.into();
        assert_eq!(full.status_code(), 409);
    }
}
