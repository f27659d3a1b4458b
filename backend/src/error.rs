//! Errors of the submission endpoint and their HTTP mapping.
//!
//! The response body is always a `SubmitResponse` so the form can show
//! `message` without inspecting the status code.

use crate::storage::StorageError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::model::submission::MissingOrderId;
use common::responses::SubmitResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    MissingOrderId(#[from] MissingOrderId),
    /// Body was not JSON or did not match the payload shape.
    #[error("Fehler beim Verarbeiten der Anfrage")]
    InvalidPayload(String),
    #[error("Fehler beim Erstellen der CSV-Datei")]
    Csv(#[from] csv::Error),
    #[error("Fehler beim Speichern der Datei")]
    Storage(#[from] StorageError),
}

impl SubmissionError {
    /// Underlying text returned as `error`.
    fn detail(&self) -> Option<String> {
        match self {
            SubmissionError::MissingOrderId(_) => None,
            SubmissionError::InvalidPayload(reason) => Some(reason.clone()),
            SubmissionError::Csv(e) => Some(e.to_string()),
            SubmissionError::Storage(e) => Some(e.to_string()),
        }
    }
}

impl ResponseError for SubmissionError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::MissingOrderId(_) | SubmissionError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            SubmissionError::Csv(_) | SubmissionError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(SubmitResponse::failed(self.to_string(), self.detail()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: SubmissionError) -> (StatusCode, SubmitResponse) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn missing_order_id_is_bad_request_without_detail() {
        let (status, body) = body_of(MissingOrderId.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert_eq!(body.message, "OrderID ist erforderlich");
        assert_eq!(body.error, None);
    }

    #[actix_web::test]
    async fn storage_failure_keeps_vendor_text() {
        let err = SubmissionError::from(StorageError::Upload("{\"errors\":[]}".to_string()));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Fehler beim Speichern der Datei");
        assert_eq!(body.error.as_deref(), Some("Upload failed: {\"errors\":[]}"));
    }

    #[actix_web::test]
    async fn invalid_payload_is_bad_request() {
        let err = SubmissionError::InvalidPayload("expected value at line 1".to_string());
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Fehler beim Verarbeiten der Anfrage");
        assert_eq!(body.error.as_deref(), Some("expected value at line 1"));
    }
}
