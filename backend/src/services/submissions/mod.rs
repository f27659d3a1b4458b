//! # Submission Service Module
//!
//! Receives the order-feedback form and hands the resulting CSV file to the
//! configured storage sink.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/save-csv`**:
//!     - **Handler**: `save::process`
//!     - **Description**: Expects a JSON `SubmissionPayload`. Rejects it with
//!       400 when the order id is missing, otherwise builds the fixed-column
//!       CSV for the chosen status, names it after the order and the current
//!       instant, and stores it. Responds with a `SubmitResponse` either way.

mod save;

use crate::error::SubmissionError;
use actix_web::web::{post, scope, JsonConfig};
use actix_web::Scope;

const API_PATH: &str = "/api/save-csv";

/// Body size limit for the form payload (10 MB).
const PAYLOAD_LIMIT: usize = 10 * 1024 * 1024;

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .app_data(json_config())
        .route("", post().to(save::process))
}

/// Malformed JSON and unknown status values answer with the same
/// `SubmitResponse` body as every other failure.
fn json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(PAYLOAD_LIMIT)
        .error_handler(|err, _req| SubmissionError::InvalidPayload(err.to_string()).into())
}
