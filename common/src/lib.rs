//! Types shared between the order form (browser) and the submission service.
//!
//! - `model`: the `Submission` record and its status-dependent outcome.
//! - `requests` / `responses`: the JSON shapes exchanged on `/api/save-csv`.
//! - `form`: raw form input, validation and conversion into a request payload.
//! - `locale`: decimal-comma numbers and delivery weeks.

pub mod form;
pub mod locale;
pub mod model;
pub mod requests;
pub mod responses;
