//! HTTP endpoints, one sub-module per API scope.
//!
//! - `submissions`: `POST /api/save-csv`, the order-feedback form target.
//! - `auth`: `GET /api/auth/callback`, the one-off OAuth helper used while
//!   setting up WorkDrive credentials.

pub mod auth;
pub mod submissions;
