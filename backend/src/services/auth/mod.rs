//! # OAuth Setup Module
//!
//! Redirect target for the Zoho consent screen. It is only used once, while
//! an operator creates the refresh token for `ZOHO_REFRESH_TOKEN`.
//!
//! ## Registered Routes:
//!
//! *   **`GET /api/auth/callback?code=...`**:
//!     - **Handler**: `callback::process`
//!     - **Description**: Shows the authorization code together with the
//!       `curl` command that exchanges it for a refresh token. Without a
//!       code it answers 400 with `{"error":"No code provided"}`.

mod callback;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/auth";

/// Values printed into the exchange command.
#[derive(Debug, Clone)]
pub struct OAuthSetup {
    pub accounts_url: String,
    pub redirect_uri: String,
}

impl OAuthSetup {
    pub fn new(accounts_url: &str, public_url: &str) -> Self {
        Self {
            accounts_url: accounts_url.trim_end_matches('/').to_string(),
            redirect_uri: format!("{}{}/callback", public_url.trim_end_matches('/'), API_PATH),
        }
    }
}

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/callback", get().to(callback::process))
}
