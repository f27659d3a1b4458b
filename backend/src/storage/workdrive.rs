//! Upload into a Zoho WorkDrive folder.
//!
//! Every store is two requests against the vendor, both single attempt:
//! 1. `POST {accounts}/oauth/v2/token` (form encoded, `grant_type=refresh_token`)
//!    exchanges the long-lived refresh token for a short-lived access token.
//! 2. `POST {api}/workdrive/api/v1/upload` (multipart) sends the file as the
//!    `content` part and the destination folder as `parent_id`, authorized
//!    with `Zoho-oauthtoken <access token>`.
//!
//! Access tokens are not cached; each submission fetches a fresh one.

use super::{StorageError, StorageSink, StoredFile};
use crate::config::WorkDriveSettings;
use async_trait::async_trait;
use log::{error, info};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const TOKEN_PATH: &str = "/oauth/v2/token";
const UPLOAD_PATH: &str = "/workdrive/api/v1/upload";

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}

pub struct WorkDriveSink {
    client: Client,
    settings: WorkDriveSettings,
}

impl WorkDriveSink {
    pub fn new(settings: WorkDriveSettings, timeout: Duration) -> Result<Self, StorageError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, settings })
    }

    fn url(base: &str, path: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), path)
    }

    async fn access_token(&self) -> Result<String, StorageError> {
        let response = self
            .client
            .post(Self::url(&self.settings.accounts_url, TOKEN_PATH))
            .form(&[
                ("client_id", self.settings.client_id.as_str()),
                ("client_secret", self.settings.client_secret.as_str()),
                ("refresh_token", self.settings.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Auth(format!("{status} {body}")));
        }

        // Zoho answers some credential errors with 200 and an `error` field,
        // and outages with a 200 HTML page.
        let body = response.text().await?;
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|_| StorageError::Auth(body.clone()))?;
        match token.access_token {
            Some(access_token) if !access_token.is_empty() => Ok(access_token),
            _ => Err(StorageError::Auth(
                token
                    .error
                    .unwrap_or_else(|| "response did not contain an access_token".to_string()),
            )),
        }
    }
}

#[async_trait]
impl StorageSink for WorkDriveSink {
    fn name(&self) -> &'static str {
        "workdrive"
    }

    fn success_message(&self) -> &'static str {
        "Datei erfolgreich in Zoho WorkDrive hochgeladen"
    }

    async fn store(&self, file_name: &str, content: Vec<u8>) -> Result<StoredFile, StorageError> {
        let token = self.access_token().await.inspect_err(|e| {
            error!("Error getting Zoho access token: {e}");
        })?;

        let size = content.len();
        let part = Part::bytes(content)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let form = Form::new()
            .part("content", part)
            .text("parent_id", self.settings.folder_id.clone());

        let response = self
            .client
            .post(Self::url(&self.settings.api_url, UPLOAD_PATH))
            .header(AUTHORIZATION, format!("Zoho-oauthtoken {token}"))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            error!("WorkDrive upload of {file_name} failed with {status}");
            return Err(StorageError::Upload(body));
        }

        info!("Uploaded {file_name} ({size} bytes) to WorkDrive folder {}", self.settings.folder_id);
        let details = serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body));
        Ok(StoredFile {
            location: format!("workdrive:{}/{file_name}", self.settings.folder_id),
            details,
        })
    }
}
