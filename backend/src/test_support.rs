//! Fakes shared by the unit tests: an in-process stand-in for the Zoho
//! token and upload endpoints, and a sink that records what it was given.

use crate::config::WorkDriveSettings;
use crate::storage::{StorageError, StorageSink, StoredFile};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy)]
pub enum TokenBehavior {
    Grant(&'static str),
    /// 401 with `{"error":"invalid_client"}`.
    Reject,
    /// 200 with only an `error` field.
    ErrorField(&'static str),
    /// 200 with a non-JSON body.
    Html(&'static str),
}

#[derive(Clone)]
pub struct RecordedUpload {
    pub authorization: String,
    pub body: String,
}

#[derive(Clone)]
pub struct FakeVendor {
    behavior: TokenBehavior,
    fail_uploads: bool,
    pub token_calls: Arc<AtomicUsize>,
    pub upload_calls: Arc<AtomicUsize>,
    token_forms: Arc<Mutex<Vec<HashMap<String, String>>>>,
    uploads: Arc<Mutex<Vec<RecordedUpload>>>,
}

impl FakeVendor {
    pub fn new(behavior: TokenBehavior) -> Self {
        Self {
            behavior,
            fail_uploads: false,
            token_calls: Arc::default(),
            upload_calls: Arc::default(),
            token_forms: Arc::default(),
            uploads: Arc::default(),
        }
    }

    pub fn failing_uploads(mut self) -> Self {
        self.fail_uploads = true;
        self
    }

    pub fn last_upload(&self) -> Option<RecordedUpload> {
        self.uploads.lock().unwrap().last().cloned()
    }

    pub fn last_token_form(&self) -> Option<HashMap<String, String>> {
        self.token_forms.lock().unwrap().last().cloned()
    }
}

async fn token(
    vendor: web::Data<FakeVendor>,
    form: web::Form<HashMap<String, String>>,
) -> HttpResponse {
    vendor.token_calls.fetch_add(1, Ordering::SeqCst);
    vendor.token_forms.lock().unwrap().push(form.into_inner());
    match vendor.behavior {
        TokenBehavior::Grant(access_token) => HttpResponse::Ok().json(json!({
            "access_token": access_token,
            "api_domain": "https://www.zohoapis.eu",
            "token_type": "Bearer",
            "expires_in": 3600
        })),
        TokenBehavior::Reject => {
            HttpResponse::Unauthorized().json(json!({ "error": "invalid_client" }))
        }
        TokenBehavior::ErrorField(error) => HttpResponse::Ok().json(json!({ "error": error })),
        TokenBehavior::Html(page) => HttpResponse::Ok().content_type("text/html").body(page),
    }
}

async fn upload(vendor: web::Data<FakeVendor>, req: HttpRequest, body: web::Bytes) -> HttpResponse {
    vendor.upload_calls.fetch_add(1, Ordering::SeqCst);
    let authorization = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    vendor.uploads.lock().unwrap().push(RecordedUpload {
        authorization,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    if vendor.fail_uploads {
        return HttpResponse::InternalServerError()
            .json(json!({ "errors": [{ "id": "R002", "title": "Invalid parent" }] }));
    }
    HttpResponse::Ok().json(json!({
        "data": [{ "attributes": { "resource_id": "res-1", "parent_id": "folder42" } }]
    }))
}

/// Serves `vendor` on an ephemeral local port and returns its base URL.
pub async fn start_fake_vendor(vendor: FakeVendor) -> String {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(vendor.clone()))
            .route("/oauth/v2/token", web::post().to(token))
            .route("/workdrive/api/v1/upload", web::post().to(upload))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

pub fn workdrive_settings(base_url: &str) -> WorkDriveSettings {
    WorkDriveSettings {
        client_id: "1000.ABC".to_string(),
        client_secret: "secret".to_string(),
        refresh_token: "1000.refresh".to_string(),
        folder_id: "folder42".to_string(),
        accounts_url: base_url.to_string(),
        api_url: base_url.to_string(),
    }
}

/// Keeps every stored file in memory, or fails every store.
#[derive(Default)]
pub struct RecordingSink {
    pub files: Mutex<Vec<(String, Vec<u8>)>>,
    pub fail_with: Option<String>,
}

impl RecordingSink {
    pub fn failing(message: &str) -> Self {
        Self {
            files: Mutex::default(),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn stored(&self) -> Vec<(String, Vec<u8>)> {
        self.files.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageSink for RecordingSink {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn success_message(&self) -> &'static str {
        "Datei erfolgreich gespeichert"
    }

    async fn store(&self, file_name: &str, content: Vec<u8>) -> Result<StoredFile, StorageError> {
        if let Some(message) = &self.fail_with {
            return Err(StorageError::Upload(message.clone()));
        }
        self.files
            .lock()
            .unwrap()
            .push((file_name.to_string(), content));
        Ok(StoredFile {
            location: file_name.to_string(),
            details: json!({ "name": file_name }),
        })
    }
}
