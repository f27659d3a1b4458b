use serde::{Deserialize, Serialize};

/// Body returned by `POST /api/save-csv`, on success and on failure.
///
/// `error` carries the underlying message (filesystem or vendor text) when
/// the request failed after validation; `file_details` carries whatever the
/// storage backend reported about the stored file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(rename = "fileDetails", default, skip_serializing_if = "Option::is_none")]
    pub file_details: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    pub fn stored(message: impl Into<String>, file_name: String, details: serde_json::Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            file_name: Some(file_name),
            file_details: Some(details),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            file_name: None,
            file_details: None,
            error,
        }
    }
}
