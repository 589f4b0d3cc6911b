//! HTTP client for the reporting server.
//!
//! Three calls: the report listing and the aggregate statistics (one fetch of
//! each per poll cycle) and the multipart upload of a new input file. The
//! upload side is endpoint-agnostic — it takes whatever action and method the
//! form declares and forwards the fields as multipart data.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use thiserror::Error;

/// Listing of generated report files, one opaque identifier per entry.
pub const REPORTS_PATH: &str = "/reports";

/// Aggregate statistics endpoint; the payload shape is server-defined.
pub const STATISTICS_PATH: &str = "/statistics";

/// Default form action for input-file uploads.
pub const UPLOAD_PATH: &str = "/focus";

/// Aggregate statistics are opaque to the dashboard; they are fetched and
/// held for forward compatibility, never rendered.
pub type Statistics = serde_json::Value;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("form declares unsupported method {0:?}")]
    Method(String),
}

/// Staged upload payload: the picked (or dropped) file plus the form's
/// `save` flag, which asks the server to keep the raw input around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub save: bool,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// One `GET /reports` call; the listing order is the server's and is
    /// preserved as-is.
    pub async fn fetch_reports(&self) -> Result<Vec<String>, ClientError> {
        let response = self.http.get(self.endpoint(REPORTS_PATH)).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// One `GET /statistics` call, kept opaque.
    pub async fn fetch_statistics(&self) -> Result<Statistics, ClientError> {
        let response = self.http.get(self.endpoint(STATISTICS_PATH)).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Submits the form payload as multipart data to the form's declared
    /// action and method. One request per submission, no retry.
    pub async fn upload(
        &self,
        action: &str,
        method: &str,
        payload: UploadPayload,
    ) -> Result<(), ClientError> {
        let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
            .map_err(|_| ClientError::Method(method.to_string()))?;

        let mut form = Form::new();
        for field in form_fields(payload) {
            form = match field {
                FormField::Text { name, value } => form.text(name, value),
                FormField::File {
                    name,
                    file_name,
                    bytes,
                } => form.part(
                    name,
                    Part::bytes(bytes).file_name(file_name).mime_str("text/csv")?,
                ),
            };
        }

        let response = self
            .http
            .request(method, self.endpoint(action))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(origin_base_url())
    }
}

/// One named field of the multipart upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FormField {
    Text {
        name: &'static str,
        value: String,
    },
    File {
        name: &'static str,
        file_name: String,
        bytes: Vec<u8>,
    },
}

/// Field assembly for one submission, kept apart from `Form` construction so
/// the wire names stay inspectable: the `save` flag first, then the staged
/// file under its original filename (the server's form contract).
fn form_fields(payload: UploadPayload) -> Vec<FormField> {
    vec![
        FormField::Text {
            name: "save",
            value: if payload.save { "true" } else { "false" }.to_string(),
        },
        FormField::File {
            name: "file",
            file_name: payload.file_name,
            bytes: payload.bytes,
        },
    ]
}

/// The dashboard talks to the server that served it.
#[cfg(target_arch = "wasm32")]
fn origin_base_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_BASE_URL.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn origin_base_url() -> String {
    FALLBACK_BASE_URL.to_string()
}

const FALLBACK_BASE_URL: &str = "http://localhost:8000";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path_without_doubled_slashes() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.endpoint("/reports"), "http://localhost:8000/reports");
        assert_eq!(client.endpoint("focus"), "http://localhost:8000/focus");
    }

    #[test]
    fn upload_fields_carry_staged_filename_and_save_flag() {
        let fields = form_fields(UploadPayload {
            file_name: "subscriptions.csv".into(),
            bytes: b"location_id,city\n".to_vec(),
            save: true,
        });

        assert_eq!(
            fields[0],
            FormField::Text {
                name: "save",
                value: "true".into(),
            }
        );
        assert_eq!(
            fields[1],
            FormField::File {
                name: "file",
                file_name: "subscriptions.csv".into(),
                bytes: b"location_id,city\n".to_vec(),
            }
        );
    }

    #[test]
    fn unsaved_submissions_send_save_false() {
        let fields = form_fields(UploadPayload {
            file_name: "subscriptions.csv".into(),
            bytes: Vec::new(),
            save: false,
        });

        assert_eq!(
            fields[0],
            FormField::Text {
                name: "save",
                value: "false".into(),
            }
        );
    }

    #[tokio::test]
    async fn upload_rejects_nonsense_methods_before_sending() {
        let client = ApiClient::new("http://localhost:8000");
        let payload = UploadPayload {
            file_name: "subscriptions.csv".into(),
            bytes: b"location_id,city\n".to_vec(),
            save: false,
        };

        let err = client
            .upload(UPLOAD_PATH, "not a method", payload)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Method(_)));
    }
}
