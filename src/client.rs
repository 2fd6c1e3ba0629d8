//! Typed client for the site API.
//!
//! Every success body is checked against the same schema the server uses before it
//! is deserialized, so a response of the wrong shape surfaces as
//! [`ClientError::InvalidResponse`] instead of being trusted.

use crate::error::ValidationError;
use crate::models::{Faq, GalleryItem, Inquiry, InsertInquiry};
use crate::response::MessageBody;
use crate::routes::{FAQS_PATH, GALLERY_PATH, INQUIRIES_PATH};
use crate::service::{RequestValidator, Validated};
use reqwest::{StatusCode, Url};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid base url '{0}'")]
    BaseUrl(String),
    /// Input failed validation before it was sent.
    #[error("invalid input: {0}")]
    InvalidInput(ValidationError),
    /// Server answered 400 with a `{message, field}` body.
    #[error("rejected by server: {0}")]
    Rejected(ValidationError),
    /// Non-2xx with a `{message}` body.
    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },
    /// Non-2xx without a structured body.
    #[error("request failed with status {0}")]
    Status(StatusCode),
    /// Success body did not match the expected schema.
    #[error("unexpected response: {0}")]
    InvalidResponse(ValidationError),
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Clone, Debug)]
pub struct SiteClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SiteClient {
    /// `base_url` is where the site is mounted, e.g. `http://localhost:5000` or
    /// `https://example.org/site/`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let mut base_url =
            Url::parse(base_url).map_err(|_| ClientError::BaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::BaseUrl(base_url.to_string()));
        }
        // API paths are joined relative to the base, so it must end in a directory.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { http, base_url })
    }

    /// GET /api/faqs
    pub async fn list_faqs(&self) -> Result<Vec<Faq>, ClientError> {
        let resp = self.http.get(self.url(FAQS_PATH)?).send().await?;
        let body = success_body(resp).await?;
        Faq::list_from_json(body).map_err(ClientError::InvalidResponse)
    }

    /// GET /api/gallery
    pub async fn list_gallery(&self) -> Result<Vec<GalleryItem>, ClientError> {
        let resp = self.http.get(self.url(GALLERY_PATH)?).send().await?;
        let body = success_body(resp).await?;
        GalleryItem::list_from_json(body).map_err(ClientError::InvalidResponse)
    }

    /// POST /api/inquiries. The input is validated locally first with the server's schema.
    pub async fn create_inquiry(&self, input: &InsertInquiry) -> Result<Inquiry, ClientError> {
        let payload = serde_json::to_value(input)
            .map_err(|e| ClientError::InvalidInput(ValidationError::body(e.to_string())))?;
        RequestValidator::validate(&payload, &InsertInquiry::SCHEMA)
            .map_err(ClientError::InvalidInput)?;
        let resp = self
            .http
            .post(self.url(INQUIRIES_PATH)?)
            .json(&payload)
            .send()
            .await?;
        let body = success_body(resp).await?;
        Inquiry::from_json(body).map_err(ClientError::InvalidResponse)
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|_| ClientError::BaseUrl(self.base_url.to_string()))
    }
}

/// Return the JSON body of a 2xx response, or turn the failure into a `ClientError`.
async fn success_body(resp: reqwest::Response) -> Result<Value, ClientError> {
    let status = resp.status();
    if status.is_success() {
        let body = resp
            .json::<Value>()
            .await
            .map_err(|e| ClientError::InvalidResponse(ValidationError::body(e.to_string())))?;
        return Ok(body);
    }
    let bytes = resp.bytes().await?;
    if status == StatusCode::BAD_REQUEST {
        if let Ok(err) = serde_json::from_slice::<ValidationError>(&bytes) {
            return Err(ClientError::Rejected(err));
        }
    }
    match serde_json::from_slice::<MessageBody>(&bytes) {
        Ok(body) => Err(ClientError::Api {
            status,
            message: body.message,
        }),
        Err(_) => Err(ClientError::Status(status)),
    }
}
