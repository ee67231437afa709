//! HTTP client adapter: the single point of entry for all calls to the recruitment API.
//!
//! No other module builds requests with reqwest directly. Requests are sent once;
//! there is no retry loop and no default timeout.

use std::time::Duration;

use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::ApiError;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Detail,
}

/// FastAPI sends `detail` either as a plain string or, for request validation
/// failures, as a list of issues.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Issues(Vec<DetailIssue>),
}

#[derive(Debug, Deserialize)]
struct DetailIssue {
    msg: String,
}

/// Thin JSON-over-HTTP client bound to one base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the base URL and a relative path without doubling the slash.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends one request and decodes the JSON response as `T`.
    ///
    /// Every failure, including a non-2xx status, comes back as `Err(ApiError)`.
    pub async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("{method} {url}");

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!("{method} {url} failed before a response arrived: {e}");
            ApiError::transport(e)
        })?;

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) if !status.is_success() => {
                warn!("{method} {url} returned {status} but the body could not be read: {e}");
                return Err(backend_error(status.as_u16(), ""));
            }
            Err(e) => {
                warn!("{method} {url} returned {status} but the body could not be read: {e}");
                return Err(ApiError::transport(e));
            }
        };

        if !status.is_success() {
            let err = backend_error(status.as_u16(), &text);
            warn!("{method} {url} returned {status}: {}", err.message());
            return Err(err);
        }

        serde_json::from_str(&text).map_err(|e| {
            warn!("{method} {url} returned an unexpected body: {e}");
            ApiError::Decode {
                status: status.as_u16(),
                message: format!("Unexpected response from the recruitment API: {e}"),
            }
        })
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, Some(body)).await
    }
}

fn backend_error(status: u16, body: &str) -> ApiError {
    ApiError::Backend {
        status,
        message: extract_error_message(status, body),
    }
}

/// Picks the message to show for a failed response.
///
/// Order: `detail` string, joined `detail[].msg`, raw body text, status fallback.
fn extract_error_message(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| match b.detail {
            Detail::Message(message) => Some(message),
            Detail::Issues(issues) => {
                let joined = issues
                    .into_iter()
                    .map(|i| i.msg)
                    .collect::<Vec<_>>()
                    .join("; ");
                Some(joined)
            }
        })
        .filter(|m| !m.trim().is_empty());

    if let Some(message) = detail {
        return message;
    }

    let body = body.trim();
    if body.is_empty() {
        format!("Request failed with status code {status}")
    } else {
        body.to_string()
    }
}
