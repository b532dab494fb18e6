//! HTTP client for the finance backend
//!
//! Every call is a single attempt: no retry, no timeout, no backoff. The
//! bearer token is read from the token store on each request so a login or
//! logout is picked up immediately.

use std::fmt;
use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{PfmError, PfmResult, API_ERROR_FALLBACK};
use crate::session::TokenStore;

/// Whether a request carries the stored bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Bearer,
    Anonymous,
}

/// REST client bound to one base URL
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `https://host/api`)
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> PfmResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pfm-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub async fn get(&self, path: &str) -> PfmResult<Value> {
        self.send::<()>(Method::GET, path, None, Auth::Bearer).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> PfmResult<Value> {
        self.send(Method::POST, path, Some(body), Auth::Bearer).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> PfmResult<Value> {
        self.send(Method::PUT, path, Some(body), Auth::Bearer).await
    }

    pub async fn delete(&self, path: &str) -> PfmResult<Value> {
        self.send::<()>(Method::DELETE, path, None, Auth::Bearer).await
    }

    /// POST without the Authorization header (login, register)
    pub async fn post_public<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> PfmResult<Value> {
        self.send(Method::POST, path, Some(body), Auth::Anonymous)
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> PfmResult<Value> {
        let url = self.url(path);
        debug!(%method, %url, "sending request");

        let mut request = self.http.request(method.clone(), &url);
        if auth == Auth::Bearer {
            if let Some(token) = self.tokens.load()? {
                request = request.bearer_auth(token);
            }
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!(%method, %url, status = status.as_u16(), "received response");
        interpret_response(status, &text)
    }
}

/// Turn a status and raw body into the parsed JSON or a typed failure
///
/// A body that is not JSON is a server error whatever the status. A non-2xx
/// JSON body fails with its `message` field, or `API Error` without one.
pub fn interpret_response(status: StatusCode, body: &str) -> PfmResult<Value> {
    let json: Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(_) => {
            warn!(status = status.as_u16(), "response body is not valid JSON");
            debug!(body, "raw response body");
            return Err(PfmError::Server);
        }
    };

    if !status.is_success() {
        let message = json
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(API_ERROR_FALLBACK)
            .to_string();
        return Err(PfmError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(json)
}
