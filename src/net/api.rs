//! Configured HTTP client for the backend API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout that aborts the fetch.
//! Elsewhere: request preparation works, transport returns
//! `ClientError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! No retries and no response interception. Transport failures, timeouts and
//! non-2xx statuses come back to the caller as `ClientError` values; each view
//! decides what to do with them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{LoginRequest, LoginResponse};
use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::state::auth::BearerSource;

pub const LOGIN_ENDPOINT: &str = "/login";

const ACCEPT: &str = "application/json, text/plain, */*";
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    #[cfg(feature = "csr")]
    fn to_http(self) -> gloo_net::http::Method {
        use gloo_net::http::Method as HttpMethod;
        match self {
            Self::Get => HttpMethod::GET,
            Self::Post => HttpMethod::POST,
            Self::Put => HttpMethod::PUT,
            Self::Delete => HttpMethod::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request after URL resolution and interception, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Duration,
}

impl PreparedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn set_header(&mut self, name: &str, value: String) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value));
    }
}

/// Body of a 2xx response, read as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub body: String,
}

impl ApiResponse {
    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Decode` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_str(&self.body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// The app's single backend client.
///
/// Every request passes through [`ApiClient::prepare`], which attaches
/// `Authorization: Bearer <token>` whenever the session has a token.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    session: Arc<dyn BearerSource + Send + Sync>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build the client. Logs the resolved base URL once.
    pub fn new<S>(config: ApiConfig, session: S) -> Self
    where
        S: BearerSource + Send + Sync + 'static,
    {
        log::info!("IFMS API base URL: {}", config.base_url);
        Self { config, session: Arc::new(session) }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Resolve `path` against the base URL and run the request interceptor.
    pub fn prepare(&self, method: Method, path: &str, body: Option<String>) -> PreparedRequest {
        let mut request = PreparedRequest {
            method,
            url: join_url(&self.config.base_url, path),
            headers: vec![("Accept".to_owned(), ACCEPT.to_owned())],
            body,
            timeout: self.config.timeout,
        };
        if request.body.is_some() {
            request.set_header("Content-Type", JSON_CONTENT_TYPE.to_owned());
        }
        self.authorize(&mut request);
        log::debug!("{} {}", request.method, request.url);
        request
    }

    /// Request interceptor: attach the bearer token if one exists.
    fn authorize(&self, request: &mut PreparedRequest) {
        if let Some(token) = self.session.bearer_token() {
            request.set_header("Authorization", format!("Bearer {token}"));
        }
    }

    /// Send a prepared request.
    ///
    /// # Errors
    ///
    /// - `Network` when the request cannot be built or the fetch fails
    /// - `Timeout` when no response arrives within the configured timeout
    /// - `Status` for any non-2xx response, carrying the raw body
    /// - `Unavailable` outside the browser build
    pub async fn send(&self, request: PreparedRequest) -> Result<ApiResponse, ClientError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{self, Either};
            use gloo_net::http::RequestBuilder;

            let controller = web_sys::AbortController::new()
                .map_err(|e| ClientError::Network(format!("abort controller unavailable: {e:?}")))?;
            let signal = controller.signal();

            let mut builder = RequestBuilder::new(&request.url)
                .method(request.method.to_http())
                .abort_signal(Some(&signal));
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let outgoing = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ClientError::Network(e.to_string()))?;

            let fetch = std::pin::pin!(outgoing.send());
            let timer = std::pin::pin!(gloo_timers::future::sleep(request.timeout));
            let response = match future::select(fetch, timer).await {
                Either::Left((result, _)) => result.map_err(|e| ClientError::Network(e.to_string()))?,
                Either::Right(((), _)) => {
                    controller.abort();
                    return Err(ClientError::Timeout(request.timeout));
                }
            };

            let status = response.status();
            let body = response.text().await.map_err(|e| ClientError::Network(e.to_string()))?;
            log::debug!("{} {} -> {status}", request.method, request.url);
            if !is_success(status) {
                return Err(ClientError::Status { status, body });
            }
            Ok(ApiResponse { body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ClientError::Unavailable)
        }
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; also `Decode` for an unexpected body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let request = self.prepare(Method::Get, path, None);
        self.send(request).await?.json()
    }

    /// `POST path` with a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; also `Encode` when `body` cannot be
    /// serialized and `Decode` for an unexpected reply.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.prepare(Method::Post, path, Some(encode_body(body)?));
        self.send(request).await?.json()
    }

    /// `PUT path` with a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; also `Encode` when `body` cannot be
    /// serialized and `Decode` for an unexpected reply.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.prepare(Method::Put, path, Some(encode_body(body)?));
        self.send(request).await?.json()
    }

    /// `DELETE path`, discarding the reply body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let request = self.prepare(Method::Delete, path, None);
        self.send(request).await.map(|_| ())
    }

    /// Exchange credentials for a session via `POST /api/login`.
    ///
    /// # Errors
    ///
    /// `Status` (typically 400 with a `detail` message) for bad credentials,
    /// `Decode` when the reply lacks a required session field, and the
    /// transport errors of [`ApiClient::send`].
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let request = self.prepare(Method::Post, LOGIN_ENDPOINT, Some(encode_body(credentials)?));
        let response = self.send(request).await?;
        LoginResponse::from_json(&response.body)
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<String, ClientError> {
    serde_json::to_string(body).map_err(|e| ClientError::Encode(e.to_string()))
}

#[cfg(any(test, feature = "csr"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Join `path` onto `base` with exactly one `/`; absolute URLs pass through.
fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    if path.is_empty() {
        return base.to_owned();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
