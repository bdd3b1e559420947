//! The HTTP request wrapper.
//!
//! [`ApiClient`] resolves relative paths against the configured base
//! URL, attaches JSON bodies and the optional bearer token, and
//! normalizes every failure into [`ClientError`]. Non-2xx responses
//! have their `detail` field extracted from the JSON error body, with
//! `HTTP <status>` as the fallback. `204 No Content` resolves without
//! touching the body. One attempt per call; the timeout is the only
//! transport guard.

use reqwest::{Client, RequestBuilder, Response, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Thin wrapper around [`reqwest::Client`] speaking the EpiWatch API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            token: None,
        })
    }

    /// A copy of this client that sends `Authorization: Bearer <token>`
    /// on every request.
    #[must_use]
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        let mut client = self.clone();
        client.token = Some(token.into());
        client
    }

    /// GET a JSON resource. Query pairs are appended only when present,
    /// so an empty list produces no `?`.
    pub async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let mut req = self.http.get(self.url(path));
        if !query.is_empty() {
            req = req.query(query);
        }
        self.send_json(req).await
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.http.post(self.url(path)).json(body)).await
    }

    /// POST with no body and decode a JSON response.
    pub async fn post_empty<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        self.send_json(self.http.post(self.url(path))).await
    }

    /// PATCH a JSON body and decode a JSON response.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.http.patch(self.url(path)).json(body)).await
    }

    /// DELETE a resource. A `204 No Content` response resolves without
    /// parsing a body.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let req = self.authorize(self.http.delete(self.url(path)));
        let resp = req.send().await?;
        Self::check(resp).await.map(|_| ())
    }

    /// POST a multipart form (PDF uploads) and decode a JSON response.
    pub async fn post_multipart<T>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        self.send_json(self.http.post(self.url(path)).multipart(form)).await
    }

    fn url(&self, path: &str) -> String {
        let sep = if path.starts_with('/') { "" } else { "/" };
        format!("{}{sep}{path}", self.base_url)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send_json<T>(&self, req: RequestBuilder) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let resp = self.authorize(req).send().await?;
        let resp = Self::check(resp).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }

    /// Turn a non-2xx response into [`ClientError::Api`] with the
    /// server's `detail` message.
    async fn check(resp: Response) -> Result<Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let code = status.as_u16();
        let body: Option<serde_json::Value> = resp.json().await.ok();
        let detail = body
            .as_ref()
            .and_then(|v| v.get("detail"))
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| format!("HTTP {code}"), ToOwned::to_owned);
        tracing::debug!(status = code, %detail, "api error");
        Err(ClientError::Api {
            status: code,
            detail,
        })
    }
}
