//! Thin HTTP client for backend checks that accompany UI flows.

use jsonpath_lib as jsonpath;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// JSON API client bound to a base URL, with optional bearer token and
/// extra default headers.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    bearer: Option<String>,
    headers: Vec<(String, String)>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            bearer: None,
            headers: Vec::new(),
        }
    }

    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.send(Method::GET, path, None::<&Value>).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        self.send(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.send(Method::DELETE, path, None::<&Value>).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse> {
        let url = self.full_url(path);
        info!(%method, %url, "api request");
        let mut request = self.http.request(method, &url);
        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        debug!(status, "api response");
        Ok(ApiResponse { status, body })
    }

    /// Absolute paths pass through untouched; everything else is joined to
    /// the base URL with exactly one slash between them.
    fn full_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Buffered response: status code plus the parsed JSON body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// First value matching a JSON path expression, if any.
    pub fn json_path(&self, path: &str) -> Result<Option<Value>> {
        let matches = jsonpath::select(&self.body, path).map_err(|err| Error::Parse {
            what: "json path",
            text: format!("{path}: {err}"),
        })?;
        Ok(matches.first().map(|v| (*v).clone()))
    }

    pub fn json_path_str(&self, path: &str) -> Result<Option<String>> {
        Ok(self
            .json_path(path)?
            .and_then(|v| v.as_str().map(str::to_string)))
    }

    pub fn json_path_i64(&self, path: &str) -> Result<Option<i64>> {
        Ok(self.json_path(path)?.and_then(|v| v.as_i64()))
    }

    pub fn validate_status(&self, expected: u16) -> Result<()> {
        if self.status == expected {
            Ok(())
        } else {
            Err(Error::assertion("response status", expected, self.status))
        }
    }
}
