//
//  gitlab-cli
//  api/client.rs
//

//! # HTTP Client for the GitLab API
//!
//! [`GitlabClient`] is the request transport and, via the resource modules
//! under [`crate::api::resources`], the whole callable surface of the
//! library. It handles:
//!
//! - URL construction from the configured endpoint plus an escaped path
//! - `PRIVATE-TOKEN` authentication and the optional `sudo` parameter
//! - JSON and multipart body serialization
//! - parsing responses into [`Parsed`] values (record, paginated collection,
//!   file download, primitive)
//! - mapping failure statuses to typed errors
//!
//! Each public method issues exactly one HTTP request and awaits it to
//! completion. There are no retries, no caching, and no shared mutable state:
//! the configuration is captured when the client is built.
//!
//! ## Creating a Client
//!
//! ```rust,no_run
//! use gitlab_cli::{Config, GitlabClient};
//!
//! let config = Config::default()
//!     .with_endpoint("https://gitlab.example.com/api/v4")
//!     .with_private_token("secret");
//! let client = GitlabClient::new(config)?;
//! # Ok::<(), gitlab_cli::api::Error>(())
//! ```

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_DISPOSITION, CONTENT_TYPE, LINK};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;

use super::error::{Error, ResponseError, Result};
use super::file_response::FileResponse;
use super::pagination::{collection_from_array, PageLinks};
use super::params::{BodyMap, Params};
use super::record::Record;

/// Header carrying the private token.
pub const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// The parsed result of one successful API call.
///
/// Every call produces exactly one of these shapes, never a mix: the
/// endpoint's declared shape decides which conversion the resource method
/// applies.
#[derive(Debug, Clone)]
pub enum Parsed {
    /// A single JSON object.
    Record(Record),
    /// A JSON array plus its pagination links.
    Collection(super::pagination::PaginatedCollection),
    /// A binary download.
    File(FileResponse),
    /// A bare JSON scalar, or raw text for non-JSON responses.
    Value(Value),
    /// An empty (e.g. 204) response body.
    Empty,
}

impl Parsed {
    /// Converts into a [`Record`], failing on any other shape.
    pub fn into_record(self) -> Result<Record> {
        match self {
            Parsed::Record(record) => Ok(record),
            other => Err(Error::Decode(format!(
                "expected an object response, got {}",
                other.shape_name()
            ))),
        }
    }

    /// Converts into a [`PaginatedCollection`][super::PaginatedCollection],
    /// failing on any other shape.
    pub fn into_collection(self) -> Result<super::pagination::PaginatedCollection> {
        match self {
            Parsed::Collection(collection) => Ok(collection),
            other => Err(Error::Decode(format!(
                "expected an array response, got {}",
                other.shape_name()
            ))),
        }
    }

    /// Converts into a [`FileResponse`], failing on any other shape.
    pub fn into_file(self) -> Result<FileResponse> {
        match self {
            Parsed::File(file) => Ok(file),
            other => Err(Error::Decode(format!(
                "expected a binary response, got {}",
                other.shape_name()
            ))),
        }
    }

    /// Converts into a boolean (endpoints like user block/unblock).
    pub fn into_bool(self) -> Result<bool> {
        match self {
            Parsed::Value(Value::Bool(b)) => Ok(b),
            Parsed::Empty => Ok(false),
            other => Err(Error::Decode(format!(
                "expected a boolean response, got {}",
                other.shape_name()
            ))),
        }
    }

    /// Converts into raw text (endpoints serving plain content).
    pub fn into_text(self) -> Result<String> {
        match self {
            Parsed::Value(Value::String(s)) => Ok(s),
            Parsed::Empty => Ok(String::new()),
            other => Err(Error::Decode(format!(
                "expected a text response, got {}",
                other.shape_name()
            ))),
        }
    }

    fn shape_name(&self) -> &'static str {
        match self {
            Parsed::Record(_) => "an object",
            Parsed::Collection(_) => "an array",
            Parsed::File(_) => "a binary payload",
            Parsed::Value(_) => "a primitive",
            Parsed::Empty => "an empty body",
        }
    }
}

/// The GitLab API client.
///
/// Built once from a [`Config`]; the endpoint is checked on every call so a
/// client constructed without one fails with [`Error::MissingCredentials`]
/// before any network traffic.
pub struct GitlabClient {
    http: reqwest::Client,
    config: Config,
}

impl GitlabClient {
    /// Creates a client from an explicit configuration.
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent().to_string())
            .timeout(Duration::from_secs(config.timeout));
        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    /// Creates a client from the config file and environment.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::load()?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The configured endpoint, or [`Error::MissingCredentials`].
    pub fn endpoint(&self) -> Result<&str> {
        match self.config.endpoint.as_deref() {
            Some(endpoint) if !endpoint.is_empty() => Ok(endpoint),
            _ => Err(Error::MissingCredentials),
        }
    }

    fn build_url(&self, path: &str) -> Result<String> {
        let endpoint = self.endpoint()?;
        // Validated here rather than at construction: the endpoint may come
        // from the environment and is only required once a call is made.
        url::Url::parse(endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint `{endpoint}`: {e}")))?;
        Ok(format!("{}{}", endpoint.trim_end_matches('/'), path))
    }

    /// Issues a GET request against an API path.
    pub async fn get(&self, path: &str, query: &Params) -> Result<Parsed> {
        let url = self.build_url(path)?;
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query.as_pairs());
        }
        self.perform(request, url, true).await
    }

    /// Issues a POST request with an optional JSON body.
    pub async fn post(&self, path: &str, body: Option<&BodyMap>) -> Result<Parsed> {
        self.send_json(Method::POST, path, body, true).await
    }

    /// Issues a POST request without the `PRIVATE-TOKEN` header.
    ///
    /// Only the pipeline-trigger run endpoint is unauthenticated.
    pub async fn post_unauthenticated(&self, path: &str, body: Option<&BodyMap>) -> Result<Parsed> {
        self.send_json(Method::POST, path, body, false).await
    }

    /// Issues a PUT request with an optional JSON body.
    pub async fn put(&self, path: &str, body: Option<&BodyMap>) -> Result<Parsed> {
        self.send_json(Method::PUT, path, body, true).await
    }

    /// Issues a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<Parsed> {
        let url = self.build_url(path)?;
        let request = self.http.delete(&url);
        self.perform(request, url, true).await
    }

    /// Issues a POST request with a multipart form body (file uploads).
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Parsed> {
        let url = self.build_url(path)?;
        let request = self.http.post(&url).multipart(form);
        self.perform(request, url, true).await
    }

    /// Issues an arbitrary request; used by the CLI's raw `api` command.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &Params,
        body: Option<&BodyMap>,
    ) -> Result<Parsed> {
        let url = self.build_url(path)?;
        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query.as_pairs());
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        self.perform(request, url, true).await
    }

    /// Fetches a full pagination URL as returned in a `Link` header.
    ///
    /// The URL already carries its cursor parameters; only auth is added.
    pub async fn follow_link(&self, url: &str) -> Result<Parsed> {
        // Links come from a prior response against the configured endpoint,
        // which therefore must still be set.
        self.endpoint()?;
        let request = self.http.get(url);
        self.perform(request, url.to_string(), true).await
    }

    async fn send_json(
        &self,
        method: Method,
        path: &str,
        body: Option<&BodyMap>,
        authenticate: bool,
    ) -> Result<Parsed> {
        let url = self.build_url(path)?;
        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.perform(request, url, authenticate).await
    }

    async fn perform(
        &self,
        mut request: reqwest::RequestBuilder,
        uri: String,
        authenticate: bool,
    ) -> Result<Parsed> {
        if authenticate {
            if let Some(token) = &self.config.private_token {
                request = request.header(PRIVATE_TOKEN_HEADER, token);
            }
            if let Some(sudo) = &self.config.sudo {
                request = request.query(&[("sudo", sudo)]);
            }
        }

        debug!(uri = %uri, "sending request");
        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        debug!(uri = %uri, status = status.as_u16(), "received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = ResponseError::message_from_body(&body);
            return Err(Error::from_response(status.as_u16(), message, uri));
        }

        parse_success(status, &headers, response).await
    }
}

async fn parse_success(
    status: StatusCode,
    headers: &HeaderMap,
    response: reqwest::Response,
) -> Result<Parsed> {
    if is_binary(headers) {
        let filename = headers
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(FileResponse::filename_from_disposition);
        let bytes = response.bytes().await?;
        return Ok(Parsed::File(FileResponse::new(filename, bytes.to_vec())));
    }

    let links = headers
        .get(LINK)
        .and_then(|v| v.to_str().ok())
        .map(PageLinks::parse)
        .unwrap_or_default();

    let text = response.text().await?;
    if status == StatusCode::NO_CONTENT || text.is_empty() {
        return Ok(Parsed::Empty);
    }

    if is_json(headers) {
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| Error::Decode(format!("invalid JSON body: {e}")))?;
        return wrap(value, links);
    }

    // Non-JSON text, e.g. raw snippet content.
    Ok(Parsed::Value(Value::String(text)))
}

/// Wraps a parsed JSON value into the matching [`Parsed`] shape.
fn wrap(value: Value, links: PageLinks) -> Result<Parsed> {
    match value {
        Value::Object(map) => Ok(Parsed::Record(Record::new(map))),
        Value::Array(items) => Ok(Parsed::Collection(collection_from_array(items, links)?)),
        scalar => Ok(Parsed::Value(scalar)),
    }
}

fn header_str(headers: &HeaderMap, name: reqwest::header::HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v: &HeaderValue| v.to_str().ok())
}

fn is_json(headers: &HeaderMap) -> bool {
    header_str(headers, CONTENT_TYPE)
        .map(|ct| ct.contains("json"))
        .unwrap_or(false)
}

fn is_binary(headers: &HeaderMap) -> bool {
    header_str(headers, CONTENT_TYPE)
        .map(|ct| ct.contains("application/octet-stream"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrap_object_yields_record() {
        let parsed = wrap(json!({"id": 1}), PageLinks::default()).unwrap();
        let record = parsed.into_record().unwrap();
        assert_eq!(record.get_i64("id").unwrap(), 1);
    }

    #[test]
    fn test_wrap_array_yields_collection() {
        let parsed = wrap(json!([{"id": 1}, {"id": 2}]), PageLinks::default()).unwrap();
        let collection = parsed.into_collection().unwrap();
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_wrap_scalar_passthrough() {
        let parsed = wrap(json!(true), PageLinks::default()).unwrap();
        assert!(parsed.into_bool().unwrap());
    }

    #[test]
    fn test_shape_mismatch_is_decode_error() {
        let parsed = wrap(json!({"id": 1}), PageLinks::default()).unwrap();
        assert!(matches!(parsed.into_collection(), Err(Error::Decode(_))));
    }

    #[test]
    fn test_missing_endpoint_fails_before_network() {
        let client = GitlabClient::new(Config::default()).unwrap();
        assert!(matches!(client.endpoint(), Err(Error::MissingCredentials)));
    }
}
