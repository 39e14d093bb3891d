//! Snapshots of the HTTP exchange being documented.
//!
//! A [`CapturedRequest`] and a [`CapturedResponse`] hold what a test observed: method,
//! path, query, path variables, status, content type and the raw body bytes.
//! They can be built by hand or converted from [`http::Request`] / [`http::Response`].

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, Method, StatusCode, Uri};
use indexmap::IndexMap;
use tracing::warn;

use crate::{BodyTarget, DocsError};

mod body;
mod path;
mod query;

/// The request side of a captured exchange.
///
/// # Example
///
/// ```rust
/// use http::{Method, Uri};
/// use restdocs_core::CapturedRequest;
///
/// let uri = Uri::from_static("/users/42/posts?sort=desc");
/// let request = CapturedRequest::new(Method::GET, &uri)
///     .with_path_template("/users/{user_id}/posts");
///
/// assert_eq!(request.path(), "/users/42/posts");
/// assert_eq!(request.path_variables().get("user_id").map(String::as_str), Some("42"));
/// assert_eq!(request.query().get("sort"), Some(&vec!["desc".to_string()]));
/// ```
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    method: Method,
    path: String,
    query: IndexMap<String, Vec<String>>,
    path_variables: IndexMap<String, String>,
    content_type: Option<String>,
    body: Option<Bytes>,
}

impl CapturedRequest {
    /// Creates a request snapshot, reading the path and query from the URI.
    pub fn new(method: Method, uri: &Uri) -> Self {
        let query = uri.query().map(query::parse_query).unwrap_or_default();
        Self {
            method,
            path: uri.path().to_string(),
            query,
            path_variables: IndexMap::new(),
            content_type: None,
            body: None,
        }
    }

    /// Sets the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the raw body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a JSON body along with the `application/json` content type.
    pub fn with_json(self, value: &serde_json::Value) -> Self {
        self.with_content_type(mime::APPLICATION_JSON.as_ref())
            .with_body(value.to_string())
    }

    /// Appends a query parameter value.
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.entry(name.into()).or_default().push(value.into());
        self
    }

    /// Binds a path variable.
    pub fn with_path_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_variables.insert(name.into(), value.into());
        self
    }

    /// Binds the path variables declared by a route template such as `/users/{id}`.
    ///
    /// When the request path does not match the template no variable is bound.
    pub fn with_path_template(mut self, template: &str) -> Self {
        match path::match_template(template, &self.path) {
            Some(variables) => self.path_variables.extend(variables),
            None => warn!(template, path = %self.path, "path does not match template"),
        }
        self
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request path, without query.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query parameters with all their values.
    pub fn query(&self) -> &IndexMap<String, Vec<String>> {
        &self.query
    }

    /// The bound path variables.
    pub fn path_variables(&self) -> &IndexMap<String, String> {
        &self.path_variables
    }

    /// The declared content type.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Decodes the body as text, `None` when there is no body.
    ///
    /// # Errors
    ///
    /// Fails with [`DocsError::EncodingFailure`] when the bytes do not match the charset.
    pub fn body_text(&self) -> Result<Option<String>, DocsError> {
        body::decode_text(BodyTarget::Request, self.content_type(), self.body.as_ref())
    }
}

impl From<http::Request<Bytes>> for CapturedRequest {
    fn from(request: http::Request<Bytes>) -> Self {
        let (parts, body) = request.into_parts();
        let mut result = Self::new(parts.method, &parts.uri).with_body(body);
        result.content_type = content_type(&parts.headers);
        result
    }
}

/// The response side of a captured exchange.
#[derive(Debug, Clone)]
pub struct CapturedResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: Option<Bytes>,
}

impl CapturedResponse {
    /// Creates a response snapshot without content type nor body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            body: None,
        }
    }

    /// Sets the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the raw body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a JSON body along with the `application/json` content type.
    pub fn with_json(self, value: &serde_json::Value) -> Self {
        self.with_content_type(mime::APPLICATION_JSON.as_ref())
            .with_body(value.to_string())
    }

    /// The status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The declared content type.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Decodes the body as text, `None` when there is no body.
    ///
    /// # Errors
    ///
    /// Fails with [`DocsError::EncodingFailure`] when the bytes do not match the charset.
    pub fn body_text(&self) -> Result<Option<String>, DocsError> {
        body::decode_text(BodyTarget::Response, self.content_type(), self.body.as_ref())
    }
}

impl From<http::Response<Bytes>> for CapturedResponse {
    fn from(response: http::Response<Bytes>) -> Self {
        let (parts, body) = response.into_parts();
        let mut result = Self::new(parts.status).with_body(body);
        result.content_type = content_type(&parts.headers);
        result
    }
}

fn content_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
