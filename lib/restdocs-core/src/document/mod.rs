//! Assembles one documentation call from a captured exchange.
//!
//! A [`Document`] gathers the metadata (identifier, tag, summary, description), the
//! captured request and response, and optional hand-written descriptors. Generating it
//! runs the content gate, the tree walker and the merge for the request fields, the
//! response fields, the query parameters and the path parameters, and returns a
//! [`ResourceSnippet`] for the documentation renderer.
//!
//! # Example
//!
//! ```rust
//! use http::{Method, StatusCode, Uri};
//! use restdocs_core::{CapturedRequest, CapturedResponse, Document, FieldDescriptor};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), restdocs_core::DocsError> {
//! let request = CapturedRequest::new(Method::POST, &Uri::from_static("/users"))
//!     .with_json(&json!({"name": "john", "email": "no-reply@gmail.com"}));
//! let response = CapturedResponse::new(StatusCode::CREATED)
//!     .with_json(&json!({"id": 1, "name": "john", "email": "no-reply@gmail.com"}));
//!
//! let snippet = Document::builder()
//!     .with_identifier("user-create-success")
//!     .with_tag("user api")
//!     .with_summary("user-create-api")
//!     .with_request(request)
//!     .with_response(response)
//!     .with_response_fields([FieldDescriptor::new("id", "The user identifier")])
//!     .generate()?;
//!
//! let paths = snippet.response_fields.iter().map(|it| it.path()).collect::<Vec<_>>();
//! assert_eq!(paths, ["id", "name", "email"]);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use tracing::debug;

use crate::DocsError;
use crate::capture::{CapturedRequest, CapturedResponse};
use crate::descriptor::{
    FieldDescriptor, FieldWalker, NullValues, ParameterDescriptor, collapse_repeated, merge,
};
use crate::fields;

mod builder;
pub use self::builder::DocumentBuilder;

mod tag;
pub use self::tag::ApiTag;

/// Field inference settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocsConfig {
    /// How `null` values are documented.
    pub null_values: NullValues,
    /// Collapse derived fields repeated by array elements into a single entry.
    pub collapse_repeated_paths: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            null_values: NullValues::default(),
            collapse_repeated_paths: true,
        }
    }
}

/// A validated documentation call, see [`DocumentBuilder`].
#[derive(Debug, Clone)]
pub struct Document {
    identifier: String,
    tag: String,
    summary: Option<String>,
    description: Option<String>,
    request: CapturedRequest,
    response: CapturedResponse,
    custom_request_fields: Vec<FieldDescriptor>,
    custom_response_fields: Vec<FieldDescriptor>,
    custom_query_parameters: Vec<ParameterDescriptor>,
    custom_path_parameters: Vec<ParameterDescriptor>,
    config: DocsConfig,
}

/// Everything the documentation renderer needs for one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSnippet {
    /// The snippet identifier.
    pub identifier: String,
    /// The tag name.
    pub tag: String,
    /// The operation summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// The operation description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The request body fields.
    pub request_fields: Vec<FieldDescriptor>,
    /// The response body fields.
    pub response_fields: Vec<FieldDescriptor>,
    /// The query parameters.
    pub query_parameters: Vec<ParameterDescriptor>,
    /// The path parameters.
    pub path_parameters: Vec<ParameterDescriptor>,
}

impl Document {
    /// Creates a [`DocumentBuilder`].
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// The snippet identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Derives every descriptor list and merges the hand-written ones in.
    ///
    /// # Errors
    ///
    /// Fails when a body cannot be decoded or parsed, when a JSON response has no body,
    /// or when a value is rejected by the configured [`NullValues`] policy.
    pub fn generate(self) -> Result<ResourceSnippet, DocsError> {
        let walker = FieldWalker::new(self.config.null_values);

        let request_fields = self.prepare(fields::request_fields(&self.request, walker)?);
        let response_fields = self.prepare(fields::response_fields(&self.response, walker)?);
        let query_parameters = fields::query_parameters(&self.request);
        let path_parameters = fields::path_parameters(&self.request);

        debug!(
            identifier = %self.identifier,
            request_fields = request_fields.len(),
            response_fields = response_fields.len(),
            query_parameters = query_parameters.len(),
            path_parameters = path_parameters.len(),
            "derived descriptors"
        );

        Ok(ResourceSnippet {
            identifier: self.identifier,
            tag: self.tag,
            summary: self.summary,
            description: self.description,
            request_fields: merge(self.custom_request_fields, request_fields),
            response_fields: merge(self.custom_response_fields, response_fields),
            query_parameters: merge(self.custom_query_parameters, query_parameters),
            path_parameters: merge(self.custom_path_parameters, path_parameters),
        })
    }

    fn prepare(&self, fields: Vec<FieldDescriptor>) -> Vec<FieldDescriptor> {
        if self.config.collapse_repeated_paths {
            collapse_repeated(fields)
        } else {
            fields
        }
    }
}
