//! Derives descriptors from a captured exchange.
//!
//! Request and response bodies follow different policies:
//! - a request without body (a `GET`, an empty `POST`) documents no field,
//! - a response is first checked by the [content gate](crate::should_skip), then must
//!   carry a body.
//!
//! In both cases a body that is present but not JSON is an error.

use serde_json::Value;
use tracing::debug;

use crate::capture::{CapturedRequest, CapturedResponse};
use crate::descriptor::{FieldDescriptor, FieldWalker, ParameterDescriptor};
use crate::{BodyTarget, DocsError, gate};

const ROOT_PATH: &str = "";

/// Parses a body text as a JSON tree.
///
/// Blank text reads as no tree.
///
/// # Errors
///
/// Fails with [`DocsError::JsonParseFailure`] when the text is not valid JSON.
pub fn read_tree(target: BodyTarget, text: Option<String>) -> Result<Option<Value>, DocsError> {
    let Some(text) = text.filter(|text| !text.trim().is_empty()) else {
        return Ok(None);
    };

    match serde_json::from_str(&text) {
        Ok(tree) => Ok(Some(tree)),
        Err(error) => Err(DocsError::JsonParseFailure {
            target,
            error,
            body: text,
        }),
    }
}

/// Derives the request body fields.
///
/// # Errors
///
/// Fails when the body cannot be decoded or is not valid JSON,
/// or when the walker rejects a value.
pub fn request_fields(
    request: &CapturedRequest,
    walker: FieldWalker,
) -> Result<Vec<FieldDescriptor>, DocsError> {
    let Some(tree) = read_tree(BodyTarget::Request, request.body_text()?)? else {
        debug!(method = %request.method(), path = request.path(), "no request body");
        return Ok(Vec::new());
    };

    walker.walk(&tree, ROOT_PATH)
}

/// Derives the response body fields.
///
/// # Errors
///
/// Fails when a JSON response has no body, when the body cannot be decoded or is
/// not valid JSON, or when the walker rejects a value.
pub fn response_fields(
    response: &CapturedResponse,
    walker: FieldWalker,
) -> Result<Vec<FieldDescriptor>, DocsError> {
    if gate::should_skip(response.status(), response.content_type()) {
        return Ok(Vec::new());
    }

    let Some(tree) = read_tree(BodyTarget::Response, response.body_text()?)? else {
        return Err(DocsError::MissingResponseBody {
            status: response.status().as_u16(),
        });
    };

    walker.walk(&tree, ROOT_PATH)
}

/// One descriptor per query key, described by all its values concatenated.
pub fn query_parameters(request: &CapturedRequest) -> Vec<ParameterDescriptor> {
    request
        .query()
        .iter()
        .map(|(name, values)| ParameterDescriptor::new(name, values.concat()))
        .collect()
}

/// One descriptor per bound path variable, described by its value.
pub fn path_parameters(request: &CapturedRequest) -> Vec<ParameterDescriptor> {
    request
        .path_variables()
        .iter()
        .map(|(name, value)| ParameterDescriptor::new(name, value))
        .collect()
}
