//! Decides whether a response body is eligible for JSON field inference.

use http::StatusCode;
use tracing::debug;

/// Returns `true` when the response body must not be parsed.
///
/// A body is skipped when the status is `204 No Content`, when the content type is
/// absent or blank, or when it is not a JSON media type (`application/json` or an
/// `application/*+json` suffix type). HTML error pages are thus documented with no fields.
///
/// # Example
///
/// ```rust
/// use http::StatusCode;
/// use restdocs_core::should_skip;
///
/// assert!(should_skip(StatusCode::NO_CONTENT, Some("application/json")));
/// assert!(should_skip(StatusCode::OK, Some("text/html; charset=utf-8")));
/// assert!(!should_skip(StatusCode::OK, Some("application/json")));
/// ```
pub fn should_skip(status: StatusCode, content_type: Option<&str>) -> bool {
    if status == StatusCode::NO_CONTENT {
        debug!("skip body of a 204 response");
        return true;
    }

    let Some(content_type) = content_type.map(str::trim).filter(|ct| !ct.is_empty()) else {
        debug!(%status, "skip body without content type");
        return true;
    };

    if !is_json(content_type) {
        debug!(%status, content_type, "skip non JSON body");
        return true;
    }

    false
}

/// Checks that a content type denotes JSON, ignoring parameters such as `charset`.
pub fn is_json(content_type: &str) -> bool {
    content_type.parse::<mime::Mime>().is_ok_and(|mime| {
        mime.type_() == mime::APPLICATION
            && (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
    })
}
