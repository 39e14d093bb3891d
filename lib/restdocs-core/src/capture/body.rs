use bytes::Bytes;

use crate::{BodyTarget, DocsError};

const DEFAULT_CHARSET: &str = "utf-8";

/// Decodes a captured body as text.
///
/// The charset comes from the content type parameter, UTF-8 when absent.
/// Absent or zero-length bodies decode to `None`.
pub(super) fn decode_text(
    target: BodyTarget,
    content_type: Option<&str>,
    body: Option<&Bytes>,
) -> Result<Option<String>, DocsError> {
    let Some(body) = body.filter(|body| !body.is_empty()) else {
        return Ok(None);
    };

    let charset = charset(content_type);
    let encoding_failure = |reason: String| DocsError::EncodingFailure {
        target,
        charset: charset.clone(),
        reason,
    };

    let text = match charset.as_str() {
        "utf-8" | "utf8" => std::str::from_utf8(body)
            .map_err(|err| encoding_failure(err.to_string()))?
            .to_string(),
        "us-ascii" | "ascii" => {
            if !body.is_ascii() {
                return Err(encoding_failure("non ASCII byte in body".to_string()));
            }
            String::from_utf8_lossy(body).into_owned()
        }
        _ => return Err(encoding_failure("unsupported charset".to_string())),
    };

    Ok(Some(text))
}

fn charset(content_type: Option<&str>) -> String {
    content_type
        .and_then(|ct| ct.parse::<mime::Mime>().ok())
        .and_then(|mime| {
            mime.get_param(mime::CHARSET)
                .map(|charset| charset.as_str().to_ascii_lowercase())
        })
        .unwrap_or_else(|| DEFAULT_CHARSET.to_string())
}
