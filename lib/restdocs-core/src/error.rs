use crate::descriptor::FieldType;

/// The side of the exchange a body belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BodyTarget {
    /// The request body.
    #[display("request")]
    Request,
    /// The response body.
    #[display("response")]
    Response,
}

/// Errors raised while deriving documentation descriptors.
///
/// None of these are recovered internally: they are meant to fail the enclosing test.
#[derive(Debug, derive_more::Error, derive_more::Display)]
#[non_exhaustive]
pub enum DocsError {
    /// The body bytes cannot be decoded as text.
    ///
    /// Occurs on invalid bytes for the declared charset, or when the charset is not supported.
    #[display("Cannot decode {target} body as {charset} text: {reason}")]
    EncodingFailure {
        /// The body the failure comes from.
        target: BodyTarget,
        /// The charset used for decoding.
        charset: String,
        /// Why decoding failed.
        reason: String,
    },

    /// A non-empty body is not valid JSON.
    #[display("Failed to read {target} body as JSON: {error}\n{body}")]
    JsonParseFailure {
        /// The body the failure comes from.
        target: BodyTarget,
        /// The underlying parser error.
        #[error(source)]
        error: serde_json::Error,
        /// The body that failed to parse.
        body: String,
    },

    /// A JSON response was expected but the body is absent.
    #[display("Response body cannot be empty unless HTTP status is 204, got status {status}")]
    MissingResponseBody {
        /// The response status code.
        status: u16,
    },

    /// The walker met a JSON value kind it was configured to reject.
    #[display("Unsupported {kind} value at '{path}'")]
    UnsupportedNodeType {
        /// Path of the offending value.
        path: String,
        /// Kind of the offending value.
        kind: FieldType,
    },

    /// A required documentation input is missing or blank.
    #[display("Invalid documentation configuration: {message}")]
    InvalidConfiguration {
        /// What is wrong.
        message: String,
    },
}

impl DocsError {
    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}
