//! # Restdocs Core
//!
//! Derive REST documentation field descriptors from the HTTP exchanges of your tests.
//!
//! Given a captured request and response, this crate infers:
//! - the request and response JSON fields, as flat dot/bracket paths (`users[].address.city`),
//!   with their type, an example description and an optional flag,
//! - the query parameters and the path variables.
//!
//! Hand-written descriptors can be supplied for any field or parameter; they always take
//! precedence over the inferred ones. The result is a [`ResourceSnippet`] to be handed to
//! a documentation renderer.
//!
//! ## Quick Start
//!
//! ```rust
//! use http::{Method, StatusCode, Uri};
//! use restdocs_core::{CapturedRequest, CapturedResponse, Document, FieldDescriptor};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), restdocs_core::DocsError> {
//! let request = CapturedRequest::new(Method::GET, &Uri::from_static("/users/1?expand=roles"))
//!     .with_path_template("/users/{id}");
//! let response = CapturedResponse::new(StatusCode::OK).with_json(&json!({
//!     "id": 1,
//!     "name": "john",
//!     "roles": ["admin", "user"],
//!     "groups": []
//! }));
//!
//! let snippet = Document::builder()
//!     .with_tag("user api")
//!     .with_summary("Load a user")
//!     .with_request(request)
//!     .with_response(response)
//!     .with_response_fields([FieldDescriptor::new("name", "The user display name")])
//!     .generate()?;
//!
//! assert_eq!(snippet.identifier, "get-users-1");
//!
//! let paths = snippet.response_fields.iter().map(|it| it.path()).collect::<Vec<_>>();
//! assert_eq!(paths, ["name", "id", "roles[]", "groups[]"]);
//!
//! assert_eq!(snippet.path_parameters[0].name(), "id");
//! assert_eq!(snippet.query_parameters[0].description(), "roles");
//! # Ok(())
//! # }
//! ```
//!
//! ## Path Convention
//!
//! | JSON                          | Paths                         |
//! |-------------------------------|-------------------------------|
//! | `{"a": {"b": 1}}`             | `a.b`                         |
//! | `{"tags": ["x", "y"]}`        | `tags[]` (once per element)   |
//! | `{"items": [{"id": 1}]}`      | `items[].id`                  |
//! | `{"items": []}`               | `items[]` (optional)          |
//! | `[{"id": 1}]`                 | `[].id`                       |
//!
//! Blank strings and `null` values are documented as optional.
//!
//! ## Content Gate
//!
//! Response bodies are only parsed when the status is not `204 No Content` and the
//! content type is JSON, see [`should_skip`]. Other responses document no field.
//!
//! ## Lower-level API
//!
//! The building blocks are usable on their own: [`walk`] flattens a [`serde_json::Value`],
//! [`merge`] applies the override rule, and the [`fields`] module derives descriptors from
//! a [`CapturedRequest`] or a [`CapturedResponse`].

mod capture;
pub use self::capture::{CapturedRequest, CapturedResponse};

mod descriptor;
pub use self::descriptor::{
    FieldDescriptor, FieldType, FieldWalker, Keyed, NullValues, ParameterDescriptor,
    collapse_repeated, merge, walk,
};

mod document;
pub use self::document::{ApiTag, DocsConfig, Document, DocumentBuilder, ResourceSnippet};

mod error;
pub use self::error::{BodyTarget, DocsError};

pub mod fields;

mod gate;
pub use self::gate::{is_json, should_skip};
