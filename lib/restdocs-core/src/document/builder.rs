use super::{ApiTag, DocsConfig, Document, ResourceSnippet};
use crate::DocsError;
use crate::capture::{CapturedRequest, CapturedResponse};
use crate::descriptor::{FieldDescriptor, ParameterDescriptor};

/// Builder for a [`Document`].
///
/// The tag, the request and the response are required. Validation happens eagerly in
/// [`build`](Self::build), so a typo surfaces before any descriptor is derived.
///
/// Custom descriptors take precedence over derived ones sharing the same path or name.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    identifier: Option<String>,
    tag: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    request: Option<CapturedRequest>,
    response: Option<CapturedResponse>,
    request_fields: Vec<FieldDescriptor>,
    response_fields: Vec<FieldDescriptor>,
    query_parameters: Vec<ParameterDescriptor>,
    path_parameters: Vec<ParameterDescriptor>,
    config: DocsConfig,
}

impl DocumentBuilder {
    /// Sets the snippet identifier.
    ///
    /// Defaults to the slug of the method and path, e.g. `get-users-42`.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Sets the tag.
    pub fn with_tag(mut self, tag: impl ApiTag) -> Self {
        self.tag = Some(tag.name().to_string());
        self
    }

    /// Sets the operation summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the operation description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the captured request.
    pub fn with_request(mut self, request: CapturedRequest) -> Self {
        self.request = Some(request);
        self
    }

    /// Sets the captured response.
    pub fn with_response(mut self, response: CapturedResponse) -> Self {
        self.response = Some(response);
        self
    }

    /// Sets hand-written request body fields.
    pub fn with_request_fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.request_fields = fields.into_iter().collect();
        self
    }

    /// Sets hand-written response body fields.
    pub fn with_response_fields(
        mut self,
        fields: impl IntoIterator<Item = FieldDescriptor>,
    ) -> Self {
        self.response_fields = fields.into_iter().collect();
        self
    }

    /// Sets hand-written query parameters.
    pub fn with_query_parameters(
        mut self,
        parameters: impl IntoIterator<Item = ParameterDescriptor>,
    ) -> Self {
        self.query_parameters = parameters.into_iter().collect();
        self
    }

    /// Sets hand-written path parameters.
    pub fn with_path_parameters(
        mut self,
        parameters: impl IntoIterator<Item = ParameterDescriptor>,
    ) -> Self {
        self.path_parameters = parameters.into_iter().collect();
        self
    }

    /// Sets the inference configuration.
    pub fn with_config(mut self, config: DocsConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the inputs and creates the document.
    ///
    /// # Errors
    ///
    /// Fails with [`DocsError::InvalidConfiguration`] when the tag, the request or the
    /// response is missing, or when the tag or an explicit identifier is blank.
    pub fn build(self) -> Result<Document, DocsError> {
        let Self {
            identifier,
            tag,
            summary,
            description,
            request,
            response,
            request_fields,
            response_fields,
            query_parameters,
            path_parameters,
            config,
        } = self;

        let tag = tag.ok_or_else(|| DocsError::invalid_configuration("tag is required"))?;
        if tag.trim().is_empty() {
            return Err(DocsError::invalid_configuration("tag cannot be blank"));
        }
        let request =
            request.ok_or_else(|| DocsError::invalid_configuration("request is required"))?;
        let response =
            response.ok_or_else(|| DocsError::invalid_configuration("response is required"))?;

        let identifier = match identifier {
            Some(identifier) if identifier.trim().is_empty() => {
                return Err(DocsError::invalid_configuration("identifier cannot be blank"));
            }
            Some(identifier) => identifier,
            None => slug::slugify(format!("{} {}", request.method(), request.path())),
        };

        Ok(Document {
            identifier,
            tag,
            summary,
            description,
            request,
            response,
            custom_request_fields: request_fields,
            custom_response_fields: response_fields,
            custom_query_parameters: query_parameters,
            custom_path_parameters: path_parameters,
            config,
        })
    }

    /// Builds then generates the document, see [`Document::generate`].
    ///
    /// # Errors
    ///
    /// Fails when the inputs are invalid or when descriptors cannot be derived.
    pub fn generate(self) -> Result<ResourceSnippet, DocsError> {
        self.build()?.generate()
    }
}
