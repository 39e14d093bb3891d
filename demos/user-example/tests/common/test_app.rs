#![allow(
    clippy::missing_errors_doc,
    dead_code,
    missing_docs,
    clippy::expect_used
)]
use anyhow::Context;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, header};
use bytes::Bytes;
use serde_json::Value;
use tower::ServiceExt;
use tracing::debug;

use restdocs_core::{CapturedRequest, CapturedResponse, DocumentBuilder};

use user_example::app;

/// Drives the application in-process and captures each exchange
#[derive(Debug, Clone)]
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn start() -> Self {
        Self { router: app() }
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<Exchange> {
        self.exchange(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> anyhow::Result<Exchange> {
        self.exchange(Method::DELETE, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &Value) -> anyhow::Result<Exchange> {
        self.exchange(Method::POST, uri, Some(body)).await
    }

    async fn exchange(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
    ) -> anyhow::Result<Exchange> {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Bytes::from(serde_json::to_vec(json).context("serialize request body")?)
            }
            None => Bytes::new(),
        };
        let request = builder.body(body).context("build request")?;

        let mut captured = Request::new(request.body().clone());
        *captured.method_mut() = request.method().clone();
        *captured.uri_mut() = request.uri().clone();
        *captured.headers_mut() = request.headers().clone();
        let captured = CapturedRequest::from(captured);

        let response = self
            .router
            .clone()
            .oneshot(request.map(Body::from))
            .await
            .context("call router")?;
        let (parts, body) = response.into_parts();
        let body = axum::body::to_bytes(body, usize::MAX)
            .await
            .context("read response body")?;
        debug!(status = %parts.status, bytes = body.len(), "exchange done");

        let response = CapturedResponse::from(axum::http::Response::from_parts(parts, body));

        Ok(Exchange {
            request: captured,
            response,
        })
    }
}

/// A captured request and its response
#[derive(Debug, Clone)]
pub struct Exchange {
    pub request: CapturedRequest,
    pub response: CapturedResponse,
}

impl Exchange {
    /// Binds the path variables of the request against a route template
    #[must_use]
    pub fn with_path_template(mut self, template: &str) -> Self {
        self.request = self.request.with_path_template(template);
        self
    }

    /// Starts a document for this exchange
    pub fn document(self) -> DocumentBuilder {
        restdocs_core::Document::builder()
            .with_request(self.request)
            .with_response(self.response)
    }

    pub fn json(&self) -> anyhow::Result<Value> {
        let text = self
            .response
            .body_text()?
            .context("response without body")?;
        serde_json::from_str(&text).context("parse response body")
    }
}
