use gloo_net::http::Request;

use crate::api::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::ApiError;

/// `fetch`-backed transport rooted at the configured API base.
pub struct HttpTransport {
    base: String,
}

impl HttpTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url(&request.path);
        tracing::debug!(method = ?request.method, %url, "request");

        let response = match request.method {
            Method::Get => Request::get(&url).send().await,
            Method::Post => Request::post(&url)
                .header("Content-Type", "application/json")
                .body(request.body.unwrap_or_default())
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await,
        }
        .map_err(network_error)?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        tracing::debug!(status, %url, "response");
        Ok(ApiResponse { status, body })
    }
}
