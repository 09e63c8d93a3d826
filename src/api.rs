//! Typed access to the actions API.
//!
//! The raw exchange sits behind [`Transport`]; [`ApiClient`] builds paths,
//! unwraps the `{data: {...}}` envelope and maps failures to [`ApiError`].

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{Action, ActionList, ActionTarget, CollectedProfile, Filter, NewAction};

/// Characters left unescaped by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

/// A request relative to the API base, e.g. `/actions?q=launch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post_json(path: impl Into<String>, body: String) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// One HTTP exchange. Futures are not `Send`; everything runs on the UI thread.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct ActionData {
    action: Option<Action>,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TargetsData {
    action_targets: Option<Vec<ActionTarget>>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct CollectedData {
    collected: Option<Vec<CollectedProfile>>,
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

pub fn actions_path(filter: &Filter) -> String {
    let query = filter
        .query_pairs()
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("/actions?{}", query)
}

pub fn action_path(id: &str) -> String {
    format!("/actions/{}", encode_component(id))
}

pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list_actions(&self, filter: &Filter) -> Result<ActionList, ApiError> {
        self.get_data(actions_path(filter)).await
    }

    pub async fn get_action(&self, id: &str) -> Result<Option<Action>, ApiError> {
        let data: ActionData = self.get_data(action_path(id)).await?;
        Ok(data.action)
    }

    pub async fn list_targets(&self, id: &str) -> Result<Vec<ActionTarget>, ApiError> {
        let data: TargetsData = self
            .get_data(format!("{}/targets", action_path(id)))
            .await?;
        Ok(data.action_targets.unwrap_or_default())
    }

    pub async fn list_collected(&self, id: &str) -> Result<Vec<CollectedProfile>, ApiError> {
        let data: CollectedData = self
            .get_data(format!("{}/collected", action_path(id)))
            .await?;
        Ok(data.collected.unwrap_or_default())
    }

    /// Response body on success is ignored.
    pub async fn create_action(&self, payload: &NewAction) -> Result<(), ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self
            .transport
            .send(ApiRequest::post_json("/actions", body))
            .await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: response.status,
                body: response.body,
            })
        }
    }

    /// GET `path` and unwrap the envelope. A missing `data` object decodes as
    /// `D::default()`, so absent keys surface as empty collections.
    async fn get_data<D>(&self, path: String) -> Result<D, ApiError>
    where
        D: DeserializeOwned + Default,
    {
        let response = self.transport.send(ApiRequest::get(path.clone())).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }
        let envelope: Envelope<D> =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        match envelope.data {
            Some(data) => Ok(data),
            None => {
                tracing::debug!(%path, "response envelope has no data");
                Ok(D::default())
            }
        }
    }
}
