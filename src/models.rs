//! Wire models for the actions API.
//!
//! Every field is tolerant of absence and `null`: a partial record still
//! renders, with blanks shown as a dash.

use serde::{Deserialize, Deserializer, Serialize};

pub const ACTION_TYPES: &[&str] = &[
    "BULK_MESSAGING",
    "KEYWORD_SEARCH",
    "PUBLISH_CONTENT",
    "PROFILE_INTERACTION",
];

pub const ACTION_STATES: &[&str] = &["PENDING", "INPROGRESS", "PAUSE", "DONE"];

pub const PLATFORMS: &[&str] = &["TELEGRAM", "X", "INSTAGRAM", "LINKEDIN", "EMAIL", "TIKTOK"];

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Counts arrive either as display text ("10.5k") or as plain numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Count>::deserialize(deserializer)?.map(|count| match count {
        Count::Text(text) => text,
        Count::Int(n) => n.to_string(),
        Count::Float(n) => n.to_string(),
    }))
}

/// A schedulable unit of outbound work.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Action {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub state: Option<String>,
    pub target_platform: Option<String>,
    pub created_by: Option<String>,
    pub owner_id: Option<String>,
    pub disabled: Option<bool>,
    pub content_subject: Option<String>,
    pub content_message: Option<String>,
    #[serde(rename = "contentBlobURL", deserialize_with = "null_as_default")]
    pub content_blob_urls: Vec<String>,
    pub scheduled_date: Option<String>,
    pub execution_interval: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(rename = "campaignID")]
    pub campaign_id: Option<String>,
}

impl Action {
    /// `type • state • platform`, skipping blank segments.
    pub fn meta_line(&self) -> String {
        [&self.kind, &self.state, &self.target_platform]
            .into_iter()
            .filter_map(|s| non_blank(s.as_deref()))
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

/// One recipient/platform binding of an action.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionTarget {
    pub id: Option<String>,
    pub person_id: Option<String>,
    pub platform: Option<String>,
    pub link: Option<String>,
    pub source_type: Option<String>,
    pub status: Option<String>,
}

/// Enrichment data about a target's platform profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CollectedProfile {
    pub id: Option<String>,
    pub platform_username: Option<String>,
    pub full_name: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub follower_count: Option<String>,
    pub introduction: Option<String>,
    pub platform: Option<String>,
    pub link: Option<String>,
    pub status: Option<String>,
}

impl CollectedProfile {
    pub fn display_name(&self) -> &str {
        non_blank(self.full_name.as_deref())
            .or_else(|| non_blank(self.platform_username.as_deref()))
            .unwrap_or("-")
    }
}

/// Result of `GET /actions`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionList {
    #[serde(deserialize_with = "null_as_default")]
    pub actions: Vec<Action>,
    pub total_count: Option<u64>,
}

/// List filter owned by the list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub q: String,
    pub state: String,
}

impl Filter {
    pub fn new(q: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            state: state.into(),
        }
    }

    /// Query parameters for the non-blank fields, trimmed.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [("q", self.q.as_str()), ("state", self.state.as_str())]
            .into_iter()
            .filter_map(|(key, value)| non_blank(Some(value)).map(|v| (key, v)))
            .collect()
    }
}

/// Body of `POST /actions`. Optional fields serialize as `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAction {
    pub created_by: String,
    pub owner_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub state: String,
    pub target_platform: String,
    pub content_subject: Option<String>,
    pub content_message: Option<String>,
    #[serde(rename = "contentBlobURL")]
    pub content_blob_urls: Vec<String>,
    pub scheduled_date: Option<String>,
    pub execution_interval: i64,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(rename = "campaignID")]
    pub campaign_id: Option<String>,
}

/// Trimmed value, or `None` when blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
