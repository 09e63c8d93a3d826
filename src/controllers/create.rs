//! New-action form: validation, payload shaping and submission.

use crate::error::{ApiError, FormError};
use crate::models::{non_blank, NewAction};

/// Raw field values as typed into the create form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateForm {
    pub title: String,
    pub kind: String,
    pub state: String,
    pub target_platform: String,
    pub created_by: String,
    pub owner_id: String,
    pub content_subject: String,
    pub content_message: String,
    pub media: String,
    pub scheduled_date: String,
    pub execution_interval: String,
    pub start_date: String,
    pub end_date: String,
    pub campaign_id: String,
}

impl Default for CreateForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: "PUBLISH_CONTENT".to_string(),
            state: "PENDING".to_string(),
            target_platform: "INSTAGRAM".to_string(),
            created_by: String::new(),
            owner_id: String::new(),
            content_subject: String::new(),
            content_message: String::new(),
            media: String::new(),
            scheduled_date: String::new(),
            execution_interval: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            campaign_id: String::new(),
        }
    }
}

impl CreateForm {
    /// Check required fields and shape the request body.
    pub fn validate(&self) -> Result<NewAction, FormError> {
        let title = self.title.trim();
        let created_by = self.created_by.trim();
        let owner_id = self.owner_id.trim();

        let missing: Vec<&'static str> = [
            ("title", title),
            ("createdBy", created_by),
            ("ownerId", owner_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingRequired { fields: missing });
        }

        Ok(NewAction {
            created_by: created_by.to_string(),
            owner_id: owner_id.to_string(),
            title: title.to_string(),
            kind: self.kind.clone(),
            state: self.state.clone(),
            target_platform: self.target_platform.clone(),
            content_subject: optional(&self.content_subject),
            content_message: optional(&self.content_message),
            content_blob_urls: parse_media(&self.media),
            scheduled_date: optional(&self.scheduled_date),
            execution_interval: parse_interval(&self.execution_interval),
            start_date: optional(&self.start_date),
            end_date: optional(&self.end_date),
            campaign_id: optional(&self.campaign_id),
        })
    }
}

/// Comma-separated URLs, trimmed, blanks dropped, order kept.
pub fn parse_media(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Leading integer of the field, 0 when blank or not a number.
pub fn parse_interval(raw: &str) -> i64 {
    let raw = raw.trim();
    let sign_len = usize::from(raw.starts_with(['-', '+']));
    let digits = raw[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(raw.len(), |end| sign_len + end);
    raw[..digits].parse().unwrap_or(0)
}

fn optional(raw: &str) -> Option<String> {
    non_blank(Some(raw)).map(str::to_string)
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(FormError),
    /// An earlier submit has not completed; nothing was sent.
    InFlight,
    Created,
    Failed(ApiError),
}

pub fn failure_message(err: &ApiError) -> String {
    format!("Failed to create action: {}", err)
}
