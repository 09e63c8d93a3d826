//! Rendering capability used by the controllers.
//!
//! Controllers never touch the document directly. They hand view-models to a
//! [`RenderTarget`]; the browser implementation lives in `browser::view`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::controllers::reveal::{RevealBatch, RevealTracker};
use crate::models::{non_blank, Action, ActionTarget, CollectedProfile};

/// A document region with its own loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Actions,
    Targets,
    DetailTargets,
    DetailCollected,
}

/// A surface with an enter/exit transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Detail,
    Create,
    Toast,
}

fn dash(value: Option<&str>) -> String {
    non_blank(value).unwrap_or("-").to_string()
}

/// One row of the actions table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRow {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub platform: String,
    pub state: String,
    pub created_by: String,
}

impl From<&Action> for ActionRow {
    fn from(action: &Action) -> Self {
        Self {
            id: action.id.clone(),
            title: dash(action.title.as_deref()),
            kind: dash(action.kind.as_deref()),
            platform: dash(action.target_platform.as_deref()),
            state: dash(action.state.as_deref()),
            created_by: dash(action.created_by.as_deref()),
        }
    }
}

/// A target, rendered as a table row or as a detail card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRow {
    pub key: String,
    pub person: String,
    pub platform: String,
    pub link: Option<String>,
    pub status: String,
}

impl TargetRow {
    pub fn new(key: impl Into<String>, target: &ActionTarget) -> Self {
        Self {
            key: key.into(),
            person: dash(target.person_id.as_deref()),
            platform: dash(target.platform.as_deref()),
            link: non_blank(target.link.as_deref()).map(str::to_string),
            status: dash(target.status.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub key: String,
    pub name: String,
    pub meta: String,
    pub introduction: String,
    pub avatar_url: String,
    pub link: Option<String>,
}

impl ProfileCard {
    pub fn new(key: impl Into<String>, profile: &CollectedProfile) -> Self {
        let followers = non_blank(profile.follower_count.as_deref())
            .filter(|count| *count != "0")
            .unwrap_or_default();
        Self {
            key: key.into(),
            name: profile.display_name().to_string(),
            meta: format!(
                "{} • {}",
                non_blank(profile.category.as_deref()).unwrap_or_default(),
                followers
            ),
            introduction: profile.introduction.clone().unwrap_or_default(),
            avatar_url: profile.image_url.clone().unwrap_or_default(),
            link: non_blank(profile.link.as_deref()).map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Title block of the detail overlay. The default is the settled empty
/// header, distinct from `None` which means still loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailHeader {
    pub title: String,
    pub meta: String,
    pub fields: Vec<DetailField>,
}

impl DetailHeader {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            title: message.into(),
            meta: String::new(),
            fields: Vec::new(),
        }
    }
}

impl From<&Action> for DetailHeader {
    fn from(action: &Action) -> Self {
        let media = action.content_blob_urls.join(", ");
        let interval = action
            .execution_interval
            .filter(|&n| n > 0)
            .map(|n| n.to_string());
        let candidates: [(&'static str, Option<&str>); 9] = [
            ("Subject", action.content_subject.as_deref()),
            ("Message", action.content_message.as_deref()),
            ("Media", Some(media.as_str())),
            ("Scheduled", action.scheduled_date.as_deref()),
            ("Interval", interval.as_deref()),
            ("Start", action.start_date.as_deref()),
            ("End", action.end_date.as_deref()),
            ("Campaign", action.campaign_id.as_deref()),
            ("Owner", action.owner_id.as_deref()),
        ];
        let fields = candidates
            .into_iter()
            .filter_map(|(label, value)| {
                non_blank(value).map(|v| DetailField {
                    label,
                    value: v.to_string(),
                })
            })
            .collect();
        Self {
            title: action.title.clone().unwrap_or_default(),
            meta: action.meta_line(),
            fields,
        }
    }
}

pub type SharedReveal = Rc<RefCell<RevealTracker>>;

/// Writes view-models into the document.
///
/// Each region is single-writer, last-write-wins: a render replaces the
/// region's previous content wholesale.
pub trait RenderTarget {
    /// Replace the region's placeholder with `rows` skeleton rows and show it.
    fn show_loading(&self, region: Region, rows: usize);
    /// Hide the skeleton; rendered content underneath stays.
    fn hide_loading(&self, region: Region);
    fn clear(&self, region: Region);
    fn render_actions(&self, rows: Vec<ActionRow>, total: Option<u64>);
    fn render_targets(&self, region: Region, rows: Vec<TargetRow>);
    fn render_collected(&self, cards: Vec<ProfileCard>);
    /// Replace the region's content with a single failure row.
    fn render_failure(&self, region: Region, message: String);
    fn render_detail_header(&self, header: Option<DetailHeader>);
    fn set_visible(&self, surface: Surface, visible: bool);
    fn set_entered(&self, surface: Surface, entered: bool);
    /// Mark a surface's primary action as in flight (e.g. disable submit).
    fn set_busy(&self, surface: Surface, busy: bool);
    fn set_toast(&self, message: String);
    /// Start watching the batch's elements; report intersections to `tracker`.
    fn observe_reveal(&self, batch: RevealBatch, tracker: SharedReveal);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_row_uses_dash_for_blanks() {
        let action = Action {
            id: "a1".into(),
            title: Some("Launch".into()),
            ..Action::default()
        };
        let row = ActionRow::from(&action);
        assert_eq!(row.title, "Launch");
        assert_eq!(row.kind, "-");
        assert_eq!(row.platform, "-");
        assert_eq!(row.created_by, "-");
    }

    #[test]
    fn test_target_row_without_link() {
        let target = ActionTarget {
            person_id: Some("p1".into()),
            platform: Some("X".into()),
            link: Some(" ".into()),
            status: Some("DONE".into()),
            ..ActionTarget::default()
        };
        let row = TargetRow::new("k", &target);
        assert_eq!(row.link, None);
        assert_eq!(row.person, "p1");
    }

    #[test]
    fn test_detail_header_lists_only_filled_fields() {
        let action = Action {
            title: Some("Launch".into()),
            kind: Some("post".into()),
            content_blob_urls: vec!["u1".into(), "u2".into()],
            execution_interval: Some(0),
            campaign_id: Some("c9".into()),
            ..Action::default()
        };
        let header = DetailHeader::from(&action);
        assert_eq!(header.meta, "post");
        let labels: Vec<_> = header.fields.iter().map(|f| f.label).collect();
        assert_eq!(labels, vec!["Media", "Campaign"]);
        assert_eq!(header.fields[0].value, "u1, u2");
    }

    #[test]
    fn test_profile_card_hides_zero_followers() {
        let profile = CollectedProfile {
            full_name: Some("Bob".into()),
            category: Some("Food".into()),
            follower_count: Some("0".into()),
            image_url: Some("https://img/bob.png".into()),
            ..CollectedProfile::default()
        };
        let card = ProfileCard::new("k", &profile);
        assert_eq!(card.meta, "Food • ");
        assert_eq!(card.avatar_url, "https://img/bob.png");
    }

    #[test]
    fn test_profile_card_shows_follower_text() {
        let profile = CollectedProfile {
            category: Some("Food".into()),
            follower_count: Some("10.5k".into()),
            ..CollectedProfile::default()
        };
        assert_eq!(ProfileCard::new("k", &profile).meta, "Food • 10.5k");
    }
}
