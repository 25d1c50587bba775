//! Common types and data structures

use crate::api::ApiError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A reel idea as exchanged with the backend.
///
/// Generated ideas carry no `id`; the backend assigns `id` and `created_at`
/// when an idea is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    #[serde(
        default,
        deserialize_with = "deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub idea: String,
    #[serde(default)]
    pub hooks: Vec<String>,
    #[serde(default)]
    pub caption_short: String,
    #[serde(default)]
    pub caption_long: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Accepts string or integer ids, normalizing to a string. Empty ids count as absent.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?
        .map(|raw| match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        })
        .filter(|id| !id.is_empty()))
}

impl Idea {
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Build the save payload: the idea's current fields plus the niche it belongs to.
    pub fn to_save_request(&self, niche: &str) -> SaveIdeaRequest {
        SaveIdeaRequest {
            idea: self.idea.clone(),
            hooks: self.hooks.clone(),
            caption_short: self.caption_short.clone(),
            caption_long: self.caption_long.clone(),
            hashtags: self.hashtags.clone(),
            niche: niche.to_string(),
        }
    }

    /// Parse `created_at` as RFC 3339, falling back to a naive timestamp taken as UTC.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// Body of `POST /api/generate-ideas`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub niche: &'a str,
}

/// Body of `POST /api/save-idea`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveIdeaRequest {
    pub idea: String,
    pub hooks: Vec<String>,
    pub caption_short: String,
    pub caption_long: String,
    pub hashtags: Vec<String>,
    pub niche: String,
}

/// Successful save: either the persisted idea or a plain acknowledgement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SaveOutcome {
    Persisted(Idea),
    Acknowledged { message: String },
}

/// Error body returned by the backend on failed requests
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The `detail` message, only when it is a non-empty string.
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// Per-view request lifecycle: idle -> loading -> {success, error}
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl RequestPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestPhase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestPhase::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Navigable screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Root,
    Generator,
    SavedIdeas,
}

impl Route {
    /// The root route always lands on the generator.
    pub fn resolve(self) -> Route {
        match self {
            Route::Root => Route::Generator,
            other => other,
        }
    }
}

/// Backend health as last probed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HealthStatus {
    #[default]
    Unknown,
    Checking,
    Online,
    Offline(String),
}

/// Result of a background request, delivered to the UI thread
#[derive(Debug)]
pub enum ApiEvent {
    Generated {
        niche: String,
        result: Result<Vec<Idea>, ApiError>,
    },
    Saved {
        batch: u64,
        index: usize,
        result: Result<SaveOutcome, ApiError>,
    },
    SavedListLoaded(Result<Vec<Idea>, ApiError>),
    Deleted {
        id: String,
        result: Result<(), ApiError>,
    },
    Health(Result<(), ApiError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notice shown in the bottom-right corner
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub start: std::time::Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_generated_idea_has_no_id() {
        let json = r##"{
            "idea": "5 baking tips you need to know",
            "hooks": ["Struggling with baking?"],
            "caption_short": "Master baking!",
            "caption_long": "Here are some amazing baking tips.",
            "hashtags": ["#baking", "contentcreation"]
        }"##;
        let idea: Idea = serde_json::from_str(json).unwrap();
        assert!(!idea.is_persisted());
        assert_eq!(idea.hooks.len(), 1);
        assert_eq!(idea.niche, None);
    }

    #[test]
    fn test_numeric_and_empty_ids() {
        let idea: Idea = serde_json::from_str(r#"{"id": 42, "idea": "x"}"#).unwrap();
        assert_eq!(idea.id.as_deref(), Some("42"));

        let idea: Idea = serde_json::from_str(r#"{"id": "", "idea": "x"}"#).unwrap();
        assert_eq!(idea.id, None);

        let idea: Idea = serde_json::from_str(r#"{"id": null, "idea": "x"}"#).unwrap();
        assert_eq!(idea.id, None);
    }

    #[test]
    fn test_save_request_copies_fields_and_niche() {
        let idea = Idea {
            id: None,
            idea: "idea".into(),
            hooks: vec!["h1".into(), "h2".into()],
            caption_short: "short".into(),
            caption_long: "long".into(),
            hashtags: vec!["a".into()],
            niche: Some("ignored".into()),
            created_at: None,
        };
        let req = idea.to_save_request("fitness");
        assert_eq!(req.idea, "idea");
        assert_eq!(req.hooks, vec!["h1", "h2"]);
        assert_eq!(req.caption_short, "short");
        assert_eq!(req.caption_long, "long");
        assert_eq!(req.hashtags, vec!["a"]);
        assert_eq!(req.niche, "fitness");
    }

    #[test]
    fn test_created_at_parsing() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();

        let mut idea: Idea = serde_json::from_str(r#"{"idea": "x"}"#).unwrap();
        assert_eq!(idea.created_at_utc(), None);

        idea.created_at = Some("2024-05-01T12:30:00+00:00".into());
        assert_eq!(idea.created_at_utc(), Some(expected));

        idea.created_at = Some("2024-05-01T12:30:00.000000".into());
        assert_eq!(idea.created_at_utc(), Some(expected));

        idea.created_at = Some("not a date".into());
        assert_eq!(idea.created_at_utc(), None);
    }

    #[test]
    fn test_save_outcome_shapes() {
        let ack: SaveOutcome =
            serde_json::from_str(r#"{"message": "Idea saved successfully"}"#).unwrap();
        assert!(matches!(ack, SaveOutcome::Acknowledged { .. }));

        let persisted: SaveOutcome =
            serde_json::from_str(r#"{"id": "abc", "idea": "x", "niche": "cats"}"#).unwrap();
        match persisted {
            SaveOutcome::Persisted(idea) => assert_eq!(idea.id.as_deref(), Some("abc")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_error_body_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Idea not found"}"#).unwrap();
        assert_eq!(body.message(), Some("Idea not found"));

        let body: ErrorBody = serde_json::from_str(r#"{"detail": [{"loc": ["path"]}]}"#).unwrap();
        assert_eq!(body.message(), None);

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);
    }

    #[test]
    fn test_root_resolves_to_generator() {
        assert_eq!(Route::default().resolve(), Route::Generator);
        assert_eq!(Route::SavedIdeas.resolve(), Route::SavedIdeas);
    }
}
