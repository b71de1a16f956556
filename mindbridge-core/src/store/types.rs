//! Stored entities and their insert payloads

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::scoring::{self, AssessmentType, ScoringError, Severity};

/// Inclusive bounds shared by the 1-10 self-report scales
pub const SCALE_MIN: u8 = 1;
pub const SCALE_MAX: u8 = 10;

/// A scored questionnaire submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub session_id: String,
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    /// Question id to answer label
    pub responses: HashMap<String, String>,
    pub score: u32,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for an assessment.
///
/// Only constructible through [`NewAssessment::score`], so the stored score
/// and severity always come from the scoring tables.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssessment {
    pub(crate) session_id: String,
    pub(crate) kind: AssessmentType,
    pub(crate) responses: HashMap<String, String>,
    pub(crate) score: u32,
    pub(crate) severity: Severity,
}

impl NewAssessment {
    /// Score `responses` for the questionnaire named `type_name`
    pub fn score(
        session_id: impl Into<String>,
        type_name: &str,
        responses: HashMap<String, String>,
    ) -> Result<Self, ScoringError> {
        let kind: AssessmentType = type_name.parse()?;
        let result = scoring::score(kind, &responses);
        Ok(Self {
            session_id: session_id.into(),
            kind,
            responses,
            score: result.score,
            severity: result.severity,
        })
    }

    pub fn kind(&self) -> AssessmentType {
        self.kind
    }

    pub fn score_value(&self) -> u32 {
        self.score
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

/// A daily mood journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub session_id: String,
    /// 1-10
    pub mood: u8,
    pub notes: Option<String>,
    pub sleep_hours: Option<u32>,
    /// 1-10
    pub stress_level: Option<u8>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a mood entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMoodEntry {
    pub session_id: String,
    pub mood: u8,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub sleep_hours: Option<u32>,
    #[serde(default)]
    pub stress_level: Option<u8>,
}

impl NewMoodEntry {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_scale("mood", self.mood)?;
        if let Some(level) = self.stress_level {
            check_scale("stressLevel", level)?;
        }
        Ok(())
    }
}

fn check_scale(field: &'static str, value: u8) -> Result<(), ValidationError> {
    if (SCALE_MIN..=SCALE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("must be between {SCALE_MIN} and {SCALE_MAX}, got {value}"),
        ))
    }
}

/// A peer forum thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: String,
    pub session_id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub is_moderated: bool,
    pub likes_count: u32,
    /// Kept equal to the number of replies referencing this post
    pub replies_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a forum post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewForumPost {
    pub session_id: String,
    pub title: String,
    pub content: String,
    pub category: String,
}

/// A reply within a forum thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumReply {
    pub id: String,
    pub post_id: String,
    pub session_id: String,
    pub content: String,
    pub likes_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a forum reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewForumReply {
    pub post_id: String,
    pub session_id: String,
    pub content: String,
}

/// Library article, video or exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Minutes
    pub read_time: Option<u32>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Campus counseling or wellness service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusService {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub availability: Option<String>,
    pub contact: Option<String>,
    pub location: Option<String>,
    pub booking_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mood(mood: u8, stress_level: Option<u8>) -> NewMoodEntry {
        NewMoodEntry {
            session_id: "s".into(),
            mood,
            notes: None,
            sleep_hours: None,
            stress_level,
        }
    }

    #[test]
    fn mood_bounds() {
        assert!(mood(1, None).validate().is_ok());
        assert!(mood(10, Some(10)).validate().is_ok());
        assert_eq!(mood(0, None).validate().unwrap_err().field, "mood");
        assert_eq!(mood(11, None).validate().unwrap_err().field, "mood");
        assert_eq!(mood(5, Some(0)).validate().unwrap_err().field, "stressLevel");
    }

    #[test]
    fn mood_payload_defaults_optional_fields() {
        let entry: NewMoodEntry =
            serde_json::from_str(r#"{"sessionId":"abc","mood":7}"#).unwrap();
        assert_eq!(entry.notes, None);
        assert_eq!(entry.sleep_hours, None);
        assert_eq!(entry.stress_level, None);
    }

    #[test]
    fn new_assessment_scores_on_construction() {
        let responses = HashMap::from([
            ("1".to_string(), "Very often".to_string()),
            ("2".to_string(), "Fairly often".to_string()),
        ]);
        let new = NewAssessment::score("s", "stress", responses).unwrap();
        assert_eq!(new.kind(), AssessmentType::Stress);
        assert_eq!(new.score_value(), 7);
        assert_eq!(new.severity(), Severity::Moderate);
    }

    #[test]
    fn new_assessment_rejects_unknown_type() {
        assert!(NewAssessment::score("s", "grief", HashMap::new()).is_err());
    }

    #[test]
    fn resource_serializes_type_and_camel_case() {
        let resource = Resource {
            id: "1".into(),
            title: "t".into(),
            content: "c".into(),
            category: "general".into(),
            kind: "article".into(),
            read_time: Some(5),
            icon: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["type"], "article");
        assert_eq!(json["readTime"], 5);
        assert!(json["icon"].is_null());
    }
}
