//! Assessment scoring
//!
//! Maps the categorical answers of a questionnaire to a numeric score and a
//! severity band. Scoring is pure: the same type and responses always give
//! the same result, and nothing is recorded.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while scoring an assessment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Unknown assessment type: {0}")]
    UnknownType(String),
}

/// The four supported questionnaires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentType {
    Anxiety,
    Depression,
    Stress,
    Sleep,
}

impl AssessmentType {
    /// All types in catalog order
    pub const ALL: [AssessmentType; 4] = [
        AssessmentType::Anxiety,
        AssessmentType::Depression,
        AssessmentType::Stress,
        AssessmentType::Sleep,
    ];

    /// Wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anxiety => "anxiety",
            Self::Depression => "depression",
            Self::Stress => "stress",
            Self::Sleep => "sleep",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anxiety" => Ok(Self::Anxiety),
            "depression" => Ok(Self::Depression),
            "stress" => Ok(Self::Stress),
            "sleep" => Ok(Self::Sleep),
            other => Err(ScoringError::UnknownType(other.to_string())),
        }
    }
}

/// Severity band derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    #[serde(rename = "Moderately Severe")]
    ModeratelySevere,
    Severe,
    Low,
    High,
    Good,
    Fair,
    Poor,
}

impl Severity {
    /// Human-readable label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::ModeratelySevere => "Moderately Severe",
            Self::Severe => "Severe",
            Self::Low => "Low",
            Self::High => "High",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of scoring one set of responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub score: u32,
    pub severity: Severity,
}

const FREQUENCY_KEY: &[(&str, u32)] = &[
    ("Not at all", 0),
    ("Several days", 1),
    ("More than half the days", 2),
    ("Nearly every day", 3),
];

const STRESS_KEY: &[(&str, u32)] = &[
    ("Never", 0),
    ("Almost never", 1),
    ("Sometimes", 2),
    ("Fairly often", 3),
    ("Very often", 4),
];

// One table shared by all four sleep questions (quality, latency, duration,
// night waking). A label resolves to the same value whichever question it
// answered.
const SLEEP_KEY: &[(&str, u32)] = &[
    ("Very good", 0),
    ("Fairly good", 1),
    ("Fairly bad", 2),
    ("Very bad", 3),
    ("≤15 minutes", 0),
    ("16-30 minutes", 1),
    ("31-60 minutes", 2),
    (">60 minutes", 3),
    (">7 hours", 0),
    ("6-7 hours", 1),
    ("5-6 hours", 2),
    ("<5 hours", 3),
    ("Not during the past month", 0),
    ("Less than once a week", 1),
    ("Once or twice a week", 2),
    ("Three or more times a week", 3),
];

/// Label to point-value table for a questionnaire
pub fn scoring_key(kind: AssessmentType) -> &'static [(&'static str, u32)] {
    match kind {
        AssessmentType::Anxiety | AssessmentType::Depression => FREQUENCY_KEY,
        AssessmentType::Stress => STRESS_KEY,
        AssessmentType::Sleep => SLEEP_KEY,
    }
}

/// Point value of a single answer label, `None` when the label is not in the table
pub fn answer_points(kind: AssessmentType, label: &str) -> Option<u32> {
    scoring_key(kind)
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map(|(_, points)| *points)
}

/// Map a score to its severity band
pub fn severity_for(kind: AssessmentType, score: u32) -> Severity {
    match kind {
        AssessmentType::Anxiety => match score {
            0..=4 => Severity::Minimal,
            5..=9 => Severity::Mild,
            10..=14 => Severity::Moderate,
            _ => Severity::Severe,
        },
        // PHQ-9 thresholds
        AssessmentType::Depression => match score {
            0..=4 => Severity::Minimal,
            5..=9 => Severity::Mild,
            10..=14 => Severity::Moderate,
            15..=19 => Severity::ModeratelySevere,
            _ => Severity::Severe,
        },
        AssessmentType::Stress => match score {
            0..=5 => Severity::Low,
            6..=11 => Severity::Moderate,
            _ => Severity::High,
        },
        AssessmentType::Sleep => match score {
            0..=5 => Severity::Good,
            6..=10 => Severity::Fair,
            _ => Severity::Poor,
        },
    }
}

/// Score typed responses.
///
/// Each answer label adds its table value; labels missing from the table add
/// nothing. Question identifiers are not inspected.
pub fn score(kind: AssessmentType, responses: &HashMap<String, String>) -> ScoringResult {
    let total = responses
        .values()
        .filter_map(|answer| answer_points(kind, answer))
        .sum();

    ScoringResult {
        score: total,
        severity: severity_for(kind, total),
    }
}

/// Score responses for a questionnaire named by its wire name.
///
/// Fails with [`ScoringError::UnknownType`] before looking at any response
/// when the name is not one of the four questionnaires.
pub fn calculate_assessment_score(
    type_name: &str,
    responses: &HashMap<String, String>,
) -> Result<ScoringResult, ScoringError> {
    let kind: AssessmentType = type_name.parse()?;
    Ok(score(kind, responses))
}
