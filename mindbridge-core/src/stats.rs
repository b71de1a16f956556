//! Per-session summary figures for the dashboard

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::scoring::{AssessmentType, Severity};
use crate::store::{Assessment, MoodEntry};

/// Entries averaged when no window is requested
pub const DEFAULT_SUMMARY_WINDOW: usize = 7;
/// Largest accepted averaging window
pub const MAX_SUMMARY_WINDOW: usize = 30;

/// Hours of sleep at or above which a night counts as good
const GOOD_SLEEP_HOURS: u32 = 7;
/// Hours of sleep at or above which a night counts as fair
const FAIR_SLEEP_HOURS: u32 = 5;

/// Nights per sleep band within the window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepQuality {
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

/// Assessment history for one questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentTypeSummary {
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    pub count: usize,
    pub latest_score: u32,
    pub latest_severity: Severity,
}

/// Figures derived from a session's journal and assessments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: String,
    pub current_mood: Option<u8>,
    pub latest_sleep_hours: Option<u32>,
    pub entries_tracked: usize,
    pub assessment_count: usize,
    /// Number of newest entries the averages cover
    pub window: usize,
    pub average_mood: Option<f64>,
    pub average_sleep_hours: Option<f64>,
    pub average_stress_level: Option<f64>,
    pub sleep_quality: SleepQuality,
    pub assessments: Vec<AssessmentTypeSummary>,
}

/// Check a requested averaging window
pub fn validate_window(window: usize) -> Result<usize, ValidationError> {
    if (1..=MAX_SUMMARY_WINDOW).contains(&window) {
        Ok(window)
    } else {
        Err(ValidationError::new(
            "window",
            format!("must be between 1 and {MAX_SUMMARY_WINDOW}, got {window}"),
        ))
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean(values: impl Iterator<Item = u32>, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let total: u64 = values.map(u64::from).sum();
    Some(round1(total as f64 / count as f64))
}

impl SessionSummary {
    /// Summarize a session.
    ///
    /// Both slices must be newest first, as the store lists them. Missing
    /// sleep hours and stress levels count as zero in the averages.
    pub fn compute(
        session_id: impl Into<String>,
        entries: &[MoodEntry],
        assessments: &[Assessment],
        window: usize,
    ) -> Self {
        let recent = &entries[..window.min(entries.len())];
        let n = recent.len();

        let mut sleep_quality = SleepQuality::default();
        for entry in recent {
            match entry.sleep_hours.unwrap_or(0) {
                h if h >= GOOD_SLEEP_HOURS => sleep_quality.good += 1,
                h if h >= FAIR_SLEEP_HOURS => sleep_quality.fair += 1,
                _ => sleep_quality.poor += 1,
            }
        }

        let by_type = AssessmentType::ALL
            .iter()
            .filter_map(|&kind| {
                let mut of_kind = assessments.iter().filter(|a| a.kind == kind);
                let latest = of_kind.next()?;
                Some(AssessmentTypeSummary {
                    kind,
                    count: 1 + of_kind.count(),
                    latest_score: latest.score,
                    latest_severity: latest.severity,
                })
            })
            .collect();

        let newest = entries.first();

        Self {
            session_id: session_id.into(),
            current_mood: newest.map(|e| e.mood),
            latest_sleep_hours: newest.and_then(|e| e.sleep_hours),
            entries_tracked: entries.len(),
            assessment_count: assessments.len(),
            window: n,
            average_mood: mean(recent.iter().map(|e| u32::from(e.mood)), n),
            average_sleep_hours: mean(recent.iter().map(|e| e.sleep_hours.unwrap_or(0)), n),
            average_stress_level: mean(
                recent.iter().map(|e| u32::from(e.stress_level.unwrap_or(0))),
                n,
            ),
            sleep_quality,
            assessments: by_type,
        }
    }
}
