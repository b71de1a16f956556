//! mindbridge-core: Core library for the mindbridge student wellbeing service
//!
//! This crate holds everything that does not speak HTTP:
//!
//! - **Scoring** - [`scoring::calculate_assessment_score`] turns questionnaire
//!   answers into a score and [`Severity`] band
//! - **Questionnaires** - [`questionnaire::questionnaires`] lists the four
//!   self-assessments and their answer options
//! - **Anonymous sessions** - [`AnonymousSession`] mints the opaque session
//!   key clients attach to their data
//! - **Entity store** - the [`Store`] trait and the seeded [`MemoryStore`]
//! - **Summaries** - [`SessionSummary`] derives dashboard figures from a
//!   session's journal and assessments
//!
//! # Quick Start
//!
//! ```
//! use std::collections::HashMap;
//! use mindbridge_core::{MemoryStore, NewAssessment, Severity, Store};
//!
//! let store = MemoryStore::new();
//! let responses: HashMap<String, String> = (1..=7)
//!     .map(|q| (q.to_string(), "Nearly every day".to_string()))
//!     .collect();
//!
//! let new = NewAssessment::score("session_1", "anxiety", responses).unwrap();
//! let stored = store.create_assessment(new).unwrap();
//! assert_eq!(stored.score, 21);
//! assert_eq!(stored.severity, Severity::Severe);
//! ```

pub mod error;
pub mod questionnaire;
pub mod scoring;
pub mod session;
pub mod stats;
pub mod store;

pub use error::ValidationError;
pub use questionnaire::{Question, Questionnaire};
pub use scoring::{AssessmentType, ScoringError, ScoringResult, Severity};
pub use session::AnonymousSession;
pub use stats::SessionSummary;
pub use store::{
    Assessment, CampusService, ForumPost, ForumReply, MemoryStore, MoodEntry, NewAssessment,
    NewForumPost, NewForumReply, NewMoodEntry, Resource, Store, StoreError,
};
