//! Entity store
//!
//! One create operation and a handful of queries per entity. Listings filter
//! on an equality predicate, sort (newest first for journals and posts,
//! oldest first for replies, alphabetical for reference data) and optionally
//! cap the result.
//!
//! [`MemoryStore`] keeps everything in process memory; the [`Store`] trait is
//! the seam for a persistent backend.

mod error;
mod memory;
mod query;
mod seed;
mod types;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use query::{
    Created, DEFAULT_FORUM_LIMIT, DEFAULT_MOOD_LIMIT, SortOrder, active_filter, alphabetical,
    by_creation,
};
pub use types::{
    Assessment, CampusService, ForumPost, ForumReply, MoodEntry, NewAssessment, NewForumPost,
    NewForumReply, NewMoodEntry, Resource, SCALE_MAX, SCALE_MIN,
};

/// Storage operations used by the API layer
pub trait Store: Send + Sync {
    fn create_assessment(&self, new: NewAssessment) -> Result<Assessment, StoreError>;
    /// Newest first
    fn assessments_by_session(&self, session_id: &str) -> Result<Vec<Assessment>, StoreError>;

    fn create_mood_entry(&self, new: NewMoodEntry) -> Result<MoodEntry, StoreError>;
    /// Newest first, capped at `limit` or [`DEFAULT_MOOD_LIMIT`]
    fn mood_entries_by_session(
        &self,
        session_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<MoodEntry>, StoreError>;

    fn create_forum_post(&self, new: NewForumPost) -> Result<ForumPost, StoreError>;
    /// Newest first, capped at `limit` or [`DEFAULT_FORUM_LIMIT`]
    fn forum_posts(
        &self,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<ForumPost>, StoreError>;
    fn forum_post(&self, id: &str) -> Result<Option<ForumPost>, StoreError>;
    /// Returns false when no post has this id
    fn like_forum_post(&self, id: &str) -> Result<bool, StoreError>;

    /// Stores the reply and bumps the parent's `replies_count` in one step.
    /// A missing parent does not prevent the reply from being stored.
    fn create_forum_reply(&self, new: NewForumReply) -> Result<ForumReply, StoreError>;
    /// Oldest first
    fn forum_replies(&self, post_id: &str) -> Result<Vec<ForumReply>, StoreError>;
    /// Returns false when no reply has this id
    fn like_forum_reply(&self, id: &str) -> Result<bool, StoreError>;

    /// Alphabetical by title
    fn resources(&self, category: Option<&str>) -> Result<Vec<Resource>, StoreError>;
    fn resource(&self, id: &str) -> Result<Option<Resource>, StoreError>;

    /// Alphabetical by name
    fn campus_services(&self, kind: Option<&str>) -> Result<Vec<CampusService>, StoreError>;
    fn campus_service(&self, id: &str) -> Result<Option<CampusService>, StoreError>;
}
