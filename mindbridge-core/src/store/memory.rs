//! In-memory store

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::Store;
use super::error::StoreError;
use super::query::{
    DEFAULT_FORUM_LIMIT, DEFAULT_MOOD_LIMIT, SortOrder, active_filter, alphabetical, by_creation,
};
use super::seed;
use super::types::{
    Assessment, CampusService, ForumPost, ForumReply, MoodEntry, NewAssessment, NewForumPost,
    NewForumReply, NewMoodEntry, Resource,
};

trait Keyed {
    fn key(&self) -> &str;
}

macro_rules! impl_keyed {
    ($($ty:ty),*) => {
        $(impl Keyed for $ty {
            fn key(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_keyed!(Assessment, MoodEntry, ForumPost, ForumReply, Resource, CampusService);

/// Rows in insertion order plus an id index
struct Table<T> {
    rows: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Keyed> Table<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn from_rows(rows: Vec<T>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.insert(row);
        }
        table
    }

    fn insert(&mut self, row: T) {
        self.index.insert(row.key().to_string(), self.rows.len());
        self.rows.push(row);
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&i| &self.rows[i])
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.index.get(id).map(|&i| &mut self.rows[i])
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }
}

struct MemoryState {
    assessments: Table<Assessment>,
    mood_entries: Table<MoodEntry>,
    forum_posts: Table<ForumPost>,
    forum_replies: Table<ForumReply>,
    resources: Table<Resource>,
    campus_services: Table<CampusService>,
}

/// Process-lifetime store, seeded with the reference resources and services
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    /// Create a store holding only the seed data
    pub fn new() -> Self {
        let state = MemoryState {
            assessments: Table::new(),
            mood_entries: Table::new(),
            forum_posts: Table::new(),
            forum_replies: Table::new(),
            resources: Table::from_rows(seed::resources(Utc::now())),
            campus_services: Table::from_rows(seed::campus_services()),
        };
        Self {
            state: RwLock::new(state),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryState>, StoreError> {
        self.state
            .read()
            .map_err(|_| StoreError::Unavailable("state lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryState>, StoreError> {
        self.state
            .write()
            .map_err(|_| StoreError::Unavailable("state lock poisoned".into()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl Store for MemoryStore {
    fn create_assessment(&self, new: NewAssessment) -> Result<Assessment, StoreError> {
        let assessment = Assessment {
            id: new_id(),
            session_id: new.session_id,
            kind: new.kind,
            responses: new.responses,
            score: new.score,
            severity: new.severity,
            created_at: Utc::now(),
        };

        self.write()?.assessments.insert(assessment.clone());
        debug!(
            id = %assessment.id,
            kind = %assessment.kind,
            score = assessment.score,
            "Stored assessment"
        );
        Ok(assessment)
    }

    fn assessments_by_session(&self, session_id: &str) -> Result<Vec<Assessment>, StoreError> {
        let state = self.read()?;
        let rows = state
            .assessments
            .iter()
            .filter(|a| a.session_id == session_id);
        Ok(by_creation(rows, SortOrder::Desc, None))
    }

    fn create_mood_entry(&self, new: NewMoodEntry) -> Result<MoodEntry, StoreError> {
        new.validate()?;

        let entry = MoodEntry {
            id: new_id(),
            session_id: new.session_id,
            mood: new.mood,
            notes: new.notes,
            sleep_hours: new.sleep_hours,
            stress_level: new.stress_level,
            created_at: Utc::now(),
        };

        self.write()?.mood_entries.insert(entry.clone());
        debug!(id = %entry.id, mood = entry.mood, "Stored mood entry");
        Ok(entry)
    }

    fn mood_entries_by_session(
        &self,
        session_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<MoodEntry>, StoreError> {
        let state = self.read()?;
        let rows = state
            .mood_entries
            .iter()
            .filter(|e| e.session_id == session_id);
        Ok(by_creation(
            rows,
            SortOrder::Desc,
            Some(limit.unwrap_or(DEFAULT_MOOD_LIMIT)),
        ))
    }

    fn create_forum_post(&self, new: NewForumPost) -> Result<ForumPost, StoreError> {
        let post = ForumPost {
            id: new_id(),
            session_id: new.session_id,
            title: new.title,
            content: new.content,
            category: new.category,
            is_moderated: false,
            likes_count: 0,
            replies_count: 0,
            created_at: Utc::now(),
        };

        self.write()?.forum_posts.insert(post.clone());
        debug!(id = %post.id, category = %post.category, "Stored forum post");
        Ok(post)
    }

    fn forum_posts(
        &self,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<ForumPost>, StoreError> {
        let category = active_filter(category);
        let state = self.read()?;
        let rows = state
            .forum_posts
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c));
        Ok(by_creation(
            rows,
            SortOrder::Desc,
            Some(limit.unwrap_or(DEFAULT_FORUM_LIMIT)),
        ))
    }

    fn forum_post(&self, id: &str) -> Result<Option<ForumPost>, StoreError> {
        Ok(self.read()?.forum_posts.get(id).cloned())
    }

    fn like_forum_post(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.write()?;
        match state.forum_posts.get_mut(id) {
            Some(post) => {
                post.likes_count = post.likes_count.saturating_add(1);
                debug!(id, likes = post.likes_count, "Liked forum post");
                Ok(true)
            }
            None => {
                debug!(id, "Like ignored, no such forum post");
                Ok(false)
            }
        }
    }

    fn create_forum_reply(&self, new: NewForumReply) -> Result<ForumReply, StoreError> {
        let reply = ForumReply {
            id: new_id(),
            post_id: new.post_id,
            session_id: new.session_id,
            content: new.content,
            likes_count: 0,
            created_at: Utc::now(),
        };

        // Insert and counter bump share one write guard
        let mut state = self.write()?;
        state.forum_replies.insert(reply.clone());
        match state.forum_posts.get_mut(&reply.post_id) {
            Some(post) => {
                post.replies_count = post.replies_count.saturating_add(1);
                debug!(id = %reply.id, post_id = %reply.post_id, replies = post.replies_count, "Stored forum reply");
            }
            None => {
                debug!(id = %reply.id, post_id = %reply.post_id, "Stored forum reply for unknown post");
            }
        }
        Ok(reply)
    }

    fn forum_replies(&self, post_id: &str) -> Result<Vec<ForumReply>, StoreError> {
        let state = self.read()?;
        let rows = state
            .forum_replies
            .iter()
            .filter(|r| r.post_id == post_id);
        Ok(by_creation(rows, SortOrder::Asc, None))
    }

    fn like_forum_reply(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.write()?;
        match state.forum_replies.get_mut(id) {
            Some(reply) => {
                reply.likes_count = reply.likes_count.saturating_add(1);
                debug!(id, likes = reply.likes_count, "Liked forum reply");
                Ok(true)
            }
            None => {
                debug!(id, "Like ignored, no such forum reply");
                Ok(false)
            }
        }
    }

    fn resources(&self, category: Option<&str>) -> Result<Vec<Resource>, StoreError> {
        let category = active_filter(category);
        let state = self.read()?;
        let mut rows: Vec<Resource> = state
            .resources
            .iter()
            .filter(|r| category.is_none_or(|c| r.category == c))
            .cloned()
            .collect();
        rows.sort_by(|a, b| alphabetical(&a.title, &b.title));
        Ok(rows)
    }

    fn resource(&self, id: &str) -> Result<Option<Resource>, StoreError> {
        Ok(self.read()?.resources.get(id).cloned())
    }

    fn campus_services(&self, kind: Option<&str>) -> Result<Vec<CampusService>, StoreError> {
        let kind = active_filter(kind);
        let state = self.read()?;
        let mut rows: Vec<CampusService> = state
            .campus_services
            .iter()
            .filter(|s| kind.is_none_or(|k| s.kind == k))
            .cloned()
            .collect();
        rows.sort_by(|a, b| alphabetical(&a.name, &b.name));
        Ok(rows)
    }

    fn campus_service(&self, id: &str) -> Result<Option<CampusService>, StoreError> {
        Ok(self.read()?.campus_services.get(id).cloned())
    }
}
