//! Filter, sort and limit helpers shared by the store listings

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::types::{Assessment, ForumPost, ForumReply, MoodEntry};

/// Mood entries returned when no limit is given
pub const DEFAULT_MOOD_LIMIT: usize = 30;
/// Forum posts returned when no limit is given
pub const DEFAULT_FORUM_LIMIT: usize = 20;

/// Direction of a creation-time listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

/// Records that carry a store-assigned creation time
pub trait Created {
    fn created_at(&self) -> DateTime<Utc>;
}

macro_rules! impl_created {
    ($($ty:ty),*) => {
        $(impl Created for $ty {
            fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }
        })*
    };
}

impl_created!(Assessment, MoodEntry, ForumPost, ForumReply);

/// Treat an empty filter value the same as no filter
pub fn active_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Order rows by creation time and cap the result.
///
/// `rows` must be yielded in insertion order; rows created in the same
/// instant keep that order (reversed for [`SortOrder::Desc`]).
pub fn by_creation<'a, T, I>(rows: I, order: SortOrder, limit: Option<usize>) -> Vec<T>
where
    T: Created + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut picked: Vec<(usize, &T)> = rows.into_iter().enumerate().collect();
    picked.sort_by(|(ia, a), (ib, b)| {
        let ord = a.created_at().cmp(&b.created_at()).then(ia.cmp(ib));
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });

    picked
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|(_, row)| row.clone())
        .collect()
}

/// Case-insensitive alphabetical comparison, falling back to byte order
pub fn alphabetical(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
