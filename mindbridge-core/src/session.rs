//! Anonymous session identity
//!
//! A session is an opaque correlation key chosen by the client. The server
//! can mint one for convenience but never stores or verifies it, so holding
//! a session id proves nothing about who created the data behind it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ID_PREFIX: &str = "session_";
const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Smallest display number handed out
pub const MIN_ANONYMOUS_NUMBER: u32 = 1000;
/// Largest display number handed out
pub const MAX_ANONYMOUS_NUMBER: u32 = 10998;

/// Client-held anonymous identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonymousSession {
    /// Correlation key sent with every write, `session_<millis>_<suffix>`
    pub id: String,
    /// Short number shown in the UI instead of a name
    pub anonymous_id: String,
    pub created_at: DateTime<Utc>,
}

impl AnonymousSession {
    /// Generate a fresh session stamped with the current time
    pub fn generate() -> Self {
        Self::generate_at(Utc::now())
    }

    /// Generate a fresh session stamped with `created_at`
    pub fn generate_at(created_at: DateTime<Utc>) -> Self {
        let entropy = Uuid::new_v4().as_u128();
        let suffix = base36_suffix(entropy);
        let span = u128::from(MAX_ANONYMOUS_NUMBER - MIN_ANONYMOUS_NUMBER + 1);
        // High bits feed the display number, low bits feed the suffix
        let number = MIN_ANONYMOUS_NUMBER + ((entropy >> 64) % span) as u32;

        Self {
            id: format!("{ID_PREFIX}{}_{suffix}", created_at.timestamp_millis()),
            anonymous_id: number.to_string(),
            created_at,
        }
    }
}

fn base36_suffix(mut entropy: u128) -> String {
    let mut out = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        out.push(BASE36[(entropy % 36) as usize] as char);
        entropy /= 36;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn id_has_expected_shape() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let session = AnonymousSession::generate_at(at);

        let rest = session.id.strip_prefix("session_").unwrap();
        let (millis, suffix) = rest.split_once('_').unwrap();
        assert_eq!(millis, "1700000000123");
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_eq!(session.created_at, at);
    }

    #[test]
    fn anonymous_number_in_range() {
        for _ in 0..200 {
            let session = AnonymousSession::generate();
            let n: u32 = session.anonymous_id.parse().unwrap();
            assert!((MIN_ANONYMOUS_NUMBER..=MAX_ANONYMOUS_NUMBER).contains(&n));
        }
    }

    #[test]
    fn sessions_are_distinct() {
        let a = AnonymousSession::generate();
        let b = AnonymousSession::generate();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(AnonymousSession::generate()).unwrap();
        assert!(json.get("anonymousId").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
