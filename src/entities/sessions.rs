use crate::models::sessions::ComparisonPayload;
use chrono::{DateTime, Utc};

/// A stored comparison payload together with its creation time. Only the
/// in-process backend keeps the timestamp around; redis tracks expiry itself.
#[derive(Debug, Clone)]
pub struct StoredSession {
    pub payload: ComparisonPayload,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a session lookup.
///
/// `Expired` is only ever produced by a backend that can attest the record
/// existed (lazy deletion). The redis backend expires keys eagerly and
/// reports a vanished record as `NotFound`.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionLookup {
    Hit(ComparisonPayload),
    NotFound,
    Expired,
}
