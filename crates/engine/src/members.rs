//! The module contains `Member` struct.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A person taking part in a group.
///
/// Expenses, shares and settlements only reference a member by `id`; the
/// group owns the member itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub group_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn new(name: String, group_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            group_id,
            created_at: Utc::now(),
        }
    }
}
