//! In-memory group store built around the ledger.
//!
//! All groups live behind one async `RwLock`. Reports (balances, suggested
//! settlements) are computed while holding the read lock, so they always see
//! a consistent snapshot of one group.

use std::{collections::HashMap, ops::Deref};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{EngineError, Group, Member, ResultEngine};

mod balances;
mod expenses;
mod groups;
mod members;
mod settlements;

pub use groups::GroupSummary;

/// A value read or written together with the members of its group, under the
/// same lock, so every member id inside `value` resolves against `members`.
#[derive(Clone, Debug, PartialEq)]
pub struct WithMembers<T> {
    pub members: Vec<Member>,
    pub value: T,
}

impl<T> WithMembers<T> {
    fn new(group: &Group, value: T) -> Self {
        Self {
            members: group.members.clone(),
            value,
        }
    }
}

impl<T> Deref for WithMembers<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

#[derive(Debug, Default)]
pub struct Engine {
    groups: RwLock<HashMap<Uuid, Group>>,
    strict_custom_splits: bool,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Run `f` against a read-only view of the group.
    async fn with_group<T>(
        &self,
        group_id: Uuid,
        f: impl FnOnce(&Group) -> ResultEngine<T>,
    ) -> ResultEngine<T> {
        let groups = self.groups.read().await;
        let group = groups
            .get(&group_id)
            .ok_or_else(|| EngineError::KeyNotFound(format!("group {group_id}")))?;
        f(group)
    }

    /// Run `f` against the group under the write lock.
    ///
    /// `f` validates everything before mutating, so an error leaves the group
    /// unchanged.
    async fn with_group_mut<T>(
        &self,
        group_id: Uuid,
        f: impl FnOnce(&mut Group) -> ResultEngine<T>,
    ) -> ResultEngine<T> {
        let mut groups = self.groups.write().await;
        let group = groups
            .get_mut(&group_id)
            .ok_or_else(|| EngineError::KeyNotFound(format!("group {group_id}")))?;
        let value = f(group)?;
        group.touch();
        Ok(value)
    }
}

fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!("{label} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    strict_custom_splits: bool,
}

impl EngineBuilder {
    /// Reject custom splits whose shares do not add up to the expense amount.
    pub fn strict_custom_splits(mut self, strict: bool) -> EngineBuilder {
        self.strict_custom_splits = strict;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            groups: RwLock::new(HashMap::new()),
            strict_custom_splits: self.strict_custom_splits,
        }
    }
}
