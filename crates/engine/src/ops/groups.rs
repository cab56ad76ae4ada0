use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{EngineError, Group, Member, ResultEngine};

use super::{Engine, normalize_optional_text, normalize_required_name};

/// A group as shown in listings: members plus record counts.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupSummary {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub members: Vec<Member>,
    pub expense_count: usize,
    pub settlement_count: usize,
}

impl From<&Group> for GroupSummary {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id,
            name: group.name.clone(),
            description: group.description.clone(),
            created_at: group.created_at,
            updated_at: group.updated_at,
            members: group.members.clone(),
            expense_count: group.expenses.len(),
            settlement_count: group.settlements.len(),
        }
    }
}

impl Engine {
    /// Lists every group, newest first.
    pub async fn list_groups(&self) -> Vec<GroupSummary> {
        let groups = self.groups.read().await;
        let mut summaries: Vec<GroupSummary> = groups.values().map(GroupSummary::from).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        summaries
    }

    /// Returns a snapshot of the group with expenses and settlements sorted
    /// newest first.
    pub async fn group(&self, group_id: Uuid) -> ResultEngine<Group> {
        self.with_group(group_id, |group| {
            let mut snapshot = group.clone();
            snapshot.expenses = group.expenses_newest_first();
            snapshot.settlements = group.settlements_newest_first();
            Ok(snapshot)
        })
        .await
    }

    /// Creates a group, optionally with its initial members.
    pub async fn new_group(
        &self,
        name: &str,
        description: Option<&str>,
        member_names: &[String],
    ) -> ResultEngine<Group> {
        let name = normalize_required_name(name, "group name")?;
        let mut group = Group::new(name, normalize_optional_text(description));

        for member_name in member_names {
            let member_name = normalize_required_name(member_name, "member name")?;
            group.members.push(Member::new(member_name, group.id));
        }

        tracing::debug!(group_id = %group.id, members = group.members.len(), "group created");
        self.groups.write().await.insert(group.id, group.clone());
        Ok(group)
    }

    /// Renames a group and/or changes its description.
    ///
    /// `None` leaves a field unchanged; a blank description clears it.
    pub async fn update_group(
        &self,
        group_id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> ResultEngine<Group> {
        let name = name
            .map(|n| normalize_required_name(n, "group name"))
            .transpose()?;

        self.with_group_mut(group_id, |group| {
            if let Some(name) = name {
                group.name = name;
            }
            if let Some(description) = description {
                group.description = normalize_optional_text(Some(description));
            }
            Ok(())
        })
        .await?;
        self.group(group_id).await
    }

    /// Deletes a group together with its members, expenses and settlements.
    pub async fn delete_group(&self, group_id: Uuid) -> ResultEngine<()> {
        match self.groups.write().await.remove(&group_id) {
            Some(group) => {
                tracing::debug!(
                    %group_id,
                    expenses = group.expenses.len(),
                    settlements = group.settlements.len(),
                    "group deleted"
                );
                Ok(())
            }
            None => Err(EngineError::KeyNotFound(format!("group {group_id}"))),
        }
    }
}
