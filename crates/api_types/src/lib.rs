//! Request and response bodies of the HTTP API.
//!
//! JSON fields are camelCase. Amounts are decimal numbers in major units;
//! balances and suggested amounts are already rounded to cents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generic `{ "message": ... }` body returned by deletes.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

pub mod health {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Health {
        pub status: String,
        pub message: String,
    }
}

pub mod member {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MemberView {
        pub id: Uuid,
        pub name: String,
        pub group_id: Uuid,
        pub created_at: DateTime<Utc>,
    }

    /// Request body for adding or renaming a member.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MemberNew {
        pub name: String,
    }
}

pub mod group {
    use super::{expense::ExpenseView, member::MemberView, settlement::SettlementView, *};

    /// Initial member of a new group.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupMemberNew {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupNew {
        pub name: String,
        pub description: Option<String>,
        #[serde(default)]
        pub members: Vec<GroupMemberNew>,
    }

    /// Fields left out are not changed.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct GroupUpdate {
        pub name: Option<String>,
        pub description: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupCounts {
        pub expenses: usize,
        pub settlements: usize,
    }

    /// A group. Listings carry `_count`; the detail view carries expenses
    /// and settlements instead.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GroupView {
        pub id: Uuid,
        pub name: String,
        pub description: Option<String>,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
        pub members: Vec<MemberView>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub expenses: Option<Vec<ExpenseView>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub settlements: Option<Vec<SettlementView>>,
        #[serde(rename = "_count", skip_serializing_if = "Option::is_none")]
        pub count: Option<GroupCounts>,
    }
}

pub mod expense {
    use super::{member::MemberView, *};

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum SplitType {
        #[default]
        Equal,
        Custom,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ShareNew {
        pub member_id: Uuid,
        pub amount: f64,
    }

    /// Request body for creating or replacing an expense.
    ///
    /// `custom` splits use `shares`; `equal` splits divide `amount` among
    /// `participantIds`, or among every member when empty or missing.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseNew {
        pub description: String,
        pub amount: f64,
        pub paid_by_id: Uuid,
        pub split_type: Option<SplitType>,
        pub shares: Option<Vec<ShareNew>>,
        pub participant_ids: Option<Vec<Uuid>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseShareView {
        pub id: Uuid,
        pub expense_id: Uuid,
        pub member_id: Uuid,
        pub member: MemberView,
        pub amount: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseView {
        pub id: Uuid,
        pub description: String,
        pub amount: f64,
        pub paid_by_id: Uuid,
        pub paid_by: MemberView,
        pub group_id: Uuid,
        pub split_type: SplitType,
        pub created_at: DateTime<Utc>,
        pub shares: Vec<ExpenseShareView>,
    }
}

pub mod settlement {
    use super::{member::MemberView, *};

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SettlementNew {
        pub from_id: Uuid,
        pub to_id: Uuid,
        pub amount: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SettlementView {
        pub id: Uuid,
        pub amount: f64,
        pub from_id: Uuid,
        pub from: MemberView,
        pub to_id: Uuid,
        pub to: MemberView,
        pub group_id: Uuid,
        pub created_at: DateTime<Utc>,
    }

    /// Advisory transfer: `from` should pay `to` this amount.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SuggestedSettlementView {
        pub from: MemberView,
        pub to: MemberView,
        pub amount: f64,
    }
}

pub mod balance {
    use super::{member::MemberView, *};

    /// Positive `balance`: the group owes the member.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BalanceView {
        pub member: MemberView,
        pub balance: f64,
    }
}
