//! Conversions from engine records to API bodies.
//!
//! Records only carry member ids; views embed the member, so every
//! conversion resolves ids against the member list of the same group.

use api_types::{
    balance::BalanceView,
    expense::{ExpenseShareView, ExpenseView, SplitType},
    group::{GroupCounts, GroupView},
    member::MemberView,
    settlement::{SettlementView, SuggestedSettlementView},
};
use engine::{
    EngineError, Expense, Group, GroupSummary, Member, MemberBalance, Settlement, Transfer,
};
use uuid::Uuid;

pub fn member(member: &Member) -> MemberView {
    MemberView {
        id: member.id,
        name: member.name.clone(),
        group_id: member.group_id,
        created_at: member.created_at,
    }
}

fn resolve(members: &[Member], member_id: Uuid) -> Result<MemberView, EngineError> {
    members
        .iter()
        .find(|m| m.id == member_id)
        .map(member)
        .ok_or_else(|| EngineError::KeyNotFound(format!("member {member_id}")))
}

fn split_type(value: engine::SplitType) -> SplitType {
    match value {
        engine::SplitType::Equal => SplitType::Equal,
        engine::SplitType::Custom => SplitType::Custom,
    }
}

pub fn expense(expense: &Expense, members: &[Member]) -> Result<ExpenseView, EngineError> {
    let shares = expense
        .shares
        .iter()
        .map(|share| {
            Ok(ExpenseShareView {
                id: share.id,
                expense_id: share.expense_id,
                member_id: share.member_id,
                member: resolve(members, share.member_id)?,
                amount: share.amount,
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    Ok(ExpenseView {
        id: expense.id,
        description: expense.description.clone(),
        amount: expense.amount,
        paid_by_id: expense.paid_by_id,
        paid_by: resolve(members, expense.paid_by_id)?,
        group_id: expense.group_id,
        split_type: split_type(expense.split_type),
        created_at: expense.created_at,
        shares,
    })
}

pub fn settlement(
    settlement: &Settlement,
    members: &[Member],
) -> Result<SettlementView, EngineError> {
    Ok(SettlementView {
        id: settlement.id,
        amount: settlement.amount,
        from_id: settlement.from_id,
        from: resolve(members, settlement.from_id)?,
        to_id: settlement.to_id,
        to: resolve(members, settlement.to_id)?,
        group_id: settlement.group_id,
        created_at: settlement.created_at,
    })
}

pub fn group_summary(summary: &GroupSummary) -> GroupView {
    GroupView {
        id: summary.id,
        name: summary.name.clone(),
        description: summary.description.clone(),
        created_at: summary.created_at,
        updated_at: summary.updated_at,
        members: summary.members.iter().map(member).collect(),
        expenses: None,
        settlements: None,
        count: Some(GroupCounts {
            expenses: summary.expense_count,
            settlements: summary.settlement_count,
        }),
    }
}

pub fn group_detail(group: &Group) -> Result<GroupView, EngineError> {
    let expenses = group
        .expenses
        .iter()
        .map(|e| expense(e, &group.members))
        .collect::<Result<Vec<_>, _>>()?;
    let settlements = group
        .settlements
        .iter()
        .map(|s| settlement(s, &group.members))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GroupView {
        id: group.id,
        name: group.name.clone(),
        description: group.description.clone(),
        created_at: group.created_at,
        updated_at: group.updated_at,
        members: group.members.iter().map(member).collect(),
        expenses: Some(expenses),
        settlements: Some(settlements),
        count: None,
    })
}

pub fn balance(entry: &MemberBalance) -> BalanceView {
    BalanceView {
        member: member(&entry.member),
        balance: entry.balance.to_major(),
    }
}

pub fn transfer(transfer: &Transfer) -> SuggestedSettlementView {
    SuggestedSettlementView {
        from: member(&transfer.from),
        to: member(&transfer.to),
        amount: transfer.amount.to_major(),
    }
}
