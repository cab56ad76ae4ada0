use chrono::Utc;
use uuid::Uuid;

use crate::{
    EngineError, Expense, ExpenseCmd, Group, ResultEngine,
    expenses::{build_shares, validate_non_negative},
};

use super::{Engine, WithMembers, normalize_required_name};

/// Validated expense fields, ready to be written into a group.
struct Prepared {
    description: String,
    amount: f64,
}

fn prepare(cmd: &ExpenseCmd, group: &Group) -> ResultEngine<Prepared> {
    let description = normalize_required_name(&cmd.description, "description")?;
    let amount = validate_non_negative(cmd.amount, "expense amount")?;
    if amount == 0.0 {
        return Err(EngineError::InvalidAmount(
            "expense amount must be > 0".to_string(),
        ));
    }
    if group.member(cmd.paid_by_id).is_err() {
        return Err(EngineError::UnknownMemberReference {
            record: "payer".to_string(),
            member_id: cmd.paid_by_id,
        });
    }
    Ok(Prepared {
        description,
        amount,
    })
}

impl Engine {
    /// Lists group expenses, newest first.
    /// Expenses newest first, with the members they reference.
    pub async fn list_expenses(
        &self,
        group_id: Uuid,
    ) -> ResultEngine<WithMembers<Vec<Expense>>> {
        self.with_group(group_id, |group| {
            Ok(WithMembers::new(group, group.expenses_newest_first()))
        })
        .await
    }

    /// Adds an expense, building its shares from the requested split.
    pub async fn add_expense(
        &self,
        group_id: Uuid,
        cmd: ExpenseCmd,
    ) -> ResultEngine<WithMembers<Expense>> {
        let strict = self.strict_custom_splits;
        self.with_group_mut(group_id, |group| {
            let prepared = prepare(&cmd, group)?;
            let id = Uuid::new_v4();
            let shares = build_shares(id, prepared.amount, &cmd.split, &group.members, strict)?;

            let expense = Expense {
                id,
                description: prepared.description,
                amount: prepared.amount,
                paid_by_id: cmd.paid_by_id,
                group_id,
                split_type: cmd.split.split_type(),
                created_at: Utc::now(),
                shares,
            };
            group.expenses.push(expense.clone());
            tracing::debug!(%group_id, expense_id = %expense.id, "expense added");
            Ok(WithMembers::new(group, expense))
        })
        .await
    }

    /// Replaces an expense's fields and rebuilds its shares.
    pub async fn update_expense(
        &self,
        group_id: Uuid,
        expense_id: Uuid,
        cmd: ExpenseCmd,
    ) -> ResultEngine<WithMembers<Expense>> {
        let strict = self.strict_custom_splits;
        self.with_group_mut(group_id, |group| {
            let prepared = prepare(&cmd, group)?;
            let shares = build_shares(
                expense_id,
                prepared.amount,
                &cmd.split,
                &group.members,
                strict,
            )?;

            let expense = group.expense_mut(expense_id)?;
            expense.description = prepared.description;
            expense.amount = prepared.amount;
            expense.paid_by_id = cmd.paid_by_id;
            expense.split_type = cmd.split.split_type();
            expense.shares = shares;
            let updated = expense.clone();
            tracing::debug!(%group_id, %expense_id, "expense updated");
            Ok(WithMembers::new(group, updated))
        })
        .await
    }

    pub async fn delete_expense(&self, group_id: Uuid, expense_id: Uuid) -> ResultEngine<()> {
        self.with_group_mut(group_id, |group| {
            let before = group.expenses.len();
            group.expenses.retain(|e| e.id != expense_id);
            if group.expenses.len() == before {
                return Err(EngineError::KeyNotFound(format!("expense {expense_id}")));
            }
            Ok(())
        })
        .await
    }
}
