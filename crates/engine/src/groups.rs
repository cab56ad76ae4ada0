//! The module contains `Group` struct and its implementation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    Balance, EngineError, Expense, Member, MoneyCents, ResultEngine, Settlement,
    SuggestedSettlement, compute_balances, suggest_settlements,
};

/// A group of people sharing expenses.
///
/// The group exclusively owns its members, expenses and settlements: dropping
/// the group drops all of them.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Oldest first.
    pub members: Vec<Member>,
    /// Insertion order; listings sort newest first.
    pub expenses: Vec<Expense>,
    /// Insertion order; listings sort newest first.
    pub settlements: Vec<Settlement>,
}

/// A member together with their rounded balance.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberBalance {
    pub member: Member,
    pub balance: MoneyCents,
}

/// A suggested transfer with both ends resolved to members.
#[derive(Clone, Debug, PartialEq)]
pub struct Transfer {
    pub from: Member,
    pub to: Member,
    pub amount: MoneyCents,
}

impl Group {
    pub fn new(name: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: now,
            updated_at: now,
            members: Vec::new(),
            expenses: Vec::new(),
            settlements: Vec::new(),
        }
    }

    pub fn member(&self, member_id: Uuid) -> ResultEngine<&Member> {
        self.members
            .iter()
            .find(|m| m.id == member_id)
            .ok_or_else(|| EngineError::KeyNotFound(format!("member {member_id}")))
    }

    pub fn member_mut(&mut self, member_id: Uuid) -> ResultEngine<&mut Member> {
        self.members
            .iter_mut()
            .find(|m| m.id == member_id)
            .ok_or_else(|| EngineError::KeyNotFound(format!("member {member_id}")))
    }

    pub fn expense_mut(&mut self, expense_id: Uuid) -> ResultEngine<&mut Expense> {
        self.expenses
            .iter_mut()
            .find(|e| e.id == expense_id)
            .ok_or_else(|| EngineError::KeyNotFound(format!("expense {expense_id}")))
    }

    /// Returns `true` if any expense (as payer or share) or settlement
    /// references the member.
    pub fn is_member_referenced(&self, member_id: Uuid) -> bool {
        self.expenses.iter().any(|e| e.references(member_id))
            || self
                .settlements
                .iter()
                .any(|s| s.from_id == member_id || s.to_id == member_id)
    }

    /// Expenses sorted newest first.
    pub fn expenses_newest_first(&self) -> Vec<Expense> {
        let mut expenses = self.expenses.clone();
        expenses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        expenses
    }

    /// Settlements sorted newest first.
    pub fn settlements_newest_first(&self) -> Vec<Settlement> {
        let mut settlements = self.settlements.clone();
        settlements.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        settlements
    }

    /// Net balance of every member, in member order.
    pub fn balances(&self) -> ResultEngine<Vec<Balance>> {
        compute_balances(&self.members, &self.expenses, &self.settlements)
    }

    /// Suggested transfers for the current balances.
    pub fn suggested_settlements(&self) -> ResultEngine<Vec<SuggestedSettlement>> {
        Ok(suggest_settlements(&self.balances()?))
    }

    pub fn balance_report(&self) -> ResultEngine<Vec<MemberBalance>> {
        self.balances()?
            .into_iter()
            .map(|b| {
                Ok(MemberBalance {
                    member: self.member(b.member_id)?.clone(),
                    balance: b.balance,
                })
            })
            .collect()
    }

    pub fn transfer_plan(&self) -> ResultEngine<Vec<Transfer>> {
        self.suggested_settlements()?
            .into_iter()
            .map(|s| {
                Ok(Transfer {
                    from: self.member(s.from_id)?.clone(),
                    to: self.member(s.to_id)?.clone(),
                    amount: s.amount,
                })
            })
            .collect()
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_referenced_by_settlement() {
        let mut group = Group::new("trip".to_string(), None);
        let alice = Member::new("alice".to_string(), group.id);
        let bob = Member::new("bob".to_string(), group.id);
        let carol = Member::new("carol".to_string(), group.id);
        group.settlements.push(Settlement::new(group.id, alice.id, bob.id, 5.0).unwrap());
        group.members = vec![alice.clone(), bob.clone(), carol.clone()];

        assert!(group.is_member_referenced(alice.id));
        assert!(group.is_member_referenced(bob.id));
        assert!(!group.is_member_referenced(carol.id));
    }

    #[test]
    fn transfer_plan_resolves_members() {
        let mut group = Group::new("flat".to_string(), None);
        let alice = Member::new("alice".to_string(), group.id);
        let bob = Member::new("bob".to_string(), group.id);
        group.members = vec![alice.clone(), bob.clone()];
        group.settlements.push(Settlement::new(group.id, alice.id, bob.id, 12.5).unwrap());

        let plan = group.transfer_plan().unwrap();
        assert_eq!(
            plan,
            vec![Transfer {
                from: bob,
                to: alice,
                amount: MoneyCents::new(1250),
            }]
        );
    }
}
