//! Ledger builder: turns expenses, shares and settlements into one net
//! balance per member.
//!
//! Raw amounts are accumulated in fixed-point micro units, so the result does
//! not depend on the order of the records, and every balance is rounded to
//! cents once at the end (see [`crate::policy`]).

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    EngineError, Expense, Member, MoneyCents, ResultEngine, Settlement,
    expenses::validate_non_negative,
    policy::{cents_from_micros, to_micros},
    settlements::validate_settlement_amount,
};

/// Net position of one member.
///
/// Positive means the group owes the member, negative means the member owes
/// the group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Balance {
    pub member_id: Uuid,
    pub balance: MoneyCents,
}

/// Per-member accumulator, indexed in member order.
struct Accumulator {
    index: HashMap<Uuid, usize>,
    micros: Vec<i128>,
}

impl Accumulator {
    fn new(members: &[Member]) -> Self {
        let index = members
            .iter()
            .enumerate()
            .map(|(pos, member)| (member.id, pos))
            .collect();
        Self {
            index,
            micros: vec![0; members.len()],
        }
    }

    fn slot(
        &mut self,
        member_id: Uuid,
        record: impl FnOnce() -> String,
    ) -> ResultEngine<&mut i128> {
        match self.index.get(&member_id) {
            Some(&pos) => Ok(&mut self.micros[pos]),
            None => Err(EngineError::UnknownMemberReference {
                record: record(),
                member_id,
            }),
        }
    }

    fn credit(
        &mut self,
        member_id: Uuid,
        amount: f64,
        record: impl FnOnce() -> String,
    ) -> ResultEngine<()> {
        let slot = self.slot(member_id, record)?;
        *slot = slot
            .checked_add(to_micros(amount))
            .ok_or_else(|| out_of_range(member_id))?;
        Ok(())
    }

    fn debit(
        &mut self,
        member_id: Uuid,
        amount: f64,
        record: impl FnOnce() -> String,
    ) -> ResultEngine<()> {
        let slot = self.slot(member_id, record)?;
        *slot = slot
            .checked_sub(to_micros(amount))
            .ok_or_else(|| out_of_range(member_id))?;
        Ok(())
    }

    /// Rounds every slot to cents, in member order.
    fn finish(self, members: &[Member]) -> ResultEngine<Vec<Balance>> {
        members
            .iter()
            .zip(self.micros)
            .map(|(member, micros)| {
                let cents = cents_from_micros(micros).ok_or_else(|| out_of_range(member.id))?;
                Ok(Balance {
                    member_id: member.id,
                    balance: MoneyCents::new(cents),
                })
            })
            .collect()
    }
}

fn out_of_range(member_id: Uuid) -> EngineError {
    EngineError::InvalidAmount(format!("balance of member {member_id} is out of range"))
}

/// Computes the balance of every member.
///
/// - the payer of an expense is credited its full amount (even when not among
///   the shares);
/// - every share debits its member;
/// - a settlement credits the payer and debits the receiver.
///
/// Members without activity are returned with a zero balance. The result
/// follows the order of `members`.
///
/// Fails with [`EngineError::UnknownMemberReference`] if any record points to a
/// member outside `members`, and with [`EngineError::InvalidAmount`] for
/// NaN/infinite, negative or oversized amounts, non-positive settlements and
/// balances that do not fit in [`MoneyCents`]. No partial result is returned.
pub fn compute_balances(
    members: &[Member],
    expenses: &[Expense],
    settlements: &[Settlement],
) -> ResultEngine<Vec<Balance>> {
    let mut acc = Accumulator::new(members);

    for expense in expenses {
        let amount = validate_non_negative(expense.amount, "expense amount")?;
        acc.credit(expense.paid_by_id, amount, || {
            format!("expense {} payer", expense.id)
        })?;

        for share in &expense.shares {
            let amount = validate_non_negative(share.amount, "share amount")?;
            acc.debit(share.member_id, amount, || {
                format!("share {} of expense {}", share.id, expense.id)
            })?;
        }
    }

    for settlement in settlements {
        let amount = validate_settlement_amount(settlement.amount)?;
        acc.credit(settlement.from_id, amount, || {
            format!("settlement {} payer", settlement.id)
        })?;
        acc.debit(settlement.to_id, amount, || {
            format!("settlement {} receiver", settlement.id)
        })?;
    }

    acc.finish(members)
}
