//! Debt simplifier: greedy largest-first matching of debtors to creditors.
//!
//! This is a heuristic. Finding the true minimum number of transfers is
//! NP-hard; the greedy walk produces at most `debtors + creditors - 1`
//! transfers and always fully clears one side of each pairing before moving
//! on.

use uuid::Uuid;

use crate::{
    Balance, MoneyCents,
    policy::{EPSILON_CENTS, exceeds_tolerance},
};

/// Advisory transfer: `from_id` should pay `to_id` this amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuggestedSettlement {
    pub from_id: Uuid,
    pub to_id: Uuid,
    pub amount: MoneyCents,
}

struct Position {
    member_id: Uuid,
    remaining: i64,
}

/// Produces the transfers that bring every balance to (approximately) zero.
///
/// Members whose balance lies within the tolerance band (`|b| <= 0.01`) are
/// left out. Creditors and debtors are each sorted by amount, largest first;
/// ties keep the order of `balances`. The result is in emission order.
///
/// Balances are already whole cents, so the walk runs on integer cents and
/// the tolerance checks are exact. A pairing of one cent is not emitted, which
/// can leave a member up to two cents away from zero.
pub fn suggest_settlements(balances: &[Balance]) -> Vec<SuggestedSettlement> {
    let mut creditors = Vec::new();
    let mut debtors = Vec::new();

    for entry in balances {
        let amount = entry.balance.cents();
        if exceeds_tolerance(entry.balance) {
            creditors.push(Position {
                member_id: entry.member_id,
                remaining: amount,
            });
        } else if amount < -EPSILON_CENTS {
            debtors.push(Position {
                member_id: entry.member_id,
                remaining: amount.saturating_neg(),
            });
        }
    }

    // `sort_by` is stable, equal amounts keep their input order.
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let mut suggestions = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];

        let transfer = MoneyCents::new(debtor.remaining.min(creditor.remaining));
        if exceeds_tolerance(transfer) {
            suggestions.push(SuggestedSettlement {
                from_id: debtor.member_id,
                to_id: creditor.member_id,
                amount: transfer,
            });
        }

        debtor.remaining -= transfer.cents();
        creditor.remaining -= transfer.cents();

        if debtor.remaining < EPSILON_CENTS {
            i += 1;
        }
        if creditor.remaining < EPSILON_CENTS {
            j += 1;
        }
    }

    suggestions
}
