//! The module contains `Expense` and `ExpenseShare` structs and the logic
//! turning a split request into shares.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    EngineError, Member, ResultEngine,
    policy::{differ_beyond_tolerance, ensure_amount},
};

/// How an expense is divided among members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitType {
    #[default]
    Equal,
    Custom,
}

/// The portion of one expense owed by one member.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseShare {
    pub id: Uuid,
    pub expense_id: Uuid,
    pub member_id: Uuid,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub paid_by_id: Uuid,
    pub group_id: Uuid,
    pub split_type: SplitType,
    pub created_at: DateTime<Utc>,
    pub shares: Vec<ExpenseShare>,
}

impl Expense {
    /// Returns `true` if the member paid for or owes part of this expense.
    pub fn references(&self, member_id: Uuid) -> bool {
        self.paid_by_id == member_id || self.shares.iter().any(|s| s.member_id == member_id)
    }
}

/// Split requested by the caller when creating or updating an expense.
#[derive(Clone, Debug, PartialEq)]
pub enum Split {
    /// Divide evenly among `participant_ids`; all group members when empty.
    Equal { participant_ids: Vec<Uuid> },
    /// Caller supplied `(member_id, amount)` pairs.
    Custom { shares: Vec<(Uuid, f64)> },
}

impl Split {
    pub fn split_type(&self) -> SplitType {
        match self {
            Split::Equal { .. } => SplitType::Equal,
            Split::Custom { .. } => SplitType::Custom,
        }
    }
}

/// Command carrying everything needed to create or replace an expense.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseCmd {
    pub description: String,
    pub amount: f64,
    pub paid_by_id: Uuid,
    pub split: Split,
}

/// Builds the shares of an expense.
///
/// Equal shares are `amount / N` and are **not** rounded: the ledger rounds
/// once, after accumulation. Custom shares are taken as given; their sum is
/// only checked against `amount` when `strict` is set.
pub(crate) fn build_shares(
    expense_id: Uuid,
    amount: f64,
    split: &Split,
    members: &[Member],
    strict: bool,
) -> ResultEngine<Vec<ExpenseShare>> {
    let share = |member_id: Uuid, amount: f64| ExpenseShare {
        id: Uuid::new_v4(),
        expense_id,
        member_id,
        amount,
    };

    match split {
        Split::Equal { participant_ids } => {
            let participants: Vec<Uuid> = if participant_ids.is_empty() {
                members.iter().map(|m| m.id).collect()
            } else {
                // Keep member order so shares are listed consistently.
                for id in participant_ids {
                    ensure_member(members, *id, "participant")?;
                }
                members
                    .iter()
                    .map(|m| m.id)
                    .filter(|id| participant_ids.contains(id))
                    .collect()
            };

            if participants.is_empty() {
                return Err(EngineError::InvalidSplit(
                    "at least one participant is required".to_string(),
                ));
            }

            let per_head = amount / participants.len() as f64;
            Ok(participants
                .into_iter()
                .map(|member_id| share(member_id, per_head))
                .collect())
        }
        Split::Custom { shares } => {
            if shares.is_empty() {
                return Err(EngineError::InvalidSplit(
                    "custom split requires at least one share".to_string(),
                ));
            }

            let mut total = 0.0;
            let mut out = Vec::with_capacity(shares.len());
            for (member_id, share_amount) in shares {
                ensure_member(members, *member_id, "share")?;
                let share_amount = validate_non_negative(*share_amount, "share amount")?;
                total += share_amount;
                out.push(share(*member_id, share_amount));
            }

            if strict && differ_beyond_tolerance(total, amount) {
                return Err(EngineError::InvalidSplit(format!(
                    "custom shares sum to {total}, expense amount is {amount}"
                )));
            }
            Ok(out)
        }
    }
}

/// Amounts of expenses and shares must be finite and `>= 0`.
pub(crate) fn validate_non_negative(amount: f64, label: &str) -> ResultEngine<f64> {
    let amount = ensure_amount(amount, label)?;
    if amount < 0.0 {
        return Err(EngineError::InvalidAmount(format!("{label} must be >= 0")));
    }
    Ok(amount)
}

fn ensure_member(members: &[Member], member_id: Uuid, record: &str) -> ResultEngine<()> {
    if members.iter().any(|m| m.id == member_id) {
        return Ok(());
    }
    Err(EngineError::UnknownMemberReference {
        record: record.to_string(),
        member_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(names: &[&str]) -> Vec<Member> {
        let group_id = Uuid::new_v4();
        names
            .iter()
            .map(|name| Member::new(name.to_string(), group_id))
            .collect()
    }

    #[test]
    fn equal_split_defaults_to_all_members() {
        let members = members(&["alice", "bob", "carol"]);
        let shares = build_shares(
            Uuid::new_v4(),
            100.0,
            &Split::Equal {
                participant_ids: vec![],
            },
            &members,
            false,
        )
        .unwrap();

        assert_eq!(shares.len(), 3);
        assert!(shares.iter().all(|s| s.amount == 100.0 / 3.0));
        let ids: Vec<Uuid> = shares.iter().map(|s| s.member_id).collect();
        let expected: Vec<Uuid> = members.iter().map(|m| m.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn equal_split_among_participants_keeps_member_order() {
        let members = members(&["alice", "bob", "carol"]);
        let shares = build_shares(
            Uuid::new_v4(),
            50.0,
            &Split::Equal {
                participant_ids: vec![members[2].id, members[0].id],
            },
            &members,
            false,
        )
        .unwrap();

        let ids: Vec<Uuid> = shares.iter().map(|s| s.member_id).collect();
        assert_eq!(ids, vec![members[0].id, members[2].id]);
        assert!(shares.iter().all(|s| s.amount == 25.0));
    }

    #[test]
    fn equal_split_rejects_unknown_participant() {
        let members = members(&["alice"]);
        let stranger = Uuid::new_v4();
        let err = build_shares(
            Uuid::new_v4(),
            10.0,
            &Split::Equal {
                participant_ids: vec![stranger],
            },
            &members,
            false,
        )
        .unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownMemberReference {
                record: "participant".to_string(),
                member_id: stranger,
            }
        );
    }

    #[test]
    fn equal_split_without_members_fails() {
        let err = build_shares(
            Uuid::new_v4(),
            10.0,
            &Split::Equal {
                participant_ids: vec![],
            },
            &[],
            false,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidSplit(_)));
    }

    #[test]
    fn custom_split_sum_only_checked_when_strict() {
        let members = members(&["alice", "bob"]);
        let split = Split::Custom {
            shares: vec![(members[0].id, 10.0), (members[1].id, 5.0)],
        };

        let shares = build_shares(Uuid::new_v4(), 20.0, &split, &members, false).unwrap();
        assert_eq!(shares.len(), 2);

        let err = build_shares(Uuid::new_v4(), 20.0, &split, &members, true).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSplit(_)));

        assert!(build_shares(Uuid::new_v4(), 15.0, &split, &members, true).is_ok());
    }

    #[test]
    fn strict_custom_split_allows_one_cent_gap() {
        let members = members(&["alice", "bob"]);
        let split = |b: f64| Split::Custom {
            shares: vec![(members[0].id, 5.0), (members[1].id, b)],
        };

        assert!(build_shares(Uuid::new_v4(), 10.0, &split(5.01), &members, true).is_ok());
        assert!(build_shares(Uuid::new_v4(), 10.0, &split(4.99), &members, true).is_ok());
        assert!(matches!(
            build_shares(Uuid::new_v4(), 10.0, &split(5.02), &members, true),
            Err(EngineError::InvalidSplit(_))
        ));
        assert!(matches!(
            build_shares(Uuid::new_v4(), 10.0, &split(4.98), &members, true),
            Err(EngineError::InvalidSplit(_))
        ));
    }

    #[test]
    fn custom_split_rejects_negative_share() {
        let members = members(&["alice"]);
        let split = Split::Custom {
            shares: vec![(members[0].id, -1.0)],
        };
        let err = build_shares(Uuid::new_v4(), 1.0, &split, &members, false).unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount(_)));
    }
}
