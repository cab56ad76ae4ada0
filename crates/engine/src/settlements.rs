//! The module contains `Settlement` struct, a recorded real-world payment
//! between two members.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, policy::ensure_amount};

#[derive(Clone, Debug, PartialEq)]
pub struct Settlement {
    pub id: Uuid,
    pub from_id: Uuid,
    pub to_id: Uuid,
    pub amount: f64,
    pub group_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Settlement {
    /// Builds a settlement, rejecting self payments and non-positive amounts.
    pub fn new(group_id: Uuid, from_id: Uuid, to_id: Uuid, amount: f64) -> ResultEngine<Self> {
        if from_id == to_id {
            return Err(EngineError::SelfSettlement(from_id));
        }
        validate_settlement_amount(amount)?;

        Ok(Self {
            id: Uuid::new_v4(),
            from_id,
            to_id,
            amount,
            group_id,
            created_at: Utc::now(),
        })
    }
}

/// Settlement amounts must be finite and strictly positive.
pub(crate) fn validate_settlement_amount(amount: f64) -> ResultEngine<f64> {
    let amount = ensure_amount(amount, "settlement amount")?;
    if amount <= 0.0 {
        return Err(EngineError::InvalidAmount(
            "settlement amount must be > 0".to_string(),
        ));
    }
    Ok(amount)
}
