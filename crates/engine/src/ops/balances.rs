use uuid::Uuid;

use crate::{MemberBalance, ResultEngine, Transfer};

use super::Engine;

impl Engine {
    /// Current balance of every group member, oldest member first.
    pub async fn balances(&self, group_id: Uuid) -> ResultEngine<Vec<MemberBalance>> {
        self.with_group(group_id, |group| group.balance_report())
            .await
    }

    /// Who should pay whom to settle the group up.
    ///
    /// Balances and suggestions come from the same snapshot of the group.
    pub async fn suggested_settlements(&self, group_id: Uuid) -> ResultEngine<Vec<Transfer>> {
        self.with_group(group_id, |group| {
            let plan = group.transfer_plan()?;
            tracing::debug!(%group_id, transfers = plan.len(), "settlement plan computed");
            Ok(plan)
        })
        .await
    }
}
