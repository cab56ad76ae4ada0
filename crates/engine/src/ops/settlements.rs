use uuid::Uuid;

use crate::{EngineError, ResultEngine, Settlement};

use super::{Engine, WithMembers};

impl Engine {
    /// Lists recorded settlements, newest first.
    /// Settlements newest first, with the members they reference.
    pub async fn list_settlements(
        &self,
        group_id: Uuid,
    ) -> ResultEngine<WithMembers<Vec<Settlement>>> {
        self.with_group(group_id, |group| {
            Ok(WithMembers::new(group, group.settlements_newest_first()))
        })
        .await
    }

    /// Records a real-world payment from `from_id` to `to_id`.
    pub async fn add_settlement(
        &self,
        group_id: Uuid,
        from_id: Uuid,
        to_id: Uuid,
        amount: f64,
    ) -> ResultEngine<WithMembers<Settlement>> {
        self.with_group_mut(group_id, |group| {
            let settlement = Settlement::new(group_id, from_id, to_id, amount)?;
            for (member_id, record) in [(from_id, "settlement payer"), (to_id, "settlement receiver")] {
                if group.member(member_id).is_err() {
                    return Err(EngineError::UnknownMemberReference {
                        record: record.to_string(),
                        member_id,
                    });
                }
            }
            group.settlements.push(settlement.clone());
            tracing::debug!(%group_id, settlement_id = %settlement.id, "settlement recorded");
            Ok(WithMembers::new(group, settlement))
        })
        .await
    }

    pub async fn delete_settlement(&self, group_id: Uuid, settlement_id: Uuid) -> ResultEngine<()> {
        self.with_group_mut(group_id, |group| {
            let before = group.settlements.len();
            group.settlements.retain(|s| s.id != settlement_id);
            if group.settlements.len() == before {
                return Err(EngineError::KeyNotFound(format!(
                    "settlement {settlement_id}"
                )));
            }
            Ok(())
        })
        .await
    }
}
