use uuid::Uuid;

use crate::{EngineError, Member, ResultEngine};

use super::{Engine, normalize_required_name};

impl Engine {
    /// Lists group members, oldest first.
    pub async fn list_members(&self, group_id: Uuid) -> ResultEngine<Vec<Member>> {
        self.with_group(group_id, |group| Ok(group.members.clone()))
            .await
    }

    pub async fn add_member(&self, group_id: Uuid, name: &str) -> ResultEngine<Member> {
        let name = normalize_required_name(name, "member name")?;
        self.with_group_mut(group_id, |group| {
            let member = Member::new(name, group.id);
            group.members.push(member.clone());
            tracing::debug!(%group_id, member_id = %member.id, "member added");
            Ok(member)
        })
        .await
    }

    pub async fn rename_member(
        &self,
        group_id: Uuid,
        member_id: Uuid,
        name: &str,
    ) -> ResultEngine<Member> {
        let name = normalize_required_name(name, "member name")?;
        self.with_group_mut(group_id, |group| {
            let member = group.member_mut(member_id)?;
            member.name = name;
            Ok(member.clone())
        })
        .await
    }

    /// Removes a member who is not referenced by any expense, share or
    /// settlement.
    pub async fn remove_member(&self, group_id: Uuid, member_id: Uuid) -> ResultEngine<()> {
        self.with_group_mut(group_id, |group| {
            group.member(member_id)?;
            if group.is_member_referenced(member_id) {
                tracing::info!(%group_id, %member_id, "refusing to delete referenced member");
                return Err(EngineError::MemberInUse(
                    "cannot delete member with existing expenses or settlements, delete them first"
                        .to_string(),
                ));
            }
            group.members.retain(|m| m.id != member_id);
            Ok(())
        })
        .await
    }
}
