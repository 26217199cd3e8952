use std::collections::HashSet;

use uuid::Uuid;

use crate::{
    Currency, EngineError, Group, GroupNew, Member, MemberNew, ResultEngine,
    util::{normalize_optional, normalize_required},
};

use super::Engine;

fn build_member(input: MemberNew) -> ResultEngine<Member> {
    Ok(Member {
        id: input.member_id.unwrap_or_else(Uuid::new_v4),
        name: normalize_required(&input.name, "member name")?,
        mobile: normalize_required(&input.mobile, "member mobile")?,
        payment_handle: normalize_optional(input.payment_handle.as_deref()),
    })
}

impl Engine {
    /// Creates a group with its initial members.
    ///
    /// Fails without touching the store if the name is blank, a member misses
    /// name or mobile, or two members share the same id.
    pub fn create_group(&mut self, input: GroupNew) -> ResultEngine<Group> {
        let name = normalize_required(&input.name, "group name")?;
        let mut group = Group::new(
            name,
            normalize_optional(input.description.as_deref()),
            Currency::default(),
        );

        let mut seen = HashSet::new();
        for member in input.members {
            let member = build_member(member)?;
            if !seen.insert(member.id) {
                return Err(EngineError::InvalidInput(format!(
                    "duplicate member id {}",
                    member.id
                )));
            }
            group.members.push(member);
        }

        tracing::debug!(
            group_id = %group.id,
            members = group.members.len(),
            "group created"
        );
        self.groups.insert(group.id, group.clone());
        Ok(group)
    }

    /// Returns a group by id.
    pub fn group(&self, group_id: Uuid) -> ResultEngine<&Group> {
        self.groups
            .get(&group_id)
            .ok_or_else(|| EngineError::KeyNotFound(format!("group {group_id}")))
    }

    fn group_mut(&mut self, group_id: Uuid) -> ResultEngine<&mut Group> {
        self.groups
            .get_mut(&group_id)
            .ok_or_else(|| EngineError::KeyNotFound(format!("group {group_id}")))
    }

    /// Appends a member to a group.
    pub fn add_member(&mut self, group_id: Uuid, input: MemberNew) -> ResultEngine<Member> {
        let group = self.group_mut(group_id)?;
        let member = build_member(input)?;
        if group.has_member(member.id) {
            return Err(EngineError::InvalidInput(format!(
                "duplicate member id {}",
                member.id
            )));
        }

        tracing::debug!(group_id = %group_id, member_id = %member.id, "member added");
        group.members.push(member.clone());
        Ok(member)
    }

    /// Removes a member from a group.
    ///
    /// A member who paid any expense of the group cannot be removed.
    pub fn remove_member(&mut self, group_id: Uuid, member_id: Uuid) -> ResultEngine<()> {
        self.group(group_id)?;
        let has_expenses = self
            .expenses
            .iter()
            .any(|e| e.group_id == group_id && e.paid_by == member_id);
        if has_expenses {
            return Err(EngineError::Conflict(
                "member has expenses and cannot be removed".to_string(),
            ));
        }

        let group = self.group_mut(group_id)?;
        let before = group.members.len();
        group.members.retain(|m| m.id != member_id);
        if group.members.len() == before {
            return Err(EngineError::KeyNotFound(format!("member {member_id}")));
        }

        tracing::debug!(group_id = %group_id, member_id = %member_id, "member removed");
        Ok(())
    }
}
