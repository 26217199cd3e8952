//! The module contains `Group` and `Member` structs.

use uuid::Uuid;

use crate::Currency;

/// A participant of a group.
///
/// Members are immutable once created: the only lifecycle event after
/// creation is removal from the owning group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    /// Identifier, unique within the owning group.
    pub id: Uuid,
    pub name: String,
    pub mobile: String,
    /// Handle used as payee address in payment links (e.g. a UPI id).
    pub payment_handle: Option<String>,
}

/// A named set of members sharing expenses in one base currency.
///
/// A group owns its members. Expenses are stored by the engine and only
/// reference the group by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Stable identifier for this group.
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub base_currency: Currency,
    /// Members in insertion order. The order drives tie-breaks in balance
    /// reconciliation and settlement.
    pub members: Vec<Member>,
}

impl Group {
    pub fn new(name: String, description: Option<String>, base_currency: Currency) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            base_currency,
            members: Vec::new(),
        }
    }

    /// Returns the member with the given id, if it is still part of the group.
    pub fn member(&self, member_id: Uuid) -> Option<&Member> {
        self.members.iter().find(|m| m.id == member_id)
    }

    pub fn has_member(&self, member_id: Uuid) -> bool {
        self.member(member_id).is_some()
    }

    /// Number of shares an expense is split into. An empty group counts as a
    /// single head.
    pub fn head_count(&self) -> u32 {
        u32::try_from(self.members.len()).unwrap_or(u32::MAX).max(1)
    }
}
