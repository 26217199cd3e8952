//! Command structs for engine operations.
//!
//! These types group parameters for write operations (group creation, new
//! members, new expenses), keeping call sites readable and avoiding long
//! argument lists.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::Money;

/// Create a group.
#[derive(Clone, Debug, Default)]
pub struct GroupNew {
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<MemberNew>,
}

impl GroupNew {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn member(mut self, member: MemberNew) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub fn members(mut self, members: impl IntoIterator<Item = MemberNew>) -> Self {
        self.members.extend(members);
        self
    }
}

/// Add a member to a group.
#[derive(Clone, Debug, Default)]
pub struct MemberNew {
    /// Caller-chosen id. A fresh one is generated when absent.
    pub member_id: Option<Uuid>,
    pub name: String,
    pub mobile: String,
    pub payment_handle: Option<String>,
}

impl MemberNew {
    #[must_use]
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            member_id: None,
            name: name.into(),
            mobile: mobile.into(),
            payment_handle: None,
        }
    }

    #[must_use]
    pub fn member_id(mut self, member_id: Uuid) -> Self {
        self.member_id = Some(member_id);
        self
    }

    #[must_use]
    pub fn payment_handle(mut self, handle: impl Into<String>) -> Self {
        self.payment_handle = Some(handle.into());
        self
    }
}

/// Record an expense paid by a member.
#[derive(Clone, Debug)]
pub struct ExpenseNew {
    pub paid_by: Uuid,
    pub amount: Money,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Defaults to the current time when absent.
    pub timestamp: Option<DateTime<Utc>>,
}

impl ExpenseNew {
    #[must_use]
    pub fn new(paid_by: Uuid, amount: Money) -> Self {
        Self {
            paid_by,
            amount,
            description: None,
            category: None,
            timestamp: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
