//! The module contains the `Expense` record.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Money, balances::GroupSummary};

/// How an expense is shared among the members of its group.
///
/// Only equal splitting is implemented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitType {
    #[default]
    Equal,
}

/// One member paying an amount on behalf of the group.
///
/// Expenses are append-only: there is no update or delete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub id: Uuid,
    /// Group the expense belongs to (a reference, not ownership).
    pub group_id: Uuid,
    /// Member who paid. Validated against the group only at creation time.
    pub paid_by: Uuid,
    /// Non-negative amount.
    pub amount: Money,
    pub description: Option<String>,
    pub category: Option<String>,
    pub split_type: SplitType,
    pub timestamp: DateTime<Utc>,
}

/// Expenses of a group together with the derived balances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseListing {
    pub expenses: Vec<Expense>,
    pub summary: GroupSummary,
}
