//! Wire types shared by the HTTP server and its clients.
//!
//! JSON field names are camelCase. Amounts travel as numbers in major units
//! (e.g. `66.66`); the server converts them to exact minor units.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
}

/// Envelope wrapping every response body.
///
/// Success: `{"success": true, "data": ..., "message": ...}`.
/// Failure: `{"success": false, "data": null, "message": "<reason>"}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Amount as sent by clients: a JSON number or a decimal string
/// (`"12.50"`, `"12,5"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

pub mod group {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MemberNew {
        /// Optional caller-chosen id; must be unique within the group.
        pub member_id: Option<Uuid>,
        pub name: Option<String>,
        pub mobile: Option<String>,
        #[serde(alias = "upiId")]
        pub payment_handle: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GroupNew {
        pub group_name: Option<String>,
        pub description: Option<String>,
        pub members: Option<Vec<MemberNew>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Member {
        pub member_id: Uuid,
        pub name: String,
        pub mobile: String,
        pub payment_handle: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Group {
        pub group_id: Uuid,
        pub group_name: String,
        pub description: Option<String>,
        pub base_currency: Currency,
        pub members: Vec<Member>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MemberRemoved {
        pub removed: bool,
    }
}

pub mod expense {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum SplitType {
        Equal,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseNew {
        /// Member id of the payer.
        pub paid_by: Option<String>,
        pub amount: Option<AmountInput>,
        pub description: Option<String>,
        pub category: Option<String>,
        /// RFC3339 timestamp; the server uses now() when absent.
        pub timestamp: Option<DateTime<FixedOffset>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Expense {
        pub expense_id: Uuid,
        pub group_id: Uuid,
        pub paid_by: Uuid,
        pub amount: f64,
        pub description: Option<String>,
        pub category: Option<String>,
        pub split_type: SplitType,
        pub timestamp: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MemberBalance {
        pub member_id: Uuid,
        pub paid: f64,
        pub should_pay: f64,
        pub balance: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseList {
        pub expenses: Vec<Expense>,
        pub balances: Vec<MemberBalance>,
        pub total_amount: f64,
        pub per_head: f64,
    }
}

pub mod settlement {
    use super::*;

    /// One transfer from a debtor to a creditor.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SettlementPair {
        pub from: Uuid,
        pub to: Uuid,
        pub amount: f64,
        pub payment_link: String,
    }
}
