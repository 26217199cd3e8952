//! Expense endpoints.

use api_types::{
    AmountInput, ApiResponse,
    expense::{Expense, ExpenseList, ExpenseNew},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use chrono::Utc;
use engine::{EngineError, Money};
use uuid::Uuid;

use crate::{ServerError, groups::parse_group_id, server::ServerState, views};

fn parse_amount(amount: AmountInput) -> Result<Money, EngineError> {
    match amount {
        AmountInput::Number(value) => Money::from_major(value),
        AmountInput::Text(text) => text.parse(),
    }
}

/// Handle requests for recording an expense.
pub async fn add(
    State(state): State<ServerState>,
    Path(group_id): Path<String>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<Json<ApiResponse<Expense>>, ServerError> {
    let group_id = parse_group_id(&group_id)?;
    let Json(payload) = payload?;

    let paid_by = payload
        .paid_by
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let (Some(paid_by), Some(amount)) = (paid_by, payload.amount) else {
        return Err(
            EngineError::InvalidInput("paidBy and amount are required".to_string()).into(),
        );
    };
    let paid_by = Uuid::parse_str(paid_by).map_err(|_| {
        EngineError::InvalidInput(format!("paidBy {paid_by} is not a member of the group"))
    })?;

    let command = engine::ExpenseNew {
        paid_by,
        amount: parse_amount(amount)?,
        description: payload.description,
        category: payload.category,
        timestamp: payload.timestamp.map(|t| t.with_timezone(&Utc)),
    };

    let expense = state.engine.write().await.add_expense(group_id, command)?;

    Ok(Json(ApiResponse::ok_with_message(
        views::expense(&expense),
        "Expense added",
    )))
}

/// Handle requests for listing expenses and balances of a group.
pub async fn list(
    State(state): State<ServerState>,
    Path(group_id): Path<String>,
) -> Result<Json<ApiResponse<ExpenseList>>, ServerError> {
    let group_id = parse_group_id(&group_id)?;
    let listing = state.engine.read().await.list_expenses(group_id)?;
    Ok(Json(ApiResponse::ok(views::expense_list(&listing))))
}
