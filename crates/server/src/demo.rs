//! Demo data endpoint, only routed when demo mode is on.

use api_types::{ApiResponse, group::Group};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState, views};

pub async fn reset(
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<Group>>, ServerError> {
    let mut engine = state.engine.write().await;
    let group_id = engine.reset_demo()?;
    let group = engine.group(group_id)?;
    Ok(Json(ApiResponse::ok_with_message(
        views::group(group),
        "Demo data reset",
    )))
}
