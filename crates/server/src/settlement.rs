//! Settlement endpoint.

use api_types::{ApiResponse, settlement::SettlementPair};
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, groups::parse_group_id, server::ServerState, views};

/// Handle requests for the transfers that settle a group.
pub async fn get(
    State(state): State<ServerState>,
    Path(group_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<SettlementPair>>>, ServerError> {
    let group_id = parse_group_id(&group_id)?;
    let pairs = state.engine.read().await.settlement(group_id)?;
    Ok(Json(ApiResponse::ok(
        pairs.iter().map(views::settlement_pair).collect(),
    )))
}
