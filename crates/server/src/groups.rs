//! Group and member endpoints.

use api_types::{
    ApiResponse,
    group::{Group, GroupNew, Member, MemberNew, MemberRemoved},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState, views};

/// Group ids that are not valid UUIDs cannot name a group.
pub(crate) fn parse_group_id(raw: &str) -> Result<Uuid, ServerError> {
    Uuid::parse_str(raw)
        .map_err(|_| engine::EngineError::KeyNotFound(format!("group {raw}")).into())
}

fn member_command(payload: MemberNew) -> engine::MemberNew {
    engine::MemberNew {
        member_id: payload.member_id,
        name: payload.name.unwrap_or_default(),
        mobile: payload.mobile.unwrap_or_default(),
        payment_handle: payload.payment_handle,
    }
}

/// Handle requests for creating a new group.
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<GroupNew>, JsonRejection>,
) -> Result<Json<ApiResponse<Group>>, ServerError> {
    let Json(payload) = payload?;
    let command = engine::GroupNew {
        name: payload.group_name.unwrap_or_default(),
        description: payload.description,
        members: payload
            .members
            .unwrap_or_default()
            .into_iter()
            .map(member_command)
            .collect(),
    };

    let group = state.engine.write().await.create_group(command)?;
    tracing::info!(group_id = %group.id, "group created");

    Ok(Json(ApiResponse::ok_with_message(
        views::group(&group),
        "Group created",
    )))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(group_id): Path<String>,
) -> Result<Json<ApiResponse<Group>>, ServerError> {
    let group_id = parse_group_id(&group_id)?;
    let engine = state.engine.read().await;
    let group = engine.group(group_id)?;
    Ok(Json(ApiResponse::ok(views::group(group))))
}

pub async fn add_member(
    State(state): State<ServerState>,
    Path(group_id): Path<String>,
    payload: Result<Json<MemberNew>, JsonRejection>,
) -> Result<Json<ApiResponse<Member>>, ServerError> {
    let group_id = parse_group_id(&group_id)?;
    let Json(payload) = payload?;

    let member = state
        .engine
        .write()
        .await
        .add_member(group_id, member_command(payload))?;

    Ok(Json(ApiResponse::ok_with_message(
        views::member(&member),
        "Member added",
    )))
}

pub async fn remove_member(
    State(state): State<ServerState>,
    Path((group_id, member_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<MemberRemoved>>, ServerError> {
    let group_id = parse_group_id(&group_id)?;
    let member_id = Uuid::parse_str(&member_id)
        .map_err(|_| engine::EngineError::KeyNotFound(format!("member {member_id}")))?;

    state
        .engine
        .write()
        .await
        .remove_member(group_id, member_id)?;

    Ok(Json(ApiResponse::ok_with_message(
        MemberRemoved { removed: true },
        "Member removed",
    )))
}
