use crate::errors::{AppError, HtmlError};
use crate::models::{
    Challenge, ChallengeId, CheckInParams, CheckInReceipt, CreateChallengeParams,
    CreateGroupParams, Group, GroupId, GroupSummary, JoinGroupRequest,
};
use crate::state::AppState;
use crate::ui::{render_group, render_index};
use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use std::str::FromStr;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let registry = state.registry.lock().await;
    Html(render_index(&registry.list_public_groups()))
}

pub async fn group_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, HtmlError> {
    let group_id = parse_id::<GroupId>(&id, "group")?;
    let registry = state.registry.lock().await;
    let group = registry
        .group(group_id)
        .ok_or_else(|| AppError::not_found(format!("group {id} not found")))?;
    Ok(Html(render_group(group)))
}

pub async fn create_group_form(
    State(state): State<AppState>,
    Form(params): Form<CreateGroupParams>,
) -> Result<Redirect, HtmlError> {
    let group = state.registry.lock().await.create_group(params)?;
    Ok(Redirect::to(&group_path(group.id)))
}

pub async fn join_group_form(
    State(state): State<AppState>,
    Form(payload): Form<JoinGroupRequest>,
) -> Result<Redirect, HtmlError> {
    let group = state.registry.lock().await.join_group(&payload.code)?;
    Ok(Redirect::to(&group_path(group.id)))
}

pub async fn create_challenge_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(params): Form<CreateChallengeParams>,
) -> Result<Redirect, HtmlError> {
    let group_id = parse_id::<GroupId>(&id, "group")?;
    state
        .registry
        .lock()
        .await
        .create_challenge(group_id, params)?;
    Ok(Redirect::to(&group_path(group_id)))
}

pub async fn check_in_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(params): Form<CheckInParams>,
) -> Result<Redirect, HtmlError> {
    let challenge_id = parse_id::<ChallengeId>(&id, "challenge")?;
    let receipt = state.registry.lock().await.check_in(challenge_id, params)?;
    Ok(Redirect::to(&group_path(receipt.group_id)))
}

pub async fn list_groups(State(state): State<AppState>) -> Json<Vec<GroupSummary>> {
    let registry = state.registry.lock().await;
    Json(
        registry
            .list_public_groups()
            .into_iter()
            .map(GroupSummary::from)
            .collect(),
    )
}

pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Group>, AppError> {
    let group_id = parse_id::<GroupId>(&id, "group")?;
    let registry = state.registry.lock().await;
    registry
        .group(group_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("group {id} not found")))
}

pub async fn create_group(
    State(state): State<AppState>,
    Json(params): Json<CreateGroupParams>,
) -> Result<(StatusCode, Json<Group>), AppError> {
    let group = state.registry.lock().await.create_group(params)?;
    Ok((StatusCode::CREATED, Json(group)))
}

pub async fn join_group(
    State(state): State<AppState>,
    Json(payload): Json<JoinGroupRequest>,
) -> Result<Json<Group>, AppError> {
    let group = state.registry.lock().await.join_group(&payload.code)?;
    Ok(Json(group))
}

pub async fn preview_invite(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<GroupSummary>, AppError> {
    let registry = state.registry.lock().await;
    registry
        .find_by_invite_code(&code)
        .map(|group| Json(GroupSummary::from(group)))
        .ok_or_else(|| AppError::not_found(format!("invite code {code} not found")))
}

pub async fn create_challenge(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(params): Json<CreateChallengeParams>,
) -> Result<(StatusCode, Json<Challenge>), AppError> {
    let group_id = parse_id::<GroupId>(&id, "group")?;
    let challenge = state
        .registry
        .lock()
        .await
        .create_challenge(group_id, params)?;
    Ok((StatusCode::CREATED, Json(challenge)))
}

pub async fn check_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(params): Json<CheckInParams>,
) -> Result<Json<CheckInReceipt>, AppError> {
    let challenge_id = parse_id::<ChallengeId>(&id, "challenge")?;
    let receipt = state.registry.lock().await.check_in(challenge_id, params)?;
    Ok(Json(receipt))
}

fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::not_found(format!("{what} {raw} not found")))
}

fn group_path(id: GroupId) -> String {
    format!("/groups/{id}")
}
