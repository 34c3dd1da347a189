use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/groups", post(handlers::create_group_form))
        .route("/groups/join", post(handlers::join_group_form))
        .route("/groups/:id", get(handlers::group_page))
        .route("/groups/:id/challenges", post(handlers::create_challenge_form))
        .route("/challenges/:id/check-in", post(handlers::check_in_form))
        .route("/api/groups", get(handlers::list_groups).post(handlers::create_group))
        .route("/api/groups/join", post(handlers::join_group))
        .route("/api/groups/:id", get(handlers::get_group))
        .route("/api/groups/:id/challenges", post(handlers::create_challenge))
        .route("/api/invites/:code", get(handlers::preview_invite))
        .route("/api/challenges/:id/check-in", post(handlers::check_in))
        .with_state(state)
}
