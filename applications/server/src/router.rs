/// HTTP route table
use crate::{api, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        // Users
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        // Posts
        .route("/posts", post(api::posts::create_post))
        .route("/posts/:id", get(api::posts::get_post))
        .route("/posts/users/:id", get(api::posts::list_user_posts))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(app_state)
}
