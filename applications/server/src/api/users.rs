/// Users API routes
use crate::{api::InsertResult, error::Result, state::AppState};
use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use snapfeed_core::{parse_object_id, User};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Public view of a user; the password digest is never returned
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
        }
    }
}

/// POST /users
/// Register a new user
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<InsertResult>> {
    let Json(req) = payload?;

    let id = app_state
        .accounts
        .register(&req.name, &req.email, &req.password)
        .await?;

    Ok(Json(InsertResult::from(id)))
}

/// GET /users/:id
/// Get a user by ID
pub async fn get_user(
    path: std::result::Result<Path<String>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<UserResponse>> {
    let Path(id) = path?;
    let id = parse_object_id(&id)?;
    let user = app_state.accounts.profile(id).await?;
    Ok(Json(UserResponse::from(user)))
}
