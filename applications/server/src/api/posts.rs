/// Posts API routes
use crate::{api::InsertResult, error::Result, state::AppState};
use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snapfeed_core::{parse_object_id, CreatePost, Post};
use snapfeed_storage::posts;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub caption: String,
    #[serde(default, rename = "imageURL")]
    pub image_url: String,
    /// Overrides the server's receive time when present
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub caption: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_hex(),
            caption: post.caption,
            image_url: post.image_url,
            timestamp: post.timestamp,
        }
    }
}

/// POST /posts
/// Publish a new post
pub async fn create_post(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<Json<InsertResult>> {
    let received_at = Utc::now();
    let Json(req) = payload?;

    let post = CreatePost {
        caption: req.caption,
        image_url: req.image_url,
        timestamp: req.timestamp.unwrap_or(received_at),
    };

    let id = posts::create(app_state.store.as_ref(), &post).await?;
    tracing::info!(post_id = %id, "Created post");

    Ok(Json(InsertResult::from(id)))
}

/// GET /posts/:id
/// Get a post by ID
pub async fn get_post(
    path: std::result::Result<Path<String>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<PostResponse>> {
    let Path(id) = path?;
    let id = parse_object_id(&id)?;
    let post = posts::get(app_state.store.as_ref(), id).await?;
    Ok(Json(PostResponse::from(post)))
}

/// GET /posts/users/:id
/// List posts for a user
///
/// Posts do not record an author, so every stored post is returned; the
/// path id is only checked for well-formedness.
pub async fn list_user_posts(
    path: std::result::Result<Path<String>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<PostResponse>>> {
    let Path(id) = path?;
    let user_id = parse_object_id(&id)?;
    tracing::debug!(%user_id, "Listing posts");

    let all = posts::list(app_state.store.as_ref()).await?;
    Ok(Json(all.into_iter().map(PostResponse::from).collect()))
}
