//! JSON REST API over the post store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::http::request::PostFields;
use crate::http::response::{ApiError, Message};
use crate::http::server::AppState;
use crate::store::{NewPost, Post, PostId, PostPatch};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).patch(update_post).delete(delete_post),
        )
}

pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.store.list_all())
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let post = state.store.get(PostId::from_path(&id))?;
    Ok(Json(post))
}

pub async fn create_post(
    State(state): State<AppState>,
    PostFields(fields): PostFields<NewPost>,
) -> (StatusCode, Json<Post>) {
    let post = state.store.create(fields);
    tracing::info!(post_id = %post.id, "Post created via JSON API");
    (StatusCode::CREATED, Json(post))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    PostFields(patch): PostFields<PostPatch>,
) -> Result<Json<Post>, ApiError> {
    let post = state.store.update(PostId::from_path(&id), patch)?;
    Ok(Json(post))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    state.store.delete(PostId::from_path(&id))?;
    Ok(Json(Message::new("Post deleted")))
}
