//! Form-submission API and the pages that drive it.
//!
//! Mutations answer with a redirect to the listing page whether or not the
//! target post exists. Updates overwrite title, content and author
//! together, since the editor form always submits all three.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Serialize;

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::store::{NewPost, Post, PostId, PostStore};
use crate::views::{ViewError, ViewRenderer, INDEX_VIEW, MODIFY_VIEW};

const HOME: &str = "/";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/new", get(new_post))
        .route("/edit/{id}", get(edit_post))
        .route("/api/posts", post(create_post))
        .route("/api/posts/{id}", post(update_post))
        .route("/api/posts/delete/{id}", get(delete_post))
}

/// Data for the listing page.
#[derive(Debug, Clone, Serialize)]
pub struct ListingView {
    pub posts: Vec<Post>,
}

/// Data for the editor page. `post` is `None` for a new post, and also
/// when the edited id does not exist.
#[derive(Debug, Clone, Serialize)]
pub struct EditorView {
    pub heading: &'static str,
    pub submit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Post>,
}

pub fn listing_view(store: &PostStore) -> ListingView {
    ListingView {
        posts: store.list_all(),
    }
}

/// Editor data for `/new` when `id` is `None`, or for `/edit/:id`.
pub fn editor_view(store: &PostStore, id: Option<PostId>) -> EditorView {
    match id {
        None => EditorView {
            heading: "New Post",
            submit: "Create Post",
            post: None,
        },
        Some(id) => EditorView {
            heading: "Edit Post",
            submit: "Update Post",
            post: store.get(id).ok(),
        },
    }
}

fn render<T: Serialize>(
    views: &dyn ViewRenderer,
    view: &str,
    data: &T,
) -> Result<Html<String>, ApiError> {
    let context = serde_json::to_value(data).map_err(|e| ViewError::InvalidContext {
        view: view.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Html(views.render(view, &context)?))
}

/// `302 Found` back to the listing page.
fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, HOME)]).into_response()
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render(state.views.as_ref(), INDEX_VIEW, &listing_view(&state.store))
}

pub async fn new_post(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render(state.views.as_ref(), MODIFY_VIEW, &editor_view(&state.store, None))
}

pub async fn edit_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let data = editor_view(&state.store, Some(PostId::from_path(&id)));
    render(state.views.as_ref(), MODIFY_VIEW, &data)
}

pub async fn create_post(State(state): State<AppState>, Form(fields): Form<NewPost>) -> Response {
    let post = state.store.create(fields);
    tracing::info!(post_id = %post.id, "Post created via form");
    redirect_home()
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<NewPost>,
) -> Response {
    if let Err(e) = state.store.replace(PostId::from_path(&id), fields) {
        tracing::debug!(error = %e, "Form update skipped");
    }
    redirect_home()
}

pub async fn delete_post(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    if let Err(e) = state.store.delete(PostId::from_path(&id)) {
        tracing::debug!(error = %e, "Form delete skipped");
    }
    redirect_home()
}
