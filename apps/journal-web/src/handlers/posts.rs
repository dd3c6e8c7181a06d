//! Single-post page and the plain-text mutation routes.

use actix_web::{Either, HttpResponse, web};
use uuid::Uuid;

use journal_shared::MutationMessage;
use journal_shared::dto::{PatchPostRequest, ReplacePostRequest};

use crate::middleware::error::{AppError, AppResult, MutationError};
use crate::state::AppState;

/// Bodies are accepted as JSON or as a urlencoded form.
type Body<T> = Either<web::Json<T>, web::Form<T>>;

fn into_inner<T>(body: Body<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::Validation(format!("'{raw}' is not a valid post id")))
}

fn text(message: MutationMessage) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(actix_web::http::header::ContentType::plaintext())
        .body(message.as_str())
}

/// GET /posts/{post_id}
pub async fn show(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    state.views.respond(render_post(&state, &path).await)
}

async fn render_post(state: &AppState, raw_id: &str) -> AppResult<String> {
    let id = parse_post_id(raw_id)?;
    let detail = state.posts.view(id).await?;
    Ok(state.views.post(&detail))
}

/// PUT /posts/{post_id}
pub async fn replace(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: Body<ReplacePostRequest>,
) -> Result<HttpResponse, MutationError> {
    const ACTION: &str = "replacing the document";

    let id = parse_post_id(&path).map_err(MutationError::while_doing(ACTION))?;
    state
        .posts
        .replace(id, into_inner(body).into())
        .await
        .map_err(MutationError::while_doing(ACTION))?;

    tracing::info!(post_id = %id, "Post replaced");
    Ok(text(MutationMessage::Replaced))
}

/// PATCH /posts/{post_id}
pub async fn patch(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: Body<PatchPostRequest>,
) -> Result<HttpResponse, MutationError> {
    const ACTION: &str = "changing the document";

    let id = parse_post_id(&path).map_err(MutationError::while_doing(ACTION))?;
    state
        .posts
        .patch(id, into_inner(body).into())
        .await
        .map_err(MutationError::while_doing(ACTION))?;

    tracing::info!(post_id = %id, "Post fields updated");
    Ok(text(MutationMessage::Patched))
}

/// DELETE /posts/{post_id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, MutationError> {
    const ACTION: &str = "deleting the document";

    let id = parse_post_id(&path).map_err(MutationError::while_doing(ACTION))?;
    state
        .posts
        .delete(id)
        .await
        .map_err(MutationError::while_doing(ACTION))?;

    tracing::info!(post_id = %id, "Post deleted");
    Ok(text(MutationMessage::Deleted))
}
