//! Compose form and post creation.

use actix_web::http::header;
use actix_web::{HttpResponse, web};

use journal_shared::dto::ComposeForm;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// GET /compose
pub async fn form(state: web::Data<AppState>) -> HttpResponse {
    state.views.respond(Ok(state.views.compose()))
}

/// POST /compose
pub async fn submit(state: web::Data<AppState>, form: web::Form<ComposeForm>) -> HttpResponse {
    match state.posts.create(form.into_inner().into()).await {
        Ok(post) => {
            tracing::info!(post_id = %post.id, country = %post.country, "Post created");
            HttpResponse::Found()
                .insert_header((header::LOCATION, "/"))
                .finish()
        }
        Err(err) => state.views.error_response(&AppError::from(err)),
    }
}
