//! Listing page.

use actix_web::{HttpResponse, web};

use journal_core::domain::PageRequest;
use journal_shared::dto::ListingQuery;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /?page=&size=
pub async fn index(state: web::Data<AppState>, query: web::Query<ListingQuery>) -> HttpResponse {
    state.views.respond(render_index(&state, query.into_inner()).await)
}

async fn render_index(state: &AppState, query: ListingQuery) -> AppResult<String> {
    let request = PageRequest::parse(query.page.as_deref(), query.size.as_deref())?;
    let page = state.posts.home(request).await?;

    tracing::debug!(
        page = request.page,
        size = request.size,
        total = page.total,
        "Rendering listing"
    );
    Ok(state.views.home(&page))
}

/// GET /about
pub async fn about(state: web::Data<AppState>) -> HttpResponse {
    state.views.respond(Ok(state.views.about()))
}
