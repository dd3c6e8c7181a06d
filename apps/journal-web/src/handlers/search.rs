//! Keyword search and the per-country listing.

use actix_web::{HttpResponse, web};

use journal_shared::dto::SearchQuery;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /search?q=
pub async fn search(state: web::Data<AppState>, query: web::Query<SearchQuery>) -> HttpResponse {
    let q = query.into_inner().q.unwrap_or_default();
    state.views.respond(render_search(&state, &q).await)
}

async fn render_search(state: &AppState, q: &str) -> AppResult<String> {
    let found = state.posts.search(q).await?;
    tracing::debug!(query = q, hits = found.len(), "Search finished");

    let heading = format!("Results for \"{}\"", q.trim());
    Ok(state.views.results(&heading, &found))
}

/// GET /country/{name}
pub async fn by_country(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    state.views.respond(render_country(&state, &path).await)
}

async fn render_country(state: &AppState, country: &str) -> AppResult<String> {
    let found = state.posts.by_country(country).await?;
    Ok(state.views.results(&format!("Posts from {country}"), &found))
}
