//! HTTP handlers and route configuration.

mod compose;
mod health;
mod home;
mod posts;
mod search;

#[cfg(test)]
mod tests;

use actix_web::web;

use crate::middleware::error::body_rejected;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::index))
        .route("/about", web::get().to(home::about))
        .route("/health", web::get().to(health::health_check))
        .route("/search", web::get().to(search::search))
        .route("/country/{name}", web::get().to(search::by_country))
        .service(
            web::resource("/compose")
                .route(web::get().to(compose::form))
                .route(web::post().to(compose::submit)),
        )
        .service(
            web::resource("/posts/{post_id}")
                .app_data(web::JsonConfig::default().error_handler(|err, _| body_rejected(err)))
                .app_data(web::FormConfig::default().error_handler(|err, _| body_rejected(err)))
                .route(web::get().to(posts::show))
                .route(web::put().to(posts::replace))
                .route(web::patch().to(posts::patch))
                .route(web::delete().to(posts::delete)),
        );
}
