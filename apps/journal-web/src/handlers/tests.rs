use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use uuid::Uuid;

use journal_core::domain::{NewPost, Post};
use journal_core::ports::{BaseRepository, PostRepository};
use journal_infra::InMemoryPostRepository;

use super::configure_routes;
use crate::state::AppState;

fn fixture() -> (Arc<InMemoryPostRepository>, AppState) {
    let repo = Arc::new(InMemoryPostRepository::new());
    let state = AppState::with_repository(repo.clone(), "memory").expect("templates compile");
    (repo, state)
}

async fn seed(repo: &InMemoryPostRepository, country: &str, title: &str, date_created: i64) -> Post {
    let post = Post::created_at(
        NewPost {
            country: country.into(),
            title: title.into(),
            image_url: format!("https://img.example/{date_created}.jpg"),
            content: format!("Notes from {title}"),
        },
        date_created,
    );
    repo.create(post).await.unwrap()
}

fn text(body: actix_web::web::Bytes) -> String {
    String::from_utf8(body.to_vec()).unwrap()
}

#[actix_web::test]
async fn listing_pages_newest_first() {
    let (repo, state) = fixture();
    for i in 1..=8 {
        seed(&repo, "Chile", &format!("Stop {i}"), i).await;
    }
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/?page=2&size=3").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = text(test::read_body(resp).await);

    let five = body.find("Stop 5").expect("page 2 starts with Stop 5");
    let four = body.find("Stop 4").expect("Stop 4 on page 2");
    let three = body.find("Stop 3").expect("Stop 3 on page 2");
    assert!(five < four && four < three);
    assert!(!body.contains("Stop 8"));
    assert!(!body.contains("Stop 2"));
    assert!(body.contains("Page 2 of 3"));
    assert!(body.contains("Chile</a> (8)"));
}

#[actix_web::test]
async fn listing_past_the_last_page_is_empty() {
    let (repo, state) = fixture();
    seed(&repo, "Chile", "Santiago", 1).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/?page=9").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = text(test::read_body(resp).await);
    assert!(body.contains("No posts on this page."));
    assert!(body.contains("Page 9 of 1"));
}

#[actix_web::test]
async fn listing_rejects_bad_page_numbers() {
    let (_, state) = fixture();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    for uri in ["/?page=abc", "/?size=0", "/?page=-1"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = text(test::read_body(resp).await);
        assert!(body.contains("400 Bad Request"), "{uri}");
    }
}

#[actix_web::test]
async fn listing_rejects_pages_beyond_store_offsets() {
    let (repo, state) = fixture();
    seed(&repo, "Japan", "Tokyo", 1).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    for uri in [
        "/?size=18446744073709551615",
        "/?page=9223372036854775809&size=1",
        "/?page=3&size=9223372036854775807",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }

    let req = test::TestRequest::get()
        .uri("/?page=1&size=9223372036854775807")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn compose_creates_post_and_redirects_home() {
    let (repo, state) = fixture();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let before = chrono::Utc::now().timestamp_millis();
    let req = test::TestRequest::post()
        .uri("/compose")
        .set_form([
            ("postCountry", "Japan"),
            ("postTitle", "Tokyo"),
            ("postImage", "u"),
            ("postBody", "c"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    let after = chrono::Utc::now().timestamp_millis();

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

    let posts = repo.find_by_country("Japan").await.unwrap();
    assert_eq!(posts.len(), 1);
    let post = &posts[0];
    assert_eq!(
        (post.title.as_str(), post.image_url.as_str(), post.content.as_str()),
        ("Tokyo", "u", "c")
    );
    assert!(post.date_created >= before && post.date_created <= after);

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", post.id))
        .to_request();
    let body = text(test::call_and_read_body(&app, req).await);
    assert!(body.contains("<h1>Tokyo</h1>"));
}

#[actix_web::test]
async fn post_page_shows_top_posts_and_reports_missing_ids() {
    let (repo, state) = fixture();
    let mut last = None;
    for i in 1..=7 {
        last = Some(seed(&repo, "Peru", &format!("Trail {i}"), i).await);
    }
    let last = last.unwrap();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", last.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = text(test::read_body(resp).await);
    assert!(body.contains("Trail 3"));
    assert!(!body.contains("Trail 2"));

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", Uuid::new_v4()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/posts/not-an-id").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn put_replaces_every_field() {
    let (repo, state) = fixture();
    let post = seed(&repo, "Japan", "Tokyo", 10).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", post.id))
        .set_json(serde_json::json!({
            "country": "Korea",
            "title": "Seoul",
            "imageUrl": "v",
            "content": "d",
            "dateCreated": 99
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(text(test::read_body(resp).await), "The post is updated successfully");

    let stored = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.id, post.id);
    assert_eq!(
        (
            stored.country.as_str(),
            stored.title.as_str(),
            stored.image_url.as_str(),
            stored.content.as_str(),
            stored.date_created
        ),
        ("Korea", "Seoul", "v", "d", 99)
    );
}

#[actix_web::test]
async fn put_without_every_field_is_rejected() {
    let (repo, state) = fixture();
    let post = seed(&repo, "Japan", "Tokyo", 10).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", post.id))
        .set_json(serde_json::json!({ "title": "Seoul" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = text(test::read_body(resp).await);
    assert!(body.starts_with("An error occurred while reading the request body."));

    let stored = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Tokyo");
}

#[actix_web::test]
async fn patch_form_keeps_omitted_fields() {
    let (repo, state) = fixture();
    let post = seed(&repo, "Japan", "Tokyo", 10).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::patch()
        .uri(&format!("/posts/{}", post.id))
        .set_form([("title", "Kyoto")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        text(test::read_body(resp).await),
        "The related field is updated successfully"
    );

    let stored = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Kyoto");
    assert_eq!(stored.country, post.country);
    assert_eq!(stored.image_url, post.image_url);
    assert_eq!(stored.content, post.content);
    assert_eq!(stored.date_created, post.date_created);
}

#[actix_web::test]
async fn patch_rejects_unknown_fields_and_missing_posts() {
    let (repo, state) = fixture();
    let post = seed(&repo, "Japan", "Tokyo", 10).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::patch()
        .uri(&format!("/posts/{}", post.id))
        .set_json(serde_json::json!({ "author": "mallory" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::patch()
        .uri(&format!("/posts/{}", Uuid::new_v4()))
        .set_json(serde_json::json!({ "title": "Kyoto" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = text(test::read_body(resp).await);
    assert!(body.starts_with("An error occurred while changing the document.\n"));

    let req = test::TestRequest::patch()
        .uri(&format!("/posts/{}", post.id))
        .set_json(serde_json::json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_makes_later_reads_fail() {
    let (repo, state) = fixture();
    let post = seed(&repo, "Japan", "Tokyo", 10).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;
    let uri = format!("/posts/{}", post.id);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(text(test::read_body(resp).await), "The post is deleted successfully");

    let req = test::TestRequest::get().uri(&uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = text(test::read_body(resp).await);
    assert!(body.starts_with("An error occurred while deleting the document.\n"));
}

#[actix_web::test]
async fn country_filter_is_exact() {
    let (repo, state) = fixture();
    seed(&repo, "Japan", "Tokyo", 1).await;
    seed(&repo, "Korea", "Seoul", 2).await;
    seed(&repo, "japan", "Osaka", 3).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/country/Japan").to_request();
    let body = text(test::call_and_read_body(&app, req).await);
    assert!(body.contains("Tokyo"));
    assert!(!body.contains("Seoul"));
    assert!(!body.contains("Osaka"));

    let req = test::TestRequest::get().uri("/country/Korea").to_request();
    let body = text(test::call_and_read_body(&app, req).await);
    assert!(body.contains("Seoul"));
    assert!(!body.contains("Tokyo"));
}

#[actix_web::test]
async fn search_finds_keywords_and_ignores_blank_queries() {
    let (repo, state) = fixture();
    seed(&repo, "Italy", "Rome", 1).await;
    seed(&repo, "Norway", "Bergen", 2).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/search?q=norway").to_request();
    let body = text(test::call_and_read_body(&app, req).await);
    assert!(body.contains("Bergen"));
    assert!(!body.contains("Rome"));

    for uri in ["/search", "/search?q=", "/search?q=%20%20"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let body = text(test::read_body(resp).await);
        assert!(body.contains("No posts found."), "{uri}");
    }
}

#[actix_web::test]
async fn static_pages_and_health() {
    let (_, state) = fixture();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/compose").to_request();
    let body = text(test::call_and_read_body(&app, req).await);
    assert!(body.contains("name=\"postBody\""));

    let req = test::TestRequest::get().uri("/about").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/health").to_request();
    let health: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["store"], "memory");
}
