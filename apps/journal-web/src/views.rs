//! HTML views rendered from the Mustache templates under `templates/`.

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use chrono::DateTime;
use ramhorns::{Content, Template};

use journal_core::domain::{HomePage, PageRequest, Post, PostDetail, PostSummary};

use crate::middleware::error::{AppError, AppResult};

#[derive(Content)]
struct Layout<'a> {
    title: &'a str,
    body: &'a str,
}

#[derive(Content)]
struct PostCard {
    link: String,
    title: String,
    image_url: String,
}

impl From<&PostSummary> for PostCard {
    fn from(summary: &PostSummary) -> Self {
        Self {
            link: post_link(summary),
            title: summary.title.clone(),
            image_url: summary.image_url.clone(),
        }
    }
}

#[derive(Content)]
struct CountryItem {
    link: String,
    country: String,
    count: u64,
}

#[derive(Content)]
struct PageLink {
    number: u64,
    size: u64,
    current: bool,
}

#[derive(Content)]
struct HomeView {
    latest_posts: Vec<PostCard>,
    country_count: Vec<CountryItem>,
    pages: Vec<PageLink>,
    prev: Option<PageLink>,
    next: Option<PageLink>,
    current_page: u64,
    num_of_pages: u64,
}

#[derive(Content)]
struct FullPost {
    link: String,
    title: String,
    image_url: String,
    content: String,
    country: String,
    country_link: String,
    date: String,
}

impl From<&Post> for FullPost {
    fn from(post: &Post) -> Self {
        Self {
            link: format!("/posts/{}", post.id),
            title: post.title.clone(),
            image_url: post.image_url.clone(),
            content: post.content.clone(),
            country: post.country.clone(),
            country_link: country_link(&post.country),
            date: format_date(post.date_created),
        }
    }
}

#[derive(Content)]
struct PostView {
    post: FullPost,
    top_posts: Vec<PostCard>,
}

#[derive(Content)]
struct ResultsView<'a> {
    heading: &'a str,
    found_posts: Vec<FullPost>,
}

#[derive(Content)]
struct ErrorView<'a> {
    status: u64,
    title: &'a str,
    message: String,
}

fn post_link(summary: &PostSummary) -> String {
    format!("/posts/{}", summary.id)
}

fn country_link(country: &str) -> String {
    format!("/country/{}", urlencoding::encode(country))
}

/// "March 4, 2024" from epoch milliseconds.
fn format_date(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

fn page_link(request: &PageRequest, number: u64) -> PageLink {
    PageLink {
        number,
        size: request.size,
        current: number == request.page,
    }
}

const COMPOSE: &str = include_str!("../templates/compose.html");
const ABOUT: &str = include_str!("../templates/about.html");

/// Compiled templates, shared by every worker.
pub struct Views {
    layout: Template<'static>,
    home: Template<'static>,
    post: Template<'static>,
    results: Template<'static>,
    error: Template<'static>,
}

impl Views {
    /// Compile the bundled templates.
    pub fn load() -> Result<Self, ramhorns::Error> {
        Ok(Self {
            layout: Template::new(include_str!("../templates/layout.html"))?,
            home: Template::new(include_str!("../templates/home.html"))?,
            post: Template::new(include_str!("../templates/post.html"))?,
            results: Template::new(include_str!("../templates/results.html"))?,
            error: Template::new(include_str!("../templates/error.html"))?,
        })
    }

    fn page(&self, title: &str, body: &str) -> String {
        self.layout.render(&Layout { title, body })
    }

    pub fn home(&self, page: &HomePage) -> String {
        let request = &page.request;
        let view = HomeView {
            latest_posts: page.latest_posts.iter().map(PostCard::from).collect(),
            country_count: page
                .country_counts
                .iter()
                .map(|c| CountryItem {
                    link: country_link(&c.country),
                    country: c.country.clone(),
                    count: c.count,
                })
                .collect(),
            pages: (1..=page.num_of_pages)
                .map(|number| page_link(request, number))
                .collect(),
            prev: (request.page > 1).then(|| page_link(request, request.page - 1)),
            next: (request.page < page.num_of_pages).then(|| page_link(request, request.page + 1)),
            current_page: request.page,
            num_of_pages: page.num_of_pages,
        };
        self.page("Latest posts", &self.home.render(&view))
    }

    pub fn post(&self, detail: &PostDetail) -> String {
        let view = PostView {
            post: FullPost::from(&detail.post),
            top_posts: detail.top_posts.iter().map(PostCard::from).collect(),
        };
        self.page(&detail.post.title, &self.post.render(&view))
    }

    pub fn results(&self, heading: &str, posts: &[Post]) -> String {
        let view = ResultsView {
            heading,
            found_posts: posts.iter().map(FullPost::from).collect(),
        };
        self.page(heading, &self.results.render(&view))
    }

    pub fn compose(&self) -> String {
        self.page("Compose", COMPOSE)
    }

    pub fn about(&self) -> String {
        self.page("About", ABOUT)
    }

    pub fn error(&self, err: &AppError) -> String {
        let view = ErrorView {
            status: u64::from(err.status_code().as_u16()),
            title: err.title(),
            message: err.to_string(),
        };
        self.page(err.title(), &self.error.render(&view))
    }

    pub fn error_response(&self, err: &AppError) -> HttpResponse {
        HttpResponse::build(err.status_code())
            .content_type(ContentType::html())
            .body(self.error(err))
    }

    /// Answer a page route: the rendered page, or the error view.
    pub fn respond(&self, result: AppResult<String>) -> HttpResponse {
        match result {
            Ok(html) => HttpResponse::Ok().content_type(ContentType::html()).body(html),
            Err(err) => self.error_response(&err),
        }
    }
}
