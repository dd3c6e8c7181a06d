//! Domain entities - the core business objects.

mod listing;
mod post;

pub use listing::{
    CountryCount, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, HomePage, PageRequest, PostDetail, TOP_POSTS,
    sort_by_popularity,
};
pub use post::{NewPost, Post, PostPatch, PostReplacement, PostSummary};
