//! # Journal Shared
//!
//! Wire types shared by the web app and its clients: query strings,
//! form and JSON bodies, and the fixed plain-text replies.

pub mod dto;
pub mod response;

pub use response::MutationMessage;
