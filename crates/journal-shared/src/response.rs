//! Plain-text replies of the mutation routes.

use std::fmt;

/// Success message sent back by `PUT`, `PATCH` and `DELETE /posts/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationMessage {
    Replaced,
    Patched,
    Deleted,
}

impl MutationMessage {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationMessage::Replaced => "The post is updated successfully",
            MutationMessage::Patched => "The related field is updated successfully",
            MutationMessage::Deleted => "The post is deleted successfully",
        }
    }
}

impl fmt::Display for MutationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
