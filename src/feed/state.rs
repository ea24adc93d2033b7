use crate::domain::{Article, Headlines};

/// The single user-facing message all fetch failures collapse to.
pub const GENERIC_FETCH_ERROR: &str = "Something went wrong. Try again.";

/// Fetch lifecycle state the UI renders from.
#[derive(Debug, Clone, Default)]
pub enum FeedPhase {
    #[default]
    Loading,
    Ready(Headlines),
    Failed(String),
}

impl FeedPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, FeedPhase::Loading)
    }

    pub fn articles(&self) -> &[Article] {
        match self {
            FeedPhase::Ready(headlines) => &headlines.articles,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FeedPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
