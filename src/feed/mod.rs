pub mod state;
pub mod store;
pub mod worker;

pub use state::{FeedPhase, GENERIC_FETCH_ERROR};
pub use store::{FeedQuery, FeedStore};
pub use worker::{FeedWorker, DEBOUNCE_QUIET};
