pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{Headlines, HeadlinesQuery};

#[async_trait]
pub trait NewsFetcher {
    async fn headlines(&self, query: &HeadlinesQuery) -> Result<Headlines>;
}
