use std::sync::Arc;

use crate::app::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::NewsFetcher;
use crate::session::MemorySessionStore;

pub struct AppContext {
    pub config: Arc<Config>,
    pub fetcher: Arc<dyn NewsFetcher + Send + Sync>,
    pub session: Arc<MemorySessionStore>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn NewsFetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.api)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Wire a context around an arbitrary fetcher. Tests use this to swap
    /// in a mock without touching the network.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn NewsFetcher + Send + Sync>) -> Self {
        Self {
            config: Arc::new(config),
            fetcher,
            session: Arc::new(MemorySessionStore::new()),
        }
    }
}
