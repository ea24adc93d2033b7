use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::sleep;

use crate::config::ApiConfig;
use crate::domain::HeadlinesQuery;
use crate::feed::state::{FeedPhase, GENERIC_FETCH_ERROR};
use crate::feed::store::FeedQuery;
use crate::fetcher::NewsFetcher;

/// Quiet period after the last query change before a request fires.
pub const DEBOUNCE_QUIET: Duration = Duration::from_millis(900);

/// Handle to the background feed worker.
///
/// The worker subscribes to the feed store, debounces query changes, and
/// publishes [`FeedPhase`] updates the UI renders from. Requests are
/// handled one at a time; an in-flight request is never cancelled, the
/// worker simply finishes it before looking at the next query.
pub struct FeedWorker {
    phase_rx: watch::Receiver<FeedPhase>,
    refresh_tx: mpsc::Sender<()>,
}

impl FeedWorker {
    pub fn spawn(
        fetcher: Arc<dyn NewsFetcher + Send + Sync>,
        api: ApiConfig,
        query_rx: watch::Receiver<FeedQuery>,
    ) -> Self {
        let (phase_tx, phase_rx) = watch::channel(FeedPhase::Loading);
        let (refresh_tx, refresh_rx) = mpsc::channel(1);

        tokio::spawn(run(fetcher, api, query_rx, phase_tx, refresh_rx));

        Self {
            phase_rx,
            refresh_tx,
        }
    }

    /// Re-issue the current query immediately, bypassing the debounce.
    pub fn refresh(&self) {
        let _ = self.refresh_tx.try_send(());
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedPhase> {
        self.phase_rx.clone()
    }
}

enum Trigger {
    Debounced,
    Immediate,
    Shutdown,
}

async fn run(
    fetcher: Arc<dyn NewsFetcher + Send + Sync>,
    api: ApiConfig,
    mut query_rx: watch::Receiver<FeedQuery>,
    phase_tx: watch::Sender<FeedPhase>,
    mut refresh_rx: mpsc::Receiver<()>,
) {
    // The initial query waits out one quiet period like any other change.
    let mut trigger = Trigger::Debounced;

    loop {
        match trigger {
            Trigger::Shutdown => return,
            Trigger::Debounced => wait_quiet(&mut query_rx, &mut refresh_rx).await,
            Trigger::Immediate => {}
        }

        let query = query_rx.borrow_and_update().clone();
        fetch_and_publish(&fetcher, &api, &query, &phase_tx).await;

        if phase_tx.is_closed() {
            return;
        }

        trigger = tokio::select! {
            changed = query_rx.changed() => match changed {
                Ok(()) => Trigger::Debounced,
                Err(_) => Trigger::Shutdown,
            },
            received = refresh_rx.recv() => match received {
                Some(()) => Trigger::Immediate,
                None => Trigger::Shutdown,
            },
        };
    }
}

/// Wait until the query has been stable for [`DEBOUNCE_QUIET`]. Every
/// change restarts the timer; a manual refresh ends the wait at once.
async fn wait_quiet(query_rx: &mut watch::Receiver<FeedQuery>, refresh_rx: &mut mpsc::Receiver<()>) {
    loop {
        tokio::select! {
            () = sleep(DEBOUNCE_QUIET) => return,
            changed = query_rx.changed() => {
                if changed.is_err() {
                    return;
                }
            }
            Some(()) = refresh_rx.recv() => return,
        }
    }
}

async fn fetch_and_publish(
    fetcher: &Arc<dyn NewsFetcher + Send + Sync>,
    api: &ApiConfig,
    query: &FeedQuery,
    phase_tx: &watch::Sender<FeedPhase>,
) {
    let _ = phase_tx.send(FeedPhase::Loading);

    let mut request = HeadlinesQuery::for_tab(&query.tab, &query.search);
    request.page_size = api.page_size;
    request.country = api.country.clone();

    match fetcher.headlines(&request).await {
        Ok(headlines) => {
            tracing::info!(
                tab = %query.tab,
                total = headlines.total_results,
                "headlines fetched"
            );
            let _ = phase_tx.send(FeedPhase::Ready(headlines));
        }
        Err(e) => {
            tracing::warn!(tab = %query.tab, error = %e, "headlines fetch failed");
            let _ = phase_tx.send(FeedPhase::Failed(GENERIC_FETCH_ERROR.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::app::{NewsdeckError, Result};
    use crate::domain::{Article, Category, Headlines};
    use crate::feed::store::FeedStore;

    struct MockFetcher {
        calls: Mutex<Vec<HeadlinesQuery>>,
        fail: AtomicBool,
        articles: Vec<Article>,
    }

    impl MockFetcher {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail: AtomicBool::new(false),
                articles: vec![Article {
                    title: "A headline".into(),
                    url: "https://example.com/a".into(),
                    ..Default::default()
                }],
            }
        }

        fn empty() -> Self {
            Self {
                articles: Vec::new(),
                ..Self::new()
            }
        }

        fn calls(&self) -> Vec<HeadlinesQuery> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NewsFetcher for MockFetcher {
        async fn headlines(&self, query: &HeadlinesQuery) -> Result<Headlines> {
            self.calls.lock().unwrap().push(query.clone());
            if self.fail.load(Ordering::SeqCst) {
                return Err(NewsdeckError::Api("boom".into()));
            }
            Ok(Headlines {
                status: "ok".into(),
                total_results: self.articles.len() as u32,
                articles: self.articles.clone(),
                ..Default::default()
            })
        }
    }

    async fn next_settled_phase(rx: &mut watch::Receiver<FeedPhase>) -> FeedPhase {
        loop {
            rx.changed().await.unwrap();
            let phase = rx.borrow_and_update().clone();
            if !phase.is_loading() {
                return phase;
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_of_changes_fires_one_request() {
        let fetcher = Arc::new(MockFetcher::new());
        let store = FeedStore::new("all");
        let worker = FeedWorker::spawn(
            fetcher.clone(),
            ApiConfig::default(),
            store.subscribe(),
        );

        // Tab change followed quickly by more changes: the debounce
        // collapses the burst into a single request.
        store.set_tab("business");
        store.set_tab("tech");
        store.set_search("rust");

        let mut phase_rx = worker.subscribe();
        let phase = next_settled_phase(&mut phase_rx).await;
        assert!(matches!(phase, FeedPhase::Ready(_)));

        let calls = fetcher.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].category, Some(Category::Technology));
        assert_eq!(calls[0].search, "rust");
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_articles_is_ready_not_failed() {
        let fetcher = Arc::new(MockFetcher::empty());
        let store = FeedStore::new("all");
        let worker = FeedWorker::spawn(
            fetcher.clone(),
            ApiConfig::default(),
            store.subscribe(),
        );

        let mut phase_rx = worker.subscribe();
        let phase = next_settled_phase(&mut phase_rx).await;

        match phase {
            FeedPhase::Ready(headlines) => assert!(headlines.articles.is_empty()),
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_collapses_to_generic_message_and_refresh_retries() {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher.fail.store(true, Ordering::SeqCst);

        let store = FeedStore::new("business");
        let worker = FeedWorker::spawn(
            fetcher.clone(),
            ApiConfig::default(),
            store.subscribe(),
        );

        let mut phase_rx = worker.subscribe();
        let phase = next_settled_phase(&mut phase_rx).await;
        assert_eq!(phase.error(), Some(GENERIC_FETCH_ERROR));

        // Manual refresh re-issues the same request.
        fetcher.fail.store(false, Ordering::SeqCst);
        worker.refresh();
        let phase = next_settled_phase(&mut phase_rx).await;
        assert!(matches!(phase, FeedPhase::Ready(_)));

        let calls = fetcher.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_worker_uses_configured_country_and_page_size() {
        let fetcher = Arc::new(MockFetcher::new());
        let store = FeedStore::new("all");
        let api = ApiConfig {
            country: "gb".into(),
            page_size: 50,
            ..ApiConfig::default()
        };
        let worker = FeedWorker::spawn(fetcher.clone(), api, store.subscribe());

        let mut phase_rx = worker.subscribe();
        next_settled_phase(&mut phase_rx).await;

        let calls = fetcher.calls();
        assert_eq!(calls[0].country, "gb");
        assert_eq!(calls[0].page_size, 50);
        assert_eq!(calls[0].category, None);
    }
}
