use tokio::sync::watch;

/// The shared UI state driving the feed: active tab and search text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    pub tab: String,
    pub search: String,
}

/// Reactive store for the feed query.
///
/// Setters notify subscribers only when the value actually changed, so a
/// re-selected tab or an unchanged search string never wakes the worker.
#[derive(Debug)]
pub struct FeedStore {
    tx: watch::Sender<FeedQuery>,
}

impl FeedStore {
    pub fn new(initial_tab: &str) -> Self {
        let (tx, _) = watch::channel(FeedQuery {
            tab: initial_tab.to_string(),
            search: String::new(),
        });
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedQuery> {
        self.tx.subscribe()
    }

    pub fn query(&self) -> FeedQuery {
        self.tx.borrow().clone()
    }

    pub fn set_tab(&self, tab: &str) {
        self.tx.send_if_modified(|query| {
            if query.tab == tab {
                false
            } else {
                query.tab = tab.to_string();
                true
            }
        });
    }

    pub fn set_search(&self, search: &str) {
        self.tx.send_if_modified(|query| {
            if query.search == search {
                false
            } else {
                query.search = search.to_string();
                true
            }
        });
    }
}

impl Default for FeedStore {
    fn default() -> Self {
        Self::new("all")
    }
}
