use ratatui::widgets::ListState;

use crate::domain::{Article, TABS};
use crate::feed::FeedPhase;
use crate::session::StoredArticle;

pub const PAGE_SIZE: usize = 10;

/// How many related articles the detail view keeps.
pub const RELATED_LIMIT: usize = 2;

/// Page size of the related-articles request.
pub const RELATED_PAGE_SIZE: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Feed,
    Detail,
}

/// Everything the detail view needs: the article read back from the
/// session store plus the related articles fetched for it.
pub struct DetailView {
    pub slug: String,
    pub article: StoredArticle,
    pub related: Vec<Article>,
}

pub struct TuiApp {
    pub view: View,
    pub tab_index: usize,
    pub search: String,
    pub searching: bool,
    pub phase: FeedPhase,
    pub article_index: usize,
    pub article_list_state: ListState,
    pub detail: Option<DetailView>,
    pub detail_scroll: u16,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new() -> Self {
        let mut article_list_state = ListState::default();
        article_list_state.select(Some(0));

        Self {
            view: View::Feed,
            tab_index: 0,
            search: String::new(),
            searching: false,
            phase: FeedPhase::Loading,
            article_index: 0,
            article_list_state,
            detail: None,
            detail_scroll: 0,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn active_tab(&self) -> &'static str {
        TABS[self.tab_index]
    }

    pub fn next_tab(&mut self) {
        self.tab_index = (self.tab_index + 1) % TABS.len();
        self.reset_selection();
    }

    pub fn prev_tab(&mut self) {
        self.tab_index = (self.tab_index + TABS.len() - 1) % TABS.len();
        self.reset_selection();
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.phase.articles().get(self.article_index)
    }

    /// Install the latest feed phase, keeping the selection in bounds.
    pub fn set_phase(&mut self, phase: FeedPhase) {
        self.phase = phase;
        let count = self.phase.articles().len();
        if self.article_index >= count && count > 0 {
            self.article_index = count - 1;
        }
        self.article_list_state.select(Some(self.article_index));
    }

    fn reset_selection(&mut self) {
        self.article_index = 0;
        self.article_list_state.select(Some(0));
    }

    pub fn move_up(&mut self) {
        match self.view {
            View::Feed => {
                if self.article_index > 0 {
                    self.article_index -= 1;
                    self.article_list_state.select(Some(self.article_index));
                }
            }
            View::Detail => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.view {
            View::Feed => {
                let count = self.phase.articles().len();
                if count > 0 && self.article_index < count - 1 {
                    self.article_index += 1;
                    self.article_list_state.select(Some(self.article_index));
                }
            }
            View::Detail => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
            }
        }
    }

    pub fn next_page(&mut self) {
        match self.view {
            View::Feed => {
                let max_index = self.phase.articles().len().saturating_sub(1);
                let new_index = (self.article_index + PAGE_SIZE).min(max_index);
                if new_index != self.article_index {
                    self.article_index = new_index;
                    self.article_list_state.select(Some(self.article_index));
                }
            }
            View::Detail => {
                self.detail_scroll = self.detail_scroll.saturating_add(PAGE_SIZE as u16);
            }
        }
    }

    pub fn prev_page(&mut self) {
        match self.view {
            View::Feed => {
                let new_index = self.article_index.saturating_sub(PAGE_SIZE);
                if new_index != self.article_index {
                    self.article_index = new_index;
                    self.article_list_state.select(Some(self.article_index));
                }
            }
            View::Detail => {
                self.detail_scroll = self.detail_scroll.saturating_sub(PAGE_SIZE as u16);
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.view = View::Feed;
        self.detail = None;
        self.detail_scroll = 0;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Headlines;

    fn ready_app(count: usize) -> TuiApp {
        let mut app = TuiApp::new();
        let articles = (0..count)
            .map(|i| Article {
                title: format!("Article {}", i),
                ..Default::default()
            })
            .collect();
        app.set_phase(FeedPhase::Ready(Headlines {
            status: "ok".into(),
            total_results: count as u32,
            articles,
            ..Default::default()
        }));
        app
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut app = TuiApp::new();
        assert_eq!(app.active_tab(), "all");

        for _ in 0..TABS.len() {
            app.next_tab();
        }
        assert_eq!(app.active_tab(), "all");

        app.prev_tab();
        assert_eq!(app.active_tab(), *TABS.last().unwrap());
    }

    #[test]
    fn test_tab_change_resets_selection() {
        let mut app = ready_app(5);
        app.move_down();
        app.move_down();
        assert_eq!(app.article_index, 2);

        app.next_tab();
        assert_eq!(app.article_index, 0);
    }

    #[test]
    fn test_move_down_clamps_at_end() {
        let mut app = ready_app(2);
        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.article_index, 1);
    }

    #[test]
    fn test_paging_clamps() {
        let mut app = ready_app(15);
        app.next_page();
        assert_eq!(app.article_index, 10);
        app.next_page();
        assert_eq!(app.article_index, 14);
        app.prev_page();
        assert_eq!(app.article_index, 4);
        app.prev_page();
        assert_eq!(app.article_index, 0);
    }

    #[test]
    fn test_set_phase_clamps_selection() {
        let mut app = ready_app(10);
        app.next_page();
        assert_eq!(app.article_index, 9);

        app.set_phase(FeedPhase::Ready(Headlines {
            status: "ok".into(),
            total_results: 3,
            articles: vec![Article::default(); 3],
            ..Default::default()
        }));
        assert_eq!(app.article_index, 2);
    }

    #[test]
    fn test_no_selection_while_loading() {
        let app = TuiApp::new();
        assert!(app.selected_article().is_none());
    }

    #[test]
    fn test_detail_scroll_saturates() {
        let mut app = TuiApp::new();
        app.view = View::Detail;
        app.move_up();
        assert_eq!(app.detail_scroll, 0);
        app.move_down();
        app.move_down();
        assert_eq!(app.detail_scroll, 2);
        app.prev_page();
        assert_eq!(app.detail_scroll, 0);
    }
}
