pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::domain::category::tab_category;
use crate::domain::{Article, Category, HeadlinesQuery};
use crate::feed::{FeedStore, FeedWorker};
use crate::session::SessionStore;

use self::app::{DetailView, TuiApp, View, RELATED_LIMIT, RELATED_PAGE_SIZE};
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut tui_app = TuiApp::new();
    let event_handler = EventHandler::new(Duration::from_millis(100));

    let store = FeedStore::new(tui_app.active_tab());
    let worker = FeedWorker::spawn(
        ctx.fetcher.clone(),
        ctx.config.api.clone(),
        store.subscribe(),
    );
    let mut phase_rx = worker.subscribe();

    loop {
        // Pull in the latest feed phase before drawing.
        if phase_rx.has_changed().unwrap_or(false) {
            tui_app.set_phase(phase_rx.borrow_and_update().clone());
        }

        terminal.draw(|frame| layout::render(frame, &mut tui_app, &ctx.config.colors))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                // Search input grabs keys before the normal bindings.
                if tui_app.searching {
                    handle_search_key(&mut tui_app, &store, key);
                    continue;
                }

                let action = ctx.config.keybindings.get_action(&key);
                match action {
                    Action::Quit => {
                        tui_app.should_quit = true;
                    }
                    Action::MoveUp => {
                        tui_app.move_up();
                    }
                    Action::MoveDown => {
                        tui_app.move_down();
                    }
                    Action::NextPage => {
                        tui_app.next_page();
                    }
                    Action::PrevPage => {
                        tui_app.prev_page();
                    }
                    Action::NextTab => {
                        if tui_app.view == View::Feed {
                            tui_app.next_tab();
                            store.set_tab(tui_app.active_tab());
                        }
                    }
                    Action::PrevTab => {
                        if tui_app.view == View::Feed {
                            tui_app.prev_tab();
                            store.set_tab(tui_app.active_tab());
                        }
                    }
                    Action::Search => {
                        if tui_app.view == View::Feed {
                            tui_app.searching = true;
                        }
                    }
                    Action::Select => {
                        if tui_app.view == View::Feed {
                            open_detail(terminal, &mut tui_app, &ctx).await?;
                        }
                    }
                    Action::Back => match tui_app.view {
                        View::Detail => {
                            tui_app.close_detail();
                        }
                        View::Feed => {
                            if !tui_app.search.is_empty() {
                                tui_app.search.clear();
                                store.set_search("");
                            }
                        }
                    },
                    Action::OpenInBrowser => {
                        let url = match tui_app.view {
                            View::Detail => {
                                tui_app.detail.as_ref().map(|d| d.article.url.clone())
                            }
                            View::Feed => tui_app.selected_article().map(|a| a.url.clone()),
                        };
                        if let Some(url) = url.filter(|u| !u.is_empty()) {
                            if let Err(e) = open::that(&url) {
                                tui_app.set_status(format!("Failed to open browser: {}", e));
                            }
                        }
                    }
                    Action::Refresh => {
                        worker.refresh();
                        tui_app.set_status("Refreshing feed...".to_string());
                    }
                    Action::None => {}
                }
            }
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_search_key(tui_app: &mut TuiApp, store: &FeedStore, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            tui_app.searching = false;
        }
        KeyCode::Backspace => {
            tui_app.search.pop();
            store.set_search(&tui_app.search);
        }
        KeyCode::Char(c) => {
            tui_app.search.push(c);
            store.set_search(&tui_app.search);
        }
        _ => {}
    }
}

/// Stash the selected article in the session store, read it back the way
/// a detail page would, then fetch related articles for it.
async fn open_detail(terminal: &mut Tui, tui_app: &mut TuiApp, ctx: &AppContext) -> Result<()> {
    let Some(article) = tui_app.selected_article().cloned() else {
        return Ok(());
    };

    let category = tab_category(tui_app.active_tab()).unwrap_or(Category::General);
    let slug = ctx.session.stash_article(&article, category)?;

    let stored = match ctx.session.load_article(&slug) {
        Ok(stored) => stored,
        Err(e) => {
            tui_app.set_status(format!("Article not found: {}", e));
            return Ok(());
        }
    };

    tui_app.view = View::Detail;
    tui_app.detail_scroll = 0;
    tui_app.detail = Some(DetailView {
        slug,
        article: stored,
        related: Vec::new(),
    });

    tui_app.set_status("Loading related articles...".to_string());
    terminal.draw(|frame| layout::render(frame, tui_app, &ctx.config.colors))?;

    let related = fetch_related(ctx, category, &article.title).await;
    if let Some(detail) = tui_app.detail.as_mut() {
        detail.related = related;
    }
    tui_app.clear_status();

    Ok(())
}

/// One fetch with the stored category and a small page; a failure leaves
/// the related list empty without failing the detail view.
async fn fetch_related(ctx: &AppContext, category: Category, current_title: &str) -> Vec<Article> {
    let query = HeadlinesQuery::with_category(category).page_size(RELATED_PAGE_SIZE);
    match ctx.fetcher.headlines(&query).await {
        Ok(headlines) => related_from(headlines.articles, current_title),
        Err(e) => {
            tracing::warn!(error = %e, "related articles fetch failed");
            Vec::new()
        }
    }
}

fn related_from(articles: Vec<Article>, current_title: &str) -> Vec<Article> {
    articles
        .into_iter()
        .filter(|article| article.title != current_title)
        .take(RELATED_LIMIT)
        .collect()
}
