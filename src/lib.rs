//! # newsdeck
//!
//! A terminal news aggregation client.
//!
//! ## Architecture
//!
//! newsdeck follows a reactive pipeline:
//!
//! ```text
//! FeedStore → FeedWorker (debounce) → Fetcher → FeedPhase → TUI
//! ```
//!
//! - [`feed`]: reactive query store and debounced fetch worker
//! - [`fetcher`]: HTTP client for the news API
//! - [`session`]: in-process handoff from feed cards to the detail view
//! - [`tui`]: terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the TUI (reads ~/.config/newsdeck/config.toml)
//! NEWSDECK_API_KEY=... newsdeck
//!
//! # Print headlines for a category
//! newsdeck headlines --category technology
//!
//! # List valid categories
//! newsdeck categories
//! ```
//!
//! ## Modules
//!
//! - [`app`]: application context and error types
//! - [`cli`]: command-line interface definitions
//! - [`config`]: configuration (API endpoint, colors, keybindings)
//! - [`domain`]: core domain models (Article, Category, HeadlinesQuery)
//! - [`feed`]: shared feed state and the debounced fetch worker
//! - [`fetcher`]: HTTP fetching against the news API
//! - [`session`]: session store for feed → detail handoff
//! - [`tui`]: terminal user interface

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all components:
/// config, fetcher, session store.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `headlines [--category <c>] [--search <q>]` - Print headlines
/// - `categories` - List valid categories
/// - `tui` - Launch the TUI (default)
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/newsdeck/config.toml`, supporting:
/// - News API endpoint and key (with env overrides)
/// - Custom colors (named or hex)
/// - Custom keybindings
pub mod config;

/// Core domain models.
///
/// - [`Article`](domain::Article): one article as the API returns it
/// - [`Category`](domain::Category): the category filters the API accepts
/// - [`HeadlinesQuery`](domain::HeadlinesQuery): parameters of one request
pub mod domain;

/// Shared feed state and the debounced fetch worker.
///
/// - [`FeedStore`](feed::FeedStore): reactive (tab, search) store
/// - [`FeedWorker`](feed::FeedWorker): debounces query changes and fetches
/// - [`FeedPhase`](feed::FeedPhase): loading / ready / failed
pub mod feed;

/// HTTP fetching against the news API.
///
/// - [`NewsFetcher`](fetcher::NewsFetcher): async trait for headline fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// In-process session store.
///
/// Hands one article's data from a feed card to the detail view under an
/// `article-<slug>` key, last write wins.
pub mod session;

/// Terminal user interface.
///
/// Feed view (hero banner, search bar, tabs, article cards) and detail
/// view (article + related articles).
///
/// Keybindings: j/k navigate, Tab cycles tabs, / searches, Enter opens
/// the detail view, o opens in browser, R refreshes, q quits.
pub mod tui;
