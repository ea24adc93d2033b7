//! In-process session store.
//!
//! Carries one article's data from a feed card to the detail view without a
//! second network trip. Entries are keyed `article-<slug>` and hold a JSON
//! payload; the last write wins per slug, nothing expires, and everything is
//! gone when the process exits.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::{NewsdeckError, Result};
use crate::domain::{Article, Category};

/// The JSON payload handed from a feed card to the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredArticle {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    pub url: String,
    pub category: Category,
}

impl StoredArticle {
    pub fn from_article(article: &Article, category: Category) -> Self {
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
            image_url: article.url_to_image.clone(),
            published_at: article.published_at,
            url: article.url.clone(),
            category,
        }
    }
}

pub fn article_key(slug: &str) -> String {
    format!("article-{}", slug)
}

pub trait SessionStore {
    fn put(&self, key: &str, value: String);
    fn get(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str) -> bool;

    /// Serialize `article` under `article-<slug>` and return the slug.
    fn stash_article(&self, article: &Article, category: Category) -> Result<String> {
        let slug = article.slug();
        let stored = StoredArticle::from_article(article, category);
        self.put(&article_key(&slug), serde_json::to_string(&stored)?);
        Ok(slug)
    }

    fn load_article(&self, slug: &str) -> Result<StoredArticle> {
        let raw = self
            .get(&article_key(slug))
            .ok_or_else(|| NewsdeckError::ArticleNotFound(slug.to_string()))?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn put(&self, key: &str, value: String) {
        self.entries
            .lock()
            .expect("session store poisoned")
            .insert(key.to_string(), value);
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("session store poisoned")
            .get(key)
            .cloned()
    }

    fn remove(&self, key: &str) -> bool {
        self.entries
            .lock()
            .expect("session store poisoned")
            .remove(key)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_article() -> Article {
        Article {
            title: "Breaking: Major Political Event Unfolds".into(),
            description: Some("A long-form description.".into()),
            url: "https://example.com/major-event".into(),
            url_to_image: Some("https://example.com/major-event.jpg".into()),
            published_at: Some(Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_stash_returns_title_slug() {
        let store = MemorySessionStore::new();
        let slug = store
            .stash_article(&sample_article(), Category::General)
            .unwrap();
        assert_eq!(slug, "breaking-major-political-event-unfolds");
    }

    #[test]
    fn test_stored_payload_matches_article_fields() {
        let store = MemorySessionStore::new();
        let article = sample_article();
        let slug = store.stash_article(&article, Category::General).unwrap();

        let stored = store.load_article(&slug).unwrap();
        assert_eq!(stored.title, article.title);
        assert_eq!(stored.description, article.description);
        assert_eq!(stored.image_url, article.url_to_image);
        assert_eq!(stored.published_at, article.published_at);
        assert_eq!(stored.url, article.url);
        assert_eq!(stored.category, Category::General);
    }

    #[test]
    fn test_payload_wire_format() {
        let store = MemorySessionStore::new();
        let article = sample_article();
        let slug = store.stash_article(&article, Category::Business).unwrap();

        let raw = store.get(&article_key(&slug)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert!(value.get("publishedAt").is_some());
        assert!(value.get("image_url").is_some());
        assert_eq!(value["category"], "business");
    }

    #[test]
    fn test_last_write_wins_per_slug() {
        let store = MemorySessionStore::new();
        let first = sample_article();
        let second = Article {
            url: "https://example.com/other".into(),
            ..first.clone()
        };

        let slug_a = store.stash_article(&first, Category::General).unwrap();
        let slug_b = store.stash_article(&second, Category::General).unwrap();
        assert_eq!(slug_a, slug_b);

        let stored = store.load_article(&slug_a).unwrap();
        assert_eq!(stored.url, "https://example.com/other");
    }

    #[test]
    fn test_missing_slug_is_not_found() {
        let store = MemorySessionStore::new();
        assert!(matches!(
            store.load_article("no-such-article"),
            Err(NewsdeckError::ArticleNotFound(_))
        ));
    }

    #[test]
    fn test_remove() {
        let store = MemorySessionStore::new();
        let slug = store
            .stash_article(&sample_article(), Category::General)
            .unwrap();

        assert!(store.remove(&article_key(&slug)));
        assert!(!store.remove(&article_key(&slug)));
        assert!(store.load_article(&slug).is_err());
    }
}
