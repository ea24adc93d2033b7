use std::borrow::Cow;

use chrono::{DateTime, Utc};
use html_escape::decode_html_entities;
use serde::{Deserialize, Serialize};

/// Placeholder shown when an article carries no image URL.
pub const FALLBACK_IMAGE: &str = "(no image available)";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// One article as returned by the news API. Fields deserialize verbatim
/// from the wire format; no normalization happens here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: ArticleSource,
    pub author: Option<String>,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub content: Option<String>,
}

impl Article {
    pub fn display_title(&self) -> Cow<'_, str> {
        if self.title.is_empty() {
            Cow::Borrowed("(untitled)")
        } else {
            decode_html_entities(&self.title)
        }
    }

    pub fn display_description(&self) -> Cow<'_, str> {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => decode_html_entities(d),
            _ => Cow::Borrowed("No description available at the moment"),
        }
    }

    pub fn display_image(&self) -> &str {
        self.url_to_image
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(FALLBACK_IMAGE)
    }

    /// Derive the session-store slug from the title: lowercased, runs of
    /// non-alphanumeric characters collapsed to a single hyphen, edges
    /// trimmed.
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Response envelope of the `top-headlines` endpoint. The API reports
/// failures in-band with `status = "error"` plus `code`/`message`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Headlines {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub articles: Vec<Article>,
    pub code: Option<String>,
    pub message: Option<String>,
}

impl Headlines {
    pub fn is_error(&self) -> bool {
        self.status == "error"
    }
}
