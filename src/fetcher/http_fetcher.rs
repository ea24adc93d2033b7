use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::{NewsdeckError, Result};
use crate::config::ApiConfig;
use crate::domain::{Headlines, HeadlinesQuery};
use crate::fetcher::NewsFetcher;

pub struct HttpFetcher {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl HttpFetcher {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        if api.key.is_empty() {
            return Err(NewsdeckError::Config(
                "News API key is not set (config [api].key or NEWSDECK_API_KEY)".into(),
            ));
        }

        let base_url = Url::parse(&api.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .user_agent("newsdeck/0.1.0")
            .build()
            .expect("Failed to build HTTP client");

        Ok(Self {
            client,
            base_url,
            api_key: api.key.clone(),
        })
    }

    /// Build the request URL: country, page size and API key always,
    /// category only when a filter is set, `q` only when the trimmed
    /// search text is non-empty.
    fn request_url(&self, query: &HeadlinesQuery) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("country", &query.country);
            pairs.append_pair("pageSize", &query.page_size.to_string());
            pairs.append_pair("apiKey", &self.api_key);

            if let Some(category) = query.category {
                pairs.append_pair("category", category.as_str());
            }

            let search = query.search.trim();
            if !search.is_empty() {
                pairs.append_pair("q", search);
            }
        }
        url
    }
}

#[async_trait]
impl NewsFetcher for HttpFetcher {
    async fn headlines(&self, query: &HeadlinesQuery) -> Result<Headlines> {
        let url = self.request_url(query);

        tracing::debug!(
            category = query.category.map(|c| c.as_str()),
            search = %query.search,
            "fetching headlines"
        );

        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;

        let headlines: Headlines = response.json().await?;

        // The API reports some failures with HTTP 200 and an error envelope.
        if headlines.is_error() {
            return Err(NewsdeckError::Api(
                headlines
                    .message
                    .unwrap_or_else(|| "News API error".to_string()),
            ));
        }

        Ok(headlines)
    }
}
