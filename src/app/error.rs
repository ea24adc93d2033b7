use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsdeckError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("News API error: {0}")]
    Api(String),

    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, NewsdeckError>;
