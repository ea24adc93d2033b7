use crate::app::{AppContext, NewsdeckError, Result};
use crate::domain::{Category, HeadlinesQuery};

pub async fn print_headlines(
    ctx: &AppContext,
    category: Option<String>,
    search: Option<String>,
    page_size: Option<u32>,
) -> Result<()> {
    let category = category
        .map(|c| c.parse::<Category>())
        .transpose()
        .map_err(NewsdeckError::Other)?;

    let query = HeadlinesQuery {
        category,
        search: search.unwrap_or_default().trim().to_string(),
        page_size: page_size.unwrap_or(ctx.config.api.page_size),
        country: ctx.config.api.country.clone(),
    };

    let headlines = ctx.fetcher.headlines(&query).await?;

    if headlines.articles.is_empty() {
        println!("No articles found");
        return Ok(());
    }

    println!(
        "{} of {} matching articles",
        headlines.articles.len(),
        headlines.total_results
    );

    for article in &headlines.articles {
        let date = article
            .published_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "          ".to_string());

        println!("{} {}", date, article.display_title());
        if !article.url.is_empty() {
            println!("  {}", article.url);
        }
    }

    Ok(())
}

pub fn list_categories() {
    for category in Category::ALL {
        println!("{}", category);
    }
}
