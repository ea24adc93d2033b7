use crate::domain::category::{tab_category, Category};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_COUNTRY: &str = "us";

/// Everything needed to build one `top-headlines` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlinesQuery {
    pub category: Option<Category>,
    pub search: String,
    pub page_size: u32,
    pub country: String,
}

impl Default for HeadlinesQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl HeadlinesQuery {
    /// Build the query a given UI tab and search string resolve to.
    pub fn for_tab(tab: &str, search: &str) -> Self {
        Self {
            category: tab_category(tab),
            search: search.trim().to_string(),
            ..Self::default()
        }
    }

    pub fn with_category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = HeadlinesQuery::default();
        assert_eq!(query.category, None);
        assert_eq!(query.search, "");
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(query.country, "us");
    }

    #[test]
    fn test_for_tab_trims_search() {
        let query = HeadlinesQuery::for_tab("tech", "  rust lang  ");
        assert_eq!(query.category, Some(Category::Technology));
        assert_eq!(query.search, "rust lang");
    }

    #[test]
    fn test_with_category_page_size() {
        let query = HeadlinesQuery::with_category(Category::Science).page_size(6);
        assert_eq!(query.category, Some(Category::Science));
        assert_eq!(query.page_size, 6);
    }
}
