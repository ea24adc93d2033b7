use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category filters accepted by the news API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Business,
        Category::Entertainment,
        Category::General,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "business" => Ok(Category::Business),
            "entertainment" => Ok(Category::Entertainment),
            "general" => Ok(Category::General),
            "health" => Ok(Category::Health),
            "science" => Ok(Category::Science),
            "sports" => Ok(Category::Sports),
            "technology" | "tech" => Ok(Category::Technology),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// The feed tabs shown in the UI, in display order.
pub const TABS: [&str; 6] = ["all", "top stories", "world", "politics", "business", "tech"];

/// Map a UI tab to the API category it queries.
///
/// "all" applies no filter; tabs naming a real API category query that
/// category; every other tab falls back to "general".
pub fn tab_category(tab: &str) -> Option<Category> {
    let tab = tab.trim().to_lowercase();
    if tab == "all" {
        return None;
    }
    Some(tab.parse().unwrap_or(Category::General))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!("Business".parse::<Category>().unwrap(), Category::Business);
        assert_eq!("TECHNOLOGY".parse::<Category>().unwrap(), Category::Technology);
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        assert!("sportsball".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_tab_all_has_no_filter() {
        assert_eq!(tab_category("all"), None);
        assert_eq!(tab_category("All"), None);
    }

    #[test]
    fn test_tab_maps_named_categories() {
        assert_eq!(tab_category("business"), Some(Category::Business));
        assert_eq!(tab_category("tech"), Some(Category::Technology));
    }

    #[test]
    fn test_tab_falls_back_to_general() {
        assert_eq!(tab_category("world"), Some(Category::General));
        assert_eq!(tab_category("politics"), Some(Category::General));
        assert_eq!(tab_category("top stories"), Some(Category::General));
    }
}
