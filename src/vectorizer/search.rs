use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{article::Document, error::Error, vectorizer::rank};

/// How a user query is applied to the fetched article set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Case-insensitive substring filter over title and description.
    /// Keeps input order.
    #[default]
    Text,
    /// TF-IDF relevance ranking over all text fields.
    /// Keeps every document, reordered.
    Semantic,
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(SearchMode::Text),
            "semantic" => Ok(SearchMode::Semantic),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Text => write!(f, "text"),
            SearchMode::Semantic => write!(f, "semantic"),
        }
    }
}

/// Apply `query` to `documents` in the given mode.
///
/// An empty query leaves the collection as it is in both modes.
pub fn search<'a, D>(documents: &'a [D], query: &str, mode: SearchMode) -> Vec<&'a D>
where
    D: Document,
{
    debug!(%mode, documents = documents.len(), "searching");
    match mode {
        SearchMode::Text => text_filter(documents, query),
        SearchMode::Semantic => rank(documents, query),
    }
}

/// Documents whose first or second text field (title, description)
/// contains `query`, ignoring case
pub fn text_filter<'a, D>(documents: &'a [D], query: &str) -> Vec<&'a D>
where
    D: Document,
{
    if query.is_empty() {
        return documents.iter().collect();
    }
    let needle = query.to_lowercase();
    documents
        .iter()
        .filter(|doc| {
            doc.text_fields()
                .into_iter()
                .take(2)
                .flatten()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::NewsArticle;

    fn articles() -> Vec<NewsArticle> {
        vec![
            NewsArticle::with_title("Stock market rises").description("Tech shares lead"),
            NewsArticle::with_title("Rain expected").content("The market for umbrellas booms"),
            NewsArticle::with_title("Election night").description("Votes counted in MARKET towns"),
        ]
    }

    #[test]
    fn text_mode_filters_title_and_description_only() {
        let articles = articles();
        let found = search(&articles, "Market", SearchMode::Text);
        let titles: Vec<&str> = found.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Stock market rises", "Election night"]);
    }

    #[test]
    fn text_mode_matches_substrings() {
        let articles = articles();
        assert_eq!(search(&articles, "ark", SearchMode::Text).len(), 2);
        assert!(search(&articles, "zzz", SearchMode::Text).is_empty());
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let articles = articles();
        for mode in [SearchMode::Text, SearchMode::Semantic] {
            let found = search(&articles, "", mode);
            assert_eq!(found.len(), 3);
            assert_eq!(found[0].title, "Stock market rises");
            assert_eq!(found[2].title, "Election night");
        }
    }

    #[test]
    fn semantic_mode_keeps_all_documents() {
        let articles = articles();
        let found = search(&articles, "umbrellas", SearchMode::Semantic);
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].title, "Rain expected");
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Semantic".parse::<SearchMode>().unwrap(), SearchMode::Semantic);
        assert_eq!(" text ".parse::<SearchMode>().unwrap(), SearchMode::Text);
        assert!(matches!("fuzzy".parse::<SearchMode>(), Err(Error::UnknownMode(_))));
        assert_eq!(SearchMode::default(), SearchMode::Text);
        assert_eq!(SearchMode::Semantic.to_string(), "semantic");
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SearchMode::Semantic).unwrap(), "\"semantic\"");
        let mode: SearchMode = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(mode, SearchMode::Text);
    }
}
