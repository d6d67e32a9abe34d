use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Anything the ranker can score.
///
/// A document exposes its text-bearing fields in a fixed order. The ranker
/// joins them with single spaces; a missing field joins as an empty string.
pub trait Document {
    /// Text fields in concatenation order, `None` for a missing field
    fn text_fields(&self) -> Vec<Option<&str>>;

    /// All text fields joined into one blob
    fn text_blob(&self) -> String {
        self.text_fields()
            .into_iter()
            .map(|field| field.unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Document for str {
    fn text_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self)]
    }
}

impl Document for String {
    fn text_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.as_str())]
    }
}

impl<T> Document for &T
where
    T: Document + ?Sized,
{
    fn text_fields(&self) -> Vec<Option<&str>> {
        (**self).text_fields()
    }
}

/// Publisher of an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Source {
    pub id: Option<String>,
    pub name: String,
}

/// News article as delivered by the news provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(default)]
    pub source: Source,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: String,
    pub content: Option<String>,
}

impl NewsArticle {
    /// Article with only a title, the rest left empty
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

impl Document for NewsArticle {
    /// title, description, content
    fn text_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.title.as_str()),
            self.description.as_deref(),
            self.content.as_deref(),
        ]
    }
}

/// Envelope of a news provider response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub status: String,
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
    pub code: Option<String>,
    pub message: Option<String>,
}

impl NewsResponse {
    /// Articles of an `ok` response, [`Error::Provider`] otherwise
    pub fn into_articles(self) -> Result<Vec<NewsArticle>> {
        if self.status == "ok" {
            Ok(self.articles)
        } else {
            Err(Error::Provider(
                self.message
                    .or(self.code)
                    .unwrap_or_else(|| format!("status {:?}", self.status)),
            ))
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ArticlePayload {
    List(Vec<NewsArticle>),
    Response(NewsResponse),
}

/// Read articles from JSON: either a bare array of articles or a full
/// provider response.
pub fn load_articles<R>(reader: R) -> Result<Vec<NewsArticle>>
where
    R: Read,
{
    let payload: ArticlePayload = serde_json::from_reader(reader)?;
    let articles = match payload {
        ArticlePayload::List(articles) => articles,
        ArticlePayload::Response(response) => response.into_articles()?,
    };
    info!(count = articles.len(), "loaded articles");
    Ok(articles)
}
