use serde::{Deserialize, Serialize};

use crate::{
    article::NewsArticle,
    error::{Error, Result},
};

/// Reading speed used when none is configured, in words per minute
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Placeholder used when the summarizer returns no summary text
pub const SUMMARY_FALLBACK: &str = "Summary not available";

/// Estimated reading time in whole minutes, never below 1
///
/// # Arguments
/// * `content` - article text, words are separated by whitespace
/// * `words_per_minute` - reading speed, 0 is treated as 1
pub fn reading_time(content: &str, words_per_minute: u32) -> u32 {
    let words = content.split_whitespace().count() as u64;
    let wpm = u64::from(words_per_minute.max(1));
    words.div_ceil(wpm).max(1) as u32
}

/// Text a summary should be generated from: the content, or the
/// description when the content is missing or empty.
pub fn summary_source<'a>(content: Option<&'a str>, description: Option<&'a str>) -> Result<&'a str> {
    content
        .filter(|c| !c.is_empty())
        .or_else(|| description.filter(|d| !d.is_empty()))
        .ok_or(Error::EmptyArticle)
}

/// Article handed to the summarization collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SummarizeRequest {
    /// Request for `article`; `None` when it has no text to summarize
    pub fn from_article(article: &NewsArticle) -> Option<Self> {
        let content = summary_source(article.content.as_deref(), article.description.as_deref()).ok()?;
        Some(Self {
            title: article.title.clone(),
            content: content.to_string(),
            description: article.description.clone(),
        })
    }

    /// See [`summary_source`]
    pub fn source_text(&self) -> Result<&str> {
        summary_source(Some(&self.content), self.description.as_deref())
    }

    /// Summary of this request's text with its reading time filled in
    pub fn summary(
        &self,
        summary: Option<String>,
        key_points: Option<Vec<String>>,
        words_per_minute: u32,
    ) -> Result<ArticleSummary> {
        let text = self.source_text()?;
        Ok(ArticleSummary::assemble(summary, key_points, text, words_per_minute))
    }
}

/// AI summary of an article as handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub summary: String,
    pub key_points: Vec<String>,
    /// minutes
    pub reading_time: u32,
}

impl ArticleSummary {
    /// Combine a (possibly partial) summarizer answer with the locally
    /// computed reading time of `content`.
    pub fn assemble(
        summary: Option<String>,
        key_points: Option<Vec<String>>,
        content: &str,
        words_per_minute: u32,
    ) -> Self {
        Self {
            summary: summary
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| SUMMARY_FALLBACK.to_string()),
            key_points: key_points.unwrap_or_default(),
            reading_time: reading_time(content, words_per_minute),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_time_rounds_up_with_minimum_of_one() {
        assert_eq!(reading_time("", DEFAULT_WORDS_PER_MINUTE), 1);
        assert_eq!(reading_time("one two three", DEFAULT_WORDS_PER_MINUTE), 1);
        let words_200 = vec!["w"; 200].join(" ");
        assert_eq!(reading_time(&words_200, 200), 1);
        let words_201 = vec!["w"; 201].join(" ");
        assert_eq!(reading_time(&words_201, 200), 2);
        assert_eq!(reading_time(&vec!["w"; 1000].join("\n\t "), 200), 5);
    }

    #[test]
    fn reading_time_with_zero_speed_does_not_panic() {
        assert_eq!(reading_time("a b c", 0), 3);
    }

    #[test]
    fn summary_source_prefers_content() {
        assert_eq!(summary_source(Some("body"), Some("desc")).unwrap(), "body");
        assert_eq!(summary_source(Some(""), Some("desc")).unwrap(), "desc");
        assert_eq!(summary_source(None, Some("desc")).unwrap(), "desc");
        assert!(matches!(summary_source(None, Some("")), Err(Error::EmptyArticle)));
        assert!(matches!(summary_source(None, None), Err(Error::EmptyArticle)));
    }

    #[test]
    fn assemble_falls_back_on_missing_parts() {
        let s = ArticleSummary::assemble(None, None, "short text", 200);
        assert_eq!(s.summary, SUMMARY_FALLBACK);
        assert!(s.key_points.is_empty());
        assert_eq!(s.reading_time, 1);

        let s = ArticleSummary::assemble(
            Some("Prices rose.".into()),
            Some(vec!["inflation up".into()]),
            "short text",
            200,
        );
        assert_eq!(s.summary, "Prices rose.");
        assert_eq!(s.key_points, vec!["inflation up".to_string()]);
    }

    #[test]
    fn serializes_camel_case() {
        let s = ArticleSummary::assemble(None, None, "", 200);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["keyPoints"], serde_json::json!([]));
        assert_eq!(json["readingTime"], 1);
    }

    #[test]
    fn summarize_request_falls_back_to_description() {
        let request: SummarizeRequest = serde_json::from_value(serde_json::json!({
            "title": "Storm",
            "content": "",
            "description": "Heavy winds"
        }))
        .unwrap();
        assert_eq!(request.source_text().unwrap(), "Heavy winds");

        let empty = SummarizeRequest {
            title: "t".into(),
            content: String::new(),
            description: None,
        };
        assert!(matches!(empty.source_text(), Err(Error::EmptyArticle)));
        assert!(matches!(empty.summary(None, None, 200), Err(Error::EmptyArticle)));
    }

    #[test]
    fn summarize_request_survives_json() {
        let request = SummarizeRequest {
            title: "Storm".into(),
            content: "Winds reached 100 km/h".into(),
            description: Some("Heavy winds".into()),
        };
        let text = serde_json::to_string(&request).unwrap();
        assert_eq!(serde_json::from_str::<SummarizeRequest>(&text).unwrap(), request);

        let bare: SummarizeRequest =
            serde_json::from_str(r#"{"title": "t", "content": "body"}"#).unwrap();
        assert!(bare.description.is_none());
        assert!(serde_json::to_value(&bare).unwrap().get("description").is_none());
    }

    #[test]
    fn summarize_request_from_article() {
        let article = NewsArticle::with_title("Storm").description("Heavy winds");
        let request = SummarizeRequest::from_article(&article).unwrap();
        assert_eq!(request.content, "Heavy winds");
        let summary = request.summary(Some("Windy.".into()), None, 200).unwrap();
        assert_eq!(summary.summary, "Windy.");
        assert_eq!(summary.reading_time, 1);

        assert!(SummarizeRequest::from_article(&NewsArticle::with_title("bare")).is_none());
    }
}
