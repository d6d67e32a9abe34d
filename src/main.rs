use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use news_rank::{
    article::load_articles,
    reading::{reading_time, summary_source},
    search, Config, NewsArticle, SearchMode,
};

/// Rank or filter a set of news articles against a query
#[derive(Debug, Parser)]
#[command(name = "news-rank", version, about)]
struct Cli {
    /// JSON file: an array of articles or a news provider response
    articles: PathBuf,

    /// Search query; blank keeps the provider order
    #[arg(default_value = "")]
    query: String,

    /// text (substring filter) or semantic (TF-IDF ranking)
    #[arg(long)]
    mode: Option<SearchMode>,

    /// Print the relevance score of each article (semantic mode)
    #[arg(long)]
    scores: bool,

    /// Print at most this many articles
    #[arg(long)]
    limit: Option<usize>,

    /// Print the estimated reading time of each article
    #[arg(long)]
    reading_time: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("reading NEWS_RANK_* settings")?;
    let mode = cli.mode.unwrap_or(config.mode);

    let file = File::open(&cli.articles)
        .with_context(|| format!("opening {}", cli.articles.display()))?;
    let mut articles = load_articles(BufReader::new(file))
        .with_context(|| format!("loading articles from {}", cli.articles.display()))?;
    articles.truncate(config.page_size);

    let limit = cli.limit.unwrap_or(usize::MAX);
    if show_scores(cli.scores, mode) {
        let hits = news_rank::rank_scored(&articles, &cli.query);
        for (i, (article, score)) in hits.iter().take(limit).enumerate() {
            print_line(i, Some(*score), article, &cli, &config);
        }
    } else {
        for (i, article) in search(&articles, &cli.query, mode).into_iter().take(limit).enumerate() {
            print_line(i, None, article, &cli, &config);
        }
    }
    Ok(())
}

/// Scores only exist in semantic mode; asking for them in text mode is
/// reported and otherwise ignored.
fn show_scores(requested: bool, mode: SearchMode) -> bool {
    if requested && mode == SearchMode::Text {
        warn!(%mode, "--scores has no effect in text mode");
    }
    requested && mode == SearchMode::Semantic
}

fn print_line(i: usize, score: Option<f64>, article: &NewsArticle, cli: &Cli, config: &Config) {
    let mut line = format!("{:>3}.", i + 1);
    if let Some(score) = score {
        line.push_str(&format!(" [{:.4}]", score));
    }
    line.push(' ');
    line.push_str(&article.title);
    if cli.reading_time {
        if let Ok(text) = summary_source(article.content.as_deref(), article.description.as_deref()) {
            line.push_str(&format!(" ({} min read)", reading_time(text, config.words_per_minute)));
        }
    }
    println!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_only_in_semantic_mode() {
        assert!(show_scores(true, SearchMode::Semantic));
        assert!(!show_scores(true, SearchMode::Text));
        assert!(!show_scores(false, SearchMode::Semantic));
        assert!(!show_scores(false, SearchMode::Text));
    }

    #[test]
    fn cli_accepts_scores_with_any_mode() {
        let cli = Cli::try_parse_from(["news-rank", "a.json", "rates", "--mode", "text", "--scores"]).unwrap();
        assert_eq!(cli.mode, Some(SearchMode::Text));
        assert!(cli.scores);
        assert_eq!(cli.query, "rates");
    }
}
