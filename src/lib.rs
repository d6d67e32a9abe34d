/// This crate ranks small sets of news articles by TF-IDF relevance to a query.
pub mod vectorizer;
pub mod utils;
pub mod article;
pub mod reading;
pub mod chat;
pub mod config;
pub mod error;

/// Rank documents by relevance
/// The main entry point of this crate.
/// Tokenizes the supplied collection and the query, builds a smoothed IDF
/// table from the collection, weights each document and the query with
/// TF-IDF and orders the documents by cosine similarity to the query.
///
/// Nothing is cached: every call works only on the collection it is given.
/// The sort is stable, so documents with equal scores keep their input order.
pub use vectorizer::{rank, rank_scored};

/// Relevance Ranker
/// Stateless ranker generic over the TF-IDF weighting engine.
/// `rank` and `rank_scored` are shorthands for `RelevanceRanker::<SmoothedTfIdfEngine>`.
pub use vectorizer::RelevanceRanker;

/// TF IDF Calculation Engine Trait
/// Defines how term counts and document frequencies become weights.
/// `SmoothedTfIdfEngine` uses raw counts and `ln((N + 1) / (df + 1)) + 1`.
pub use vectorizer::tfidf::{SmoothedTfIdfEngine, TfIdfEngine};

/// Search Hits
/// Scored results sorted by descending score.
pub use vectorizer::evaluate::scoring::Hits;

/// Search mode toggle
/// - `Text`: substring filter over title and description
/// - `Semantic`: relevance ranking
pub use vectorizer::search::{search, SearchMode};

/// Documents and news articles
/// `Document` is the only thing the ranker needs from its input.
pub use article::{Document, NewsArticle, Source};

/// Term frequency and corpus statistics
pub use vectorizer::{corpus::Corpus, token::TermFrequency};

/// Records exchanged with the summarization and chat collaborators
pub use reading::{ArticleSummary, SummarizeRequest};
pub use chat::{ChatMessage, ChatRequest, ChatResponse, ChatRole};

pub use config::Config;
pub use error::{Error, Result};
