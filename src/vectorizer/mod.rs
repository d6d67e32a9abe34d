pub mod corpus;
pub mod tfidf;
pub mod token;
pub mod evaluate;
pub mod search;

use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::{
    article::Document,
    vectorizer::{
        corpus::Corpus,
        evaluate::scoring::{cosine_with_norm, guarded_norm, Hits},
        tfidf::{vectorize_with, SmoothedTfIdfEngine, TfIdfEngine},
        token::{term_frequency, tokenize},
    },
};

/// Relevance Ranker
///
/// Orders a document collection by TF-IDF cosine similarity to a query.
/// Nothing is kept between calls: every call tokenizes the collection,
/// builds the IDF table from it (the query is not part of it), vectorizes
/// each document and the query against that table, scores, and sorts.
///
/// `E` picks the weighting; the default is [`SmoothedTfIdfEngine`].
/// The ranker holds no state and runs on the calling thread; one instance
/// can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct RelevanceRanker<E = SmoothedTfIdfEngine>
where
    E: TfIdfEngine,
{
    _marker: PhantomData<fn() -> E>,
}

impl<E> Default for RelevanceRanker<E>
where
    E: TfIdfEngine,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> RelevanceRanker<E>
where
    E: TfIdfEngine,
{
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Score every document against `query` and return them sorted by
    /// descending score. Equal scores keep their input order.
    pub fn rank_scored<'a, D>(&self, documents: &'a [D], query: &str) -> Hits<&'a D>
    where
        D: Document,
    {
        let docs_tokens: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(&doc.text_blob()))
            .collect();
        let idf = Corpus::from_token_sets(&docs_tokens).idf_vector::<E>();

        let query_freq = term_frequency(&tokenize(query));
        let query_vec = vectorize_with::<E>(&query_freq, &idf);
        let query_norm = guarded_norm(&query_vec);
        debug!(
            documents = documents.len(),
            vocabulary = idf.len(),
            query_terms = query_freq.vocab_size(),
            "ranking documents"
        );

        let scored: Vec<(&'a D, f64)> = documents
            .iter()
            .zip(&docs_tokens)
            .enumerate()
            .map(|(idx, (doc, tokens))| {
                let doc_vec = vectorize_with::<E>(&term_frequency(tokens), &idf);
                let score = cosine_with_norm(&doc_vec, &query_vec, query_norm);
                trace!(idx, score, "scored document");
                (doc, score)
            })
            .collect();

        let mut hits = Hits::new(scored);
        hits.sort_by_score();
        hits
    }

    /// Same documents, most relevant first
    pub fn rank<'a, D>(&self, documents: &'a [D], query: &str) -> Vec<&'a D>
    where
        D: Document,
    {
        self.rank_scored(documents, query).into_keys()
    }
}

/// Rank documents by relevance to `query` with the default engine.
///
/// # Arguments
/// * `documents` - the collection to order, left untouched
/// * `query` - free text query
///
/// # Returns
/// * `Vec<&D>` - references to the same documents, most relevant first.
///   Documents with equal scores (including all-zero scores for an empty
///   or out-of-vocabulary query) stay in input order.
///
/// # Examples
/// ```
/// use news_rank::rank;
/// let docs = ["the cat sat on the mat", "dogs bark at cats", "stock market rises today"];
/// let ranked = rank(&docs, "cat");
/// assert_eq!(ranked, vec![&docs[0], &docs[1], &docs[2]]);
/// ```
pub fn rank<'a, D>(documents: &'a [D], query: &str) -> Vec<&'a D>
where
    D: Document,
{
    RelevanceRanker::<SmoothedTfIdfEngine>::new().rank(documents, query)
}

/// [`rank`], keeping the cosine score of each document
pub fn rank_scored<'a, D>(documents: &'a [D], query: &str) -> Hits<&'a D>
where
    D: Document,
{
    RelevanceRanker::<SmoothedTfIdfEngine>::new().rank_scored(documents, query)
}
