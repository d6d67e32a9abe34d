use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::{
    utils::math::TermVector,
    vectorizer::tfidf::{SmoothedTfIdfEngine, TfIdfEngine},
};

/// IDF weights keyed by term
pub type IdfVector = TermVector<f64>;

/// Document count and per-term document frequency of one collection.
///
/// Built fresh for every ranking call and dropped afterwards; the query is
/// never added, so it cannot introduce terms into the IDF table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    /// number of documents added
    doc_num: u64,
    /// number of documents each term appears in at least once
    term_counts: TermVector<u64>,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: TermVector::new(),
        }
    }

    /// Build a corpus from one token sequence per document
    pub fn from_token_sets<T>(collection: &[Vec<T>]) -> Self
    where
        T: AsRef<str>,
    {
        let mut corpus = Self::new();
        for tokens in collection {
            corpus.add_set(tokens);
        }
        corpus
    }

    /// Add a document's terms to the corpus.
    /// Repeated terms inside the same document count once.
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        let seen: IndexSet<&str> = terms.iter().map(|t| t.as_ref()).collect();
        for term in seen {
            self.term_counts.add(term, 1);
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the document frequency of a term, 0 if unseen
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get_or_zero(term)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// IDF weight for every term of the corpus, computed by `E`
    pub fn idf_vector<E>(&self) -> IdfVector
    where
        E: TfIdfEngine,
    {
        self.term_counts
            .iter()
            .map(|(term, doc_freq)| (term.to_string(), E::idf(self.doc_num, doc_freq)))
            .collect()
    }
}

/// Build the smoothed IDF table of a collection of token sequences.
///
/// Every term seen in the collection gets `ln((N + 1) / (df + 1)) + 1`,
/// N being the number of sequences and df the number of sequences containing
/// the term.
pub fn build_idf<T>(collection: &[Vec<T>]) -> IdfVector
where
    T: AsRef<str>,
{
    Corpus::from_token_sets(collection).idf_vector::<SmoothedTfIdfEngine>()
}
