use crate::{
    utils::math::TermVector,
    vectorizer::{corpus::IdfVector, token::TermFrequency},
};

/// TF-IDF weighting strategy.
///
/// Implementors decide how a raw term count and a document frequency turn
/// into weights. The ranker is generic over this trait; the default engine is
/// [`SmoothedTfIdfEngine`].
pub trait TfIdfEngine {
    /// IDF weight of a term
    /// # Arguments
    /// * `doc_num` - number of documents in the collection
    /// * `doc_freq` - number of documents containing the term
    fn idf(doc_num: u64, doc_freq: u64) -> f64;

    /// TF weight of a term occurring `count` times in one document
    fn tf(count: u32) -> f64;
}

/// Raw counts for TF and the smoothed IDF `ln((N + 1) / (df + 1)) + 1`.
///
/// The smoothing keeps every weight strictly positive, including terms that
/// appear in every document, and never divides by zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothedTfIdfEngine;

impl TfIdfEngine for SmoothedTfIdfEngine {
    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((doc_num as f64 + 1.0) / (doc_freq as f64 + 1.0)).ln() + 1.0
    }

    #[inline]
    fn tf(count: u32) -> f64 {
        count as f64
    }
}

/// Weight a term frequency map with an IDF table.
///
/// Every term of `freq` is kept. A term missing from `idf` (a query word the
/// collection never uses) gets weight 0 and so never contributes to a dot
/// product.
pub fn vectorize_with<E>(freq: &TermFrequency, idf: &IdfVector) -> TermVector<f64>
where
    E: TfIdfEngine,
{
    let mut vec = TermVector::with_capacity(freq.vocab_size());
    for (term, count) in freq.iter() {
        vec.insert(term, E::tf(count) * idf.get_or_zero(term));
    }
    vec
}

/// [`vectorize_with`] using [`SmoothedTfIdfEngine`]
pub fn vectorize(freq: &TermFrequency, idf: &IdfVector) -> TermVector<f64> {
    vectorize_with::<SmoothedTfIdfEngine>(freq, idf)
}
