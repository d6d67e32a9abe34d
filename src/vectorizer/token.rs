use serde::{Deserialize, Serialize};

use crate::utils::math::TermVector;

/// Split text into normalized tokens.
///
/// The text is ASCII lower-cased and split on every maximal run of
/// characters outside `[a-z0-9]`. Empty pieces are dropped. Order and
/// duplicates are kept, since term counting happens downstream.
///
/// # Arguments
/// * `text` - text to tokenize
///
/// # Returns
/// * `Vec<String>` - tokens in text order
///
/// # Examples
/// ```
/// use news_rank::vectorizer::token::tokenize;
/// assert_eq!(tokenize("Stock-market RISES, 2024!"), vec!["stock", "market", "rises", "2024"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.to_ascii_lowercase())
        .collect()
}

/// Count term occurrences of a token sequence
///
/// # Arguments
/// * `tokens` - token sequence, usually from [`tokenize`]
///
/// # Returns
/// * `TermFrequency` - raw counts, no length normalization
pub fn term_frequency<T>(tokens: &[T]) -> TermFrequency
where
    T: AsRef<str>,
{
    let mut freq = TermFrequency::new();
    freq.add_terms(tokens);
    freq
}

/// TermFrequency
/// Raw occurrence counts of each term within one document (or one query).
///
/// Terms that never occurred are absent, never stored with a zero count.
/// Counts are not divided by the document length.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    term_count: TermVector<u32>,
    total_term_count: u64,
}

impl TermFrequency {
    pub fn new() -> Self {
        Self {
            term_count: TermVector::new(),
            total_term_count: 0,
        }
    }

    /// Add one occurrence of a term
    ///
    /// # Arguments
    /// * `term` - term to count
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        self.term_count.add(term, 1);
        self.total_term_count += 1;
        self
    }

    /// Add one occurrence of every term in the slice
    ///
    /// # Arguments
    /// * `terms` - terms to count
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Occurrence count of a term, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get_or_zero(term)
    }

    /// Total number of counted occurrences
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_term(term)
    }

    /// (term, count) pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.term_count.iter()
    }

    /// Distinct terms in first-seen order
    pub fn term_set(&self) -> impl Iterator<Item = &str> + '_ {
        self.term_count.terms()
    }

    pub fn as_vector(&self) -> &TermVector<u32> {
        &self.term_count
    }
}

impl<T> FromIterator<T> for TermFrequency
where
    T: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut freq = TermFrequency::new();
        for term in iter {
            freq.add_term(term.as_ref());
        }
        freq
    }
}
