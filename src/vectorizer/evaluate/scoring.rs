use std::fmt::{self, Debug};

use serde::Serialize;

use crate::utils::math::TermVector;

/// Cosine similarity between two TF-IDF vectors.
/// cosθ = A・B / (|A||B|)
///
/// A zero norm on either side is replaced by 1 before dividing, so a vector
/// without scoreable terms yields 0 instead of NaN. Both norms are guarded
/// independently. For non-negative weights the result lies in [0, 1].
#[inline]
pub fn cosine_similarity(a: &TermVector<f64>, b: &TermVector<f64>) -> f64 {
    cosine_with_norm(a, b, guarded_norm(b))
}

/// Cosine similarity against a vector whose guarded norm is already known.
/// Lets the ranker compute the query norm once per call.
#[inline]
pub(crate) fn cosine_with_norm(doc: &TermVector<f64>, query: &TermVector<f64>, query_norm: f64) -> f64 {
    doc.dot(query) / (guarded_norm(doc) * query_norm)
}

/// Euclidean norm, 1 when the norm is 0
#[inline]
pub(crate) fn guarded_norm(v: &TermVector<f64>) -> f64 {
    let norm = v.norm();
    if norm == 0.0 { 1.0 } else { norm }
}

/// Structure to store scored results
#[derive(Clone, PartialEq, Serialize)]
pub struct Hits<K> {
    /// (document, score)
    pub list: Vec<(K, f64)>,
}

impl<K> Hits<K> {
    /// Create a new Hits instance
    pub fn new(list: Vec<(K, f64)>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score.
    /// The sort is stable: equal scores keep their current relative order.
    pub fn sort_by_score(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|(_, s)| !s.is_nan());
        self.list.sort_by(|a, b| b.1.total_cmp(&a.1));
        self
    }

    /// Keep only the first `n` hits
    pub fn top(&mut self, n: usize) -> &mut Self {
        self.list.truncate(n);
        self
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.list.iter().map(|(_, s)| *s).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(K, f64)> + '_ {
        self.list.iter()
    }

    /// Drop the scores, keeping the order
    pub fn into_keys(self) -> Vec<K> {
        self.list.into_iter().map(|(k, _)| k).collect()
    }
}

impl<K> IntoIterator for Hits<K> {
    type Item = (K, f64);
    type IntoIter = std::vec::IntoIter<(K, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // one hit per line
            writeln!(f, "Hits [")?;
            for (key, score) in &self.list {
                writeln!(f, "    {:?}: {:.6}", key, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}
