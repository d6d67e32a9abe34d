use std::ops::AddAssign;

use indexmap::IndexMap;
use num::Num;
use serde::{Deserialize, Serialize};

/// Sparse vector keyed by term.
///
/// Only terms that were explicitly inserted are stored, so an absent term
/// reads as zero. Entries keep insertion order, which makes every iteration
/// (and every floating point sum built from it) reproducible between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermVector<N>
where
    N: Num + Copy,
{
    entries: IndexMap<String, N>,
}

impl<N> Default for TermVector<N>
where
    N: Num + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> TermVector<N>
where
    N: Num + Copy,
{
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Set the weight of a term, replacing any previous value
    #[inline]
    pub fn insert(&mut self, term: &str, value: N) {
        if let Some(slot) = self.entries.get_mut(term) {
            *slot = value;
        } else {
            self.entries.insert(term.to_string(), value);
        }
    }

    /// Weight of a term, `None` if the term was never inserted
    #[inline]
    pub fn get(&self, term: &str) -> Option<N> {
        self.entries.get(term).copied()
    }

    /// Weight of a term, zero if the term was never inserted
    #[inline]
    pub fn get_or_zero(&self, term: &str) -> N {
        self.get(term).unwrap_or_else(N::zero)
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Number of stored terms
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, N)> + '_ {
        self.entries.iter().map(|(term, value)| (term.as_str(), *value))
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

impl<N> TermVector<N>
where
    N: Num + Copy + AddAssign,
{
    /// Add `value` to the weight of `term`, inserting it if absent
    #[inline]
    pub fn add(&mut self, term: &str, value: N) {
        if let Some(slot) = self.entries.get_mut(term) {
            *slot += value;
        } else {
            self.entries.insert(term.to_string(), value);
        }
    }
}

impl<N> TermVector<N>
where
    N: Num + Copy + Into<f64>,
{
    /// Dot product with another term vector.
    /// Walks the smaller of the two vectors and looks terms up in the larger.
    #[inline]
    pub fn dot<M>(&self, other: &TermVector<M>) -> f64
    where
        M: Num + Copy + Into<f64>,
    {
        let mut result = 0.0;
        if self.len() <= other.len() {
            for (term, value) in self.iter() {
                if let Some(o) = other.get(term) {
                    result += value.into() * o.into();
                }
            }
        } else {
            for (term, o) in other.iter() {
                if let Some(value) = self.get(term) {
                    result += value.into() * o.into();
                }
            }
        }
        result
    }

    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.entries
            .values()
            .map(|v| {
                let v: f64 = (*v).into();
                v * v
            })
            .sum()
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }
}

impl<N> FromIterator<(String, N)> for TermVector<N>
where
    N: Num + Copy,
{
    fn from_iter<T: IntoIterator<Item = (String, N)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
