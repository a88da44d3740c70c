//! Weighted random sampling over arbitrary value sets.
//!
//! A [`WeightedSampler`] is built once from a list of (value, weight) pairs
//! and then drawn from repeatedly. Construction flattens the entries into a
//! sample pool in which each value appears exactly `weight` times; a draw is
//! a single uniform index into that pool, which makes the selection
//! probability of each entry `weight / total_weight`. Values duplicated
//! across entries have their probabilities merged implicitly by the
//! flattening.
//!
//! Draws are independent and the pool is immutable after construction, so a
//! sampler can be shared freely across call sites; each caller supplies its
//! own [`Rng`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::SamplerError;

/// A value paired with its integer selection weight.
///
/// A weight of zero is legal and makes the value unreachable without being
/// an error. Fractional weights are unrepresentable by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEntry<T> {
    pub value: T,
    pub weight: u64,
}

impl<T> WeightedEntry<T> {
    pub fn new(value: T, weight: u64) -> Self {
        Self { value, weight }
    }
}

/// A weighted entry as it arrives from untrusted input (JSON config, user
/// tables), before either field has been checked for presence.
///
/// [`WeightedSampler::build`] validates every raw entry up front and fails
/// with [`SamplerError::InvalidEntry`] on the first entry missing a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEntry<T> {
    pub value: Option<T>,
    pub weight: Option<u64>,
}

impl<T> RawEntry<T> {
    /// Promote to a typed entry, naming the missing field on failure.
    fn validate(self, index: usize) -> Result<WeightedEntry<T>, SamplerError> {
        let value = self.value.ok_or(SamplerError::InvalidEntry {
            index,
            missing: "value",
        })?;
        let weight = self.weight.ok_or(SamplerError::InvalidEntry {
            index,
            missing: "weight",
        })?;
        Ok(WeightedEntry { value, weight })
    }
}

/// A reusable weighted sampler over an immutable, flattened sample pool.
#[derive(Debug, Clone)]
pub struct WeightedSampler<T> {
    pool: Vec<T>,
}

impl<T: Clone> WeightedSampler<T> {
    /// Build a sampler from typed entries. Cannot fail: both fields are
    /// guaranteed present, and a total weight of zero only defers failure
    /// to the first [`sample`](Self::sample) call.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = WeightedEntry<T>>,
    {
        let mut pool = Vec::new();
        for entry in entries {
            for _ in 0..entry.weight {
                pool.push(entry.value.clone());
            }
        }
        Self { pool }
    }

    /// Build a sampler from raw entries, validating every entry before any
    /// pool construction. No partial pool is observable on failure.
    pub fn build(entries: Vec<RawEntry<T>>) -> Result<Self, SamplerError> {
        let validated = entries
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.validate(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_entries(validated))
    }

    /// Consume the sampler and return a closure drawing owned values from a
    /// thread-local RNG. The closure form of the factory contract.
    pub fn into_fn(self) -> impl FnMut() -> Result<T, SamplerError> {
        let mut rng = rand::thread_rng();
        move || self.sample(&mut rng).cloned()
    }
}

impl<T> WeightedSampler<T> {
    /// Draw one value uniformly from the pool.
    ///
    /// Each draw is independent; no state is mutated between calls. Fails
    /// with [`SamplerError::EmptyPool`] when the total weight is zero.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T, SamplerError> {
        if self.pool.is_empty() {
            return Err(SamplerError::EmptyPool);
        }
        let index = rng.gen_range(0..self.pool.len());
        Ok(&self.pool[index])
    }

    /// The flattened pool, in construction order: `len == sum(weights)`.
    pub fn pool(&self) -> &[T] {
        &self.pool
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}
