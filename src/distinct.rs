//! Distinct-within-window sampling.
//!
//! Draws uniformly from a fixed pool while guaranteeing that none of the last
//! `skip_threshold` picks comes up again. There is no history buffer: the pool
//! itself is kept partitioned in place as
//!
//! ```text
//! [ recent picks (ineligible) | eligible candidates ]
//!   0 .. threshold_index        threshold_index .. len
//! ```
//!
//! Each draw picks a slot from the eligible suffix and swaps it into the
//! prefix slot under `skip_index`, which walks the prefix cyclically. The
//! element it displaces is the oldest recent pick, so it rejoins the eligible
//! suffix in FIFO order. During the first `skip_threshold` draws
//! (ramp-up) the prefix grows by one per draw; after that it stays at exactly
//! `skip_threshold` slots.
//!
//! This is the restricted Fisher–Yates step also known as a "shuffle bag with
//! cooldown". Every draw costs one RNG call and one swap.
//!
//! Notes:
//! - The guarantee is on pool *positions*. If the pool holds duplicate values,
//!   equal values can still appear inside the window.
//! - [`DistinctRandomSampler::with_rng`] and [`DistinctSamplerBuilder::seed`]
//!   exist for deterministic testing/benchmarking.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Errors for distinct-within-window sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SamplerError {
    /// A required construction argument was not supplied.
    InvalidArgument(&'static str),
    /// Drawing from a pool with no elements.
    EmptyPool,
}

impl std::fmt::Display for SamplerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            Self::EmptyPool => write!(f, "cannot sample from an empty pool"),
        }
    }
}

impl std::error::Error for SamplerError {}

/// Random selection from a pool that never repeats the last `skip_threshold` picks.
///
/// O(1) time and no allocation per draw. The pool is owned by the sampler and
/// permuted in place; its multiset of values never changes.
///
/// # Example
/// ```rust
/// use meguri::DistinctRandomSampler;
///
/// let mut sampler = DistinctRandomSampler::new(vec!["a", "b", "c", "d"], 2);
/// let first = *sampler.sample().unwrap();
/// let second = *sampler.sample().unwrap();
/// let third = *sampler.sample().unwrap();
/// assert_ne!(first, second);
/// assert!(third != first && third != second);
/// ```
#[derive(Debug, Clone)]
pub struct DistinctRandomSampler<T, R = ThreadRng> {
    values: Vec<T>,
    skip_threshold: usize,
    threshold_index: usize,
    skip_index: usize,
    rng: R,
}

impl<T> DistinctRandomSampler<T, ThreadRng> {
    /// Create a sampler over `values` backed by the thread-local RNG.
    ///
    /// `skip_threshold` is clamped into `[0, max(len - 1, 0)]`; out-of-range
    /// values are never an error.
    pub fn new(values: Vec<T>, skip_threshold: isize) -> Self {
        Self::with_rng(values, skip_threshold, rand::rng())
    }
}

impl<T> DistinctRandomSampler<T, StdRng> {
    /// Start configuring a sampler backed by a (optionally seeded) [`StdRng`].
    pub fn builder() -> DistinctSamplerBuilder<T> {
        DistinctSamplerBuilder::new()
    }
}

impl<T, R: Rng> DistinctRandomSampler<T, R> {
    /// Create a sampler using a caller-supplied RNG.
    pub fn with_rng(values: Vec<T>, skip_threshold: isize, rng: R) -> Self {
        let skip_threshold = clamp_threshold(skip_threshold, values.len());
        Self {
            values,
            skip_threshold,
            threshold_index: 0,
            skip_index: 0,
            rng,
        }
    }

    /// Draw the next element.
    ///
    /// The returned element is not one of the previous `skip_threshold` draws
    /// (fewer during ramp-up, when fewer draws exist).
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::EmptyPool`] if the pool has no elements.
    #[inline]
    pub fn sample(&mut self) -> Result<&T, SamplerError> {
        if self.values.is_empty() {
            return Err(SamplerError::EmptyPool);
        }

        // With threshold_index == 0 every slot is a candidate.
        let index = self.rng.random_range(self.threshold_index..self.values.len());
        let slot = self.skip_index;
        self.values.swap(index, slot);

        if self.threshold_index < self.skip_threshold {
            self.threshold_index += 1;
        }

        self.skip_index += 1;
        if self.skip_index >= self.skip_threshold {
            self.skip_index = 0;
        }

        Ok(&self.values[slot])
    }

    /// Effective window size after clamping.
    pub fn skip_threshold(&self) -> usize {
        self.skip_threshold
    }

    /// Number of elements in the pool.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if the pool has no elements (every draw fails).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The pool in its current (permuted) order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Elements currently barred from being drawn: the most recent picks.
    ///
    /// Unordered; `skip_index` rotates through this slice.
    pub fn recent(&self) -> &[T] {
        &self.values[..self.threshold_index]
    }

    /// Elements the next draw may return.
    pub fn eligible(&self) -> &[T] {
        &self.values[self.threshold_index..]
    }

    /// Consume the sampler and return the (permuted) pool.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

/// Endless stream of draws; yields nothing for an empty pool.
impl<T: Clone, R: Rng> Iterator for DistinctRandomSampler<T, R> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.sample().ok().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.values.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}

/// Builder for a [`DistinctRandomSampler`] backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct DistinctSamplerBuilder<T> {
    values: Option<Vec<T>>,
    skip_threshold: isize,
    seed: Option<u64>,
}

impl<T> Default for DistinctSamplerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DistinctSamplerBuilder<T> {
    /// Create an empty builder (no pool, window 0, unseeded).
    pub fn new() -> Self {
        Self {
            values: None,
            skip_threshold: 0,
            seed: None,
        }
    }

    /// Set the pool to sample from. Required.
    pub fn values(mut self, values: Vec<T>) -> Self {
        self.values = Some(values);
        self
    }

    /// Set the window size (clamped at build time).
    pub fn skip_threshold(mut self, skip_threshold: isize) -> Self {
        self.skip_threshold = skip_threshold;
        self
    }

    /// Set random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the sampler.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidArgument`] if no pool was supplied.
    pub fn build(self) -> Result<DistinctRandomSampler<T, StdRng>, SamplerError> {
        let values = self
            .values
            .ok_or(SamplerError::InvalidArgument("values must be provided"))?;
        let rng = match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Ok(DistinctRandomSampler::with_rng(
            values,
            self.skip_threshold,
            rng,
        ))
    }
}

fn clamp_threshold(skip_threshold: isize, len: usize) -> usize {
    match usize::try_from(skip_threshold) {
        Ok(s) => s.min(len.saturating_sub(1)),
        Err(_) => 0,
    }
}
