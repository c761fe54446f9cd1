//! `meguri`: random draws that never repeat the most recent picks.
//!
//! A "distinct-within-window" sampler: each draw is uniform over the pool
//! minus the last `skip_threshold` picks, in O(1) time and O(1) extra space.
//! Recent picks are tracked by permuting the pool in place rather than by a
//! history buffer.
//!
//! Typical uses: playlists and quotes that should not repeat too soon, spawn
//! tables, load spreading across a small set of targets.
//!
//! Exposed modules:
//! - `distinct`: [`DistinctRandomSampler`], its builder, and [`SamplerError`].

#![forbid(unsafe_code)]

pub mod distinct;

pub use distinct::{DistinctRandomSampler, DistinctSamplerBuilder, SamplerError};
