use meguri::{DistinctRandomSampler, SamplerError};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

proptest! {
    #[test]
    fn prop_threshold_is_clamped(
        len in 0usize..50,
        threshold in -100isize..100,
    ) {
        let s = DistinctRandomSampler::new(vec![0u8; len], threshold);

        let max = len.saturating_sub(1);
        let expected = if threshold < 0 {
            0
        } else {
            std::cmp::min(threshold as usize, max)
        };

        prop_assert_eq!(s.skip_threshold(), expected);
        prop_assert_eq!(s.len(), len);
    }

    #[test]
    fn prop_no_repeat_in_window(
        n in 1usize..40,
        threshold in -5isize..50,
        seed in any::<u64>(),
        draws in 0usize..500,
    ) {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let mut s = DistinctRandomSampler::with_rng((0..n).collect(), threshold, rng);
        let window = s.skip_threshold();

        let mut recent = VecDeque::with_capacity(window);
        for _ in 0..draws {
            let v = *s.sample().expect("pool non-empty");
            prop_assert!(v < n);
            prop_assert!(!recent.contains(&v), "{} repeated within {:?}", v, recent);
            if window == 0 {
                continue;
            }
            if recent.len() >= window {
                recent.pop_front();
            }
            recent.push_back(v);
        }
    }

    #[test]
    fn prop_pool_multiset_conserved(
        items in prop::collection::vec(0u8..5, 0..40),
        threshold in -5isize..50,
        seed in any::<u64>(),
        draws in 0usize..300,
    ) {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let mut s = DistinctRandomSampler::with_rng(items.clone(), threshold, rng);

        for _ in 0..draws {
            match s.sample() {
                Ok(v) => prop_assert!(items.contains(v)),
                Err(e) => {
                    prop_assert!(items.is_empty());
                    prop_assert_eq!(e, SamplerError::EmptyPool);
                }
            }
        }

        let mut before = items;
        let mut after = s.into_values();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_recent_window_fills_then_saturates(
        n in 1usize..30,
        threshold in 0isize..30,
        seed in any::<u64>(),
        draws in 0usize..100,
    ) {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let mut s = DistinctRandomSampler::with_rng((0..n).collect::<Vec<_>>(), threshold, rng);
        for _ in 0..draws {
            s.sample().expect("pool non-empty");
        }

        let window = s.skip_threshold();
        prop_assert_eq!(s.recent().len(), std::cmp::min(draws, window));
        prop_assert_eq!(s.recent().len() + s.eligible().len(), n);
    }
}
