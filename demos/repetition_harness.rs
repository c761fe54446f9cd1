//! Repetition check, speed run, and a few printed samples.
//!
//! Draws ten million times from a ten-element pool with a window of six,
//! shadowing the window in a queue to confirm nothing repeats too early.

use meguri::DistinctRandomSampler;
use std::collections::VecDeque;
use std::time::Instant;

const ITERATIONS: usize = 10_000_000;
const PRINT_COUNT: usize = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let values = vec![
        "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth",
        "Tenth",
    ];
    let mut sampler = DistinctRandomSampler::new(values, 6);

    println!("Repetition test started...");
    // The sampler may clamp the window, so size the shadow from it.
    let window = sampler.skip_threshold();
    let mut selected = VecDeque::with_capacity(window);
    for i in 0..ITERATIONS {
        let curr = *sampler.sample()?;
        if selected.contains(&curr) {
            println!("TEST FAILED at draw {i}: {curr} repeated within {selected:?}");
            return Ok(());
        }
        if window == 0 {
            continue;
        }
        if selected.len() >= window {
            selected.pop_front();
        }
        selected.push_back(curr);
    }
    println!("TEST PASSED\n");

    println!("Speed test started...");
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        std::hint::black_box(sampler.sample()?);
    }
    let elapsed = start.elapsed();
    println!(
        "{ITERATIONS} iterations done in {} ms.",
        elapsed.as_millis()
    );

    println!("\n\nFirst {PRINT_COUNT} samples:\n");
    for value in sampler.by_ref().take(PRINT_COUNT) {
        println!("{value}");
    }

    Ok(())
}
