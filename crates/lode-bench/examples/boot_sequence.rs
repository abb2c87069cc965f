//! Init-phase allocation example.
//!
//! Demonstrates: build region table → Arena → reset → allocate a burst →
//! inspect per-region usage → reset → repeat. Run with
//! `RUST_LOG=lode_arena=trace` to see every placement.

use lode_arena::{Arena, ArenaError};
use lode_bench::fragmented_profile;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== lode boot sequence example ===\n");

    let profile = fragmented_profile(7);
    let mut pool = profile.pool();
    let mut table = pool.regions();
    let mut arena = Arena::new(&mut table);

    for round in 1..=2 {
        arena.reset();
        println!(
            "Round {round}: {} regions ({} usable), total {} bytes, free {} bytes",
            arena.region_count(),
            arena.usable_region_count(),
            arena.total_count(),
            arena.free_count()
        );

        let mut placed = 0usize;
        for &(size, align) in &profile.requests {
            match arena.allocate_aligned(size, align) {
                Ok(_) => placed += 1,
                Err(ArenaError::Exhausted { requested, .. }) => {
                    tracing::info!(requested, "request did not fit, stopping");
                    break;
                }
                Err(err) => panic!("unexpected arena error: {err}"),
            }
        }

        println!(
            "  placed {placed}/{} requests, {} bytes used, {} bytes free",
            profile.requests.len(),
            arena.used_count(),
            arena.free_count()
        );
        for usage in arena.usage().filter(|u| u.used > 0) {
            println!(
                "  region {:>2}: {:>3} used, {:>3} remaining of {:>3}",
                usage.index, usage.used, usage.remaining, usage.len
            );
        }
        println!();
    }
}
