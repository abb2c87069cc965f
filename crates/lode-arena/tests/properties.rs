//! Property tests for arena accounting and placement.

use lode_arena::{Arena, ArenaConfig, ArenaError};
use lode_core::align_up;
use lode_test_utils::{RegionPool, BUF_ALIGN, MAX_REGION_BYTES};
use proptest::prelude::*;

const H: usize = ArenaConfig::DEFAULT_HEADER_OVERHEAD;

fn arb_lens() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..=256, 0..6)
}

/// (size, alignment) pairs with power-of-two alignments up to the fixture
/// buffer alignment, so placement does not depend on where buffers land.
fn arb_requests() -> impl Strategy<Value = Vec<(usize, usize)>> {
    proptest::collection::vec((0usize..96, 0u32..5).prop_map(|(s, k)| (s, 1usize << k)), 0..40)
}

/// Whether any usable region could place `size` bytes at `align`, judged
/// from the public usage snapshot alone.
fn any_region_fits(arena: &Arena<'_, '_>, size: usize, align: usize) -> bool {
    arena.usage().any(|u| {
        if !u.usable {
            return false;
        }
        let base = arena.regions()[u.index].base_addr();
        let cursor = base + (u.len - u.remaining);
        let aligned = align_up(cursor, align).unwrap();
        let padding = aligned - cursor;
        padding <= u.remaining && u.remaining - padding >= size
    })
}

proptest! {
    #[test]
    fn reset_counts_match_usable_regions(lens in arb_lens()) {
        let mut pool = RegionPool::new(&lens);
        let mut table = pool.regions();
        let mut arena = Arena::new(&mut table);
        arena.reset();

        let usable: Vec<usize> = lens.iter().copied().filter(|&l| l >= H).collect();
        let raw: usize = usable.iter().sum();
        prop_assert_eq!(arena.total_count(), raw);
        prop_assert_eq!(arena.free_count(), raw - usable.len() * H);
        prop_assert_eq!(arena.usable_region_count(), usable.len());
    }

    #[test]
    fn allocations_are_aligned_disjoint_and_in_bounds(
        lens in arb_lens(),
        requests in arb_requests(),
    ) {
        let mut pool = RegionPool::new(&lens);
        let mut table = pool.regions();
        let mut arena = Arena::new(&mut table);
        arena.reset();

        let mut live: Vec<(usize, usize)> = Vec::new();
        for (size, align) in requests {
            let free_before = arena.free_count();
            let fits = any_region_fits(&arena, size, align);
            match arena.allocate_aligned(size, align) {
                Ok(p) => {
                    prop_assert!(fits);
                    let addr = p.as_ptr().addr();
                    prop_assert_eq!(addr % align, 0);
                    prop_assert!(arena.free_count() <= free_before - size);

                    let owner = arena.owner_of(p.as_ptr());
                    if size > 0 {
                        let owner = owner.expect("non-empty allocation inside a region");
                        prop_assert!(addr + size <= arena.regions()[owner].end_addr());
                        for &(start, len) in &live {
                            prop_assert!(addr + size <= start || start + len <= addr);
                        }
                        live.push((addr, size));
                    }
                }
                Err(err) => {
                    prop_assert!(!fits);
                    prop_assert_eq!(err, ArenaError::Exhausted { requested: size, align });
                    prop_assert_eq!(arena.free_count(), free_before);
                }
            }
            prop_assert!(arena.free_count() <= arena.total_count());
        }
    }

    #[test]
    fn reset_restores_post_reset_counts(
        lens in arb_lens(),
        requests in arb_requests(),
    ) {
        let mut pool = RegionPool::new(&lens);
        let mut table = pool.regions();
        let mut arena = Arena::new(&mut table);
        arena.reset();
        let baseline = (arena.total_count(), arena.free_count());

        for (size, align) in requests {
            let _ = arena.allocate_aligned(size, align);
        }
        arena.reset();
        prop_assert_eq!((arena.total_count(), arena.free_count()), baseline);
    }

    #[test]
    fn placement_is_deterministic(
        lens in arb_lens(),
        requests in arb_requests(),
    ) {
        // Offsets relative to each region's base, so the two pools'
        // differing addresses do not matter.
        fn run(lens: &[usize], requests: &[(usize, usize)]) -> Vec<Option<(usize, usize)>> {
            let mut pool = RegionPool::new(lens);
            let mut table = pool.regions();
            let mut arena = Arena::new(&mut table);
            arena.reset();
            let mut placements = Vec::with_capacity(requests.len());
            for &(size, align) in requests {
                let placement = arena.allocate_aligned(size, align).ok().and_then(|p| {
                    let addr = p.as_ptr().addr();
                    let region = arena.owner_of(p.as_ptr()).or_else(|| {
                        // Zero-size requests may sit one past a full region.
                        arena.regions().iter().position(|r| r.end_addr() == addr)
                    })?;
                    Some((region, addr - arena.regions()[region].base_addr()))
                });
                placements.push(placement);
            }
            placements
        }
        prop_assume!(requests.iter().all(|&(_, align)| align <= BUF_ALIGN));
        prop_assert_eq!(run(&lens, &requests), run(&lens, &requests));
    }

    #[test]
    fn request_larger_than_every_region_is_exhausted(lens in arb_lens()) {
        let mut pool = RegionPool::new(&lens);
        let mut table = pool.regions();
        let mut arena = Arena::new(&mut table);
        arena.reset();
        let free = arena.free_count();
        let size = MAX_REGION_BYTES + 1;
        prop_assert_eq!(
            arena.allocate_aligned(size, 1),
            Err(ArenaError::Exhausted { requested: size, align: 1 })
        );
        prop_assert_eq!(arena.free_count(), free);
    }
}
