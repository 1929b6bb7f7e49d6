//! Property tests for fire/reload invariants

use nerf_fleet::core::{GunId, GunModel};
use nerf_fleet::fleet::{FireOutcome, GunRecord, GunRegistry, RandomSource, ReloadOutcome};
use proptest::prelude::*;

fn gun(capacity: u32) -> GunRecord {
    GunRecord::new(GunModel::Commander, GunId::from("props"), 150, capacity)
}

proptest! {
    #[test]
    fn new_gun_is_full(capacity in 144u32..10_000) {
        prop_assert_eq!(gun(capacity).ammo(), capacity);
    }

    #[test]
    fn fire_spends_exactly_one(capacity in 144u32..400, shots in 0u32..600, seed in any::<u64>()) {
        let mut rng = RandomSource::seeded(seed);
        let mut g = gun(capacity);
        for _ in 0..shots {
            let before = g.ammo();
            let outcome = g.fire(&mut rng);
            if before == 0 {
                prop_assert_eq!(outcome, FireOutcome::Empty);
                prop_assert_eq!(g.ammo(), 0);
            } else {
                prop_assert_eq!(g.ammo(), before - 1);
            }
        }
        prop_assert_eq!(g.ammo(), capacity.saturating_sub(shots));
    }

    #[test]
    fn reload_adds_or_rejects(capacity in 144u32..400, spent in 1u32..144, amount in 0u32..300) {
        let mut rng = RandomSource::seeded(0);
        let mut g = gun(capacity);
        for _ in 0..spent {
            g.fire(&mut rng);
        }
        let before = g.ammo();

        let outcome = g.reload(amount);

        if before + amount <= capacity {
            prop_assert_eq!(g.ammo(), before + amount);
            let reloaded = matches!(outcome, ReloadOutcome::Reloaded { .. });
            prop_assert!(reloaded);
        } else {
            prop_assert_eq!(g.ammo(), before);
            prop_assert!(outcome.is_error());
        }
    }

    #[test]
    fn reload_on_full_gun_is_noop(capacity in 144u32..400, amount in any::<u32>()) {
        let mut g = gun(capacity);
        prop_assert_eq!(g.reload(amount), ReloadOutcome::AlreadyLoaded);
        prop_assert_eq!(g.ammo(), capacity);
    }

    #[test]
    fn unique_identifier_never_collides(count in 1usize..60, seed in any::<u64>()) {
        let mut rng = RandomSource::seeded(seed);
        let mut registry = GunRegistry::new();
        for _ in 0..count {
            let id = registry.generate_unique_identifier(&mut rng);
            prop_assert!(!registry.contains(&id));
            registry.add(GunRecord::new(GunModel::Elite, id, 100, 150)).unwrap();
        }
        prop_assert_eq!(registry.len(), count);
    }
}
