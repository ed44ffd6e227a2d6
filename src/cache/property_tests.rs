//! Property-Based Tests for Cache Module
//!
//! Uses proptest with a manual clock to check expiry behaviour without sleeping.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{ManualClock, TtlStore};

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);
const TEST_SOFT_CAP: usize = 100;

fn store_with_clock() -> (TtlStore<String>, ManualClock) {
    let clock = ManualClock::new();
    let store = TtlStore::with_clock(TEST_TTL, TEST_SOFT_CAP, Arc::new(clock.clone()));
    (store, clock)
}

// == Strategies ==
/// Arbitrary keys, including the empty string and delimiter characters
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_:%]{0,64}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,128}"
}

/// Milliseconds strictly inside the TTL window
fn within_ttl_strategy() -> impl Strategy<Value = u64> {
    0..=TEST_TTL.as_millis() as u64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a value and reading it back before expiry returns that value.
    #[test]
    fn prop_miss_then_hit(key in key_strategy(), value in value_strategy()) {
        let (mut store, _clock) = store_with_clock();

        prop_assert_eq!(store.get(&key), None);
        store.set(key.clone(), value.clone());
        prop_assert_eq!(store.get(&key), Some(value));
    }

    // Entries are live for any age up to the TTL and gone just after it.
    #[test]
    fn prop_expiry_boundary(
        key in key_strategy(),
        value in value_strategy(),
        age_ms in within_ttl_strategy(),
        overshoot_ms in 1u64..10_000,
    ) {
        let (mut store, clock) = store_with_clock();
        store.set(key.clone(), value.clone());

        clock.advance(Duration::from_millis(age_ms));
        prop_assert_eq!(store.get(&key), Some(value));

        let remaining = TEST_TTL.as_millis() as u64 - age_ms;
        clock.advance(Duration::from_millis(remaining + overshoot_ms));
        prop_assert_eq!(store.get(&key), None);
        prop_assert!(!store.contains_key(&key));
    }

    // A second write restarts the entry's lifetime and replaces its value.
    #[test]
    fn prop_refresh_resets_age(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy(),
        refresh_after_ms in within_ttl_strategy(),
    ) {
        let (mut store, clock) = store_with_clock();

        store.set(key.clone(), value1);
        clock.advance(Duration::from_millis(refresh_after_ms));
        store.set(key.clone(), value2.clone());

        // Past the first write's expiry, still within the second's.
        let since_refresh = TEST_TTL.as_millis() as u64 - refresh_after_ms + 1;
        let since_refresh = since_refresh.min(TEST_TTL.as_millis() as u64);
        clock.advance(Duration::from_millis(since_refresh));

        prop_assert_eq!(store.get(&key), Some(value2));
        prop_assert_eq!(store.len(), 1);
    }

    // Reading an unknown key never changes what is stored.
    #[test]
    fn prop_unknown_key_has_no_side_effects(
        keys in prop::collection::hash_set(key_strategy(), 0..20),
        probe in key_strategy(),
    ) {
        prop_assume!(!keys.contains(&probe));
        let (mut store, _clock) = store_with_clock();
        for key in &keys {
            store.set(key.clone(), "v".to_string());
        }

        prop_assert_eq!(store.get(&probe), None);
        prop_assert_eq!(store.len(), keys.len());
        for key in &keys {
            prop_assert!(store.contains_key(key));
        }
    }

    // Once a write crosses the soft cap, no expired entry remains stored.
    #[test]
    fn prop_sweep_clears_all_stale_entries(
        stale in prop::collection::hash_set("stale_[a-z0-9]{1,12}", 1..80),
        fresh in prop::collection::hash_set("fresh_[a-z0-9]{1,12}", 1..80),
    ) {
        let (mut store, clock) = store_with_clock();

        for key in &stale {
            store.set(key.clone(), "old".to_string());
        }
        clock.advance(TEST_TTL + Duration::from_secs(1));
        for key in &fresh {
            store.set(key.clone(), "new".to_string());
        }

        let total = stale.len() + fresh.len();
        if total > TEST_SOFT_CAP {
            prop_assert_eq!(store.len(), fresh.len());
            prop_assert!(stale.iter().all(|key| !store.contains_key(key)));
        } else {
            prop_assert_eq!(store.len(), total);
        }

        let survivors: HashSet<&String> = fresh.iter().filter(|k| store.contains_key(k)).collect();
        prop_assert_eq!(survivors.len(), fresh.len());
    }

    // Hits and misses add up to the number of reads performed.
    #[test]
    fn prop_statistics_accuracy(
        ops in prop::collection::vec((any::<bool>(), "[a-c]{1}", 0u64..400), 1..60)
    ) {
        let (mut store, clock) = store_with_clock();
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for (is_write, key, advance_secs) in ops {
            clock.advance(Duration::from_secs(advance_secs));
            if is_write {
                store.set(key, "v".to_string());
            } else {
                match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, store.len());
    }
}
