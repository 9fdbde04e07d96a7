//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify freshness and overwrite behaviour of the store.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::cache::{CacheEntry, MemoryStore, ResultStore};

// == Strategies ==
fn url_strategy() -> impl Strategy<Value = String> {
    "https://[a-e]{1,3}\\.example(/[a-z]{0,4})?"
}

#[derive(Debug, Clone)]
struct Put {
    key: String,
    bytes: u64,
}

fn put_strategy() -> impl Strategy<Value = Put> {
    (url_strategy(), any::<u64>()).prop_map(|(key, bytes)| Put { key, bytes })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // An entry is fresh exactly while its age is below the TTL
    #[test]
    fn prop_freshness_matches_age(ttl_secs in 1u64..200_000, age_secs in 0u64..400_000) {
        let stored_at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let entry = CacheEntry::new(json!({}), stored_at);
        let now = stored_at + chrono::Duration::seconds(age_secs as i64);

        prop_assert_eq!(
            entry.is_fresh(now, Duration::from_secs(ttl_secs)),
            age_secs < ttl_secs
        );
    }

    // After any sequence of puts, each key holds its last written value
    #[test]
    fn prop_last_write_wins(puts in prop::collection::vec(put_strategy(), 1..40)) {
        let store = MemoryStore::new();
        let mut model: HashMap<String, u64> = HashMap::new();

        tokio_test::block_on(async {
            for put in &puts {
                store
                    .put(put.key.clone(), CacheEntry::new(json!({ "bytes": put.bytes }), Utc::now()))
                    .await
                    .unwrap();
                model.insert(put.key.clone(), put.bytes);
            }
        });

        let len = tokio_test::block_on(store.len()).unwrap();
        prop_assert_eq!(len, model.len());

        for (key, bytes) in &model {
            let entry = tokio_test::block_on(store.get(key)).unwrap();
            prop_assert_eq!(entry.map(|e| e.value), Some(json!({ "bytes": bytes })));
        }
    }
}
