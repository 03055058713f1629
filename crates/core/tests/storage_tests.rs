// ═══════════════════════════════════════════════════════════════════
// Storage Tests: File Envelope, Token Stores, Session, Filter Store, Query Cache
// ═══════════════════════════════════════════════════════════════════

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use atlas_core::errors::CoreError;
use atlas_core::models::auth::TokenPair;
use atlas_core::models::filters::PropertyFilters;
use atlas_core::models::property::PropertyType;
use atlas_core::storage::cache::{QueryCache, ResourceTag, Tag};
use atlas_core::storage::filter_store::FilterStore;
use atlas_core::storage::format::{self, CURRENT_VERSION, FORMAT};
use atlas_core::storage::session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};

// ═══════════════════════════════════════════════════════════════════
// File Envelope
// ═══════════════════════════════════════════════════════════════════

mod envelope {
    use super::*;

    #[test]
    fn test_header_is_written() {
        let bytes = format::write_file(&vec![1, 2, 3]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["format"], FORMAT);
        assert_eq!(value["version"], CURRENT_VERSION);
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_not_json_is_invalid_format() {
        let err = format::read_file::<Vec<u32>>(b"\x00\x01binary").unwrap_err();
        assert!(matches!(err, CoreError::InvalidFileFormat(_)));
    }

    #[test]
    fn test_wrong_marker_is_invalid_format() {
        let bytes = br#"{"format":"savings","version":1,"data":[]}"#;
        let err = format::read_file::<Vec<u32>>(bytes).unwrap_err();
        assert!(matches!(err, CoreError::InvalidFileFormat(_)));
    }

    #[test]
    fn test_future_version_is_unsupported() {
        let bytes = br#"{"format":"atlas","version":99,"data":[]}"#;
        let err = format::read_file::<Vec<u32>>(bytes).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedVersion(99)));
    }

    #[test]
    fn test_version_zero_is_unsupported() {
        let bytes = br#"{"format":"atlas","version":0,"data":[]}"#;
        let err = format::read_file::<Vec<u32>>(bytes).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedVersion(0)));
    }

    #[test]
    fn test_bad_payload_is_deserialization_error() {
        let bytes = br#"{"format":"atlas","version":1,"data":"nope"}"#;
        let err = format::read_file::<Vec<u32>>(bytes).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Token Stores
// ═══════════════════════════════════════════════════════════════════

mod token_stores {
    use super::*;

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.json");

        FileTokenStore::new(&path)
            .save(&TokenPair::new("acc", "ref"))
            .unwrap();
        let loaded = FileTokenStore::new(&path).load().unwrap();
        assert_eq!(loaded, Some(TokenPair::new("acc", "ref")));
    }

    #[test]
    fn test_file_store_missing_file_is_logged_out() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("missing.json"));
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_clear_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let store = FileTokenStore::new(&path);
        store.save(&TokenPair::new("a", "r")).unwrap();
        store.clear().unwrap();
        assert!(!path.exists());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_rejects_foreign_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "access=abc").unwrap();
        let err = FileTokenStore::new(&path).load().unwrap_err();
        assert!(matches!(err, CoreError::InvalidFileFormat(_)));
    }

    #[test]
    fn test_file_store_overwrite_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let store = FileTokenStore::new(&path);
        store.save(&TokenPair::new("first", "r1")).unwrap();
        store.save(&TokenPair::new("second", "r2")).unwrap();

        assert_eq!(store.load().unwrap(), Some(TokenPair::new("second", "r2")));
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("session.json")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        FileTokenStore::new(&path)
            .save(&TokenPair::new("acc", "ref"))
            .unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let debug = format!("{:?}", TokenPair::new("secret-access", "secret-refresh"));
        assert!(!debug.contains("secret"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Session
// ═══════════════════════════════════════════════════════════════════

mod session {
    use super::*;

    #[test]
    fn test_empty_session() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());
        assert_eq!(session.access_token(), None);
        assert_eq!(session.refresh_token(), None);
    }

    #[test]
    fn test_blank_tokens_are_ignored() {
        let session = Session::new(Arc::new(MemoryTokenStore::with_tokens(TokenPair::new("", ""))));
        assert!(!session.is_authenticated());
        assert_eq!(session.refresh_token(), None);
    }

    #[test]
    fn test_clones_share_store() {
        let session = Session::in_memory();
        let other = session.clone();
        session.store_tokens(&TokenPair::new("a1", "r1")).unwrap();
        assert_eq!(other.access_token().as_deref(), Some("a1"));

        other.clear().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_refresh_keeps_refresh_token_unless_rotated() {
        let session = Session::in_memory();
        session.store_tokens(&TokenPair::new("a1", "r1")).unwrap();

        session.update_access_token("a2", None).unwrap();
        assert_eq!(session.tokens(), Some(TokenPair::new("a2", "r1")));

        session.update_access_token("a3", Some("r2")).unwrap();
        assert_eq!(session.tokens(), Some(TokenPair::new("a3", "r2")));
    }

    #[test]
    fn test_unreadable_store_counts_as_logged_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        let session = Session::new(Arc::new(FileTokenStore::new(&path)));
        assert_eq!(session.tokens(), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Filter Store
// ═══════════════════════════════════════════════════════════════════

mod filter_store {
    use super::*;

    #[test]
    fn test_round_trip_drops_pagination() {
        let dir = TempDir::new().unwrap();
        let store = FilterStore::new(dir.path().join("filters.json"));
        let filters = PropertyFilters {
            page: Some(4),
            page_size: Some(24),
            search: Some("Cascais".into()),
            property_type: vec![PropertyType::House],
            ..Default::default()
        };

        store.save(&filters).unwrap();
        let restored = store.load().unwrap().unwrap();
        assert_eq!(restored.page, None);
        assert_eq!(restored.page_size, None);
        assert_eq!(restored.search.as_deref(), Some("Cascais"));
        assert_eq!(restored.property_type, vec![PropertyType::House]);
    }

    #[test]
    fn test_nothing_saved() {
        let dir = TempDir::new().unwrap();
        let store = FilterStore::new(dir.path().join("filters.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let store = FilterStore::new(dir.path().join("filters.json"));
        store.save(&PropertyFilters::default()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }
}

// ═══════════════════════════════════════════════════════════════════
// Query Cache
// ═══════════════════════════════════════════════════════════════════

mod query_cache {
    use super::*;

    async fn fetch_counting(
        cache: &QueryCache,
        key: &str,
        tags: Vec<Tag>,
        calls: &AtomicUsize,
        value: u32,
    ) -> Result<u32, CoreError> {
        cache
            .get_or_fetch(key, tags, move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(value)
            })
            .await
    }

    #[tokio::test]
    async fn test_second_read_is_served_from_cache() {
        let cache = QueryCache::new();
        let calls = AtomicUsize::new(0);
        let tags = vec![Tag::id(ResourceTag::Portfolio, 5)];

        assert_eq!(fetch_counting(&cache, "p5", tags.clone(), &calls, 1).await.unwrap(), 1);
        assert_eq!(fetch_counting(&cache, "p5", tags, &calls, 2).await.unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(cache.is_fresh("p5"));
        assert!(cache.fetched_at("p5").is_some());
    }

    #[tokio::test]
    async fn test_invalidation_by_id_is_targeted() {
        let cache = QueryCache::new();
        let calls = AtomicUsize::new(0);
        fetch_counting(&cache, "p5", vec![Tag::id(ResourceTag::Portfolio, 5)], &calls, 5)
            .await
            .unwrap();
        fetch_counting(&cache, "p6", vec![Tag::id(ResourceTag::Portfolio, 6)], &calls, 6)
            .await
            .unwrap();

        assert_eq!(cache.invalidate(&[Tag::id(ResourceTag::Portfolio, 5)]), 1);
        assert!(!cache.is_fresh("p5"));
        assert!(cache.is_fresh("p6"));

        let refetched = fetch_counting(&cache, "p5", vec![Tag::id(ResourceTag::Portfolio, 5)], &calls, 50)
            .await
            .unwrap();
        assert_eq!(refetched, 50);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_invalidating_resource_covers_every_id() {
        let cache = QueryCache::new();
        let calls = AtomicUsize::new(0);
        fetch_counting(&cache, "p5", vec![Tag::id(ResourceTag::Portfolio, 5)], &calls, 5)
            .await
            .unwrap();
        fetch_counting(&cache, "pd", vec![Tag::default_of(ResourceTag::Portfolio)], &calls, 0)
            .await
            .unwrap();
        fetch_counting(&cache, "props", vec![Tag::all(ResourceTag::Property)], &calls, 0)
            .await
            .unwrap();

        assert_eq!(cache.invalidate(&[Tag::all(ResourceTag::Portfolio)]), 2);
        assert!(cache.is_fresh("props"));
        // Already stale entries are not counted again.
        assert_eq!(cache.invalidate(&[Tag::all(ResourceTag::Portfolio)]), 0);
    }

    #[tokio::test]
    async fn test_default_tag_does_not_cover_ids() {
        let cache = QueryCache::new();
        let calls = AtomicUsize::new(0);
        fetch_counting(&cache, "p5", vec![Tag::id(ResourceTag::Portfolio, 5)], &calls, 5)
            .await
            .unwrap();
        assert_eq!(cache.invalidate(&[Tag::default_of(ResourceTag::Portfolio)]), 0);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let cache = QueryCache::new();
        let err = cache
            .get_or_fetch::<u32, _, _>("k", vec![], || async {
                Err(CoreError::Network("down".into()))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Network(_)));
        assert!(cache.is_empty());

        let ok = cache
            .get_or_fetch("k", vec![], || async { Ok(7u32) })
            .await
            .unwrap();
        assert_eq!(ok, 7);
    }

    #[tokio::test]
    async fn test_concurrent_reads_share_one_fetch() {
        let cache = QueryCache::new();
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let slow = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok::<_, CoreError>(42u32)
        };

        let (a, b, c) = tokio::join!(
            cache.get_or_fetch("k", vec![], slow),
            cache.get_or_fetch("k", vec![], slow),
            cache.get_or_fetch("k", vec![], slow),
        );
        assert_eq!((a.unwrap(), b.unwrap(), c.unwrap()), (42, 42, 42));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(cache.pending_keys(), 0);
    }

    #[tokio::test]
    async fn test_fetch_gates_are_released() {
        let cache = QueryCache::new();
        let calls = AtomicUsize::new(0);
        for n in 0..50u32 {
            let key = format!("properties/?search=street-{n}");
            fetch_counting(&cache, &key, vec![Tag::all(ResourceTag::Property)], &calls, n)
                .await
                .unwrap();
        }
        assert_eq!(cache.len(), 50);
        assert_eq!(cache.pending_keys(), 0);

        cache
            .get_or_fetch::<u32, _, _>("broken", vec![], || async {
                Err(CoreError::Network("down".into()))
            })
            .await
            .unwrap_err();
        assert_eq!(cache.pending_keys(), 0);
    }

    #[tokio::test]
    async fn test_gate_is_held_during_fetch() {
        let cache = QueryCache::new();
        let handle = &cache;
        let pending = cache
            .get_or_fetch("k", vec![], move || async move { Ok(handle.pending_keys()) })
            .await
            .unwrap();
        assert_eq!(pending, 1);
        assert_eq!(cache.pending_keys(), 0);
    }

    #[tokio::test]
    async fn test_fetch_racing_invalidation_is_stored_stale() {
        let cache = QueryCache::new();
        let handle = &cache;
        let value = cache
            .get_or_fetch("k", vec![Tag::all(ResourceTag::Property)], move || async move {
                handle.invalidate(&[Tag::all(ResourceTag::Property)]);
                Ok(1u32)
            })
            .await
            .unwrap();
        assert_eq!(value, 1);
        assert!(!cache.is_fresh("k"));
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = QueryCache::new();
        cache.get_or_fetch("k", vec![], || async { Ok(1u32) }).await.unwrap();
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::id(ResourceTag::Portfolio, 5).to_string(), "Portfolio:5");
        assert_eq!(Tag::default_of(ResourceTag::Portfolio).to_string(), "Portfolio:default");
        assert_eq!(Tag::all(ResourceTag::User).to_string(), "User");
    }
}
