mod common;

#[cfg(test)]
pub mod language_tests {
    use std::rc::Rc;

    use tokio::sync::oneshot;

    use super::common::*;

    use robottrader::common::StorageError;
    use robottrader::i18n::Language;
    use robottrader::services::{
        LanguageController, LocalStore, MemoryStore, SessionStore,
    };

    #[tokio::test]
    async fn test_init_reads_cached_language() {
        let h = Harness::new(FakeBackend::new(), store_with_language("en"));
        assert_eq!(h.language.language(), Language::En);
    }

    #[tokio::test]
    async fn test_init_defaults_to_danish_without_cache() {
        let h = Harness::new(FakeBackend::new(), MemoryStore::new());
        assert_eq!(h.language.language(), Language::Da);
    }

    #[tokio::test]
    async fn test_init_ignores_invalid_cached_value() {
        let h = Harness::new(FakeBackend::new(), store_with_language("fr"));
        assert_eq!(h.language.language(), Language::Da);
    }

    #[tokio::test]
    async fn test_set_language_applies_synchronously_without_identity() {
        let h = Harness::new(FakeBackend::new(), MemoryStore::new());
        h.session.initialize().await;

        h.language.set_language(Language::En);

        assert_eq!(h.language.language(), Language::En);
        assert_eq!(h.cached_language().as_deref(), Some("en"));
        assert_eq!(h.spawner.pending(), 0);
        assert_eq!(h.backend.count("set_profile_language"), 0);
    }

    #[tokio::test]
    async fn test_set_language_applies_synchronously_with_identity() {
        let identity = get_seed_identity_0();
        let h = Harness::new(
            FakeBackend::new().with_session(&identity),
            MemoryStore::new(),
        );
        h.session.initialize().await;

        h.language.set_language(Language::En);

        // Visible before the remote write has even started.
        assert_eq!(h.language.language(), Language::En);
        assert_eq!(h.cached_language().as_deref(), Some("en"));
        assert_eq!(h.spawner.pending(), 1);
        assert_eq!(h.backend.count("set_profile_language"), 0);

        h.spawner.run_all().await;
        assert_eq!(
            h.backend.calls().last().map(String::as_str),
            Some("set_profile_language:en")
        );
        assert_eq!(
            h.backend.profile_languages.borrow().get(&identity.id).cloned(),
            Some("en".to_string())
        );
    }

    #[tokio::test]
    async fn test_set_language_remote_failure_keeps_local_choice() {
        let identity = get_seed_identity_0();
        let backend = FakeBackend::new().with_session(&identity);
        backend.profile_write_fails.set(true);
        let h = Harness::new(backend, MemoryStore::new());
        h.session.initialize().await;

        h.language.set_language(Language::En);
        h.spawner.run_all().await;

        assert_eq!(h.language.language(), Language::En);
        assert_eq!(h.cached_language().as_deref(), Some("en"));
        assert_eq!(h.backend.count("set_profile_language"), 1);
    }

    #[tokio::test]
    async fn test_reconcile_profile_overrides_cache() {
        let identity = get_seed_identity_0();
        let h = Harness::new(
            FakeBackend::new()
                .with_session(&identity)
                .with_profile_language(identity.id, "da"),
            store_with_language("en"),
        );
        assert_eq!(h.language.language(), Language::En);

        h.session.initialize().await;
        h.language.reconcile().await;

        assert_eq!(h.language.language(), Language::Da);
        assert_eq!(h.cached_language().as_deref(), Some("da"));
        assert_eq!(h.backend.count("set_profile_language"), 0);
    }

    #[tokio::test]
    async fn test_reconcile_without_identity_skips_remote_read() {
        let h = Harness::new(FakeBackend::new(), store_with_language("da"));

        h.session.initialize().await;
        h.language.reconcile().await;

        assert_eq!(h.language.language(), Language::Da);
        assert_eq!(h.backend.count("profile_language"), 0);
    }

    #[tokio::test]
    async fn test_reconcile_waits_for_session_to_resolve() {
        let identity = get_seed_identity_0();
        let h = Harness::new(
            FakeBackend::new()
                .with_session(&identity)
                .with_profile_language(identity.id, "en"),
            MemoryStore::new(),
        );

        let reconcile = async {
            h.language.reconcile().await;
            assert!(!h.session.state().initializing);
        };
        let initialize = async {
            assert_eq!(h.backend.count("profile_language"), 0);
            h.session.initialize().await;
        };
        tokio::join!(reconcile, initialize);

        assert_eq!(h.backend.count("profile_language"), 1);
        assert_eq!(h.language.language(), Language::En);
    }

    #[tokio::test]
    async fn test_reconcile_keeps_local_on_missing_or_invalid_profile() {
        let identity = get_seed_identity_0();
        let h = Harness::new(
            FakeBackend::new()
                .with_session(&identity)
                .with_profile_language(identity.id, "klingon"),
            store_with_language("en"),
        );

        h.session.initialize().await;
        h.language.reconcile().await;

        assert_eq!(h.language.language(), Language::En);
        assert_eq!(h.cached_language().as_deref(), Some("en"));
        assert_eq!(h.backend.count("set_profile_language"), 0);

        let missing = Harness::new(
            FakeBackend::new().with_session(&identity),
            store_with_language("en"),
        );
        missing.session.initialize().await;
        missing.language.reconcile().await;
        assert_eq!(missing.language.language(), Language::En);
    }

    #[tokio::test]
    async fn test_reconcile_swallows_read_failure() {
        let identity = get_seed_identity_0();
        let backend = FakeBackend::new().with_session(&identity);
        backend.profile_read_fails.set(true);
        let h = Harness::new(backend, store_with_language("en"));

        h.session.initialize().await;
        h.language.reconcile().await;

        assert_eq!(h.language.language(), Language::En);
        assert_eq!(h.backend.count("profile_language"), 1);
    }

    #[tokio::test]
    async fn test_reconcile_runs_once() {
        let identity = get_seed_identity_0();
        let h = Harness::new(
            FakeBackend::new()
                .with_session(&identity)
                .with_profile_language(identity.id, "en"),
            MemoryStore::new(),
        );

        h.session.initialize().await;
        h.language.reconcile().await;
        h.language.reconcile().await;

        assert_eq!(h.backend.count("profile_language"), 1);
    }

    #[tokio::test]
    async fn test_user_choice_during_profile_read_wins() {
        let identity = get_seed_identity_0();
        let h = Harness::new(
            FakeBackend::new()
                .with_session(&identity)
                .with_profile_language(identity.id, "da"),
            MemoryStore::new(),
        );
        h.session.initialize().await;

        // A click during the read outranks the older profile value; the
        // detached write then brings the profile in line with it.
        let (release, gate) = oneshot::channel();
        *h.backend.profile_gate.borrow_mut() = Some(gate);

        let choose = async {
            h.language.set_language(Language::En);
            release.send(()).unwrap();
        };
        tokio::join!(h.language.reconcile(), choose);

        assert_eq!(h.language.language(), Language::En);
        assert_eq!(h.cached_language().as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn test_adopt_profile_language_after_sign_in() {
        let identity = get_seed_identity_1();
        let h = Harness::new(
            FakeBackend::new()
                .with_account(&identity, "secret1")
                .with_profile_language(identity.id, "en"),
            MemoryStore::new(),
        );
        h.session.initialize().await;
        h.language.reconcile().await;
        assert_eq!(h.language.language(), Language::Da);

        let signed_in =
            h.session.sign_in(&identity.email, "secret1").await.unwrap();
        h.language.adopt_profile_language(&signed_in).await;

        assert_eq!(h.language.language(), Language::En);
        assert_eq!(h.cached_language().as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn test_adopt_profile_language_ignored_after_sign_out() {
        let identity = get_seed_identity_0();
        let h = Harness::new(
            FakeBackend::new()
                .with_session(&identity)
                .with_profile_language(identity.id, "en"),
            MemoryStore::new(),
        );
        h.session.initialize().await;
        h.session.sign_out().await;

        h.language.adopt_profile_language(&identity).await;

        assert_eq!(h.language.language(), Language::Da);
    }

    #[tokio::test]
    async fn test_sign_out_lets_in_flight_write_finish() {
        let identity = get_seed_identity_0();
        let h = Harness::new(
            FakeBackend::new().with_session(&identity),
            MemoryStore::new(),
        );
        h.session.initialize().await;

        h.language.set_language(Language::En);
        h.session.sign_out().await;
        h.spawner.run_all().await;

        assert_eq!(h.language.language(), Language::En);
        assert_eq!(h.backend.count("set_profile_language"), 1);
    }

    #[tokio::test]
    async fn test_subscribers_see_language_changes() {
        let h = Harness::new(FakeBackend::new(), MemoryStore::new());
        let mut rx = h.language.subscribe();

        h.language.set_language(Language::En);

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Language::En);
    }

    struct BrokenStore;

    impl LocalStore for BrokenStore {
        fn get(&self, _: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, key: &str, _: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteRejected(key.to_string()))
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteRejected(key.to_string()))
        }
    }

    #[tokio::test]
    async fn test_unavailable_storage_still_switches_language() {
        let backend = Rc::new(FakeBackend::new());
        let session = SessionStore::new(backend.clone());
        let spawner = Rc::new(QueuedSpawner::default());
        let language = LanguageController::new(
            Rc::new(BrokenStore),
            backend.clone(),
            session.subscribe(),
            spawner,
        );
        assert_eq!(language.language(), Language::Da);

        language.set_language(Language::En);

        assert_eq!(language.language(), Language::En);
    }
}
