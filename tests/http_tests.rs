mod common;

#[cfg(test)]
pub mod http_tests {
    use std::rc::Rc;

    use serde_json::{Value, json};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::common::*;

    use robottrader::api::{AuthApi, CREDENTIALS_KEY, HttpBackend};
    use robottrader::common::{AuthError, BackendError};
    use robottrader::config::BackendConfig;
    use robottrader::services::{LocalStore, MemoryStore, SessionStore};
    use robottrader::types::{Credentials, Identity};

    const ANON_KEY: &str = "anon-key";

    fn credentials(access: &str, refresh: &str) -> Credentials {
        Credentials {
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
        }
    }

    fn store_with_credentials(credentials: &Credentials) -> Rc<MemoryStore> {
        let raw = serde_json::to_string(credentials).unwrap();
        Rc::new(MemoryStore::with_entry(CREDENTIALS_KEY, &raw))
    }

    fn stored(store: &MemoryStore) -> Option<Credentials> {
        store
            .get(CREDENTIALS_KEY)
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    fn backend(server: &MockServer, store: Rc<MemoryStore>) -> HttpBackend {
        let config = BackendConfig::new(&server.uri(), ANON_KEY).unwrap();
        HttpBackend::new(config, store).unwrap()
    }

    fn user_json(identity: &Identity) -> Value {
        json!({ "id": identity.id, "email": identity.email, "aud": "authenticated" })
    }

    fn token_json(access: &str, refresh: &str, identity: &Identity) -> Value {
        json!({
            "access_token": access,
            "refresh_token": refresh,
            "token_type": "bearer",
            "expires_in": 3600,
            "user": user_json(identity),
        })
    }

    #[tokio::test]
    async fn test_restores_stored_session() {
        let server = MockServer::start().await;
        let identity = get_seed_identity_0();
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("apikey", ANON_KEY))
            .and(header("authorization", "Bearer access-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json(&identity)))
            .expect(1)
            .mount(&server)
            .await;
        let saved = credentials("access-1", "refresh-1");
        let store = store_with_credentials(&saved);
        let api = backend(&server, store.clone());

        let current = api.current_identity().await.unwrap();

        assert_eq!(current, Some(identity));
        assert_eq!(stored(&store), Some(saved));
    }

    #[tokio::test]
    async fn test_no_stored_credential_skips_backend() {
        let server = MockServer::start().await;
        let store = Rc::new(MemoryStore::new());
        let api = backend(&server, store.clone());

        assert_eq!(api.current_identity().await.unwrap(), None);
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_expired_access_token_refreshes_once() {
        let server = MockServer::start().await;
        let identity = get_seed_identity_1();
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("authorization", "Bearer access-1"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "refresh_token"))
            .and(body_json(json!({ "refresh_token": "refresh-1" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_json(
                "access-2",
                "refresh-2",
                &identity,
            )))
            .expect(1)
            .mount(&server)
            .await;
        let store = store_with_credentials(&credentials("access-1", "refresh-1"));
        let api = backend(&server, store.clone());

        let current = api.current_identity().await.unwrap();

        assert_eq!(current, Some(identity));
        assert_eq!(stored(&store), Some(credentials("access-2", "refresh-2")));
    }

    #[tokio::test]
    async fn test_rejected_refresh_clears_credential() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "refresh_token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid Refresh Token: Already Used",
            })))
            .expect(1)
            .mount(&server)
            .await;
        let store = store_with_credentials(&credentials("access-1", "refresh-1"));
        let api = backend(&server, store.clone());

        assert_eq!(api.current_identity().await.unwrap(), None);
        assert_eq!(stored(&store), None);

        // Nothing left to restore on the next load.
        assert_eq!(api.current_identity().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_refresh_server_error_keeps_credential() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let saved = credentials("access-1", "refresh-1");
        let store = store_with_credentials(&saved);
        let api = backend(&server, store.clone());

        let result = api.current_identity().await;

        assert!(matches!(
            result,
            Err(BackendError::Status { status: 503, .. })
        ));
        assert_eq!(stored(&store), Some(saved));
    }

    #[tokio::test]
    async fn test_sign_out_clears_credential_when_logout_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .and(header("authorization", "Bearer access-1"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        let store = store_with_credentials(&credentials("access-1", "refresh-1"));
        let api = backend(&server, store.clone());

        let result = api.sign_out().await;

        assert!(matches!(
            result,
            Err(BackendError::Status { status: 500, .. })
        ));
        assert_eq!(stored(&store), None);
        assert_eq!(api.current_identity().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sign_in_persists_credential() {
        let server = MockServer::start().await;
        let identity = get_seed_identity_0();
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .and(body_json(json!({
                "email": identity.email,
                "password": "secret1",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_json(
                "access-1",
                "refresh-1",
                &identity,
            )))
            .expect(1)
            .mount(&server)
            .await;
        let store = Rc::new(MemoryStore::new());
        let api = backend(&server, store.clone());

        let signed_in = api.sign_in(&identity.email, "secret1").await.unwrap();

        assert_eq!(signed_in, identity);
        assert_eq!(stored(&store), Some(credentials("access-1", "refresh-1")));
    }

    #[tokio::test]
    async fn test_sign_in_invalid_credentials_stores_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": 400,
                "error_code": "invalid_credentials",
                "msg": "Invalid login credentials",
            })))
            .mount(&server)
            .await;
        let store = Rc::new(MemoryStore::new());
        let api = backend(&server, store.clone());

        let result = api.sign_in("user0@test.com", "wrong").await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert_eq!(stored(&store), None);
    }

    #[tokio::test]
    async fn test_sign_up_with_session_signs_in() {
        let server = MockServer::start().await;
        let identity = get_seed_identity_1();
        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_json(
                "access-1",
                "refresh-1",
                &identity,
            )))
            .mount(&server)
            .await;
        let store = Rc::new(MemoryStore::new());
        let session = SessionStore::new(Rc::new(backend(&server, store.clone())));
        session.initialize().await;

        let result = session.sign_up(&identity.email, "secret1").await;

        assert_eq!(result.unwrap(), identity);
        assert_eq!(session.identity(), Some(identity));
        assert!(stored(&store).is_some());
    }

    #[tokio::test]
    async fn test_sign_up_awaiting_confirmation_leaves_session_empty() {
        let server = MockServer::start().await;
        let identity = Identity {
            id: uuid::Uuid::new_v4(),
            email: "new@example.com".to_string(),
        };
        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(user_json(&identity)),
            )
            .expect(1)
            .mount(&server)
            .await;
        let store = Rc::new(MemoryStore::new());
        let session = SessionStore::new(Rc::new(backend(&server, store.clone())));
        session.initialize().await;

        let result = session.sign_up(&identity.email, "secret1").await;

        assert!(matches!(result, Err(AuthError::ConfirmationPending)));
        assert!(session.identity().is_none());
        assert_eq!(stored(&store), None);
    }
}
