mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use common::{FakeApi, Reply, farm_json};
use milk_client::{ClientError, MilkClient};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn expired_token_is_refreshed_and_request_retried_once() {
    let refreshed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&refreshed);
    let api = FakeApi::start(move |hit| match hit.path() {
        "/api/auth/refresh" => {
            flag.store(true, Ordering::SeqCst);
            Reply::data(json!({})).with_header("Set-Cookie", "ceialmilk_token=fresh; Path=/")
        }
        "/api/v1/me/fazendas" if flag.load(Ordering::SeqCst) => {
            Reply::data(json!([farm_json(7, "Fazenda Alpha")]))
        }
        _ => Reply::status(401),
    });

    let client = MilkClient::with_base_url(&api.base_url).unwrap();
    let farms = client.my_farms().await.unwrap();

    assert_eq!(farms.len(), 1);
    assert_eq!(farms[0].id, 7);
    assert_eq!(
        api.paths(),
        vec!["/api/v1/me/fazendas", "/api/auth/refresh", "/api/v1/me/fazendas"]
    );
    assert_eq!(
        api.hits()[2].cookie.as_deref(),
        Some("ceialmilk_token=fresh")
    );
    assert!(refreshed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn failed_refresh_surfaces_unauthenticated() {
    let api = FakeApi::start(|_| Reply::status(401));
    let client = MilkClient::with_base_url(&api.base_url).unwrap();

    let err = client.list_farms().await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthenticated { .. }));
    assert_eq!(api.paths(), vec!["/api/v1/fazendas", "/api/auth/refresh"]);
}

#[tokio::test]
async fn second_401_after_refresh_is_not_retried_again() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let api = FakeApi::start(move |hit| match hit.path() {
        "/api/auth/refresh" => Reply::data(json!({})),
        _ => {
            counter.fetch_add(1, Ordering::SeqCst);
            Reply::status(401)
        }
    });
    let client = MilkClient::with_base_url(&api.base_url).unwrap();

    let err = client.list_animals().await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthenticated { .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        api.paths(),
        vec!["/api/v1/animais", "/api/auth/refresh", "/api/v1/animais"]
    );
}

#[tokio::test]
async fn login_failure_never_triggers_refresh() {
    let api = FakeApi::start(|_| {
        Reply::json(
            401,
            &json!({"error": {"code": "UNAUTHORIZED", "message": "Credenciais inválidas"}}),
        )
    });
    let client = MilkClient::with_base_url(&api.base_url).unwrap();

    let err = client.login("a@b.com", "errada").await.unwrap_err();

    assert_eq!(err.user_message("Erro ao entrar"), "Credenciais inválidas");
    assert_eq!(api.paths(), vec!["/api/auth/login"]);
}

#[tokio::test]
async fn validate_401_means_no_session_without_refresh() {
    let api = FakeApi::start(|_| Reply::status(401));
    let client = MilkClient::with_base_url(&api.base_url).unwrap();

    assert_eq!(client.validate().await.unwrap(), None);
    assert_eq!(api.paths(), vec!["/api/auth/validate"]);
}

#[tokio::test]
async fn forbidden_is_not_refreshed() {
    let api = FakeApi::start(|_| Reply::status(403));
    let client = MilkClient::with_base_url(&api.base_url).unwrap();

    let err = client.list_users(20, 0).await.unwrap_err();

    assert!(matches!(err, ClientError::Forbidden { .. }));
    assert_eq!(api.paths(), vec!["/api/v1/admin/usuarios"]);
}
