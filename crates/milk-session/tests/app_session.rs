mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use common::{FakeBackend, FakeDirectory, farm, user};
use milk_core::{Role, Theme};
use milk_session::{
    ACTIVE_FARM_KEY, AppSession, FarmDirectory, GuardOutcome, KeyValueStore, MemoryStore,
    SessionBackend,
};
use pretty_assertions::assert_eq;

struct Harness {
    app: AppSession,
    backend: Arc<FakeBackend>,
    directory: Arc<FakeDirectory>,
    store: Arc<MemoryStore>,
}

fn harness(backend: FakeBackend, farms: Vec<milk_core::Farm>, store: MemoryStore) -> Harness {
    let backend = Arc::new(backend);
    let directory = Arc::new(FakeDirectory::members(farms));
    let store = Arc::new(store);
    let app = AppSession::new(
        Arc::clone(&backend) as Arc<dyn SessionBackend>,
        Arc::clone(&directory) as Arc<dyn FarmDirectory>,
        Arc::clone(&store) as Arc<dyn KeyValueStore>,
    );
    Harness {
        app,
        backend,
        directory,
        store,
    }
}

#[tokio::test]
async fn guard_waits_for_session_then_redirects_anonymous() {
    let h = harness(
        FakeBackend::new(user("a@b.com"), "segredo"),
        vec![],
        MemoryStore::new(),
    );

    assert_eq!(h.app.guard("/fazendas"), GuardOutcome::Loading);
    assert!(!h.app.resolver().is_ready());

    h.app.start().await;

    assert_eq!(
        h.app.guard("/fazendas"),
        GuardOutcome::Redirect {
            location: "/login?redirect=%2Ffazendas".into()
        }
    );
    assert!(h.app.resolver().is_ready());
    assert_eq!(h.directory.calls(), 0);
}

#[tokio::test]
async fn start_with_valid_cookie_restores_identity_and_farm() {
    let h = harness(
        FakeBackend::new(user("a@b.com"), "segredo").signed_in(),
        vec![farm(1, "A"), farm(2, "B")],
        MemoryStore::with_entries([(ACTIVE_FARM_KEY, "2")]),
    );

    let snapshot = h.app.start().await;

    assert_eq!(snapshot.identity, Some(user("a@b.com")));
    assert!(h.app.guard("/fazendas").is_render());
    assert_eq!(h.app.resolver().active_farm(), Some(farm(2, "B")));
}

#[tokio::test]
async fn failed_validation_counts_as_logged_out() {
    let h = harness(
        FakeBackend::new(user("a@b.com"), "segredo")
            .signed_in()
            .failing_validate(),
        vec![farm(7, "Alpha")],
        MemoryStore::with_entries([(ACTIVE_FARM_KEY, "7")]),
    );

    let snapshot = h.app.start().await;

    assert!(snapshot.ready);
    assert_eq!(snapshot.identity, None);
    assert_eq!(h.store.get(ACTIVE_FARM_KEY), None);
}

#[tokio::test]
async fn login_runs_resolution_and_logout_clears_it() {
    let h = harness(
        FakeBackend::new(user("a@b.com"), "segredo"),
        vec![farm(7, "Fazenda Alpha")],
        MemoryStore::new(),
    );
    h.app.start().await;

    h.app.login("a@b.com", "segredo").await.unwrap();
    assert_eq!(h.app.resolver().active_farm(), Some(farm(7, "Fazenda Alpha")));
    assert_eq!(h.store.get(ACTIVE_FARM_KEY).as_deref(), Some("7"));

    h.app.logout().await.unwrap();
    assert_eq!(h.app.resolver().active_farm(), None);
    assert_eq!(h.store.get(ACTIVE_FARM_KEY), None);
    assert!(matches!(h.app.guard("/"), GuardOutcome::Redirect { .. }));
    assert_eq!(h.backend.logouts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn bad_credentials_leave_session_untouched() {
    let h = harness(
        FakeBackend::new(user("a@b.com"), "segredo"),
        vec![farm(7, "Alpha")],
        MemoryStore::new(),
    );
    h.app.start().await;

    let err = h.app.login("a@b.com", "errada").await.unwrap_err();

    assert_eq!(err.user_message("Erro ao entrar"), "Credenciais inválidas");
    assert_eq!(h.app.session().identity(), None);
    assert_eq!(h.directory.calls(), 0);
}

#[tokio::test]
async fn logout_failure_still_ends_local_session() {
    let h = harness(
        FakeBackend::new(user("a@b.com"), "segredo")
            .signed_in()
            .failing_logout(),
        vec![farm(7, "Alpha")],
        MemoryStore::new(),
    );
    h.app.start().await;
    assert!(h.app.resolver().active_farm().is_some());

    assert!(h.app.logout().await.is_err());

    assert_eq!(h.app.session().identity(), None);
    assert_eq!(h.app.resolver().active_farm(), None);
    assert_eq!(h.store.get(ACTIVE_FARM_KEY), None);
    assert_eq!(h.backend.cleared.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_logout_stays_logged_out_on_next_start() {
    let h = harness(
        FakeBackend::new(user("a@b.com"), "segredo")
            .signed_in()
            .failing_logout(),
        vec![farm(7, "Alpha")],
        MemoryStore::new(),
    );
    h.app.start().await;

    assert!(h.app.logout().await.is_err());
    let snapshot = h.app.start().await;

    assert_eq!(snapshot.identity, None);
    assert!(matches!(h.app.guard("/"), GuardOutcome::Redirect { .. }));
}

#[tokio::test]
async fn role_gate_denies_plain_users_inline() {
    let h = harness(
        FakeBackend::new(user("a@b.com"), "segredo").signed_in(),
        vec![],
        MemoryStore::new(),
    );
    h.app.start().await;

    match h.app.require_role("/admin/usuarios", Role::ADMINISTRATIVE) {
        GuardOutcome::Denied { message } => {
            assert!(message.contains("ADMIN ou DEVELOPER"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn session_updates_are_published() {
    let h = harness(
        FakeBackend::new(user("a@b.com"), "segredo"),
        vec![],
        MemoryStore::new(),
    );
    let mut updates = h.app.session().subscribe();

    h.app.start().await;
    assert!(updates.has_changed().unwrap());
    assert!(updates.borrow_and_update().ready);

    h.app.login("a@b.com", "segredo").await.unwrap();
    assert!(updates.has_changed().unwrap());
    assert_eq!(
        updates.borrow_and_update().identity.as_ref().map(|i| i.email.as_str()),
        Some("a@b.com")
    );
}

#[tokio::test]
async fn theme_shares_the_same_storage() {
    let h = harness(
        FakeBackend::new(user("a@b.com"), "segredo"),
        vec![],
        MemoryStore::new(),
    );

    h.app.theme().set(Theme::Dark).unwrap();

    assert_eq!(h.store.get("ceialmilk_theme").as_deref(), Some("dark"));
    assert_eq!(h.app.theme().resolve(Theme::Light), Theme::Dark);
}
