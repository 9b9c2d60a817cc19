//! Session transitions and their durable copy.

use rstest::{fixture, rstest};

use super::*;
use crate::api::{MockPortalApi, Operation};
use crate::model::INVALID_ROLE_MESSAGE;
use crate::storage::MemorySessionStorage;

fn view(id: u64, username: &str, role: Role) -> UserView {
    UserView {
        id,
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        name: "Test User".to_owned(),
        role,
    }
}

fn stored(user: &UserView) -> String {
    serde_json::to_string(user).expect("serialise view")
}

fn registration(role: &str) -> Registration {
    Registration {
        full_name: "New Hire".to_owned(),
        email: "hire@example.com".to_owned(),
        password: "pw".to_owned(),
        role: role.to_owned(),
    }
}

#[fixture]
fn anonymous() -> SessionStore<MemorySessionStorage> {
    SessionStore::restore(MemorySessionStorage::new())
}

#[rstest]
fn absent_entry_restores_anonymous(anonymous: SessionStore<MemorySessionStorage>) {
    assert_eq!(anonymous.state(), SessionState::default());
}

#[rstest]
#[case("not json")]
#[case("{}")]
#[case(r#"{"id":1,"username":"x","email":"e","name":"n","type":"superuser"}"#)]
fn unparseable_entry_restores_anonymous(#[case] raw: &str) {
    let store = SessionStore::restore(MemorySessionStorage::with_entry(raw));
    assert!(!store.state().is_authenticated());
}

#[rstest]
fn stored_view_is_trusted_on_restore() {
    let admin = view(1, "admin1", Role::Admin);
    let store = SessionStore::restore(MemorySessionStorage::with_entry(stored(&admin)));
    assert_eq!(store.state().user, Some(admin));
    assert_eq!(store.state().role(), Some(Role::Admin));
}

#[rstest]
#[tokio::test]
async fn login_authenticates_and_persists(anonymous: SessionStore<MemorySessionStorage>) {
    let employee = view(2, "employee1", Role::Employee);
    let returned = employee.clone();
    let mut api = MockPortalApi::new();
    api.expect_login()
        .withf(|creds| creds.username() == "employee1")
        .times(1)
        .returning(move |_| Ok(returned.clone()));

    let user = anonymous
        .login(&api, &LoginCredentials::new("employee1", "emp123"))
        .await
        .expect("login");

    assert_eq!(user, employee);
    let state = anonymous.state();
    assert_eq!(state.user, Some(employee.clone()));
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(anonymous.storage().read(), Some(stored(&employee)));
}

#[rstest]
#[tokio::test]
async fn rejected_login_records_server_message(anonymous: SessionStore<MemorySessionStorage>) {
    let mut api = MockPortalApi::new();
    api.expect_login().returning(|_| {
        Err(ClientError::Api {
            operation: Operation::Login,
            status: 404,
            message: "invalid credentials".to_owned(),
        })
    });

    let err = anonymous
        .login(&api, &LoginCredentials::new("admin1", "wrong"))
        .await
        .expect_err("rejected");

    assert!(matches!(err, ClientError::Api { status: 404, .. }));
    let state = anonymous.state();
    assert_eq!(state.user, None);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("invalid credentials"));
    assert_eq!(anonymous.storage().read(), None);
}

#[rstest]
#[tokio::test]
async fn transport_failure_shows_login_fallback(anonymous: SessionStore<MemorySessionStorage>) {
    let mut api = MockPortalApi::new();
    api.expect_login().returning(|_| {
        Err(ClientError::Network {
            operation: Operation::Login,
            message: "connection refused".to_owned(),
        })
    });

    let result = anonymous
        .login(&api, &LoginCredentials::new("admin1", "admin123"))
        .await;

    assert!(result.is_err());
    assert_eq!(anonymous.state().error.as_deref(), Some(LOGIN_FALLBACK));
}

#[rstest]
#[tokio::test]
async fn second_login_replaces_first_session() {
    let admin = view(1, "admin1", Role::Admin);
    let employee = view(2, "employee1", Role::Employee);
    let store = SessionStore::restore(MemorySessionStorage::with_entry(stored(&admin)));
    let returned = employee.clone();
    let mut api = MockPortalApi::new();
    api.expect_login().returning(move |_| Ok(returned.clone()));

    store
        .login(&api, &LoginCredentials::new("employee1", "emp123"))
        .await
        .expect("login");

    assert_eq!(store.state().user, Some(employee.clone()));
    assert_eq!(store.storage().read(), Some(stored(&employee)));
}

#[rstest]
fn logout_then_restore_is_anonymous() {
    let admin = view(1, "admin1", Role::Admin);
    let store = SessionStore::restore(MemorySessionStorage::with_entry(stored(&admin)));

    store.logout().expect("logout");
    assert_eq!(store.state(), SessionState::default());

    let SessionStore { storage, .. } = store;
    let reloaded = SessionStore::restore(storage);
    assert!(!reloaded.state().is_authenticated());
}

#[rstest]
#[tokio::test]
async fn unknown_role_fails_without_request(anonymous: SessionStore<MemorySessionStorage>) {
    let mut api = MockPortalApi::new();
    api.expect_register().never();

    let err = anonymous
        .register(&api, &registration("superuser"))
        .await
        .expect_err("invalid role");

    assert!(matches!(err, ClientError::Validation { field: "type", .. }));
    assert_eq!(anonymous.state().error.as_deref(), Some(INVALID_ROLE_MESSAGE));
    assert!(!anonymous.state().loading);
}

#[rstest]
#[case("admin", Role::Admin)]
#[case("employee", Role::Employee)]
#[tokio::test]
async fn registration_leaves_session_untouched(
    anonymous: SessionStore<MemorySessionStorage>,
    #[case] raw_role: &str,
    #[case] role: Role,
) {
    let mut api = MockPortalApi::new();
    api.expect_register()
        .times(1)
        .returning(move |_| Ok(view(5, "hire@example.com", role)));

    let created = anonymous
        .register(&api, &registration(raw_role))
        .await
        .expect("register");

    assert_eq!(created.role, role);
    assert_eq!(anonymous.state(), SessionState::default());
    assert_eq!(anonymous.storage().read(), None);
}

#[rstest]
#[tokio::test]
async fn conflicting_registration_reports_message(anonymous: SessionStore<MemorySessionStorage>) {
    let mut api = MockPortalApi::new();
    api.expect_register().returning(|_| {
        Err(ClientError::Api {
            operation: Operation::Register,
            status: 409,
            message: "Username already exists".to_owned(),
        })
    });

    let result = anonymous.register(&api, &registration("employee")).await;

    assert!(result.is_err());
    assert_eq!(
        anonymous.state().error.as_deref(),
        Some("Username already exists")
    );
}

#[rstest]
fn clear_error_keeps_user() {
    let admin = view(1, "admin1", Role::Admin);
    let store = SessionStore::restore(MemorySessionStorage::with_entry(stored(&admin)));
    store.dispatch(SessionEvent::LoginRejected("boom".to_owned()));
    assert_eq!(store.state().error.as_deref(), Some("boom"));

    store.clear_error();

    assert_eq!(store.state().error, None);
    assert_eq!(store.state().user, Some(admin));
}

#[rstest]
fn pending_sets_loading_and_clears_error() {
    let mut state = SessionState {
        error: Some("old".to_owned()),
        ..SessionState::default()
    };
    state.apply(SessionEvent::LoginPending);
    assert!(state.loading);
    assert_eq!(state.error, None);

    state.apply(SessionEvent::RegisterRejected("nope".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("nope"));
}
