//! Tests for account creation and login resolution.

use std::sync::Arc;

use super::*;
use crate::domain::ports::MockUserRepository;
use crate::domain::{ErrorCode, HashingCost, Role};
use crate::outbound::memory::{InMemoryUserRepository, default_accounts};
use rstest::{fixture, rstest};
use serde_json::json;

fn hasher() -> PasswordHasher {
    PasswordHasher::with_cost(HashingCost::minimal()).expect("minimal cost is valid")
}

#[fixture]
fn store() -> CredentialStore {
    CredentialStore::new(Arc::new(InMemoryUserRepository::new()), hasher())
}

async fn seeded(store: CredentialStore) -> CredentialStore {
    store.seed(default_accounts()).await.expect("seed accounts");
    store
}

fn credentials(username: &str, password: &str) -> LoginCredentials {
    LoginCredentials::try_from_parts(username, password).expect("well-formed credentials")
}

fn candidate(username: &str, role: Option<&str>) -> UserCandidate {
    UserCandidate::new(username, "pw", format!("{username}@example.com"), "New Hire", role)
}

#[rstest]
#[tokio::test]
async fn seeding_assigns_ids_one_to_four(store: CredentialStore) {
    let store = seeded(store).await;
    let users = store.list_all().await.expect("list users");
    let pairs: Vec<_> = users
        .iter()
        .map(|user| (user.id.get(), user.username.as_ref().to_owned(), user.role))
        .collect();
    assert_eq!(
        pairs,
        [
            (1, "admin1".to_owned(), Role::Admin),
            (2, "employee1".to_owned(), Role::Employee),
            (3, "employee2".to_owned(), Role::Employee),
            (4, "admin2".to_owned(), Role::Admin),
        ]
    );
}

#[rstest]
#[case("admin1", "admin123", 1)]
#[case("employee1", "emp123", 2)]
#[case("employee2", "emp456", 3)]
#[case("admin2", "admin456", 4)]
#[tokio::test]
async fn seeded_accounts_resolve(
    store: CredentialStore,
    #[case] username: &str,
    #[case] password: &str,
    #[case] id: u64,
) {
    let store = seeded(store).await;
    let view = store
        .resolve(&credentials(username, password))
        .await
        .expect("credentials match");
    assert_eq!(view.id, UserId::new(id));
}

#[rstest]
#[case("admin1", "wrong")]
#[case("admin1", "admin123 ")]
#[case("Admin1", "admin123")]
#[case("admin1", "emp123")]
#[case(" admin1 ", "admin123")]
#[case("admin1 ", "admin123")]
#[case("nobody", "admin123")]
#[tokio::test]
async fn mismatched_credentials_are_not_found(
    store: CredentialStore,
    #[case] username: &str,
    #[case] password: &str,
) {
    let store = seeded(store).await;
    let err = store
        .resolve(&credentials(username, password))
        .await
        .expect_err("credentials must not match");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), INVALID_CREDENTIALS_MESSAGE);
}

#[rstest]
#[case("admin", Role::Admin)]
#[case("employee", Role::Employee)]
#[tokio::test]
async fn create_accepts_both_roles_and_hides_password(
    store: CredentialStore,
    #[case] raw: &str,
    #[case] role: Role,
) {
    let view = store
        .create(candidate("newbie", Some(raw)))
        .await
        .expect("create user");
    assert_eq!(view.role, role);
    assert_eq!(view.id, UserId::new(1));

    let value = serde_json::to_value(&view).expect("serialise view");
    assert!(value.get("password").is_none());

    let resolved = store
        .resolve(&credentials("newbie", "pw"))
        .await
        .expect("new account can log in");
    assert_eq!(resolved, view);
}

#[rstest]
#[case(Some("superuser"), "invalid_type")]
#[case(Some("Admin"), "invalid_type")]
#[case(None, "missing_type")]
#[tokio::test]
async fn create_rejects_bad_roles(
    store: CredentialStore,
    #[case] role: Option<&str>,
    #[case] code: &str,
) {
    let err = store
        .create(candidate("newbie", role))
        .await
        .expect_err("role must be rejected");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), crate::domain::INVALID_ROLE_MESSAGE);
    assert_eq!(err.details(), Some(&json!({ "field": "type", "code": code })));
    assert!(store.list_all().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test]
async fn role_is_checked_before_uniqueness(store: CredentialStore) {
    let store = seeded(store).await;
    let err = store
        .create(candidate("admin1", Some("superuser")))
        .await
        .expect_err("invalid role wins");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn duplicate_username_is_a_conflict(store: CredentialStore) {
    let store = seeded(store).await;
    let err = store
        .create(candidate("employee1", Some("employee")))
        .await
        .expect_err("duplicate username");
    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), DUPLICATE_USERNAME_MESSAGE);
    assert_eq!(store.list_all().await.expect("list").len(), 4);
}

#[rstest]
#[tokio::test]
async fn successful_create_grows_store_by_one(store: CredentialStore) {
    let store = seeded(store).await;
    let view = store
        .create(candidate("employee3", Some("employee")))
        .await
        .expect("create user");
    assert_eq!(view.id, UserId::new(5));
    assert_eq!(store.list_all().await.expect("list").len(), 5);
    assert_eq!(
        store.lookup_by_id(UserId::new(5)).await.expect("lookup"),
        view
    );
}

#[rstest]
#[tokio::test]
async fn padded_username_is_a_distinct_account(store: CredentialStore) {
    let store = seeded(store).await;
    let view = store
        .create(candidate("  admin1", Some("employee")))
        .await
        .expect("padded name is not a duplicate");
    assert_eq!(view.id, UserId::new(5));
    assert_eq!(view.username.as_ref(), "  admin1");

    let resolved = store
        .resolve(&credentials("  admin1", "pw"))
        .await
        .expect("exact name resolves");
    assert_eq!(resolved.id, UserId::new(5));
    let original = store
        .resolve(&credentials("admin1", "admin123"))
        .await
        .expect("seeded account untouched");
    assert_eq!(original.id, UserId::new(1));
}

#[rstest]
#[case("", "pw", "username")]
#[case("   ", "pw", "username")]
#[case("someone", "", "password")]
#[tokio::test]
async fn blank_fields_are_rejected(
    store: CredentialStore,
    #[case] username: &str,
    #[case] password: &str,
    #[case] field: &str,
) {
    let candidate = UserCandidate::new(username, password, "a@b.c", "Name", Some("employee"));
    let err = store.create(candidate).await.expect_err("blank field");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    let details = err.details().expect("details present");
    assert_eq!(details["field"], json!(field));
}

#[rstest]
#[tokio::test]
async fn unknown_id_is_not_found(store: CredentialStore) {
    let err = store
        .lookup_by_id(UserId::new(42))
        .await
        .expect_err("missing user");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn repository_failures_are_internal() {
    let mut repo = MockUserRepository::new();
    repo.expect_list()
        .returning(|| Err(UserPersistenceError::query("connection reset")));
    repo.expect_find_by_username()
        .returning(|_| Err(UserPersistenceError::query("connection reset")));
    let store = CredentialStore::new(Arc::new(repo), hasher());

    let listed = store.list_all().await.expect_err("list fails");
    assert_eq!(listed.code(), ErrorCode::InternalError);

    let resolved = store
        .resolve(&credentials("admin1", "admin123"))
        .await
        .expect_err("resolve fails");
    assert_eq!(resolved.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn invalid_candidates_never_reach_the_repository() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert().never();
    let store = CredentialStore::new(Arc::new(repo), hasher());

    let err = store
        .create(candidate("newbie", Some("manager")))
        .await
        .expect_err("invalid role");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}
