//! The account list shown to admins.

use tracing::debug;

use crate::api::PortalApi;
use crate::error::ClientError;
use crate::model::UserView;
use crate::resource::{ResourceEvent, ResourceStore, StateContainer};

/// Shown when fetching users fails without a server-supplied reason.
pub const FETCH_USERS_FALLBACK: &str = "Failed to fetch users.";

/// Store of accounts.
pub type UserStore = ResourceStore<UserView>;

/// Replace the store's items with the server's account list.
///
/// # Errors
///
/// Returns the [`ClientError`] raised by `api`; its message is also stored.
pub async fn fetch_users<A>(api: &A, store: &UserStore) -> Result<(), ClientError>
where
    A: PortalApi + ?Sized,
{
    store.dispatch(ResourceEvent::FetchPending);
    match api.list_users().await {
        Ok(users) => {
            debug!(count = users.len(), "users fetched");
            store.dispatch(ResourceEvent::FetchFulfilled(users));
            Ok(())
        }
        Err(err) => {
            store.dispatch(ResourceEvent::FetchRejected(err.user_message()));
            Err(err)
        }
    }
}
