//! Client-side caches of server collections.
//!
//! A [`ResourceStore`] holds `{items, loading, error}` and changes only
//! through [`ResourceEvent`]s. Each fetch or create runs
//! `pending -> fulfilled | rejected`. Overlapping fetches are not merged or
//! cancelled; whichever resolves last decides the items.

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// A value observed through snapshots and changed through events.
///
/// Views depend only on this trait.
pub trait StateContainer {
    /// Snapshot type.
    type State;
    /// Transition type.
    type Event;

    /// Current snapshot.
    fn state(&self) -> Self::State;

    /// Apply a transition.
    fn dispatch(&self, event: Self::Event);
}

/// Snapshot of a collection store.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    /// Items in server order, followed by any created since the last fetch.
    pub items: Vec<T>,
    /// A request is in flight.
    pub loading: bool,
    /// Message from the last failed request.
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

/// Collection store transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceEvent<T> {
    /// A fetch started.
    FetchPending,
    /// A fetch returned the full collection.
    FetchFulfilled(Vec<T>),
    /// A fetch failed with the given message.
    FetchRejected(String),
    /// A create started.
    CreatePending,
    /// A create returned the stored record.
    CreateFulfilled(T),
    /// A create failed with the given message.
    CreateRejected(String),
    /// The displayed error was dismissed.
    ClearError,
}

impl<T> ResourceState<T> {
    /// Apply one transition. Rejections leave `items` untouched.
    pub fn apply(&mut self, event: ResourceEvent<T>) {
        match event {
            ResourceEvent::FetchPending | ResourceEvent::CreatePending => {
                self.loading = true;
                self.error = None;
            }
            ResourceEvent::FetchFulfilled(items) => {
                self.loading = false;
                self.items = items;
            }
            ResourceEvent::CreateFulfilled(item) => {
                self.loading = false;
                self.items.push(item);
            }
            ResourceEvent::FetchRejected(message) | ResourceEvent::CreateRejected(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            ResourceEvent::ClearError => self.error = None,
        }
    }
}

/// Shared, event-driven holder of a [`ResourceState`].
pub struct ResourceStore<T> {
    state: Mutex<ResourceState<T>>,
}

impl<T> ResourceStore<T> {
    /// Empty, idle store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ResourceState::default()),
        }
    }

    /// Dismiss the displayed error.
    pub fn clear_error(&self) {
        self.apply(ResourceEvent::ClearError);
    }

    fn apply(&self, event: ResourceEvent<T>) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(event);
    }
}

impl<T> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ResourceStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("ResourceStore")
            .field("state", &*state)
            .finish()
    }
}

impl<T: Clone> StateContainer for ResourceStore<T> {
    type State = ResourceState<T>;
    type Event = ResourceEvent<T>;

    fn state(&self) -> ResourceState<T> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn dispatch(&self, event: ResourceEvent<T>) {
        self.apply(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> ResourceStore<u32> {
        let store = ResourceStore::new();
        store.dispatch(ResourceEvent::FetchFulfilled(vec![1, 2]));
        store
    }

    #[rstest]
    #[case(ResourceEvent::FetchPending)]
    #[case(ResourceEvent::CreatePending)]
    fn pending_sets_loading_and_clears_error(
        store: ResourceStore<u32>,
        #[case] event: ResourceEvent<u32>,
    ) {
        store.dispatch(ResourceEvent::FetchRejected("old".to_owned()));
        store.dispatch(event);

        let state = store.state();
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.items, vec![1, 2]);
    }

    #[rstest]
    fn fetch_replaces_and_create_appends(store: ResourceStore<u32>) {
        store.dispatch(ResourceEvent::FetchPending);
        store.dispatch(ResourceEvent::FetchFulfilled(vec![7]));
        store.dispatch(ResourceEvent::CreatePending);
        store.dispatch(ResourceEvent::CreateFulfilled(8));

        assert_eq!(
            store.state(),
            ResourceState {
                items: vec![7, 8],
                loading: false,
                error: None,
            }
        );
    }

    #[rstest]
    #[case(ResourceEvent::FetchRejected("fetch failed".to_owned()), "fetch failed")]
    #[case(ResourceEvent::CreateRejected("create failed".to_owned()), "create failed")]
    fn rejection_keeps_items(
        store: ResourceStore<u32>,
        #[case] event: ResourceEvent<u32>,
        #[case] expected: &str,
    ) {
        store.dispatch(ResourceEvent::FetchPending);
        store.dispatch(event);

        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(expected));
        assert_eq!(state.items, vec![1, 2]);
    }

    #[rstest]
    fn last_resolved_fetch_wins(store: ResourceStore<u32>) {
        store.dispatch(ResourceEvent::FetchPending);
        store.dispatch(ResourceEvent::FetchPending);
        store.dispatch(ResourceEvent::FetchFulfilled(vec![10]));
        store.dispatch(ResourceEvent::FetchFulfilled(vec![20, 21]));

        assert_eq!(store.state().items, vec![20, 21]);
    }

    #[rstest]
    fn clear_error_only_touches_error(store: ResourceStore<u32>) {
        store.dispatch(ResourceEvent::CreateRejected("boom".to_owned()));
        store.clear_error();

        let state = store.state();
        assert_eq!(state.error, None);
        assert_eq!(state.items, vec![1, 2]);
    }
}
