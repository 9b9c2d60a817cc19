//! Client core for the job board API.
//!
//! Holds everything a front end needs apart from rendering:
//!
//! - [`session`]: who is signed in, persisted across restarts.
//! - [`guard`]: the route table and the access decision for each path.
//! - [`resource`]: explicit state containers for fetched collections.
//! - [`jobs`] and [`users`]: the fetch and create flows driving those stores.
//! - [`api`]: the HTTP boundary, behind the [`PortalApi`] trait.
//! - [`portal`]: all of the above wired together.
//!
//! # Example
//!
//! ```no_run
//! use jobboard_client::{ClientConfig, LoginCredentials, Portal, Route, StateContainer};
//!
//! # async fn run() -> Result<(), jobboard_client::ClientError> {
//! let config = ClientConfig::new("http://localhost:3000/user", "/tmp/jobboard")?;
//! let portal = Portal::open(&config)?;
//! portal
//!     .login(&LoginCredentials::new("employee1", "emp123"))
//!     .await?;
//! if portal.navigate("/jobs").destination() == Route::Jobs {
//!     portal.fetch_jobs().await?;
//! }
//! let listed = portal.jobs().state().items.len();
//! # let _ = listed;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
mod error;
pub mod guard;
pub mod jobs;
mod model;
pub mod portal;
pub mod resource;
pub mod session;
pub mod storage;
pub mod users;

pub use api::{HttpPortalApi, Operation, PortalApi};
pub use config::ClientConfig;
pub use error::{ClientError, StorageError};
pub use guard::{GuardDecision, Navigation, Route, guard, navigate};
pub use jobs::JobDraft;
pub use model::{INVALID_ROLE_MESSAGE, Job, LoginCredentials, Registration, Role, UserView};
pub use portal::Portal;
pub use resource::{ResourceEvent, ResourceState, ResourceStore, StateContainer};
pub use session::{SessionEvent, SessionState, SessionStore};
pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage};
