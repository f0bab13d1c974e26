//! # milk-session
//!
//! Client-side session state for CeialMilk:
//!
//! - [`SessionStore`]: the authenticated identity and its readiness
//! - [`ActiveFarmResolver`]: which farm scopes the session, kept consistent
//!   with the server's membership list
//! - [`guard`]: authenticated and role gates
//! - [`ThemePreference`]: persisted light/dark choice
//! - [`AppSession`]: the context object that owns and wires all of the above
//!
//! Durable state goes through the [`KeyValueStore`] port; the REST API is
//! reached through the [`SessionBackend`] and [`FarmDirectory`] ports.

pub mod guard;

mod app;
mod error;
mod ports;
mod resolver;
mod session;
mod storage;
mod theme;

pub use app::{AppSession, SESSION_COOKIES_KEY, persist_cookies, restore_cookies};
pub use error::{ResolverError, SessionError, StorageError};
pub use guard::GuardOutcome;
pub use ports::{FarmDirectory, SessionBackend};
pub use resolver::{ACTIVE_FARM_KEY, ActiveFarmResolver};
pub use session::{SessionSnapshot, SessionStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use theme::{THEME_KEY, ThemePreference};
