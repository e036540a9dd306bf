//! Session storage

mod refresh_session;

pub use refresh_session::{RefreshSessionData, RefreshSessionStore};
