//! Authstore - an embedded credential and opaque-token store
//!
//! This crate persists user records with bcrypt-hashed passwords and
//! short-lived opaque tokens through a single redb database handle,
//! one transaction per operation. It is a library boundary only:
//! callers open the database, pick a transport, and decide token
//! policy themselves.

pub mod backend;
pub mod config;
pub mod core;

pub use crate::backend::{AuthBackend, RedbAuthBackend, TOKEN_BUCKET_NAME, USER_BUCKET_NAME};
pub use crate::config::StoreConfig;
pub use crate::core::{BackendError, BackendResult, User};
