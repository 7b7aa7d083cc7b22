//! Storage backends for credentials and opaque tokens.

use crate::core::{BackendResult, User};

pub mod redb_backend;

pub use redb_backend::RedbAuthBackend;

/// Default name of the bucket that stores user records.
pub const USER_BUCKET_NAME: &str = "authbucket";

/// Default name of the bucket that stores opaque tokens.
pub const TOKEN_BUCKET_NAME: &str = "tokenbucket";

/// Capability contract for credential and token storage, independent
/// of the engine behind it.
///
/// Every operation is a single atomic unit against the underlying
/// engine; implementations hold no transaction state across calls.
/// Token keys and values are opaque byte strings stored verbatim.
pub trait AuthBackend: Send + Sync {
    /// Upserts an opaque value into the token bucket, creating the
    /// bucket on first write.
    fn set_value(&self, key: &[u8], value: &[u8]) -> BackendResult<()>;

    /// Exact-match lookup in the token bucket. Fails with
    /// `KeyspaceMissing` if the bucket was never created and
    /// `NotFound` if the key is absent.
    fn get_value(&self, key: &[u8]) -> BackendResult<Vec<u8>>;

    /// Creates or overwrites the record stored under `username`,
    /// hashing the plaintext password before it is persisted. Each
    /// call mints a fresh identifier, so re-adding an existing
    /// username replaces the record and changes its uuid.
    fn add_user(&self, username: &str, password: &str, is_admin: bool) -> BackendResult<()>;

    /// Exact-match lookup and decode of one user record.
    fn get_user(&self, username: &str) -> BackendResult<User>;

    /// Removes the record if present; deleting an absent username is
    /// not an error.
    fn delete_user(&self, username: &str) -> BackendResult<()>;

    /// Every decodable record in the user bucket, in ascending byte
    /// order of the key. Undecodable records are skipped with a
    /// warning; a user bucket that was never created yields an empty
    /// list.
    fn get_all_users(&self) -> BackendResult<Vec<User>>;
}
