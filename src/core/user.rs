//! User records and their persisted encoding.

use serde::{Deserialize, Serialize};

use crate::core::error::{BackendError, BackendResult};

/// One authenticable principal as persisted in the user bucket.
///
/// Records are stored as self-describing JSON so decode tolerates
/// fields added by later versions. The record carries its own
/// username and can be decoded without knowing the key it was stored
/// under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub uuid: String,
    pub username: String,
    /// bcrypt hash of the plaintext; the plaintext is never persisted.
    pub password: String,
    pub is_admin: bool,
}

impl User {
    /// Builds a record with a fresh v4 identifier and a hashed
    /// password. Every call mints a new identifier, even for a
    /// username that already exists in storage.
    pub fn new(username: &str, password: &str, is_admin: bool, cost: u32) -> BackendResult<Self> {
        let password = bcrypt::hash(password, cost)?;
        Ok(Self {
            uuid: uuid::Uuid::new_v4().to_string(),
            username: username.to_string(),
            password,
            is_admin,
        })
    }

    pub fn encode(&self) -> BackendResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| BackendError::Encode(e.to_string()))
    }

    pub fn decode(data: &[u8]) -> BackendResult<Self> {
        serde_json::from_slice(data).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Lowest cost bcrypt accepts; keeps hashing out of the test time.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_round_trip() {
        let user = User {
            uuid: "4be35b8a-5ef1-4b86-b2a5-14b22f0c6de7".to_string(),
            username: "alice".to_string(),
            password: "$2b$04$abcdefghijklmnopqrstuv".to_string(),
            is_admin: true,
        };

        let bytes = user.encode().expect("Failed to encode user");
        let decoded = User::decode(&bytes).expect("Failed to decode user");
        assert_eq!(decoded, user);
    }

    #[test]
    fn test_decode_tolerates_unknown_fields() {
        let data = br#"{"uuid":"u1","username":"bob","password":"h","is_admin":false,"created_at":123}"#;
        let user = User::decode(data).expect("Failed to decode user");
        assert_eq!(user.username, "bob");
        assert!(!user.is_admin);
    }

    #[test]
    fn test_decode_malformed_input() {
        let result = User::decode(b"not json");
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }

    #[test]
    fn test_new_hashes_password() {
        let user = User::new("bob", "secret", false, TEST_COST).expect("Failed to build user");
        assert_ne!(user.password, "secret");
        assert!(!user.uuid.is_empty());
    }

    #[test]
    fn test_new_mints_distinct_identifiers() {
        let a = User::new("bob", "secret", false, TEST_COST).expect("Failed to build user");
        let b = User::new("bob", "secret", false, TEST_COST).expect("Failed to build user");
        assert_ne!(a.uuid, b.uuid);
    }
}
