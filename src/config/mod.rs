use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::backend::{TOKEN_BUCKET_NAME, USER_BUCKET_NAME};

/// Tunables for a credential store instance.
///
/// The database handle itself is opened by the caller; this only
/// names the buckets inside it and fixes the bcrypt work factor
/// applied at write time.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    pub user_bucket: String,
    pub token_bucket: String,
    pub bcrypt_cost: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            user_bucket: USER_BUCKET_NAME.to_string(),
            token_bucket: TOKEN_BUCKET_NAME.to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl StoreConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
