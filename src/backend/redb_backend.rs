use log::{error, warn};
use redb::{Database, ReadOnlyTable, ReadTransaction, ReadableTable, TableDefinition, TableError};
use std::sync::Arc;

use super::AuthBackend;
use crate::config::StoreConfig;
use crate::core::{BackendError, BackendResult, User};

fn bucket_def(name: &str) -> TableDefinition<'_, &'static [u8], &'static [u8]> {
    TableDefinition::new(name)
}

/// redb-backed implementation of [`AuthBackend`].
///
/// Each bucket is one redb table. Every public operation opens its
/// own transaction: reads see a consistent snapshot, writes either
/// commit in full or abort when the transaction is dropped on an
/// error path. The database handle is opened and closed by the
/// caller; this type only owns the two buckets inside it.
#[derive(Clone)]
pub struct RedbAuthBackend {
    db: Arc<Database>,
    config: StoreConfig,
}

impl std::fmt::Debug for RedbAuthBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbAuthBackend")
            .field("user_bucket", &self.config.user_bucket)
            .field("token_bucket", &self.config.token_bucket)
            .finish()
    }
}

impl RedbAuthBackend {
    /// Backend over an already-open database, using the default
    /// bucket names and bcrypt cost.
    pub fn new(db: Arc<Database>) -> Self {
        Self::with_config(db, StoreConfig::default())
    }

    pub fn with_config(db: Arc<Database>, config: StoreConfig) -> Self {
        Self { db, config }
    }

    pub fn with_buckets(db: Arc<Database>, user_bucket: &str, token_bucket: &str) -> Self {
        Self::with_config(
            db,
            StoreConfig {
                user_bucket: user_bucket.to_string(),
                token_bucket: token_bucket.to_string(),
                ..StoreConfig::default()
            },
        )
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Opens `bucket` inside a read transaction. `Ok(None)` means the
    /// bucket has never been created, which callers map to either
    /// `KeyspaceMissing` or an empty scan.
    fn open_read_bucket(
        &self,
        txn: &ReadTransaction,
        bucket: &str,
    ) -> BackendResult<Option<ReadOnlyTable<&'static [u8], &'static [u8]>>> {
        match txn.open_table(bucket_def(bucket)) {
            Ok(table) => Ok(Some(table)),
            Err(TableError::TableDoesNotExist(_)) => Ok(None),
            Err(e) => Err(BackendError::Write(e.to_string())),
        }
    }

    fn put(&self, bucket: &str, key: &[u8], value: &[u8]) -> BackendResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(bucket_def(bucket))?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn get(&self, bucket: &str, key: &[u8]) -> BackendResult<Vec<u8>> {
        let read_txn = self.db.begin_read()?;
        let table = self
            .open_read_bucket(&read_txn, bucket)?
            .ok_or_else(|| BackendError::KeyspaceMissing(bucket.to_string()))?;

        match table.get(key)? {
            Some(value) => Ok(value.value().to_vec()),
            None => Err(BackendError::NotFound(
                String::from_utf8_lossy(key).into_owned(),
            )),
        }
    }

    /// The bucket is created if absent, so deleting from a cold
    /// bucket is a no-op success rather than an error.
    fn delete(&self, bucket: &str, key: &[u8]) -> BackendResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(bucket_def(bucket))?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl AuthBackend for RedbAuthBackend {
    fn set_value(&self, key: &[u8], value: &[u8]) -> BackendResult<()> {
        self.put(&self.config.token_bucket, key, value)
    }

    fn get_value(&self, key: &[u8]) -> BackendResult<Vec<u8>> {
        self.get(&self.config.token_bucket, key)
    }

    fn add_user(&self, username: &str, password: &str, is_admin: bool) -> BackendResult<()> {
        if username.is_empty() {
            return Err(BackendError::Write("username must not be empty".to_string()));
        }

        let user = User::new(username, password, is_admin, self.config.bcrypt_cost)?;
        let data = user.encode()?;
        self.put(&self.config.user_bucket, username.as_bytes(), &data)
    }

    fn get_user(&self, username: &str) -> BackendResult<User> {
        let data = self.get(&self.config.user_bucket, username.as_bytes())?;
        User::decode(&data).map_err(|e| {
            error!("Failed to decode user record for {}: {}", username, e);
            e
        })
    }

    fn delete_user(&self, username: &str) -> BackendResult<()> {
        self.delete(&self.config.user_bucket, username.as_bytes())
    }

    fn get_all_users(&self) -> BackendResult<Vec<User>> {
        let read_txn = self.db.begin_read()?;
        let table = match self.open_read_bucket(&read_txn, &self.config.user_bucket)? {
            Some(table) => table,
            // No users registered yet.
            None => return Ok(Vec::new()),
        };

        let mut users = Vec::new();
        for item in table.iter()? {
            let (key, value) = item?;
            match User::decode(value.value()) {
                Ok(user) => users.push(user),
                Err(e) => {
                    warn!(
                        "Skipping undecodable user record under key {:?}: {}",
                        String::from_utf8_lossy(key.value()),
                        e
                    );
                }
            }
        }
        Ok(users)
    }
}
