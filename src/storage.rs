use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableTable, TableDefinition};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;

/// Table holding one serialized JSON array per collection.
/// Key: collection name
/// Value: JSON array of the collection's records
pub const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

/// Storage key for the favorite set.
pub const FAVORITES_KEY: &str = "favorites";

/// Storage key for the shopping list.
pub const SHOPPING_LIST_KEY: &str = "shopping_list";

/// Durable key-value storage for the collections, backed by redb.
#[derive(Clone)]
pub struct CollectionStorage {
    db: Arc<Database>,
}

impl CollectionStorage {
    /// Open (or create) the database at `path` and ensure the table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = Database::create(path).map_err(|e| StorageError::Database(e.to_string()))?;

        let write_txn = db
            .begin_write()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        {
            let _ = write_txn
                .open_table(COLLECTIONS_TABLE)
                .map_err(|e| StorageError::Database(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Read a collection. An absent key is an empty collection, not an error.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StorageError::Database(e.to_string()))?;

        let table = read_txn
            .open_table(COLLECTIONS_TABLE)
            .map_err(|e| StorageError::Database(e.to_string()))?;

        match table
            .get(key)
            .map_err(|e| StorageError::Database(e.to_string()))?
        {
            Some(value) => Ok(serde_json::from_slice(value.value())?),
            None => Ok(Vec::new()),
        }
    }

    /// Write a collection's full contents under its key.
    pub fn write<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StorageError> {
        let value = serde_json::to_vec(items)?;
        self.write_raw(key, &value)
    }

    /// Store raw bytes under a key.
    pub fn write_raw(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(COLLECTIONS_TABLE)
                .map_err(|e| StorageError::Database(e.to_string()))?;
            table
                .insert(key, value)
                .map_err(|e| StorageError::Database(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(())
    }
}
