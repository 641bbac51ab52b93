//! Test doubles shared by unit tests and integration tests.
//!
//! Compiled for `cfg(test)` and when the `test-support` feature is enabled.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::ports::{FingerprintRepository, FingerprintRepositoryError};
use crate::domain::{FingerprintId, FingerprintRecord};

/// In-memory fingerprint store with primary-key semantics.
///
/// Inserting an identifier twice yields
/// [`FingerprintRepositoryError::Duplicate`]. Calling
/// [`fail_inserts`](Self::fail_inserts) makes subsequent inserts report an
/// unreachable store.
#[derive(Debug, Default)]
pub struct InMemoryFingerprintRepository {
    records: Mutex<BTreeMap<String, String>>,
    inserts: AtomicUsize,
    fail_inserts: AtomicBool,
}

impl InMemoryFingerprintRepository {
    /// Repository pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = FingerprintRecord>) -> Self {
        let repo = Self::default();
        {
            let mut guard = repo.lock();
            for record in records {
                guard.insert(record.fingerprint_id.as_str().to_owned(), record.user_name);
            }
        }
        repo
    }

    /// Make every later insert fail with a connection error.
    pub fn fail_inserts(&self) {
        self.fail_inserts.store(true, Ordering::SeqCst);
    }

    /// Snapshot of stored `(fingerprint_id, user_name)` pairs.
    pub fn records(&self) -> Vec<(String, String)> {
        self.lock()
            .iter()
            .map(|(id, name)| (id.clone(), name.clone()))
            .collect()
    }

    /// Number of successful inserts performed through the port.
    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl FingerprintRepository for InMemoryFingerprintRepository {
    async fn exists(
        &self,
        fingerprint_id: &FingerprintId,
    ) -> Result<bool, FingerprintRepositoryError> {
        Ok(self.lock().contains_key(fingerprint_id.as_str()))
    }

    async fn insert(&self, record: &FingerprintRecord) -> Result<(), FingerprintRepositoryError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(FingerprintRepositoryError::connection(
                "store unreachable",
            ));
        }
        let mut guard = self.lock();
        let key = record.fingerprint_id.as_str();
        if guard.contains_key(key) {
            return Err(FingerprintRepositoryError::duplicate(key));
        }
        guard.insert(key.to_owned(), record.user_name.clone());
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
