//! Lock error handling utilities
//!
//! This module provides common lock error conversions to reduce code duplication.

use crate::core::common::EmbedixError;
use std::sync::{PoisonError, RwLockReadGuard, RwLockWriteGuard};

/// Convert a poisoned read lock error to EmbedixError
pub fn read_lock_poisoned<T>(_: PoisonError<RwLockReadGuard<T>>) -> EmbedixError {
    EmbedixError::Lock("Failed to acquire read lock: tree lock poisoned".to_string())
}

/// Convert a poisoned write lock error to EmbedixError
pub fn write_lock_poisoned<T>(_: PoisonError<RwLockWriteGuard<T>>) -> EmbedixError {
    EmbedixError::Lock("Failed to acquire write lock: tree lock poisoned".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::RwLock;

    #[test]
    fn poisoned_lock_error_messages() {
        let lock = RwLock::new(42);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = lock.write().unwrap();
            panic!("poison the lock");
        }));
        assert!(result.is_err());
        assert!(lock.is_poisoned());

        let err = lock.read().map_err(read_lock_poisoned).map(|_| ()).unwrap_err();
        assert_eq!(err.to_string(), "Lock Error: Failed to acquire read lock: tree lock poisoned");

        let err = lock.write().map_err(write_lock_poisoned).map(|_| ()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Lock Error: Failed to acquire write lock: tree lock poisoned"
        );
    }
}
