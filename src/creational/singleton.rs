//! Process-wide database connection handle.
//!
//! There is exactly one [`DatabaseConnection`] per process. It is created on
//! the first call to [`DatabaseConnection::instance`] and lives until exit.
//! Every other way of getting hold of one either fails or hands back that
//! same instance:
//!
//! - direct construction through [`DatabaseConnection::try_new`] is rejected
//!   with [`SingletonError::IllegalState`];
//! - [`DatabaseConnection::try_clone`] always fails with
//!   [`SingletonError::CloneNotSupported`];
//! - deserializing a [`ConnectionHandle`] resolves to the live instance.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::config::ConnectionSettings;
use crate::error::SingletonError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingletonState {
    Uninitialized,
    Ready,
}

impl fmt::Display for SingletonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SingletonState::Uninitialized => f.write_str("uninitialized"),
            SingletonState::Ready => f.write_str("ready"),
        }
    }
}

// ============================================================================
// Guarded lazy slot: Uninitialized -> Ready exactly once
// ============================================================================

/// One lazily built value plus the lock that guards its creation.
///
/// Readers take the fast path through the `OnceLock` (acquire). Only a
/// caller that finds the slot empty takes `transition`, re-checks, builds and
/// publishes. `created` is bumped after a successful build, still under the
/// lock, so a build that panics leaves the slot empty and retryable.
struct LazySlot<T> {
    value: OnceLock<T>,
    transition: Mutex<()>,
    created: AtomicUsize,
}

impl<T> LazySlot<T> {
    const fn new() -> Self {
        Self {
            value: OnceLock::new(),
            transition: Mutex::new(()),
            created: AtomicUsize::new(0),
        }
    }

    fn get(&self) -> Option<&T> {
        self.value.get()
    }

    fn created(&self) -> usize {
        self.created.load(Ordering::Acquire)
    }

    fn get_or_create(&self, build: impl FnOnce() -> T) -> &T {
        if let Some(existing) = self.value.get() {
            return existing;
        }

        let _guard = self.transition.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = self.value.get() {
            return existing;
        }

        let value = build();
        let published = self.value.get_or_init(|| value);
        self.created.fetch_add(1, Ordering::Release);
        published
    }
}

static INSTANCE: LazySlot<DatabaseConnection> = LazySlot::new();

// ============================================================================
// Example: Singleton (DatabaseConnection)
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct DatabaseConnection {
    id: Uuid,
    url: String,
    pool_size: u32,
}

impl DatabaseConnection {
    /// Returns the single instance, creating it on first use.
    pub fn instance() -> &'static DatabaseConnection {
        INSTANCE.get_or_create(|| Self::construct(ConnectionSettings::from_env()))
    }

    pub fn state() -> SingletonState {
        if INSTANCE.get().is_some() {
            SingletonState::Ready
        } else {
            SingletonState::Uninitialized
        }
    }

    /// Number of instances ever built in this process. Never above one.
    pub fn creation_count() -> usize {
        INSTANCE.created()
    }

    /// Direct construction, bypassing [`DatabaseConnection::instance`].
    ///
    /// Always rejected: a value built here would be a second identity next
    /// to the shared one.
    pub fn try_new() -> Result<DatabaseConnection, SingletonError> {
        let state = Self::state();
        log::error!("direct construction of DatabaseConnection attempted while {state}");
        Err(SingletonError::IllegalState { state })
    }

    pub fn try_clone(&self) -> Result<DatabaseConnection, SingletonError> {
        log::warn!("refusing to clone DatabaseConnection {}", self.id);
        Err(SingletonError::CloneNotSupported)
    }

    // Only reachable through INSTANCE.get_or_create, which runs it at most
    // once per successful publication.
    fn construct(settings: ConnectionSettings) -> DatabaseConnection {
        let connection = DatabaseConnection {
            id: Uuid::new_v4(),
            url: settings.url,
            pool_size: settings.pool_size,
        };
        log::info!("Instance created: {} ({})", connection.id, connection.url);
        connection
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn pool_size(&self) -> u32 {
        self.pool_size
    }
}

// ============================================================================
// Serialization: every snapshot resolves to the live instance
// ============================================================================

/// Serializable reference to the singleton.
///
/// Deserializing never builds a new connection: whatever the snapshot says,
/// the result points at [`DatabaseConnection::instance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionHandle(&'static DatabaseConnection);

impl ConnectionHandle {
    pub fn current() -> Self {
        ConnectionHandle(DatabaseConnection::instance())
    }

    pub fn connection(&self) -> &'static DatabaseConnection {
        self.0
    }
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    id: Uuid,
    url: String,
    pool_size: u32,
}

impl Serialize for ConnectionHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Snapshot {
            id: self.0.id,
            url: self.0.url.clone(),
            pool_size: self.0.pool_size,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConnectionHandle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = Snapshot::deserialize(deserializer)?;
        let live = DatabaseConnection::instance();
        if snapshot.id != live.id {
            log::debug!("snapshot {} resolved to live connection {}", snapshot.id, live.id);
        }
        Ok(ConnectionHandle(live))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};
    use std::thread;

    #[test]
    fn test_same_instance() {
        let first = DatabaseConnection::instance();
        let second = DatabaseConnection::instance();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.id(), second.id());
        assert_eq!(DatabaseConnection::state(), SingletonState::Ready);
        assert_eq!(DatabaseConnection::creation_count(), 1);
    }

    #[test]
    fn test_instance_across_threads() {
        let main = DatabaseConnection::instance() as *const DatabaseConnection as usize;
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| DatabaseConnection::instance() as *const DatabaseConnection as usize))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), main);
        }
        assert_eq!(DatabaseConnection::creation_count(), 1);
    }

    #[test]
    fn test_direct_construction_rejected() {
        DatabaseConnection::instance();
        assert_eq!(
            DatabaseConnection::try_new(),
            Err(SingletonError::IllegalState {
                state: SingletonState::Ready
            })
        );
    }

    #[test]
    fn test_slot_builds_once() {
        let slot: LazySlot<u32> = LazySlot::new();
        let mut builds = 0;
        assert_eq!(*slot.get_or_create(|| {
            builds += 1;
            7
        }), 7);
        assert_eq!(*slot.get_or_create(|| 8), 7);
        assert_eq!(builds, 1);
        assert_eq!(slot.created(), 1);
    }

    #[test]
    fn test_slot_recovers_from_panicking_build() {
        let slot: LazySlot<String> = LazySlot::new();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            slot.get_or_create(|| panic!("no entropy"));
        }));
        assert!(result.is_err());
        assert!(slot.get().is_none());
        assert_eq!(slot.created(), 0);

        // poisoned transition lock is recovered and the build is retried
        assert_eq!(slot.get_or_create(|| "ready".to_string()), "ready");
        assert_eq!(slot.created(), 1);
    }

    #[test]
    fn test_slot_concurrent_first_access() {
        let slot: LazySlot<usize> = LazySlot::new();
        let slot = &slot;
        let values: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| scope.spawn(move || *slot.get_or_create(|| i)))
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });
        assert!(values.iter().all(|&value| value == values[0]));
        assert_eq!(slot.created(), 1);
    }

    #[test]
    fn test_clone_rejected() {
        let connection = DatabaseConnection::instance();
        assert_eq!(connection.try_clone(), Err(SingletonError::CloneNotSupported));
        assert_eq!(connection.try_clone(), Err(SingletonError::CloneNotSupported));
    }

    #[test]
    fn test_deserialize_resolves_to_instance() {
        let handle = ConnectionHandle::current();
        let json = serde_json::to_string(&handle).unwrap();
        let restored: ConnectionHandle = serde_json::from_str(&json).unwrap();
        assert!(std::ptr::eq(restored.connection(), DatabaseConnection::instance()));

        let forged = format!(
            r#"{{"id":"{}","url":"postgres://elsewhere/db","pool_size":99}}"#,
            Uuid::new_v4()
        );
        let restored: ConnectionHandle = serde_json::from_str(&forged).unwrap();
        assert!(std::ptr::eq(restored.connection(), DatabaseConnection::instance()));
        assert_eq!(DatabaseConnection::creation_count(), 1);
    }

    #[test]
    fn test_malformed_snapshot_fails() {
        assert!(serde_json::from_str::<ConnectionHandle>(r#"{"url":"x"}"#).is_err());
    }
}
