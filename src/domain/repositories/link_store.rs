//! Store trait for short link data access.

use crate::domain::entities::ShortLink;

/// Store interface for the shortener's code-to-URL mapping.
///
/// The store is synchronous: the only implementation is an in-process map and
/// none of the operations block on I/O.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkStore`] - RwLock-guarded map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkStore: Send + Sync {
    /// Atomically associates `code` with `target_url` if the code is free.
    ///
    /// Returns `false` without modifying the store when the code is already
    /// taken. The check and insert happen under a single write lock, so the
    /// uniqueness invariant holds under concurrent callers.
    fn insert_if_absent(&self, code: &str, target_url: &str) -> bool;

    /// Looks up the target URL for a code.
    ///
    /// Absence is a value, not an error: unknown codes return `None`.
    fn get(&self, code: &str) -> Option<String>;

    /// Returns a snapshot copy of every stored link.
    ///
    /// Iteration order is unspecified.
    fn snapshot(&self) -> Vec<ShortLink>;

    /// Number of stored links.
    fn len(&self) -> usize;
}
