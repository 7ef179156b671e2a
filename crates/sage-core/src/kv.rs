//! Local key-value store trait.
//!
//! The browser original keeps feedback marks, the onboarding flag, and the
//! identity cookies in window-local storage. That global is modeled here as
//! an injected capability so components that need local persistence can be
//! tested without a real browser (or any filesystem at all).

use anyhow::Result;

/// A flat string-to-string store with local-storage semantics.
///
/// Reads are infallible (`None` when the key is absent); writes may fail
/// (quota, I/O) and callers decide whether that is worth surfacing.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key` if present.
    fn remove(&self, key: &str) -> Result<()>;
}
