//! Liveness of the host that requested work.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The invoking host's lifecycle, owned on its primary context.
///
/// Dropping the host tears it down. Results delivered after teardown are
/// discarded instead of being handed to a dead host.
///
/// # Examples
///
/// ```
/// use docstack::task::Host;
///
/// let host = Host::new();
/// let handle = host.handle();
/// assert!(handle.is_alive());
///
/// drop(host);
/// assert!(!handle.is_alive());
/// ```
#[derive(Debug)]
pub struct Host {
    alive: Arc<AtomicBool>,
}

impl Host {
    /// Creates a live host.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A cloneable view of this host's liveness.
    #[must_use]
    pub fn handle(&self) -> HostHandle {
        HostHandle {
            alive: self.alive.clone(),
        }
    }

    /// Marks the host dead. Idempotent.
    pub fn tear_down(&self) {
        self.alive.store(false, Ordering::Release);
    }

    /// Whether the host has not been torn down yet.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Host {
    fn drop(&mut self) {
        self.tear_down();
    }
}

/// Read-only liveness handle carried by background work.
#[derive(Debug, Clone)]
pub struct HostHandle {
    alive: Arc<AtomicBool>,
}

impl HostHandle {
    /// Whether the owning host is still alive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}
