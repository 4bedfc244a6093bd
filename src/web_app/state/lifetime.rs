// web_app/state/lifetime.rs - Binding in-flight requests to a page
//
// A page opens a ViewLifetime when it mounts and ends it from
// on_cleanup. Every request it spawns carries a LiveToken; a response
// that arrives after the page is gone finds its token dead and is
// dropped instead of touching disposed signals.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct ViewLifetime {
    live: Arc<AtomicBool>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn token(&self) -> LiveToken {
        LiveToken {
            live: Arc::clone(&self.live),
        }
    }

    /// Mark the page as deactivated; idempotent
    pub fn end(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle carried by a spawned request
#[derive(Clone, Debug)]
pub struct LiveToken {
    live: Arc<AtomicBool>,
}

impl LiveToken {
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Run `apply` only while the owning page is still mounted
    ///
    /// Returns `None` (and logs) when the response arrived too late.
    pub fn apply<T>(&self, what: &str, apply: impl FnOnce() -> T) -> Option<T> {
        if self.is_live() {
            Some(apply())
        } else {
            tracing::debug!("Discarding late {} response; view is gone", what);
            None
        }
    }
}
