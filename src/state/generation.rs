// ============================================================================
// REQUEST GENERATION - Discards responses of superseded requests
// ============================================================================

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Generation counter shared between a loader and its in-flight request.
///
/// Clones share the same counter, so the async continuation can check
/// whether the loader moved on while it was waiting.
#[derive(Clone, Debug, Default)]
pub struct RequestGeneration {
    current: Rc<Cell<u64>>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request; every earlier token becomes stale
    pub fn begin(&self) -> u64 {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        next
    }

    /// Invalidate the outstanding token (navigation away or unmount)
    pub fn invalidate(&self) {
        self.current.set(self.current.get().wrapping_add(1));
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current.get() == token
    }

    /// Run `apply` only if `token` is still the latest generation
    pub fn apply_if_current<F>(&self, token: u64, apply: F) -> bool
    where
        F: FnOnce(),
    {
        if self.is_current(token) {
            apply();
            true
        } else {
            false
        }
    }

    /// Start a request now and hand its result to `apply` once `load`
    /// resolves, unless a newer request or a teardown came in between.
    /// Resolves to whether `apply` ran.
    pub fn guard<T, Fut, F>(&self, load: Fut, apply: F) -> impl Future<Output = bool>
    where
        Fut: Future<Output = T>,
        F: FnOnce(T),
    {
        let token = self.begin();
        let generation = self.clone();
        async move {
            let value = load.await;
            generation.apply_if_current(token, || apply(value))
        }
    }
}

// Handles are equal when they share the counter
impl PartialEq for RequestGeneration {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.current, &other.current)
    }
}
