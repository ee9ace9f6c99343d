//! Registered handler entries.
//!
//! An [`Entry`] is what the registry actually stores: the user-supplied
//! callback plus its dispatch [`Phase`] and a `once` flag. The callback kept
//! here is always the original `Rc`, so identity-based removal needs no
//! unwrapping regardless of how the handler was registered.

use std::rc::Rc;

use crate::handlers::Callback;

/// Dispatch phase of a registered handler.
///
/// Entries for one event are stored in a single registration-ordered list;
/// partitioning into phases happens during dispatch, preserving per-phase
/// relative order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Runs before any normal handler; `Stop` aborts the whole emission.
    Before,
    /// Main phase, registration order; `Stop` skips the rest and the after phase.
    Normal,
    /// Runs after a completed normal phase; `Stop` skips remaining afters.
    After,
}

/// One registered handler for one event.
pub(crate) struct Entry<A: 'static> {
    /// The user-supplied callback; the removal key.
    pub(crate) callback: Callback<A>,
    /// Which dispatch phase this registration belongs to.
    pub(crate) phase: Phase,
    /// Deregistered immediately before its first invocation.
    pub(crate) once: bool,
}

impl<A: 'static> Entry<A> {
    pub(crate) fn normal(callback: &Callback<A>) -> Self {
        Self::new(callback, Phase::Normal, false)
    }

    pub(crate) fn before(callback: &Callback<A>) -> Self {
        Self::new(callback, Phase::Before, false)
    }

    pub(crate) fn after(callback: &Callback<A>) -> Self {
        Self::new(callback, Phase::After, false)
    }

    pub(crate) fn once(callback: &Callback<A>) -> Self {
        Self::new(callback, Phase::Normal, true)
    }

    fn new(callback: &Callback<A>, phase: Phase, once: bool) -> Self {
        Self {
            callback: Rc::clone(callback),
            phase,
            once,
        }
    }

    /// A plain `on` registration: normal phase, not once.
    ///
    /// Only bare normal entries participate in idempotent registration;
    /// before/after/once registrations are always distinct.
    pub(crate) fn is_bare_normal(&self) -> bool {
        self.phase == Phase::Normal && !self.once
    }

    /// Identity comparison against a removal key.
    pub(crate) fn matches(&self, callback: &Callback<A>) -> bool {
        Rc::ptr_eq(&self.callback, callback)
    }
}

// Manual impl: `A` itself need not be `Clone`, entries only clone the `Rc`.
impl<A: 'static> Clone for Entry<A> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
            phase: self.phase,
            once: self.once,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::callback;

    #[test]
    fn test_bare_normal_classification() {
        let cb = callback(|_: &()| ());

        assert!(Entry::normal(&cb).is_bare_normal());
        assert!(!Entry::before(&cb).is_bare_normal());
        assert!(!Entry::after(&cb).is_bare_normal());
        assert!(!Entry::once(&cb).is_bare_normal());
    }

    #[test]
    fn test_matches_by_identity_only() {
        let cb = callback(|_: &()| ());
        let twin = callback(|_: &()| ());
        let entry = Entry::before(&cb);

        assert!(entry.matches(&cb));
        assert!(!entry.matches(&twin));
    }
}
