//! Dual storage shape for one event's handler list.
//!
//! The common case is a single handler per event, so a [`Slot`] stores one
//! entry unwrapped and only allocates a vector once a second handler shows
//! up. Removal collapses back: a slot with one survivor becomes
//! [`Slot::One`] again, and an emptied slot is dropped from the registry map
//! entirely (the "none" case is absence of the key).
//!
//! Callers never observe the shape: introspection always presents a list.
//!
//! ## Invariants
//! - `Many` holds two or more entries at rest.
//! - Entry order is registration order, across phases.
//! - The registry drops the slot when [`Slot::remove`] reports zero remaining.

use crate::handlers::Callback;
use crate::registry::entry::Entry;

/// Handler storage for one event: one entry unwrapped, or an ordered list.
pub(crate) enum Slot<A: 'static> {
    /// Exactly one handler (no vector allocated).
    One(Entry<A>),
    /// Two or more handlers in registration order.
    Many(Vec<Entry<A>>),
}

impl<A: 'static> Slot<A> {
    /// The entries in registration order, shape-independent.
    pub(crate) fn entries(&self) -> &[Entry<A>] {
        match self {
            Slot::One(entry) => std::slice::from_ref(entry),
            Slot::Many(entries) => entries.as_slice(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries().len()
    }

    /// Appends an entry, expanding `One` into `Many` on the second handler.
    pub(crate) fn push(&mut self, entry: Entry<A>) {
        match std::mem::replace(self, Slot::Many(Vec::new())) {
            Slot::One(first) => *self = Slot::Many(vec![first, entry]),
            Slot::Many(mut entries) => {
                entries.push(entry);
                *self = Slot::Many(entries);
            }
        }
    }

    /// Removes every entry whose callback is identity-equal to `callback`.
    ///
    /// Returns the number of remaining entries; a slot left with one entry is
    /// collapsed back to `One`. The caller drops the slot when zero remain.
    pub(crate) fn remove(&mut self, callback: &Callback<A>) -> usize {
        let mut entries = self.take_entries();
        entries.retain(|entry| !entry.matches(callback));
        self.rebuild(entries)
    }

    /// Removes a single fired `once` entry matching `callback` by identity.
    ///
    /// Unlike [`Slot::remove`], this never touches other registrations of
    /// the same callback (a sibling `on`/`before`/`after` entry survives a
    /// once firing). Returns the number of remaining entries.
    pub(crate) fn remove_once(&mut self, callback: &Callback<A>) -> usize {
        let mut entries = self.take_entries();
        if let Some(pos) = entries.iter().position(|e| e.once && e.matches(callback)) {
            entries.remove(pos);
        }
        self.rebuild(entries)
    }

    fn take_entries(&mut self) -> Vec<Entry<A>> {
        match std::mem::replace(self, Slot::Many(Vec::new())) {
            Slot::One(entry) => vec![entry],
            Slot::Many(entries) => entries,
        }
    }

    /// Restores the shape invariant: one survivor collapses to `One`.
    fn rebuild(&mut self, mut entries: Vec<Entry<A>>) -> usize {
        let remaining = entries.len();
        if remaining == 1 {
            if let Some(last) = entries.pop() {
                *self = Slot::One(last);
            }
        } else {
            *self = Slot::Many(entries);
        }
        remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::callback;

    #[test]
    fn test_push_expands_one_into_many() {
        let a = callback(|_: &()| ());
        let b = callback(|_: &()| ());

        let mut slot = Slot::One(Entry::normal(&a));
        assert!(matches!(slot, Slot::One(_)));

        slot.push(Entry::normal(&b));
        assert!(matches!(slot, Slot::Many(_)));
        assert_eq!(slot.len(), 2);
        assert!(slot.entries()[0].matches(&a));
        assert!(slot.entries()[1].matches(&b));
    }

    #[test]
    fn test_remove_collapses_back_to_one() {
        let a = callback(|_: &()| ());
        let b = callback(|_: &()| ());

        let mut slot = Slot::One(Entry::normal(&a));
        slot.push(Entry::normal(&b));

        assert_eq!(slot.remove(&a), 1);
        assert!(matches!(slot, Slot::One(_)));
        assert!(slot.entries()[0].matches(&b));
    }

    #[test]
    fn test_remove_reports_empty() {
        let a = callback(|_: &()| ());

        let mut slot = Slot::One(Entry::normal(&a));
        assert_eq!(slot.remove(&a), 0);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let a = callback(|_: &()| ());
        let ghost = callback(|_: &()| ());

        let mut slot = Slot::One(Entry::normal(&a));
        assert_eq!(slot.remove(&ghost), 1);
        assert!(slot.entries()[0].matches(&a));
    }

    #[test]
    fn test_remove_once_spares_sibling_registrations() {
        let a = callback(|_: &()| ());

        let mut slot = Slot::One(Entry::normal(&a));
        slot.push(Entry::once(&a));

        assert_eq!(slot.remove_once(&a), 1);
        assert!(matches!(slot, Slot::One(_)));
        assert!(slot.entries()[0].is_bare_normal());
    }

    #[test]
    fn test_remove_once_takes_one_entry_per_call() {
        let a = callback(|_: &()| ());

        let mut slot = Slot::One(Entry::once(&a));
        slot.push(Entry::once(&a));

        assert_eq!(slot.remove_once(&a), 1);
        assert_eq!(slot.remove_once(&a), 0);
    }

    #[test]
    fn test_remove_strips_every_identity_match() {
        let a = callback(|_: &()| ());
        let b = callback(|_: &()| ());

        // Same callback registered under several phases.
        let mut slot = Slot::One(Entry::normal(&a));
        slot.push(Entry::before(&a));
        slot.push(Entry::normal(&b));
        slot.push(Entry::after(&a));

        assert_eq!(slot.remove(&a), 1);
        assert!(slot.entries()[0].matches(&b));
    }
}
