//! The event-name → handler-list mapping and its mutation rules.
//!
//! [`Registry`] owns the `IndexMap` from event name to [`Slot`]. Insertion
//! order of event names is preserved (deterministic `names()` output), and
//! the map upholds one invariant throughout: **an event name is present only
//! while it has at least one handler** — removing the last handler removes
//! the key, never leaving an empty slot behind.
//!
//! ## Mutation rules
//! - Bare normal registrations are idempotent per callback identity;
//!   before/after/once registrations never deduplicate.
//! - An optional per-event handler limit rejects non-duplicate insertions
//!   with [`EmitterError::HandlerLimit`]; the caller decides whether that is
//!   loud (`try_*`) or silent (chaining API).
//! - All removals compare by `Rc` identity and tolerate absence silently.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::EmitterError;
use crate::handlers::Callback;
use crate::registry::entry::Entry;
use crate::registry::slot::Slot;

/// Ordered mapping from event name to handler slot.
pub(crate) struct Registry<A: 'static> {
    slots: IndexMap<String, Slot<A>>,
}

impl<A: 'static> Registry<A> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: IndexMap::with_capacity(capacity),
        }
    }

    /// Appends `entry` to the event's slot.
    ///
    /// A bare normal entry whose callback is already registered as a bare
    /// normal handler is a no-op (`Ok`). Otherwise, when `limit` is reached
    /// for this event, the insertion is rejected.
    pub(crate) fn insert(
        &mut self,
        event: &str,
        entry: Entry<A>,
        limit: Option<usize>,
    ) -> Result<(), EmitterError> {
        if entry.is_bare_normal() {
            if let Some(slot) = self.slots.get(event) {
                let duplicate = slot
                    .entries()
                    .iter()
                    .any(|e| e.is_bare_normal() && e.matches(&entry.callback));
                if duplicate {
                    return Ok(());
                }
            }
        }

        if let Some(limit) = limit {
            let registered = self.slots.get(event).map_or(0, Slot::len);
            if registered >= limit {
                return Err(EmitterError::HandlerLimit {
                    event: event.to_owned(),
                    limit,
                });
            }
        }

        match self.slots.get_mut(event) {
            Some(slot) => slot.push(entry),
            None => {
                self.slots.insert(event.to_owned(), Slot::One(entry));
            }
        }
        Ok(())
    }

    /// Drops the whole handler list for `event`.
    pub(crate) fn remove_event(&mut self, event: &str) {
        self.slots.shift_remove(event);
    }

    /// Removes every entry for `event` matching `callback` by identity,
    /// dropping the key when the slot empties.
    pub(crate) fn remove_callback(&mut self, event: &str, callback: &Callback<A>) {
        if let Some(slot) = self.slots.get_mut(event) {
            if slot.remove(callback) == 0 {
                self.slots.shift_remove(event);
            }
        }
    }

    /// Deregisters a fired `once` entry for `event`, dropping the key when
    /// the slot empties.
    ///
    /// Removes exactly one entry (identity match with the once flag set);
    /// other registrations of the same callback are untouched. Dispatch-only:
    /// the public removal surface goes through [`Registry::remove_callback`].
    pub(crate) fn remove_once(&mut self, event: &str, callback: &Callback<A>) {
        if let Some(slot) = self.slots.get_mut(event) {
            if slot.remove_once(callback) == 0 {
                self.slots.shift_remove(event);
            }
        }
    }

    /// Applies [`Registry::remove_callback`] to every registered event.
    pub(crate) fn remove_callback_all(&mut self, callback: &Callback<A>) {
        self.slots.retain(|_, slot| slot.remove(callback) > 0);
    }

    /// Drops every event.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    /// Clones the event's entries for dispatch.
    ///
    /// The snapshot decouples traversal from the live map, so handlers may
    /// mutate the registry mid-emission without affecting the pass underway.
    pub(crate) fn snapshot(&self, event: &str) -> Option<Vec<Entry<A>>> {
        self.slots.get(event).map(|slot| slot.entries().to_vec())
    }

    pub(crate) fn has(&self, event: &str) -> bool {
        self.slots.contains_key(event)
    }

    pub(crate) fn count(&self, event: &str) -> usize {
        self.slots.get(event).map_or(0, Slot::len)
    }

    /// The user-supplied callbacks for `event`, in registration order.
    pub(crate) fn callbacks(&self, event: &str) -> Vec<Callback<A>> {
        self.slots.get(event).map_or_else(Vec::new, |slot| {
            slot.entries()
                .iter()
                .map(|entry| Rc::clone(&entry.callback))
                .collect()
        })
    }

    /// Registered event names, in registration order.
    pub(crate) fn names(&self) -> Vec<String> {
        self.slots.keys().cloned().collect()
    }
}
