//! # The emitter: public API and the dispatch algorithm.
//!
//! [`Emitter`] owns one registry behind a `RefCell` so the whole API takes
//! `&self` and chains. Everything is synchronous and single-threaded; the
//! type is `!Send`/`!Sync` by construction (`Rc` callbacks, `RefCell`
//! registry) and [`emit`](Emitter::emit) returns only after every selected
//! handler has returned.
//!
//! ## Dispatch
//! ```text
//! emit(event, args)
//!   │
//!   ├─ no handlers ────────────────────────────► return (no-op)
//!   ├─ single bare normal handler ─► invoke ──► return (fast path)
//!   │
//!   ├─ snapshot entries (one registry borrow, released before any call)
//!   │
//!   ├─ before phase:  Stop ──► abort emission entirely
//!   ├─ normal phase:  Stop ──► skip rest of normal + all of after
//!   │                 (after entries are collected during this walk;
//!   │                  once entries deregister just before they run)
//!   └─ after phase:   Stop ──► skip remaining after handlers
//! ```
//!
//! ## Reentrancy
//! No registry borrow is held across a handler invocation, so a handler may
//! call any method on its own emitter. Dispatch walks the snapshot taken at
//! the start of the emission: registration and removal performed by a handler
//! take effect from the *next* emission, never mid-traversal. Reentrant
//! `emit` is permitted (a once handler is deregistered before it runs, so it
//! cannot re-fire even through recursion).

use std::cell::RefCell;
use std::fmt;

use crate::config::EmitterConfig;
use crate::error::EmitterError;
use crate::handlers::Callback;
use crate::registry::{Entry, Phase, Registry};

/// Synchronous phased event emitter.
///
/// Maps string event names to ordered handler lists and dispatches emissions
/// across three phases (before / normal / after) with stop-propagation
/// semantics. `A` is the argument payload forwarded to every handler by
/// reference; use `Emitter<()>` for argument-less events.
///
/// ### Properties
/// - **Chaining**: every mutator takes `&self` and returns `&Self`.
/// - **Fail-silent**: emitting with no subscribers, removing an absent
///   handler, and duplicate bare registration are quiet no-ops.
/// - **Identity-keyed**: removal compares callbacks with `Rc::ptr_eq`.
///
/// ### Example
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use triphase::{callback, Emitter};
///
/// let emitter: Emitter<i32> = Emitter::new();
/// let sum = Rc::new(Cell::new(0));
///
/// let add = {
///     let sum = Rc::clone(&sum);
///     callback(move |n: &i32| sum.set(sum.get() + n))
/// };
/// let gate = callback(|n: &i32| *n >= 0); // false stops propagation
///
/// emitter.before("sample", &gate).on("sample", &add);
/// emitter.emit("sample", &2).emit("sample", &-7).emit("sample", &3);
/// assert_eq!(sum.get(), 5);
/// ```
pub struct Emitter<A: 'static = ()> {
    registry: RefCell<Registry<A>>,
    config: EmitterConfig,
}

impl<A: 'static> Default for Emitter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: 'static> Emitter<A> {
    /// Creates an empty emitter with default configuration.
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an empty emitter with the given configuration.
    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            registry: RefCell::new(Registry::with_capacity(config.initial_events)),
            config,
        }
    }

    /// The configuration this emitter was built with.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    // ---- Registration ----

    /// Registers `handler` for the normal phase of `event`.
    ///
    /// Idempotent per callback identity: registering the same `Rc` twice via
    /// `on` keeps a single entry. This never deduplicates against `before`,
    /// `after`, or `once` registrations of the same callback.
    pub fn on(&self, event: &str, handler: &Callback<A>) -> &Self {
        let _ = self.try_on(event, handler);
        self
    }

    /// Registers `handler` for the before phase of `event`.
    ///
    /// Before handlers run ahead of every normal handler; a `Stop` from one
    /// aborts the emission entirely.
    pub fn before(&self, event: &str, handler: &Callback<A>) -> &Self {
        let _ = self.try_before(event, handler);
        self
    }

    /// Registers `handler` for the after phase of `event`.
    ///
    /// After handlers run once the normal phase completes without a `Stop`.
    pub fn after(&self, event: &str, handler: &Callback<A>) -> &Self {
        let _ = self.try_after(event, handler);
        self
    }

    /// Registers `handler` to run at most once for `event`.
    ///
    /// The registration is removed immediately before the handler's first
    /// invocation, so it cannot re-fire even if the handler reentrantly
    /// emits the same event. Firing consumes only the once entry itself: a
    /// separate `on`/`before`/`after` registration of the same callback
    /// survives. Until it fires it is removable through
    /// [`off`](Emitter::off) with the same callback.
    pub fn once(&self, event: &str, handler: &Callback<A>) -> &Self {
        let _ = self.try_once(event, handler);
        self
    }

    /// Like [`on`](Emitter::on), but surfaces
    /// [`EmitterError::HandlerLimit`] instead of silently dropping the
    /// registration when the configured per-event cap is reached.
    pub fn try_on(&self, event: &str, handler: &Callback<A>) -> Result<&Self, EmitterError> {
        self.register(event, Entry::normal(handler))
    }

    /// Limit-surfacing variant of [`before`](Emitter::before).
    pub fn try_before(&self, event: &str, handler: &Callback<A>) -> Result<&Self, EmitterError> {
        self.register(event, Entry::before(handler))
    }

    /// Limit-surfacing variant of [`after`](Emitter::after).
    pub fn try_after(&self, event: &str, handler: &Callback<A>) -> Result<&Self, EmitterError> {
        self.register(event, Entry::after(handler))
    }

    /// Limit-surfacing variant of [`once`](Emitter::once).
    pub fn try_once(&self, event: &str, handler: &Callback<A>) -> Result<&Self, EmitterError> {
        self.register(event, Entry::once(handler))
    }

    fn register(&self, event: &str, entry: Entry<A>) -> Result<&Self, EmitterError> {
        self.registry
            .borrow_mut()
            .insert(event, entry, self.config.handler_limit())?;
        Ok(self)
    }

    // ---- Removal ----

    /// Removes every registration of `handler` for `event`, across phases
    /// and including a pending `once`. Identity comparison only; removing an
    /// absent handler is a no-op.
    pub fn off(&self, event: &str, handler: &Callback<A>) -> &Self {
        self.registry.borrow_mut().remove_callback(event, handler);
        self
    }

    /// Removes the entire handler list for `event`.
    pub fn off_event(&self, event: &str) -> &Self {
        self.registry.borrow_mut().remove_event(event);
        self
    }

    /// Removes every registration of `handler` from every event.
    pub fn off_handler(&self, handler: &Callback<A>) -> &Self {
        self.registry.borrow_mut().remove_callback_all(handler);
        self
    }

    /// Removes every handler for every event.
    pub fn clear(&self) -> &Self {
        self.registry.borrow_mut().clear();
        self
    }

    // ---- Dispatch ----

    /// Synchronously invokes the handlers registered for `event`.
    ///
    /// `args` is forwarded by reference to every invoked handler. Emitting
    /// an event with no subscribers is a no-op. Handler results are never
    /// surfaced; the only observable outcome is the handlers' side effects.
    /// See the module docs for phase ordering and stop-propagation rules.
    pub fn emit(&self, event: &str, args: &A) -> &Self {
        let entries = {
            let registry = self.registry.borrow();
            match registry.snapshot(event) {
                Some(entries) => entries,
                None => return self,
            }
        };

        // Collapsed single-handler form: no phase processing needed. The
        // return value is ignored; there is nothing left to stop.
        if entries.len() == 1 && entries[0].phase == Phase::Normal {
            let entry = &entries[0];
            if entry.once {
                self.registry.borrow_mut().remove_once(event, &entry.callback);
            }
            let _ = (entry.callback)(args);
            return self;
        }

        for entry in entries.iter().filter(|e| e.phase == Phase::Before) {
            if (entry.callback)(args).is_stop() {
                return self;
            }
        }

        // Normal phase; after entries are collected in the same walk so
        // their relative order is the registration order.
        let mut after = Vec::new();
        for entry in &entries {
            match entry.phase {
                Phase::Before => {}
                Phase::After => after.push(entry),
                Phase::Normal => {
                    if entry.once {
                        self.registry.borrow_mut().remove_once(event, &entry.callback);
                    }
                    if (entry.callback)(args).is_stop() {
                        return self;
                    }
                }
            }
        }

        for entry in after {
            if (entry.callback)(args).is_stop() {
                break;
            }
        }
        self
    }

    // ---- Introspection ----

    /// Whether `event` currently has at least one registered handler.
    pub fn has_event(&self, event: &str) -> bool {
        self.registry.borrow().has(event)
    }

    /// Alias for [`has_event`](Emitter::has_event).
    pub fn has_listeners(&self, event: &str) -> bool {
        self.has_event(event)
    }

    /// The callbacks registered for `event`, in registration order.
    ///
    /// Always a vector, regardless of internal storage shape; empty when the
    /// event has no handlers. The returned `Rc`s are the user-supplied
    /// callbacks and remain valid removal keys.
    pub fn listeners(&self, event: &str) -> Vec<Callback<A>> {
        self.registry.borrow().callbacks(event)
    }

    /// Number of handlers currently registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.registry.borrow().count(event)
    }

    /// Names of all events with at least one handler, in registration order.
    pub fn event_names(&self) -> Vec<String> {
        self.registry.borrow().names()
    }
}

impl<A: 'static> fmt::Debug for Emitter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("events", &self.event_names())
            .field("config", &self.config)
            .finish()
    }
}
