//! # Emitter capability for host types.
//!
//! [`Emits`] grants emitter methods to any type that owns an [`Emitter`]:
//! implement [`Emits::emitter`] and the rest of the surface comes for free,
//! chaining on the host itself. This replaces the mixin pattern of copying
//! emitter methods onto arbitrary objects: composition plus delegation,
//! checked at compile time.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use triphase::{callback, Emits, Emitter};
//!
//! struct Door {
//!     events: Emitter<()>,
//! }
//!
//! impl Emits for Door {
//!     fn emitter(&self) -> &Emitter<()> {
//!         &self.events
//!     }
//! }
//!
//! let door = Door { events: Emitter::new() };
//! let opened = Rc::new(Cell::new(false));
//! let mark = {
//!     let opened = Rc::clone(&opened);
//!     callback(move |_: &()| opened.set(true))
//! };
//!
//! door.on("open", &mark).emit("open", &());
//! assert!(opened.get());
//! ```

use crate::emitter::core::Emitter;
use crate::handlers::Callback;

/// Capability trait: emitter operations for a type owning an [`Emitter`].
///
/// All provided methods delegate to [`Emits::emitter`] and return `&Self`
/// for chaining on the host. Semantics are exactly those of the
/// corresponding [`Emitter`] methods.
pub trait Emits<A: 'static = ()> {
    /// The emitter this type delegates to.
    fn emitter(&self) -> &Emitter<A>;

    /// See [`Emitter::on`].
    fn on(&self, event: &str, handler: &Callback<A>) -> &Self
    where
        Self: Sized,
    {
        self.emitter().on(event, handler);
        self
    }

    /// See [`Emitter::before`].
    fn before(&self, event: &str, handler: &Callback<A>) -> &Self
    where
        Self: Sized,
    {
        self.emitter().before(event, handler);
        self
    }

    /// See [`Emitter::after`].
    fn after(&self, event: &str, handler: &Callback<A>) -> &Self
    where
        Self: Sized,
    {
        self.emitter().after(event, handler);
        self
    }

    /// See [`Emitter::once`].
    fn once(&self, event: &str, handler: &Callback<A>) -> &Self
    where
        Self: Sized,
    {
        self.emitter().once(event, handler);
        self
    }

    /// See [`Emitter::off`].
    fn off(&self, event: &str, handler: &Callback<A>) -> &Self
    where
        Self: Sized,
    {
        self.emitter().off(event, handler);
        self
    }

    /// See [`Emitter::off_event`].
    fn off_event(&self, event: &str) -> &Self
    where
        Self: Sized,
    {
        self.emitter().off_event(event);
        self
    }

    /// See [`Emitter::off_handler`].
    fn off_handler(&self, handler: &Callback<A>) -> &Self
    where
        Self: Sized,
    {
        self.emitter().off_handler(handler);
        self
    }

    /// See [`Emitter::clear`].
    fn clear(&self) -> &Self
    where
        Self: Sized,
    {
        self.emitter().clear();
        self
    }

    /// See [`Emitter::emit`].
    fn emit(&self, event: &str, args: &A) -> &Self
    where
        Self: Sized,
    {
        self.emitter().emit(event, args);
        self
    }

    /// See [`Emitter::has_event`].
    fn has_event(&self, event: &str) -> bool {
        self.emitter().has_event(event)
    }

    /// See [`Emitter::listeners`].
    fn listeners(&self, event: &str) -> Vec<Callback<A>> {
        self.emitter().listeners(event)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::handlers::callback;

    struct Valve {
        events: Emitter<u32>,
    }

    impl Emits<u32> for Valve {
        fn emitter(&self) -> &Emitter<u32> {
            &self.events
        }
    }

    #[test]
    fn test_host_type_chains_emitter_operations() {
        let valve = Valve {
            events: Emitter::new(),
        };
        let readings: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));

        let record = {
            let readings = Rc::clone(&readings);
            callback(move |psi: &u32| readings.borrow_mut().push(*psi))
        };
        let gate = callback(|psi: &u32| *psi < 100);

        valve
            .before("pressure", &gate)
            .on("pressure", &record)
            .emit("pressure", &40)
            .emit("pressure", &140)
            .emit("pressure", &60);

        assert_eq!(*readings.borrow(), vec![40, 60]);
        assert!(valve.has_event("pressure"));
        assert_eq!(valve.listeners("pressure").len(), 2);

        valve.off("pressure", &record).off_event("pressure");
        assert!(!valve.has_event("pressure"));
    }
}
