//! # Capability Trait Example
//!
//! Shows how a host type gains emitter methods through [`Emits`]: embed an
//! `Emitter`, implement one accessor, and chain the rest on the host itself.
//!
//! ## Run
//! ```bash
//! cargo run --example capability
//! ```

use triphase::{callback, Callback, Emits, Emitter};

struct Door {
    name: &'static str,
    events: Emitter<()>,
}

impl Door {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            events: Emitter::new(),
        }
    }

    fn open(&self) {
        println!("{}: opening", self.name);
        self.emit("open", &());
    }
}

impl Emits for Door {
    fn emitter(&self) -> &Emitter<()> {
        &self.events
    }
}

fn main() {
    let door = Door::new("front");

    let creak: Callback<()> = callback(|_: &()| println!(" └─► creak"));
    let alarm: Callback<()> = callback(|_: &()| println!(" └─► ALARM"));

    door.on("open", &creak).on("open", &alarm);
    door.open();

    // Identity-keyed removal works through the host too.
    door.off("open", &alarm);
    door.open();
}
