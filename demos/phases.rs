//! # Phased Dispatch Example
//!
//! Shows the three dispatch phases and stop propagation:
//! - a before handler vetoes oversized payloads,
//! - normal handlers process the payload in registration order,
//! - an after handler observes completed emissions only.
//!
//! ## Run
//! ```bash
//! cargo run --example phases
//! ```

use triphase::{callback, Emitter};

fn main() {
    let emitter: Emitter<u32> = Emitter::new();

    // Before phase: returning false aborts the emission entirely.
    emitter.before(
        "upload",
        &callback(|bytes: &u32| {
            let ok = *bytes <= 1024;
            if !ok {
                println!(" ├─► [gate]    rejected {bytes} bytes");
            }
            ok
        }),
    );

    emitter
        .on(
            "upload",
            &callback(|bytes: &u32| println!(" ├─► [write]   {bytes} bytes")),
        )
        .on(
            "upload",
            &callback(|bytes: &u32| println!(" ├─► [index]   {bytes} bytes")),
        )
        .after(
            "upload",
            &callback(|bytes: &u32| println!(" └─► [notify]  {bytes} bytes stored")),
        );

    println!("emit(upload, 512):");
    emitter.emit("upload", &512);

    println!("emit(upload, 4096):");
    emitter.emit("upload", &4096);

    // One-shot handler: deregisters itself before its first run.
    emitter.once(
        "upload",
        &callback(|_: &u32| println!(" ├─► [banner]  first upload!")),
    );

    println!("emit(upload, 128) twice:");
    emitter.emit("upload", &128).emit("upload", &128);
}
