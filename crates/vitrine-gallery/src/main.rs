//! The gallery binary.
//!
//! Walks every registered demo screen: activate, print status, deactivate.
//! Set `RUST_LOG` to see per-subsystem tracing output, e.g.
//! `RUST_LOG=vitrine::model=trace cargo run --bin gallery`.

use tracing_subscriber::EnvFilter;

use vitrine_gallery::{standard_registry, ScreenConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = standard_registry();
    let config = ScreenConfig::default();

    println!("Vitrine gallery: {} screens\n", registry.len());

    for name in registry.screen_names() {
        // Every name comes from the registry itself, so build cannot fail
        // here; keep the error path anyway for parity with external callers.
        match registry.build(name, &config) {
            Ok(mut screen) => {
                screen.activate();
                println!("[{name}] {}: {}", screen.title(), screen.status());
                screen.deactivate();
            }
            Err(err) => {
                tracing::error!(target: "vitrine_gallery", %err, "screen failed to build");
            }
        }
    }
}
