//! Core systems for Vitrine.
//!
//! This crate provides the foundational components shared by the Vitrine
//! widget surface and the sample gallery:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Errors**: The crate-wide error and result types
//! - **Logging**: `tracing` target constants and macros
//!
//! Everything here is synchronous and runs on the single UI-owning thread;
//! there is no event loop, no timers, and no background work.
//!
//! # Signal/Slot Example
//!
//! ```
//! use vitrine_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Result, SignalError, VitrineError};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
