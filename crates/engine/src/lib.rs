//! Paced, cancellable delivery of traversal steps.
//!
//! [`StepEngine`] delivers one step sequence to one observer.
//! [`RunController`] keeps at most one such run alive, and [`Visualizer`]
//! ties a controller to the current snapshot of a structure.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod cancel;
pub mod controller;
pub mod engine;
pub mod observer;
pub mod report;
pub mod session;

pub use cancel::{CancelHandle, CancelSignal};
pub use controller::{RunController, RunTicket};
pub use engine::{EngineConfig, StepEngine};
pub use observer::{
    ChannelObserver, FnObserver, HighlightObserver, NullObserver, RecordingObserver, StepObserver,
};
pub use report::{RunId, RunOutcome, RunReport};
pub use session::Visualizer;
