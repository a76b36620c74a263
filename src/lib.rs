//! # Introduction
//!
//! algotrace runs a sorting or searching algorithm over a small integer array
//! and records a step after every comparison, swap, partition or search
//! window change.  The recorded steps are then replayed forward and backward,
//! on a timer or by hand, through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Request → Validation → StepEmitter → StepSequence → PlaybackController → TUI
//! ```
//!
//! 1. [`algorithms`]: request validation, the instrumented algorithms and
//!    their catalog.  [`algorithms::trace`] is the shortest way in.
//! 2. [`snapshot`]: the [`snapshot::Step`] record, its highlight rules and the
//!    sealed [`snapshot::StepSequence`] that every recording and every loaded
//!    replay is checked into.
//! 3. [`playback`]: the state machine that walks a sequence, with an
//!    injectable clock.
//! 4. [`logging`]: `tracing` subscriber setup for the binary.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Sorting: bubble (with early exit), merge, quick (Lomuto partition).
//! Searching: linear, binary.

pub mod algorithms;
pub mod logging;
pub mod playback;
pub mod snapshot;
pub mod ui;
