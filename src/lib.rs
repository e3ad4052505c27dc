//! Cooperative halt signalling for interpreter hot loops.
//!
//! This crate provides the single cheapest possible cross-thread "please pause" signal:
//! - [`HaltSignal`] / [`HaltHandle`] — a level-triggered flag the engine polls once per loop
//!   iteration and controllers set from any thread
//! - [`EngineContext`] — the shared execution context that owns the signal and exposes the
//!   per-iteration safepoint ([`EngineContext::poll`])
//! - [`EngineError`] / [`Termination`] — the non-catchable termination surfaced when a halt is
//!   observed
//!
//! # Visibility contract
//!
//! A `request()` made on one thread must become visible to a polling `check()` on another thread
//! within a bounded, small number of the reader's own iterations. The flag is an atomic, never a
//! plain field: a value that looks loop-invariant to a single-thread analysis must still be
//! re-read every iteration, because another thread may mutate it. Relaxed ordering suffices; the
//! flag carries no payload to order against.
//!
//! # What this is not
//!
//! Not a cancellation framework, not a scheduler, and deliberately free of wait/notify or
//! compare-and-swap surface: the only consumer pattern is "poll once per iteration, act if true",
//! and anything blocking would reintroduce exactly the overhead this primitive exists to avoid.
//! Requests are level-triggered — callers must not assume one `request()` maps to exactly one
//! observed `check()`.

mod engine;
mod error;
mod signal;

pub use crate::engine::EngineContext;
pub use crate::engine::EngineOptions;
pub use crate::error::EngineError;
pub use crate::error::Termination;
pub use crate::error::TerminationReason;
pub use crate::signal::HaltHandle;
pub use crate::signal::HaltSignal;
