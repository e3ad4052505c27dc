use crate::error::EngineError;
use crate::error::Termination;
use crate::error::TerminationReason;
use crate::signal::HaltHandle;
use crate::signal::HaltSignal;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Construction-time engine context options.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
  /// Optional shared halt flag to observe for cooperative preemption.
  ///
  /// If provided, the context will use this flag for its halt signal so hosts can pause execution
  /// by setting the flag to `true`.
  pub halt_flag: Option<Arc<AtomicBool>>,
}

/// The shared execution context that owns the halt signal.
///
/// Created once at runtime startup and threaded through every evaluation step, so the engine can
/// reach the signal from its innermost loops without a global. Lives for the lifetime of the
/// runtime; the signal is reusable across any number of request/clear cycles.
#[derive(Debug)]
pub struct EngineContext {
  halt: HaltSignal,
  halt_handle: HaltHandle,
  polls: u64,
}

impl EngineContext {
  pub fn new(options: EngineOptions) -> Self {
    let (halt, halt_handle) = match options.halt_flag {
      Some(flag) => HaltSignal::from_shared_flag(flag),
      None => HaltSignal::new(),
    };
    Self {
      halt,
      halt_handle,
      polls: 0,
    }
  }

  /// A setter capability for controllers (UI, timers, supervisors).
  pub fn halt_handle(&self) -> HaltHandle {
    self.halt_handle.clone()
  }

  /// The signal the loop polls. Loops that poll directly rather than through [`poll`](Self::poll)
  /// borrow this once and call [`HaltSignal::check`] each iteration.
  #[inline]
  pub fn halt_signal(&self) -> &HaltSignal {
    &self.halt
  }

  /// Number of safepoint polls taken so far.
  #[inline]
  pub fn polls(&self) -> u64 {
    self.polls
  }

  /// Consume one safepoint poll: checks the halt flag.
  ///
  /// Returns a [`TerminationReason::Halted`] termination if a halt is pending. The flag is not
  /// cleared here; whichever reaction handles the request calls [`HaltSignal::clear`] (or
  /// [`HaltHandle::clear`]) once it has acted, after which polling resumes normally.
  pub fn poll(&mut self) -> Result<(), EngineError> {
    self.polls = self.polls.wrapping_add(1);

    if self.halt.check() {
      return Err(EngineError::Termination(Termination::new(
        TerminationReason::Halted,
        self.polls,
      )));
    }

    Ok(())
  }
}
