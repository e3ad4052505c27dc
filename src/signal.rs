use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::trace;

/// A level-triggered halt flag polled by the engine's innermost loops.
///
/// The flag is the sole shared state between the hot loop and its controllers. It is backed by an
/// [`AtomicBool`] so that a `check()` compiled into a tight loop is re-loaded every iteration: a
/// plain field would let the optimizer and the hardware memory model keep a reader spinning on a
/// stale cached `false` forever.
///
/// `Relaxed` ordering is used throughout. The flag carries no payload to order against, so
/// atomicity alone is enough to guarantee that a `request()` on one thread becomes visible to a
/// polling reader within a bounded, short delay.
#[derive(Debug, Clone)]
pub struct HaltSignal {
  pending: Arc<AtomicBool>,
}

impl HaltSignal {
  /// Create a new signal + controller handle pair. The signal starts clear.
  pub fn new() -> (Self, HaltHandle) {
    Self::from_shared_flag(Arc::new(AtomicBool::new(false)))
  }

  /// Build a signal + handle pair observing an existing shared flag.
  ///
  /// This lets an embedding wire the engine to a flag it already owns, e.g. one set by a Ctrl-C
  /// handler or a supervisor thread.
  pub fn from_shared_flag(pending: Arc<AtomicBool>) -> (Self, HaltHandle) {
    (
      Self {
        pending: pending.clone(),
      },
      HaltHandle { pending },
    )
  }

  /// Poll the flag. Pure relaxed load: no side effects, no blocking, safe at any call rate.
  #[inline]
  pub fn check(&self) -> bool {
    self.pending.load(Ordering::Relaxed)
  }

  /// Request a halt from the loop thread itself.
  ///
  /// Idempotent; the flag stays set until someone calls [`clear`](Self::clear).
  pub fn request(&self) {
    if !self.pending.swap(true, Ordering::Relaxed) {
      trace!("halt requested");
    }
  }

  /// Acknowledge a handled request by resetting the flag. Idempotent.
  ///
  /// The loop calls this once it has taken whatever action the pending request asked for; the
  /// signal is then reusable for the next request.
  pub fn clear(&self) {
    if self.pending.swap(false, Ordering::Relaxed) {
      trace!("halt cleared");
    }
  }
}

/// A controller-side handle used to ask the running engine to pause at its next safepoint.
///
/// Cloneable and cheap to hand to UI, timer, or supervisor threads. Setting the flag never blocks
/// and never allocates, so a handle may be used from contexts as constrained as a signal handler.
#[derive(Debug, Clone)]
pub struct HaltHandle {
  pending: Arc<AtomicBool>,
}

impl HaltHandle {
  /// Request that the engine cooperatively pauses at its next poll.
  ///
  /// Level-triggered and idempotent: requests made before the loop clears the flag collapse into
  /// one pending state.
  pub fn request(&self) {
    if !self.pending.swap(true, Ordering::Relaxed) {
      trace!("halt requested");
    }
  }

  /// Retract a pending request. Idempotent.
  pub fn clear(&self) {
    if self.pending.swap(false, Ordering::Relaxed) {
      trace!("halt cleared");
    }
  }

  /// Whether a request is currently pending.
  #[inline]
  pub fn is_requested(&self) -> bool {
    self.pending.load(Ordering::Relaxed)
  }
}
