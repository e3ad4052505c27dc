use std::fmt::Display;

/// Errors produced by the engine context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
  /// A non-catchable termination condition (host halt request).
  #[error("{0}")]
  Termination(Termination),
}

/// A non-catchable record of why execution terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Termination {
  pub reason: TerminationReason,
  /// How many safepoint polls the context had taken when the termination was observed.
  pub polls: u64,
}

impl Termination {
  pub fn new(reason: TerminationReason, polls: u64) -> Self {
    Self { reason, polls }
  }
}

impl Display for Termination {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{reason}", reason = self.reason)
  }
}

/// The reason execution terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
  /// A controller requested a cooperative halt and the loop observed it at a safepoint.
  Halted,
}

impl Display for TerminationReason {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      TerminationReason::Halted => f.write_str("execution terminated: halt requested"),
    }
  }
}
