use halt_signal::HaltSignal;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;

#[test]
fn freshly_constructed_signal_is_clear() {
  let (signal, handle) = HaltSignal::new();
  assert!(!signal.check());
  assert!(!handle.is_requested());
}

#[test]
fn request_is_idempotent() {
  let (signal, handle) = HaltSignal::new();
  handle.request();
  handle.request();
  assert!(signal.check());

  signal.clear();
  assert!(!signal.check());
}

#[test]
fn clear_on_already_clear_signal_leaves_it_clear() {
  let (signal, _handle) = HaltSignal::new();
  signal.clear();
  signal.clear();
  assert!(!signal.check());
}

#[test]
fn request_then_clear_round_trips() {
  let (signal, handle) = HaltSignal::new();

  handle.request();
  assert!(signal.check());

  signal.clear();
  assert!(!signal.check());

  handle.request();
  assert!(signal.check());
}

#[test]
fn loop_thread_can_request_on_its_own_signal() {
  let (signal, handle) = HaltSignal::new();
  signal.request();
  assert!(signal.check());
  assert!(handle.is_requested());
}

#[test]
fn handle_can_retract_a_pending_request() {
  let (signal, handle) = HaltSignal::new();
  handle.request();
  handle.clear();
  assert!(!signal.check());
}

#[test]
fn clones_observe_the_same_flag() {
  let (signal, handle) = HaltSignal::new();
  let signal2 = signal.clone();
  let handle2 = handle.clone();

  handle2.request();
  assert!(signal.check());
  assert!(signal2.check());

  signal2.clear();
  assert!(!signal.check());
  assert!(!handle.is_requested());
}

#[test]
fn from_shared_flag_observes_the_host_flag() {
  let flag = Arc::new(AtomicBool::new(false));
  let (signal, handle) = HaltSignal::from_shared_flag(flag.clone());

  flag.store(true, Ordering::Relaxed);
  assert!(signal.check());

  signal.clear();
  assert!(!flag.load(Ordering::Relaxed));

  handle.request();
  assert!(flag.load(Ordering::Relaxed));
}

#[test]
fn concurrent_requests_collapse_and_one_clear_resets() {
  let (signal, handle) = HaltSignal::new();

  let writers: Vec<_> = (0..2)
    .map(|_| {
      let handle = handle.clone();
      thread::spawn(move || handle.request())
    })
    .collect();
  for writer in writers {
    writer.join().unwrap();
  }
  assert!(signal.check());

  signal.clear();
  assert!(!signal.check());
  assert!(!handle.is_requested());
}
