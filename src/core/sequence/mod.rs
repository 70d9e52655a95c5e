//=========================================================================
// Transition Sequences
//=========================================================================
//
// Contract for cancellable, awaitable transition animations.
//
// The view system never interprets a sequence. It only needs to:
//   - know whether it is still running      (is_alive)
//   - cancel it without a completion signal (stop)
//   - finish it synchronously               (complete)
//   - be told when it finishes              (on_complete)
//
// Sequences that animate over time are advanced by `tick()`, which the
// view system calls once per update for every live sequence it owns.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Module Declarations =================================================

mod fade;
mod instant;

//=== Public API ==========================================================

pub use fade::{Alpha, FadeSequence};
pub use instant::InstantSequence;

/// Callback fired once when a sequence completes.
pub type CompletionCallback = Box<dyn FnOnce()>;

//=== Sequence Trait ======================================================

/// A cancellable transition with a completion signal.
///
/// # Contract
///
/// - `stop()` cancels the sequence. Completion callbacks never fire.
/// - `complete()` jumps to the end and fires completion callbacks
///   synchronously.
/// - Registering a callback on an already completed sequence fires it
///   immediately. Registering on a stopped sequence drops it.
/// - Calling `stop()` or `complete()` on a dead sequence does nothing.
pub trait Sequence {
    /// Returns true while the sequence is running.
    fn is_alive(&self) -> bool;

    /// Cancels the sequence without signalling completion.
    fn stop(&mut self);

    /// Forces the sequence to its end and signals completion.
    fn complete(&mut self);

    /// Registers a callback for natural or forced completion.
    fn on_complete(&mut self, callback: CompletionCallback);

    /// Advances the sequence by `dt`.
    ///
    /// Sequences driven by an external tween engine can ignore this.
    fn tick(&mut self, _dt: Duration) {}
}

//=== SequenceStatus ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceStatus {
    Running,
    Completed,
    Stopped,
}

//=== Completion ==========================================================

/// Bookkeeping shared by sequence implementations: status plus the
/// pending completion callbacks.
pub struct Completion {
    status: SequenceStatus,
    callbacks: Vec<CompletionCallback>,
}

impl Completion {
    pub fn new() -> Self {
        Self {
            status: SequenceStatus::Running,
            callbacks: Vec::new(),
        }
    }

    pub fn status(&self) -> SequenceStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SequenceStatus::Running
    }

    /// Stores a callback, or fires it right away if already completed.
    pub fn register(&mut self, callback: CompletionCallback) {
        match self.status {
            SequenceStatus::Running => self.callbacks.push(callback),
            SequenceStatus::Completed => callback(),
            SequenceStatus::Stopped => {}
        }
    }

    /// Marks completion and fires every stored callback once.
    pub fn finish(&mut self) {
        if !self.is_running() {
            return;
        }
        self.status = SequenceStatus::Completed;
        for callback in self.callbacks.drain(..) {
            callback();
        }
    }

    /// Marks the sequence stopped and drops stored callbacks.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.status = SequenceStatus::Stopped;
        self.callbacks.clear();
    }
}

impl Default for Completion {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> CompletionCallback) {
        let count = Rc::new(Cell::new(0));
        let count_clone = Rc::clone(&count);
        let make = move || {
            let c = Rc::clone(&count_clone);
            Box::new(move || c.set(c.get() + 1)) as CompletionCallback
        };
        (count, make)
    }

    #[test]
    fn finish_fires_callbacks_once() {
        let (count, make) = counter();
        let mut completion = Completion::new();
        completion.register(make());
        completion.register(make());

        completion.finish();
        completion.finish();

        assert_eq!(count.get(), 2);
        assert_eq!(completion.status(), SequenceStatus::Completed);
    }

    #[test]
    fn stop_drops_callbacks() {
        let (count, make) = counter();
        let mut completion = Completion::new();
        completion.register(make());

        completion.stop();
        completion.finish();
        completion.register(make());

        assert_eq!(count.get(), 0);
        assert_eq!(completion.status(), SequenceStatus::Stopped);
    }

    #[test]
    fn register_after_completion_fires_immediately() {
        let (count, make) = counter();
        let mut completion = Completion::new();
        completion.finish();
        completion.register(make());

        assert_eq!(count.get(), 1);
    }
}
