//=========================================================================
// Fade Sequence
//=========================================================================
//
// Linear alpha tween used by the stock HUD view.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::{Completion, CompletionCallback, Sequence};

//=== Alpha ===============================================================

/// Shared opacity value, written by fades and read by the renderer.
#[derive(Debug, Clone)]
pub struct Alpha(Rc<Cell<f32>>);

impl Alpha {
    pub fn new(value: f32) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    pub fn get(&self) -> f32 {
        self.0.get()
    }

    pub fn set(&self, value: f32) {
        self.0.set(value.clamp(0.0, 1.0));
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Self::new(1.0)
    }
}

//=== FadeSequence ========================================================

/// Tweens an [`Alpha`] from its current value to a target over a duration.
///
/// A zero duration still waits for the first tick before completing.
pub struct FadeSequence {
    alpha: Alpha,
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    completion: Completion,
}

impl FadeSequence {
    pub fn new(alpha: Alpha, to: f32, duration: Duration) -> Self {
        let from = alpha.get();
        Self {
            alpha,
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            completion: Completion::new(),
        }
    }

    /// Returns the tween progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return if self.elapsed.is_zero() { 0.0 } else { 1.0 };
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn apply(&self, t: f32) {
        self.alpha.set(self.from + (self.to - self.from) * t);
    }
}

impl Sequence for FadeSequence {
    fn is_alive(&self) -> bool {
        self.completion.is_running()
    }

    fn stop(&mut self) {
        self.completion.stop();
    }

    fn complete(&mut self) {
        if !self.is_alive() {
            return;
        }
        self.apply(1.0);
        self.completion.finish();
    }

    fn on_complete(&mut self, callback: CompletionCallback) {
        self.completion.register(callback);
    }

    fn tick(&mut self, dt: Duration) {
        if !self.is_alive() {
            return;
        }
        self.elapsed += dt.max(Duration::from_nanos(1));
        let t = self.progress();
        self.apply(t);
        if t >= 1.0 {
            self.completion.finish();
        }
    }
}

//=== Tests ===============================================================
