//=========================================================================
// Instant Sequence
//=========================================================================
//
// Zero-length sequence for views without a transition. It completes on
// the first tick, so awaiting it still yields one scheduling cycle.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::{Completion, CompletionCallback, Sequence};

//=== InstantSequence =====================================================

#[derive(Default)]
pub struct InstantSequence {
    completion: Completion,
}

impl InstantSequence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sequence for InstantSequence {
    fn is_alive(&self) -> bool {
        self.completion.is_running()
    }

    fn stop(&mut self) {
        self.completion.stop();
    }

    fn complete(&mut self) {
        self.completion.finish();
    }

    fn on_complete(&mut self, callback: CompletionCallback) {
        self.completion.register(callback);
    }

    fn tick(&mut self, _dt: Duration) {
        self.completion.finish();
    }
}

//=== Tests ===============================================================
