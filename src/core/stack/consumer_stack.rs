//=========================================================================
// Back-Press Consumer Stack
//=========================================================================
//
// Stack of back-press consumers with a reentrant lock gate.
//
// Dispatch:
//   locks > 0 → event dropped
//   otherwise  → top → bottom, stop at first consumer returning true
//
// Unlocking is deferred: `unlock()` only schedules the decrement, which is
// applied by `apply_deferred_unlocks()` in the late phase of the frame.
// A back press arriving in the same frame the lock is released is still
// suppressed.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::UniqueStack;
use crate::core::view::{ViewCommands, ViewKey};

//=== ConsumerId ==========================================================

/// Identity of an entry on the consumer stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsumerId<K: ViewKey> {
    /// A registered view.
    View(K),

    /// A non-view consumer registered with the view system.
    External(u32),
}

//=== BackPressedConsumer =================================================

/// Anything that may intercept a back-press trigger.
///
/// Return `true` to consume the event and stop dispatch. Follow-up work
/// (e.g. closing a dialog) is queued on `commands` and applied right after
/// dispatch finishes.
pub trait BackPressedConsumer<K: ViewKey> {
    fn consume_back_pressed(&mut self, commands: &mut ViewCommands<K>) -> bool;
}

//=== ConsumerStack =======================================================

/// Back-press consumer stack with a deferred-release lock counter.
#[derive(Debug, Clone)]
pub struct ConsumerStack<C> {
    stack: UniqueStack<C>,
    locks: u32,
    pending_unlocks: u32,
}

impl<C: Copy + Eq + Debug> ConsumerStack<C> {
    /// Creates an empty, unlocked stack.
    pub fn new() -> Self {
        Self {
            stack: UniqueStack::new(),
            locks: 0,
            pending_unlocks: 0,
        }
    }

    //--- Membership -------------------------------------------------------

    pub fn push_unique(&mut self, consumer: C) {
        debug!("Consumer {:?} now receives back press", consumer);
        self.stack.push_unique(consumer);
    }

    pub fn remove(&mut self, consumer: C) -> bool {
        let removed = self.stack.remove(consumer);
        if removed {
            debug!("Consumer {:?} no longer receives back press", consumer);
        }
        removed
    }

    pub fn stack(&self) -> &UniqueStack<C> {
        &self.stack
    }

    //--- Lock Gate --------------------------------------------------------

    /// Increments the lock counter. Takes effect immediately.
    pub fn lock(&mut self) {
        self.locks += 1;
        debug!("Back press locked ({} locks)", self.locks);
    }

    /// Schedules a decrement of the lock counter for the end of the frame.
    pub fn unlock(&mut self) {
        self.pending_unlocks += 1;
    }

    /// Applies every unlock scheduled since the last call.
    ///
    /// Called once per frame, after all synchronous work for the frame.
    pub fn apply_deferred_unlocks(&mut self) {
        if self.pending_unlocks == 0 {
            return;
        }

        if self.pending_unlocks > self.locks {
            warn!(
                "Unbalanced back press unlock: {} pending, {} held",
                self.pending_unlocks, self.locks
            );
        }

        self.locks = self.locks.saturating_sub(self.pending_unlocks);
        self.pending_unlocks = 0;
        debug!("Back press unlocks applied ({} locks)", self.locks);
    }

    /// Returns true while dispatch is suppressed.
    pub fn is_locked(&self) -> bool {
        self.locks > 0
    }

    /// Returns the current lock count.
    pub fn locks(&self) -> u32 {
        self.locks
    }

    /// Returns the number of unlocks waiting for the end of the frame.
    pub fn pending_unlocks(&self) -> u32 {
        self.pending_unlocks
    }

    /// Drops all locks, including scheduled unlocks.
    pub fn reset_locks(&mut self) {
        self.locks = 0;
        self.pending_unlocks = 0;
    }

    //--- Dispatch ---------------------------------------------------------

    /// Offers a back press to each consumer from the top down.
    ///
    /// Returns the consumer that took the event, or `None` if the stack is
    /// locked or nobody consumed it.
    pub fn dispatch<F>(&self, mut consume: F) -> Option<C>
    where
        F: FnMut(C) -> bool,
    {
        if self.is_locked() {
            debug!("Back press ignored ({} locks)", self.locks);
            return None;
        }

        for consumer in self.stack.top_down() {
            if consume(consumer) {
                debug!("Back press consumed by {:?}", consumer);
                return Some(consumer);
            }
        }

        None
    }
}

impl<C: Copy + Eq + Debug> Default for ConsumerStack<C> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
