//=========================================================================
// Stacks
//=========================================================================
//
// Ordered, duplicate-free stacks used to coordinate views.
//
// Architecture:
//   UniqueStack<T>
//     ├─ ViewStack<K>       (focus: top = focused view)
//     └─ ConsumerStack<C>   (back-press consumers + lock gate)
//
// Both stacks share push-unique semantics: pushing an element that is
// already present moves it to the top, since a re-push means "this is now
// the most recent".
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::error::StackError;

//=== Module Declarations =================================================

mod consumer_stack;

//=== Public API ==========================================================

pub use consumer_stack::{BackPressedConsumer, ConsumerId, ConsumerStack};

/// Stack of view keys. The top is the focused view.
pub type ViewStack<K> = UniqueStack<K>;

//=== UniqueStack =========================================================

/// Ordered stack in which each element appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueStack<T> {
    items: Vec<T>,
}

impl<T: Copy + Eq + Debug> UniqueStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    //--- Mutation ---------------------------------------------------------

    /// Pushes `item` on top. An item already present is moved to the top
    /// instead of being duplicated.
    pub fn push_unique(&mut self, item: T) {
        if let Some(pos) = self.position(item) {
            if pos + 1 == self.items.len() {
                return;
            }
            debug!("Moving {:?} from position {} to top", item, pos);
            self.items.remove(pos);
        }
        self.items.push(item);
    }

    /// Removes `item` if present. Returns true if something was removed.
    pub fn remove(&mut self, item: T) -> bool {
        match self.position(item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the top item, or [`StackError::Empty`].
    pub fn peek(&self) -> Result<T, StackError> {
        self.items.last().copied().ok_or(StackError::Empty)
    }

    /// Returns the top item if there is one. Never fails.
    pub fn try_peek(&self) -> Option<T> {
        self.items.last().copied()
    }

    /// Returns true if `item` is on the stack.
    pub fn contains(&self, item: T) -> bool {
        self.items.contains(&item)
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the stack holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates from the bottom (oldest) to the top (newest).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.items.iter()
    }

    /// Copies the items from the top down.
    pub fn top_down(&self) -> Vec<T> {
        self.items.iter().rev().copied().collect()
    }

    //--- Internal Helpers -------------------------------------------------

    fn position(&self, item: T) -> Option<usize> {
        self.items.iter().position(|&i| i == item)
    }
}

impl<T: Copy + Eq + Debug> Default for UniqueStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
