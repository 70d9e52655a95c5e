//=========================================================================
// View Commands
//=========================================================================
//
// Queue of lifecycle requests issued from inside view hooks.
//
// Hooks run while the view system is mid-operation, so they cannot call
// back into it directly. They queue commands here instead, and the view
// system applies them once the current operation has finished.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::ViewKey;

//=== ViewCommand =========================================================

/// A deferred lifecycle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand<K: ViewKey> {
    Open(K),
    OpenImmediate(K),
    Close(K),
    CloseImmediate(K),
    Show(K),
    Hide(K),
}

//=== ViewCommands ========================================================

/// Queue of [`ViewCommand`]s, applied in FIFO order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewCommands<K: ViewKey> {
    queue: Vec<ViewCommand<K>>,
}

impl<K: ViewKey> ViewCommands<K> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a command.
    pub fn push(&mut self, command: ViewCommand<K>) {
        self.queue.push(command);
    }

    pub fn open(&mut self, key: K) {
        self.push(ViewCommand::Open(key));
    }

    pub fn close(&mut self, key: K) {
        self.push(ViewCommand::Close(key));
    }

    /// Returns an iterator over the queued commands.
    pub fn iter(&self) -> impl Iterator<Item = &ViewCommand<K>> {
        self.queue.iter()
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued commands.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all commands from the queue, leaving it empty.
    pub fn take(&mut self) -> Vec<ViewCommand<K>> {
        std::mem::take(&mut self.queue)
    }
}

impl<K: ViewKey> Default for ViewCommands<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
