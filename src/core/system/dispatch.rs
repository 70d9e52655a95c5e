//=========================================================================
// Back-Press Dispatch
//=========================================================================
//
// Routes a back-press trigger through the consumer stack.
//
// Consumers only queue follow-up work on `ViewCommands`. The queue is
// applied once dispatch has finished, so a consumer closing itself never
// mutates the stack being walked.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::ViewSystem;
use crate::core::input::Action;
use crate::core::selection::SelectionAuthority;
use crate::core::stack::ConsumerId;
use crate::core::view::ViewKey;

//=== Dispatch ============================================================

impl<K: ViewKey, A: Action, S: SelectionAuthority> ViewSystem<K, A, S> {
    /// Offers one back press to the consumer stack, top down.
    ///
    /// Returns the consumer that took it. Returns `None` if nobody did or
    /// the stack is locked.
    pub fn back_pressed(&mut self) -> Option<ConsumerId<K>> {
        let views = &mut self.views;
        let external = &mut self.external;
        let commands = &mut self.commands;

        let consumed = self.consumers.dispatch(|id| match id {
            ConsumerId::View(key) => match views.get_mut(&key) {
                Some(entry) => entry.view.consume_back_pressed(commands),
                None => {
                    warn!("Back press consumer {:?} is not a registered view", key);
                    false
                }
            },
            ConsumerId::External(id) => match external.get_mut(&id) {
                Some(consumer) => consumer.consume_back_pressed(commands),
                None => {
                    warn!("Back press consumer {} is no longer registered", id);
                    false
                }
            },
        });

        self.apply_commands();
        consumed
    }
}
