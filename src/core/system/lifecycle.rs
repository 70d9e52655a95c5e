//=========================================================================
// View Lifecycle
//=========================================================================
//
// Open / close / show / hide and the stack bookkeeping around them.
//
// State edges:
//   None | Closed → Opening → Open → Closing → Closed
//
// Open:
//   Opening → [handoff: wait for the top to hide, back press locked]
//           → push on view stack → show sequence → Open
// Close:
//   Closing → hide sequence → pop from view stack → Closed
//
// Same-direction calls mid-transition force the running sequence to
// complete. Opposite-direction calls are recorded and run once the
// current transition has finalized.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::scheduler::{Resume, Slot, Ticket};
use super::{Intent, ViewSystem};
use crate::core::input::Action;
use crate::core::selection::SelectionAuthority;
use crate::core::stack::ConsumerId;
use crate::core::view::{CloseSegment, OpenSegment, ViewKey, ViewState};

//=== Lifecycle Operations ================================================

impl<K: ViewKey, A: Action, S: SelectionAuthority> ViewSystem<K, A, S> {
    //--- Open -------------------------------------------------------------

    /// Opens a view with its show transition.
    ///
    /// Returns once the synchronous part is done. The view reaches
    /// [`ViewState::Open`] in a later [`Self::update`], when its show
    /// sequence completes.
    pub fn open(&mut self, key: K) {
        let Some(entry) = self.entry_or_warn(key) else {
            return;
        };
        entry.is_or_will_open = true;

        let state = entry.state;
        match state {
            ViewState::Open => return,
            ViewState::Opening => {
                entry.pending = None;
                self.complete_slot(key, Slot::Show);
                return;
            }
            ViewState::Closing => {
                debug!("View {:?} will open once closed", key);
                entry.pending = Some(Intent::Open);
                return;
            }
            ViewState::None | ViewState::Closed => {}
        }

        self.kill_running(key);
        self.set_state(key, ViewState::Opening);

        let Some(entry) = self.views.get_mut(&key) else {
            return;
        };
        entry.view.set_active(true);
        let cycle = entry.cycle;
        let standalone = entry.config.standalone;

        if standalone {
            self.start_open_sequence(key, cycle);
            return;
        }

        if entry.config.gain_back_pressed == OpenSegment::BeforeOpenSequence {
            self.consumers.push_unique(ConsumerId::View(key));
        }
        self.continue_handoff(key, cycle, false);
    }

    /// Opens a view synchronously. Returns with the view `Open` and
    /// visible, with nothing left in flight.
    ///
    /// Skips the hide handoff with the view underneath, so both may be
    /// briefly visible together.
    pub fn open_immediate(&mut self, key: K) {
        let Some(entry) = self.entry_or_warn(key) else {
            return;
        };
        entry.is_or_will_open = true;
        entry.pending = None;

        let state = entry.state;
        match state {
            ViewState::Open => return,
            ViewState::Closing => self.complete_close_now(key),
            _ => {}
        }
        self.complete_open_now(key);
    }

    //--- Close ------------------------------------------------------------

    /// Closes a view with its hide transition.
    ///
    /// The view reaches [`ViewState::Closed`] in a later [`Self::update`].
    pub fn close(&mut self, key: K) {
        let Some(entry) = self.entry_or_warn(key) else {
            return;
        };
        entry.is_or_will_open = false;

        let state = entry.state;
        match state {
            ViewState::None | ViewState::Closed => {
                entry.pending = None;
                return;
            }
            ViewState::Closing => {
                entry.pending = None;
                self.complete_slot(key, Slot::Hide);
                return;
            }
            ViewState::Opening => {
                debug!("View {:?} will close once opened", key);
                entry.pending = Some(Intent::Close);
                return;
            }
            ViewState::Open => {}
        }

        self.kill_running(key);
        self.set_state(key, ViewState::Closing);

        let Some(entry) = self.views.get(&key) else {
            return;
        };
        let cycle = entry.cycle;
        if !entry.config.standalone && entry.config.lose_back_pressed == CloseSegment::BeforeCloseSequence {
            self.consumers.remove(ConsumerId::View(key));
        }

        if let Some(ticket) = self.start_sequence(key, Slot::Hide, true) {
            self.await_ticket(ticket, key, Resume::Closed { cycle });
        }
    }

    /// Closes a view synchronously. Returns with the view `Closed` and
    /// hidden, with nothing left in flight.
    pub fn close_immediate(&mut self, key: K) {
        let Some(entry) = self.entry_or_warn(key) else {
            return;
        };
        entry.is_or_will_open = false;
        entry.pending = None;

        let state = entry.state;
        match state {
            ViewState::None | ViewState::Closed => return,
            ViewState::Opening => self.complete_open_now(key),
            _ => {}
        }
        self.complete_close_now(key);
    }

    //--- Show / Hide ------------------------------------------------------

    /// Plays the show transition without touching state or stacks.
    ///
    /// A running open/close transition is completed first. Returns the
    /// ticket of the new sequence.
    pub fn show(&mut self, key: K) -> Option<Ticket> {
        self.entry_or_warn(key)?;
        self.complete_lifecycle_slots(key);

        let ticket = self.start_sequence(key, Slot::Show, false)?;
        self.await_ticket(ticket, key, Resume::Shown);
        Some(ticket)
    }

    /// Plays the hide transition without touching state or stacks.
    pub fn hide(&mut self, key: K) -> Option<Ticket> {
        self.entry_or_warn(key)?;
        self.complete_lifecycle_slots(key);

        let ticket = self.start_sequence(key, Slot::Hide, false)?;
        self.await_ticket(ticket, key, Resume::Hidden);
        Some(ticket)
    }

    //--- Handoff ----------------------------------------------------------

    /// Waits until the top of the view stack is hidden, then pushes `key`
    /// and starts its show sequence.
    ///
    /// Re-entered from the scheduler each time the awaited sequence ends.
    /// A top that is still transitioning is waited on rather than
    /// interrupted.
    pub(super) fn continue_handoff(&mut self, key: K, cycle: u64, locked: bool) {
        let Some(entry) = self.views.get(&key) else {
            if locked {
                self.consumers.unlock();
            }
            return;
        };
        if entry.state != ViewState::Opening || entry.cycle != cycle {
            if locked {
                self.consumers.unlock();
            }
            return;
        }

        if entry.config.hide_underlying_ui {
            if let Some(wait) = self.handoff_wait(key) {
                if !locked {
                    self.consumers.lock();
                }
                debug!("View {:?} waits for {:?} before opening", key, wait);
                self.await_ticket(wait, key, Resume::Handoff { cycle, locked: true });
                return;
            }
        }

        if locked {
            self.consumers.unlock();
        }
        self.add_to_stack(key);
        self.start_open_sequence(key, cycle);
    }

    /// Ticket the opening view must wait on, hiding the top if needed.
    fn handoff_wait(&mut self, key: K) -> Option<Ticket> {
        let top = self.view_stack.try_peek().filter(|&top| top != key)?;
        let top_entry = self.views.get(&top)?;

        if let Some(running) = top_entry.show.as_ref().or(top_entry.hide.as_ref()) {
            return Some(running.ticket);
        }
        if top_entry.is_visible {
            return self.hide(top);
        }
        None
    }

    fn start_open_sequence(&mut self, key: K, cycle: u64) {
        if let Some(ticket) = self.start_sequence(key, Slot::Show, true) {
            self.await_ticket(ticket, key, Resume::Opened { cycle });
        }
    }

    //--- Finalization -----------------------------------------------------

    pub(super) fn finish_open(&mut self, key: K, cycle: u64) {
        let Some(entry) = self.views.get_mut(&key) else {
            return;
        };
        entry.is_visible = true;

        if !entry.config.standalone && entry.config.gain_back_pressed == OpenSegment::AfterOpenSequence {
            self.consumers.push_unique(ConsumerId::View(key));
        }

        if entry.state != ViewState::Opening || entry.cycle != cycle {
            debug!("View {:?} left Opening while suspended, open not finalized", key);
            return;
        }

        self.set_state(key, ViewState::Open);
        self.run_pending(key);
    }

    pub(super) fn finish_close(&mut self, key: K, cycle: u64) {
        let Some(entry) = self.views.get_mut(&key) else {
            return;
        };
        if entry.state != ViewState::Closing || entry.cycle != cycle {
            debug!("View {:?} left Closing while suspended, close not finalized", key);
            return;
        }

        let standalone = entry.config.standalone;
        if !standalone && entry.config.lose_back_pressed == CloseSegment::AfterCloseSequence {
            self.consumers.remove(ConsumerId::View(key));
        }
        entry.view.set_active(false);

        if !standalone {
            self.remove_from_stack(key);
        }
        if let Some(entry) = self.views.get_mut(&key) {
            entry.is_visible = false;
        }

        self.set_state(key, ViewState::Closed);
        self.run_pending(key);
    }

    fn run_pending(&mut self, key: K) {
        let Some(intent) = self.views.get_mut(&key).and_then(|e| e.pending.take()) else {
            return;
        };

        debug!("View {:?} runs deferred {:?}", key, intent);
        match intent {
            Intent::Open => self.open(key),
            Intent::Close => self.close(key),
        }
    }

    //--- Immediate Transitions --------------------------------------------

    fn complete_open_now(&mut self, key: K) {
        if self.state(key) != Some(ViewState::Opening) {
            self.set_state(key, ViewState::Opening);
        }
        self.abandon_awaiters(key);
        self.stop_slot(key, Slot::Hide);
        self.force_sequence(key, Slot::Show);

        let Some(entry) = self.views.get_mut(&key) else {
            return;
        };
        entry.view.set_active(true);
        entry.is_visible = true;

        if !entry.config.standalone {
            self.consumers.push_unique(ConsumerId::View(key));
            self.add_to_stack(key);
        }
        self.set_state(key, ViewState::Open);
    }

    fn complete_close_now(&mut self, key: K) {
        if self.state(key) != Some(ViewState::Closing) {
            self.set_state(key, ViewState::Closing);
        }
        self.abandon_awaiters(key);
        self.stop_slot(key, Slot::Show);
        self.force_sequence(key, Slot::Hide);

        let Some(entry) = self.views.get_mut(&key) else {
            return;
        };
        entry.view.set_active(false);

        if !entry.config.standalone {
            self.consumers.remove(ConsumerId::View(key));
            self.remove_from_stack(key);
        }
        if let Some(entry) = self.views.get_mut(&key) {
            entry.is_visible = false;
        }
        self.set_state(key, ViewState::Closed);
    }

    /// Completes the running sequence in `slot`, or plays a fresh one to
    /// its end.
    fn force_sequence(&mut self, key: K, slot: Slot) {
        if self.complete_slot(key, slot) {
            return;
        }
        let Some(entry) = self.views.get_mut(&key) else {
            return;
        };
        let mut sequence = match slot {
            Slot::Show => entry.view.show_sequence(),
            Slot::Hide => entry.view.hide_sequence(),
        };
        sequence.complete();
    }

    //--- State ------------------------------------------------------------

    pub(super) fn set_state(&mut self, key: K, state: ViewState) {
        let Some(entry) = self.views.get_mut(&key) else {
            return;
        };
        if entry.state == state {
            return;
        }

        debug!("View {:?}: {:?} -> {:?}", key, entry.state, state);
        if state.is_transitioning() {
            entry.cycle += 1;
        }
        entry.state = state;
        entry.events.raise(state);
    }

    //--- View Stack -------------------------------------------------------

    /// Pushes `key` as the focused view. The previous top loses focus and,
    /// if `key` hides underlying UI, is hidden.
    pub(super) fn add_to_stack(&mut self, key: K) {
        let hides_underlying = self
            .views
            .get(&key)
            .is_some_and(|e| e.config.hide_underlying_ui);

        if let Some(top) = self.view_stack.try_peek().filter(|&top| top != key) {
            self.lose_focus(top);

            let needs_hiding = self
                .views
                .get(&top)
                .is_some_and(|e| e.show.is_some() || (e.is_visible && e.hide.is_none()));
            if hides_underlying && needs_hiding {
                self.hide(top);
            }
        }

        self.view_stack.push_unique(key);
        debug!("View {:?} pushed on view stack ({} views)", key, self.view_stack.len());
        self.gain_focus(key);
    }

    /// Removes `key` from the view stack. If it was the top, the next view
    /// gains focus and is shown again when `key` had hidden it.
    pub(super) fn remove_from_stack(&mut self, key: K) {
        let was_top = self.view_stack.try_peek() == Some(key);
        if !self.view_stack.remove(key) {
            return;
        }
        debug!("View {:?} removed from view stack ({} views)", key, self.view_stack.len());
        self.lose_focus(key);

        if !was_top {
            return;
        }
        let Some(next) = self.view_stack.try_peek() else {
            return;
        };
        self.gain_focus(next);

        let hid_next = self
            .views
            .get(&key)
            .is_some_and(|e| e.config.hide_underlying_ui);
        if hid_next {
            self.reveal(next);
        }
    }

    /// Shows an open view again after the view covering it went away.
    pub(super) fn reveal(&mut self, key: K) {
        let needs_showing = self.views.get(&key).is_some_and(|e| {
            e.state == ViewState::Open && (e.hide.is_some() || (!e.is_visible && e.show.is_none()))
        });
        if needs_showing {
            self.show(key);
        }
    }
}
