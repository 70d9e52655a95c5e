//=========================================================================
// Scheduler
//=========================================================================
//
// Cooperative suspension for the lifecycle state machine.
//
// A started sequence gets a `Ticket`. Its completion callback sends the
// ticket over the completion channel. Work that must wait for a sequence
// is stored as an `Awaiter` on that ticket and resumed from `update()`.
//
// Cycle:
//   tick sequences → drain completions → apply commands
//   → focus requests → deferred unlocks
//
// Stopped sequences never signal. Awaiters owned by the stopped view are
// discarded. Awaiters owned by other views are released by re-sending
// the ticket, so they retry against the new situation.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::debug;

//=== Internal Dependencies ===============================================

use super::ViewSystem;
use crate::core::input::Action;
use crate::core::selection::SelectionAuthority;
use crate::core::sequence::Sequence;
use crate::core::view::{ViewCommand, ViewKey};

//=== Ticket ==============================================================

/// Identity of one started transition sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

//=== Running =============================================================

/// A sequence held in a view's show or hide slot.
pub(super) struct Running {
    pub(super) ticket: Ticket,
    pub(super) sequence: Box<dyn Sequence>,
    /// Driven by open/close rather than show/hide.
    pub(super) lifecycle: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Slot {
    Show,
    Hide,
}

//=== Awaiter =============================================================

/// Continuation to run once a ticket completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Resume {
    Opened { cycle: u64 },
    Closed { cycle: u64 },
    Shown,
    Hidden,
    /// Waiting for the view underneath to settle before opening on top.
    Handoff { cycle: u64, locked: bool },
}

#[derive(Debug, Clone, Copy)]
pub(super) struct Awaiter<K: ViewKey> {
    pub(super) ticket: Ticket,
    pub(super) owner: K,
    pub(super) resume: Resume,
}

//=== Scheduling ==========================================================

impl<K: ViewKey, A: Action, S: SelectionAuthority> ViewSystem<K, A, S> {
    //--- Frame ------------------------------------------------------------

    /// Runs one scheduling cycle: advances sequences, resumes suspended
    /// operations and applies queued commands, then the late phase (focus
    /// requests and deferred back-press unlocks).
    pub fn update(&mut self, dt: Duration) {
        self.tick_sequences(dt);
        self.drain_completions();
        self.apply_commands();
        self.process_focus_requests();
        self.consumers.apply_deferred_unlocks();
    }

    /// Dispatches a back press for every occurrence of the back action in
    /// `actions`, then runs [`Self::update`].
    pub fn frame(&mut self, dt: Duration, actions: &[A]) {
        for &action in actions {
            if action == self.back_action {
                self.back_pressed();
            }
        }
        self.update(dt);
    }

    /// Returns true while the sequence behind `ticket` is still held by
    /// its view.
    pub fn is_in_flight(&self, ticket: Ticket) -> bool {
        self.views.values().any(|e| {
            e.show.as_ref().is_some_and(|r| r.ticket == ticket)
                || e.hide.as_ref().is_some_and(|r| r.ticket == ticket)
        })
    }

    //--- Sequences --------------------------------------------------------

    fn tick_sequences(&mut self, dt: Duration) {
        for entry in self.views.values_mut() {
            for running in [entry.show.as_mut(), entry.hide.as_mut()].into_iter().flatten() {
                if running.sequence.is_alive() {
                    running.sequence.tick(dt);
                }
            }
        }
    }

    /// Creates the view's sequence for `slot` and stores it, stopping
    /// whatever either slot held before.
    pub(super) fn start_sequence(&mut self, key: K, slot: Slot, lifecycle: bool) -> Option<Ticket> {
        self.stop_slot(key, Slot::Show);
        self.stop_slot(key, Slot::Hide);

        let ticket = Ticket(self.next_ticket);
        let entry = self.views.get_mut(&key)?;
        self.next_ticket += 1;

        let mut sequence = match slot {
            Slot::Show => entry.view.show_sequence(),
            Slot::Hide => entry.view.hide_sequence(),
        };

        let completions = self.completion_tx.clone();
        sequence.on_complete(Box::new(move || {
            let _ = completions.send(ticket);
        }));

        debug!("View {:?} started {:?} sequence {:?}", key, slot, ticket);
        let running = Some(Running {
            ticket,
            sequence,
            lifecycle,
        });
        match slot {
            Slot::Show => entry.show = running,
            Slot::Hide => entry.hide = running,
        }
        Some(ticket)
    }

    /// Forces the sequence in `slot` to its end. Its awaiters resume at
    /// the next drain.
    pub(super) fn complete_slot(&mut self, key: K, slot: Slot) -> bool {
        let Some(entry) = self.views.get_mut(&key) else {
            return false;
        };
        let taken = match slot {
            Slot::Show => entry.show.take(),
            Slot::Hide => entry.hide.take(),
        };

        match taken {
            Some(mut running) => {
                running.sequence.complete();
                true
            }
            None => false,
        }
    }

    /// Completes whichever slots hold an open/close sequence.
    pub(super) fn complete_lifecycle_slots(&mut self, key: K) {
        let Some(entry) = self.views.get(&key) else {
            return;
        };
        let show = entry.show.as_ref().is_some_and(|r| r.lifecycle);
        let hide = entry.hide.as_ref().is_some_and(|r| r.lifecycle);

        if show {
            self.complete_slot(key, Slot::Show);
        }
        if hide {
            self.complete_slot(key, Slot::Hide);
        }
    }

    /// Cancels the sequence in `slot` without a completion signal.
    pub(super) fn stop_slot(&mut self, key: K, slot: Slot) {
        let Some(entry) = self.views.get_mut(&key) else {
            return;
        };
        let taken = match slot {
            Slot::Show => entry.show.take(),
            Slot::Hide => entry.hide.take(),
        };
        let Some(mut running) = taken else {
            return;
        };

        let was_alive = running.sequence.is_alive();
        running.sequence.stop();
        debug!("View {:?} stopped {:?} sequence {:?}", key, slot, running.ticket);

        self.discard_awaiters(|a| a.ticket == running.ticket && a.owner == key);
        if was_alive {
            self.release_foreign(running.ticket);
        }
    }

    /// Stops both slots and drops every continuation owned by the view.
    pub(super) fn kill_running(&mut self, key: K) {
        self.stop_slot(key, Slot::Show);
        self.stop_slot(key, Slot::Hide);
        self.abandon_awaiters(key);
    }

    //--- Awaiters ---------------------------------------------------------

    pub(super) fn await_ticket(&mut self, ticket: Ticket, owner: K, resume: Resume) {
        self.awaiters.push(Awaiter {
            ticket,
            owner,
            resume,
        });
    }

    /// Drops every awaiter owned by `key`.
    pub(super) fn abandon_awaiters(&mut self, key: K) {
        self.discard_awaiters(|a| a.owner == key);
    }

    fn discard_awaiters<F>(&mut self, matches: F)
    where
        F: Fn(&Awaiter<K>) -> bool,
    {
        let (discarded, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.awaiters).into_iter().partition(|a| matches(a));
        self.awaiters = kept;

        for awaiter in discarded {
            if let Resume::Handoff { locked: true, .. } = awaiter.resume {
                self.consumers.unlock();
            }
        }
    }

    /// Wakes awaiters of other views waiting on a ticket that will never
    /// signal on its own.
    fn release_foreign(&mut self, ticket: Ticket) {
        if self.awaiters.iter().any(|a| a.ticket == ticket) {
            debug!("Releasing awaiters of stopped sequence {:?}", ticket);
            let _ = self.completion_tx.send(ticket);
        }
    }

    fn drain_completions(&mut self) {
        while let Ok(ticket) = self.completion_rx.try_recv() {
            self.clear_slot(ticket);

            let (ready, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.awaiters)
                .into_iter()
                .partition(|a| a.ticket == ticket);
            self.awaiters = waiting;

            for awaiter in ready {
                self.resume(awaiter);
            }
        }
    }

    fn clear_slot(&mut self, ticket: Ticket) {
        for entry in self.views.values_mut() {
            if entry.show.as_ref().is_some_and(|r| r.ticket == ticket) {
                entry.show = None;
            }
            if entry.hide.as_ref().is_some_and(|r| r.ticket == ticket) {
                entry.hide = None;
            }
        }
    }

    fn resume(&mut self, awaiter: Awaiter<K>) {
        let key = awaiter.owner;
        match awaiter.resume {
            Resume::Opened { cycle } => self.finish_open(key, cycle),
            Resume::Closed { cycle } => self.finish_close(key, cycle),
            Resume::Shown => {
                if let Some(entry) = self.views.get_mut(&key) {
                    entry.is_visible = true;
                }
            }
            Resume::Hidden => {
                if let Some(entry) = self.views.get_mut(&key) {
                    entry.is_visible = false;
                }
            }
            Resume::Handoff { cycle, locked } => self.continue_handoff(key, cycle, locked),
        }
    }

    //--- Commands ---------------------------------------------------------

    /// Applies commands queued by view hooks or sent by event handlers.
    pub(super) fn apply_commands(&mut self) {
        loop {
            let mut batch = self.commands.take();
            batch.extend(self.command_rx.try_iter());
            if batch.is_empty() {
                break;
            }

            for command in batch {
                debug!("Applying {:?}", command);
                match command {
                    ViewCommand::Open(key) => self.open(key),
                    ViewCommand::OpenImmediate(key) => self.open_immediate(key),
                    ViewCommand::Close(key) => self.close(key),
                    ViewCommand::CloseImmediate(key) => self.close_immediate(key),
                    ViewCommand::Show(key) => {
                        self.show(key);
                    }
                    ViewCommand::Hide(key) => {
                        self.hide(key);
                    }
                }
            }
        }
    }
}
