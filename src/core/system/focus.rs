//=========================================================================
// Focus
//=========================================================================
//
// Focus gain/loss for the top of the view stack, and selection recovery.
//
// Gain:  on_gain_focus → subscribe to selection signals → request select
// Loss:  unsubscribe → remember selection → clear selection → on_lose_focus
//
// Signal handlers only send `FocusRequest`s. Requests are processed in the
// late phase of `update()`, and a request whose view no longer holds
// focus is dropped.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::ViewSystem;
use crate::core::broadcast::HandlerId;
use crate::core::input::Action;
use crate::core::selection::{resolve_selection, ControlId, SelectionAuthority, SelectionCandidates};
use crate::core::view::ViewKey;

//=== FocusRequest ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FocusRequest<K: ViewKey> {
    /// Force a selection onto one of the view's controls.
    Select(K),
    /// Remember and clear the current selection.
    Deselect(K),
    /// The global selection moved to `ControlId`.
    Cache(K, ControlId),
}

//=== FocusSubscriptions ==================================================

/// Handler ids held while a view has focus.
#[derive(Debug, Clone, Copy)]
pub(super) struct FocusSubscriptions {
    navigation: HandlerId,
    gamepad: HandlerId,
    desktop: HandlerId,
    selection: HandlerId,
}

//=== Focus Handling ======================================================

impl<K: ViewKey, A: Action, S: SelectionAuthority> ViewSystem<K, A, S> {
    //--- Gain / Loss ------------------------------------------------------

    /// Gives `key` focus. Does nothing if it already has it.
    pub(super) fn gain_focus(&mut self, key: K) {
        let Some(entry) = self.views.get_mut(&key) else {
            return;
        };
        if entry.focus.is_some() {
            return;
        }

        debug!("View {:?} gained focus", key);
        entry.view.on_gain_focus();

        let select = |request: FocusRequest<K>| {
            let requests = self.focus_tx.clone();
            move |_: &()| {
                let _ = requests.send(request);
            }
        };
        let navigation = self.signals.navigation_input_received.add(select(FocusRequest::Select(key)));
        let gamepad = self.signals.became_gamepad_scheme.add(select(FocusRequest::Select(key)));
        let desktop = self.signals.became_desktop_scheme.add(select(FocusRequest::Deselect(key)));

        let requests = self.focus_tx.clone();
        let selection = self.signals.selection_changed.add(move |&control: &ControlId| {
            let _ = requests.send(FocusRequest::Cache(key, control));
        });

        entry.focus = Some(FocusSubscriptions {
            navigation,
            gamepad,
            desktop,
            selection,
        });

        if self.selection.wants_selection() {
            let _ = self.focus_tx.send(FocusRequest::Select(key));
        }
    }

    /// Takes focus away from `key`, remembering its selection.
    pub(super) fn lose_focus(&mut self, key: K) {
        if !self.unsubscribe_focus(key) {
            return;
        }

        debug!("View {:?} lost focus", key);
        self.remember_selection(key);
        self.selection.set_selected(None);

        if let Some(entry) = self.views.get_mut(&key) {
            entry.view.on_lose_focus();
        }
    }

    /// Detaches the view's selection-signal handlers. Returns false if it
    /// held none.
    pub(super) fn unsubscribe_focus(&mut self, key: K) -> bool {
        let Some(subscriptions) = self.views.get_mut(&key).and_then(|e| e.focus.take()) else {
            return false;
        };

        self.signals.navigation_input_received.remove(subscriptions.navigation);
        self.signals.became_gamepad_scheme.remove(subscriptions.gamepad);
        self.signals.became_desktop_scheme.remove(subscriptions.desktop);
        self.signals.selection_changed.remove(subscriptions.selection);
        true
    }

    //--- Requests ---------------------------------------------------------

    pub(super) fn process_focus_requests(&mut self) {
        while let Ok(request) = self.focus_rx.try_recv() {
            match request {
                FocusRequest::Select(key) => {
                    if self.focused() == Some(key) {
                        self.force_select(key);
                    }
                }
                FocusRequest::Deselect(key) => {
                    if self.focused() == Some(key) {
                        self.remember_selection(key);
                        self.selection.set_selected(None);
                    }
                }
                FocusRequest::Cache(key, control) => {
                    if let Some(entry) = self.views.get_mut(&key) {
                        if entry.config.controls.contains(&control) {
                            entry.last_selected = Some(control);
                        }
                    }
                }
            }
        }
    }

    fn force_select(&mut self, key: K) {
        let Some(entry) = self.views.get(&key) else {
            return;
        };

        let candidates = SelectionCandidates {
            controls: &entry.config.controls,
            last_selected: entry.last_selected,
            first_selected: entry.config.first_selected,
            auto_select_first: entry.config.auto_select_first,
        };
        let control = resolve_selection(&candidates, &self.selection);

        debug!("View {:?} selects {:?}", key, control);
        self.selection.set_selected(control);
    }

    /// Stores the current selection as the view's last selection when the
    /// view owns it.
    fn remember_selection(&mut self, key: K) {
        let Some(current) = self.selection.selected() else {
            return;
        };
        if let Some(entry) = self.views.get_mut(&key) {
            if entry.config.controls.contains(&current) {
                entry.last_selected = Some(current);
            }
        }
    }
}
