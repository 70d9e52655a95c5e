//=========================================================================
// Selection State
//=========================================================================
//
// In-memory `SelectionAuthority`.
//
// Tracks which controls exist, which are active and interactable, and
// which one is selected. Hosts with their own event system implement
// `SelectionAuthority` directly instead.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::warn;

//=== Internal Dependencies ===============================================

use super::{ControlId, InputScheme, InteractionMode, SelectionAuthority};

//=== ControlFlags ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ControlFlags {
    active: bool,
    interactable: bool,
}

//=== SelectionState ======================================================

#[derive(Debug, Default)]
pub struct SelectionState {
    controls: HashMap<ControlId, ControlFlags>,
    selected: Option<ControlId>,
    scheme: InputScheme,
    mode: InteractionMode,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Control Registry -------------------------------------------------

    /// Adds an active, interactable control.
    pub fn add_control(&mut self, control: ControlId) {
        self.controls.insert(
            control,
            ControlFlags {
                active: true,
                interactable: true,
            },
        );
    }

    /// Forgets a control. A selection pointing at it is cleared.
    pub fn remove_control(&mut self, control: ControlId) {
        self.controls.remove(&control);
        if self.selected == Some(control) {
            self.selected = None;
        }
    }

    pub fn set_active(&mut self, control: ControlId, active: bool) {
        match self.controls.get_mut(&control) {
            Some(flags) => flags.active = active,
            None => warn!("Cannot change activity of unknown control {:?}", control),
        }
    }

    //--- Scheme -----------------------------------------------------------

    pub fn set_scheme(&mut self, scheme: InputScheme) {
        self.scheme = scheme;
    }

    pub fn set_interaction_mode(&mut self, mode: InteractionMode) {
        self.mode = mode;
    }
}

impl SelectionAuthority for SelectionState {
    fn selected(&self) -> Option<ControlId> {
        self.selected
    }

    fn set_selected(&mut self, control: Option<ControlId>) {
        self.selected = control;
    }

    fn is_active(&self, control: ControlId) -> bool {
        self.controls.get(&control).is_some_and(|f| f.active)
    }

    fn is_interactable(&self, control: ControlId) -> bool {
        self.controls
            .get(&control)
            .is_some_and(|f| f.active && f.interactable)
    }

    fn set_interactable(&mut self, control: ControlId, interactable: bool) -> bool {
        match self.controls.get_mut(&control) {
            Some(flags) => {
                flags.interactable = interactable;
                true
            }
            None => false,
        }
    }

    fn scheme(&self) -> InputScheme {
        self.scheme
    }

    fn interaction_mode(&self) -> InteractionMode {
        self.mode
    }
}

//=== Tests ===============================================================
