//=========================================================================
// Selection
//=========================================================================
//
// Keyboard/gamepad selection collaborators.
//
// Components:
// - `SelectionAuthority`: get/set the globally selected control and query
//   control liveness (implemented by the host's UI event system)
// - `SelectionSignals`: navigation / scheme / selection-changed broadcasts
//   raised by the host and subscribed to by the focused view
// - `SelectionState`: in-memory authority for hosts without their own
// - `resolve_selection`: fallback chain used when a view gains focus
//
//=========================================================================

//=== Module Declarations =================================================

mod resolver;
mod state;

//=== Internal Dependencies ===============================================

use crate::core::broadcast::Broadcast;

//=== Public API ==========================================================

pub use resolver::{resolve_selection, SelectionCandidates};
pub use state::SelectionState;

//=== ControlId ===========================================================

/// Identifies a selectable control owned by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub u32);

//=== InputScheme =========================================================

/// The device family the player is currently using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputScheme {
    #[default]
    Desktop,
    Gamepad,
}

//=== InteractionMode =====================================================

/// How the player last interacted with the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionMode {
    #[default]
    Pointer,
    NavigationInput,
}

//=== SelectionAuthority ==================================================

/// Global owner of "the currently selected control".
pub trait SelectionAuthority {
    /// Returns the currently selected control, if any.
    fn selected(&self) -> Option<ControlId>;

    /// Replaces the current selection. `None` clears it.
    fn set_selected(&mut self, control: Option<ControlId>);

    /// Returns true if the control still exists and is active.
    fn is_active(&self, control: ControlId) -> bool;

    /// Returns true if the control accepts interaction.
    fn is_interactable(&self, control: ControlId) -> bool;

    /// Changes interactability. Returns false if the control is unknown.
    fn set_interactable(&mut self, control: ControlId, interactable: bool) -> bool;

    /// Returns the active input scheme.
    fn scheme(&self) -> InputScheme;

    /// Returns the current interaction mode.
    fn interaction_mode(&self) -> InteractionMode;

    /// Returns true if a focused view should force a selection right away.
    fn wants_selection(&self) -> bool {
        self.scheme() == InputScheme::Gamepad
            || self.interaction_mode() == InteractionMode::NavigationInput
    }
}

//=== SelectionSignals ====================================================

/// Signals raised by the host's input layer.
///
/// The view holding focus subscribes on focus gain and unsubscribes on
/// focus loss.
#[derive(Debug, Default)]
pub struct SelectionSignals {
    pub navigation_input_received: Broadcast,
    pub became_gamepad_scheme: Broadcast,
    pub became_desktop_scheme: Broadcast,
    pub selection_changed: Broadcast<ControlId>,
}

impl SelectionSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of subscribers across all signals.
    pub fn subscriber_count(&self) -> usize {
        self.navigation_input_received.len()
            + self.became_gamepad_scheme.len()
            + self.became_desktop_scheme.len()
            + self.selection_changed.len()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wants_selection_for_gamepad_or_navigation() {
        let mut state = SelectionState::new();
        assert!(!state.wants_selection());

        state.set_scheme(InputScheme::Gamepad);
        assert!(state.wants_selection());

        state.set_scheme(InputScheme::Desktop);
        state.set_interaction_mode(InteractionMode::NavigationInput);
        assert!(state.wants_selection());
    }

    #[test]
    fn signals_count_subscribers() {
        let signals = SelectionSignals::new();
        signals.navigation_input_received.add(|_| {});
        signals.selection_changed.add(|_| {});
        assert_eq!(signals.subscriber_count(), 2);
    }
}
