//=========================================================================
// Selection Resolver
//=========================================================================
//
// Picks the control a view should select when it gains focus.
//
// Priority:
//   1. current global selection, if it is ours, active and interactable
//   2. the view's remembered selection, if still active
//   3. the configured first selection, if auto-select is enabled
//   4. the first interactable control of the view
//   5. nothing
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{ControlId, SelectionAuthority};

//=== SelectionCandidates =================================================

/// Per-view inputs to [`resolve_selection`].
#[derive(Debug, Clone, Copy)]
pub struct SelectionCandidates<'a> {
    pub controls: &'a [ControlId],
    pub last_selected: Option<ControlId>,
    pub first_selected: Option<ControlId>,
    pub auto_select_first: bool,
}

//=== resolve_selection ===================================================

/// Returns the control to select, or `None` if the view has nothing viable.
pub fn resolve_selection(
    candidates: &SelectionCandidates<'_>,
    authority: &dyn SelectionAuthority,
) -> Option<ControlId> {
    if let Some(current) = authority.selected() {
        if candidates.controls.contains(&current)
            && authority.is_active(current)
            && authority.is_interactable(current)
        {
            return Some(current);
        }
    }

    if let Some(last) = candidates.last_selected {
        if authority.is_active(last) {
            return Some(last);
        }
    }

    if candidates.auto_select_first {
        if let Some(first) = candidates.first_selected {
            if authority.is_active(first) {
                return Some(first);
            }
        }
    }

    candidates
        .controls
        .iter()
        .copied()
        .find(|&c| authority.is_interactable(c))
}

//=== Tests ===============================================================
