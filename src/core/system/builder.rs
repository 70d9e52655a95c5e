//=========================================================================
// View System Builder
//
// Fluent construction of a `ViewSystem`.
//
// ```text
//     ViewSystemBuilder  ──build()──>  ViewSystem  ──start()──>  [Running]
//         │
//         ├─ with_back_action()   required
//         └─ with_selection()     required
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use super::ViewSystem;
use crate::core::error::BuildError;
use crate::core::input::Action;
use crate::core::selection::{SelectionAuthority, SelectionState};
use crate::core::view::ViewKey;

//=== ViewSystemBuilder ===================================================

/// Builder for configuring and constructing a [`ViewSystem`].
///
/// Both collaborators are required. A view system without a back-press
/// trigger or a selection authority cannot coordinate focus, so `build()`
/// refuses to produce one.
///
/// # Examples
///
/// ```
/// # use aetheric_views::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screen { Main }
/// # impl ViewKey for Screen {}
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum UiAction { Back }
/// # impl Action for UiAction {}
/// let missing = ViewSystemBuilder::<Screen, UiAction>::new()
///     .with_back_action(UiAction::Back)
///     .build();
/// assert_eq!(missing.err(), Some(BuildError::MissingSelectionAuthority));
/// ```
pub struct ViewSystemBuilder<K: ViewKey, A: Action, S: SelectionAuthority = SelectionState> {
    back_action: Option<A>,
    selection: Option<S>,
    _phantom: std::marker::PhantomData<K>,
}

impl<K: ViewKey, A: Action, S: SelectionAuthority> ViewSystemBuilder<K, A, S> {
    /// Creates a builder with no collaborators configured.
    pub fn new() -> Self {
        Self {
            back_action: None,
            selection: None,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sets the action that triggers back-press dispatch in
    /// [`ViewSystem::frame`].
    pub fn with_back_action(mut self, action: A) -> Self {
        self.back_action = Some(action);
        self
    }

    /// Sets the global selection authority consulted on focus changes.
    pub fn with_selection(mut self, selection: S) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Builds the view system.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if a required collaborator is missing.
    pub fn build(self) -> Result<ViewSystem<K, A, S>, BuildError> {
        let Some(back_action) = self.back_action else {
            error!("View system requires a back-press action");
            return Err(BuildError::MissingBackAction);
        };

        let Some(selection) = self.selection else {
            error!("View system requires a selection authority");
            return Err(BuildError::MissingSelectionAuthority);
        };

        info!("View system built (back action: {:?})", back_action);
        Ok(ViewSystem::new(back_action, selection))
    }
}

impl<K: ViewKey, A: Action, S: SelectionAuthority> Default for ViewSystemBuilder<K, A, S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Screen {
        Main,
    }

    impl ViewKey for Screen {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum UiAction {
        Back,
    }

    impl Action for UiAction {}

    #[test]
    fn missing_back_action_is_rejected() {
        let result = ViewSystemBuilder::<Screen, UiAction>::new()
            .with_selection(SelectionState::new())
            .build();

        assert_eq!(result.err(), Some(BuildError::MissingBackAction));
    }

    #[test]
    fn missing_selection_is_rejected() {
        let result = ViewSystemBuilder::<Screen, UiAction>::new()
            .with_back_action(UiAction::Back)
            .build();

        assert_eq!(result.err(), Some(BuildError::MissingSelectionAuthority));
    }

    #[test]
    fn build_with_collaborators() {
        let views = ViewSystemBuilder::<Screen, UiAction>::new()
            .with_back_action(UiAction::Back)
            .with_selection(SelectionState::new())
            .build()
            .expect("both collaborators configured");

        assert_eq!(views.back_action(), UiAction::Back);
        assert_eq!(views.focused(), None);
        assert!(!views.is_registered(Screen::Main));
    }
}
