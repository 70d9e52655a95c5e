//=========================================================================
// Action Trait
//=========================================================================
//
// Host action vocabulary seen by the view system.
//
// `ViewSystem::frame` receives the actions fired this frame and counts
// the ones equal to the configured back action. Everything else is
// ignored.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker for the host's action enum.
///
/// One variant is handed to the builder as the back action. Each
/// occurrence of it in a frame's action list becomes one back press.
/// `Debug` is used when logging the configured back action.
///
/// # Example
///
/// ```
/// use aetheric_views::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum UiAction { Back, Confirm }
///
/// impl Action for UiAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Back,
        Confirm,
    }

    impl Action for TestAction {}

    #[test]
    fn action_is_hashable() {
        let mut set = HashSet::new();
        set.insert(TestAction::Back);
        set.insert(TestAction::Back);
        set.insert(TestAction::Confirm);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&TestAction::Back));
    }

    #[test]
    fn action_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<TestAction>();
    }
}
