//=========================================================================
// View System Types
//=========================================================================
//
// The `View` trait and the data describing each registered view.
//
// Architecture:
//   ViewSystem
//     ├─ views: HashMap<K, ViewEntry>   (Box<dyn View<K>> + lifecycle data)
//     ├─ view_stack: ViewStack<K>       (focus)
//     └─ consumers: ConsumerStack       (back press)
//
// Views implement only the behaviour the framework cannot know: which
// transition to play, whether to intercept back press, and what to do
// on focus changes. All state bookkeeping lives in the view system.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use crate::core::sequence::Sequence;

//=== Module Declarations =================================================

mod commands;
mod config;
mod events;
mod hud;

//=== Public API ==========================================================

pub use commands::{ViewCommand, ViewCommands};
pub use config::{CloseSegment, OpenSegment, ViewConfig};
pub use events::ViewEvents;
pub use hud::{Hud, DEFAULT_FADE};

//=== ViewKey Trait =======================================================

/// Marker trait for view identifiers.
///
/// View keys uniquely identify views in the ViewSystem's HashMap and on
/// both stacks. Typically implemented by game-specific enums.
pub trait ViewKey: Clone + Copy + Eq + Hash + Debug + 'static {}

//=== ViewState ===========================================================

/// Lifecycle state of a view.
///
/// Valid edges: `Closed → Opening → Open → Closing → Closed`. `None` is
/// the pre-initialization state and is left on the first open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    #[default]
    None,
    Opening,
    Open,
    Closing,
    Closed,
}

impl ViewState {
    /// Returns true for `Opening` and `Closing`.
    pub fn is_transitioning(self) -> bool {
        matches!(self, ViewState::Opening | ViewState::Closing)
    }
}

//=== View Trait ==========================================================

/// Behaviour hooks of a view.
///
/// # Minimal Implementation
///
/// Only the two sequence factories are required:
///
/// ```rust
/// # use aetheric_views::prelude::*;
/// struct Splash;
///
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screen { Splash }
/// # impl ViewKey for Screen {}
/// impl View<Screen> for Splash {
///     fn show_sequence(&mut self) -> Box<dyn Sequence> {
///         Box::new(InstantSequence::new())
///     }
///
///     fn hide_sequence(&mut self) -> Box<dyn Sequence> {
///         Box::new(InstantSequence::new())
///     }
/// }
/// ```
pub trait View<K: ViewKey> {
    /// Creates the transition played when the view appears.
    fn show_sequence(&mut self) -> Box<dyn Sequence>;

    /// Creates the transition played when the view disappears.
    fn hide_sequence(&mut self) -> Box<dyn Sequence>;

    /// Offered a back press while registered on the consumer stack.
    ///
    /// Default implementation does not consume. Override to intercept,
    /// e.g. to close a confirmation dialog.
    fn consume_back_pressed(&mut self, _commands: &mut ViewCommands<K>) -> bool {
        false
    }

    /// Called when the view becomes the top of the view stack.
    fn on_gain_focus(&mut self) {}

    /// Called when the view stops being the top of the view stack.
    fn on_lose_focus(&mut self) {}

    /// Activates or deactivates the view's root object.
    fn set_active(&mut self, _active: bool) {}

    /// Called once at registration with the configured start visibility.
    fn on_awake(&mut self, _start_visible: bool) {}
}

//=== Tests ===============================================================
