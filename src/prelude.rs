//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_views::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// View system
pub use crate::core::system::{Ticket, ViewSystem, ViewSystemBuilder};

// Views
pub use crate::core::view::{
    CloseSegment, Hud, OpenSegment, View, ViewCommand, ViewCommands, ViewConfig, ViewEvents, ViewKey,
    ViewState,
};

// Stacks and back press
pub use crate::core::stack::{BackPressedConsumer, ConsumerId, ConsumerStack, UniqueStack, ViewStack};

// Transition sequences
pub use crate::core::sequence::{Alpha, FadeSequence, InstantSequence, Sequence};

// Selection
pub use crate::core::selection::{
    ControlId, InputScheme, InteractionMode, SelectionAuthority, SelectionSignals, SelectionState,
};

// Events, input and errors
pub use crate::core::broadcast::{Broadcast, HandlerId};
pub use crate::core::error::{BuildError, StackError, ViewError};
pub use crate::core::input::Action;
