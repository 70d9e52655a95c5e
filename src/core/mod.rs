//=========================================================================
// Core View Systems
//
// Building blocks of the view system and the system that ties them
// together.
//
// Responsibilities:
// - Views and their lifecycle (`view`, `system`)
// - Focus and back-press coordination (`stack`, `selection`)
// - Transition playback contract (`sequence`)
// - Notification and trigger primitives (`broadcast`, `input`)
//
// Notes:
// Everything here runs on one thread, driven by the host's frame loop.
// Suspension is cooperative: the view system resumes waiting operations
// only from `ViewSystem::update`, never from inside another operation.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod broadcast;
pub mod error;
pub mod input;
pub mod selection;
pub mod sequence;
pub mod stack;
pub mod system;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

//=== Public API ==========================================================

pub use input::Action;
pub use system::{ViewSystem, ViewSystemBuilder};
pub use view::{View, ViewKey, ViewState};
