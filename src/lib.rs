//=========================================================================
// Aetheric Views Library Root
//
// This crate defines the public API surface of the Aetheric view system.
//
// Responsibilities:
// - Expose the view system facade (`ViewSystem`, `ViewSystemBuilder`)
// - Expose the collaborator contracts views are built against
//   (`View`, `Sequence`, `SelectionAuthority`)
// - Keep scheduling internals private to the `core::system` module
//
// Typical usage:
// ```no_run
// use aetheric_views::prelude::*;
//
// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// # enum Screen { Pause }
// # impl ViewKey for Screen {}
// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// # enum UiAction { Back }
// # impl Action for UiAction {}
// let mut views = ViewSystemBuilder::<Screen, UiAction>::new()
//     .with_back_action(UiAction::Back)
//     .with_selection(SelectionState::new())
//     .build()?;
// views.register(Screen::Pause, Hud::new(), ViewConfig::new())?;
// views.start();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the view system and its building blocks (stacks,
// broadcasts, sequences, selection). Application code will mostly go
// through the prelude.
//
pub mod core;
pub mod prelude;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the facade so users can `use aetheric_views::ViewSystem;`
// without knowing the internal module structure.
//
pub use crate::core::system::{ViewSystem, ViewSystemBuilder};
