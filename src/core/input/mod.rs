//=========================================================================
// Input
//=========================================================================
//
// Input-facing types the view system depends on.
//
// The view system does not bind keys. The host maps raw input to its own
// action enum and hands the frame's actions to `ViewSystem::frame`, which
// recognises the configured back-press action.
//
//=========================================================================

//=== Module Declarations =================================================

mod action;

//=== Public API ==========================================================

pub use action::Action;
