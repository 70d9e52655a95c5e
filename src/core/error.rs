//=========================================================================
// Errors
//=========================================================================
//
// Error types for the few fallible surfaces of the view system.
//
// Lifecycle operations never fail: reentrant calls and unknown keys
// degrade to no-ops or logged warnings. Only construction and
// registration report errors, since a missing collaborator at that point
// means the system must refuse to operate.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::selection::ControlId;

//=== BuildError ==========================================================

/// Raised by [`crate::core::system::ViewSystemBuilder::build`] when a
/// required collaborator was never supplied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("no back-press trigger action was configured")]
    MissingBackAction,

    #[error("no selection authority was configured")]
    MissingSelectionAuthority,
}

//=== ViewError ===========================================================

/// Raised by [`crate::core::system::ViewSystem::register`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError<K: Debug> {
    #[error("view {0:?} is already registered")]
    AlreadyRegistered(K),

    #[error("view {0:?} names {1:?} as first selection but does not own it")]
    UnknownFirstSelection(K, ControlId),
}

//=== StackError ==========================================================

/// Raised by [`crate::core::stack::UniqueStack::peek`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("stack is empty")]
    Empty,
}
