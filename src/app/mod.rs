//! The page: animator state machine and its view.

/// `Idle / Generating / Playing` state machine.
pub mod state;
/// Page snapshot derived from the state.
pub mod view;
