//! Controller layer: error/status modeling and dispatch of UI actions into the roster core.

pub mod events;
pub mod orchestration;
