//! Usecase layer: application workflows + events.

pub mod analyze;
pub mod event;
pub mod load;
pub mod sample;
pub mod stats;
pub mod validate;
