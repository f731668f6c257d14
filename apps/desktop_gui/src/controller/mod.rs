//! Controller layer: per-view presentation logic binding the form models to
//! user actions, plus the UI event/notification types.

pub mod events;
pub mod orchestration;
pub mod send;
pub mod settings;
