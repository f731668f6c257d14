//! Bridge between the single-threaded UI and the async gateway worker.

pub mod commands;
pub mod runtime;
