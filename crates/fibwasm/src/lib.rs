//! fibwasm library: application logic for the native harness.

pub mod app;
pub mod completion;
pub mod config;
pub mod errors;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod ui;
