// LandSearch - app/mod.rs
//
// Application layer: orchestration, state management, background load,
// delayed search, notifications.
// Dependencies: core, platform.
// Must NOT depend on: ui.

pub mod loader;
pub mod notify;
pub mod search;
pub mod state;
