// LandSearch - platform/mod.rs
//
// Platform abstraction layer: config, directories, filesystem access.
// Dependencies: util, core (model types only).

pub mod config;
pub mod fs;
