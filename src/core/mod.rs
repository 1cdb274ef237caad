// LandSearch - core/mod.rs
//
// Core business logic layer: the filter-paginate-export pipeline.
// Dependencies: util, serde, csv, regex.
// Must NOT depend on: ui, platform, app, or any file/network I/O.

pub mod export;
pub mod filter;
pub mod input;
pub mod model;
pub mod paginate;
