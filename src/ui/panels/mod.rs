// LandSearch - ui/panels/mod.rs

pub mod about;
pub mod filters;
pub mod notifications;
pub mod pagination;
pub mod results;
pub mod stats;
pub mod viewer;
