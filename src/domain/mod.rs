//! Domain types: what the engine works on, independent of how it steps

pub mod calendar;
pub mod config;
pub mod overrides;
pub mod patterns;
pub mod raster;
