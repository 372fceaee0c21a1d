//! Systems - the algorithms that transform grids

pub mod calendar;
pub mod patterns;
