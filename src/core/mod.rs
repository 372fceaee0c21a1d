//! Core storage shared by every pattern and by calendar ingestion.

pub mod grid;
