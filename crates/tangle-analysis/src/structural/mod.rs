//! Structural analysis systems.
//!
//! The graph is built once; the four detectors read it independently.

pub mod coupling;
pub mod cycles;
pub mod exports;
mod globs;
pub mod graph;
pub mod layers;
