//! Benchmark support crate for toposynth.
//!
//! Maps a target node count onto representative parameters for every
//! topology family so the Criterion benches can sweep sizes uniformly.

pub mod params;
pub mod specs;
