//! Core processing building blocks: grid slicing, background estimation,
//! masking, trimming, and the per-cell pipeline. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
