//! Per-stage processing: the grid slicer, border-band background estimator,
//! background masker, and transparent-content trimmer, plus `pipeline` which
//! chains the last three for a single cell.
pub mod background;
pub mod grid;
pub mod mask;
pub mod pipeline;
pub mod trim;
