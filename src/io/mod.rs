//! I/O layer: the grid `loader` and `writers` for PNG logos and the
//! JSON manifest sidecar.
pub mod loader;
pub use loader::load_grid_image;

pub mod writers;
