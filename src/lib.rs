#![doc = r#"
logogrid — cut a grid of logos into individual transparent PNGs.

The source image is partitioned into a fixed `rows x cols` grid. For every cell
the background color is estimated from a 3 px border band, pixels close to that
color (or near-white) are made transparent, and the cell is trimmed to its
visible content plus a transparent margin. Cells are written as `logo-01.png`,
`logo-02.png`, ... in row-major order.

Quick start: extract to a directory
-----------------------------------
```rust,no_run
use std::path::Path;
use logogrid::{extract_grid_to_dir, ExtractParams};

fn main() -> logogrid::Result<()> {
    let params = ExtractParams {
        rows: 4,
        cols: 4,
        tolerance: 28,
        padding: 8,
    };

    let report = extract_grid_to_dir(
        Path::new("public/trusted-logos/source-grid.png"),
        Path::new("public/trusted-logos"),
        &params,
        false, // no logos.json sidecar
    )?;
    println!("wrote {} files ({} empty)", report.files.len(), report.empty);
    Ok(())
}
```

Process in memory
-----------------
```rust
use image::{Rgba, RgbaImage};
use logogrid::{extract_image, ExtractParams};

fn main() -> logogrid::Result<()> {
    let grid = RgbaImage::from_pixel(200, 200, Rgba([255, 255, 255, 255]));
    let logos = extract_image(&grid, &ExtractParams::default())?;
    assert_eq!(logos.len(), 16);
    assert!(logos.iter().all(|logo| logo.is_empty()));
    Ok(())
}
```

Error handling
--------------
All public functions return `logogrid::Result<T>`; match on `logogrid::Error`
to tell a missing source apart from decode or write failures.

```rust,no_run
use std::path::Path;
use logogrid::{extract_grid_to_dir, Error, ExtractParams};

fn main() {
    let params = ExtractParams::default();
    match extract_grid_to_dir(Path::new("grid.png"), Path::new("out"), &params, false) {
        Ok(_) => {}
        Err(Error::MissingSource { path }) => eprintln!("put the grid at {}", path.display()),
        Err(Error::Decode { source, .. }) => eprintln!("not an image: {source}"),
        Err(other) => eprintln!("extraction failed: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — the individual pipeline stages.
- [`types`] — grid, rectangle, color, and logo types.
- [`io`] — grid loader, PNG and manifest writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::ExtractParams;
pub use error::{Error, Result};
pub use types::{BoundingBox, CellRect, ExtractedLogo, GridSpec, Rgb};

// Stages
pub use crate::core::processing::background::estimate_background;
pub use crate::core::processing::grid::{cell_rects, slice_cells};
pub use crate::core::processing::mask::mask_background;
pub use crate::core::processing::trim::trim_transparent;

// I/O
pub use io::load_grid_image;
pub use io::writers::manifest::{Manifest, ManifestEntry};

// High-level API re-exports
pub use api::{
    ExtractReport, extract_grid_to_buffers, extract_grid_to_dir, extract_image, write_logos,
};
