use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::GridSpec;

pub const DEFAULT_ROWS: u32 = 4;
pub const DEFAULT_COLS: u32 = 4;
pub const DEFAULT_TOLERANCE: u32 = 28;
pub const DEFAULT_PADDING: u32 = 8;

/// Extraction parameters suitable for config files and manifests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractParams {
    pub rows: u32,
    pub cols: u32,
    /// Per-channel distance from the cell background still treated as background
    pub tolerance: u32,
    /// Transparent margin kept around trimmed content
    pub padding: u32,
}

impl ExtractParams {
    pub fn grid(&self) -> GridSpec {
        GridSpec::new(self.rows, self.cols)
    }

    /// Reject grids that cannot partition a `width` x `height` image into non-empty cells.
    pub fn validate(&self, width: u32, height: u32) -> Result<()> {
        if self.rows == 0 {
            return Err(Error::invalid("rows", self.rows));
        }
        if self.cols == 0 {
            return Err(Error::invalid("cols", self.cols));
        }
        if self.rows > height {
            return Err(Error::invalid(
                "rows",
                format!("{} (image height is {})", self.rows, height),
            ));
        }
        if self.cols > width {
            return Err(Error::invalid(
                "cols",
                format!("{} (image width is {})", self.cols, width),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tolerance: DEFAULT_TOLERANCE,
            padding: DEFAULT_PADDING,
        }
    }
}
