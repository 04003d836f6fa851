//! # doorhandle
//!
//! Loader for the door-handle RGB-D detection dataset.
//!
//! This is the top-level facade crate that re-exports everything you need.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use doorhandle::prelude::*;
//!
//! # fn main() -> doorhandle::Result<()> {
//! let ds = DoorHandleDataset::new("data/door_handles").build()?;
//! for i in 0..ds.len() {
//!     let sample = ds.get(i)?;
//!     for (row, label) in sample.label_rows().iter().zip(&sample.class_labels) {
//!         println!("{} {:?}", label.name, row);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! | Crate | Purpose |
//! |-------|----------|
//! | `doorhandle-core` | Error type, Raster, Sample, BoundingBox, Frame |
//! | `doorhandle-data` | Dataset trait, DoorHandleDataset, labels, Transform |

/// Re-export core types.
pub use doorhandle_core::{
    bail, BoundingBox, ClassLabel, Error, Frame, Raster, Result, Sample,
};

/// Re-export data loading.
pub mod data {
    pub use doorhandle_data::*;
}

/// Convenient imports for typical use.
pub mod prelude {
    pub use doorhandle_core::{BoundingBox, ClassLabel, Error, Frame, Raster, Result, Sample};
    pub use doorhandle_data::{
        Compose, Dataset, DatasetLayout, DoorHandleDataset, Identity, Transform,
    };
}
