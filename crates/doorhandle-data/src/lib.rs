//! # doorhandle-data
//!
//! Indexed access to the door-handle RGB-D detection dataset.
//!
//! This crate provides:
//! - [`Dataset`] trait: unified interface for indexed, on-demand data
//! - [`DoorHandleDataset`]: images, depth maps, and YOLO labels correlated by file name
//! - [`DatasetLayout`]: the folder and file-name convention, overridable
//! - [`Transform`]: caller-supplied processing of the image/depth/boxes frame
//! - [`labels`]: YOLO label and `obj.names` parsing

pub mod dataset;
pub mod door_handle;
pub mod labels;
pub mod layout;
pub mod transform;

pub use dataset::Dataset;
pub use door_handle::{DoorHandleDataset, DoorHandleDatasetBuilder};
pub use layout::DatasetLayout;
pub use transform::{Compose, Identity, Transform};
