//! # doorhandle-core
//!
//! Shared types for the door-handle RGB-D dataset.
//!
//! This crate provides:
//! - [`Error`] / [`Result`] - the single error type used across the workspace
//! - [`Raster`] - decoded pixel data with its `[H, W, C]` shape
//! - [`Sample`], [`BoundingBox`], [`ClassLabel`] - what indexed access returns
//! - [`Frame`] - the image/depth/boxes triple a transform works on

pub mod error;
pub mod raster;
pub mod sample;

pub use error::{Error, Result};
pub use raster::Raster;
pub use sample::{BoundingBox, ClassLabel, Frame, Sample};
