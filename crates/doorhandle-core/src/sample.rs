// Sample records returned by indexed access, and the frame a transform sees.

use crate::raster::Raster;

/// One YOLO-style box: class id plus centre/size in normalised coordinates.
///
/// The 0–1 range is a labelling convention and is not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub class_id: usize,
    pub cx: f32,
    pub cy: f32,
    pub w: f32,
    pub h: f32,
}

impl BoundingBox {
    pub fn new(class_id: usize, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self {
            class_id,
            cx,
            cy,
            w,
            h,
        }
    }

    /// The `[class_id, cx, cy, w, h]` row as stored in a label file.
    pub fn to_row(&self) -> [f32; 5] {
        [self.class_id as f32, self.cx, self.cy, self.w, self.h]
    }
}

/// Class id paired with its name from the class name table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLabel {
    pub id: usize,
    pub name: String,
}

/// What a transform receives and returns: the three fields it may replace.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub image: Raster,
    pub depth: Raster,
    pub boxes: Vec<BoundingBox>,
}

/// A fully loaded dataset entry.
///
/// `class_labels` is parallel to `labels`: same length, same order, and
/// `class_labels[j].id == labels[j].class_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// RGB raster, `[H, W, 3]` unless a transform reshaped it.
    pub image: Raster,
    /// Single-channel depth raster, `[H, W, 1]` unless a transform reshaped it.
    pub depth: Raster,
    pub labels: Vec<BoundingBox>,
    pub class_labels: Vec<ClassLabel>,
}

impl Sample {
    /// Labels as `[class_id, cx, cy, w, h]` float rows.
    pub fn label_rows(&self) -> Vec<[f32; 5]> {
        self.labels.iter().map(BoundingBox::to_row).collect()
    }

    pub fn num_boxes(&self) -> usize {
        self.labels.len()
    }
}
