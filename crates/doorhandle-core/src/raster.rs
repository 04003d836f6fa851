// Raster - dense pixel array in [H, W, C] interleaved layout
//
// Pixel values are kept exactly as decoded (0–255 for 8-bit sources); any
// normalisation belongs to a transform.

use crate::error::{Error, Result};

/// A decoded image: flat `f32` data plus its `[H, W, C]` shape.
///
/// Transforms may hand back rasters of a different shape, so the shape
/// travels with the data rather than being fixed per dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    data: Vec<f32>,
    shape: Vec<usize>,
}

impl Raster {
    /// Build a raster from flat data and a shape. The element count must match.
    pub fn new(data: Vec<f32>, shape: Vec<usize>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(Error::msg(format!(
                "raster shape {:?} requires {} elements, got {}",
                shape,
                expected,
                data.len()
            )));
        }
        Ok(Self { data, shape })
    }

    /// Interleaved 8-bit pixels of an `height × width × channels` image.
    pub fn from_u8(raw: &[u8], height: usize, width: usize, channels: usize) -> Result<Self> {
        Self::new(
            raw.iter().map(|&v| v as f32).collect(),
            vec![height, width, channels],
        )
    }

    /// An all-zero raster of the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let n = shape.iter().product();
        Self {
            data: vec![0.0; n],
            shape,
        }
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn height(&self) -> usize {
        self.shape.first().copied().unwrap_or(0)
    }

    pub fn width(&self) -> usize {
        self.shape.get(1).copied().unwrap_or(0)
    }

    /// Channel count; a rank-2 raster counts as single-channel.
    pub fn channels(&self) -> usize {
        self.shape.get(2).copied().unwrap_or(1)
    }

    /// Pixel value at `(y, x, c)`, or `None` outside the raster.
    pub fn get(&self, y: usize, x: usize, c: usize) -> Option<f32> {
        let (h, w, ch) = (self.height(), self.width(), self.channels());
        if y >= h || x >= w || c >= ch {
            return None;
        }
        self.data.get((y * w + x) * ch + c).copied()
    }

    /// Convert from [H, W, C] interleaved to [C, H, W] planar.
    ///
    /// Only rank-2 (`[H, W]`, one channel) and rank-3 rasters have a planar form.
    pub fn to_chw(&self) -> Result<(Vec<f32>, [usize; 3])> {
        if !(2..=3).contains(&self.shape.len()) {
            return Err(Error::msg(format!(
                "to_chw needs a rank-2 or rank-3 raster, got shape {:?}",
                self.shape
            )));
        }
        let (h, w, c) = (self.height(), self.width(), self.channels());
        let npix = h * w;
        let mut out = vec![0.0f32; c * npix];
        for i in 0..npix {
            for ch in 0..c {
                out[ch * npix + i] = self.data[i * c + ch];
            }
        }
        Ok((out, [c, h, w]))
    }
}
