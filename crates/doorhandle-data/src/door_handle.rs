// DoorHandleDataset - RGB-D door-handle detection samples
//
// Correlates three folders by file name:
//
//   images/obj1_color.png  ->  depth/obj1_depth.png
//                          ->  labels/obj1_color.txt
//
// and resolves class ids against obj.names. Construction scans the image
// folder and reads the class table once; every `get` re-reads the three
// files from disk. Nothing is cached and nothing is mutated after build, so
// concurrent reads of different indices need no locking.
//
// USAGE:
//
//   let ds = DoorHandleDataset::new("data/door_handles").build()?;
//   let sample = ds.get(0)?;
//   println!("{} boxes, first is {}", sample.num_boxes(), sample.class_labels[0].name);

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{DynamicImage, ImageReader};
use log::{debug, trace, warn};

use doorhandle_core::{Error, Frame, Raster, Result, Sample};

use crate::dataset::{check_index, Dataset};
use crate::labels::{depth_stem, file_stem, read_class_names, read_labels, resolve_class_labels};
use crate::layout::DatasetLayout;
use crate::transform::Transform;

// DoorHandleDatasetBuilder

/// Builder for [`DoorHandleDataset`].
pub struct DoorHandleDatasetBuilder {
    root: PathBuf,
    layout: DatasetLayout,
    transform: Option<Arc<dyn Transform>>,
}

impl DoorHandleDatasetBuilder {
    /// Create a builder rooted at the given directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        DoorHandleDatasetBuilder {
            root: root.as_ref().to_path_buf(),
            layout: DatasetLayout::default(),
            transform: None,
        }
    }

    /// Override the folder convention.
    pub fn layout(mut self, layout: DatasetLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Apply `transform` to every frame before it is returned.
    pub fn transform<T: Transform + 'static>(mut self, transform: T) -> Self {
        self.transform = Some(Arc::new(transform));
        self
    }

    /// Like [`transform`](Self::transform), for a transform shared elsewhere.
    pub fn shared_transform(mut self, transform: Arc<dyn Transform>) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Scan the image folder, read the class table, and build the dataset.
    pub fn build(self) -> Result<DoorHandleDataset> {
        DoorHandleDataset::scan(self.root, self.layout, self.transform)
    }
}

// DoorHandleDataset

/// Indexed access to an RGB-D door-handle detection dataset.
pub struct DoorHandleDataset {
    root: PathBuf,
    layout: DatasetLayout,
    /// Image file names in lexicographic order.
    image_filenames: Vec<String>,
    /// Class names; index = class id.
    class_names: Vec<String>,
    transform: Option<Arc<dyn Transform>>,
}

impl fmt::Debug for DoorHandleDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoorHandleDataset")
            .field("root", &self.root)
            .field("layout", &self.layout)
            .field("images", &self.image_filenames.len())
            .field("class_names", &self.class_names)
            .field("has_transform", &self.transform.is_some())
            .finish()
    }
}

impl DoorHandleDataset {
    /// Convenience entry-point: `DoorHandleDataset::new(root)` returns a builder.
    pub fn new<P: AsRef<Path>>(root: P) -> DoorHandleDatasetBuilder {
        DoorHandleDatasetBuilder::new(root)
    }

    /// Build with the default layout and no transform.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        DoorHandleDatasetBuilder::new(root).build()
    }

    fn scan(
        root: PathBuf,
        layout: DatasetLayout,
        transform: Option<Arc<dyn Transform>>,
    ) -> Result<Self> {
        let images_dir = layout.images_path(&root);
        let mut image_filenames = Vec::new();
        for entry in fs::read_dir(&images_dir).map_err(|e| Error::io(&images_dir, e))? {
            let entry = entry.map_err(|e| Error::io(&images_dir, e))?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!("skipping non-UTF-8 file name {:?} in {}", raw, images_dir.display());
                    continue;
                }
            };
            if !layout.is_image_name(&name) {
                continue;
            }
            image_filenames.push(name);
        }
        // read_dir order is filesystem-dependent
        image_filenames.sort();

        let class_names = read_class_names(&layout.names_path(&root))?;

        debug!(
            "door handle dataset at {}: {} images, {} classes",
            root.display(),
            image_filenames.len(),
            class_names.len()
        );

        Ok(DoorHandleDataset {
            root,
            layout,
            image_filenames,
            class_names,
            transform,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &DatasetLayout {
        &self.layout
    }

    /// Class names in id order.
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    pub fn num_classes(&self) -> usize {
        self.class_names.len()
    }

    /// Enumerated image file names, in index order.
    pub fn image_filenames(&self) -> &[String] {
        &self.image_filenames
    }

    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }

    /// Path of the RGB image for sample `index`.
    pub fn image_path(&self, index: usize) -> Result<PathBuf> {
        check_index(index, self.image_filenames.len())?;
        Ok(self
            .layout
            .images_path(&self.root)
            .join(&self.image_filenames[index]))
    }

    /// Path of the depth map for sample `index`. There is no fallback name.
    pub fn depth_path(&self, index: usize) -> Result<PathBuf> {
        let stem = self.stem(index)?;
        let depth = depth_stem(stem, &self.layout.color_token, &self.layout.depth_token);
        Ok(self
            .layout
            .depth_path(&self.root)
            .join(format!("{}.{}", depth, self.layout.depth_extension)))
    }

    /// Path of the label file for sample `index`.
    pub fn label_path(&self, index: usize) -> Result<PathBuf> {
        let stem = self.stem(index)?;
        Ok(self
            .layout
            .labels_path(&self.root)
            .join(format!("{}.{}", stem, self.layout.label_extension)))
    }

    fn stem(&self, index: usize) -> Result<&str> {
        check_index(index, self.image_filenames.len())?;
        Ok(file_stem(&self.image_filenames[index]))
    }

    /// Like [`Dataset::get`], but negative indices fail with the same
    /// out-of-range error instead of being unrepresentable.
    pub fn get_signed(&self, index: isize) -> Result<Sample> {
        match usize::try_from(index) {
            Ok(i) => self.load(i),
            Err(_) => Err(Error::IndexOutOfRange {
                index: index as i128,
                len: self.image_filenames.len(),
            }),
        }
    }

    fn load(&self, index: usize) -> Result<Sample> {
        let image_path = self.image_path(index)?;
        let depth_path = self.depth_path(index)?;
        let label_path = self.label_path(index)?;
        trace!(
            "loading sample {}: {} / {} / {}",
            index,
            image_path.display(),
            depth_path.display(),
            label_path.display()
        );

        let image = rgb_raster(&decode(&image_path)?)?;
        let depth = luma_raster(&decode(&depth_path)?)?;

        let boxes = read_labels(&label_path)?;
        let class_labels = resolve_class_labels(&boxes, &self.class_names)?;

        let Some(transform) = &self.transform else {
            return Ok(Sample {
                image,
                depth,
                labels: boxes,
                class_labels,
            });
        };

        let out = transform.apply(Frame {
            image,
            depth,
            boxes,
        })?;
        // The transform may drop or reorder boxes; keep class_labels parallel.
        let class_labels = resolve_class_labels(&out.boxes, &self.class_names)?;
        Ok(Sample {
            image: out.image,
            depth: out.depth,
            labels: out.boxes,
            class_labels,
        })
    }
}

impl Dataset for DoorHandleDataset {
    type Item = Sample;

    fn len(&self) -> usize {
        self.image_filenames.len()
    }

    fn get(&self, index: usize) -> Result<Sample> {
        self.load(index)
    }

    fn name(&self) -> &str {
        "door_handle"
    }
}

/// Open and decode an image, sniffing the format from its contents.
fn decode(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| Error::io(path, e))?;
    reader.decode().map_err(|e| Error::ImageDecode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 3-channel `[H, W, 3]` raster regardless of source encoding.
fn rgb_raster(img: &DynamicImage) -> Result<Raster> {
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    Raster::from_u8(rgb.as_raw(), h as usize, w as usize, 3)
}

/// Single-channel `[H, W, 1]` raster regardless of source encoding.
///
/// Gray sources wider than 8 bits are clipped at 255, not rescaled. Colour
/// sources are weighted with ITU-R 601 luma (299/587/114).
fn luma_raster(img: &DynamicImage) -> Result<Raster> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    let gray: Vec<u8> = match img {
        DynamicImage::ImageLuma8(g) => g.as_raw().clone(),
        DynamicImage::ImageLumaA8(g) => g.pixels().map(|p| p.0[0]).collect(),
        DynamicImage::ImageLuma16(g) => g.as_raw().iter().map(|&v| clip_u8(v)).collect(),
        DynamicImage::ImageLumaA16(g) => g.pixels().map(|p| clip_u8(p.0[0])).collect(),
        other => other.to_rgb8().pixels().map(|p| luma_601(p.0)).collect(),
    };
    Raster::from_u8(&gray, h, w, 1)
}

fn clip_u8(v: u16) -> u8 {
    v.min(255) as u8
}

/// 601 luma in 16.16 fixed point, rounded.
fn luma_601([r, g, b]: [u8; 3]) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn dataset_is_send_sync() {
        assert_send_sync::<DoorHandleDataset>();
    }

    #[test]
    fn missing_root_is_io_error() {
        let err = DoorHandleDataset::open("/nonexistent/door/handles").unwrap_err();
        match err {
            Error::Io { path, .. } => assert!(path.ends_with("images")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rgb_conversion_from_gray() {
        let gray = image::GrayImage::from_raw(2, 1, vec![10, 200]).unwrap();
        let r = rgb_raster(&DynamicImage::ImageLuma8(gray)).unwrap();
        assert_eq!(r.shape(), &[1, 2, 3]);
        assert_eq!(r.data(), &[10.0, 10.0, 10.0, 200.0, 200.0, 200.0]);
    }

    #[test]
    fn luma_conversion_from_rgb() {
        let rgb = image::RgbImage::from_raw(1, 1, vec![255, 255, 255]).unwrap();
        let r = luma_raster(&DynamicImage::ImageRgb8(rgb)).unwrap();
        assert_eq!(r.shape(), &[1, 1, 1]);
        assert_eq!(r.data(), &[255.0]);
    }

    #[test]
    fn luma_uses_601_weights() {
        let rgb = image::RgbImage::from_raw(3, 1, vec![255, 0, 0, 0, 255, 0, 0, 0, 255]).unwrap();
        let r = luma_raster(&DynamicImage::ImageRgb8(rgb)).unwrap();
        assert_eq!(r.data(), &[76.0, 150.0, 29.0]);
    }

    #[test]
    fn luma_clips_wide_gray() {
        let deep =
            image::ImageBuffer::<image::Luma<u16>, Vec<u16>>::from_raw(3, 1, vec![100, 255, 1000])
                .unwrap();
        let r = luma_raster(&DynamicImage::ImageLuma16(deep)).unwrap();
        assert_eq!(r.data(), &[100.0, 255.0, 255.0]);
    }

    #[test]
    fn luma_drops_alpha() {
        let la = image::GrayAlphaImage::from_raw(1, 1, vec![42, 0]).unwrap();
        let r = luma_raster(&DynamicImage::ImageLumaA8(la)).unwrap();
        assert_eq!(r.data(), &[42.0]);
    }
}
