// DatasetLayout - the on-disk folder convention
//
//   root/
//     images/*.png
//     depth/*.png     (stem: first "color" replaced by "depth")
//     labels/*.txt    (same stem as the image)
//     obj.names

use std::path::{Path, PathBuf};

/// Names of the directories, files, and extensions a dataset root uses.
///
/// All matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    pub images_dir: String,
    pub labels_dir: String,
    pub depth_dir: String,
    /// Class name table, one name per line.
    pub names_file: String,
    /// Extension (without dot) an image file must have to be enumerated.
    pub image_extension: String,
    pub depth_extension: String,
    pub label_extension: String,
    /// Substring of the image stem replaced to get the depth stem.
    pub color_token: String,
    pub depth_token: String,
}

impl Default for DatasetLayout {
    fn default() -> Self {
        Self {
            images_dir: "images".into(),
            labels_dir: "labels".into(),
            depth_dir: "depth".into(),
            names_file: "obj.names".into(),
            image_extension: "png".into(),
            depth_extension: "png".into(),
            label_extension: "txt".into(),
            color_token: "color".into(),
            depth_token: "depth".into(),
        }
    }
}

impl DatasetLayout {
    pub fn images_dir(mut self, dir: impl Into<String>) -> Self {
        self.images_dir = dir.into();
        self
    }
    pub fn labels_dir(mut self, dir: impl Into<String>) -> Self {
        self.labels_dir = dir.into();
        self
    }
    pub fn depth_dir(mut self, dir: impl Into<String>) -> Self {
        self.depth_dir = dir.into();
        self
    }
    pub fn names_file(mut self, file: impl Into<String>) -> Self {
        self.names_file = file.into();
        self
    }
    pub fn image_extension(mut self, ext: impl Into<String>) -> Self {
        self.image_extension = ext.into();
        self
    }
    pub fn depth_extension(mut self, ext: impl Into<String>) -> Self {
        self.depth_extension = ext.into();
        self
    }
    pub fn label_extension(mut self, ext: impl Into<String>) -> Self {
        self.label_extension = ext.into();
        self
    }
    pub fn depth_substitution(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.color_token = from.into();
        self.depth_token = to.into();
        self
    }

    pub fn images_path(&self, root: &Path) -> PathBuf {
        root.join(&self.images_dir)
    }

    pub fn labels_path(&self, root: &Path) -> PathBuf {
        root.join(&self.labels_dir)
    }

    pub fn depth_path(&self, root: &Path) -> PathBuf {
        root.join(&self.depth_dir)
    }

    pub fn names_path(&self, root: &Path) -> PathBuf {
        root.join(&self.names_file)
    }

    /// Whether `file_name` should be enumerated as an image: any entry whose
    /// name ends in `.<image_extension>`, including one named exactly that.
    pub fn is_image_name(&self, file_name: &str) -> bool {
        file_name
            .strip_suffix(self.image_extension.as_str())
            .is_some_and(|rest| rest.ends_with('.'))
    }
}
