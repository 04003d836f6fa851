use std::path::PathBuf;

/// All errors that can occur while reading the door-handle dataset.
///
/// Nothing is retried or recovered: every failure surfaces to the caller of
/// the construction or access that hit it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required file or directory is missing or unreadable.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file exists but is not a decodable raster image.
    #[error("failed to decode image {}: {reason}", .path.display())]
    ImageDecode { path: PathBuf, reason: String },

    /// A label line has the wrong token count or a non-numeric field.
    #[error("label parse error in {} line {line}: {reason}", .path.display())]
    LabelParse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// Sample index outside `[0, len)`.
    #[error("index {index} out of range for dataset of length {len}")]
    ///
    /// `index` is wide enough to hold any `usize` or `isize` exactly.
    IndexOutOfRange { index: i128, len: usize },

    /// Class id with no entry in the class name table.
    #[error("class id {class_id} out of range for {num_classes} class names")]
    ClassIdOutOfRange { class_id: usize, num_classes: usize },

    /// A user-supplied transform rejected its input.
    #[error("transform failed: {0}")]
    Transform(String),

    /// Generic message for cases not covered above.
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an error from any string message.
    pub fn msg(s: impl Into<String>) -> Self {
        Error::Msg(s.into())
    }

    /// Wrap an I/O error together with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience Result type used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Macro for early return with a formatted error message.
/// Usage: `bail!("ratios must sum to 1.0, got {}", sum)`
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::Msg(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails() -> Result<()> {
        bail!("bad ratio {}", 3)
    }

    #[test]
    fn bail_returns_msg() {
        match fails() {
            Err(Error::Msg(m)) => assert_eq!(m, "bad ratio 3"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn display_includes_path_and_line() {
        let e = Error::LabelParse {
            path: PathBuf::from("labels/a.txt"),
            line: 4,
            reason: "expected 5 tokens, got 3".into(),
        };
        let s = e.to_string();
        assert!(s.contains("labels/a.txt"));
        assert!(s.contains("line 4"));
    }

    #[test]
    fn io_keeps_source() {
        use std::error::Error as _;
        let e = Error::io(
            "obj.names",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("I/O error on obj.names"));
    }

    #[test]
    fn index_error_reports_exact_index() {
        let e = Error::IndexOutOfRange {
            index: usize::MAX as i128,
            len: 3,
        };
        assert_eq!(
            e.to_string(),
            format!("index {} out of range for dataset of length 3", usize::MAX)
        );
    }
}
