//! Output type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single labeled image entry in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledImage {
    /// Path to the image file.
    pub path: PathBuf,
    /// Dense integer label assigned in discovery order.
    pub label: u32,
}

impl LabeledImage {
    /// Create a labeled image entry.
    pub fn new(path: impl Into<PathBuf>, label: u32) -> Self {
        Self {
            path: path.into(),
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_image_new() {
        let image = LabeledImage::new("/data/class_a/sp1/img.jpg", 3);
        assert_eq!(image.path, PathBuf::from("/data/class_a/sp1/img.jpg"));
        assert_eq!(image.label, 3);
    }
}
