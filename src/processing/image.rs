use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage};

use crate::utils::ExtractionError;

/// Minimal image preparation ahead of OCR. This is a replaceable utility,
/// not part of the extraction core.
pub struct ImageProcessor;

impl ImageProcessor {
    /// Load an image, apply preprocessing, and write the result to a
    /// temporary file the OCR engine can read.
    pub fn prepare(image_path: &Path) -> Result<PathBuf, ExtractionError> {
        let img = image::open(image_path).map_err(|e| {
            ExtractionError::ImageProcessingError(format!("Failed to open image: {}", e))
        })?;

        let processed = Self::preprocess(&img);
        Self::save_to_temp_file(&processed)
    }

    fn preprocess(img: &DynamicImage) -> GrayImage {
        let gray = img.to_luma8();
        Self::enhance_contrast(&gray)
    }

    fn enhance_contrast(img: &GrayImage) -> GrayImage {
        let mut enhanced = img.clone();
        for pixel in enhanced.pixels_mut() {
            let value = pixel[0];
            pixel[0] = if value < 128 {
                value.saturating_sub(20)
            } else {
                value.saturating_add(20)
            };
        }
        enhanced
    }

    fn save_to_temp_file(img: &GrayImage) -> Result<PathBuf, ExtractionError> {
        let temp_file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .map_err(|e| ExtractionError::ImageProcessingError(e.to_string()))?;

        // Keep the file on disk; the OCR engine reads it by path
        let (_, path) = temp_file
            .keep()
            .map_err(|e| ExtractionError::ImageProcessingError(e.to_string()))?;

        img.save(&path)
            .map_err(|e| ExtractionError::ImageProcessingError(e.to_string()))?;

        Ok(path)
    }
}
