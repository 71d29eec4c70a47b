use std::path::Path;

use log::debug;
use tesseract::Tesseract;

use super::image::ImageProcessor;
use crate::utils::ExtractionError;

// Character set found on passport data pages, including MRZ filler
const CHAR_WHITELIST: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789<>/";

/// Thin wrapper around the OCR engine. Produces the raw text blob the
/// extraction core consumes; it performs no field logic of its own.
pub struct OcrProcessor;

impl OcrProcessor {
    /// Run OCR over a passport image and return the extracted text.
    pub fn extract_text(image_path: &Path) -> Result<String, ExtractionError> {
        let prepared_path = ImageProcessor::prepare(image_path)?;
        let path_str = prepared_path
            .to_str()
            .ok_or_else(|| ExtractionError::OcrError("Non-UTF8 temp path".to_string()))?;

        let mut tess = Tesseract::new(None, Some("eng"))
            .map_err(|e| {
                ExtractionError::OcrError(format!("Failed to initialize Tesseract: {}", e))
            })?
            .set_variable("tessedit_char_whitelist", CHAR_WHITELIST)
            .map_err(|e| {
                ExtractionError::OcrError(format!("Failed to set Tesseract variable: {}", e))
            })?;

        // Treat the data page as a single uniform block of text
        tess.set_page_seg_mode(tesseract::PageSegMode::PsmSingleBlock);

        let mut tess = tess.set_image(path_str).map_err(|e| {
            ExtractionError::OcrError(format!("Failed to set image: {}", e))
        })?;

        let text = tess
            .get_text()
            .map_err(|e| ExtractionError::OcrError(format!("Failed to extract text: {}", e)))?;

        debug!("OCR produced {} characters", text.len());

        let _ = std::fs::remove_file(&prepared_path);

        Ok(text)
    }
}
