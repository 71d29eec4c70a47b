use log::{debug, warn};

use crate::enhance::Enhancer;
use crate::models::PassportRecord;
use crate::processing::{clean_text, extract_field, normalize_field, FIELD_SPECS};

#[cfg(feature = "ocr")]
use crate::processing::OcrProcessor;
#[cfg(feature = "ocr")]
use crate::utils::ExtractionError;
#[cfg(feature = "ocr")]
use std::path::Path;

/// Maps noisy OCR text to a structured passport record.
///
/// Extraction is pure and synchronous: the pattern tables are built once
/// and read-only afterwards, so a single extractor may be shared freely
/// across threads. No input is an error; unrecognizable text just yields
/// a record with every field absent.
pub struct PassportExtractor;

impl PassportExtractor {
    pub fn new() -> Self {
        PassportExtractor
    }

    // Main extraction function that orchestrates the entire process
    pub fn parse_text(&self, raw_text: &str) -> PassportRecord {
        // Step 1: Normalize layout
        let cleaned = clean_text(raw_text);

        // Step 2: Per-field pattern search, then canonicalization
        let mut record = PassportRecord::default();
        for spec in FIELD_SPECS.iter() {
            let raw_value = extract_field(&cleaned, spec);
            debug!("Extracted {}: {:?}", spec.name, raw_value);

            let value = raw_value.and_then(|v| normalize_field(spec.name, &v));
            record.set(spec.name, value);
        }

        record
    }

    /// Run the base extraction, then hand the raw text and record to an
    /// enhancer for refinement. A failing enhancer degrades to the locally
    /// extracted record rather than surfacing an error.
    pub fn parse_text_enhanced<E: Enhancer>(&self, raw_text: &str, enhancer: &E) -> PassportRecord {
        let record = self.parse_text(raw_text);

        match enhancer.enhance(raw_text, &record) {
            Ok(enhanced) => enhanced,
            Err(err) => {
                warn!("Enhancement failed, keeping extracted data: {}", err);
                record
            }
        }
    }

    /// OCR a passport image and extract a record from the resulting text.
    #[cfg(feature = "ocr")]
    pub fn parse_image(&self, image_path: &Path) -> Result<PassportRecord, ExtractionError> {
        let text = OcrProcessor::extract_text(image_path)?;
        Ok(self.parse_text(&text))
    }
}

impl Default for PassportExtractor {
    fn default() -> Self {
        Self::new()
    }
}
