pub mod cleaner;
pub mod extractor;
pub mod normalizer;
pub mod patterns;

#[cfg(feature = "ocr")]
pub mod image;
#[cfg(feature = "ocr")]
pub mod ocr;

pub use cleaner::{clean_field_value, clean_text};
pub use extractor::extract_field;
pub use normalizer::normalize_field;
pub use patterns::{FieldSpec, FIELD_SPECS};

#[cfg(feature = "ocr")]
pub use image::ImageProcessor;
#[cfg(feature = "ocr")]
pub use ocr::OcrProcessor;
