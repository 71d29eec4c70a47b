use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Image processing error: {0}")]
    ImageProcessingError(String),
    #[error("OCR error: {0}")]
    OcrError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Enhancement error: {0}")]
    EnhancementError(String),
}
