use crate::models::PassportRecord;
use crate::utils::ExtractionError;

/// Injected post-extraction refinement capability.
///
/// An implementation receives the raw OCR text alongside the locally
/// extracted record and returns a revised record over the same field set.
/// The extraction core never requires an enhancer; without one it simply
/// runs at its local precision.
pub trait Enhancer {
    fn enhance(
        &self,
        raw_text: &str,
        record: &PassportRecord,
    ) -> Result<PassportRecord, ExtractionError>;
}

/// Identity enhancer, the stand-in used when no external service is wired up.
pub struct NoopEnhancer;

impl Enhancer for NoopEnhancer {
    fn enhance(
        &self,
        _raw_text: &str,
        record: &PassportRecord,
    ) -> Result<PassportRecord, ExtractionError> {
        Ok(record.clone())
    }
}
