use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::models::record;

/// A record field paired with its ordered pattern rules.
///
/// Rules are tried first-to-last and the first acceptable capture wins,
/// so precedence is encoded purely by position: specific labeled patterns
/// first, MRZ-derived shapes next, permissive structural fallbacks last.
pub struct FieldSpec {
    pub name: &'static str,
    pub patterns: Vec<Regex>,
    /// Minimum character length of the trimmed capture.
    pub min_len: usize,
}

// A pattern that fails to compile is dropped with a warning; one bad rule
// never takes down the rest of the field's list.
fn compile(field: &'static str, patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(err) => {
                warn!("Skipping invalid pattern for {}: {}", field, err);
                None
            }
        })
        .collect()
}

fn spec(name: &'static str, min_len: usize, patterns: &[&str]) -> FieldSpec {
    FieldSpec {
        name,
        patterns: compile(name, patterns),
        min_len,
    }
}

lazy_static! {
    /// Ordered extraction rules for every record field. Built once at
    /// startup and read-only afterwards.
    pub static ref FIELD_SPECS: Vec<FieldSpec> = vec![
        spec(record::PASSPORT_NUMBER, 2, &[
            r"(?im)Passport\s+No\.?\s*[:\-]?\s*([A-Z0-9]{6,12})",
            r"(?im)Document\s+No\.?\s*[:\-]?\s*([A-Z0-9]{6,12})",
            // MRZ line 1: document number follows the country code
            r"(?im)P<[A-Z]{3}([A-Z0-9]{9})",
            // Bare alphanumeric shape, last resort
            r"(?im)([A-Z]{1,2}[0-9]{6,8})",
        ]),
        spec(record::SURNAME, 2, &[
            r"(?im)Surname[:\-\s]*([A-Z\s]+?)(?:\n|Given|Name)",
            r"(?im)Family\s+Name[:\-\s]*([A-Z\s]+?)(?:\n|Given)",
            r"(?im)P<[A-Z]{3}([A-Z]+)<<",
        ]),
        spec(record::GIVEN_NAMES, 2, &[
            r"(?im)Given\s+Names?[:\-\s]*([A-Z\s]+?)(?:\n|Nationality|Date)",
            r"(?im)First\s+Name[:\-\s]*([A-Z\s]+?)(?:\n|Nationality|Date)",
            r"(?im)P<[A-Z]{3}[A-Z]+<<([A-Z<]+)",
        ]),
        spec(record::NATIONALITY, 2, &[
            r"(?im)Nationality[:\-\s]*([A-Z\s]+?)(?:\n|Date|Sex)",
            r"(?im)Country\s+Code[:\-\s]*([A-Z]{3})",
            r"(?im)P<([A-Z]{3})",
        ]),
        spec(record::DATE_OF_BIRTH, 2, &[
            r"(?im)Date\s+of\s+Birth[:\-\s]*([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{4})",
            r"(?im)DOB[:\-\s]*([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{4})",
            r"(?im)Born[:\-\s]*([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{4})",
            // MRZ line 2: YYMMDD immediately before the sex marker
            r"(?im)([0-9]{6})[MF]",
        ]),
        spec(record::PLACE_OF_BIRTH, 2, &[
            r"(?im)Place\s+of\s+Birth[:\-\s]*([A-Z\s,]+?)(?:\n|Sex|Date)",
            r"(?im)Born\s+in[:\-\s]*([A-Z\s,]+?)(?:\n|Sex|Date)",
        ]),
        // Sex accepts a single-character capture, unlike every other field
        spec(record::SEX, 1, &[
            r"(?im)Sex[:\-\s]*([MF])",
            r"(?im)Gender[:\-\s]*([MF])",
            r"(?im)[0-9]{6}([MF])",
        ]),
        spec(record::DATE_OF_ISSUE, 2, &[
            r"(?im)Date\s+of\s+Issue[:\-\s]*([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{4})",
            r"(?im)Issued[:\-\s]*([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{4})",
        ]),
        spec(record::DATE_OF_EXPIRY, 2, &[
            r"(?im)Date\s+of\s+Expiry[:\-\s]*([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{4})",
            r"(?im)Expires?[:\-\s]*([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{4})",
            r"(?im)Valid\s+until[:\-\s]*([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{4})",
            // MRZ line 2: expiry YYMMDD follows the sex marker
            r"(?im)[MF][0-9]{6}([0-9]{6})",
        ]),
        spec(record::ISSUING_AUTHORITY, 2, &[
            r"(?im)Issuing\s+Authority[:\-\s]*([A-Z\s,]+?)(?:\n|Date)",
            r"(?im)Authority[:\-\s]*([A-Z\s,]+?)(?:\n|Date)",
        ]),
        spec(record::EMERGENCY_CONTACT, 2, &[
            r"(?im)Emergency\s+Contact[:\-\s]*([A-Z\s,.]+?)(?:\n|Phone|Tel)",
            r"(?im)In\s+Case\s+of\s+Emergency[:\-\s]*([A-Z\s,.]+?)(?:\n|Phone|Tel)",
        ]),
        spec(record::PHONE_NUMBER, 2, &[
            r"(?im)Phone(?:\s+Number)?[:\-\s]*(\+?[0-9][0-9\s\-()]{5,})",
            r"(?im)Tel(?:ephone)?\.?[:\-\s]*(\+?[0-9][0-9\s\-()]{5,})",
            r"(?im)Mobile[:\-\s]*(\+?[0-9][0-9\s\-()]{5,})",
        ]),
        spec(record::PREVIOUS_PASSPORT, 2, &[
            r"(?im)Previous\s+Passport(?:\s+No\.?)?[:\-\s]*([A-Z0-9]{6,12})",
            r"(?im)Old\s+Passport(?:\s+No\.?)?[:\-\s]*([A-Z0-9]{6,12})",
        ]),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_every_record_field_in_order() {
        let names: Vec<&str> = FIELD_SPECS.iter().map(|s| s.name).collect();
        assert_eq!(names, record::FIELD_NAMES);
    }

    #[test]
    fn test_all_patterns_compiled() {
        for spec in FIELD_SPECS.iter() {
            assert!(
                !spec.patterns.is_empty(),
                "no patterns for {}",
                spec.name
            );
        }
    }

    #[test]
    fn test_only_sex_accepts_single_character() {
        for spec in FIELD_SPECS.iter() {
            if spec.name == record::SEX {
                assert_eq!(spec.min_len, 1);
            } else {
                assert_eq!(spec.min_len, 2, "unexpected min_len for {}", spec.name);
            }
        }
    }

    #[test]
    fn test_bad_pattern_is_dropped_not_fatal() {
        let compiled = compile("test_field", &[r"(unclosed", r"([A-Z]+)"]);
        assert_eq!(compiled.len(), 1);
    }
}
