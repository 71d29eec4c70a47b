use super::cleaner::clean_field_value;
use super::patterns::FieldSpec;

/// Extract one field from cleaned text by trying the field's patterns in
/// order. The first match whose trimmed capture meets the spec's minimum
/// length is accepted and iteration stops, even when a later pattern would
/// have matched more precisely. Absence is a normal outcome, not an error.
pub fn extract_field(text: &str, spec: &FieldSpec) -> Option<String> {
    for pattern in &spec.patterns {
        let captures = match pattern.captures(text) {
            Some(captures) => captures,
            None => continue,
        };

        // Every rule captures the value in group 1; a rule without one is
        // skipped rather than aborting the field.
        let value = match captures.get(1) {
            Some(group) => group.as_str().trim(),
            None => continue,
        };

        if value.chars().count() >= spec.min_len {
            return clean_field_value(value);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record;
    use crate::processing::patterns::FIELD_SPECS;

    fn spec_for(name: &str) -> &'static FieldSpec {
        FIELD_SPECS.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn test_labeled_pattern_wins_over_fallback() {
        // Both the labeled rule and the bare-shape fallback match here;
        // the labeled rule is listed first so its value is taken.
        let text = "Ref X9999999\nPassport No: AB1234567";
        let value = extract_field(text, spec_for(record::PASSPORT_NUMBER));
        assert_eq!(value.as_deref(), Some("AB1234567"));
    }

    #[test]
    fn test_mrz_fallback_when_no_label_present() {
        let text = "P<USASMITH<<JOHN<ROBERT<<<<<<<<<<<<<<<<<<<<<";
        let surname = extract_field(text, spec_for(record::SURNAME));
        let given = extract_field(text, spec_for(record::GIVEN_NAMES));
        assert_eq!(surname.as_deref(), Some("SMITH"));
        assert_eq!(given.as_deref(), Some("JOHN ROBERT"));
    }

    #[test]
    fn test_no_match_is_absent() {
        let value = extract_field("nothing useful here", spec_for(record::PASSPORT_NUMBER));
        assert_eq!(value, None);
    }

    #[test]
    fn test_single_character_sex_capture_survives() {
        let value = extract_field("Sex: M", spec_for(record::SEX));
        assert_eq!(value.as_deref(), Some("M"));
    }

    #[test]
    fn test_short_capture_rejected_for_other_fields() {
        // A one-character nationality capture fails the length guard
        let value = extract_field("Nationality: U\n", spec_for(record::NATIONALITY));
        assert_eq!(value, None);
    }

    #[test]
    fn test_empty_text_yields_absence_for_all_fields() {
        for spec in FIELD_SPECS.iter() {
            assert_eq!(extract_field("", spec), None, "field {}", spec.name);
        }
    }
}
