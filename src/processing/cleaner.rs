use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Runs of whitespace other than newlines
    static ref HORIZONTAL_WS: Regex = Regex::new(r"[^\S\n]+").unwrap();
    // Runs of newlines, including blank lines padded with spaces
    static ref NEWLINE_RUNS: Regex = Regex::new(r" *\n[ \n]*").unwrap();
    static ref INNER_WS: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize the layout of raw OCR text before pattern matching.
///
/// Collapses whitespace runs and blank lines. No character-level
/// substitutions are applied here: blanket 0/O and 1/I swaps corrupt
/// passport numbers and dates.
pub fn clean_text(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = HORIZONTAL_WS.replace_all(&text, " ");
    let text = NEWLINE_RUNS.replace_all(&text, "\n");
    text.trim().to_string()
}

/// Clean a single matched field value: strip MRZ filler characters,
/// collapse internal whitespace, trim. Returns `None` when nothing is
/// left, which callers treat as absence.
pub fn clean_field_value(value: &str) -> Option<String> {
    let value = value.replace('<', " ").replace('>', " ");
    let value = INNER_WS.replace_all(&value, " ");
    let value = value.trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        let text = "Surname:   SMITH\t\tJones\n\n\nNationality:  USA";
        assert_eq!(clean_text(text), "Surname: SMITH Jones\nNationality: USA");
    }

    #[test]
    fn test_normalizes_line_endings() {
        assert_eq!(clean_text("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_collapses_padded_blank_lines() {
        assert_eq!(clean_text("a  \n   \n  b"), "a\nb");
    }

    #[test]
    fn test_preserves_digits_and_letters() {
        // 0/O and 1/I must survive untouched
        let text = "Passport No: A01234567 DOB 01/10/1990";
        assert_eq!(clean_text(text), text);
    }

    #[test]
    fn test_clean_field_value_strips_mrz_filler() {
        assert_eq!(
            clean_field_value("JOHN<<ROBERT").as_deref(),
            Some("JOHN ROBERT")
        );
    }

    #[test]
    fn test_clean_field_value_empty_is_absent() {
        assert_eq!(clean_field_value("  <<< "), None);
        assert_eq!(clean_field_value(""), None);
    }
}
