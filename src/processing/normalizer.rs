use std::collections::HashMap;

use chrono::NaiveDate;
use lazy_static::lazy_static;

use crate::models::record;

/// Date formats accepted by [`normalize_date`], tried in order.
const DATE_FORMATS: [&str; 6] = [
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%m-%d-%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
];

lazy_static! {
    // ISO-style nationality codes and their full country names
    static ref COUNTRY_CODES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("USA", "United States");
        m.insert("GBR", "United Kingdom");
        m.insert("CAN", "Canada");
        m.insert("AUS", "Australia");
        m.insert("DEU", "Germany");
        m.insert("FRA", "France");
        m.insert("IND", "India");
        m.insert("CHN", "China");
        m.insert("JPN", "Japan");
        m.insert("RUS", "Russia");
        m.insert("ITA", "Italy");
        m.insert("ESP", "Spain");
        m.insert("NLD", "Netherlands");
        m.insert("CHE", "Switzerland");
        m.insert("BRA", "Brazil");
        m.insert("MEX", "Mexico");
        m.insert("KOR", "South Korea");
        m.insert("NZL", "New Zealand");
        m.insert("IRL", "Ireland");
        m.insert("ZAF", "South Africa");
        m
    };

    /// Per-field canonicalization functions. Fields without an entry pass
    /// their raw value through unchanged.
    pub static ref NORMALIZERS: HashMap<&'static str, fn(&str) -> Option<String>> = {
        let mut m: HashMap<&'static str, fn(&str) -> Option<String>> = HashMap::new();
        m.insert(record::SURNAME, normalize_name);
        m.insert(record::GIVEN_NAMES, normalize_name);
        m.insert(record::DATE_OF_BIRTH, normalize_date);
        m.insert(record::DATE_OF_ISSUE, normalize_date);
        m.insert(record::DATE_OF_EXPIRY, normalize_date);
        m.insert(record::NATIONALITY, normalize_nationality);
        m.insert(record::SEX, normalize_sex);
        m
    };
}

/// Apply the field's canonicalization rule to a raw extracted value.
pub fn normalize_field(field: &str, value: &str) -> Option<String> {
    match NORMALIZERS.get(field) {
        Some(normalize) => normalize(value),
        None => Some(value.to_string()),
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip non-alphabetic characters, collapse whitespace, title-case each
/// word. `None` when nothing alphabetic remains.
pub fn normalize_name(name: &str) -> Option<String> {
    let filtered: String = name
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();
    let cased = title_case(&filtered);

    if cased.is_empty() {
        None
    } else {
        Some(cased)
    }
}

/// Canonicalize a date string to `DD/MM/YYYY`.
///
/// Tries the known input formats in order, then falls back to MRZ `YYMMDD`
/// when the value is exactly six digits. A value that parses no way at all
/// is passed through unchanged so the caller never loses data.
pub fn normalize_date(date_str: &str) -> Option<String> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(date_str, format) {
            return Some(date.format("%d/%m/%Y").to_string());
        }
    }

    if date_str.len() == 6 && date_str.chars().all(|c| c.is_ascii_digit()) {
        if let Some(date) = parse_mrz_date(date_str) {
            return Some(date.format("%d/%m/%Y").to_string());
        }
    }

    Some(date_str.to_string())
}

// MRZ dates carry a two-digit year: 00-30 map to 20xx, 31-99 to 19xx.
fn parse_mrz_date(digits: &str) -> Option<NaiveDate> {
    let year: i32 = digits[..2].parse().ok()?;
    let year = if year <= 30 { 2000 + year } else { 1900 + year };
    let month: u32 = digits[2..4].parse().ok()?;
    let day: u32 = digits[4..6].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Expand a known 3-letter nationality code to its full country name;
/// title-case anything else.
pub fn normalize_nationality(nationality: &str) -> Option<String> {
    let nationality = nationality.trim().to_uppercase();
    if nationality.is_empty() {
        return None;
    }

    if let Some(country) = COUNTRY_CODES.get(nationality.as_str()) {
        return Some(country.to_string());
    }

    Some(title_case(&nationality))
}

/// Accept only a literal `M` or `F`; anything else is absent, never guessed.
pub fn normalize_sex(sex: &str) -> Option<String> {
    let sex = sex.trim().to_uppercase();
    match sex.as_str() {
        "M" | "F" => Some(sex),
        _ => None,
    }
}
