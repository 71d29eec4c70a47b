use serde::{Deserialize, Serialize};

pub const PASSPORT_NUMBER: &str = "passport_number";
pub const SURNAME: &str = "surname";
pub const GIVEN_NAMES: &str = "given_names";
pub const NATIONALITY: &str = "nationality";
pub const DATE_OF_BIRTH: &str = "date_of_birth";
pub const PLACE_OF_BIRTH: &str = "place_of_birth";
pub const SEX: &str = "sex";
pub const DATE_OF_ISSUE: &str = "date_of_issue";
pub const DATE_OF_EXPIRY: &str = "date_of_expiry";
pub const ISSUING_AUTHORITY: &str = "issuing_authority";
pub const EMERGENCY_CONTACT: &str = "emergency_contact";
pub const PHONE_NUMBER: &str = "phone_number";
pub const PREVIOUS_PASSPORT: &str = "previous_passport";

/// All record fields in output order.
pub const FIELD_NAMES: [&str; 13] = [
    PASSPORT_NUMBER,
    SURNAME,
    GIVEN_NAMES,
    NATIONALITY,
    DATE_OF_BIRTH,
    PLACE_OF_BIRTH,
    SEX,
    DATE_OF_ISSUE,
    DATE_OF_EXPIRY,
    ISSUING_AUTHORITY,
    EMERGENCY_CONTACT,
    PHONE_NUMBER,
    PREVIOUS_PASSPORT,
];

/// Structured result of one extraction pass. `None` means the field could not
/// be determined; a present value is never an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportRecord {
    pub passport_number: Option<String>,
    pub surname: Option<String>,
    pub given_names: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub sex: Option<String>,
    pub date_of_issue: Option<String>,
    pub date_of_expiry: Option<String>,
    pub issuing_authority: Option<String>,
    pub emergency_contact: Option<String>,
    pub phone_number: Option<String>,
    pub previous_passport: Option<String>,
}

impl PassportRecord {
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            PASSPORT_NUMBER => self.passport_number.as_deref(),
            SURNAME => self.surname.as_deref(),
            GIVEN_NAMES => self.given_names.as_deref(),
            NATIONALITY => self.nationality.as_deref(),
            DATE_OF_BIRTH => self.date_of_birth.as_deref(),
            PLACE_OF_BIRTH => self.place_of_birth.as_deref(),
            SEX => self.sex.as_deref(),
            DATE_OF_ISSUE => self.date_of_issue.as_deref(),
            DATE_OF_EXPIRY => self.date_of_expiry.as_deref(),
            ISSUING_AUTHORITY => self.issuing_authority.as_deref(),
            EMERGENCY_CONTACT => self.emergency_contact.as_deref(),
            PHONE_NUMBER => self.phone_number.as_deref(),
            PREVIOUS_PASSPORT => self.previous_passport.as_deref(),
            _ => None,
        }
    }

    pub fn set(&mut self, field: &str, value: Option<String>) {
        match field {
            PASSPORT_NUMBER => self.passport_number = value,
            SURNAME => self.surname = value,
            GIVEN_NAMES => self.given_names = value,
            NATIONALITY => self.nationality = value,
            DATE_OF_BIRTH => self.date_of_birth = value,
            PLACE_OF_BIRTH => self.place_of_birth = value,
            SEX => self.sex = value,
            DATE_OF_ISSUE => self.date_of_issue = value,
            DATE_OF_EXPIRY => self.date_of_expiry = value,
            ISSUING_AUTHORITY => self.issuing_authority = value,
            EMERGENCY_CONTACT => self.emergency_contact = value,
            PHONE_NUMBER => self.phone_number = value,
            PREVIOUS_PASSPORT => self.previous_passport = value,
            _ => {}
        }
    }

    /// Number of fields with a value.
    pub fn present_count(&self) -> usize {
        FIELD_NAMES
            .iter()
            .filter(|field| self.get(field).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.present_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_by_field_name() {
        let mut record = PassportRecord::default();
        record.set(SURNAME, Some("Smith".to_string()));
        record.set(SEX, Some("M".to_string()));

        assert_eq!(record.get(SURNAME), Some("Smith"));
        assert_eq!(record.get(SEX), Some("M"));
        assert_eq!(record.get(NATIONALITY), None);
        assert_eq!(record.present_count(), 2);
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut record = PassportRecord::default();
        record.set("no_such_field", Some("value".to_string()));
        assert!(record.is_empty());
        assert_eq!(record.get("no_such_field"), None);
    }

    #[test]
    fn test_absent_fields_serialize_to_null() {
        let mut record = PassportRecord::default();
        record.set(PASSPORT_NUMBER, Some("AB1234567".to_string()));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["passport_number"], "AB1234567");
        assert!(value["surname"].is_null());
        assert!(value["previous_passport"].is_null());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut record = PassportRecord::default();
        record.set(SURNAME, Some("Doe".to_string()));
        record.set(DATE_OF_BIRTH, Some("04/07/1990".to_string()));

        let json = serde_json::to_string(&record).unwrap();
        let parsed: PassportRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
