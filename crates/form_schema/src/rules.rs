use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use shared::{
    domain::{Accommodation, FieldName},
    draft::DraftRecord,
};

use crate::messages;

pub const MIN_PHONE_LEN: usize = 10;
const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

pub type Check = fn(&DraftRecord) -> Result<(), &'static str>;

#[derive(Clone, Copy)]
pub struct FieldRule {
    pub field: FieldName,
    pub check: Check,
}

impl FieldRule {
    pub const fn new(field: FieldName, check: Check) -> Self {
        Self { field, check }
    }

    pub fn run(&self, record: &DraftRecord) -> Result<(), &'static str> {
        (self.check)(record)
    }
}

pub fn standard_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(FieldName::FullName, check_full_name),
        FieldRule::new(FieldName::Dob, check_dob),
        FieldRule::new(FieldName::Nationality, check_nationality),
        FieldRule::new(FieldName::Email, check_email),
        FieldRule::new(FieldName::Phone, check_phone),
        FieldRule::new(FieldName::TravelFrom, check_travel_from),
        FieldRule::new(FieldName::TravelTo, check_travel_to),
        FieldRule::new(FieldName::Accommodation, check_accommodation),
        FieldRule::new(FieldName::Declaration, check_declaration),
        FieldRule::new(FieldName::EmergencyContact, check_emergency_contact),
    ]
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw.trim())
}

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')')
}

fn required<'a>(raw: &'a str, missing: &'static str) -> Result<&'a str, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(missing)
    } else {
        Ok(trimmed)
    }
}

fn date(raw: &str, missing: &'static str, invalid: &'static str) -> Result<(), &'static str> {
    let value = required(raw, missing)?;
    parse_date(value).map(|_| ()).ok_or(invalid)
}

fn phone(
    raw: &str,
    missing: &'static str,
    format: &'static str,
    too_short: &'static str,
) -> Result<(), &'static str> {
    let value = required(raw, missing)?;
    if !value.chars().all(is_phone_char) {
        return Err(format);
    }
    if value.chars().count() < MIN_PHONE_LEN {
        return Err(too_short);
    }
    Ok(())
}

pub fn check_full_name(record: &DraftRecord) -> Result<(), &'static str> {
    required(&record.full_name, messages::FULL_NAME_REQUIRED).map(|_| ())
}

pub fn check_dob(record: &DraftRecord) -> Result<(), &'static str> {
    date(&record.dob, messages::DOB_REQUIRED, messages::DOB_INVALID)
}

pub fn check_nationality(record: &DraftRecord) -> Result<(), &'static str> {
    required(&record.nationality, messages::NATIONALITY_REQUIRED).map(|_| ())
}

pub fn check_email(record: &DraftRecord) -> Result<(), &'static str> {
    let value = required(&record.email, messages::EMAIL_REQUIRED)?;
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(messages::EMAIL_INVALID)
    }
}

pub fn check_phone(record: &DraftRecord) -> Result<(), &'static str> {
    phone(
        &record.phone,
        messages::PHONE_REQUIRED,
        messages::PHONE_FORMAT,
        messages::PHONE_TOO_SHORT,
    )
}

pub fn check_travel_from(record: &DraftRecord) -> Result<(), &'static str> {
    date(
        &record.date_range.from,
        messages::TRAVEL_FROM_REQUIRED,
        messages::TRAVEL_FROM_INVALID,
    )
}

pub fn check_travel_to(record: &DraftRecord) -> Result<(), &'static str> {
    date(
        &record.date_range.to,
        messages::TRAVEL_TO_REQUIRED,
        messages::TRAVEL_TO_INVALID,
    )
}

pub fn check_accommodation(record: &DraftRecord) -> Result<(), &'static str> {
    let value = required(&record.accommodation, messages::ACCOMMODATION_REQUIRED)?;
    Accommodation::from_str(value)
        .map(|_| ())
        .map_err(|_| messages::ACCOMMODATION_INVALID.as_str())
}

pub fn check_declaration(record: &DraftRecord) -> Result<(), &'static str> {
    record
        .declaration
        .map(|_| ())
        .ok_or(messages::DECLARATION_REQUIRED)
}

pub fn check_emergency_contact(record: &DraftRecord) -> Result<(), &'static str> {
    phone(
        &record.emergency_contact,
        messages::EMERGENCY_CONTACT_REQUIRED,
        messages::EMERGENCY_CONTACT_FORMAT,
        messages::EMERGENCY_CONTACT_TOO_SHORT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_is_trimmed_and_borrowed_from_input() {
        let raw = String::from("  Ada Lovelace  ");
        assert_eq!(required(&raw, messages::FULL_NAME_REQUIRED), Ok("Ada Lovelace"));
        assert_eq!(
            required(" \t ", messages::FULL_NAME_REQUIRED),
            Err(messages::FULL_NAME_REQUIRED)
        );
    }

    #[test]
    fn email_pattern_needs_local_part_and_dotted_domain() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@-example.com"));
    }

    #[test]
    fn dates_must_be_iso_calendar_days() {
        assert!(parse_date("2030-01-10").is_some());
        assert!(parse_date(" 2030-01-10 ").is_some());
        assert!(parse_date("2030-02-30").is_none());
        assert!(parse_date("10/01/2030").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn phone_accepts_formatting_characters() {
        let mut record = DraftRecord {
            phone: "+44 (20) 7946-0958".into(),
            ..DraftRecord::default()
        };
        assert_eq!(check_phone(&record), Ok(()));

        record.phone = "0123456789x".into();
        assert_eq!(check_phone(&record), Err(messages::PHONE_FORMAT));

        record.phone = "   ".into();
        assert_eq!(check_phone(&record), Err(messages::PHONE_REQUIRED));
    }

    #[test]
    fn emergency_contact_length_boundary() {
        let mut record = DraftRecord {
            emergency_contact: "123456789".into(),
            ..DraftRecord::default()
        };
        assert_eq!(
            check_emergency_contact(&record),
            Err(messages::EMERGENCY_CONTACT_TOO_SHORT)
        );

        record.emergency_contact = "1234567890".into();
        assert_eq!(check_emergency_contact(&record), Ok(()));
    }

    #[test]
    fn accommodation_rejects_empty_sentinel_and_unknown_options() {
        let mut record = DraftRecord::default();
        assert_eq!(
            check_accommodation(&record),
            Err(messages::ACCOMMODATION_REQUIRED)
        );
        record.accommodation = "moon-tent".into();
        assert_eq!(
            check_accommodation(&record),
            Err(messages::ACCOMMODATION_INVALID.as_str())
        );
        assert!(messages::ACCOMMODATION_INVALID.contains("Space Hotel"));
        assert!(messages::ACCOMMODATION_INVALID.contains("Martian Base"));
        record.accommodation = "martian-base".into();
        assert_eq!(check_accommodation(&record), Ok(()));
    }

    #[test]
    fn declaration_only_requires_presence() {
        let mut record = DraftRecord::default();
        assert_eq!(
            check_declaration(&record),
            Err(messages::DECLARATION_REQUIRED)
        );
        record.declaration = Some(false);
        assert_eq!(check_declaration(&record), Ok(()));
    }
}
