use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{FieldKind, FieldName, FieldValue};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRangeInput {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DraftRecord {
    pub full_name: String,
    pub dob: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
    pub date_range: DateRangeInput,
    pub accommodation: String,
    pub requests: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<bool>,
    pub emergency_contact: String,
    pub medical_conditions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("field '{field}' expects a {expected} value")]
    TypeMismatch {
        field: FieldName,
        expected: &'static str,
    },
    #[error("field '{0}' is a group and cannot be assigned")]
    NotAssignable(FieldName),
}

impl DraftRecord {
    /// Empty draft whose travel window starts `today` and ends the day after.
    pub fn with_default_travel_window(today: NaiveDate) -> Self {
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
        Self {
            date_range: DateRangeInput {
                from: today.format("%Y-%m-%d").to_string(),
                to: tomorrow.format("%Y-%m-%d").to_string(),
            },
            ..Self::default()
        }
    }

    pub fn text(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::FullName => &self.full_name,
            FieldName::Dob => &self.dob,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Nationality => &self.nationality,
            FieldName::TravelFrom => &self.date_range.from,
            FieldName::TravelTo => &self.date_range.to,
            FieldName::Accommodation => &self.accommodation,
            FieldName::Requests => &self.requests,
            FieldName::EmergencyContact => &self.emergency_contact,
            FieldName::MedicalConditions => &self.medical_conditions,
            FieldName::Declaration | FieldName::DateRange => return None,
        };
        Some(value.as_str())
    }

    pub fn set(&mut self, field: FieldName, value: FieldValue) -> Result<(), DraftError> {
        match (field.kind(), value) {
            (FieldKind::Group, _) => Err(DraftError::NotAssignable(field)),
            (FieldKind::Flag, FieldValue::Flag(flag)) => {
                self.declaration = Some(flag);
                Ok(())
            }
            (FieldKind::Flag, FieldValue::Cleared) => {
                self.declaration = None;
                Ok(())
            }
            (FieldKind::Flag, FieldValue::Text(_)) => Err(DraftError::TypeMismatch {
                field,
                expected: "boolean",
            }),
            (FieldKind::Text, FieldValue::Flag(_)) => Err(DraftError::TypeMismatch {
                field,
                expected: "text",
            }),
            (FieldKind::Text, FieldValue::Text(text)) => {
                *self.text_slot(field)? = text;
                Ok(())
            }
            (FieldKind::Text, FieldValue::Cleared) => {
                self.text_slot(field)?.clear();
                Ok(())
            }
        }
    }

    fn text_slot(&mut self, field: FieldName) -> Result<&mut String, DraftError> {
        let slot = match field {
            FieldName::FullName => &mut self.full_name,
            FieldName::Dob => &mut self.dob,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Nationality => &mut self.nationality,
            FieldName::TravelFrom => &mut self.date_range.from,
            FieldName::TravelTo => &mut self.date_range.to,
            FieldName::Accommodation => &mut self.accommodation,
            FieldName::Requests => &mut self.requests,
            FieldName::EmergencyContact => &mut self.emergency_contact,
            FieldName::MedicalConditions => &mut self.medical_conditions,
            FieldName::Declaration | FieldName::DateRange => {
                return Err(DraftError::NotAssignable(field))
            }
        };
        Ok(slot)
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
