use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Accommodation;

pub const FORM_ROUTE: &str = "/api/form";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub full_name: String,
    pub dob: NaiveDate,
    pub email: String,
    pub phone: String,
    pub nationality: String,
    pub date_range: DateRange,
    pub accommodation: Accommodation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests: Option<String>,
    pub declaration: bool,
    pub emergency_contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_conditions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAck {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
