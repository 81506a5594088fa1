use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

// Declaration order is form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "fullName")]
    FullName,
    #[serde(rename = "dob")]
    Dob,
    #[serde(rename = "nationality")]
    Nationality,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "dateRange")]
    DateRange,
    #[serde(rename = "dateRange.from")]
    TravelFrom,
    #[serde(rename = "dateRange.to")]
    TravelTo,
    #[serde(rename = "accommodation")]
    Accommodation,
    #[serde(rename = "requests")]
    Requests,
    #[serde(rename = "declaration")]
    Declaration,
    #[serde(rename = "emergencyContact")]
    EmergencyContact,
    #[serde(rename = "medicalConditions")]
    MedicalConditions,
}

impl FieldName {
    pub const ALL: [FieldName; 13] = [
        FieldName::FullName,
        FieldName::Dob,
        FieldName::Nationality,
        FieldName::Email,
        FieldName::Phone,
        FieldName::DateRange,
        FieldName::TravelFrom,
        FieldName::TravelTo,
        FieldName::Accommodation,
        FieldName::Requests,
        FieldName::Declaration,
        FieldName::EmergencyContact,
        FieldName::MedicalConditions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Dob => "dob",
            Self::Nationality => "nationality",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::DateRange => "dateRange",
            Self::TravelFrom => "dateRange.from",
            Self::TravelTo => "dateRange.to",
            Self::Accommodation => "accommodation",
            Self::Requests => "requests",
            Self::Declaration => "declaration",
            Self::EmergencyContact => "emergencyContact",
            Self::MedicalConditions => "medicalConditions",
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::DateRange)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Declaration => FieldKind::Flag,
            Self::DateRange => FieldKind::Group,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
    Group,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Cleared,
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accommodation {
    SpaceHotel,
    MartianBase,
}

impl Accommodation {
    pub const ALL: [Accommodation; 2] = [Accommodation::SpaceHotel, Accommodation::MartianBase];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SpaceHotel => "space-hotel",
            Self::MartianBase => "martian-base",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SpaceHotel => "Space Hotel",
            Self::MartianBase => "Martian Base",
        }
    }
}

impl fmt::Display for Accommodation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown accommodation '{0}'")]
pub struct UnknownAccommodation(pub String);

impl FromStr for Accommodation {
    type Err = UnknownAccommodation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "space-hotel" => Ok(Self::SpaceHotel),
            "martian-base" => Ok(Self::MartianBase),
            other => Err(UnknownAccommodation(other.to_string())),
        }
    }
}
