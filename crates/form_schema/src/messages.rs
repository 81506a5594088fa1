use once_cell::sync::Lazy;
use shared::domain::Accommodation;

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const DOB_REQUIRED: &str = "Date of birth is required";
pub const DOB_INVALID: &str = "Date of birth must be a valid date";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_FORMAT: &str =
    "Phone number may only contain digits, spaces, +, - and parentheses";
pub const PHONE_TOO_SHORT: &str = "Phone number must be at least 10 characters";
pub const NATIONALITY_REQUIRED: &str = "Nationality is required";
pub const TRAVEL_FROM_REQUIRED: &str = "Departure date is required";
pub const TRAVEL_FROM_INVALID: &str = "Departure date must be a valid date";
pub const TRAVEL_TO_REQUIRED: &str = "Return date is required";
pub const TRAVEL_TO_INVALID: &str = "Return date must be a valid date";
pub const TRAVEL_RANGE_ORDER: &str = "Return must be after departure";
pub const TRAVEL_TO_NOT_FUTURE: &str = "Return date must be in the future";
pub const ACCOMMODATION_REQUIRED: &str = "Please select an accommodation";
pub static ACCOMMODATION_INVALID: Lazy<String> = Lazy::new(|| {
    let labels: Vec<&str> = Accommodation::ALL.iter().map(Accommodation::label).collect();
    format!("Accommodation must be {}", labels.join(" or "))
});
pub const DECLARATION_REQUIRED: &str = "Health declaration is required";
pub const EMERGENCY_CONTACT_REQUIRED: &str = "Emergency contact is required";
pub const EMERGENCY_CONTACT_FORMAT: &str =
    "Emergency contact may only contain digits, spaces, +, - and parentheses";
pub const EMERGENCY_CONTACT_TOO_SHORT: &str = "Emergency contact must be at least 10 characters";
