use chrono::NaiveDate;
use shared::{
    domain::{Accommodation, FieldName},
    draft::DraftRecord,
    protocol::{DateRange, FormSubmission},
};

pub mod messages;
mod result;
pub mod rules;
pub mod steps;

pub use result::ValidationResult;
pub use rules::FieldRule;
pub use steps::{step_index_of, Step, STEPS};

type RefinementCheck = Box<dyn Fn(&DraftRecord) -> Result<(), &'static str> + Send + Sync>;

/// Cross-field constraint. Runs only once every participant passed its own
/// field rule, so it never compares unparsed input.
pub struct Refinement {
    pub target: FieldName,
    pub participants: &'static [FieldName],
    check: RefinementCheck,
}

impl Refinement {
    pub fn new(
        target: FieldName,
        participants: &'static [FieldName],
        check: impl Fn(&DraftRecord) -> Result<(), &'static str> + Send + Sync + 'static,
    ) -> Self {
        Self {
            target,
            participants,
            check: Box::new(check),
        }
    }

    fn covered_by(&self, fields: &[FieldName]) -> bool {
        self.participants.iter().all(|field| fields.contains(field))
    }
}

const TRAVEL_WINDOW: &[FieldName] = &[FieldName::TravelFrom, FieldName::TravelTo];
const TRAVEL_END: &[FieldName] = &[FieldName::TravelTo];

fn travel_window_ordered(record: &DraftRecord) -> Result<(), &'static str> {
    match (
        rules::parse_date(&record.date_range.from),
        rules::parse_date(&record.date_range.to),
    ) {
        (Some(from), Some(to)) if to > from => Ok(()),
        _ => Err(messages::TRAVEL_RANGE_ORDER),
    }
}

pub struct FormSchema {
    rules: Vec<FieldRule>,
    refinements: Vec<Refinement>,
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::standard()
    }
}

impl FormSchema {
    pub fn new(rules: Vec<FieldRule>, refinements: Vec<Refinement>) -> Self {
        Self { rules, refinements }
    }

    pub fn standard() -> Self {
        Self::new(
            rules::standard_rules(),
            vec![Refinement::new(
                FieldName::DateRange,
                TRAVEL_WINDOW,
                travel_window_ordered,
            )],
        )
    }

    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.refinements.push(Refinement::new(
            FieldName::TravelTo,
            TRAVEL_END,
            move |record| match rules::parse_date(&record.date_range.to) {
                Some(to) if to > today => Ok(()),
                _ => Err(messages::TRAVEL_TO_NOT_FUTURE),
            },
        ));
        self
    }

    // Refinements run only when all their participants are listed.
    pub fn validate_fields(&self, record: &DraftRecord, fields: &[FieldName]) -> ValidationResult {
        let mut result = ValidationResult::new();
        for rule in self.rules.iter().filter(|rule| fields.contains(&rule.field)) {
            if let Err(message) = rule.run(record) {
                result.insert(rule.field, message);
            }
        }

        for refinement in self.refinements.iter().filter(|r| r.covered_by(fields)) {
            if refinement
                .participants
                .iter()
                .any(|field| result.has_error(*field))
            {
                continue;
            }
            if result.has_error(refinement.target) {
                continue;
            }
            if let Err(message) = (refinement.check)(record) {
                result.insert(refinement.target, message);
            }
        }
        result
    }

    pub fn validate_all(&self, record: &DraftRecord) -> ValidationResult {
        self.validate_fields(record, &FieldName::ALL)
    }

    pub fn scope(&self, fields: &[FieldName]) -> Vec<FieldName> {
        let mut scope = fields.to_vec();
        for refinement in self.refinements.iter().filter(|r| r.covered_by(fields)) {
            if !scope.contains(&refinement.target) {
                scope.push(refinement.target);
            }
        }
        scope
    }

    pub fn parse(&self, record: &DraftRecord) -> Result<FormSubmission, ValidationResult> {
        let result = self.validate_all(record);
        if !result.is_valid() {
            return Err(result);
        }

        let date = |field: FieldName, raw: &str| {
            rules::parse_date(raw)
                .ok_or_else(|| ValidationResult::single(field, "must be a valid date"))
        };
        let accommodation = record
            .accommodation
            .trim()
            .parse::<Accommodation>()
            .map_err(|_| {
                ValidationResult::single(
                    FieldName::Accommodation,
                    messages::ACCOMMODATION_INVALID.as_str(),
                )
            })?;
        let declaration = record.declaration.ok_or_else(|| {
            ValidationResult::single(FieldName::Declaration, messages::DECLARATION_REQUIRED)
        })?;

        Ok(FormSubmission {
            full_name: record.full_name.trim().to_string(),
            dob: date(FieldName::Dob, &record.dob)?,
            email: record.email.trim().to_string(),
            phone: record.phone.trim().to_string(),
            nationality: record.nationality.trim().to_string(),
            date_range: DateRange {
                from: date(FieldName::TravelFrom, &record.date_range.from)?,
                to: date(FieldName::TravelTo, &record.date_range.to)?,
            },
            accommodation,
            requests: optional_text(&record.requests),
            declaration,
            emergency_contact: record.emergency_contact.trim().to_string(),
            medical_conditions: optional_text(&record.medical_conditions),
        })
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
