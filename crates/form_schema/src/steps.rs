use shared::domain::FieldName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub id: &'static str,
    pub name: &'static str,
    pub fields: &'static [FieldName],
}

pub const STEPS: [Step; 3] = [
    Step {
        id: "Stage 1",
        name: "Personal Information",
        fields: &[
            FieldName::FullName,
            FieldName::Dob,
            FieldName::Nationality,
            FieldName::Email,
            FieldName::Phone,
        ],
    },
    Step {
        id: "Stage 2",
        name: "Travel Preferences",
        fields: &[
            FieldName::TravelFrom,
            FieldName::TravelTo,
            FieldName::Accommodation,
            FieldName::Requests,
        ],
    },
    Step {
        id: "Stage 3",
        name: "Health and Safety",
        fields: &[
            FieldName::Declaration,
            FieldName::EmergencyContact,
            FieldName::MedicalConditions,
        ],
    },
];

pub fn step_index_of(field: FieldName) -> Option<usize> {
    let field = match field {
        FieldName::DateRange => FieldName::TravelFrom,
        other => other,
    };
    STEPS.iter().position(|step| step.fields.contains(&field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_assignable_field_belongs_to_exactly_one_step() {
        for field in FieldName::ALL {
            let owners = STEPS
                .iter()
                .filter(|step| step.fields.contains(&field))
                .count();
            let expected = usize::from(!field.is_group());
            assert_eq!(owners, expected, "{field}");
        }
    }

    #[test]
    fn group_key_maps_to_travel_step() {
        assert_eq!(step_index_of(FieldName::DateRange), Some(1));
        assert_eq!(step_index_of(FieldName::Email), Some(0));
        assert_eq!(step_index_of(FieldName::MedicalConditions), Some(2));
    }
}
