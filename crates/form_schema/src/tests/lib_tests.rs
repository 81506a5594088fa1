use super::*;

fn complete_record() -> DraftRecord {
    DraftRecord {
        full_name: "Ada Lovelace".into(),
        dob: "1990-12-10".into(),
        email: "ada@example.com".into(),
        phone: "0123456789".into(),
        nationality: "British".into(),
        date_range: shared::draft::DateRangeInput {
            from: "2030-01-10".into(),
            to: "2030-01-20".into(),
        },
        accommodation: "space-hotel".into(),
        requests: String::new(),
        declaration: Some(true),
        emergency_contact: "0987654321".into(),
        medical_conditions: String::new(),
    }
}

#[test]
fn complete_record_passes_every_step_and_the_whole_schema() {
    let schema = FormSchema::standard();
    let record = complete_record();

    for step in STEPS {
        let result = schema.validate_fields(&record, step.fields);
        assert!(result.is_valid(), "{} should pass: {result:?}", step.id);
    }
    assert!(schema.validate_all(&record).is_valid());
}

#[test]
fn step_scoped_validation_ignores_unvisited_steps() {
    let schema = FormSchema::standard();
    let record = DraftRecord {
        full_name: "Ada Lovelace".into(),
        dob: "1990-12-10".into(),
        email: "ada@example.com".into(),
        phone: "0123456789".into(),
        nationality: "British".into(),
        ..DraftRecord::default()
    };

    assert!(schema.validate_fields(&record, STEPS[0].fields).is_valid());

    let travel = schema.validate_fields(&record, STEPS[1].fields);
    assert_eq!(
        travel.error(FieldName::TravelFrom),
        Some(messages::TRAVEL_FROM_REQUIRED)
    );
    assert_eq!(
        travel.error(FieldName::Accommodation),
        Some(messages::ACCOMMODATION_REQUIRED)
    );
    assert!(!travel.has_error(FieldName::FullName));

    let all = schema.validate_all(&record);
    assert!(!all.is_valid());
    assert!(all.has_error(FieldName::Declaration));
}

#[test]
fn whole_schema_validity_implies_every_step_validity() {
    let schema = FormSchema::standard();
    let mut records = vec![complete_record(), DraftRecord::default()];
    let mut inverted = complete_record();
    inverted.date_range.to = "2030-01-05".into();
    records.push(inverted);
    let mut unanswered = complete_record();
    unanswered.declaration = None;
    records.push(unanswered);

    for record in &records {
        if schema.validate_all(record).is_valid() {
            for step in STEPS {
                assert!(schema.validate_fields(record, step.fields).is_valid());
            }
        }
    }
}

#[test]
fn validation_is_idempotent() {
    let schema = FormSchema::standard();
    let mut record = complete_record();
    record.email = "not-an-email".into();
    record.date_range.to = "2030-01-01".into();

    let snapshot = record.clone();
    let first = schema.validate_all(&record);
    let second = schema.validate_all(&record);
    assert_eq!(first, second);
    assert_eq!(
        schema.validate_fields(&record, STEPS[1].fields),
        schema.validate_fields(&record, STEPS[1].fields)
    );
    assert_eq!(record, snapshot);
}

#[test]
fn inverted_travel_window_is_reported_on_the_date_range() {
    let schema = FormSchema::standard();
    let mut record = complete_record();
    record.date_range.from = "2030-01-10".into();
    record.date_range.to = "2030-01-05".into();

    let result = schema.validate_all(&record);
    assert!(!result.is_valid());
    assert_eq!(
        result.error(FieldName::DateRange),
        Some(messages::TRAVEL_RANGE_ORDER)
    );
    assert_eq!(result.len(), 1);

    let travel = schema.validate_fields(&record, STEPS[1].fields);
    assert!(travel.has_error(FieldName::DateRange));
}

#[test]
fn same_day_travel_window_is_rejected() {
    let schema = FormSchema::standard();
    let mut record = complete_record();
    record.date_range.to = record.date_range.from.clone();
    assert!(schema.validate_all(&record).has_error(FieldName::DateRange));
}

#[test]
fn refinement_waits_for_individually_valid_participants() {
    let schema = FormSchema::standard();
    let mut record = complete_record();
    record.date_range.to = "20-01-2030".into();

    let result = schema.validate_all(&record);
    assert_eq!(
        result.error(FieldName::TravelTo),
        Some(messages::TRAVEL_TO_INVALID)
    );
    assert!(!result.has_error(FieldName::DateRange));
}

#[test]
fn refinement_skipped_when_only_one_participant_is_requested() {
    let schema = FormSchema::standard();
    let mut record = complete_record();
    record.date_range.to = "2030-01-05".into();

    let result = schema.validate_fields(&record, &[FieldName::TravelTo]);
    assert!(result.is_valid());
}

#[test]
fn malformed_date_does_not_abort_the_pass() {
    let schema = FormSchema::standard();
    let mut record = complete_record();
    record.dob = "yesterday".into();
    record.email = "ada@".into();
    record.phone = "12345".into();

    let result = schema.validate_all(&record);
    assert_eq!(result.error(FieldName::Dob), Some(messages::DOB_INVALID));
    assert_eq!(result.error(FieldName::Email), Some(messages::EMAIL_INVALID));
    assert_eq!(result.error(FieldName::Phone), Some(messages::PHONE_TOO_SHORT));
    assert_eq!(result.len(), 3);
}

#[test]
fn emergency_contact_boundary_through_schema() {
    let schema = FormSchema::standard();
    let mut record = complete_record();

    record.emergency_contact = "123456789".into();
    assert_eq!(
        schema
            .validate_fields(&record, &[FieldName::EmergencyContact])
            .error(FieldName::EmergencyContact),
        Some(messages::EMERGENCY_CONTACT_TOO_SHORT)
    );

    record.emergency_contact = "1234567890".into();
    assert!(schema
        .validate_fields(&record, &[FieldName::EmergencyContact])
        .is_valid());
}

#[test]
fn optional_fields_never_fail() {
    let schema = FormSchema::standard();
    let mut record = complete_record();
    record.requests = "window seat facing Mars".into();
    record.medical_conditions = String::new();
    assert!(schema
        .validate_fields(&record, &[FieldName::Requests, FieldName::MedicalConditions])
        .is_valid());
}

#[test]
fn scope_includes_refinement_targets_of_covered_steps() {
    let schema = FormSchema::standard();
    assert!(schema.scope(STEPS[1].fields).contains(&FieldName::DateRange));
    assert!(!schema.scope(STEPS[0].fields).contains(&FieldName::DateRange));
    assert!(!schema
        .scope(&[FieldName::TravelFrom])
        .contains(&FieldName::DateRange));
}

#[test]
fn reference_date_rule_is_opt_in() {
    let mut record = complete_record();
    record.date_range.from = "2020-01-01".into();
    record.date_range.to = "2020-01-05".into();

    assert!(FormSchema::standard().validate_all(&record).is_valid());

    let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("date");
    let strict = FormSchema::standard().with_reference_date(today);
    let result = strict.validate_all(&record);
    assert_eq!(
        result.error(FieldName::TravelTo),
        Some(messages::TRAVEL_TO_NOT_FUTURE)
    );

    record.date_range.from = "2026-10-16".into();
    record.date_range.to = "2026-10-17".into();
    assert!(strict.validate_all(&record).is_valid());
}

#[test]
fn parse_builds_trimmed_typed_submission() {
    let schema = FormSchema::standard();
    let mut record = complete_record();
    record.full_name = "  Ada Lovelace ".into();
    record.requests = "   ".into();
    record.medical_conditions = "asthma".into();

    let submission = schema.parse(&record).expect("valid");
    assert_eq!(submission.full_name, "Ada Lovelace");
    assert_eq!(submission.accommodation, Accommodation::SpaceHotel);
    assert_eq!(
        submission.date_range.to,
        NaiveDate::from_ymd_opt(2030, 1, 20).expect("date")
    );
    assert_eq!(submission.requests, None);
    assert_eq!(submission.medical_conditions.as_deref(), Some("asthma"));
    assert!(submission.declaration);
}

#[test]
fn parse_returns_the_validation_result_when_invalid() {
    let schema = FormSchema::standard();
    let mut record = complete_record();
    record.accommodation = String::new();

    let err = schema.parse(&record).expect_err("invalid");
    assert_eq!(
        err.error(FieldName::Accommodation),
        Some(messages::ACCOMMODATION_REQUIRED)
    );
}

#[test]
fn result_serializes_with_validity_flag_and_field_keys() {
    let schema = FormSchema::standard();
    let mut record = complete_record();
    record.date_range.to = "2030-01-05".into();

    let value = serde_json::to_value(schema.validate_all(&record)).expect("json");
    assert_eq!(value["valid"], false);
    assert_eq!(value["errors"]["dateRange"], messages::TRAVEL_RANGE_ORDER);

    let value = serde_json::to_value(schema.validate_all(&complete_record())).expect("json");
    assert_eq!(value, serde_json::json!({ "valid": true, "errors": {} }));
}

#[test]
fn replace_scope_only_touches_listed_keys() {
    let mut live = ValidationResult::single(FieldName::Email, "old email");
    live.insert(FieldName::Declaration, "old declaration");

    let fresh = ValidationResult::single(FieldName::Phone, "new phone");
    live.replace_scope(&[FieldName::Email, FieldName::Phone], &fresh);

    assert_eq!(live.error(FieldName::Email), None);
    assert_eq!(live.error(FieldName::Phone), Some("new phone"));
    assert_eq!(live.error(FieldName::Declaration), Some("old declaration"));
}
