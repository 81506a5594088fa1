use super::*;

#[test]
fn accepts_payload_with_name_and_email() {
    let body = serde_json::json!({
        "fullName": "Ada Lovelace",
        "email": "ada@example.com",
        "dateRange": { "from": "2030-01-10", "to": "2030-01-20" }
    })
    .to_string();

    let ack = accept_submission(body.as_bytes()).expect("accepted");
    assert_eq!(ack.message, ACK_MESSAGE);
}

#[test]
fn only_name_and_email_are_rechecked() {
    let body = serde_json::json!({ "fullName": "Ada", "email": "x" }).to_string();
    assert!(accept_submission(body.as_bytes()).is_ok());
}

#[test]
fn missing_or_empty_required_fields_are_rejected() {
    for body in [
        serde_json::json!({ "fullName": "Ada Lovelace" }),
        serde_json::json!({ "email": "ada@example.com" }),
        serde_json::json!({ "fullName": "", "email": "ada@example.com" }),
        serde_json::json!({ "fullName": null, "email": "ada@example.com" }),
        serde_json::json!([]),
    ] {
        let err = accept_submission(body.to_string().as_bytes()).expect_err("rejected");
        assert_eq!(err.code, ErrorCode::Validation);
        assert_eq!(err.message, "Missing required fields");
    }
}

#[test]
fn malformed_json_is_rejected() {
    let err = accept_submission(b"{not json").expect_err("malformed");
    assert_eq!(err.code, ErrorCode::MalformedBody);
    assert_eq!(status_for(err.code), StatusCode::BAD_REQUEST);
}

#[test]
fn truthiness_follows_loose_presence_rules() {
    assert!(!is_truthy(&Value::Null));
    assert!(!is_truthy(&serde_json::json!(false)));
    assert!(!is_truthy(&serde_json::json!(0)));
    assert!(!is_truthy(&serde_json::json!("")));
    assert!(is_truthy(&serde_json::json!("a")));
    assert!(is_truthy(&serde_json::json!(1)));
    assert!(is_truthy(&serde_json::json!({})));
}
