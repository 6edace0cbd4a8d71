//! Response validation and status interpretation
//!
//! The client hands the body over untyped; this module owns the schema.
//! Envelope checks run in a fixed order so every malformed shape maps to one
//! stable classification, and the record checks keep "status key absent"
//! distinct from "status present but undocumented".

use serde_json::Value;
use tracing::debug;

use crate::practicum::error::PracticumError;
use crate::practicum::types::HomeworkStatus;

/// Check the response envelope and return the homework records.
///
/// Checks run in order: non-empty, is an object, has `homeworks`, `homeworks`
/// is an array. An empty records array is valid; deciding what emptiness
/// means is the caller's job.
pub fn validate_response(response: &Value) -> Result<&[Value], PracticumError> {
    if is_empty_value(response) {
        return Err(PracticumError::EmptyResponse);
    }

    let map = response.as_object().ok_or(PracticumError::TypeMismatch {
        expected: "object",
        found: json_type_name(response),
    })?;

    let homeworks = map
        .get("homeworks")
        .ok_or(PracticumError::MissingKey("homeworks"))?;

    let records = homeworks.as_array().ok_or(PracticumError::TypeMismatch {
        expected: "array",
        found: json_type_name(homeworks),
    })?;

    debug!(count = records.len(), "validate_response: envelope ok");
    Ok(records)
}

/// Build the user-facing sentence for one homework record.
///
/// A missing or empty `homework_name` is always a hard failure; no
/// placeholder name is ever substituted.
pub fn status_message(record: &Value) -> Result<String, PracticumError> {
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(PracticumError::MissingName)?;

    let status = record.get("status").ok_or(PracticumError::MissingStatus)?;

    let Some(parsed) = status.as_str().and_then(HomeworkStatus::parse) else {
        let raw = match status.as_str() {
            Some(code) => code.to_string(),
            None => status.to_string(),
        };
        return Err(PracticumError::UnknownStatus(raw));
    };

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        parsed.verdict()
    ))
}

/// Null and zero-length containers count as empty
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// JSON type name for diagnostics
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_validate_returns_records() {
        let response = json!({"homeworks": [{"status": "approved"}], "current_date": 1634074965});
        let records = validate_response(&response).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_validate_accepts_empty_records() {
        let response = json!({"homeworks": []});
        let records = validate_response(&response).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_validate_empty_shapes() {
        for response in [json!(null), json!({}), json!([]), json!("")] {
            let err = validate_response(&response).unwrap_err();
            assert!(matches!(err, PracticumError::EmptyResponse), "{response}");
        }
    }

    #[test]
    fn test_validate_non_object_is_type_mismatch() {
        let response = json!([{"homeworks": []}]);
        let err = validate_response(&response).unwrap_err();
        assert!(matches!(
            err,
            PracticumError::TypeMismatch { expected: "object", found: "array" }
        ));
    }

    #[test]
    fn test_validate_missing_homeworks_is_missing_key() {
        // Never the type-mismatch or empty classification
        let response = json!({"current_date": 1634074965});
        let err = validate_response(&response).unwrap_err();
        assert!(matches!(err, PracticumError::MissingKey("homeworks")));
    }

    #[test]
    fn test_validate_non_array_homeworks_is_type_mismatch() {
        let response = json!({"homeworks": "hw1"});
        let err = validate_response(&response).unwrap_err();
        assert!(matches!(
            err,
            PracticumError::TypeMismatch { expected: "array", found: "string" }
        ));
    }

    #[test]
    fn test_status_message_approved() {
        let record = json!({"homework_name": "hw1", "status": "approved"});
        assert_eq!(
            status_message(&record).unwrap(),
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_status_message_reviewing_and_rejected() {
        let record = json!({"homework_name": "hw2", "status": "reviewing"});
        assert_eq!(
            status_message(&record).unwrap(),
            "Изменился статус проверки работы \"hw2\". Работа взята на проверку ревьюером."
        );

        let record = json!({"homework_name": "hw2", "status": "rejected"});
        assert_eq!(
            status_message(&record).unwrap(),
            "Изменился статус проверки работы \"hw2\". Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_missing_name_is_always_fatal() {
        // Absent, null, and empty names all fail; none get a placeholder
        for record in [
            json!({"status": "approved"}),
            json!({"homework_name": null, "status": "approved"}),
            json!({"homework_name": "", "status": "approved"}),
        ] {
            let err = status_message(&record).unwrap_err();
            assert!(matches!(err, PracticumError::MissingName), "{record}");
        }
    }

    #[test]
    fn test_name_checked_before_status() {
        let record = json!({});
        let err = status_message(&record).unwrap_err();
        assert!(matches!(err, PracticumError::MissingName));
    }

    #[test]
    fn test_absent_status_is_missing_status() {
        let record = json!({"homework_name": "hw1"});
        let err = status_message(&record).unwrap_err();
        assert!(matches!(err, PracticumError::MissingStatus));
    }

    #[test]
    fn test_undocumented_status_names_the_code() {
        let record = json!({"homework_name": "hw2", "status": "unknown"});
        let err = status_message(&record).unwrap_err();
        match err {
            PracticumError::UnknownStatus(code) => assert_eq!(code, "unknown"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_non_string_status_is_unknown_not_missing() {
        let record = json!({"homework_name": "hw1", "status": null});
        let err = status_message(&record).unwrap_err();
        assert!(matches!(err, PracticumError::UnknownStatus(_)));
    }

    proptest! {
        #[test]
        fn prop_undocumented_statuses_classified_unknown(code in "[a-zA-Z_-]{1,16}") {
            prop_assume!(HomeworkStatus::parse(&code).is_none());
            let record = json!({"homework_name": "hw", "status": code});
            let err = status_message(&record).unwrap_err();
            prop_assert!(matches!(err, PracticumError::UnknownStatus(_)));
        }
    }
}
