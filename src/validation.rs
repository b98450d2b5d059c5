//! Payload validation
//!
//! Incoming detections arrive as arbitrary JSON, so the checks run over
//! a raw `serde_json::Value` rather than a typed extractor: a payload
//! with a wrong-typed field must still produce the schema-bearing 400.

use serde_json::{json, Map, Value};

use crate::models::{IngestPayload, Moisture, WasteClass};

const REQUIRED_FIELDS: [&str; 5] = ["class", "wet_dry", "confidence", "is_mixed", "is_violation"];

/// Expected payload shape, included in every rejection response.
pub fn required_schema() -> Value {
    json!({
        "class": format!("string, one of: {}", WasteClass::LABELS.join(", ")),
        "wet_dry": format!("string, one of: {}", Moisture::LABELS.join(", ")),
        "confidence": "number between 0.0 and 1.0",
        "is_mixed": "boolean",
        "is_violation": "boolean",
        "timestamp": "optional ISO-8601 string (server time used if omitted)",
        "snapshot_path": "optional string",
        "snapshot_base64": "optional data URI containing a base64 image payload",
    })
}

/// Validate a raw request body against the detection schema.
///
/// All rules must hold; the first violation found is reported. Optional
/// fields are accepted as-is when they are strings and treated as
/// absent otherwise. Never mutates anything.
pub fn validate(body: &Value) -> Result<IngestPayload, String> {
    let obj = body
        .as_object()
        .ok_or_else(|| "Request body must be a JSON object".to_string())?;

    for field in REQUIRED_FIELDS {
        if !obj.contains_key(field) {
            return Err(format!("Missing required field '{}'", field));
        }
    }

    let class_label = obj["class"]
        .as_str()
        .ok_or_else(|| "Field 'class' must be a string".to_string())?;
    let class = WasteClass::from_label(class_label).ok_or_else(|| {
        format!(
            "Invalid class '{}', expected one of: {}",
            class_label,
            WasteClass::LABELS.join(", ")
        )
    })?;

    let wet_dry_label = obj["wet_dry"]
        .as_str()
        .ok_or_else(|| "Field 'wet_dry' must be a string".to_string())?;
    let wet_dry = Moisture::from_label(wet_dry_label).ok_or_else(|| {
        format!(
            "Invalid wet_dry '{}', expected one of: {}",
            wet_dry_label,
            Moisture::LABELS.join(", ")
        )
    })?;

    let confidence = obj["confidence"]
        .as_f64()
        .ok_or_else(|| "Field 'confidence' must be a number".to_string())?;
    if !(0.0..=1.0).contains(&confidence) {
        return Err(format!(
            "Confidence {} out of range, expected 0.0 to 1.0",
            confidence
        ));
    }

    let is_mixed = obj["is_mixed"]
        .as_bool()
        .ok_or_else(|| "Field 'is_mixed' must be a boolean".to_string())?;
    let is_violation = obj["is_violation"]
        .as_bool()
        .ok_or_else(|| "Field 'is_violation' must be a boolean".to_string())?;

    Ok(IngestPayload {
        class,
        wet_dry,
        confidence,
        is_mixed,
        is_violation,
        snapshot_path: optional_string(obj, "snapshot_path"),
        snapshot_base64: optional_string(obj, "snapshot_base64"),
        timestamp: optional_string(obj, "timestamp"),
    })
}

fn optional_string(obj: &Map<String, Value>, field: &str) -> Option<String> {
    obj.get(field).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "class": "plastic",
            "wet_dry": "dry",
            "confidence": 0.92,
            "is_mixed": false,
            "is_violation": false,
        })
    }

    #[test]
    fn test_valid_payload_passes() {
        let payload = validate(&valid_body()).unwrap();
        assert_eq!(payload.class, WasteClass::Plastic);
        assert_eq!(payload.wet_dry, Moisture::Dry);
        assert_eq!(payload.confidence, 0.92);
        assert!(!payload.is_mixed);
        assert!(!payload.is_violation);
        assert!(payload.timestamp.is_none());
        assert!(payload.snapshot_path.is_none());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        for field in REQUIRED_FIELDS {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(field);
            let err = validate(&body).unwrap_err();
            assert!(err.contains(field), "error should name '{}': {}", field, err);
        }
    }

    #[test]
    fn test_non_object_body_rejected() {
        assert!(validate(&json!([1, 2, 3])).is_err());
        assert!(validate(&json!("detection")).is_err());
    }

    #[test]
    fn test_unknown_class_rejected() {
        let mut body = valid_body();
        body["class"] = json!("styrofoam");
        assert!(validate(&body).is_err());
    }

    #[test]
    fn test_unknown_wet_dry_rejected() {
        let mut body = valid_body();
        body["wet_dry"] = json!("damp");
        assert!(validate(&body).is_err());
    }

    #[test]
    fn test_wrong_typed_fields_rejected() {
        let mut body = valid_body();
        body["class"] = json!(3);
        assert!(validate(&body).is_err());

        let mut body = valid_body();
        body["confidence"] = json!("0.9");
        assert!(validate(&body).is_err());

        let mut body = valid_body();
        body["is_mixed"] = json!("false");
        assert!(validate(&body).is_err());

        let mut body = valid_body();
        body["is_violation"] = json!(0);
        assert!(validate(&body).is_err());
    }

    #[test]
    fn test_confidence_range_is_inclusive() {
        for conf in [0.0, 1.0] {
            let mut body = valid_body();
            body["confidence"] = json!(conf);
            assert!(validate(&body).is_ok(), "confidence {} should pass", conf);
        }
        for conf in [-0.01, 1.01] {
            let mut body = valid_body();
            body["confidence"] = json!(conf);
            assert!(validate(&body).is_err(), "confidence {} should fail", conf);
        }
    }

    #[test]
    fn test_optional_fields_not_format_checked() {
        let mut body = valid_body();
        body["timestamp"] = json!("not even a date");
        body["snapshot_path"] = json!("anything/goes.jpg");
        let payload = validate(&body).unwrap();
        assert_eq!(payload.timestamp.as_deref(), Some("not even a date"));
        assert_eq!(payload.snapshot_path.as_deref(), Some("anything/goes.jpg"));
    }

    #[test]
    fn test_non_string_optional_treated_as_absent() {
        let mut body = valid_body();
        body["timestamp"] = json!(12345);
        let payload = validate(&body).unwrap();
        assert!(payload.timestamp.is_none());
    }
}
