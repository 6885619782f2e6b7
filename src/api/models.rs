//! Wire data models for the analysis service
//!
//! Field names mirror the service's snake_case JSON exactly; payloads are
//! stored as parsed, not re-validated.

use serde::{Deserialize, Serialize};

/// Response body of `GET /info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub environment: String,
}

/// Response body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub text: String,
    pub length: u64,
    pub word_count: u64,
    pub has_numbers: bool,
    pub has_uppercase: bool,
}

/// Response body of `POST /analyze/password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordAnalysis {
    pub score: i64,
    pub length: u64,
    pub has_numbers: bool,
    pub has_uppercase: bool,
    pub has_special_chars: bool,
}

/// Request body of `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeTextRequest<'a> {
    pub text: &'a str,
}

/// Request body of `POST /analyze/password`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzePasswordRequest<'a> {
    pub password: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_analysis_round_trip() {
        let body = r#"{"text":"Hello 123","length":9,"word_count":2,"has_numbers":true,"has_uppercase":true}"#;
        let parsed: TextAnalysis = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.text, "Hello 123");
        assert_eq!(parsed.length, 9);
        assert_eq!(parsed.word_count, 2);
        assert!(parsed.has_numbers);
        assert!(parsed.has_uppercase);

        // Re-serialized JSON must be deep-equal to the response body
        let reserialized = serde_json::to_value(&parsed).unwrap();
        let original: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(reserialized, original);
    }

    #[test]
    fn test_password_analysis_round_trip() {
        let body = r#"{"score":1,"length":3,"has_numbers":false,"has_uppercase":false,"has_special_chars":false}"#;
        let parsed: PasswordAnalysis = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.score, 1);
        assert_eq!(parsed.length, 3);
        assert!(!parsed.has_numbers);
        assert!(!parsed.has_uppercase);
        assert!(!parsed.has_special_chars);

        let reserialized = serde_json::to_value(&parsed).unwrap();
        let original: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(reserialized, original);
    }

    #[test]
    fn test_service_info_deserialization() {
        let body = r#"{"service":"text-toolkit","version":"1.2.0","environment":"production"}"#;
        let parsed: ServiceInfo = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.service, "text-toolkit");
        assert_eq!(parsed.version, "1.2.0");
        assert_eq!(parsed.environment, "production");
    }

    #[test]
    fn test_request_bodies_carry_single_named_field() {
        let text = serde_json::to_value(AnalyzeTextRequest { text: "Hello 123" }).unwrap();
        assert_eq!(text, serde_json::json!({"text": "Hello 123"}));

        let password = serde_json::to_value(AnalyzePasswordRequest { password: "abc" }).unwrap();
        assert_eq!(password, serde_json::json!({"password": "abc"}));
    }
}
