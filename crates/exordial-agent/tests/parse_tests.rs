// Response-parsing tests for every HTTP backend, over fixture JSON.
// The pure parse functions carry all shape handling, so no network is
// involved here.

use exordial_agent::{chatvolt, gemini, groq};
use exordial_core::error::GenerateError;

// ── gemini ───────────────────────────────────────────────────────────────

#[test]
fn gemini_success_joins_candidate_parts() {
    let body = r#"{
        "candidates": [
            {"content": {"parts": [{"text": "Primeira parte. "}, {"text": "Segunda parte."}]}}
        ]
    }"#;
    assert_eq!(
        gemini::parse_response(body).expect("parse"),
        "Primeira parte. Segunda parte."
    );
}

#[test]
fn gemini_block_reason_maps_to_content_blocked() {
    let body = r#"{
        "candidates": [],
        "promptFeedback": {"blockReason": "SAFETY"}
    }"#;
    assert_eq!(
        gemini::parse_response(body),
        Err(GenerateError::ContentBlocked {
            reason: "SAFETY".into()
        })
    );
}

#[test]
fn gemini_missing_candidates_is_empty_response() {
    assert_eq!(
        gemini::parse_response("{}"),
        Err(GenerateError::EmptyResponse)
    );
}

#[test]
fn gemini_whitespace_only_text_is_empty_response() {
    let body = r#"{"candidates": [{"content": {"parts": [{"text": "   \n"}]}}]}"#;
    assert_eq!(
        gemini::parse_response(body),
        Err(GenerateError::EmptyResponse)
    );
}

#[test]
fn gemini_invalid_json_is_malformed() {
    assert!(matches!(
        gemini::parse_response("not json"),
        Err(GenerateError::Malformed(_))
    ));
}

#[test]
fn gemini_status_mapping() {
    assert_eq!(
        gemini::map_status(401, ""),
        GenerateError::InvalidCredential
    );
    assert_eq!(
        gemini::map_status(403, ""),
        GenerateError::InvalidCredential
    );
    assert_eq!(
        gemini::map_status(400, r#"{"error": {"message": "API key not valid"}}"#),
        GenerateError::InvalidCredential
    );
    assert_eq!(gemini::map_status(429, ""), GenerateError::QuotaExceeded);
    assert_eq!(
        gemini::map_status(500, r#"{"status": "RESOURCE_EXHAUSTED"}"#),
        GenerateError::QuotaExceeded
    );
    assert!(matches!(
        gemini::map_status(500, "internal"),
        GenerateError::Api { status: 500, .. }
    ));
}

#[test]
fn gemini_api_error_body_is_truncated() {
    let long_body = "x".repeat(2_000);
    match gemini::map_status(503, &long_body) {
        GenerateError::Api { body, .. } => assert_eq!(body.chars().count(), 500),
        other => panic!("expected Api, got {other:?}"),
    }
}

// ── groq ─────────────────────────────────────────────────────────────────

#[test]
fn groq_success_extracts_first_choice() {
    let body = r#"{
        "choices": [
            {"message": {"role": "assistant", "content": "  RASCUNHO DA PETIÇÃO  "}}
        ]
    }"#;
    assert_eq!(
        groq::parse_chat_completion(body).expect("parse"),
        "RASCUNHO DA PETIÇÃO"
    );
}

#[test]
fn groq_empty_choices_is_malformed() {
    assert!(matches!(
        groq::parse_chat_completion(r#"{"choices": []}"#),
        Err(GenerateError::Malformed(_))
    ));
}

#[test]
fn groq_missing_content_is_malformed() {
    let body = r#"{"choices": [{"message": {"role": "assistant"}}]}"#;
    assert!(matches!(
        groq::parse_chat_completion(body),
        Err(GenerateError::Malformed(_))
    ));
}

#[test]
fn groq_blank_content_is_empty_response() {
    let body = r#"{"choices": [{"message": {"content": "   "}}]}"#;
    assert_eq!(
        groq::parse_chat_completion(body),
        Err(GenerateError::EmptyResponse)
    );
}

// ── chatvolt ─────────────────────────────────────────────────────────────

#[test]
fn chatvolt_answer_field_is_accepted() {
    let body = r#"{"answer": "texto da petição", "conversationId": "abc"}"#;
    assert_eq!(
        chatvolt::parse_agent_reply(body).expect("parse"),
        "texto da petição"
    );
}

#[test]
fn chatvolt_legacy_response_field_is_accepted() {
    let body = r#"{"response": "texto da petição"}"#;
    assert_eq!(
        chatvolt::parse_agent_reply(body).expect("parse"),
        "texto da petição"
    );
}

#[test]
fn chatvolt_answer_wins_over_response() {
    let body = r#"{"answer": "novo", "response": "antigo"}"#;
    assert_eq!(chatvolt::parse_agent_reply(body).expect("parse"), "novo");
}

#[test]
fn chatvolt_missing_text_field_is_malformed() {
    assert!(matches!(
        chatvolt::parse_agent_reply(r#"{"conversationId": "abc"}"#),
        Err(GenerateError::Malformed(_))
    ));
}

#[test]
fn chatvolt_blank_answer_is_empty_response() {
    assert_eq!(
        chatvolt::parse_agent_reply(r#"{"answer": ""}"#),
        Err(GenerateError::EmptyResponse)
    );
}
