//! HTTP contract tests with deterministic fake collaborators

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use scribe_config::Settings;
use scribe_core::{
    Generation, GenerationParameters, Paraphrase, Result, RewriteGrammar, SpellSuggest,
    Suggestion, Summarize, SummaryParams, TextGenerator, Translate,
};
use scribe_server::{create_router, AppState, Collaborators};

struct FakeSpell;

impl SpellSuggest for FakeSpell {
    fn suggest(&self, word: &str) -> Option<String> {
        match word {
            "Ths" => Some("This".to_string()),
            "tst" => Some("test".to_string()),
            _ => None,
        }
    }
}

/// Identity rewrite: strips the instruction tag and returns the text
struct IdentityRewriter;

#[async_trait]
impl RewriteGrammar for IdentityRewriter {
    async fn rewrite(&self, tagged: &str) -> Result<String> {
        Ok(tagged.strip_prefix("grammar: ").unwrap_or(tagged).to_string())
    }
}

struct FakeSummarizer;

#[async_trait]
impl Summarize for FakeSummarizer {
    async fn summarize(&self, _chunk: &str, _params: &SummaryParams) -> Result<String> {
        Ok("chunk summary".to_string())
    }
}

struct FakeParaphraser;

#[async_trait]
impl Paraphrase for FakeParaphraser {
    async fn paraphrase(&self, text: &str) -> Result<String> {
        Ok(format!("rephrased: {}", text))
    }
}

struct FakeTranslator;

#[async_trait]
impl Translate for FakeTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        Ok(format!("translated: {}", text))
    }
}

struct FakeGenerator;

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<Generation> {
        Ok(Generation {
            generated_text: format!("{} and then some", prompt),
            model: "fake-llm".to_string(),
            parameters: GenerationParameters {
                architecture: "fake".to_string(),
                temperature: 0.7,
                top_p: 0.95,
                tokens_generated: 4,
            },
        })
    }

    async fn analyze(&self, _text: &str) -> Result<Vec<Suggestion>> {
        let raw = vec![Suggestion {
            id: 0,
            category: "Clarity".to_string(),
            message: "Could be clearer".to_string(),
            severity: "low".to_string(),
            original_text: "it".to_string(),
            suggested_text: "the report".to_string(),
            scores: None,
        }];
        Ok(Suggestion::normalize(raw))
    }
}

fn test_app() -> axum::Router {
    let state = AppState::with_collaborators(
        Settings::default(),
        Collaborators {
            spell: Arc::new(FakeSpell),
            rewriter: Arc::new(IdentityRewriter),
            summarizer: Arc::new(FakeSummarizer),
            paraphraser: Arc::new(FakeParaphraser),
            translator: Arc::new(FakeTranslator),
            generator: Arc::new(FakeGenerator),
            summarization_model: "BART-large-cnn".to_string(),
        },
    );
    create_router(state)
}

async fn post_json(
    app: axum::Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_reports_service_name() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn fix_grammar_reports_spelling_corrections() {
    let (status, json) = post_json(
        test_app(),
        "/fix_grammar",
        serde_json::json!({ "text": "Ths is a tst." }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["original_text"], "Ths is a tst.");
    assert_eq!(json["corrected_text"], "This is a test.");

    let corrections = json["corrections"].as_array().unwrap();
    assert_eq!(corrections.len(), 1);
    assert_eq!(corrections[0]["type"], "spelling");
    assert_eq!(corrections[0]["original"], "Ths is a tst.");
    assert_eq!(corrections[0]["corrected"], "This is a test.");
}

#[tokio::test]
async fn fix_grammar_omits_corrections_when_clean() {
    let (status, json) = post_json(
        test_app(),
        "/fix_grammar",
        serde_json::json!({ "text": "This is a test." }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["corrected_text"], "This is a test.");
    assert!(json.get("corrections").is_none());
}

#[tokio::test]
async fn fix_grammar_coerces_scalar_input() {
    let (status, json) =
        post_json(test_app(), "/fix_grammar", serde_json::json!({ "text": 42 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["original_text"], "42");
}

#[tokio::test]
async fn fix_grammar_treats_missing_text_as_empty() {
    let (status, json) = post_json(test_app(), "/fix_grammar", serde_json::json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["original_text"], "");
    assert_eq!(json["corrected_text"], "");
    assert!(json.get("corrections").is_none());
}

#[tokio::test]
async fn fix_grammar_rejects_composite_input_with_echo() {
    let (status, json) = post_json(
        test_app(),
        "/fix_grammar",
        serde_json::json!({ "text": ["not", "text"] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Could not convert input to string"));
    assert_eq!(json["original_text"], serde_json::json!(["not", "text"]));
}

#[tokio::test]
async fn summarize_reports_chunks_and_ratio() {
    // 2500 chars with the default 1024 bound -> 3 chunks; the fake emits
    // "chunk summary" per chunk, joined -> 41 chars -> 1.6%
    let text = "a".repeat(2500);
    let (status, json) =
        post_json(test_app(), "/summarize", serde_json::json!({ "text": text })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["summary"],
        "chunk summary chunk summary chunk summary"
    );
    assert_eq!(json["model"], "BART-large-cnn");
    assert_eq!(json["processing"]["chunks_processed"], 3);
    assert_eq!(json["processing"]["compression_ratio"], "1.6%");
}

#[tokio::test]
async fn summarize_empty_input_returns_sentinel() {
    let (status, json) =
        post_json(test_app(), "/summarize", serde_json::json!({ "text": "" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"], "");
    assert_eq!(json["processing"]["chunks_processed"], 0);
    assert_eq!(json["processing"]["compression_ratio"], "0.0%");
}

#[tokio::test]
async fn generate_forwards_to_hosted_llm() {
    let (status, json) = post_json(
        test_app(),
        "/generate",
        serde_json::json!({ "prompt": "Once upon a time" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["generated_text"], "Once upon a time and then some");
    assert_eq!(json["model"], "fake-llm");
    assert_eq!(json["parameters"]["tokens_generated"], 4);
}

#[tokio::test]
async fn analyze_text_rejects_empty_input() {
    let (status, json) = post_json(
        test_app(),
        "/analyze_text",
        serde_json::json!({ "text": "   " }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["suggestions"], serde_json::json!([]));
    assert_eq!(json["error"], "No text provided for analysis");
}

#[tokio::test]
async fn analyze_text_returns_normalized_suggestions() {
    let (status, json) = post_json(
        test_app(),
        "/analyze_text",
        serde_json::json!({ "text": "it is unclear" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let suggestions = json["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["id"], 0);
    // Default scores are back-filled when the model omits them
    assert_eq!(suggestions[0]["scores"]["readability"], 7.5);
}

#[tokio::test]
async fn rewrite_and_translate_pass_through() {
    let (status, json) = post_json(
        test_app(),
        "/rewrite",
        serde_json::json!({ "text": "hello there" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rewritten_text"], "rephrased: hello there");

    let (status, json) = post_json(
        test_app(),
        "/translate",
        serde_json::json!({ "text": "hello there" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["translated_text"], "translated: hello there");
}

#[tokio::test]
async fn collaborator_outage_is_surfaced_with_message() {
    struct FailingSummarizer;

    #[async_trait]
    impl Summarize for FailingSummarizer {
        async fn summarize(&self, _c: &str, _p: &SummaryParams) -> Result<String> {
            Err(scribe_core::Error::Collaborator(
                "model server unreachable".to_string(),
            ))
        }
    }

    let state = AppState::with_collaborators(
        Settings::default(),
        Collaborators {
            spell: Arc::new(FakeSpell),
            rewriter: Arc::new(IdentityRewriter),
            summarizer: Arc::new(FailingSummarizer),
            paraphraser: Arc::new(FakeParaphraser),
            translator: Arc::new(FakeTranslator),
            generator: Arc::new(FakeGenerator),
            summarization_model: "BART-large-cnn".to_string(),
        },
    );

    let (status, json) = post_json(
        create_router(state),
        "/summarize",
        serde_json::json!({ "text": "some document" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("model server unreachable"));
}
