//! Correction pipeline
//!
//! Sequences spell correction and grammar correction and builds a
//! structured change report: one `spelling` record iff the spell stage
//! changed the text, one `grammar` record iff the grammar stage changed the
//! spell-corrected text. When both stages are no-ops the `corrections`
//! field is absent from the report entirely; that absence is part of the
//! contract, not an incidental omission.

use scribe_core::{
    CorrectionKind, CorrectionRecord, CorrectionReport, Error, Result,
};

use crate::grammar::GrammarCorrector;
use crate::spell::SpellCorrector;

/// Two-stage correction orchestrator.
///
/// Either stage may be disabled (`None`), in which case it acts as the
/// identity and records nothing.
pub struct CorrectionPipeline {
    spell: Option<SpellCorrector>,
    grammar: Option<GrammarCorrector>,
}

impl CorrectionPipeline {
    pub fn new(spell: Option<SpellCorrector>, grammar: Option<GrammarCorrector>) -> Self {
        if spell.is_none() {
            tracing::info!("spell correction disabled");
        }
        if grammar.is_none() {
            tracing::info!("grammar correction disabled");
        }
        Self { spell, grammar }
    }

    /// Correct `text`, reporting what each stage changed.
    ///
    /// The grammar stage always receives the spell stage's output, never
    /// the raw input.
    pub async fn correct(&self, text: &str) -> Result<CorrectionReport> {
        let spell_checked = match &self.spell {
            Some(corrector) => corrector.correct_spelling(text),
            None => text.to_string(),
        };

        let grammar_corrected = match &self.grammar {
            Some(corrector) => corrector.correct_grammar(&spell_checked).await?,
            None => spell_checked.clone(),
        };

        let mut corrections = Vec::new();
        if spell_checked != text {
            corrections.push(CorrectionRecord {
                kind: CorrectionKind::Spelling,
                original: text.to_string(),
                corrected: spell_checked.clone(),
            });
        }
        if grammar_corrected != spell_checked {
            corrections.push(CorrectionRecord {
                kind: CorrectionKind::Grammar,
                original: spell_checked,
                corrected: grammar_corrected.clone(),
            });
        }

        tracing::debug!(
            changed = !corrections.is_empty(),
            stages = corrections.len(),
            "correction pass complete"
        );

        Ok(CorrectionReport {
            original_text: text.to_string(),
            corrected_text: grammar_corrected,
            corrections: (!corrections.is_empty()).then_some(corrections),
        })
    }

    /// Correct a JSON value, coercing it to text first.
    ///
    /// The report's `original_text` is the coerced string.
    pub async fn correct_value(&self, value: &serde_json::Value) -> Result<CorrectionReport> {
        let text = coerce_text(value)?;
        self.correct(&text).await
    }
}

/// Coerce a JSON value to its textual representation.
///
/// Strings pass through; numbers, booleans and null coerce to their JSON
/// text. Arrays and objects have no sensible textual form and are rejected
/// with the offending value echoed back.
pub fn coerce_text(value: &serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Number(_)
        | serde_json::Value::Bool(_)
        | serde_json::Value::Null => Ok(value.to_string()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            Err(Error::InputCoercion {
                value: value.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use scribe_core::{RewriteGrammar, SpellSuggest};
    use std::collections::HashMap;
    use std::sync::Arc;

    struct TableSuggester(HashMap<&'static str, &'static str>);

    impl SpellSuggest for TableSuggester {
        fn suggest(&self, word: &str) -> Option<String> {
            self.0.get(word).map(|s| s.to_string())
        }
    }

    /// Rewrites the tagged text by applying a fixed substitution, or acts
    /// as the identity when the table is empty
    struct TableRewriter(HashMap<&'static str, &'static str>);

    #[async_trait]
    impl RewriteGrammar for TableRewriter {
        async fn rewrite(&self, tagged: &str) -> scribe_core::Result<String> {
            let text = tagged.strip_prefix("grammar: ").unwrap_or(tagged);
            let mut out = text.to_string();
            for (from, to) in &self.0 {
                out = out.replace(from, to);
            }
            Ok(out)
        }
    }

    fn pipeline(
        spell: HashMap<&'static str, &'static str>,
        grammar: HashMap<&'static str, &'static str>,
    ) -> CorrectionPipeline {
        CorrectionPipeline::new(
            Some(SpellCorrector::new(Arc::new(TableSuggester(spell)))),
            Some(GrammarCorrector::new(Arc::new(TableRewriter(grammar)))),
        )
    }

    #[tokio::test]
    async fn no_changes_omits_corrections_entirely() {
        let pipeline = pipeline(HashMap::new(), HashMap::new());
        let report = pipeline.correct("This is fine.").await.unwrap();
        assert_eq!(report.original_text, "This is fine.");
        assert_eq!(report.corrected_text, "This is fine.");
        assert!(report.corrections.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("corrections").is_none());
    }

    #[tokio::test]
    async fn spelling_only_yields_one_spelling_record() {
        let pipeline = pipeline(
            HashMap::from([("Ths", "This"), ("tst", "test")]),
            HashMap::new(),
        );
        let report = pipeline.correct("Ths is a tst.").await.unwrap();
        assert_eq!(report.corrected_text, "This is a test.");

        let corrections = report.corrections.unwrap();
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].kind, CorrectionKind::Spelling);
        assert_eq!(corrections[0].original, "Ths is a tst.");
        assert_eq!(corrections[0].corrected, "This is a test.");
    }

    #[tokio::test]
    async fn both_stages_yield_two_records_in_order() {
        let pipeline = pipeline(
            HashMap::from([("tst", "test")]),
            HashMap::from([("a test", "the test")]),
        );
        let report = pipeline.correct("run a tst").await.unwrap();
        assert_eq!(report.corrected_text, "run the test");

        let corrections = report.corrections.unwrap();
        assert_eq!(corrections.len(), 2);
        assert_eq!(corrections[0].kind, CorrectionKind::Spelling);
        assert_eq!(corrections[1].kind, CorrectionKind::Grammar);
        // Grammar record's original is the spell stage output
        assert_eq!(corrections[1].original, "run a test");
    }

    #[tokio::test]
    async fn grammar_receives_spell_output_not_raw_input() {
        // Spell fixes "tst" -> "test"; the grammar table only matches the
        // corrected form, proving the raw input never reaches it.
        let pipeline = pipeline(
            HashMap::from([("tst", "test")]),
            HashMap::from([("test", "trial")]),
        );
        let report = pipeline.correct("tst").await.unwrap();
        assert_eq!(report.corrected_text, "trial");
    }

    #[tokio::test]
    async fn disabled_stages_act_as_identity() {
        let pipeline = CorrectionPipeline::new(None, None);
        let report = pipeline.correct("Ths is a tst.").await.unwrap();
        assert_eq!(report.corrected_text, "Ths is a tst.");
        assert!(report.corrections.is_none());
    }

    #[tokio::test]
    async fn scalar_json_values_are_coerced() {
        let pipeline = CorrectionPipeline::new(None, None);
        let report = pipeline
            .correct_value(&serde_json::json!(42))
            .await
            .unwrap();
        assert_eq!(report.original_text, "42");

        let report = pipeline
            .correct_value(&serde_json::json!(null))
            .await
            .unwrap();
        assert_eq!(report.original_text, "null");
    }

    #[tokio::test]
    async fn composite_json_values_are_rejected_with_echo() {
        let pipeline = CorrectionPipeline::new(None, None);
        let err = pipeline
            .correct_value(&serde_json::json!({"not": "text"}))
            .await
            .unwrap_err();
        match err {
            Error::InputCoercion { value } => {
                assert_eq!(value, serde_json::json!({"not": "text"}));
            }
            other => panic!("expected InputCoercion, got {other:?}"),
        }
    }
}
