//! Correction report types
//!
//! A correction pass runs in two stages (spelling, then grammar). Each stage
//! that changed the text contributes one [`CorrectionRecord`] to the report.

use serde::{Deserialize, Serialize};

/// Which stage produced a correction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionKind {
    Spelling,
    Grammar,
}

/// One recorded change: the text before and after a stage that modified it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRecord {
    #[serde(rename = "type")]
    pub kind: CorrectionKind,
    pub original: String,
    pub corrected: String,
}

/// Response body for a correction pass.
///
/// `corrections` is omitted entirely when neither stage changed the text.
/// This is an observable contract: clients distinguish "nothing to fix" by
/// the absence of the field, not by an empty array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionReport {
    pub original_text: String,
    pub corrected_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrections: Option<Vec<CorrectionRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CorrectionKind::Spelling).unwrap(),
            "\"spelling\""
        );
        assert_eq!(
            serde_json::to_string(&CorrectionKind::Grammar).unwrap(),
            "\"grammar\""
        );
    }

    #[test]
    fn record_uses_type_field_on_the_wire() {
        let record = CorrectionRecord {
            kind: CorrectionKind::Spelling,
            original: "Ths".to_string(),
            corrected: "This".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "spelling");
    }

    #[test]
    fn corrections_field_absent_when_none() {
        let report = CorrectionReport {
            original_text: "fine".to_string(),
            corrected_text: "fine".to_string(),
            corrections: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("corrections").is_none());
    }
}
