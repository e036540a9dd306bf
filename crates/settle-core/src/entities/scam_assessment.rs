//! Scam assessment entity - the stored result of one scam check

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{FlagSeverity, InputKind, RecordId, RiskLevel, ScamCategory};

/// Maximum accepted length of submitted content
pub const MAX_INPUT_LEN: usize = 10_000;

/// A single heuristic that matched the submitted content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlag {
    pub code: String,
    pub title: String,
    pub description: String,
    pub severity: FlagSeverity,
    pub category: ScamCategory,
}

/// Persisted scam check: the submitted content plus the analysis outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScamAssessment {
    pub id: RecordId,
    pub user_id: RecordId,
    pub input_kind: InputKind,
    pub input_content: String,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub category: ScamCategory,
    pub red_flags: Vec<RedFlag>,
    pub safe_next_steps: Vec<String>,
    pub reported_to_authorities: bool,
    pub created_at: DateTime<Utc>,
}

impl ScamAssessment {
    /// Check whether any matched flag is a danger-severity flag
    #[must_use]
    pub fn has_danger_flag(&self) -> bool {
        self.red_flags
            .iter()
            .any(|f| f.severity == FlagSeverity::Danger)
    }

    /// Mark this assessment as reported to the authorities
    pub fn mark_reported(&mut self) {
        self.reported_to_authorities = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_danger_flag() {
        let mut assessment = ScamAssessment {
            id: RecordId::new(1),
            user_id: RecordId::new(2),
            input_kind: InputKind::Text,
            input_content: "hello".to_string(),
            risk_score: 10,
            risk_level: RiskLevel::Low,
            category: ScamCategory::Other,
            red_flags: vec![RedFlag {
                code: "URGENCY".to_string(),
                title: "Urgency pressure".to_string(),
                description: String::new(),
                severity: FlagSeverity::Warning,
                category: ScamCategory::Other,
            }],
            safe_next_steps: Vec::new(),
            reported_to_authorities: false,
            created_at: Utc::now(),
        };

        assert!(!assessment.has_danger_flag());

        assessment.red_flags.push(RedFlag {
            code: "GIFT_CARDS".to_string(),
            title: "Gift card payment".to_string(),
            description: String::new(),
            severity: FlagSeverity::Danger,
            category: ScamCategory::Other,
        });
        assert!(assessment.has_danger_flag());
    }
}
