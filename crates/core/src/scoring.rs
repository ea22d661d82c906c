//! Scoring and risk-classification engine.
//!
//! A pure, deterministic mapping from `(type id, responses)` to a total
//! score, severity label, risk flags, and completion outcome. No I/O and no
//! side effects; safe to run in parallel across assessments.
//!
//! Per-type behaviour is data, not branching: each supported instrument has
//! one [`ScoringRule`] in a static table, so adding an instrument is a table
//! edit. A type without a rule scores to an empty severity with no flags.

use crate::error::{AssessmentError, AssessmentResult};
use crate::model::Responses;

/// Completion outcome of a scored assessment.
///
/// Starts as `Completed` and is upgraded to `Flagged` by a triggered risk
/// rule; it never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Flagged,
}

/// The engine's output, merged into the assessment on completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringResult {
    pub total_score: i64,
    pub severity: String,
    pub risk_flags: Vec<String>,
    pub outcome: Outcome,
}

/// Condition under which a risk rule fires.
#[derive(Debug, Clone, Copy)]
pub enum RiskTrigger {
    /// The response to a specific question is present and at least `min`.
    ItemAtLeast { question: u32, min: i64 },
    /// The total score is at least the given value.
    TotalAtLeast(i64),
}

impl RiskTrigger {
    fn fires(&self, total: i64, responses: &Responses) -> bool {
        match *self {
            RiskTrigger::ItemAtLeast { question, min } => {
                responses.get(&question).is_some_and(|&v| v >= min)
            }
            RiskTrigger::TotalAtLeast(min) => total >= min,
        }
    }
}

/// A supplementary risk rule: when the trigger fires, the outcome is forced
/// to flagged and `flag`, if any, is appended to the flag list.
///
/// `flag: None` models the instruments where a high total forces escalation
/// without adding a flag string, so a flagged assessment can carry an empty
/// flag list.
#[derive(Debug, Clone, Copy)]
pub struct RiskRule {
    pub trigger: RiskTrigger,
    pub flag: Option<&'static str>,
}

/// Per-instrument scoring behaviour.
#[derive(Debug, Clone, Copy)]
pub struct ScoringRule {
    pub type_id: &'static str,
    /// Inclusive upper bounds, ascending; the first bucket whose bound is
    /// >= the total score wins.
    pub thresholds: &'static [(i64, &'static str)],
    /// Severity for totals above every finite bound.
    pub top_severity: &'static str,
    pub risk_rules: &'static [RiskRule],
}

static SCORING_RULES: &[ScoringRule] = &[
    ScoringRule {
        type_id: "PHQ-9",
        thresholds: &[
            (4, "Minimal Depression"),
            (9, "Mild Depression"),
            (14, "Moderate Depression"),
            (19, "Moderately Severe Depression"),
        ],
        top_severity: "Severe Depression",
        risk_rules: &[
            RiskRule {
                trigger: RiskTrigger::ItemAtLeast { question: 9, min: 1 },
                flag: Some("Suicidal ideation"),
            },
            RiskRule {
                trigger: RiskTrigger::TotalAtLeast(15),
                flag: None,
            },
        ],
    },
    ScoringRule {
        type_id: "GAD-7",
        thresholds: &[
            (4, "Minimal Anxiety"),
            (9, "Mild Anxiety"),
            (14, "Moderate Anxiety"),
        ],
        top_severity: "Severe Anxiety",
        risk_rules: &[RiskRule {
            trigger: RiskTrigger::TotalAtLeast(15),
            flag: Some("Severe anxiety symptoms"),
        }],
    },
    ScoringRule {
        type_id: "BDI-II",
        thresholds: &[
            (13, "Minimal Depression"),
            (19, "Mild Depression"),
            (28, "Moderate Depression"),
        ],
        top_severity: "Severe Depression",
        risk_rules: &[
            RiskRule {
                trigger: RiskTrigger::ItemAtLeast { question: 9, min: 1 },
                flag: Some("Suicidal ideation"),
            },
            RiskRule {
                trigger: RiskTrigger::TotalAtLeast(29),
                flag: None,
            },
        ],
    },
    ScoringRule {
        type_id: "BAI",
        thresholds: &[
            (7, "Minimal Anxiety"),
            (15, "Mild Anxiety"),
            (25, "Moderate Anxiety"),
        ],
        top_severity: "Severe Anxiety",
        risk_rules: &[RiskRule {
            trigger: RiskTrigger::TotalAtLeast(26),
            flag: Some("Severe anxiety symptoms"),
        }],
    },
    ScoringRule {
        type_id: "PCL-5",
        thresholds: &[(32, "Below PTSD Threshold")],
        top_severity: "Probable PTSD",
        risk_rules: &[RiskRule {
            trigger: RiskTrigger::TotalAtLeast(33),
            flag: Some("Probable PTSD"),
        }],
    },
];

fn rule_for(type_id: &str) -> Option<&'static ScoringRule> {
    SCORING_RULES.iter().find(|r| r.type_id == type_id)
}

/// Rejects response maps that could silently corrupt a score.
///
/// Negative values, question id 0, and values beyond
/// [`MAX_RESPONSE_VALUE`](crate::constants::MAX_RESPONSE_VALUE) are
/// malformed input; the cap keeps the summed total far from `i64` overflow.
/// Unknown question ids and modest off-catalog values remain allowed (they
/// still sum and label as `"Unknown"`).
pub fn validate_responses(responses: &Responses) -> AssessmentResult<()> {
    for (&question_id, &value) in responses {
        if question_id == 0 {
            return Err(AssessmentError::InvalidResponses(
                "question ids must be positive".into(),
            ));
        }
        if value < 0 {
            return Err(AssessmentError::InvalidResponses(format!(
                "question {question_id} has negative value {value}"
            )));
        }
        if value > crate::constants::MAX_RESPONSE_VALUE {
            return Err(AssessmentError::InvalidResponses(format!(
                "question {question_id} has value {value} above the maximum of {}",
                crate::constants::MAX_RESPONSE_VALUE
            )));
        }
    }
    Ok(())
}

/// Scores a response set for the given assessment type.
///
/// The total is the sum of every submitted value; absent question ids
/// contribute nothing. Severity is a step function over the total, and the
/// instrument's risk rules may append flags and force the flagged outcome.
pub fn evaluate(type_id: &str, responses: &Responses) -> ScoringResult {
    let total_score: i64 = responses.values().sum();

    let Some(rule) = rule_for(type_id) else {
        return ScoringResult {
            total_score,
            severity: String::new(),
            risk_flags: Vec::new(),
            outcome: Outcome::Completed,
        };
    };

    let severity = rule
        .thresholds
        .iter()
        .find(|&&(upper, _)| total_score <= upper)
        .map(|&(_, label)| label)
        .unwrap_or(rule.top_severity)
        .to_string();

    let mut risk_flags = Vec::new();
    let mut outcome = Outcome::Completed;
    for risk in rule.risk_rules {
        if risk.trigger.fires(total_score, responses) {
            if let Some(flag) = risk.flag {
                risk_flags.push(flag.to_string());
            }
            outcome = Outcome::Flagged;
        }
    }

    ScoringResult {
        total_score,
        severity,
        risk_flags,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_RESPONSE_VALUE;

    fn responses(pairs: &[(u32, i64)]) -> Responses {
        pairs.iter().copied().collect()
    }

    /// Spreads a target total across the first questions, 3 points each.
    fn total_of(total: i64) -> Responses {
        let mut out = Responses::new();
        let mut remaining = total;
        let mut id = 1;
        while remaining > 0 {
            let v = remaining.min(3);
            out.insert(id, v);
            remaining -= v;
            id += 1;
        }
        out
    }

    #[test]
    fn all_minimum_answers_score_to_lowest_bucket() {
        let registry = crate::templates::TemplateRegistry::builtin();
        let expect = [
            ("PHQ-9", "Minimal Depression"),
            ("GAD-7", "Minimal Anxiety"),
            ("BDI-II", "Minimal Depression"),
            ("BAI", "Minimal Anxiety"),
            ("PCL-5", "Below PTSD Threshold"),
        ];
        for (type_id, severity) in expect {
            let template = registry.resolve(type_id).unwrap();
            let zeros: Responses = template
                .questions
                .iter()
                .map(|q| (q.id, q.options[0].value))
                .collect();
            let result = evaluate(type_id, &zeros);
            assert_eq!(result.total_score, 0, "{type_id}");
            assert_eq!(result.severity, severity, "{type_id}");
            assert_eq!(result.outcome, Outcome::Completed, "{type_id}");
            assert!(result.risk_flags.is_empty(), "{type_id}");
        }
    }

    #[test]
    fn total_is_order_independent() {
        let forward = responses(&[(1, 3), (2, 2), (3, 1)]);
        let backward = responses(&[(3, 1), (2, 2), (1, 3)]);
        assert_eq!(
            evaluate("GAD-7", &forward).total_score,
            evaluate("GAD-7", &backward).total_score
        );
    }

    #[test]
    fn absent_questions_contribute_nothing() {
        let partial = responses(&[(2, 2)]);
        assert_eq!(evaluate("PHQ-9", &partial).total_score, 2);
    }

    #[test]
    fn phq9_moderate_to_moderately_severe_boundary() {
        let fourteen = evaluate("PHQ-9", &total_of(14));
        assert_eq!(fourteen.severity, "Moderate Depression");
        assert_eq!(fourteen.outcome, Outcome::Completed);

        let fifteen = evaluate("PHQ-9", &total_of(15));
        assert_eq!(fifteen.severity, "Moderately Severe Depression");
        assert_eq!(fifteen.outcome, Outcome::Flagged);
        // The total-score rule forces flagged without adding a flag string.
        assert!(fifteen.risk_flags.is_empty());
    }

    #[test]
    fn phq9_item_nine_flags_suicidal_ideation_at_any_total() {
        let mut low: Responses = (1..=8).map(|id| (id, 0)).collect();
        low.insert(9, 1);

        let result = evaluate("PHQ-9", &low);
        assert_eq!(result.total_score, 1);
        assert_eq!(result.severity, "Minimal Depression");
        assert_eq!(result.outcome, Outcome::Flagged);
        assert_eq!(result.risk_flags, vec!["Suicidal ideation".to_string()]);
    }

    #[test]
    fn phq9_severe_with_ideation_carries_single_flag() {
        let maxed: Responses = (1..=9).map(|id| (id, 3)).collect();
        let result = evaluate("PHQ-9", &maxed);
        assert_eq!(result.total_score, 27);
        assert_eq!(result.severity, "Severe Depression");
        assert_eq!(result.outcome, Outcome::Flagged);
        assert_eq!(result.risk_flags, vec!["Suicidal ideation".to_string()]);
    }

    #[test]
    fn gad7_max_score_is_severe_and_flagged() {
        let maxed: Responses = (1..=7).map(|id| (id, 3)).collect();
        let result = evaluate("GAD-7", &maxed);
        assert_eq!(result.total_score, 21);
        assert_eq!(result.severity, "Severe Anxiety");
        assert_eq!(result.outcome, Outcome::Flagged);
        assert_eq!(result.risk_flags, vec!["Severe anxiety symptoms".to_string()]);
    }

    #[test]
    fn gad7_fourteen_is_moderate_and_unflagged() {
        let result = evaluate("GAD-7", &total_of(14));
        assert_eq!(result.severity, "Moderate Anxiety");
        assert_eq!(result.outcome, Outcome::Completed);
    }

    #[test]
    fn bdi_twenty_nine_flags_without_flag_string() {
        let result = evaluate("BDI-II", &total_of(29));
        assert_eq!(result.severity, "Severe Depression");
        assert_eq!(result.outcome, Outcome::Flagged);
        assert!(result.risk_flags.is_empty());
    }

    #[test]
    fn bdi_item_nine_flags_suicidal_ideation() {
        let result = evaluate("BDI-II", &responses(&[(9, 2)]));
        assert_eq!(result.outcome, Outcome::Flagged);
        assert_eq!(result.risk_flags, vec!["Suicidal ideation".to_string()]);
    }

    #[test]
    fn bai_boundaries() {
        assert_eq!(evaluate("BAI", &total_of(7)).severity, "Minimal Anxiety");
        assert_eq!(evaluate("BAI", &total_of(25)).severity, "Moderate Anxiety");

        let flagged = evaluate("BAI", &total_of(26));
        assert_eq!(flagged.severity, "Severe Anxiety");
        assert_eq!(flagged.outcome, Outcome::Flagged);
        assert_eq!(flagged.risk_flags, vec!["Severe anxiety symptoms".to_string()]);
    }

    #[test]
    fn pcl5_threshold_at_thirty_three() {
        let below = evaluate("PCL-5", &total_of(32));
        assert_eq!(below.severity, "Below PTSD Threshold");
        assert_eq!(below.outcome, Outcome::Completed);

        let above = evaluate("PCL-5", &total_of(33));
        assert_eq!(above.severity, "Probable PTSD");
        assert_eq!(above.outcome, Outcome::Flagged);
        assert_eq!(above.risk_flags, vec!["Probable PTSD".to_string()]);
    }

    #[test]
    fn unruled_type_scores_with_empty_severity() {
        let result = evaluate("MMPI-2", &responses(&[(1, 2), (2, 3)]));
        assert_eq!(result.total_score, 5);
        assert_eq!(result.severity, "");
        assert_eq!(result.outcome, Outcome::Completed);
        assert!(result.risk_flags.is_empty());
    }

    #[test]
    fn validation_rejects_negative_values() {
        let err = validate_responses(&responses(&[(1, -2)])).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidResponses(_)));
    }

    #[test]
    fn validation_rejects_question_id_zero() {
        let err = validate_responses(&responses(&[(0, 1)])).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidResponses(_)));
    }

    #[test]
    fn validation_rejects_values_large_enough_to_overflow_the_total() {
        // Two such values would wrap the summed total if they got through.
        let err = validate_responses(&responses(&[(1, i64::MAX), (2, 1)])).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidResponses(_)));

        let err = validate_responses(&responses(&[(3, MAX_RESPONSE_VALUE + 1)])).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidResponses(_)));

        assert!(validate_responses(&responses(&[(3, MAX_RESPONSE_VALUE)])).is_ok());
    }

    #[test]
    fn validation_allows_partial_and_off_catalog_responses() {
        assert!(validate_responses(&responses(&[(2, 1), (40, 9)])).is_ok());
        assert!(validate_responses(&Responses::new()).is_ok());
    }

    #[test]
    fn every_rule_has_ascending_thresholds() {
        for rule in super::SCORING_RULES {
            for pair in rule.thresholds.windows(2) {
                assert!(pair[0].0 < pair[1].0, "{}", rule.type_id);
            }
        }
    }
}
