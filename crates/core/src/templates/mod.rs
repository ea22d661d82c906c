//! Assessment template registry.
//!
//! Templates are compiled-in, immutable definitions of the supported
//! psychometric instruments: ordered questions, each with ordered response
//! options carrying the point contribution for that choice. The registry is
//! built once at startup and shared read-only; nothing mutates it afterwards.
//!
//! An unknown type id is a caller error ([`AssessmentError::TemplateNotFound`]),
//! never a crash. Per-item lookups during label resolution degrade silently
//! to the `"Unknown"` sentinel instead.

mod catalog;

use crate::constants::UNKNOWN_OPTION_LABEL;
use crate::error::{AssessmentError, AssessmentResult};
use crate::model::{LabeledResponse, Responses};
use std::collections::BTreeMap;

/// One selectable answer: the points it contributes and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseOption {
    pub value: i64,
    pub label: &'static str,
}

/// One questionnaire item with its ordered response options.
///
/// Ids are small positive integers, stable across the template's lifetime —
/// scoring rules reference them by literal id (e.g. "question 9").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub options: Vec<ResponseOption>,
}

/// The fixed question/option definition for one assessment type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentTemplate {
    pub type_id: &'static str,
    pub display_name: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub time_estimate: &'static str,
    pub questions: Vec<Question>,
}

impl AssessmentTemplate {
    /// Finds a question by its stable id.
    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Resolves the display label for a `(question id, value)` pair.
    ///
    /// Returns `None` when either the question or an option with that exact
    /// value is missing from the template.
    pub fn option_label(&self, question_id: u32, value: i64) -> Option<&'static str> {
        self.question(question_id)?
            .options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
    }

    /// Converts a raw response map into the persisted labeled form.
    ///
    /// Lookup misses (stale question id, off-catalog value) label as
    /// `"Unknown"` rather than erroring.
    pub fn label_responses(&self, responses: &Responses) -> Vec<LabeledResponse> {
        responses
            .iter()
            .map(|(&question_id, &value)| LabeledResponse {
                question_id,
                value,
                label: self
                    .option_label(question_id, value)
                    .unwrap_or(UNKNOWN_OPTION_LABEL)
                    .to_string(),
            })
            .collect()
    }

    /// Highest total score reachable by answering every question with its
    /// maximum-valued option.
    pub fn max_score(&self) -> i64 {
        self.questions
            .iter()
            .map(|q| q.options.iter().map(|o| o.value).max().unwrap_or(0))
            .sum()
    }
}

/// Read-only, process-wide registry of the compiled-in templates.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: BTreeMap<&'static str, AssessmentTemplate>,
}

impl TemplateRegistry {
    /// Builds the registry of supported instruments: PHQ-9, GAD-7, BDI-II,
    /// BAI, and PCL-5.
    pub fn builtin() -> Self {
        let templates = catalog::all()
            .into_iter()
            .map(|t| (t.type_id, t))
            .collect();
        Self { templates }
    }

    pub fn lookup(&self, type_id: &str) -> Option<&AssessmentTemplate> {
        self.templates.get(type_id)
    }

    /// Like [`lookup`](Self::lookup), mapping a miss to `TemplateNotFound`.
    pub fn resolve(&self, type_id: &str) -> AssessmentResult<&AssessmentTemplate> {
        self.lookup(type_id)
            .ok_or_else(|| AssessmentError::TemplateNotFound(type_id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssessmentTemplate> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
