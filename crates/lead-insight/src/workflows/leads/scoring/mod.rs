mod rules;

pub use rules::{DECISION_MAKER_PATTERNS, PAIN_KEYWORD_WEIGHTS};

use super::domain::{Insight, LeadField, LeadRecord};
use super::message::compose_message;

const MIN_SCORE: i16 = 1;
const MAX_SCORE: i16 = 100;

/// Stateless engine turning a lead snapshot into a scored, explained insight.
pub struct InsightEngine;

impl InsightEngine {
    /// Score the record, explain the score, and draft outreach. Never fails.
    pub fn compute(record: &LeadRecord) -> Insight {
        let sheet = rules::score_record(record);
        let lead_score = sheet.total_score.clamp(MIN_SCORE, MAX_SCORE) as u8;

        let missing_fields: Vec<&'static str> =
            sheet.missing.iter().map(|field| field.label()).collect();

        let mut sentences: Vec<String> = sheet
            .components
            .iter()
            .map(|component| component.notes.clone())
            .collect();
        sentences.push(closing_sentence(&missing_fields));

        Insight {
            lead_score,
            score_reason: sentences.join(" "),
            personalized_message: compose_message(record),
            missing_fields,
            components: sheet.components,
        }
    }

    /// Labels of required fields left empty, in rationale order.
    pub fn missing_fields(record: &LeadRecord) -> Vec<&'static str> {
        LeadField::REQUIRED
            .into_iter()
            .filter(|field| record.present(*field).is_none())
            .map(LeadField::label)
            .collect()
    }

    pub fn is_decision_maker(job_title: &str) -> bool {
        rules::is_decision_maker(job_title)
    }

    /// Keywords found in the pain-point text with their weights, in table order.
    pub fn pain_keyword_matches(pain_points: &str) -> Vec<(&'static str, i16)> {
        rules::matched_pain_keywords(pain_points)
    }

    pub fn headcount(company_size: &str) -> Option<u64> {
        rules::extract_headcount(company_size)
    }
}

fn closing_sentence(missing_fields: &[&'static str]) -> String {
    if missing_fields.is_empty() {
        "Key qualification fields are complete.".to_string()
    } else {
        format!("Missing context for: {}.", missing_fields.join(", "))
    }
}
