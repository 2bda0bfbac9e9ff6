use super::domain::{Insight, LeadField, LeadRecord};
use super::email::guess_email;
use super::scoring::InsightEngine;
use super::views::{DisplayValue, LeadDisplay};
use serde::Serialize;

/// Email resolved for the lead plus the freshly computed insight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadEvaluation {
    pub email: DisplayValue,
    pub insight: Insight,
}

impl LeadEvaluation {
    /// Apply the record's overrides on top of the computed values.
    pub fn display(&self, record: &LeadRecord) -> LeadDisplay {
        LeadDisplay {
            email: self.email.clone(),
            lead_score: DisplayValue::resolve(
                record.present(LeadField::LeadScore),
                self.insight.lead_score.to_string(),
            ),
            score_reason: DisplayValue::resolve(
                record.present(LeadField::ScoreReason),
                self.insight.score_reason.clone(),
            ),
            personalized_message: DisplayValue::resolve(
                record.present(LeadField::PersonalizedMessage),
                self.insight.personalized_message.clone(),
            ),
            missing_fields: self.insight.missing_fields.clone(),
        }
    }
}

/// Composes email guessing and insight scoring over one record snapshot.
pub struct LeadWorkflow;

impl LeadWorkflow {
    pub fn evaluate(record: &LeadRecord) -> LeadEvaluation {
        let guessed = guess_email(record.contact_name.trim(), record.company_name.trim());
        let email = DisplayValue::resolve(record.present(LeadField::EmailGuess), guessed);

        let mut snapshot = record.clone();
        snapshot.email_guess = email.value.clone();
        let insight = InsightEngine::compute(&snapshot);

        LeadEvaluation { email, insight }
    }
}
