use super::domain::{LeadField, LeadRecord};
use super::views::LeadDisplay;
use super::workflow::LeadWorkflow;
use serde::Serialize;

/// Scores at or above this mark are worth same-week outreach.
pub const HIGH_PRIORITY_SCORE: u8 = 70;

#[derive(Debug, Clone, Serialize)]
pub struct LeadBatchEntry {
    pub row: usize,
    pub company_name: String,
    pub contact_name: String,
    pub lead_score: u8,
    pub display: LeadDisplay,
}

#[derive(Debug, Clone, Serialize)]
pub struct MissingFieldCount {
    pub field: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadBatchSummary {
    pub total: usize,
    pub average_score: f32,
    pub high_priority: usize,
    pub missing_field_counts: Vec<MissingFieldCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadBatchReport {
    pub entries: Vec<LeadBatchEntry>,
    pub summary: LeadBatchSummary,
}

impl LeadBatchReport {
    pub fn from_records(records: &[LeadRecord]) -> Self {
        let entries: Vec<LeadBatchEntry> = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let evaluation = LeadWorkflow::evaluate(record);
                LeadBatchEntry {
                    row: index + 1,
                    company_name: record.company_name.trim().to_string(),
                    contact_name: record.contact_name.trim().to_string(),
                    lead_score: evaluation.insight.lead_score,
                    display: evaluation.display(record),
                }
            })
            .collect();

        let summary = summarize(&entries);
        Self { entries, summary }
    }

    /// Entries ordered by computed score, highest first. Ties keep row order.
    pub fn ranked(&self) -> Vec<&LeadBatchEntry> {
        let mut ranked: Vec<&LeadBatchEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.lead_score.cmp(&a.lead_score));
        ranked
    }
}

fn summarize(entries: &[LeadBatchEntry]) -> LeadBatchSummary {
    let total = entries.len();
    let average_score = if total > 0 {
        let sum: u32 = entries.iter().map(|entry| entry.lead_score as u32).sum();
        ((sum as f32 / total as f32) * 10.0).round() / 10.0
    } else {
        0.0
    };

    let high_priority = entries
        .iter()
        .filter(|entry| entry.lead_score >= HIGH_PRIORITY_SCORE)
        .count();

    let missing_field_counts = LeadField::REQUIRED
        .into_iter()
        .map(|field| MissingFieldCount {
            field: field.label(),
            count: entries
                .iter()
                .filter(|entry| entry.display.missing_fields.contains(&field.label()))
                .count(),
        })
        .collect();

    LeadBatchSummary {
        total,
        average_score,
        high_priority,
        missing_field_counts,
    }
}
