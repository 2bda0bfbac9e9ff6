use super::domain::{LeadField, LeadRecord};
use super::views::LeadDisplay;
use super::workflow::{LeadEvaluation, LeadWorkflow};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Editable lead held by a host surface. The record is the only state; the
/// evaluation is a cached projection keyed by the record's hash.
#[derive(Debug, Default)]
pub struct LeadSession {
    record: LeadRecord,
    cached: Option<(u64, LeadEvaluation)>,
}

impl LeadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: LeadRecord) -> Self {
        Self {
            record,
            cached: None,
        }
    }

    pub fn record(&self) -> &LeadRecord {
        &self.record
    }

    pub fn set_field(&mut self, field: LeadField, value: impl Into<String>) {
        self.record.set(field, value);
    }

    pub fn reset(&mut self) {
        self.record = LeadRecord::default();
    }

    pub fn evaluation(&mut self) -> &LeadEvaluation {
        let fingerprint = record_fingerprint(&self.record);
        let stale = !matches!(&self.cached, Some((hash, _)) if *hash == fingerprint);

        if stale {
            self.cached = None;
        }

        let record = &self.record;
        let (_, evaluation) = self.cached.get_or_insert_with(|| {
            debug!(fingerprint, "recomputing lead evaluation");
            (fingerprint, LeadWorkflow::evaluate(record))
        });
        evaluation
    }

    pub fn display(&mut self) -> LeadDisplay {
        let record = self.record.clone();
        self.evaluation().display(&record)
    }

    #[cfg(test)]
    pub(crate) fn cached_fingerprint(&self) -> Option<u64> {
        self.cached.as_ref().map(|(hash, _)| *hash)
    }
}

fn record_fingerprint(record: &LeadRecord) -> u64 {
    let mut hasher = DefaultHasher::new();
    record.hash(&mut hasher);
    hasher.finish()
}
