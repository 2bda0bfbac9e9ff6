//! Lead qualification: email guessing, weighted scoring, and outreach drafting.
//!
//! Everything here is a pure projection of a [`LeadRecord`]. Hosts keep the record as the
//! single source of truth and recompute on every edit, either directly through
//! [`LeadWorkflow::evaluate`] or through a memoizing [`LeadSession`].

pub mod domain;
pub mod email;
pub mod import;
mod message;
pub mod report;
pub mod router;
pub mod scoring;
mod session;
pub mod views;
mod workflow;

#[cfg(test)]
mod tests;

pub use domain::{Insight, LeadField, LeadRecord, ScoreComponent, UnknownLeadField};
pub use email::guess_email;
pub use import::{LeadCsvImporter, LeadImportError};
pub use report::{LeadBatchEntry, LeadBatchReport, LeadBatchSummary, MissingFieldCount};
pub use router::lead_router;
pub use scoring::InsightEngine;
pub use session::LeadSession;
pub use views::{DisplayValue, LeadDisplay, ValueSource};
pub use workflow::{LeadEvaluation, LeadWorkflow};
