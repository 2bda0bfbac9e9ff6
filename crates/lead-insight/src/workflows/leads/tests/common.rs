use crate::workflows::leads::domain::LeadRecord;
use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

pub(super) fn qualified_lead() -> LeadRecord {
    LeadRecord {
        company_name: "Acme Inc".to_string(),
        contact_name: "Jane Doe".to_string(),
        job_title: "VP of Revenue Operations".to_string(),
        linkedin_url: "https://www.linkedin.com/in/janedoe".to_string(),
        company_size: "1500 employees".to_string(),
        pain_points: "High churn and manual onboarding.".to_string(),
        ..LeadRecord::default()
    }
}

pub(super) fn sparse_lead() -> LeadRecord {
    LeadRecord {
        company_name: "Globex".to_string(),
        job_title: "Operations Analyst".to_string(),
        ..LeadRecord::default()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&body).expect("json")
}
