use super::normalizer::{join_name, normalize_cell};
use crate::workflows::leads::domain::LeadRecord;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<LeadRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<LeadRow>() {
        records.push(row?.into_record());
    }

    Ok(records)
}

/// One CRM export row. Header names follow common Apollo/HubSpot exports.
#[derive(Debug, Deserialize)]
struct LeadRow {
    #[serde(
        rename = "Company",
        alias = "Company Name",
        alias = "Account Name",
        alias = "company_name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    company: Option<String>,
    #[serde(
        rename = "Name",
        alias = "Full Name",
        alias = "Contact Name",
        alias = "contact_name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    full_name: Option<String>,
    #[serde(
        rename = "First Name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    first_name: Option<String>,
    #[serde(
        rename = "Last Name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    last_name: Option<String>,
    #[serde(
        rename = "Title",
        alias = "Job Title",
        alias = "job_title",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    title: Option<String>,
    #[serde(
        rename = "Email",
        alias = "Email Address",
        alias = "email_guess",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    email: Option<String>,
    #[serde(
        rename = "Person Linkedin Url",
        alias = "LinkedIn URL",
        alias = "Linkedin Url",
        alias = "linkedin_url",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    linkedin_url: Option<String>,
    #[serde(
        rename = "# Employees",
        alias = "Employees",
        alias = "Company Size",
        alias = "company_size",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    employees: Option<String>,
    #[serde(
        rename = "Pain Points",
        alias = "Notes",
        alias = "pain_points",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pain_points: Option<String>,
}

impl LeadRow {
    fn into_record(self) -> LeadRecord {
        let contact_name = match self.full_name.as_deref() {
            Some(full_name) => normalize_cell(full_name),
            None => join_name(&[self.first_name.as_deref(), self.last_name.as_deref()]),
        };

        LeadRecord {
            company_name: cell(self.company),
            contact_name,
            job_title: cell(self.title),
            email_guess: cell(self.email),
            linkedin_url: cell(self.linkedin_url),
            company_size: cell(self.employees),
            pain_points: cell(self.pain_points),
            ..LeadRecord::default()
        }
    }
}

fn cell(value: Option<String>) -> String {
    value.as_deref().map(normalize_cell).unwrap_or_default()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
