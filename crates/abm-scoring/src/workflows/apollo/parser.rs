use super::mapping::title_hint_for_seniority;
use super::normalizer::normalize_text;
use crate::scoring::domain::parse_score_text;
use crate::scoring::Contact;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::warn;

/// Parses an Apollo "People" export. Rows without a name, title, or email are
/// skipped.
pub(crate) fn parse_contacts<R: Read>(reader: R) -> Result<Vec<Contact>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut contacts = Vec::new();

    for (index, record) in csv_reader.deserialize::<ApolloRow>().enumerate() {
        let row = record?;
        match row.into_contact() {
            Some(contact) => contacts.push(contact),
            None => warn!(row = index + 1, "skipping empty Apollo contact row"),
        }
    }

    Ok(contacts)
}

#[derive(Debug, Deserialize)]
struct ApolloRow {
    #[serde(rename = "Name", default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(rename = "First Name", default, deserialize_with = "empty_string_as_none")]
    first_name: Option<String>,
    #[serde(rename = "Last Name", default, deserialize_with = "empty_string_as_none")]
    last_name: Option<String>,
    #[serde(rename = "Title", default, deserialize_with = "empty_string_as_none")]
    title: Option<String>,
    #[serde(
        rename = "Company",
        alias = "Company Name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    company: Option<String>,
    #[serde(rename = "Email", default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    #[serde(
        rename = "Departments",
        alias = "Department",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    departments: Option<String>,
    #[serde(rename = "Seniority", default, deserialize_with = "empty_string_as_none")]
    seniority: Option<String>,
    #[serde(
        rename = "ICP Fit Score",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    icp_fit_score: Option<String>,
    #[serde(
        rename = "Buying Power Score",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    buying_power_score: Option<String>,
    #[serde(
        rename = "Engagement Potential Score",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    engagement_potential_score: Option<String>,
}

impl ApolloRow {
    fn into_contact(self) -> Option<Contact> {
        let name = self.full_name();
        let title = self
            .title
            .as_deref()
            .map(normalize_text)
            .filter(|title| !title.is_empty());
        let seniority_hint = self
            .seniority
            .as_deref()
            .and_then(title_hint_for_seniority)
            .map(str::to_string);

        if name.is_empty() && title.is_none() && self.email.is_none() {
            return None;
        }

        Some(Contact {
            icp_fit_score: parse_score("ICP Fit Score", self.icp_fit_score.as_deref()),
            buying_power_score: parse_score(
                "Buying Power Score",
                self.buying_power_score.as_deref(),
            ),
            engagement_potential_score: parse_score(
                "Engagement Potential Score",
                self.engagement_potential_score.as_deref(),
            ),
            name,
            title,
            seniority_hint,
            department: self.departments.as_deref().map(normalize_text),
            company: self.company.as_deref().map(normalize_text),
            email: self.email,
        })
    }

    fn full_name(&self) -> String {
        if let Some(name) = &self.name {
            return normalize_text(name);
        }

        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        normalize_text(&parts.join(" "))
    }
}

fn parse_score(column: &'static str, value: Option<&str>) -> Option<f32> {
    let raw = value?;
    let score = parse_score_text(raw);
    if score.is_none() {
        warn!(column, value = raw, "ignoring non-numeric score cell");
    }
    score
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
pub(crate) fn parse_score_for_tests(value: &str) -> Option<f32> {
    parse_score("test", Some(value))
}
