mod mapping;
mod normalizer;
mod parser;

use crate::scoring::Contact;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum ApolloContactImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ApolloContactImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApolloContactImportError::Io(err) => write!(f, "failed to read Apollo export: {}", err),
            ApolloContactImportError::Csv(err) => write!(f, "invalid Apollo CSV data: {}", err),
        }
    }
}

impl std::error::Error for ApolloContactImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApolloContactImportError::Io(err) => Some(err),
            ApolloContactImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ApolloContactImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ApolloContactImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads contacts from an Apollo.io "People" CSV export.
pub struct ApolloContactImporter;

impl ApolloContactImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Contact>, ApolloContactImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Contact>, ApolloContactImportError> {
        let contacts = parser::parse_contacts(reader)?;
        info!(contacts = contacts.len(), "imported Apollo contacts");
        Ok(contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "First Name,Last Name,Title,Company,Email,Departments,Seniority,ICP Fit Score,Buying Power Score,Engagement Potential Score\n";

    #[test]
    fn normalize_text_collapses_whitespace_and_strips_bom() {
        let normalized = normalizer::normalize_for_tests("\u{feff}Senior   Site\u{a0}Reliability  Engineer ");
        assert_eq!(normalized, "Senior Site Reliability Engineer");
    }

    #[test]
    fn parse_score_accepts_numbers_and_percentages() {
        assert_eq!(parser::parse_score_for_tests("82.5"), Some(82.5));
        assert_eq!(parser::parse_score_for_tests("64%"), Some(64.0));
        assert_eq!(parser::parse_score_for_tests("high"), None);
        assert_eq!(parser::parse_score_for_tests("NaN"), None);
    }

    #[test]
    fn mapping_recognizes_apollo_seniorities() {
        assert_eq!(mapping::lookup_for_tests("c_suite"), Some("Chief Executive"));
        assert_eq!(mapping::lookup_for_tests("VP"), Some("VP"));
        assert_eq!(mapping::lookup_for_tests("Vice President"), Some("VP"));
        assert_eq!(mapping::lookup_for_tests("director"), Some("Director"));
        assert_eq!(mapping::lookup_for_tests("unknown-level"), None);
    }

    #[test]
    fn importer_reads_contacts_and_scores() {
        let csv = format!(
            "{HEADER}Riley,Nguyen,Site Reliability Engineer,Acme Cloud,riley@acme.io,Engineering & Technical,senior,82,71,64\n"
        );
        let contacts = ApolloContactImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(contacts.len(), 1);
        let contact = &contacts[0];
        assert_eq!(contact.name, "Riley Nguyen");
        assert_eq!(contact.title.as_deref(), Some("Site Reliability Engineer"));
        assert_eq!(contact.company.as_deref(), Some("Acme Cloud"));
        assert_eq!(contact.email.as_deref(), Some("riley@acme.io"));
        assert_eq!(contact.icp_fit_score, Some(82.0));
        assert_eq!(contact.buying_power_score, Some(71.0));
        assert_eq!(contact.engagement_potential_score, Some(64.0));
    }

    #[test]
    fn importer_uses_seniority_when_title_missing() {
        let csv = format!("{HEADER}Morgan,Lee,,Globex,,,vp,,,\n");
        let contacts = ApolloContactImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(contacts[0].title, None);
        assert_eq!(contacts[0].seniority_hint.as_deref(), Some("VP"));
        assert_eq!(contacts[0].classification_title(), Some("VP"));
        assert_eq!(contacts[0].icp_fit_score, None);
        assert_eq!(contacts[0].email, None);
    }

    #[test]
    fn seniority_hint_never_replaces_a_real_title() {
        let csv = format!("{HEADER}Emery,Walsh,Account Executive,Contoso,,Sales,senior,,,\n");
        let contacts = ApolloContactImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(contacts[0].title.as_deref(), Some("Account Executive"));
        assert_eq!(contacts[0].seniority_hint.as_deref(), Some("Senior Engineer"));
        assert_eq!(contacts[0].classification_title(), Some("Account Executive"));
    }

    #[test]
    fn importer_skips_blank_rows_and_bad_scores() {
        let csv = format!(
            "{HEADER},,,,,,,,,\nTaylor,Kim,Facilities Technician,Initech,,,,n/a,55,\n"
        );
        let contacts = ApolloContactImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].icp_fit_score, None);
        assert_eq!(contacts[0].buying_power_score, Some(55.0));
    }

    #[test]
    fn importer_accepts_single_name_column() {
        let csv = "Name,Title\nJamie Fox,Director of IT\n";
        let contacts = ApolloContactImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(contacts[0].name, "Jamie Fox");
        assert_eq!(contacts[0].title.as_deref(), Some("Director of IT"));
    }

    #[test]
    fn importer_rejects_ragged_rows() {
        let csv = "Name,Title\nJamie Fox,Director of IT,extra\n";
        let error = ApolloContactImporter::from_reader(Cursor::new(csv)).expect_err("ragged row");
        assert!(matches!(error, ApolloContactImportError::Csv(_)));
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = ApolloContactImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            ApolloContactImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
