use abm_scoring::scoring::{ContactScorer, LeadReport, RoleTier};
use abm_scoring::workflows::apollo::{ApolloContactImportError, ApolloContactImporter};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/apollo_people.csv")
}

#[test]
fn importer_loads_the_apollo_people_export() {
    let contacts = ApolloContactImporter::from_path(fixture_path()).expect("fixture imports");

    assert_eq!(contacts.len(), 8);
    let quinn = contacts
        .iter()
        .find(|contact| contact.name == "Quinn Patel")
        .expect("quoted title row present");
    assert_eq!(
        quinn.title.as_deref(),
        Some("Director, Infrastructure Engineering")
    );

    let jules = contacts
        .iter()
        .find(|contact| contact.name == "Jules Moreau")
        .expect("seniority-only row present");
    assert_eq!(jules.title, None);
    assert_eq!(jules.seniority_hint.as_deref(), Some("Director"));

    let emery = contacts
        .iter()
        .find(|contact| contact.name == "Emery Walsh")
        .expect("sales row present");
    assert_eq!(emery.engagement_potential_score, None);
    assert_eq!(emery.email, None);
}

#[test]
fn imported_contacts_score_into_a_ranked_report() {
    let contacts = ApolloContactImporter::from_path(fixture_path()).expect("fixture imports");
    let report = LeadReport::build(&ContactScorer::default(), &contacts, 3);

    assert_eq!(report.contact_count, 8);
    assert_eq!(report.top_contacts.len(), 3);
    assert_eq!(report.top_contacts[0].name, "Riley Nguyen");
    assert_eq!(
        report.top_contacts[0].score.role_tier,
        RoleTier::EntryPoint
    );
    assert_eq!(report.tier_count(RoleTier::EconomicBuyer), 2);
    assert_eq!(report.tier_count(RoleTier::MiddleDecider), 3);
    assert_eq!(report.tier_count(RoleTier::EntryPoint), 3);
}

#[test]
fn seniority_only_rows_rank_without_a_displayed_title() {
    let contacts = ApolloContactImporter::from_path(fixture_path()).expect("fixture imports");
    let report = LeadReport::build(&ContactScorer::default(), &contacts, contacts.len());

    let jules = report
        .top_contacts
        .iter()
        .find(|ranked| ranked.name == "Jules Moreau")
        .expect("jules ranked");
    assert_eq!(jules.title, None);
    assert_eq!(jules.score.role_tier, RoleTier::MiddleDecider);
    assert_eq!(
        jules.score.role_classification,
        "Director, Data Center Operations"
    );
}

#[test]
fn missing_export_surfaces_io_error() {
    let error = ApolloContactImporter::from_path(fixture_path().with_file_name("missing.csv"))
        .expect_err("missing file");
    assert!(matches!(error, ApolloContactImportError::Io(_)));
}
