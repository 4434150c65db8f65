use crate::infra::{parse_preset, parse_sub_score};
use abm_scoring::config::ScoringConfig;
use abm_scoring::error::AppError;
use abm_scoring::scoring::{Contact, ContactScorer, LeadReport, MeddicContactScore, ScoringPreset};
use abm_scoring::workflows::apollo::ApolloContactImporter;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Job title as it appears on the contact record
    #[arg(long)]
    pub(crate) title: String,
    /// Contact name shown in the output
    #[arg(long, default_value = "Contact")]
    pub(crate) name: String,
    /// Department or team, used to refine bare seniority titles
    #[arg(long)]
    pub(crate) department: Option<String>,
    /// Pre-computed ICP fit score (0-100)
    #[arg(long, value_parser = parse_sub_score)]
    pub(crate) icp_fit: Option<f32>,
    /// Pre-computed buying power score (0-100)
    #[arg(long, value_parser = parse_sub_score)]
    pub(crate) buying_power: Option<f32>,
    /// Pre-computed engagement potential score (0-100)
    #[arg(long, value_parser = parse_sub_score)]
    pub(crate) engagement: Option<f32>,
    /// Weighting preset (champion_first or economic_buyer_first)
    #[arg(long, value_parser = parse_preset)]
    pub(crate) preset: Option<ScoringPreset>,
    /// Print the score as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Apollo people export (CSV)
    #[arg(long)]
    pub(crate) apollo_csv: PathBuf,
    /// Number of ranked contacts to include (defaults to APP_REPORT_TOP_N)
    #[arg(long)]
    pub(crate) top: Option<usize>,
    /// Weighting preset (champion_first or economic_buyer_first)
    #[arg(long, value_parser = parse_preset)]
    pub(crate) preset: Option<ScoringPreset>,
    /// Print the report as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        title,
        name,
        department,
        icp_fit,
        buying_power,
        engagement,
        preset,
        json,
    } = args;

    let scorer = ContactScorer::from_preset(preset.unwrap_or_default());
    let contact = Contact {
        name,
        title: Some(title),
        department,
        icp_fit_score: icp_fit,
        buying_power_score: buying_power,
        engagement_potential_score: engagement,
        ..Contact::default()
    };

    let score = scorer.calculate_contact_score(&contact);
    if json {
        print_json(&serde_json::json!({
            "score": score,
            "breakdown": score.score_breakdown(),
        }));
    } else {
        render_score(&contact, &score);
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs {
        apollo_csv,
        top,
        preset,
        json,
    } = args;

    let defaults = scoring_defaults();
    let scorer = ContactScorer::from_preset(preset.unwrap_or(defaults.preset));
    let top_n = top.unwrap_or(defaults.report_top_n);

    let contacts = ApolloContactImporter::from_path(&apollo_csv)?;
    let report = LeadReport::build(&scorer, &contacts, top_n);

    if json {
        print_json(&report);
    } else {
        println!("Apollo export: {}", apollo_csv.display());
        render_report(&report);
    }

    Ok(())
}

// The CLI works without a .env; a bad APP_SCORING_PRESET falls back to defaults.
fn scoring_defaults() -> ScoringConfig {
    match abm_scoring::config::AppConfig::load() {
        Ok(config) => config.scoring,
        Err(err) => {
            eprintln!("warning: {err}; using default scoring settings");
            ScoringConfig::default()
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(err) => println!("JSON output unavailable: {}", err),
    }
}

pub(crate) fn render_score(contact: &Contact, score: &MeddicContactScore) {
    println!("Contact: {}", contact.name);
    println!("Title: {}", contact.title_or_empty());
    println!(
        "Role: {} ({})",
        score.role_classification,
        score.role_tier.label()
    );
    println!(
        "\nTotal score: {:.1} / 100 ({})",
        score.total_score,
        score.priority.label()
    );
    println!(
        "- Champion potential: {:.1} ({})",
        score.champion_potential_score, score.champion_potential_level
    );
    println!("- Role fit: {:.1}", score.role_fit_score);
    println!("- Engagement potential: {:.1}", score.engagement_potential_score);
    println!(
        "- Influence: budget {:.2} | pain {:.2} | champion {:.2} | entry point {:.2}",
        score.influence.budget_authority,
        score.influence.pain_ownership,
        score.influence.champion_ability,
        score.influence.entry_point_value
    );

    if score.why_prioritize.is_empty() {
        println!("\nWhy prioritize: no strong signals");
    } else {
        println!("\nWhy prioritize");
        for reason in &score.why_prioritize {
            println!("- {}", reason);
        }
    }

    println!("\nRecommended approach\n{}", score.recommended_approach);
}

pub(crate) fn render_report(report: &LeadReport) {
    println!(
        "Scored {} contacts (average {:.1}) at {}",
        report.contact_count,
        report.average_score,
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    println!("\nRole tiers");
    for entry in &report.tier_counts {
        println!("- {}: {}", entry.label, entry.count);
    }

    println!("\nPriority bands");
    for entry in &report.priority_counts {
        println!("- {}: {}", entry.label, entry.count);
    }

    println!("\nChampion potential");
    for entry in &report.champion_levels {
        println!("- {}: {}", entry.level, entry.count);
    }

    if report.top_contacts.is_empty() {
        println!("\nTop contacts: none");
        return;
    }

    println!("\nTop contacts");
    for ranked in &report.top_contacts {
        let company = ranked
            .company
            .as_deref()
            .map(|company| format!(" @ {company}"))
            .unwrap_or_default();
        println!(
            "{}. {}{} | {} | {} | {:.1} ({}) | champion {}",
            ranked.rank,
            ranked.name,
            company,
            ranked.title.as_deref().unwrap_or("(no title)"),
            ranked.score.role_classification,
            ranked.score.total_score,
            ranked.score.priority.label(),
            ranked.score.champion_potential_level
        );
    }
}
