use super::classifier::UNKNOWN_CLASSIFICATION;
use super::domain::DecisionInfluence;
use std::collections::HashMap;

/// Coefficients applied when a classification has no curated row.
pub const UNKNOWN_INFLUENCE: DecisionInfluence = DecisionInfluence::new(0.2, 0.5, 0.5, 0.5);

// (classification, budget_authority, pain_ownership, champion_ability, entry_point_value)
const STANDARD_INFLUENCE: &[(&str, DecisionInfluence)] = &[
    ("C-Suite", DecisionInfluence::new(1.0, 0.3, 0.2, 0.1)),
    ("Executive", DecisionInfluence::new(0.9, 0.3, 0.2, 0.1)),
    (
        "VP, Infrastructure & Operations",
        DecisionInfluence::new(0.9, 0.6, 0.4, 0.2),
    ),
    ("VP, Engineering", DecisionInfluence::new(0.85, 0.5, 0.4, 0.2)),
    ("VP", DecisionInfluence::new(0.8, 0.4, 0.3, 0.2)),
    (
        "Director, Infrastructure Engineering",
        DecisionInfluence::new(0.6, 0.8, 0.7, 0.5),
    ),
    (
        "Director, Data Center Operations",
        DecisionInfluence::new(0.6, 0.9, 0.7, 0.5),
    ),
    ("Director, Engineering", DecisionInfluence::new(0.55, 0.7, 0.6, 0.5)),
    ("Director", DecisionInfluence::new(0.5, 0.6, 0.6, 0.4)),
    ("SRE Manager", DecisionInfluence::new(0.4, 0.9, 0.8, 0.7)),
    ("Infrastructure Manager", DecisionInfluence::new(0.4, 0.85, 0.8, 0.7)),
    (
        "Data Center Operations Manager",
        DecisionInfluence::new(0.35, 0.9, 0.8, 0.7),
    ),
    ("Engineering Manager", DecisionInfluence::new(0.35, 0.7, 0.7, 0.6)),
    ("Manager", DecisionInfluence::new(0.3, 0.6, 0.6, 0.6)),
    ("SRE", DecisionInfluence::new(0.1, 1.0, 0.9, 1.0)),
    (
        "DevOps / Platform Engineer",
        DecisionInfluence::new(0.1, 0.9, 0.85, 0.95),
    ),
    ("Data Center Technician", DecisionInfluence::new(0.05, 0.95, 0.8, 0.9)),
    (
        "Energy & Sustainability Analyst",
        DecisionInfluence::new(0.15, 0.7, 0.75, 0.8),
    ),
    ("Technical Lead", DecisionInfluence::new(0.2, 0.85, 0.9, 0.85)),
    ("Individual Contributor", DecisionInfluence::new(0.1, 0.6, 0.6, 0.8)),
    (UNKNOWN_CLASSIFICATION, UNKNOWN_INFLUENCE),
];

/// Read-only lookup from role classification to influence coefficients.
#[derive(Debug, Clone)]
pub struct InfluenceTable {
    rows: HashMap<String, DecisionInfluence>,
}

impl InfluenceTable {
    pub fn standard() -> Self {
        Self::from_rows(
            STANDARD_INFLUENCE
                .iter()
                .map(|(classification, influence)| (classification.to_string(), *influence)),
        )
    }

    /// Builds a table from curated rows; coefficients are clamped into `[0, 1]`
    /// and non-finite values become zero.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (String, DecisionInfluence)>,
    {
        let rows = rows
            .into_iter()
            .map(|(classification, influence)| (classification, sanitize(influence)))
            .collect();
        Self { rows }
    }

    pub fn lookup(&self, classification: &str) -> DecisionInfluence {
        self.rows
            .get(classification)
            .copied()
            .unwrap_or(UNKNOWN_INFLUENCE)
    }

    pub fn contains(&self, classification: &str) -> bool {
        self.rows.contains_key(classification)
    }
}

impl Default for InfluenceTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn sanitize(influence: DecisionInfluence) -> DecisionInfluence {
    let unit = |value: f32| {
        if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        }
    };
    DecisionInfluence {
        budget_authority: unit(influence.budget_authority),
        pain_ownership: unit(influence.pain_ownership),
        champion_ability: unit(influence.champion_ability),
        entry_point_value: unit(influence.entry_point_value),
    }
}
