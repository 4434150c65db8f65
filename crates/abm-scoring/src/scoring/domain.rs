use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Transient contact record handed to the scorer by discovery collaborators.
///
/// Deserialization never rejects a contact over its values: a `null` name is
/// empty and score cells that are not numbers or numeric strings are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Title-shaped seniority hint used for classification when `title` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seniority_hint: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub icp_fit_score: Option<f32>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub buying_power_score: Option<f32>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub engagement_potential_score: Option<f32>,
}

impl Contact {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_scores(mut self, icp_fit: f32, buying_power: f32, engagement: f32) -> Self {
        self.icp_fit_score = Some(icp_fit);
        self.buying_power_score = Some(buying_power);
        self.engagement_potential_score = Some(engagement);
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// The title the classifier should read: the real title when present,
    /// otherwise the seniority hint.
    pub fn classification_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .or(self.seniority_hint.as_deref())
    }
}

/// Parses a score cell such as `82.5` or `64%`; anything else is `None`.
pub(crate) fn parse_score_text(raw: &str) -> Option<f32> {
    raw.trim()
        .trim_end_matches('%')
        .trim_end()
        .parse::<f32>()
        .ok()
        .filter(|score| score.is_finite())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScoreCell {
        Number(f64),
        Text(String),
        #[allow(dead_code)]
        Other(IgnoredAny),
    }

    let score = match ScoreCell::deserialize(deserializer)? {
        ScoreCell::Number(value) => Some(value as f32).filter(|score| score.is_finite()),
        ScoreCell::Text(raw) => parse_score_text(&raw),
        ScoreCell::Other(_) => None,
    };
    Ok(score)
}

/// Where a contact sits in the buying committee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleTier {
    EntryPoint,
    MiddleDecider,
    EconomicBuyer,
}

impl RoleTier {
    pub const ALL: [RoleTier; 3] = [
        RoleTier::EntryPoint,
        RoleTier::MiddleDecider,
        RoleTier::EconomicBuyer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleTier::EntryPoint => "entry_point",
            RoleTier::MiddleDecider => "middle_decider",
            RoleTier::EconomicBuyer => "economic_buyer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoleTier::EntryPoint => "Entry Point",
            RoleTier::MiddleDecider => "Middle Decider",
            RoleTier::EconomicBuyer => "Economic Buyer",
        }
    }
}

impl fmt::Display for RoleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative read on how likely a contact is to advocate for us internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChampionPotentialLevel {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Medium,
    Low,
}

impl ChampionPotentialLevel {
    pub const ALL: [ChampionPotentialLevel; 4] = [
        ChampionPotentialLevel::VeryHigh,
        ChampionPotentialLevel::High,
        ChampionPotentialLevel::Medium,
        ChampionPotentialLevel::Low,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChampionPotentialLevel::VeryHigh => "Very High",
            ChampionPotentialLevel::High => "High",
            ChampionPotentialLevel::Medium => "Medium",
            ChampionPotentialLevel::Low => "Low",
        }
    }
}

impl fmt::Display for ChampionPotentialLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outreach priority band bucketed from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadPriority {
    Hot,
    Warm,
    Nurture,
    Cold,
}

impl LeadPriority {
    pub const ALL: [LeadPriority; 4] = [
        LeadPriority::Hot,
        LeadPriority::Warm,
        LeadPriority::Nurture,
        LeadPriority::Cold,
    ];

    pub fn from_total(total_score: f32) -> Self {
        if total_score >= 80.0 {
            LeadPriority::Hot
        } else if total_score >= 60.0 {
            LeadPriority::Warm
        } else if total_score >= 40.0 {
            LeadPriority::Nurture
        } else {
            LeadPriority::Cold
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeadPriority::Hot => "Hot",
            LeadPriority::Warm => "Warm",
            LeadPriority::Nurture => "Nurture",
            LeadPriority::Cold => "Cold",
        }
    }
}

/// Influence coefficients for a role classification, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionInfluence {
    pub budget_authority: f32,
    pub pain_ownership: f32,
    pub champion_ability: f32,
    pub entry_point_value: f32,
}

impl DecisionInfluence {
    pub const fn new(
        budget_authority: f32,
        pain_ownership: f32,
        champion_ability: f32,
        entry_point_value: f32,
    ) -> Self {
        Self {
            budget_authority,
            pain_ownership,
            champion_ability,
            entry_point_value,
        }
    }
}

/// Immutable result of scoring one contact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeddicContactScore {
    pub name: String,
    pub total_score: f32,
    pub champion_potential_score: f32,
    pub role_fit_score: f32,
    pub engagement_potential_score: f32,
    pub role_tier: RoleTier,
    pub role_classification: String,
    pub champion_potential_level: ChampionPotentialLevel,
    pub priority: LeadPriority,
    pub influence: DecisionInfluence,
    pub why_prioritize: Vec<String>,
    pub recommended_approach: String,
    #[serde(skip)]
    pub(crate) champion_weight: f32,
}

impl MeddicContactScore {
    /// Nested view of the score suitable for dashboards and database writers.
    pub fn score_breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            total_score: self.total_score,
            champion_potential: ChampionPotentialBreakdown {
                score: self.champion_potential_score,
                weight: self.champion_weight,
            },
            role_fit: RoleFitBreakdown {
                score: self.role_fit_score,
                tier: self.role_tier.as_str().to_string(),
            },
            engagement_potential: EngagementBreakdown {
                score: self.engagement_potential_score,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub total_score: f32,
    pub champion_potential: ChampionPotentialBreakdown,
    pub role_fit: RoleFitBreakdown,
    pub engagement_potential: EngagementBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionPotentialBreakdown {
    pub score: f32,
    pub weight: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleFitBreakdown {
    pub score: f32,
    pub tier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementBreakdown {
    pub score: f32,
}
