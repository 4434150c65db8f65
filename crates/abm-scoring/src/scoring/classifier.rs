use super::domain::RoleTier;
use serde::Serialize;
use tracing::debug;

pub const UNKNOWN_CLASSIFICATION: &str = "Unknown";
pub const INDIVIDUAL_CONTRIBUTOR: &str = "Individual Contributor";

const VP_WORDS: &[&str] = &[
    "vp",
    "vice president",
    "svp",
    "evp",
    "avp",
    "senior vice president",
    "executive vice president",
];
const DIRECTOR_WORDS: &[&str] = &["director", "head", "head of", "sr director"];
const MANAGER_WORDS: &[&str] = &["manager", "mgr", "supervisor"];

/// One row of the ordered classification table.
///
/// `seniority` phrases are read from the title only; each `all_of` keyword
/// group may be satisfied by the title or the department. A row matches when
/// its seniority (if any) and every keyword group are present, or when the
/// whole title equals one of its `whole_title` phrases.
#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    classification: &'static str,
    tier: RoleTier,
    seniority: &'static [&'static str],
    all_of: &'static [&'static [&'static str]],
    whole_title: &'static [&'static str],
}

impl RoleRule {
    pub const fn new(classification: &'static str, tier: RoleTier) -> Self {
        Self {
            classification,
            tier,
            seniority: &[],
            all_of: &[],
            whole_title: &[],
        }
    }

    pub const fn seniority(self, phrases: &'static [&'static str]) -> Self {
        Self {
            seniority: phrases,
            ..self
        }
    }

    pub const fn all_of(self, groups: &'static [&'static [&'static str]]) -> Self {
        Self {
            all_of: groups,
            ..self
        }
    }

    pub const fn whole_title(self, titles: &'static [&'static str]) -> Self {
        Self {
            whole_title: titles,
            ..self
        }
    }

    pub fn classification(&self) -> &'static str {
        self.classification
    }

    pub fn tier(&self) -> RoleTier {
        self.tier
    }

    fn matches(&self, title: &str, haystack: &str) -> bool {
        if self
            .whole_title
            .iter()
            .any(|phrase| title.trim() == *phrase)
        {
            return true;
        }
        if self.seniority.is_empty() && self.all_of.is_empty() {
            return false;
        }

        let senior = self.seniority.is_empty()
            || self
                .seniority
                .iter()
                .any(|phrase| contains_phrase(title, phrase));
        senior
            && self
                .all_of
                .iter()
                .all(|group| group.iter().any(|phrase| contains_phrase(haystack, phrase)))
    }
}

const INFRA_OPS_WORDS: &[&str] = &[
    "infrastructure",
    "operations",
    "ops",
    "data center",
    "data centers",
    "datacenter",
    "facilities",
    "critical facilities",
    "reliability",
    "platform",
    "cloud",
];
const C_SUITE_WORDS: &[&str] = &[
    "chief", "ceo", "cto", "cio", "coo", "cfo", "ciso", "cso", "cdo", "cpo",
];

// Specific and senior rows come first: "SRE Manager" has to hit a manager row
// before it can reach the entry-point SRE row.
const STANDARD_RULES: &[RoleRule] = &[
    RoleRule::new("VP, Infrastructure & Operations", RoleTier::EconomicBuyer)
        .seniority(VP_WORDS)
        .all_of(&[INFRA_OPS_WORDS]),
    RoleRule::new("VP, Engineering", RoleTier::EconomicBuyer)
        .seniority(VP_WORDS)
        .all_of(&[&[
            "engineering",
            "technology",
            "it",
            "information technology",
            "software",
        ]]),
    RoleRule::new("C-Suite", RoleTier::EconomicBuyer).seniority(C_SUITE_WORDS),
    RoleRule::new("Director, Infrastructure Engineering", RoleTier::MiddleDecider)
        .seniority(DIRECTOR_WORDS)
        .all_of(&[&[
            "infrastructure",
            "reliability",
            "sre",
            "site reliability",
            "platform",
            "devops",
            "cloud",
        ]]),
    RoleRule::new("Director, Data Center Operations", RoleTier::MiddleDecider)
        .seniority(DIRECTOR_WORDS)
        .all_of(&[&[
            "data center",
            "data centers",
            "datacenter",
            "facilities",
            "critical facilities",
            "operations",
            "energy",
            "sustainability",
        ]]),
    RoleRule::new("Director, Engineering", RoleTier::MiddleDecider)
        .seniority(DIRECTOR_WORDS)
        .all_of(&[&["engineering", "technology", "it", "software"]]),
    RoleRule::new("SRE Manager", RoleTier::MiddleDecider)
        .seniority(MANAGER_WORDS)
        .all_of(&[&["sre", "site reliability", "reliability"]]),
    RoleRule::new("Infrastructure Manager", RoleTier::MiddleDecider)
        .seniority(MANAGER_WORDS)
        .all_of(&[&[
            "infrastructure",
            "platform",
            "devops",
            "cloud",
            "network",
            "systems",
            "it",
        ]]),
    RoleRule::new("Data Center Operations Manager", RoleTier::MiddleDecider)
        .seniority(MANAGER_WORDS)
        .all_of(&[&[
            "data center",
            "data centers",
            "datacenter",
            "facilities",
            "critical facilities",
            "operations",
            "energy",
        ]]),
    RoleRule::new("Engineering Manager", RoleTier::MiddleDecider)
        .seniority(MANAGER_WORDS)
        .all_of(&[&["engineering", "software", "development"]]),
    RoleRule::new("SRE", RoleTier::EntryPoint).all_of(&[&[
        "sre",
        "site reliability",
        "reliability engineer",
        "reliability engineering",
    ]]),
    RoleRule::new("DevOps / Platform Engineer", RoleTier::EntryPoint).all_of(&[&[
        "devops",
        "platform",
        "infrastructure",
        "cloud",
        "network",
        "systems administrator",
        "sysadmin",
        "systems engineer",
    ]]),
    RoleRule::new("Data Center Technician", RoleTier::EntryPoint).all_of(&[&[
        "data center",
        "data centers",
        "datacenter",
        "critical facilities",
        "critical environment",
        "facilities",
        "technician",
        "electrical",
        "mechanical",
    ]]),
    RoleRule::new("Energy & Sustainability Analyst", RoleTier::EntryPoint)
        .all_of(&[&["energy", "sustainability", "esg"]]),
];

// Seniority-only rows consulted when no functional row matched.
const SENIORITY_FALLBACK: &[RoleRule] = &[
    RoleRule::new("VP", RoleTier::EconomicBuyer).seniority(VP_WORDS),
    // "owner" and "partner" only count on their own; "Product Owner" and
    // "Partner Manager" are not executives.
    RoleRule::new("Executive", RoleTier::EconomicBuyer)
        .seniority(&[
            "president",
            "founder",
            "co founder",
            "co owner",
            "managing partner",
            "founding partner",
            "general manager",
            "managing director",
        ])
        .whole_title(&["owner", "partner"]),
    RoleRule::new("Director", RoleTier::MiddleDecider).seniority(DIRECTOR_WORDS),
    RoleRule::new("Manager", RoleTier::MiddleDecider).seniority(MANAGER_WORDS),
    RoleRule::new("Technical Lead", RoleTier::EntryPoint).seniority(&[
        "lead",
        "tech lead",
        "principal",
        "staff",
        "architect",
    ]),
];

/// How a classification was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    Rule,
    SeniorityFallback,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleAssignment {
    pub tier: RoleTier,
    pub classification: &'static str,
    pub source: MatchSource,
}

/// First-match-wins classifier over an ordered rule table.
#[derive(Debug, Clone)]
pub struct RoleClassifier {
    rules: Vec<RoleRule>,
    fallback: Vec<RoleRule>,
}

impl RoleClassifier {
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
            fallback: SENIORITY_FALLBACK.to_vec(),
        }
    }

    /// Replaces the functional rows while keeping the seniority fallback.
    pub fn with_rules(rules: Vec<RoleRule>) -> Self {
        Self {
            rules,
            fallback: SENIORITY_FALLBACK.to_vec(),
        }
    }

    pub fn rules(&self) -> &[RoleRule] {
        &self.rules
    }

    /// Every classification label this classifier can emit.
    pub fn classifications(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = self
            .rules
            .iter()
            .chain(self.fallback.iter())
            .map(|rule| rule.classification)
            .collect();
        labels.push(INDIVIDUAL_CONTRIBUTOR);
        labels.push(UNKNOWN_CLASSIFICATION);
        labels
    }

    pub fn classify(&self, title: Option<&str>, department: Option<&str>) -> RoleAssignment {
        let title = normalize_title(title.unwrap_or(""));
        if title.trim().is_empty() {
            return RoleAssignment {
                tier: RoleTier::EntryPoint,
                classification: UNKNOWN_CLASSIFICATION,
                source: MatchSource::Default,
            };
        }

        let haystack = match department.map(normalize_title) {
            Some(department) if !department.trim().is_empty() => {
                format!("{}{}", title, department.trim_start())
            }
            _ => title.clone(),
        };

        if let Some(rule) = self.rules.iter().find(|rule| rule.matches(&title, &haystack)) {
            return RoleAssignment {
                tier: rule.tier,
                classification: rule.classification,
                source: MatchSource::Rule,
            };
        }

        if let Some(rule) = self.fallback.iter().find(|rule| rule.matches(&title, &title)) {
            debug!(title = title.trim(), classification = rule.classification, "seniority fallback");
            return RoleAssignment {
                tier: rule.tier,
                classification: rule.classification,
                source: MatchSource::SeniorityFallback,
            };
        }

        debug!(title = title.trim(), "no role rule matched");
        RoleAssignment {
            tier: RoleTier::EntryPoint,
            classification: INDIVIDUAL_CONTRIBUTOR,
            source: MatchSource::Default,
        }
    }
}

impl Default for RoleClassifier {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lower-cases, turns punctuation into spaces, and pads with a single space on
/// both ends so phrases can be matched on word boundaries.
pub(crate) fn normalize_title(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|ch| !matches!(ch, '\u{feff}' | '\u{200b}'))
        .map(|ch| if ch.is_alphanumeric() { ch } else { ' ' })
        .collect();
    let collapsed = cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    format!(" {} ", collapsed)
}

fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    let bytes = haystack.as_bytes();
    haystack.match_indices(phrase).any(|(start, matched)| {
        let end = start + matched.len();
        start > 0 && end < bytes.len() && bytes[start - 1] == b' ' && bytes[end] == b' '
    })
}
