use crate::scoring::{Contact, ContactScorer, RoleTier};

pub(super) const SAMPLE_TITLES: &[&str] = &[
    "",
    "   ",
    "VP of Infrastructure",
    "Chief Information Officer",
    "Site Reliability Engineer",
    "Director, Infrastructure Engineering",
    "SRE Manager",
    "Data Center Technician II",
    "Head of Sustainability",
    "Senior Platform Engineer",
    "Co-Founder & CEO",
    "Barista",
    "\u{feff}EVP – Global Data Centers",
    "Staff Engineer",
    "Procurement Manager",
];

pub(super) fn scorer() -> ContactScorer {
    ContactScorer::default()
}

pub(super) fn contact(title: &str) -> Contact {
    Contact::new("Jordan Example", title).with_scores(75.0, 60.0, 50.0)
}

pub(super) fn bare_contact(title: Option<&str>) -> Contact {
    Contact {
        name: "No Scores".to_string(),
        title: title.map(str::to_string),
        ..Contact::default()
    }
}

pub(super) fn is_valid_tier(tier: RoleTier) -> bool {
    RoleTier::ALL.contains(&tier)
}

pub(super) fn in_range(value: f32) -> bool {
    (0.0..=100.0).contains(&value)
}
