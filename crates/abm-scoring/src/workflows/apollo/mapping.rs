use super::normalizer::normalize_key;
use std::collections::HashMap;
use std::sync::OnceLock;

static SENIORITY_HINTS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Title hint for an Apollo `Seniority` value, used when the title cell is empty.
pub(crate) fn title_hint_for_seniority(seniority: &str) -> Option<&'static str> {
    seniority_hints()
        .get(normalize_key(seniority).as_str())
        .copied()
}

fn seniority_hints() -> &'static HashMap<&'static str, &'static str> {
    SENIORITY_HINTS.get_or_init(|| {
        const SENIORITY_TO_TITLE: &[(&str, &str)] = &[
            ("c_suite", "Chief Executive"),
            ("c_level", "Chief Executive"),
            ("owner", "Owner"),
            ("founder", "Founder"),
            ("partner", "Partner"),
            ("vp", "VP"),
            ("vice_president", "VP"),
            ("head", "Head"),
            ("director", "Director"),
            ("manager", "Manager"),
            ("senior", "Senior Engineer"),
            ("entry", "Engineer"),
            ("intern", "Intern"),
        ];

        SENIORITY_TO_TITLE.iter().copied().collect()
    })
}

#[cfg(test)]
pub(crate) fn lookup_for_tests(seniority: &str) -> Option<&'static str> {
    title_hint_for_seniority(seniority)
}
