use super::composite::CompositeScores;
use super::domain::{ChampionPotentialLevel, DecisionInfluence, RoleTier};

const STRONG_COEFFICIENT: f32 = 0.8;
const STRONG_SUB_SCORE: f32 = 70.0;

pub(crate) struct Recommendation {
    pub champion_potential_level: ChampionPotentialLevel,
    pub why_prioritize: Vec<String>,
    pub recommended_approach: String,
}

pub(crate) fn recommend(
    tier: RoleTier,
    influence: &DecisionInfluence,
    scores: &CompositeScores,
) -> Recommendation {
    Recommendation {
        champion_potential_level: champion_level(tier, scores.champion_potential_score),
        why_prioritize: why_prioritize(influence, scores),
        recommended_approach: recommended_approach(tier).to_string(),
    }
}

/// Entry-point roles are never rated below High and economic buyers never above
/// Medium; the champion score only moves a contact within its tier's band.
pub(crate) fn champion_level(tier: RoleTier, champion_score: f32) -> ChampionPotentialLevel {
    match tier {
        RoleTier::EntryPoint if champion_score >= 75.0 => ChampionPotentialLevel::VeryHigh,
        RoleTier::EntryPoint => ChampionPotentialLevel::High,
        RoleTier::MiddleDecider if champion_score >= 60.0 => ChampionPotentialLevel::High,
        RoleTier::MiddleDecider => ChampionPotentialLevel::Medium,
        RoleTier::EconomicBuyer if champion_score >= 50.0 => ChampionPotentialLevel::Medium,
        RoleTier::EconomicBuyer => ChampionPotentialLevel::Low,
    }
}

pub(crate) fn recommended_approach(tier: RoleTier) -> &'static str {
    match tier {
        RoleTier::EntryPoint => {
            "Pain-based discovery: open with the operational problems they handle day to day \
             and qualify them as a potential internal champion."
        }
        RoleTier::MiddleDecider => {
            "Business case and technical evaluation: lead with quantified impact and offer a \
             pilot they can sponsor with their team."
        }
        RoleTier::EconomicBuyer => {
            "Approach via champion referral: engage through an internal champion who brings \
             the business case, rather than cold outreach."
        }
    }
}

fn why_prioritize(influence: &DecisionInfluence, scores: &CompositeScores) -> Vec<String> {
    let mut reasons = Vec::new();

    if influence.entry_point_value >= STRONG_COEFFICIENT {
        reasons.push("Strong entry-point value".to_string());
    }
    if influence.pain_ownership >= STRONG_COEFFICIENT {
        reasons.push("High pain ownership".to_string());
    }
    if influence.champion_ability >= STRONG_COEFFICIENT {
        reasons.push("Natural internal champion".to_string());
    }
    if influence.budget_authority >= STRONG_COEFFICIENT {
        reasons.push("Controls budget".to_string());
    }
    if scores.icp_fit >= STRONG_SUB_SCORE {
        reasons.push(format!("Strong ICP fit ({:.0})", scores.icp_fit));
    }
    if scores.buying_power >= STRONG_SUB_SCORE {
        reasons.push(format!("Account has buying power ({:.0})", scores.buying_power));
    }
    if scores.engagement >= STRONG_SUB_SCORE {
        reasons.push(format!(
            "High engagement potential ({:.0})",
            scores.engagement
        ));
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_bounds_champion_level() {
        assert_eq!(
            champion_level(RoleTier::EntryPoint, 0.0),
            ChampionPotentialLevel::High
        );
        assert_eq!(
            champion_level(RoleTier::EntryPoint, 95.0),
            ChampionPotentialLevel::VeryHigh
        );
        assert_eq!(
            champion_level(RoleTier::MiddleDecider, 59.9),
            ChampionPotentialLevel::Medium
        );
        assert_eq!(
            champion_level(RoleTier::MiddleDecider, 60.0),
            ChampionPotentialLevel::High
        );
        assert_eq!(
            champion_level(RoleTier::EconomicBuyer, 100.0),
            ChampionPotentialLevel::Medium
        );
        assert_eq!(
            champion_level(RoleTier::EconomicBuyer, 10.0),
            ChampionPotentialLevel::Low
        );
    }

    #[test]
    fn economic_buyers_are_reached_through_a_champion() {
        assert!(recommended_approach(RoleTier::EconomicBuyer)
            .to_lowercase()
            .contains("champion"));
        assert!(recommended_approach(RoleTier::EntryPoint).contains("Pain-based discovery"));
        assert!(recommended_approach(RoleTier::MiddleDecider).contains("technical evaluation"));
    }
}
