use super::config::ScoringWeights;
use super::domain::{Contact, DecisionInfluence};

/// Numeric results of one scoring pass, before narrative is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CompositeScores {
    pub icp_fit: f32,
    pub buying_power: f32,
    pub engagement: f32,
    pub base_score: f32,
    pub influence_points: f32,
    pub total_score: f32,
    pub role_fit_score: f32,
    pub champion_potential_score: f32,
    pub engagement_potential_score: f32,
}

pub(crate) fn score_contact(
    contact: &Contact,
    influence: &DecisionInfluence,
    weights: &ScoringWeights,
) -> CompositeScores {
    let icp_fit = coerce(contact.icp_fit_score);
    let buying_power = coerce(contact.buying_power_score);
    let engagement = coerce(contact.engagement_potential_score);

    let base_score = icp_fit * weights.icp_fit
        + buying_power * weights.buying_power
        + engagement * weights.engagement_potential;

    let influence_composite = influence.entry_point_value * weights.entry_point_value
        + influence.pain_ownership * weights.pain_ownership
        + influence.champion_ability * weights.champion_ability
        + influence.budget_authority * weights.budget_authority;
    let influence_points =
        (weights.influence_points * influence_composite).min(weights.influence_points);

    let total_score = (base_score + influence_points).min(100.0);

    let role_fit_score = clamp_score(influence_composite * 100.0);
    let champion_potential_score = clamp_score(
        (influence.champion_ability * 0.5
            + influence.pain_ownership * 0.3
            + influence.entry_point_value * 0.2)
            * 100.0,
    );

    CompositeScores {
        icp_fit,
        buying_power,
        engagement,
        base_score,
        influence_points,
        total_score: clamp_score(total_score),
        role_fit_score,
        champion_potential_score,
        engagement_potential_score: clamp_score(engagement),
    }
}

// Missing, non-finite, and negative inputs count as zero.
fn coerce(value: Option<f32>) -> f32 {
    match value {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

fn clamp_score(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
