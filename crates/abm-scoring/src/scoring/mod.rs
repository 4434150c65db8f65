//! MEDDIC contact scoring: role classification, influence lookup, composite
//! scoring, and engagement recommendations.

pub mod classifier;
mod composite;
mod config;
pub mod domain;
pub mod influence;
mod recommendation;
pub mod report;

#[cfg(test)]
mod tests;

pub use classifier::{MatchSource, RoleAssignment, RoleClassifier, RoleRule};
pub use config::{ScoringPreset, ScoringWeights, ScoringWeightsBuilder, WeightsError};
pub use domain::{
    ChampionPotentialLevel, Contact, DecisionInfluence, LeadPriority, MeddicContactScore,
    RoleTier, ScoreBreakdown,
};
pub use influence::InfluenceTable;
pub use report::{LeadReport, RankedContact};

use std::sync::OnceLock;

static SHARED_SCORER: OnceLock<ContactScorer> = OnceLock::new();

/// Stateless scorer holding immutable rule, influence, and weight tables.
///
/// Safe to share across threads; every call works on its own inputs.
#[derive(Debug, Clone)]
pub struct ContactScorer {
    classifier: RoleClassifier,
    influence: InfluenceTable,
    weights: ScoringWeights,
}

impl ContactScorer {
    pub fn new(classifier: RoleClassifier, influence: InfluenceTable, weights: ScoringWeights) -> Self {
        Self {
            classifier,
            influence,
            weights,
        }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self::new(RoleClassifier::standard(), InfluenceTable::standard(), weights)
    }

    pub fn from_preset(preset: ScoringPreset) -> Self {
        Self::with_weights(ScoringWeights::preset(preset))
    }

    /// Process-wide instance with the standard tables and champion-first weights.
    pub fn shared() -> &'static ContactScorer {
        SHARED_SCORER.get_or_init(ContactScorer::default)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn classify(&self, contact: &Contact) -> RoleAssignment {
        self.classifier
            .classify(contact.classification_title(), contact.department.as_deref())
    }

    pub fn calculate_contact_score(&self, contact: &Contact) -> MeddicContactScore {
        let assignment = self.classify(contact);
        let influence = self.influence.lookup(assignment.classification);
        let scores = composite::score_contact(contact, &influence, &self.weights);
        let recommendation = recommendation::recommend(assignment.tier, &influence, &scores);

        MeddicContactScore {
            name: contact.name.clone(),
            total_score: scores.total_score,
            champion_potential_score: scores.champion_potential_score,
            role_fit_score: scores.role_fit_score,
            engagement_potential_score: scores.engagement_potential_score,
            role_tier: assignment.tier,
            role_classification: assignment.classification.to_string(),
            champion_potential_level: recommendation.champion_potential_level,
            priority: LeadPriority::from_total(scores.total_score),
            influence,
            why_prioritize: recommendation.why_prioritize,
            recommended_approach: recommendation.recommended_approach,
            champion_weight: self.weights.champion_ability,
        }
    }

    pub fn score_batch(&self, contacts: &[Contact]) -> Vec<MeddicContactScore> {
        contacts
            .iter()
            .map(|contact| self.calculate_contact_score(contact))
            .collect()
    }
}

impl Default for ContactScorer {
    fn default() -> Self {
        Self::with_weights(ScoringWeights::champion_first())
    }
}
