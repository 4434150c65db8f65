use serde::{Deserialize, Serialize};

/// Weights used by the composite scorer.
///
/// The base weights apply to the caller's 0-100 sub-scores; the influence
/// weights blend the four role coefficients into a composite that is worth at
/// most `influence_points` of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub icp_fit: f32,
    pub buying_power: f32,
    pub engagement_potential: f32,
    pub influence_points: f32,
    pub entry_point_value: f32,
    pub pain_ownership: f32,
    pub champion_ability: f32,
    pub budget_authority: f32,
}

impl ScoringWeights {
    /// Bottoms-up motion: reward good conversation starters over budget holders.
    pub fn champion_first() -> Self {
        Self {
            icp_fit: 0.3,
            buying_power: 0.3,
            engagement_potential: 0.2,
            influence_points: 20.0,
            entry_point_value: 0.4,
            pain_ownership: 0.3,
            champion_ability: 0.2,
            budget_authority: 0.1,
        }
    }

    /// Top-down motion where signing authority matters most.
    pub fn economic_buyer_first() -> Self {
        Self {
            entry_point_value: 0.1,
            pain_ownership: 0.2,
            champion_ability: 0.3,
            budget_authority: 0.4,
            ..Self::champion_first()
        }
    }

    pub fn builder() -> ScoringWeightsBuilder {
        ScoringWeightsBuilder {
            weights: Self::champion_first(),
        }
    }

    pub fn preset(preset: ScoringPreset) -> Self {
        match preset {
            ScoringPreset::ChampionFirst => Self::champion_first(),
            ScoringPreset::EconomicBuyerFirst => Self::economic_buyer_first(),
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::champion_first()
    }
}

/// Named weighting presets selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPreset {
    #[default]
    ChampionFirst,
    EconomicBuyerFirst,
}

impl ScoringPreset {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "champion_first" | "champion" | "default" => Some(Self::ChampionFirst),
            "economic_buyer_first" | "economic_buyer" => Some(Self::EconomicBuyerFirst),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringPreset::ChampionFirst => "champion_first",
            ScoringPreset::EconomicBuyerFirst => "economic_buyer_first",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightsError {
    #[error("weight `{name}` must be a finite, non-negative number (got {value})")]
    Invalid { name: &'static str, value: f32 },
    #[error("influence weights must sum to 1.0 (got {sum:.3})")]
    InfluenceSum { sum: f32 },
}

/// Builds a variant weighting scheme starting from the champion-first preset.
#[derive(Debug, Clone)]
pub struct ScoringWeightsBuilder {
    weights: ScoringWeights,
}

impl ScoringWeightsBuilder {
    pub fn icp_fit(mut self, weight: f32) -> Self {
        self.weights.icp_fit = weight;
        self
    }

    pub fn buying_power(mut self, weight: f32) -> Self {
        self.weights.buying_power = weight;
        self
    }

    pub fn engagement_potential(mut self, weight: f32) -> Self {
        self.weights.engagement_potential = weight;
        self
    }

    pub fn influence_points(mut self, points: f32) -> Self {
        self.weights.influence_points = points;
        self
    }

    pub fn influence(
        mut self,
        entry_point_value: f32,
        pain_ownership: f32,
        champion_ability: f32,
        budget_authority: f32,
    ) -> Self {
        self.weights.entry_point_value = entry_point_value;
        self.weights.pain_ownership = pain_ownership;
        self.weights.champion_ability = champion_ability;
        self.weights.budget_authority = budget_authority;
        self
    }

    pub fn build(self) -> Result<ScoringWeights, WeightsError> {
        let weights = self.weights;
        let named = [
            ("icp_fit", weights.icp_fit),
            ("buying_power", weights.buying_power),
            ("engagement_potential", weights.engagement_potential),
            ("influence_points", weights.influence_points),
            ("entry_point_value", weights.entry_point_value),
            ("pain_ownership", weights.pain_ownership),
            ("champion_ability", weights.champion_ability),
            ("budget_authority", weights.budget_authority),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::Invalid { name, value });
            }
        }

        let sum = weights.entry_point_value
            + weights.pain_ownership
            + weights.champion_ability
            + weights.budget_authority;
        if (sum - 1.0).abs() > 1e-3 {
            return Err(WeightsError::InfluenceSum { sum });
        }

        Ok(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn champion_first_base_weights_leave_room_for_influence() {
        let weights = ScoringWeights::champion_first();
        let base = weights.icp_fit + weights.buying_power + weights.engagement_potential;
        assert!((base - 0.8).abs() < 1e-6);
        assert!((base * 100.0 + weights.influence_points - 100.0).abs() < 1e-4);
    }

    #[test]
    fn builder_rejects_negative_weights() {
        let error = ScoringWeights::builder()
            .icp_fit(-0.1)
            .build()
            .expect_err("negative weight rejected");
        assert_eq!(
            error,
            WeightsError::Invalid {
                name: "icp_fit",
                value: -0.1
            }
        );
    }

    #[test]
    fn builder_rejects_influence_weights_that_do_not_sum_to_one() {
        let error = ScoringWeights::builder()
            .influence(0.5, 0.5, 0.5, 0.5)
            .build()
            .expect_err("sum rejected");
        assert!(matches!(error, WeightsError::InfluenceSum { .. }));
    }

    #[test]
    fn builder_accepts_custom_variant() {
        let weights = ScoringWeights::builder()
            .icp_fit(0.35)
            .buying_power(0.25)
            .influence(0.25, 0.25, 0.25, 0.25)
            .build()
            .expect("valid weights");
        assert_eq!(weights.icp_fit, 0.35);
        assert_eq!(weights.champion_ability, 0.25);
    }

    #[test]
    fn presets_parse_from_config_strings() {
        assert_eq!(
            ScoringPreset::parse("Economic-Buyer-First"),
            Some(ScoringPreset::EconomicBuyerFirst)
        );
        assert_eq!(
            ScoringPreset::parse(" champion_first "),
            Some(ScoringPreset::ChampionFirst)
        );
        assert_eq!(ScoringPreset::parse("legacy"), None);
    }
}
