use super::domain::{ChampionPotentialLevel, Contact, LeadPriority, MeddicContactScore, RoleTier};
use super::ContactScorer;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedContact {
    pub rank: usize,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub score: MeddicContactScore,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierCount {
    pub tier: RoleTier,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityCount {
    pub priority: LeadPriority,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionLevelCount {
    pub level: ChampionPotentialLevel,
    pub count: usize,
}

/// Ranked view over a batch of scored contacts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadReport {
    pub generated_at: DateTime<Utc>,
    pub contact_count: usize,
    pub average_score: f32,
    pub tier_counts: Vec<TierCount>,
    pub priority_counts: Vec<PriorityCount>,
    pub champion_levels: Vec<ChampionLevelCount>,
    pub top_contacts: Vec<RankedContact>,
}

impl LeadReport {
    pub fn build(scorer: &ContactScorer, contacts: &[Contact], top_n: usize) -> Self {
        Self::build_at(scorer, contacts, top_n, Utc::now())
    }

    pub fn build_at(
        scorer: &ContactScorer,
        contacts: &[Contact],
        top_n: usize,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let scores = scorer.score_batch(contacts);
        let mut pairs: Vec<(&Contact, MeddicContactScore)> =
            contacts.iter().zip(scores).collect();

        // Stable sort keeps input order among equal scores.
        pairs.sort_by(|(_, left), (_, right)| right.total_score.total_cmp(&left.total_score));

        let contact_count = pairs.len();
        let average_score = if contact_count == 0 {
            0.0
        } else {
            pairs.iter().map(|(_, score)| score.total_score).sum::<f32>() / contact_count as f32
        };

        let tier_counts = RoleTier::ALL
            .iter()
            .map(|tier| TierCount {
                tier: *tier,
                label: tier.label(),
                count: pairs
                    .iter()
                    .filter(|(_, score)| score.role_tier == *tier)
                    .count(),
            })
            .collect();

        let priority_counts = LeadPriority::ALL
            .iter()
            .map(|priority| PriorityCount {
                priority: *priority,
                label: priority.label(),
                count: pairs
                    .iter()
                    .filter(|(_, score)| score.priority == *priority)
                    .count(),
            })
            .collect();

        let champion_levels = ChampionPotentialLevel::ALL
            .iter()
            .map(|level| ChampionLevelCount {
                level: *level,
                count: pairs
                    .iter()
                    .filter(|(_, score)| score.champion_potential_level == *level)
                    .count(),
            })
            .collect();

        let top_contacts: Vec<RankedContact> = pairs
            .into_iter()
            .take(top_n)
            .enumerate()
            .map(|(index, (contact, score))| RankedContact {
                rank: index + 1,
                name: contact.name.clone(),
                title: contact.title.clone(),
                company: contact.company.clone(),
                email: contact.email.clone(),
                score,
            })
            .collect();

        info!(
            contacts = contact_count,
            average_score, "scored contact batch"
        );

        Self {
            generated_at,
            contact_count,
            average_score,
            tier_counts,
            priority_counts,
            champion_levels,
            top_contacts,
        }
    }

    pub fn tier_count(&self, tier: RoleTier) -> usize {
        self.tier_counts
            .iter()
            .find(|entry| entry.tier == tier)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    pub fn priority_count(&self, priority: LeadPriority) -> usize {
        self.priority_counts
            .iter()
            .find(|entry| entry.priority == priority)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}
