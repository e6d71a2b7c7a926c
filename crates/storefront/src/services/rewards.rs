//! Rewards membership tiers.
//!
//! Pure computation of a member's tier and progress toward the next one
//! from a points balance. Points accrual itself lives with the (external)
//! order system; this service only classifies a balance.

use serde::{Deserialize, Serialize};

/// Membership tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl RewardTier {
    const ALL: [Self; 4] = [Self::Bronze, Self::Silver, Self::Gold, Self::Platinum];

    /// Points balance at which the tier starts.
    #[must_use]
    pub const fn min_points(self) -> u32 {
        match self {
            Self::Bronze => 0,
            Self::Silver => 1000,
            Self::Gold => 2000,
            Self::Platinum => 5000,
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::Bronze => Some(Self::Silver),
            Self::Silver => Some(Self::Gold),
            Self::Gold => Some(Self::Platinum),
            Self::Platinum => None,
        }
    }
}

/// Tier classification of a points balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewardsStatus {
    pub points: u32,
    pub tier: RewardTier,
    /// Points needed to enter the next tier; absent at the top tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_tier_points: Option<u32>,
    /// Percentage progress toward the next tier; 100 at the top tier.
    pub progress_to_next: f64,
}

/// Classify a points balance into a tier with progress.
#[must_use]
pub fn status(points: u32) -> RewardsStatus {
    let tier = RewardTier::ALL
        .iter()
        .rev()
        .copied()
        .find(|tier| points >= tier.min_points())
        .unwrap_or(RewardTier::Bronze);

    let (next_tier_points, progress_to_next) = match tier.next() {
        Some(next) => {
            let span = f64::from(next.min_points() - tier.min_points());
            let gained = f64::from(points - tier.min_points());
            (Some(next.min_points()), (gained / span * 100.0).min(100.0))
        }
        None => (None, 100.0),
    };

    RewardsStatus {
        points,
        tier,
        next_tier_points,
        progress_to_next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(status(0).tier, RewardTier::Bronze);
        assert_eq!(status(999).tier, RewardTier::Bronze);
        assert_eq!(status(1000).tier, RewardTier::Silver);
        assert_eq!(status(1999).tier, RewardTier::Silver);
        assert_eq!(status(2000).tier, RewardTier::Gold);
        assert_eq!(status(5000).tier, RewardTier::Platinum);
        assert_eq!(status(u32::MAX).tier, RewardTier::Platinum);
    }

    #[test]
    fn test_progress_to_next_tier() {
        let status = status(1250);
        assert_eq!(status.tier, RewardTier::Silver);
        assert_eq!(status.next_tier_points, Some(2000));
        assert!((status.progress_to_next - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_top_tier_is_complete() {
        let status = status(7500);
        assert_eq!(status.tier, RewardTier::Platinum);
        assert_eq!(status.next_tier_points, None);
        assert!((status.progress_to_next - 100.0).abs() < f64::EPSILON);
    }
}
