//! Style quiz profile service.
//!
//! Maps a completed five-question quiz to a style profile. The rules are
//! checked in order, so an answer set matching more than one rule gets the
//! earliest profile.

use serde::{Deserialize, Serialize};

/// Lifestyle answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifestyle {
    Professional,
    Casual,
    Active,
    Social,
}

/// Color palette answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorPalette {
    Neutral,
    Bold,
    Pastels,
    Dark,
}

/// Preferred fit answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    Fitted,
    Relaxed,
    Oversized,
    Mixed,
}

/// Budget band answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "under50")]
    Under50,
    #[serde(rename = "50to100")]
    From50To100,
    #[serde(rename = "100to200")]
    From100To200,
    #[serde(rename = "over200")]
    Over200,
}

/// Shopping occasion answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Work,
    Weekend,
    Evening,
    Special,
}

/// A completed quiz. Every question must be answered.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizAnswers {
    pub lifestyle: Lifestyle,
    pub colors: ColorPalette,
    pub fit: Fit,
    pub budget: Budget,
    pub occasions: Occasion,
}

/// The profile a quiz resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleProfile {
    Classic,
    Trendy,
    Minimal,
    Sporty,
    Eclectic,
}

/// Resolve a quiz to a style profile.
///
/// Only lifestyle, colors, and fit participate in the mapping; budget and
/// occasions are collected for downstream recommendations but do not change
/// the profile.
#[must_use]
pub fn determine_profile(answers: &QuizAnswers) -> StyleProfile {
    if answers.lifestyle == Lifestyle::Professional && answers.fit == Fit::Fitted {
        StyleProfile::Classic
    } else if answers.colors == ColorPalette::Bold && answers.fit == Fit::Oversized {
        StyleProfile::Trendy
    } else if answers.lifestyle == Lifestyle::Casual && answers.colors == ColorPalette::Neutral {
        StyleProfile::Minimal
    } else if answers.lifestyle == Lifestyle::Active {
        StyleProfile::Sporty
    } else {
        StyleProfile::Eclectic
    }
}
