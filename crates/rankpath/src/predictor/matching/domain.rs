use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::predictor::catalog::{
    AdmissionQuota, CollegeEntry, ExamTrack, Category, FeeTier, GenderEligibility, InstituteType,
    Region,
};

/// Which exam tracks the candidate sat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamSelection {
    JeeMain,
    JeeAdvanced,
    Both,
}

impl ExamSelection {
    pub const fn includes(self, track: ExamTrack) -> bool {
        match self {
            Self::Both => true,
            Self::JeeMain => matches!(track, ExamTrack::JeeMain),
            Self::JeeAdvanced => matches!(track, ExamTrack::JeeAdvanced),
        }
    }
}

/// Rank fields exactly as captured by the entry form. Values stay raw
/// strings: a blank or garbled rank is a validation failure that degrades
/// to "no eligible entries", never a fault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankSheet {
    #[serde(default)]
    pub jee_main_crl: Option<String>,
    #[serde(default)]
    pub jee_main_category: Option<String>,
    #[serde(default)]
    pub jee_advanced_crl: Option<String>,
    #[serde(default)]
    pub jee_advanced_category: Option<String>,
}

impl RankSheet {
    fn parse_positive(raw: Option<&str>) -> Option<u32> {
        raw.map(str::trim)
            .filter(|value| !value.is_empty())?
            .parse::<u32>()
            .ok()
            .filter(|rank| *rank > 0)
    }

    fn supplied(raw: Option<&str>) -> bool {
        raw.map(str::trim).is_some_and(|value| !value.is_empty())
    }

    /// Common-rank-list rank for a track, if it parses to a positive
    /// integer.
    pub fn crl(&self, track: ExamTrack) -> Option<u32> {
        match track {
            ExamTrack::JeeMain => Self::parse_positive(self.jee_main_crl.as_deref()),
            ExamTrack::JeeAdvanced => Self::parse_positive(self.jee_advanced_crl.as_deref()),
        }
    }

    pub fn category_rank(&self, track: ExamTrack) -> Option<u32> {
        match track {
            ExamTrack::JeeMain => Self::parse_positive(self.jee_main_category.as_deref()),
            ExamTrack::JeeAdvanced => Self::parse_positive(self.jee_advanced_category.as_deref()),
        }
    }

    pub(crate) fn crl_supplied(&self, track: ExamTrack) -> bool {
        match track {
            ExamTrack::JeeMain => Self::supplied(self.jee_main_crl.as_deref()),
            ExamTrack::JeeAdvanced => Self::supplied(self.jee_advanced_crl.as_deref()),
        }
    }

    /// Presence check only. The category rank is collected for reserved
    /// categories but admission gating follows the common rank list; the
    /// entered value is never compared against the category cutoff.
    pub(crate) fn category_rank_supplied(&self, track: ExamTrack) -> bool {
        match track {
            ExamTrack::JeeMain => Self::supplied(self.jee_main_category.as_deref()),
            ExamTrack::JeeAdvanced => Self::supplied(self.jee_advanced_category.as_deref()),
        }
    }
}

/// Candidate's quota preference; `All` disables the quota filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaPreference {
    #[default]
    All,
    HomeState,
    OtherState,
}

impl QuotaPreference {
    pub fn admits(self, quota: AdmissionQuota) -> bool {
        match self {
            Self::All => true,
            Self::HomeState => {
                matches!(quota, AdmissionQuota::AllIndia | AdmissionQuota::HomeState)
            }
            Self::OtherState => {
                matches!(quota, AdmissionQuota::AllIndia | AdmissionQuota::OtherState)
            }
        }
    }
}

/// Immutable per-request query, rebuilt on every form change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateQuery {
    pub exams: ExamSelection,
    pub ranks: RankSheet,
    pub category: Category,
    #[serde(default)]
    pub quota: QuotaPreference,
    #[serde(default)]
    pub gender: Option<GenderEligibility>,
}

impl CandidateQuery {
    /// The basic results table renders nothing until the form is complete:
    /// a parseable CRL for every selected track, and for reserved
    /// categories a category-rank entry for every selected track.
    pub fn basic_form_complete(&self) -> bool {
        let tracks = [ExamTrack::JeeMain, ExamTrack::JeeAdvanced];
        for track in tracks {
            if !self.exams.includes(track) {
                continue;
            }
            if self.ranks.crl(track).is_none() {
                return false;
            }
            if self.category.has_category_rank() && !self.ranks.category_rank_supplied(track) {
                return false;
            }
        }
        true
    }
}

/// Branch interest chosen in the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "branch")]
pub enum BranchInterest {
    Circuital,
    NonCircuital,
    Specific(String),
    Any,
}

/// Fee comfort level. `Moderate` tolerates everything short of the highest
/// tier; `High` and `Any` tolerate every tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeTolerance {
    Low,
    Moderate,
    High,
    Any,
}

impl FeeTolerance {
    pub fn admits(self, tier: FeeTier) -> bool {
        match self {
            Self::Any | Self::High => true,
            Self::Moderate => tier != FeeTier::High,
            Self::Low => tier == FeeTier::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationPriority {
    Metro,
    TierTwo,
    Any,
}

/// What the candidate wants the ranking to optimize for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    Placements,
    Research,
    Exposure,
    Branch,
    Balanced,
}

/// Preference profile assembled by the personalization wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    /// `None` means no regional preference.
    #[serde(default)]
    pub region: Option<Region>,
    pub branch_interest: BranchInterest,
    pub fee_tolerance: FeeTolerance,
    /// Empty set disables the institute-type filter.
    #[serde(default)]
    pub institute_types: BTreeSet<InstituteType>,
    pub location_priority: LocationPriority,
    #[serde(default)]
    pub focus_areas: BTreeSet<FocusArea>,
}

/// Coarse admission likelihood, fixed by the rank ratio alone before any
/// preference bonus is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityBand {
    High,
    Medium,
    Low,
}

impl ProbabilityBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Factors contributing to a match score, kept discrete so results can be
/// audited component by component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    AdmissionChance,
    RegionFit,
    PlacementsFocus,
    ResearchFocus,
    ExposureFocus,
    BranchFocus,
    BalancedFocus,
    LocationFit,
    InstituteFit,
    Selectivity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchComponent {
    pub factor: MatchFactor,
    pub points: f64,
    pub notes: String,
}

/// A catalog entry with its computed score for one query. Ephemeral:
/// recomputed in full on every query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCollege {
    pub entry: CollegeEntry,
    pub score: f64,
    pub probability: ProbabilityBand,
    pub components: Vec<MatchComponent>,
}

/// Ordered personalized matches plus the chance summary shown above them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalizedReport {
    pub matches: Vec<ScoredCollege>,
    pub high_chance: usize,
    pub medium_chance: usize,
}

impl PersonalizedReport {
    pub fn from_matches(matches: Vec<ScoredCollege>) -> Self {
        let high_chance = matches
            .iter()
            .filter(|scored| scored.probability == ProbabilityBand::High)
            .count();
        let medium_chance = matches
            .iter()
            .filter(|scored| scored.probability == ProbabilityBand::Medium)
            .count();
        Self {
            matches,
            high_chance,
            medium_chance,
        }
    }

    pub fn total(&self) -> usize {
        self.matches.len()
    }
}
