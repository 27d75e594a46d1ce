use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Exam track an entry admits through. Quota reservations only exist on the
/// JEE Main track; JEE Advanced seats have no home-state channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamTrack {
    JeeMain,
    JeeAdvanced,
}

impl ExamTrack {
    pub const fn label(self) -> &'static str {
        match self {
            Self::JeeMain => "JEE Main",
            Self::JeeAdvanced => "JEE Advanced",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "jee main" | "jee-main" | "main" => Some(Self::JeeMain),
            "jee advanced" | "jee-advanced" | "advanced" => Some(Self::JeeAdvanced),
            _ => None,
        }
    }
}

/// Admission category codes from the central counselling rank lists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    General,
    Obc,
    Sc,
    St,
    Ews,
}

impl Category {
    pub const fn ordered() -> [Self; 5] {
        [Self::General, Self::Obc, Self::Sc, Self::St, Self::Ews]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::General => "GEN",
            Self::Obc => "OBC",
            Self::Sc => "SC",
            Self::St => "ST",
            Self::Ews => "EWS",
        }
    }

    /// General candidates compete on the common rank list alone and carry no
    /// category-specific rank.
    pub const fn has_category_rank(self) -> bool {
        !matches!(self, Self::General)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "GEN" | "GENERAL" => Some(Self::General),
            "OBC" | "OBC-NCL" => Some(Self::Obc),
            "SC" => Some(Self::Sc),
            "ST" => Some(Self::St),
            "EWS" => Some(Self::Ews),
            _ => None,
        }
    }
}

/// Coarse geographic region used by the personalization wizard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "north" => Some(Self::North),
            "south" => Some(Self::South),
            "east" => Some(Self::East),
            "west" => Some(Self::West),
            _ => None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum InstituteType {
    Iit,
    Nit,
    Iiit,
    Gfti,
    Private,
}

impl InstituteType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Iit => "IIT",
            Self::Nit => "NIT",
            Self::Iiit => "IIIT",
            Self::Gfti => "GFTI",
            Self::Private => "Private",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "IIT" => Some(Self::Iit),
            "NIT" => Some(Self::Nit),
            "IIIT" => Some(Self::Iiit),
            "GFTI" => Some(Self::Gfti),
            "PRIVATE" => Some(Self::Private),
            _ => None,
        }
    }
}

/// Annual tuition bucket. The ordering is meaningful: tolerance checks admit
/// everything at or below the tolerated tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FeeTier {
    Low,
    Moderate,
    High,
}

impl FeeTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Reservation channel on the quota-bearing (JEE Main) track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionQuota {
    AllIndia,
    HomeState,
    OtherState,
}

impl AdmissionQuota {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AllIndia => "All India",
            Self::HomeState => "Home State",
            Self::OtherState => "Other State",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all india" | "all-india" | "ai" => Some(Self::AllIndia),
            "home state" | "home-state" | "hs" => Some(Self::HomeState),
            "other state" | "other-state" | "os" => Some(Self::OtherState),
            _ => None,
        }
    }
}

/// Seat-pool gender eligibility. Collected and displayed; no eligibility
/// predicate consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderEligibility {
    GenderNeutral,
    FemaleOnly,
}

impl GenderEligibility {
    pub const fn label(self) -> &'static str {
        match self {
            Self::GenderNeutral => "Gender-neutral",
            Self::FemaleOnly => "Female-only",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gender-neutral" | "gender neutral" | "neutral" => Some(Self::GenderNeutral),
            "female-only" | "female only" | "female" => Some(Self::FemaleOnly),
            _ => None,
        }
    }
}

/// Branch family used as a preference bucket: the electronics/computing
/// branches behave very differently from the rest in placement terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchCategory {
    Circuital,
    NonCircuital,
}

impl BranchCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Circuital => "Circuital",
            Self::NonCircuital => "Non-Circuital",
        }
    }

    /// Classify a branch name by keyword.
    pub fn classify(branch: &str) -> Self {
        const CIRCUITAL_KEYWORDS: [&str; 6] = [
            "computer",
            "electronics",
            "electrical",
            "information technology",
            "artificial intelligence",
            "mathematics and computing",
        ];

        let lowered = branch.to_lowercase();
        if CIRCUITAL_KEYWORDS
            .iter()
            .any(|keyword| lowered.contains(keyword))
        {
            Self::Circuital
        } else {
            Self::NonCircuital
        }
    }
}

/// One bound of the cutoff table: the same rank recorded twice, once on the
/// common rank list and once on the category rank list, keyed by category.
/// A category absent from the common list means the entry is not reachable
/// under that category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutoffLedger {
    #[serde(default)]
    pub crl: BTreeMap<Category, u32>,
    #[serde(default)]
    pub category: BTreeMap<Category, u32>,
}

impl CutoffLedger {
    pub fn crl_for(&self, category: Category) -> Option<u32> {
        self.crl.get(&category).copied()
    }

    pub fn category_rank_for(&self, category: Category) -> Option<u32> {
        self.category.get(&category).copied()
    }
}

/// A single admissible (institute, branch, exam) row of the cutoff catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeEntry {
    pub id: u32,
    pub institute: String,
    pub city: String,
    pub state: String,
    pub region: Region,
    pub institute_type: InstituteType,
    pub exam: ExamTrack,
    pub branch: String,
    pub branch_category: BranchCategory,
    pub opening: CutoffLedger,
    pub closing: CutoffLedger,
    pub fee_tier: FeeTier,
    pub average_package_lpa: f64,
    pub quota: AdmissionQuota,
    pub gender: GenderEligibility,
}

impl CollegeEntry {
    /// Closing rank on the common rank list, with the zero guard applied: a
    /// zero cutoff would divide out to infinity downstream, so it is treated
    /// the same as a missing one.
    pub fn closing_crl(&self, category: Category) -> Option<u32> {
        self.closing.crl_for(category).filter(|rank| *rank > 0)
    }

    pub fn opening_crl(&self, category: Category) -> Option<u32> {
        self.opening.crl_for(category).filter(|rank| *rank > 0)
    }
}

/// The read-only catalog, loaded once per process.
#[derive(Debug, Clone, Default)]
pub struct CollegeCatalog {
    entries: Vec<CollegeEntry>,
}

impl CollegeCatalog {
    pub fn new(entries: Vec<CollegeEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CollegeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
