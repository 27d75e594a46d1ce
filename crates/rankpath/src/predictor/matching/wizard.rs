use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{
    BranchInterest, FeeTolerance, FocusArea, LocationPriority, PreferenceProfile,
};
use crate::predictor::catalog::{InstituteType, Region};

/// Steps of the personalization wizard, in presentation order. The
/// specific-branch step only activates when the branch leaning asks for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Region,
    BranchLeaning,
    SpecificBranch,
    FeeTolerance,
    InstituteTypes,
    LocationPriority,
    FocusAreas,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Region,
            Self::BranchLeaning,
            Self::SpecificBranch,
            Self::FeeTolerance,
            Self::InstituteTypes,
            Self::LocationPriority,
            Self::FocusAreas,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Region => "Preferred Region",
            Self::BranchLeaning => "Branch Preference",
            Self::SpecificBranch => "Specific Branch",
            Self::FeeTolerance => "Fee Comfort Level",
            Self::InstituteTypes => "Preferred Institute Types",
            Self::LocationPriority => "Location Priority",
            Self::FocusAreas => "What Matters Most",
        }
    }
}

/// Single-select answer for the region step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionChoice {
    North,
    South,
    East,
    West,
    NoPreference,
}

impl RegionChoice {
    pub const fn preferred(self) -> Option<Region> {
        match self {
            Self::North => Some(Region::North),
            Self::South => Some(Region::South),
            Self::East => Some(Region::East),
            Self::West => Some(Region::West),
            Self::NoPreference => None,
        }
    }
}

/// Single-select answer for the branch step; `Specific` opens the
/// follow-up branch picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchLeaning {
    Circuital,
    NonCircuital,
    Specific,
    Any,
}

/// Accumulated wizard answers. Multi-select steps hold sets; a step counts
/// as answered once its slot is non-empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardDraft {
    pub region: Option<RegionChoice>,
    pub branch_leaning: Option<BranchLeaning>,
    pub specific_branch: Option<String>,
    pub fee_tolerance: Option<FeeTolerance>,
    pub institute_types: BTreeSet<InstituteType>,
    pub location_priority: Option<LocationPriority>,
    pub focus_areas: BTreeSet<FocusArea>,
}

impl WizardDraft {
    /// The live step sequence, derived from the draft. Recomputed when the
    /// draft changes rather than filtered at each render.
    pub fn active_steps(&self) -> Vec<WizardStep> {
        WizardStep::ordered()
            .into_iter()
            .filter(|step| match step {
                WizardStep::SpecificBranch => {
                    self.branch_leaning == Some(BranchLeaning::Specific)
                }
                _ => true,
            })
            .collect()
    }

    fn answered(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Region => self.region.is_some(),
            WizardStep::BranchLeaning => self.branch_leaning.is_some(),
            WizardStep::SpecificBranch => self
                .specific_branch
                .as_deref()
                .is_some_and(|branch| !branch.trim().is_empty()),
            WizardStep::FeeTolerance => self.fee_tolerance.is_some(),
            WizardStep::InstituteTypes => !self.institute_types.is_empty(),
            WizardStep::LocationPriority => self.location_priority.is_some(),
            WizardStep::FocusAreas => !self.focus_areas.is_empty(),
        }
    }

    fn build_profile(&self) -> Result<PreferenceProfile, WizardError> {
        for step in self.active_steps() {
            if !self.answered(step) {
                return Err(WizardError::Unanswered(step.label()));
            }
        }

        let region_choice = self
            .region
            .ok_or(WizardError::Unanswered(WizardStep::Region.label()))?;
        let leaning = self
            .branch_leaning
            .ok_or(WizardError::Unanswered(WizardStep::BranchLeaning.label()))?;
        let branch_interest = match leaning {
            BranchLeaning::Circuital => BranchInterest::Circuital,
            BranchLeaning::NonCircuital => BranchInterest::NonCircuital,
            BranchLeaning::Any => BranchInterest::Any,
            BranchLeaning::Specific => {
                let branch = self
                    .specific_branch
                    .clone()
                    .ok_or(WizardError::Unanswered(WizardStep::SpecificBranch.label()))?;
                BranchInterest::Specific(branch)
            }
        };
        let fee_tolerance = self
            .fee_tolerance
            .ok_or(WizardError::Unanswered(WizardStep::FeeTolerance.label()))?;
        let location_priority = self
            .location_priority
            .ok_or(WizardError::Unanswered(WizardStep::LocationPriority.label()))?;

        Ok(PreferenceProfile {
            region: region_choice.preferred(),
            branch_interest,
            fee_tolerance,
            institute_types: self.institute_types.clone(),
            location_priority,
            focus_areas: self.focus_areas.clone(),
        })
    }
}

/// One recorded answer, applied to its slot regardless of which step is
/// showing.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAnswer {
    Region(RegionChoice),
    BranchLeaning(BranchLeaning),
    SpecificBranch(String),
    FeeTolerance(FeeTolerance),
    InstituteTypes(BTreeSet<InstituteType>),
    LocationPriority(LocationPriority),
    FocusAreas(BTreeSet<FocusArea>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("step '{0}' needs an answer before continuing")]
    Unanswered(&'static str),
}

/// Result of advancing past the current step.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAdvance {
    Step(WizardStep),
    Complete(PreferenceProfile),
}

/// Result of stepping backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardRetreat {
    Step(WizardStep),
    Cancelled,
}

/// Linear wizard walk over the active step sequence.
#[derive(Debug, Default)]
pub struct WizardSession {
    draft: WizardDraft,
    cursor: usize,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &WizardDraft {
        &self.draft
    }

    pub fn steps(&self) -> Vec<WizardStep> {
        self.draft.active_steps()
    }

    /// The step currently showing. The cursor is clamped because answering
    /// the branch step can shrink the active sequence.
    pub fn current_step(&self) -> WizardStep {
        let steps = self.steps();
        let index = self.cursor.min(steps.len() - 1);
        steps[index]
    }

    /// One-based progress, e.g. "Step 3 of 7".
    pub fn progress(&self) -> (usize, usize) {
        let steps = self.steps();
        (self.cursor.min(steps.len() - 1) + 1, steps.len())
    }

    pub fn record(&mut self, answer: WizardAnswer) {
        match answer {
            WizardAnswer::Region(choice) => self.draft.region = Some(choice),
            WizardAnswer::BranchLeaning(leaning) => self.draft.branch_leaning = Some(leaning),
            WizardAnswer::SpecificBranch(branch) => self.draft.specific_branch = Some(branch),
            WizardAnswer::FeeTolerance(tolerance) => self.draft.fee_tolerance = Some(tolerance),
            WizardAnswer::InstituteTypes(types) => self.draft.institute_types = types,
            WizardAnswer::LocationPriority(priority) => {
                self.draft.location_priority = Some(priority)
            }
            WizardAnswer::FocusAreas(areas) => self.draft.focus_areas = areas,
        }
    }

    pub fn can_advance(&self) -> bool {
        self.draft.answered(self.current_step())
    }

    /// Move past the current step, or complete the wizard from the last
    /// one.
    pub fn advance(&mut self) -> Result<WizardAdvance, WizardError> {
        let steps = self.steps();
        let index = self.cursor.min(steps.len() - 1);
        let step = steps[index];

        if !self.draft.answered(step) {
            return Err(WizardError::Unanswered(step.label()));
        }

        if index + 1 < steps.len() {
            self.cursor = index + 1;
            Ok(WizardAdvance::Step(steps[self.cursor]))
        } else {
            Ok(WizardAdvance::Complete(self.draft.build_profile()?))
        }
    }

    /// Step back, cancelling the wizard from the first step.
    pub fn retreat(&mut self) -> WizardRetreat {
        if self.cursor == 0 {
            return WizardRetreat::Cancelled;
        }
        self.cursor -= 1;
        WizardRetreat::Step(self.current_step())
    }
}
