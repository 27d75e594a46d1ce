use super::common::*;
use crate::predictor::catalog::{InstituteType, Region};
use crate::predictor::matching::domain::{
    BranchInterest, FeeTolerance, FocusArea, LocationPriority,
};
use crate::predictor::matching::wizard::{
    BranchLeaning, RegionChoice, WizardAdvance, WizardAnswer, WizardError, WizardRetreat,
    WizardSession, WizardStep,
};

fn answered_through_branch(leaning: BranchLeaning) -> WizardSession {
    let mut wizard = WizardSession::new();
    wizard.record(WizardAnswer::Region(RegionChoice::South));
    wizard.advance().expect("region answered");
    wizard.record(WizardAnswer::BranchLeaning(leaning));
    wizard
}

#[test]
fn specific_branch_step_is_hidden_by_default() {
    let wizard = WizardSession::new();
    let steps = wizard.steps();
    assert_eq!(steps.len(), 6);
    assert!(!steps.contains(&WizardStep::SpecificBranch));
}

#[test]
fn choosing_a_specific_branch_inserts_the_picker_step() {
    let mut wizard = answered_through_branch(BranchLeaning::Specific);
    assert!(wizard.steps().contains(&WizardStep::SpecificBranch));

    match wizard.advance() {
        Ok(WizardAdvance::Step(WizardStep::SpecificBranch)) => {}
        other => panic!("expected the branch picker next, got {other:?}"),
    }
}

#[test]
fn unanswered_steps_block_advancement() {
    let mut wizard = WizardSession::new();
    assert!(!wizard.can_advance());

    match wizard.advance() {
        Err(WizardError::Unanswered(label)) => {
            assert_eq!(label, WizardStep::Region.label());
        }
        other => panic!("expected unanswered error, got {other:?}"),
    }
}

#[test]
fn multi_select_steps_require_at_least_one_choice() {
    let mut wizard = answered_through_branch(BranchLeaning::Any);
    wizard.advance().expect("branch answered");
    wizard.record(WizardAnswer::FeeTolerance(FeeTolerance::Any));
    wizard.advance().expect("fee answered");

    assert_eq!(wizard.current_step(), WizardStep::InstituteTypes);
    assert!(!wizard.can_advance());

    wizard.record(WizardAnswer::InstituteTypes(
        [InstituteType::Nit].into_iter().collect(),
    ));
    assert!(wizard.can_advance());
}

#[test]
fn completing_every_step_builds_the_profile() {
    let mut wizard = answered_through_branch(BranchLeaning::Specific);
    wizard.advance().expect("branch answered");
    wizard.record(WizardAnswer::SpecificBranch(
        "Computer Science and Engineering".to_string(),
    ));
    wizard.advance().expect("specific branch answered");
    wizard.record(WizardAnswer::FeeTolerance(FeeTolerance::Moderate));
    wizard.advance().expect("fee answered");
    wizard.record(WizardAnswer::InstituteTypes(
        [InstituteType::Iit, InstituteType::Nit].into_iter().collect(),
    ));
    wizard.advance().expect("institutes answered");
    wizard.record(WizardAnswer::LocationPriority(LocationPriority::Metro));
    wizard.advance().expect("location answered");
    wizard.record(WizardAnswer::FocusAreas(
        [FocusArea::Placements, FocusArea::Exposure].into_iter().collect(),
    ));

    let (step, total) = wizard.progress();
    assert_eq!((step, total), (7, 7));

    match wizard.advance() {
        Ok(WizardAdvance::Complete(profile)) => {
            assert_eq!(profile.region, Some(Region::South));
            assert_eq!(
                profile.branch_interest,
                BranchInterest::Specific("Computer Science and Engineering".to_string())
            );
            assert_eq!(profile.fee_tolerance, FeeTolerance::Moderate);
            assert_eq!(profile.institute_types.len(), 2);
            assert_eq!(profile.location_priority, LocationPriority::Metro);
            assert!(profile.focus_areas.contains(&FocusArea::Placements));
        }
        other => panic!("expected completion, got {other:?}"),
    }
}

#[test]
fn no_preference_region_maps_to_none() {
    let mut wizard = answered_through_branch(BranchLeaning::Any);
    wizard.record(WizardAnswer::Region(RegionChoice::NoPreference));
    wizard.advance().expect("branch answered");
    wizard.record(WizardAnswer::FeeTolerance(FeeTolerance::Any));
    wizard.advance().expect("fee answered");
    wizard.record(WizardAnswer::InstituteTypes(
        [InstituteType::Gfti].into_iter().collect(),
    ));
    wizard.advance().expect("institutes answered");
    wizard.record(WizardAnswer::LocationPriority(LocationPriority::Any));
    wizard.advance().expect("location answered");
    wizard.record(WizardAnswer::FocusAreas([FocusArea::Balanced].into_iter().collect()));

    match wizard.advance() {
        Ok(WizardAdvance::Complete(profile)) => {
            assert_eq!(profile.region, None);
            assert_eq!(profile.branch_interest, BranchInterest::Any);
        }
        other => panic!("expected completion, got {other:?}"),
    }
}

#[test]
fn retreat_from_the_first_step_cancels() {
    let mut wizard = WizardSession::new();
    assert_eq!(wizard.retreat(), WizardRetreat::Cancelled);

    wizard.record(WizardAnswer::Region(RegionChoice::East));
    wizard.advance().expect("region answered");
    assert_eq!(wizard.retreat(), WizardRetreat::Step(WizardStep::Region));
}

#[test]
fn changing_the_leaning_away_from_specific_ignores_the_stale_branch() {
    let mut wizard = answered_through_branch(BranchLeaning::Specific);
    wizard.record(WizardAnswer::SpecificBranch("Chemical Engineering".to_string()));

    // Reconsidered: a broad circuital interest hides the picker again.
    wizard.record(WizardAnswer::BranchLeaning(BranchLeaning::Circuital));
    assert!(!wizard.steps().contains(&WizardStep::SpecificBranch));

    wizard.advance().expect("branch answered");
    wizard.record(WizardAnswer::FeeTolerance(FeeTolerance::High));
    wizard.advance().expect("fee answered");
    wizard.record(WizardAnswer::InstituteTypes(
        [InstituteType::Private].into_iter().collect(),
    ));
    wizard.advance().expect("institutes answered");
    wizard.record(WizardAnswer::LocationPriority(LocationPriority::TierTwo));
    wizard.advance().expect("location answered");
    wizard.record(WizardAnswer::FocusAreas([FocusArea::Branch].into_iter().collect()));

    match wizard.advance() {
        Ok(WizardAdvance::Complete(profile)) => {
            assert_eq!(profile.branch_interest, BranchInterest::Circuital);
        }
        other => panic!("expected completion, got {other:?}"),
    }
}

#[test]
fn wizard_profile_feeds_the_engine() {
    let mut wizard = answered_through_branch(BranchLeaning::Circuital);
    wizard.advance().expect("branch answered");
    wizard.record(WizardAnswer::FeeTolerance(FeeTolerance::Any));
    wizard.advance().expect("fee answered");
    wizard.record(WizardAnswer::InstituteTypes(
        [InstituteType::Nit].into_iter().collect(),
    ));
    wizard.advance().expect("institutes answered");
    wizard.record(WizardAnswer::LocationPriority(LocationPriority::Any));
    wizard.advance().expect("location answered");
    wizard.record(WizardAnswer::FocusAreas([FocusArea::Placements].into_iter().collect()));

    let profile = match wizard.advance() {
        Ok(WizardAdvance::Complete(profile)) => profile,
        other => panic!("expected completion, got {other:?}"),
    };

    let matches = engine_with(vec![main_entry(1)]).recommend(&gen_main_query("500"), &profile);
    assert_eq!(matches.len(), 1);
}
