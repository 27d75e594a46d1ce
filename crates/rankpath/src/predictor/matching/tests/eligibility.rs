use super::common::*;
use crate::predictor::catalog::{AdmissionQuota, Category, ExamTrack, FeeTier, InstituteType};
use crate::predictor::matching::domain::{
    BranchInterest, FeeTolerance, QuotaPreference, RankSheet,
};

#[test]
fn basic_eligibility_holds_exactly_at_the_closing_rank() {
    let engine = engine_with(vec![main_entry(1)]);

    let at_cutoff = engine.shortlist(&gen_main_query("1000"));
    assert_eq!(at_cutoff.len(), 1);

    let past_cutoff = engine.shortlist(&gen_main_query("1001"));
    assert!(past_cutoff.is_empty());
}

#[test]
fn personalized_window_extends_to_one_and_a_half_times_the_cutoff() {
    let engine = engine_with(vec![main_entry(1)]);
    let preferences = open_preferences();

    let inside = engine.recommend(&gen_main_query("1500"), &preferences);
    assert_eq!(inside.len(), 1);

    let outside = engine.recommend(&gen_main_query("1501"), &preferences);
    assert!(outside.is_empty());
}

#[test]
fn rank_past_cutoff_is_reach_only_in_personalized_mode() {
    // 1100 against a closing rank of 1000: out in basic mode, surfaced as
    // a low-chance reach in personalized mode.
    let engine = engine_with(vec![main_entry(1)]);

    assert!(engine.shortlist(&gen_main_query("1100")).is_empty());
    let matches = engine.recommend(&gen_main_query("1100"), &open_preferences());
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches[0].probability,
        crate::predictor::matching::domain::ProbabilityBand::Low
    );
}

#[test]
fn invalid_rank_input_degrades_to_an_empty_set() {
    let engine = engine_with(vec![main_entry(1)]);
    let preferences = open_preferences();

    for raw in ["0", "-12", "abc", "", "  "] {
        assert!(
            engine.shortlist(&gen_main_query(raw)).is_empty(),
            "basic mode should reject rank input {raw:?}"
        );
        assert!(
            engine.recommend(&gen_main_query(raw), &preferences).is_empty(),
            "personalized mode should reject rank input {raw:?}"
        );
    }
}

#[test]
fn missing_rank_input_for_a_selected_track_yields_nothing() {
    let engine = engine_with(vec![main_entry(1), advanced_entry(2)]);

    let mut query = gen_both_query("500", "500");
    query.ranks.jee_advanced_crl = None;

    assert!(engine.shortlist(&query).is_empty());
}

#[test]
fn unselected_exam_track_is_dropped() {
    let engine = engine_with(vec![main_entry(1), advanced_entry(2)]);

    let main_only = engine.shortlist(&gen_main_query("500"));
    assert_eq!(main_only.len(), 1);
    assert_eq!(main_only[0].exam, ExamTrack::JeeMain);

    let both = engine.shortlist(&gen_both_query("500", "500"));
    assert_eq!(both.len(), 2);
}

#[test]
fn missing_category_cutoff_means_not_reachable() {
    let mut entry = main_entry(1);
    entry.closing.crl.remove(&Category::General);

    let engine = engine_with(vec![entry]);
    assert!(engine.shortlist(&gen_main_query("1")).is_empty());
    assert!(engine
        .recommend(&gen_main_query("1"), &open_preferences())
        .is_empty());
}

#[test]
fn zero_closing_rank_is_guarded_not_divided() {
    let mut entry = main_entry(1);
    entry.closing.crl.insert(Category::General, 0);

    let engine = engine_with(vec![entry]);
    assert!(engine.shortlist(&gen_main_query("1")).is_empty());
    assert!(engine
        .recommend(&gen_main_query("1"), &open_preferences())
        .is_empty());
}

#[test]
fn quota_preference_filters_the_jee_main_track_only() {
    let mut home = main_entry(1);
    home.quota = AdmissionQuota::HomeState;
    let mut other = main_entry(2);
    other.quota = AdmissionQuota::OtherState;
    let mut open = main_entry(3);
    open.quota = AdmissionQuota::AllIndia;
    // Advanced seats have no quota channel and must pass untouched.
    let advanced = advanced_entry(4);

    let mut query = gen_both_query("500", "500");
    query.quota = QuotaPreference::HomeState;

    let shortlist = engine_with(vec![home, other, open, advanced]).shortlist(&query);
    let ids: Vec<u32> = shortlist.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn reserved_category_requires_a_category_rank_entry_in_basic_mode() {
    let engine = engine_with(vec![main_entry(1)]);

    let mut query = gen_main_query("500");
    query.category = Category::Obc;
    assert!(engine.shortlist(&query).is_empty());

    query.ranks.jee_main_category = Some("40".to_string());
    assert_eq!(engine.shortlist(&query).len(), 1);
}

#[test]
fn category_rank_value_never_gates_admission() {
    // The category rank is collected but the comparison is CRL-only; even
    // an absurd category rank leaves a CRL-qualified candidate eligible.
    let engine = engine_with(vec![main_entry(1)]);

    let mut query = gen_main_query("500");
    query.category = Category::Obc;
    query.ranks.jee_main_category = Some("999999".to_string());

    assert_eq!(engine.shortlist(&query).len(), 1);
}

#[test]
fn personalized_mode_skips_the_category_rank_requirement() {
    let engine = engine_with(vec![main_entry(1)]);

    let mut query = gen_main_query("500");
    query.category = Category::Obc;
    // No category rank supplied; the relaxed path still matches.
    assert_eq!(engine.recommend(&query, &open_preferences()).len(), 1);
}

#[test]
fn fee_tolerance_admits_tiers_below_it() {
    let mut premium = main_entry(1);
    premium.fee_tier = FeeTier::High;
    let mut mid = main_entry(2);
    mid.fee_tier = FeeTier::Moderate;
    let mut budget = main_entry(3);
    budget.fee_tier = FeeTier::Low;

    let engine = engine_with(vec![premium, mid, budget]);
    let query = gen_main_query("500");

    let mut preferences = open_preferences();
    preferences.fee_tolerance = FeeTolerance::Moderate;
    let ids: Vec<u32> = engine
        .recommend(&query, &preferences)
        .iter()
        .map(|scored| scored.entry.id)
        .collect();
    assert_eq!(ids, vec![2, 3]);

    preferences.fee_tolerance = FeeTolerance::Low;
    let ids: Vec<u32> = engine
        .recommend(&query, &preferences)
        .iter()
        .map(|scored| scored.entry.id)
        .collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn institute_type_allow_list_is_skipped_when_empty() {
    let nit = main_entry(1);
    let mut private = main_entry(2);
    private.institute_type = InstituteType::Private;

    let engine = engine_with(vec![nit, private]);
    let query = gen_main_query("500");

    assert_eq!(engine.recommend(&query, &open_preferences()).len(), 2);

    let mut preferences = open_preferences();
    preferences.institute_types = [InstituteType::Nit].into_iter().collect();
    let matches = engine.recommend(&query, &preferences);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].entry.institute_type, InstituteType::Nit);
}

#[test]
fn branch_interest_filters_by_branch_category() {
    let circuital = main_entry(1);
    let mut mechanical = main_entry(2);
    mechanical.branch = "Mechanical Engineering".to_string();
    mechanical.branch_category = crate::predictor::catalog::BranchCategory::NonCircuital;

    let engine = engine_with(vec![circuital, mechanical]);
    let query = gen_main_query("500");

    let mut preferences = open_preferences();
    preferences.branch_interest = BranchInterest::Circuital;
    let matches = engine.recommend(&query, &preferences);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].entry.id, 1);

    preferences.branch_interest = BranchInterest::NonCircuital;
    let matches = engine.recommend(&query, &preferences);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].entry.id, 2);
}

#[test]
fn specific_branch_matches_on_the_first_word() {
    let mut cse = main_entry(1);
    cse.branch = "Computer Science and Engineering".to_string();
    let mut ece = main_entry(2);
    ece.branch = "Electronics and Communication Engineering".to_string();

    let engine = engine_with(vec![cse, ece]);
    let query = gen_main_query("500");

    let mut preferences = open_preferences();
    preferences.branch_interest = BranchInterest::Specific("Computer Engineering".to_string());
    let matches = engine.recommend(&query, &preferences);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].entry.id, 1);
}

#[test]
fn basic_form_completeness_is_checked_per_selected_track() {
    let query = gen_both_query("500", "700");
    assert!(query.basic_form_complete());

    let mut missing_advanced = query.clone();
    missing_advanced.ranks.jee_advanced_crl = Some("   ".to_string());
    assert!(!missing_advanced.basic_form_complete());

    let mut reserved = query;
    reserved.category = Category::Sc;
    assert!(!reserved.basic_form_complete());
    reserved.ranks = RankSheet {
        jee_main_crl: Some("500".to_string()),
        jee_main_category: Some("90".to_string()),
        jee_advanced_crl: Some("700".to_string()),
        jee_advanced_category: Some("120".to_string()),
    };
    assert!(reserved.basic_form_complete());
}
