use crate::infra::{
    load_catalog, parse_category, parse_exam_selection, parse_quota, InMemorySessionStore,
};
use chrono::Local;
use clap::Args;
use rankpath::error::AppError;
use rankpath::predictor::catalog::{Category, CollegeEntry, GenderEligibility, InstituteType};
use rankpath::predictor::matching::{
    BranchLeaning, CandidateQuery, ExamSelection, FeeTolerance, FlowError, FocusArea,
    LocationPriority, MatchEngine, PersonalizationFlow, PredictorError, PredictorService,
    PreferenceProfile, QuotaPreference, RankSheet, RegionChoice, ScoredCollege, ViewMode,
    WizardAdvance, WizardAnswer, WizardError, WizardSession, WizardStep,
};
use rankpath::session::SessionStore;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ShortlistArgs {
    /// Exam selection: jee-main, jee-advanced, or both
    #[arg(long, default_value = "jee-main", value_parser = parse_exam_selection)]
    pub(crate) exams: ExamSelection,
    /// JEE Main rank on the common rank list
    #[arg(long)]
    pub(crate) jee_main_rank: Option<String>,
    /// JEE Main category rank (required for reserved categories)
    #[arg(long)]
    pub(crate) jee_main_category_rank: Option<String>,
    /// JEE Advanced rank on the common rank list
    #[arg(long)]
    pub(crate) jee_advanced_rank: Option<String>,
    /// JEE Advanced category rank (required for reserved categories)
    #[arg(long)]
    pub(crate) jee_advanced_category_rank: Option<String>,
    /// Admission category code (GEN, OBC, SC, ST, EWS)
    #[arg(long, default_value = "GEN", value_parser = parse_category)]
    pub(crate) category: Category,
    /// Quota preference: all, home-state, or other-state
    #[arg(long, default_value = "all", value_parser = parse_quota)]
    pub(crate) quota: QuotaPreference,
    /// Load cutoffs from a CSV export instead of the built-in catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Load cutoffs from a CSV export instead of the built-in catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
    /// Show the per-college score component breakdown
    #[arg(long)]
    pub(crate) show_components: bool,
}

impl ShortlistArgs {
    fn query(&self) -> CandidateQuery {
        CandidateQuery {
            exams: self.exams,
            ranks: RankSheet {
                jee_main_crl: self.jee_main_rank.clone(),
                jee_main_category: self.jee_main_category_rank.clone(),
                jee_advanced_crl: self.jee_advanced_rank.clone(),
                jee_advanced_category: self.jee_advanced_category_rank.clone(),
            },
            category: self.category,
            quota: self.quota,
            gender: None,
        }
    }
}

pub(crate) fn run_shortlist(args: ShortlistArgs) -> Result<(), AppError> {
    let (catalog, imported) = load_catalog(args.catalog_csv.clone())?;
    let engine = MatchEngine::new(catalog);
    let query = args.query();
    let shortlist = engine.shortlist(&query);

    print_data_source(imported);

    if shortlist.is_empty() {
        println!(
            "No colleges found for {} in the {} category. Check that every selected exam has a valid rank.",
            exam_label(args.exams),
            args.category.code()
        );
        return Ok(());
    }

    println!(
        "{} college(s) found for {} in the {} category, sorted by closing rank",
        shortlist.len(),
        exam_label(args.exams),
        args.category.code()
    );
    for entry in &shortlist {
        print_entry_row(entry, args.category);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!(
        "College matching demo (generated {})",
        Local::now().date_naive()
    );

    let (catalog, imported) = load_catalog(args.catalog_csv.clone())?;
    print_data_source(imported);

    let session = Arc::new(InMemorySessionStore::default());
    session.subscribe(Box::new(|value| {
        println!("  [session] authenticated={value}");
    }));

    let engine = Arc::new(MatchEngine::new(catalog));
    println!("Catalog holds {} entries", engine.catalog().len());
    let service = Arc::new(PredictorService::new(engine, session.clone()));

    let query = CandidateQuery {
        exams: ExamSelection::Both,
        ranks: RankSheet {
            jee_main_crl: Some("1200".to_string()),
            jee_advanced_crl: Some("800".to_string()),
            ..RankSheet::default()
        },
        category: Category::General,
        quota: QuotaPreference::All,
        gender: None,
    };

    println!("\nBasic shortlist (GEN, JEE Main rank 1200, JEE Advanced rank 800)");
    let shortlist = service.shortlist(&query);
    if shortlist.is_empty() {
        println!("- no eligible colleges");
    }
    for entry in &shortlist {
        print_entry_row(entry, query.category);
    }

    println!("\nPersonalization walk");
    let mut flow = PersonalizationFlow::new(session.clone());
    match flow.begin_personalization() {
        Err(FlowError::AuthRequired(resume)) => {
            println!(
                "- personalization blocked: sign in first, then resume at '{}'",
                resume.redirect_to
            );
        }
        Ok(mode) => println!("- unexpected open session, mode {mode}"),
        Err(err) => println!("- flow error: {err}"),
    }

    println!("- signing in through the external auth flow");
    session.set_authenticated(true);
    match flow.resume_after_login() {
        Some(ViewMode::Wizard) => println!("- resumed into the wizard"),
        other => println!("- resume produced {other:?}"),
    }

    let preferences = match walk_wizard() {
        Ok(preferences) => preferences,
        Err(err) => {
            println!("- wizard incomplete: {err}");
            return Ok(());
        }
    };

    if let Err(err) = flow.complete_wizard(preferences.clone()) {
        println!("- flow error: {err}");
        return Ok(());
    }
    if let Err(err) = flow.finish_loading() {
        println!("- flow error: {err}");
        return Ok(());
    }
    println!("- flow reached the {} view", flow.mode());

    let report = match service.recommend(&query, &preferences) {
        Ok(report) => report,
        Err(PredictorError::AuthRequired(_)) => {
            println!("- session lost before scoring");
            return Ok(());
        }
    };

    println!(
        "\nPersonalized results: {} match(es), {} high chance, {} medium chance",
        report.total(),
        report.high_chance,
        report.medium_chance
    );
    for scored in &report.matches {
        print_scored_row(scored, query.category);
        if args.show_components {
            for component in &scored.components {
                println!(
                    "      {:?}: {:+.1} ({})",
                    component.factor, component.points, component.notes
                );
            }
        }
    }

    Ok(())
}

/// Scripted wizard answers standing in for the interactive questionnaire.
fn walk_wizard() -> Result<PreferenceProfile, WizardError> {
    let mut wizard = WizardSession::new();
    let answers = [
        WizardAnswer::Region(RegionChoice::South),
        WizardAnswer::BranchLeaning(BranchLeaning::Circuital),
        WizardAnswer::FeeTolerance(FeeTolerance::Moderate),
        WizardAnswer::InstituteTypes(
            [InstituteType::Iit, InstituteType::Nit, InstituteType::Iiit]
                .into_iter()
                .collect(),
        ),
        WizardAnswer::LocationPriority(LocationPriority::Any),
        WizardAnswer::FocusAreas(
            [FocusArea::Placements, FocusArea::Exposure]
                .into_iter()
                .collect(),
        ),
    ];

    for answer in answers {
        let (step, total) = wizard.progress();
        println!(
            "- wizard step {step}/{total}: {}",
            wizard.current_step().label()
        );
        wizard.record(answer);
        match wizard.advance()? {
            WizardAdvance::Step(_) => {}
            WizardAdvance::Complete(profile) => return Ok(profile),
        }
    }

    Err(WizardError::Unanswered(WizardStep::FocusAreas.label()))
}

fn exam_label(exams: ExamSelection) -> &'static str {
    match exams {
        ExamSelection::JeeMain => "JEE Main",
        ExamSelection::JeeAdvanced => "JEE Advanced",
        ExamSelection::Both => "JEE Main + Advanced",
    }
}

fn print_data_source(imported: bool) {
    if imported {
        println!("Data source: cutoff CSV import");
    } else {
        println!("Data source: built-in catalog (previous cycle cutoffs)");
    }
}

fn print_entry_row(entry: &CollegeEntry, category: Category) {
    let closing = entry
        .closing_crl(category)
        .map(|rank| rank.to_string())
        .unwrap_or_else(|| "-".to_string());
    let seat_pool = match entry.gender {
        GenderEligibility::GenderNeutral => String::new(),
        GenderEligibility::FemaleOnly => format!(" | {}", entry.gender.label()),
    };
    println!(
        "- {} | {} | {} | closing {} | avg package {:.1} LPA | fees {} | {}{}",
        entry.institute,
        entry.branch,
        entry.exam.label(),
        closing,
        entry.average_package_lpa,
        entry.fee_tier.label(),
        entry.quota.label(),
        seat_pool
    );
}

fn print_scored_row(scored: &ScoredCollege, category: Category) {
    let closing = scored
        .entry
        .closing_crl(category)
        .map(|rank| rank.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "- [{}] {} | {} ({}) | score {:.1} | closing {} | avg package {:.1} LPA",
        scored.probability.label(),
        scored.entry.institute,
        scored.entry.branch,
        scored.entry.branch_category.label(),
        scored.score,
        closing,
        scored.entry.average_package_lpa
    );
}
