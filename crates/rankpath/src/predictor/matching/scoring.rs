use super::domain::{
    FocusArea, LocationPriority, MatchComponent, MatchFactor, PreferenceProfile, ProbabilityBand,
};
use crate::predictor::catalog::{CollegeEntry, InstituteType};

/// Every match starts from the same baseline; bonuses and the admission
/// step move it from there.
pub(crate) const BASELINE_SCORE: f64 = 100.0;

/// Cities counted as metro for the exposure and location bonuses. Matched
/// by substring so composite names like "Greater Mumbai" still count.
pub(crate) const METRO_CITIES: [&str; 6] = [
    "Mumbai",
    "New Delhi",
    "Bangalore",
    "Chennai",
    "Hyderabad",
    "Kolkata",
];

pub(crate) fn is_metro(city: &str) -> bool {
    METRO_CITIES.iter().any(|metro| city.contains(metro))
}

pub(crate) struct ScoreBreakdown {
    pub components: Vec<MatchComponent>,
    pub total: f64,
    pub probability: ProbabilityBand,
}

/// Pure scoring over one eligible entry. The probability band is fixed by
/// the rank ratio before any bonus lands and never revisited; all bonuses
/// compose by plain addition.
pub(crate) fn score_entry(
    entry: &CollegeEntry,
    rank: u32,
    closing: u32,
    preferences: &PreferenceProfile,
) -> ScoreBreakdown {
    let mut components = Vec::new();
    let mut total = BASELINE_SCORE;

    let ratio = f64::from(rank) / f64::from(closing);
    let (probability, chance_points) = if ratio <= 0.7 {
        (ProbabilityBand::High, 30.0)
    } else if ratio <= 1.0 {
        (ProbabilityBand::Medium, 15.0)
    } else {
        (ProbabilityBand::Low, -20.0)
    };
    components.push(MatchComponent {
        factor: MatchFactor::AdmissionChance,
        points: chance_points,
        notes: format!("rank {rank} sits at {ratio:.2} of closing rank {closing}"),
    });
    total += chance_points;

    if let Some(region) = preferences.region {
        if entry.region == region {
            components.push(MatchComponent {
                factor: MatchFactor::RegionFit,
                points: 15.0,
                notes: format!("located in preferred {} region", region.label()),
            });
            total += 15.0;
        }
    }

    let metro = is_metro(&entry.city);
    let top_tier = matches!(
        entry.institute_type,
        InstituteType::Iit | InstituteType::Nit
    );

    if preferences.focus_areas.contains(&FocusArea::Placements) {
        let points = entry.average_package_lpa * 2.0;
        components.push(MatchComponent {
            factor: MatchFactor::PlacementsFocus,
            points,
            notes: format!(
                "average package {:.1} LPA weighted for placement focus",
                entry.average_package_lpa
            ),
        });
        total += points;
    }

    if preferences.focus_areas.contains(&FocusArea::Research) {
        let points = match entry.institute_type {
            InstituteType::Iit => 20.0,
            InstituteType::Nit => 10.0,
            _ => 0.0,
        };
        if points > 0.0 {
            components.push(MatchComponent {
                factor: MatchFactor::ResearchFocus,
                points,
                notes: format!("{} pedigree for research pathways", entry.institute_type.label()),
            });
            total += points;
        }
    }

    if preferences.focus_areas.contains(&FocusArea::Exposure) {
        let mut points = 0.0;
        if metro {
            points += 15.0;
        }
        if top_tier {
            points += 10.0;
        }
        if points > 0.0 {
            components.push(MatchComponent {
                factor: MatchFactor::ExposureFocus,
                points,
                notes: format!("industry exposure around {}", entry.city),
            });
            total += points;
        }
    }

    if preferences.focus_areas.contains(&FocusArea::Branch) {
        components.push(MatchComponent {
            factor: MatchFactor::BranchFocus,
            points: 10.0,
            notes: "weight on department strength".to_string(),
        });
        total += 10.0;
    }

    if preferences.focus_areas.contains(&FocusArea::Balanced) {
        let mut points = entry.average_package_lpa + 5.0;
        if metro {
            points += 5.0;
        }
        components.push(MatchComponent {
            factor: MatchFactor::BalancedFocus,
            points,
            notes: "balanced academics, placements, and campus life".to_string(),
        });
        total += points;
    }

    let location_match = match preferences.location_priority {
        LocationPriority::Metro => metro,
        LocationPriority::TierTwo => !metro,
        LocationPriority::Any => false,
    };
    if location_match {
        components.push(MatchComponent {
            factor: MatchFactor::LocationFit,
            points: 10.0,
            notes: format!("{} matches the preferred location profile", entry.city),
        });
        total += 10.0;
    }

    if preferences.institute_types.contains(&entry.institute_type) {
        components.push(MatchComponent {
            factor: MatchFactor::InstituteFit,
            points: 5.0,
            notes: format!("{} is a preferred institute type", entry.institute_type.label()),
        });
        total += 5.0;
    }

    let selectivity = (50.0 - f64::from(closing) / 1000.0).max(0.0);
    if selectivity > 0.0 {
        components.push(MatchComponent {
            factor: MatchFactor::Selectivity,
            points: selectivity,
            notes: format!("closing rank {closing} marks a selective seat"),
        });
        total += selectivity;
    }

    ScoreBreakdown {
        components,
        total,
        probability,
    }
}
