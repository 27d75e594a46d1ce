use std::collections::BTreeMap;

use super::domain::{
    AdmissionQuota, BranchCategory, Category, CollegeCatalog, CollegeEntry, CutoffLedger,
    ExamTrack, FeeTier, GenderEligibility, InstituteType, Region,
};

impl CollegeCatalog {
    /// The built-in cutoff catalog, derived from the prior admission cycle.
    /// Deployments with fresher data load it through the CSV importer
    /// instead.
    pub fn seed() -> Self {
        Self::new(seed_entries())
    }
}

fn ranks(pairs: &[(Category, u32)]) -> BTreeMap<Category, u32> {
    pairs.iter().copied().collect()
}

struct SeedRow {
    id: u32,
    institute: &'static str,
    city: &'static str,
    state: &'static str,
    region: Region,
    institute_type: InstituteType,
    exam: ExamTrack,
    branch: &'static str,
    fee_tier: FeeTier,
    average_package_lpa: f64,
    quota: AdmissionQuota,
    gender: GenderEligibility,
    opening_crl: &'static [(Category, u32)],
    closing_crl: &'static [(Category, u32)],
    opening_category: &'static [(Category, u32)],
    closing_category: &'static [(Category, u32)],
}

impl SeedRow {
    fn build(self) -> CollegeEntry {
        CollegeEntry {
            id: self.id,
            institute: self.institute.to_string(),
            city: self.city.to_string(),
            state: self.state.to_string(),
            region: self.region,
            institute_type: self.institute_type,
            exam: self.exam,
            branch: self.branch.to_string(),
            branch_category: BranchCategory::classify(self.branch),
            opening: CutoffLedger {
                crl: ranks(self.opening_crl),
                category: ranks(self.opening_category),
            },
            closing: CutoffLedger {
                crl: ranks(self.closing_crl),
                category: ranks(self.closing_category),
            },
            fee_tier: self.fee_tier,
            average_package_lpa: self.average_package_lpa,
            quota: self.quota,
            gender: self.gender,
        }
    }
}

fn seed_entries() -> Vec<CollegeEntry> {
    use Category::{Ews, General, Obc, Sc, St};

    let rows = vec![
        SeedRow {
            id: 1,
            institute: "IIT Bombay",
            city: "Mumbai",
            state: "Maharashtra",
            region: Region::West,
            institute_type: InstituteType::Iit,
            exam: ExamTrack::JeeAdvanced,
            branch: "Computer Science and Engineering",
            fee_tier: FeeTier::Low,
            average_package_lpa: 21.8,
            quota: AdmissionQuota::AllIndia,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 1), (Obc, 4), (Sc, 11), (Ews, 2)],
            closing_crl: &[(General, 68), (Obc, 210), (Sc, 520), (Ews, 105)],
            opening_category: &[(Obc, 1), (Sc, 2), (Ews, 1)],
            closing_category: &[(Obc, 62), (Sc, 98), (Ews, 41)],
        },
        SeedRow {
            id: 2,
            institute: "IIT Delhi",
            city: "New Delhi",
            state: "Delhi",
            region: Region::North,
            institute_type: InstituteType::Iit,
            exam: ExamTrack::JeeAdvanced,
            branch: "Computer Science and Engineering",
            fee_tier: FeeTier::Low,
            average_package_lpa: 20.5,
            quota: AdmissionQuota::AllIndia,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 12), (Obc, 18), (Sc, 35), (Ews, 9)],
            closing_crl: &[(General, 110), (Obc, 320), (Sc, 760), (Ews, 165)],
            opening_category: &[(Obc, 3), (Sc, 6), (Ews, 2)],
            closing_category: &[(Obc, 95), (Sc, 142), (Ews, 58)],
        },
        SeedRow {
            id: 3,
            institute: "IIT Hyderabad",
            city: "Hyderabad",
            state: "Telangana",
            region: Region::South,
            institute_type: InstituteType::Iit,
            exam: ExamTrack::JeeAdvanced,
            branch: "Artificial Intelligence",
            fee_tier: FeeTier::Low,
            average_package_lpa: 19.2,
            quota: AdmissionQuota::AllIndia,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 210), (Obc, 340), (Sc, 820), (Ews, 260)],
            closing_crl: &[(General, 980), (Obc, 1850), (Sc, 3400), (Ews, 1240)],
            opening_category: &[(Obc, 70), (Sc, 130), (Ews, 55)],
            closing_category: &[(Obc, 540), (Sc, 880), (Ews, 360)],
        },
        SeedRow {
            id: 4,
            institute: "IIT Madras",
            city: "Chennai",
            state: "Tamil Nadu",
            region: Region::South,
            institute_type: InstituteType::Iit,
            exam: ExamTrack::JeeAdvanced,
            branch: "Mechanical Engineering",
            fee_tier: FeeTier::Low,
            average_package_lpa: 16.1,
            quota: AdmissionQuota::AllIndia,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 1250), (Obc, 1700), (Sc, 2600), (St, 3100)],
            closing_crl: &[(General, 3900), (Obc, 5300), (Sc, 8900), (St, 9900)],
            opening_category: &[(Obc, 430), (Sc, 520), (St, 360)],
            closing_category: &[(Obc, 1480), (Sc, 1850), (St, 1120)],
        },
        SeedRow {
            id: 5,
            institute: "IIT Kharagpur",
            city: "Kharagpur",
            state: "West Bengal",
            region: Region::East,
            institute_type: InstituteType::Iit,
            exam: ExamTrack::JeeAdvanced,
            branch: "Electrical Engineering",
            fee_tier: FeeTier::Low,
            average_package_lpa: 15.3,
            quota: AdmissionQuota::AllIndia,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 950), (Obc, 1200), (Sc, 2000), (Ews, 1000)],
            closing_crl: &[(General, 2150), (Obc, 3400), (Sc, 6300), (Ews, 2600)],
            opening_category: &[(Obc, 310), (Sc, 420), (Ews, 230)],
            closing_category: &[(Obc, 980), (Sc, 1350), (Ews, 690)],
        },
        SeedRow {
            id: 6,
            institute: "IIT Kanpur",
            city: "Kanpur",
            state: "Uttar Pradesh",
            region: Region::North,
            institute_type: InstituteType::Iit,
            exam: ExamTrack::JeeAdvanced,
            branch: "Chemical Engineering",
            fee_tier: FeeTier::Low,
            average_package_lpa: 13.8,
            quota: AdmissionQuota::AllIndia,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 2200), (Obc, 2700), (Sc, 4100)],
            closing_crl: &[(General, 4900), (Obc, 6800), (Sc, 10500)],
            opening_category: &[(Obc, 680), (Sc, 790)],
            closing_category: &[(Obc, 1950), (Sc, 2300)],
        },
        SeedRow {
            id: 7,
            institute: "NIT Tiruchirappalli",
            city: "Tiruchirappalli",
            state: "Tamil Nadu",
            region: Region::South,
            institute_type: InstituteType::Nit,
            exam: ExamTrack::JeeMain,
            branch: "Computer Science and Engineering",
            fee_tier: FeeTier::Low,
            average_package_lpa: 14.2,
            quota: AdmissionQuota::HomeState,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 260), (Obc, 410), (Sc, 900), (Ews, 310)],
            closing_crl: &[(General, 1450), (Obc, 2600), (Sc, 5600), (Ews, 1800)],
            opening_category: &[(Obc, 90), (Sc, 160), (Ews, 70)],
            closing_category: &[(Obc, 820), (Sc, 1400), (Ews, 540)],
        },
        SeedRow {
            id: 8,
            institute: "NIT Tiruchirappalli",
            city: "Tiruchirappalli",
            state: "Tamil Nadu",
            region: Region::South,
            institute_type: InstituteType::Nit,
            exam: ExamTrack::JeeMain,
            branch: "Computer Science and Engineering",
            fee_tier: FeeTier::Low,
            average_package_lpa: 14.2,
            quota: AdmissionQuota::OtherState,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 150), (Obc, 260), (Sc, 620), (Ews, 200)],
            closing_crl: &[(General, 1050), (Obc, 1900), (Sc, 4200), (Ews, 1350)],
            opening_category: &[(Obc, 60), (Sc, 110), (Ews, 45)],
            closing_category: &[(Obc, 590), (Sc, 1050), (Ews, 400)],
        },
        SeedRow {
            id: 9,
            institute: "NIT Surathkal",
            city: "Surathkal",
            state: "Karnataka",
            region: Region::South,
            institute_type: InstituteType::Nit,
            exam: ExamTrack::JeeMain,
            branch: "Electronics and Communication Engineering",
            fee_tier: FeeTier::Low,
            average_package_lpa: 12.6,
            quota: AdmissionQuota::OtherState,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 900), (Obc, 1300), (Sc, 2700), (Ews, 1100)],
            closing_crl: &[(General, 3600), (Obc, 6100), (Sc, 11800), (Ews, 4400)],
            opening_category: &[(Obc, 240), (Sc, 380), (Ews, 190)],
            closing_category: &[(Obc, 1700), (Sc, 2900), (Ews, 1250)],
        },
        SeedRow {
            id: 10,
            institute: "NIT Warangal",
            city: "Warangal",
            state: "Telangana",
            region: Region::South,
            institute_type: InstituteType::Nit,
            exam: ExamTrack::JeeMain,
            branch: "Computer Science and Engineering",
            fee_tier: FeeTier::Low,
            average_package_lpa: 13.9,
            quota: AdmissionQuota::HomeState,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 320), (Obc, 520), (Sc, 1200), (Ews, 420)],
            closing_crl: &[(General, 1750), (Obc, 3100), (Sc, 6900), (Ews, 2300)],
            opening_category: &[(Obc, 110), (Sc, 210), (Ews, 95)],
            closing_category: &[(Obc, 960), (Sc, 1750), (Ews, 680)],
        },
        SeedRow {
            id: 11,
            institute: "NIT Durgapur",
            city: "Durgapur",
            state: "West Bengal",
            region: Region::East,
            institute_type: InstituteType::Nit,
            exam: ExamTrack::JeeMain,
            branch: "Electronics and Communication Engineering",
            fee_tier: FeeTier::Low,
            average_package_lpa: 8.9,
            quota: AdmissionQuota::HomeState,
            gender: GenderEligibility::FemaleOnly,
            opening_crl: &[(General, 5200), (Obc, 7800), (Sc, 15800)],
            closing_crl: &[(General, 16800), (Obc, 26800), (Sc, 49500)],
            opening_category: &[(Obc, 2100), (Sc, 4300)],
            closing_category: &[(Obc, 8100), (Sc, 13600)],
        },
        SeedRow {
            id: 12,
            institute: "NIT Rourkela",
            city: "Rourkela",
            state: "Odisha",
            region: Region::East,
            institute_type: InstituteType::Nit,
            exam: ExamTrack::JeeMain,
            branch: "Mechanical Engineering",
            fee_tier: FeeTier::Low,
            average_package_lpa: 9.8,
            quota: AdmissionQuota::OtherState,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 9500), (Obc, 14200), (Sc, 28600), (St, 31800)],
            closing_crl: &[(General, 26500), (Obc, 41200), (Sc, 78500), (St, 88000)],
            opening_category: &[(Obc, 3900), (Sc, 7600), (St, 4100)],
            closing_category: &[(Obc, 12800), (Sc, 21400), (St, 11900)],
        },
        SeedRow {
            id: 13,
            institute: "IIIT Hyderabad",
            city: "Hyderabad",
            state: "Telangana",
            region: Region::South,
            institute_type: InstituteType::Iiit,
            exam: ExamTrack::JeeMain,
            branch: "Computer Science and Engineering",
            fee_tier: FeeTier::High,
            average_package_lpa: 23.5,
            quota: AdmissionQuota::AllIndia,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 90), (Obc, 150), (Ews, 120)],
            closing_crl: &[(General, 620), (Obc, 1150), (Ews, 800)],
            opening_category: &[(Obc, 35), (Ews, 28)],
            closing_category: &[(Obc, 330), (Ews, 240)],
        },
        SeedRow {
            id: 14,
            institute: "IIIT Delhi",
            city: "New Delhi",
            state: "Delhi",
            region: Region::North,
            institute_type: InstituteType::Iiit,
            exam: ExamTrack::JeeMain,
            branch: "Information Technology",
            fee_tier: FeeTier::Moderate,
            average_package_lpa: 15.8,
            quota: AdmissionQuota::HomeState,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 1500), (Obc, 2400), (Sc, 5300), (Ews, 1900)],
            closing_crl: &[(General, 5900), (Obc, 9800), (Sc, 19800), (Ews, 7400)],
            opening_category: &[(Obc, 480), (Sc, 910), (Ews, 370)],
            closing_category: &[(Obc, 2900), (Sc, 5200), (Ews, 2150)],
        },
        SeedRow {
            id: 15,
            institute: "IIIT Allahabad",
            city: "Prayagraj",
            state: "Uttar Pradesh",
            region: Region::North,
            institute_type: InstituteType::Iiit,
            exam: ExamTrack::JeeMain,
            branch: "Information Technology",
            fee_tier: FeeTier::Moderate,
            average_package_lpa: 12.4,
            quota: AdmissionQuota::AllIndia,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 2400), (Obc, 3800), (Sc, 8200), (Ews, 3100)],
            closing_crl: &[(General, 8900), (Obc, 14600), (Sc, 29400), (Ews, 11200)],
            opening_category: &[(Obc, 760), (Sc, 1500), (Ews, 620)],
            closing_category: &[(Obc, 4300), (Sc, 7900), (Ews, 3300)],
        },
        SeedRow {
            id: 16,
            institute: "Birla Institute of Technology Mesra",
            city: "Ranchi",
            state: "Jharkhand",
            region: Region::East,
            institute_type: InstituteType::Gfti,
            exam: ExamTrack::JeeMain,
            branch: "Electronics and Communication Engineering",
            fee_tier: FeeTier::Moderate,
            average_package_lpa: 8.6,
            quota: AdmissionQuota::AllIndia,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 14500), (Obc, 21600), (Sc, 44800)],
            closing_crl: &[(General, 39500), (Obc, 61500), (Sc, 118000)],
            opening_category: &[(Obc, 5900), (Sc, 11400)],
            closing_category: &[(Obc, 18900), (Sc, 32400)],
        },
        SeedRow {
            id: 17,
            institute: "Punjab Engineering College",
            city: "Chandigarh",
            state: "Chandigarh",
            region: Region::North,
            institute_type: InstituteType::Gfti,
            exam: ExamTrack::JeeMain,
            branch: "Mechanical Engineering",
            fee_tier: FeeTier::Moderate,
            average_package_lpa: 7.4,
            quota: AdmissionQuota::AllIndia,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 24800), (Obc, 37500), (Sc, 74000)],
            closing_crl: &[(General, 58500), (Obc, 89500), (Sc, 168000)],
            opening_category: &[(Obc, 9800), (Sc, 18400)],
            closing_category: &[(Obc, 27600), (Sc, 46800)],
        },
        SeedRow {
            id: 18,
            institute: "Thapar Institute of Engineering and Technology",
            city: "Patiala",
            state: "Punjab",
            region: Region::North,
            institute_type: InstituteType::Private,
            exam: ExamTrack::JeeMain,
            branch: "Computer Science and Engineering",
            fee_tier: FeeTier::High,
            average_package_lpa: 11.5,
            quota: AdmissionQuota::AllIndia,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 18500), (Obc, 27400), (Ews, 22800)],
            closing_crl: &[(General, 52000), (Obc, 79500), (Ews, 63500)],
            opening_category: &[(Obc, 7400), (Ews, 5900)],
            closing_category: &[(Obc, 23800), (Ews, 18600)],
        },
        SeedRow {
            id: 19,
            institute: "VIT Vellore",
            city: "Vellore",
            state: "Tamil Nadu",
            region: Region::South,
            institute_type: InstituteType::Private,
            exam: ExamTrack::JeeMain,
            branch: "Computer Science and Engineering",
            fee_tier: FeeTier::High,
            average_package_lpa: 9.2,
            quota: AdmissionQuota::AllIndia,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 31000), (Obc, 46500)],
            closing_crl: &[(General, 84000), (Obc, 126000)],
            opening_category: &[(Obc, 12800)],
            closing_category: &[(Obc, 38500)],
        },
        SeedRow {
            id: 20,
            institute: "Jadavpur University",
            city: "Kolkata",
            state: "West Bengal",
            region: Region::East,
            institute_type: InstituteType::Gfti,
            exam: ExamTrack::JeeMain,
            branch: "Civil Engineering",
            fee_tier: FeeTier::Low,
            average_package_lpa: 6.8,
            quota: AdmissionQuota::HomeState,
            gender: GenderEligibility::GenderNeutral,
            opening_crl: &[(General, 21500), (Obc, 32800), (Sc, 64500)],
            closing_crl: &[(General, 47500), (Obc, 73500), (Sc, 139000)],
            opening_category: &[(Obc, 8600), (Sc, 16200)],
            closing_category: &[(Obc, 24900), (Sc, 41800)],
        },
    ];

    rows.into_iter().map(SeedRow::build).collect()
}
