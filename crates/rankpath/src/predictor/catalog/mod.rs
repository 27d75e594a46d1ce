//! The read-only college cutoff catalog: domain types, the built-in seed
//! dataset, and the CSV importer for fresher cutoff exports.

pub mod domain;
mod import;
mod seed;

pub use domain::{
    AdmissionQuota, BranchCategory, Category, CollegeCatalog, CollegeEntry, CutoffLedger,
    ExamTrack, FeeTier, GenderEligibility, InstituteType, Region,
};
pub use import::{CatalogImportError, CatalogImporter};
