use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{
    AdmissionQuota, BranchCategory, Category, CollegeCatalog, CollegeEntry, CutoffLedger,
    ExamTrack, FeeTier, GenderEligibility, InstituteType, Region,
};

/// Loads a cutoff catalog from a CSV export. One row per
/// (institute, branch, exam, quota) entry; empty rank cells mean the entry
/// is not reachable under that category.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<CollegeCatalog, CatalogImportError> {
        let reader = std::fs::File::open(path)?;
        Self::from_reader(reader)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<CollegeCatalog, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        let mut seen_ids = BTreeSet::new();

        for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            // Header occupies the first line of the file.
            let row = index + 2;
            let parsed = record?;
            let entry = parsed.into_entry(row)?;

            if !seen_ids.insert(entry.id) {
                return Err(CatalogImportError::DuplicateId { row, id: entry.id });
            }

            entries.push(entry);
        }

        Ok(CollegeCatalog::new(entries))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to open catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read catalog csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unknown {field} '{value}'")]
    UnknownValue {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error("row {row}: average package must be positive")]
    NonPositivePackage { row: usize },
    #[error("row {row}: {category} opening rank {opening} exceeds closing rank {closing}")]
    InvertedWindow {
        row: usize,
        category: &'static str,
        opening: u32,
        closing: u32,
    },
    #[error("row {row}: duplicate entry id {id}")]
    DuplicateId { row: usize, id: u32 },
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: u32,
    institute: String,
    city: String,
    state: String,
    region: String,
    institute_type: String,
    exam: String,
    branch: String,
    fee_tier: String,
    average_package_lpa: f64,
    quota: String,
    gender: String,
    #[serde(default)]
    open_crl_gen: Option<u32>,
    #[serde(default)]
    close_crl_gen: Option<u32>,
    #[serde(default)]
    open_crl_obc: Option<u32>,
    #[serde(default)]
    close_crl_obc: Option<u32>,
    #[serde(default)]
    open_crl_sc: Option<u32>,
    #[serde(default)]
    close_crl_sc: Option<u32>,
    #[serde(default)]
    open_crl_st: Option<u32>,
    #[serde(default)]
    close_crl_st: Option<u32>,
    #[serde(default)]
    open_crl_ews: Option<u32>,
    #[serde(default)]
    close_crl_ews: Option<u32>,
    #[serde(default)]
    open_cat_obc: Option<u32>,
    #[serde(default)]
    close_cat_obc: Option<u32>,
    #[serde(default)]
    open_cat_sc: Option<u32>,
    #[serde(default)]
    close_cat_sc: Option<u32>,
    #[serde(default)]
    open_cat_st: Option<u32>,
    #[serde(default)]
    close_cat_st: Option<u32>,
    #[serde(default)]
    open_cat_ews: Option<u32>,
    #[serde(default)]
    close_cat_ews: Option<u32>,
}

impl CatalogRow {
    fn into_entry(self, row: usize) -> Result<CollegeEntry, CatalogImportError> {
        let region = Region::parse(&self.region).ok_or_else(|| CatalogImportError::UnknownValue {
            row,
            field: "region",
            value: self.region.clone(),
        })?;
        let institute_type = InstituteType::parse(&self.institute_type).ok_or_else(|| {
            CatalogImportError::UnknownValue {
                row,
                field: "institute_type",
                value: self.institute_type.clone(),
            }
        })?;
        let exam = ExamTrack::parse(&self.exam).ok_or_else(|| CatalogImportError::UnknownValue {
            row,
            field: "exam",
            value: self.exam.clone(),
        })?;
        let fee_tier =
            FeeTier::parse(&self.fee_tier).ok_or_else(|| CatalogImportError::UnknownValue {
                row,
                field: "fee_tier",
                value: self.fee_tier.clone(),
            })?;
        let quota =
            AdmissionQuota::parse(&self.quota).ok_or_else(|| CatalogImportError::UnknownValue {
                row,
                field: "quota",
                value: self.quota.clone(),
            })?;
        let gender = GenderEligibility::parse(&self.gender).ok_or_else(|| {
            CatalogImportError::UnknownValue {
                row,
                field: "gender",
                value: self.gender.clone(),
            }
        })?;

        if !(self.average_package_lpa > 0.0) {
            return Err(CatalogImportError::NonPositivePackage { row });
        }

        let crl_windows = [
            (Category::General, self.open_crl_gen, self.close_crl_gen),
            (Category::Obc, self.open_crl_obc, self.close_crl_obc),
            (Category::Sc, self.open_crl_sc, self.close_crl_sc),
            (Category::St, self.open_crl_st, self.close_crl_st),
            (Category::Ews, self.open_crl_ews, self.close_crl_ews),
        ];
        let category_windows = [
            (Category::Obc, self.open_cat_obc, self.close_cat_obc),
            (Category::Sc, self.open_cat_sc, self.close_cat_sc),
            (Category::St, self.open_cat_st, self.close_cat_st),
            (Category::Ews, self.open_cat_ews, self.close_cat_ews),
        ];

        let mut opening = CutoffLedger::default();
        let mut closing = CutoffLedger::default();

        for (category, open, close) in crl_windows {
            validate_window(row, category, open, close)?;
            if let Some(rank) = open {
                opening.crl.insert(category, rank);
            }
            if let Some(rank) = close {
                closing.crl.insert(category, rank);
            }
        }
        for (category, open, close) in category_windows {
            validate_window(row, category, open, close)?;
            if let Some(rank) = open {
                opening.category.insert(category, rank);
            }
            if let Some(rank) = close {
                closing.category.insert(category, rank);
            }
        }

        let branch_category = BranchCategory::classify(&self.branch);

        Ok(CollegeEntry {
            id: self.id,
            institute: self.institute,
            city: self.city,
            state: self.state,
            region,
            institute_type,
            exam,
            branch: self.branch,
            branch_category,
            opening,
            closing,
            fee_tier,
            average_package_lpa: self.average_package_lpa,
            quota,
            gender,
        })
    }
}

fn validate_window(
    row: usize,
    category: Category,
    open: Option<u32>,
    close: Option<u32>,
) -> Result<(), CatalogImportError> {
    if let (Some(opening), Some(closing)) = (open, close) {
        if opening > closing {
            return Err(CatalogImportError::InvertedWindow {
                row,
                category: category.code(),
                opening,
                closing,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "id,institute,city,state,region,institute_type,exam,branch,fee_tier,average_package_lpa,quota,gender,open_crl_gen,close_crl_gen,open_crl_obc,close_crl_obc,open_crl_sc,close_crl_sc,open_crl_st,close_crl_st,open_crl_ews,close_crl_ews,open_cat_obc,close_cat_obc,open_cat_sc,close_cat_sc,open_cat_st,close_cat_st,open_cat_ews,close_cat_ews";

    const COLUMNS: usize = 30;

    /// Build a full-width row from the twelve descriptive fields plus
    /// (column, value) rank cells; everything else stays empty.
    fn row(prefix: &str, ranks: &[(&str, &str)]) -> String {
        let header_fields: Vec<&str> = HEADER.split(',').collect();
        let mut fields: Vec<String> = prefix.split(',').map(str::to_string).collect();
        fields.resize(COLUMNS, String::new());
        for (column, value) in ranks {
            let index = header_fields
                .iter()
                .position(|name| name == column)
                .expect("known column");
            fields[index] = (*value).to_string();
        }
        fields.join(",")
    }

    fn import(rows: &[String]) -> Result<CollegeCatalog, CatalogImportError> {
        let payload = format!("{HEADER}\n{}\n", rows.join("\n"));
        CatalogImporter::from_reader(Cursor::new(payload.into_bytes()))
    }

    const WARANGAL: &str = "1,NIT Warangal,Warangal,Telangana,South,NIT,JEE Main,Computer Science and Engineering,Low,13.9,Home State,Gender-neutral";

    #[test]
    fn imports_a_complete_row() {
        let catalog = import(&[row(
            WARANGAL,
            &[
                ("open_crl_gen", "320"),
                ("close_crl_gen", "1750"),
                ("open_crl_obc", "520"),
                ("close_crl_obc", "3100"),
                ("open_cat_obc", "110"),
                ("close_cat_obc", "960"),
            ],
        )])
        .expect("catalog imports");

        assert_eq!(catalog.len(), 1);
        let entry = &catalog.entries()[0];
        assert_eq!(entry.institute, "NIT Warangal");
        assert_eq!(entry.exam, ExamTrack::JeeMain);
        assert_eq!(entry.quota, AdmissionQuota::HomeState);
        assert_eq!(entry.branch_category, BranchCategory::Circuital);
        assert_eq!(entry.closing_crl(Category::General), Some(1750));
        assert_eq!(entry.closing_crl(Category::Sc), None);
        assert_eq!(entry.closing.category_rank_for(Category::Obc), Some(960));
    }

    #[test]
    fn rejects_inverted_rank_window() {
        let result = import(&[row(
            WARANGAL,
            &[("open_crl_gen", "1750"), ("close_crl_gen", "320")],
        )]);

        match result {
            Err(CatalogImportError::InvertedWindow { category, .. }) => {
                assert_eq!(category, "GEN");
            }
            other => panic!("expected inverted window error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_institute_type() {
        let result = import(&[row(
            "1,Somewhere,Nowhere,State,South,ACME,JEE Main,Civil Engineering,Low,5.0,All India,Gender-neutral",
            &[("open_crl_gen", "10"), ("close_crl_gen", "20")],
        )]);

        match result {
            Err(CatalogImportError::UnknownValue { field, value, .. }) => {
                assert_eq!(field, "institute_type");
                assert_eq!(value, "ACME");
            }
            other => panic!("expected unknown value error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_positive_average_package() {
        let result = import(&[row(
            "1,Somewhere,Nowhere,State,South,GFTI,JEE Main,Civil Engineering,Low,0,All India,Gender-neutral",
            &[("open_crl_gen", "10"), ("close_crl_gen", "20")],
        )]);

        assert!(matches!(
            result,
            Err(CatalogImportError::NonPositivePackage { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let first = row(WARANGAL, &[("close_crl_gen", "20")]);
        let second = row(WARANGAL, &[("close_crl_gen", "40")]);
        let result = import(&[first, second]);

        assert!(matches!(
            result,
            Err(CatalogImportError::DuplicateId { id: 1, .. })
        ));
    }
}
