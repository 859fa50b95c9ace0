use super::domain::{FraHolder, VillageProfile};
use super::validation::ValidationError;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read record export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} rejected: {source}")]
    Invalid {
        row: usize,
        #[source]
        source: ValidationError,
    },
}

/// Loads holder and village batches from CSV exports whose headers match the field names.
pub struct RecordImporter;

impl RecordImporter {
    pub fn holders_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<FraHolder>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::holders_from_reader(file)
    }

    pub fn holders_from_reader<R: Read>(reader: R) -> Result<Vec<FraHolder>, ImportError> {
        parse_rows(reader, FraHolder::validate)
    }

    pub fn villages_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<VillageProfile>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::villages_from_reader(file)
    }

    pub fn villages_from_reader<R: Read>(reader: R) -> Result<Vec<VillageProfile>, ImportError> {
        parse_rows(reader, VillageProfile::validate)
    }
}

fn parse_rows<R, T, V>(reader: R, validate: V) -> Result<Vec<T>, ImportError>
where
    R: Read,
    T: DeserializeOwned,
    V: Fn(&T) -> Result<(), ValidationError>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<T>().enumerate() {
        let record = row?;
        // Header is line 1, so data rows start at 2.
        validate(&record).map_err(|source| ImportError::Invalid {
            row: index + 2,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dss::domain::SocialCategory;

    const HOLDER_HEADER: &str = "holder_id,name,family_size,land_area_hectares,annual_income,social_category,has_bank_account,aadhaar_linked,village_code,district,state,age,gender,education_level,occupation,has_electricity,has_toilet,water_source,mobile_number";

    #[test]
    fn blank_optional_cells_are_absent() {
        let csv = format!(
            "{HOLDER_HEADER}\nH-1, Sita Munda ,5,1.5,,ST,true,false,V-1,Ranchi,Jharkhand,42,Female,Primary,farmer,true,false,Handpump,\n"
        );

        let holders = RecordImporter::holders_from_reader(csv.as_bytes()).expect("import succeeds");

        assert_eq!(holders.len(), 1);
        let holder = &holders[0];
        assert_eq!(holder.name, "Sita Munda");
        assert_eq!(holder.annual_income, None);
        assert_eq!(holder.mobile_number, None);
        assert_eq!(holder.social_category, SocialCategory::ScheduledTribe);
    }

    #[test]
    fn out_of_range_rows_report_their_line() {
        let csv = format!(
            "{HOLDER_HEADER}\nH-1,A,5,1.5,50000,ST,true,true,V-1,D,S,42,Male,None,farmer,true,true,Well,\nH-2,B,5,1.5,50000,SC,true,true,V-1,D,S,140,Male,None,farmer,true,true,Well,\n"
        );

        let err = RecordImporter::holders_from_reader(csv.as_bytes()).expect_err("age rejected");

        match err {
            ImportError::Invalid { row, source } => {
                assert_eq!(row, 3);
                assert!(matches!(
                    source,
                    ValidationError::OutOfRange { field: "age", .. }
                ));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn unknown_social_category_is_a_csv_error() {
        let csv = format!(
            "{HOLDER_HEADER}\nH-1,A,5,1.5,,XX,true,true,V-1,D,S,42,Male,None,farmer,true,true,Well,\n"
        );

        let err = RecordImporter::holders_from_reader(csv.as_bytes()).expect_err("category rejected");
        assert!(matches!(err, ImportError::Csv(_)));
    }
}
