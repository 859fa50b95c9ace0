use super::domain::{FraHolder, VillageProfile};

/// Input that falls outside the ranges the engine is designed for.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{record}: {field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        record: String,
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("{record}: {field} must be greater than zero")]
    NotPositive { record: String, field: &'static str },
}

const MAX_FAMILY_SIZE: f64 = 20.0;
const MAX_LAND_AREA: f64 = 100.0;
const MAX_ANNUAL_INCOME: f64 = 10_000_000.0;
const MAX_AGE: f64 = 120.0;

impl FraHolder {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let record = || format!("holder {}", self.holder_id);

        if self.family_size == 0 {
            return Err(ValidationError::NotPositive {
                record: record(),
                field: "family_size",
            });
        }
        check_range(record, "family_size", f64::from(self.family_size), 1.0, MAX_FAMILY_SIZE)?;
        check_range(
            record,
            "land_area_hectares",
            self.land_area_hectares,
            0.0,
            MAX_LAND_AREA,
        )?;
        if let Some(income) = self.annual_income {
            check_range(record, "annual_income", income, 0.0, MAX_ANNUAL_INCOME)?;
        }
        check_range(record, "age", f64::from(self.age), 0.0, MAX_AGE)
    }
}

impl VillageProfile {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let record = || format!("village {}", self.village_code);

        if self.total_households == 0 {
            return Err(ValidationError::NotPositive {
                record: record(),
                field: "total_households",
            });
        }
        if self.total_population == 0 {
            return Err(ValidationError::NotPositive {
                record: record(),
                field: "total_population",
            });
        }

        let scaled = [
            ("water_index", self.water_index),
            ("electricity_index", self.electricity_index),
            ("road_connectivity_index", self.road_connectivity_index),
            ("health_facility_index", self.health_facility_index),
            ("education_index", self.education_index),
            ("livelihood_index", self.livelihood_index),
            ("forest_cover_percent", self.forest_cover_percent),
            ("agricultural_land_percent", self.agricultural_land_percent),
        ];
        for (field, value) in scaled {
            check_range(record, field, value, 0.0, 100.0)?;
        }

        Ok(())
    }
}

fn check_range<F>(
    record: F,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError>
where
    F: Fn() -> String,
{
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            record: record(),
            field,
            min,
            max,
            value,
        })
    }
}
