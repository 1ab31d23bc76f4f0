//! Expected harvest date.

use chrono::{Days, NaiveDate};

use krishi_core::{DomainError, DomainResult};

use crate::crop::{Crop, Season};
use crate::tables;

/// Planting date plus the crop's maturity duration, in plain calendar days.
pub fn harvest_date(planting_date: NaiveDate, crop: &Crop, season: Season) -> DomainResult<NaiveDate> {
    let days = tables::maturity_days(crop, season);
    planting_date
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| {
            DomainError::invalid_field(
                "planting_date",
                format!("adding {days} days to {planting_date} leaves the supported calendar"),
            )
        })
}
