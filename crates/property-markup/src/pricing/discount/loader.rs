use super::{DiscountSchedule, ScheduleRow};
use crate::pricing::PricingError;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ScheduleLoadError {
    #[error("failed to read discount schedule: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid discount schedule CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("corrupt discount schedule: {0}")]
    Format(#[from] PricingError),
}

#[derive(Debug, Deserialize)]
struct ScheduleCsvRow {
    #[serde(rename = "Row")]
    row: String,
    #[serde(rename = "Range", default)]
    range: String,
}

impl DiscountSchedule {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScheduleLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a `Row,Range` CSV, keeping file order.
    ///
    /// Every descriptor is parsed before the schedule is returned. Overlapping
    /// ranges are logged but accepted.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ScheduleLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.deserialize::<ScheduleCsvRow>() {
            let record = record?;
            rows.push(ScheduleRow::new(record.row, record.range));
        }

        let schedule = DiscountSchedule::new(rows);
        let ranges = schedule.validate()?.len();
        for overlap in schedule.overlaps()? {
            warn!(
                first = %overlap.first,
                second = %overlap.second,
                "discount schedule rows overlap; the earlier row wins"
            );
        }

        info!(rows = schedule.rows().len(), ranges, "discount schedule loaded");
        Ok(schedule)
    }
}
