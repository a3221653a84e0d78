mod loader;
mod parser;

pub use loader::ScheduleLoadError;
pub use parser::{DescriptorError, DiscountRange};

use super::PricingError;
use parser::parse_descriptor;
use serde::Serialize;
use std::fmt;

/// Identifier of a schedule row, usually the template row number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ScheduleRowId(pub String);

impl fmt::Display for ScheduleRowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScheduleRowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub id: ScheduleRowId,
    pub descriptor: String,
}

impl ScheduleRow {
    pub fn new(id: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            id: ScheduleRowId(id.into()),
            descriptor: descriptor.into(),
        }
    }

    /// Parsed range for this row, `None` when the descriptor is not a range.
    pub fn range(&self) -> Result<Option<DiscountRange>, PricingError> {
        parse_descriptor(&self.descriptor).map_err(|source| PricingError::ScheduleFormat {
            row: self.id.clone(),
            descriptor: self.descriptor.clone(),
            source,
        })
    }
}

/// Two rows whose ranges share at least one key. Only the first is ever matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleOverlap {
    pub first: ScheduleRowId,
    pub second: ScheduleRowId,
}

/// Ordered bulk-discount schedule with first-match-wins lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscountSchedule {
    rows: Vec<ScheduleRow>,
}

impl DiscountSchedule {
    pub fn new(rows: Vec<ScheduleRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the first row whose range contains `key`.
    ///
    /// Rows are parsed in declaration order as the scan reaches them, so a
    /// malformed descriptor only fails the lookup when it sits before the
    /// matching row. Absent and non-finite keys match nothing.
    pub fn match_key(&self, key: Option<f64>) -> Result<Option<ScheduleRowId>, PricingError> {
        let Some(key) = key.filter(|value| value.is_finite()) else {
            return Ok(None);
        };

        for row in &self.rows {
            if let Some(range) = row.range()? {
                if range.contains(key) {
                    return Ok(Some(row.id.clone()));
                }
            }
        }

        Ok(None)
    }

    /// Parse every row up front, returning the recognised ranges in order.
    pub fn validate(&self) -> Result<Vec<(&ScheduleRowId, DiscountRange)>, PricingError> {
        let mut ranges = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            if let Some(range) = row.range()? {
                ranges.push((&row.id, range));
            }
        }
        Ok(ranges)
    }

    /// Pairs of rows whose ranges intersect.
    pub fn overlaps(&self) -> Result<Vec<ScheduleOverlap>, PricingError> {
        let ranges = self.validate()?;
        let mut overlaps = Vec::new();

        for (index, (first_id, first)) in ranges.iter().enumerate() {
            for (second_id, second) in &ranges[index + 1..] {
                if first.intersects(second) {
                    overlaps.push(ScheduleOverlap {
                        first: (*first_id).clone(),
                        second: (*second_id).clone(),
                    });
                }
            }
        }

        Ok(overlaps)
    }
}

impl FromIterator<ScheduleRow> for DiscountSchedule {
    fn from_iter<I: IntoIterator<Item = ScheduleRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> DiscountSchedule {
        DiscountSchedule::new(vec![
            ScheduleRow::new("R1", "1 to 10"),
            ScheduleRow::new("R2", "11 to 20"),
            ScheduleRow::new("R3", "21 and up"),
        ])
    }

    fn row(id: &str) -> Option<ScheduleRowId> {
        Some(ScheduleRowId::from(id))
    }

    #[test]
    fn matches_first_containing_row() {
        let schedule = sample_schedule();
        assert_eq!(schedule.match_key(Some(15.0)).unwrap(), row("R2"));
        assert_eq!(schedule.match_key(Some(25.0)).unwrap(), row("R3"));
        assert_eq!(schedule.match_key(Some(10.0)).unwrap(), row("R1"));
        assert_eq!(schedule.match_key(Some(0.0)).unwrap(), None);
    }

    #[test]
    fn fractional_keys_between_ranges_match_nothing() {
        let schedule = sample_schedule();
        assert_eq!(schedule.match_key(Some(10.5)).unwrap(), None);
        assert_eq!(schedule.match_key(Some(20.5)).unwrap(), None);
    }

    #[test]
    fn missing_or_non_finite_keys_match_nothing() {
        let schedule = sample_schedule();
        assert_eq!(schedule.match_key(None).unwrap(), None);
        assert_eq!(schedule.match_key(Some(f64::NAN)).unwrap(), None);
        assert_eq!(schedule.match_key(Some(f64::INFINITY)).unwrap(), None);
    }

    #[test]
    fn unrecognised_rows_are_skipped() {
        let schedule = DiscountSchedule::new(vec![
            ScheduleRow::new("R0", "abc"),
            ScheduleRow::new("R1", "1 to 10"),
        ]);
        assert_eq!(schedule.match_key(Some(3.0)).unwrap(), row("R1"));
    }

    #[test]
    fn malformed_row_before_match_aborts() {
        let schedule = DiscountSchedule::new(vec![
            ScheduleRow::new("R1", "1 to x"),
            ScheduleRow::new("R2", "11 to 20"),
        ]);
        let err = schedule.match_key(Some(15.0)).expect_err("format error");
        match err {
            PricingError::ScheduleFormat { row, descriptor, .. } => {
                assert_eq!(row, ScheduleRowId::from("R1"));
                assert_eq!(descriptor, "1 to x");
            }
            other => panic!("expected schedule format error, got {other:?}"),
        }
    }

    #[test]
    fn overlapping_rows_resolve_by_declaration_order() {
        let schedule = DiscountSchedule::new(vec![
            ScheduleRow::new("R1", "1 to 50"),
            ScheduleRow::new("R2", "20 to 30"),
        ]);
        assert_eq!(schedule.match_key(Some(25.0)).unwrap(), row("R1"));
        assert_eq!(
            schedule.overlaps().unwrap(),
            vec![ScheduleOverlap {
                first: ScheduleRowId::from("R1"),
                second: ScheduleRowId::from("R2"),
            }]
        );
    }

    #[test]
    fn disjoint_schedule_has_no_overlaps() {
        assert!(sample_schedule().overlaps().unwrap().is_empty());
    }

    #[test]
    fn validate_surfaces_malformed_rows_anywhere() {
        let schedule = DiscountSchedule::new(vec![
            ScheduleRow::new("R1", "1 to 10"),
            ScheduleRow::new("R2", "11 to twenty"),
        ]);
        assert_eq!(schedule.match_key(Some(5.0)).unwrap(), row("R1"));
        assert!(schedule.validate().is_err());
    }
}
