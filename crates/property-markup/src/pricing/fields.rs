use super::engine::MarkupOutcome;
use super::submission::PropertySubmission;
use serde::Serialize;

/// Column whose cell is set to 1 on the matched bulk-discount row.
pub const BULK_DISCOUNT_FLAG_COLUMN: &str = "F";

/// Every template field the rule engine feeds, with its fixed coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputField {
    BuildingCount,
    UnitCount,
    BaseRateTier,
    TreeCoverageCode,
    TreeTypeCode,
    StoryCode,
    ComplexityCode,
    WalkabilityCode,
    ObstacleCode,
    CompanyDiscountFlag,
    GarageTotal,
    CarportTotal,
    GarageWithTrees,
    GarageWithoutTrees,
    CarportWithTrees,
    CarportWithoutTrees,
    BulkDiscountRow,
}

impl OutputField {
    pub const fn ordered() -> [Self; 17] {
        [
            Self::BuildingCount,
            Self::UnitCount,
            Self::BaseRateTier,
            Self::TreeCoverageCode,
            Self::TreeTypeCode,
            Self::StoryCode,
            Self::ComplexityCode,
            Self::WalkabilityCode,
            Self::ObstacleCode,
            Self::CompanyDiscountFlag,
            Self::GarageTotal,
            Self::CarportTotal,
            Self::GarageWithTrees,
            Self::GarageWithoutTrees,
            Self::CarportWithTrees,
            Self::CarportWithoutTrees,
            Self::BulkDiscountRow,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::BuildingCount => "building_count",
            Self::UnitCount => "unit_count",
            Self::BaseRateTier => "base_rate_tier",
            Self::TreeCoverageCode => "tree_coverage_code",
            Self::TreeTypeCode => "tree_type_code",
            Self::StoryCode => "story_code",
            Self::ComplexityCode => "complexity_code",
            Self::WalkabilityCode => "walkability_code",
            Self::ObstacleCode => "obstacle_code",
            Self::CompanyDiscountFlag => "company_discount_flag",
            Self::GarageTotal => "garage_total",
            Self::CarportTotal => "carport_total",
            Self::GarageWithTrees => "garage_with_trees",
            Self::GarageWithoutTrees => "garage_without_trees",
            Self::CarportWithTrees => "carport_with_trees",
            Self::CarportWithoutTrees => "carport_without_trees",
            Self::BulkDiscountRow => "bulk_discount_row",
        }
    }

    /// Fixed coordinate, or `None` for the bulk-discount flag whose row
    /// depends on the schedule match.
    pub const fn cell(self) -> Option<&'static str> {
        match self {
            Self::BuildingCount => Some("B13"),
            Self::UnitCount => Some("B14"),
            Self::BaseRateTier => Some("C14"),
            Self::TreeCoverageCode => Some("E14"),
            Self::TreeTypeCode => Some("G14"),
            Self::StoryCode => Some("I14"),
            Self::ComplexityCode => Some("K14"),
            Self::WalkabilityCode => Some("M14"),
            Self::ObstacleCode => Some("O14"),
            Self::CompanyDiscountFlag => Some("B16"),
            Self::GarageTotal => Some("B19"),
            Self::CarportTotal => Some("E19"),
            Self::GarageWithTrees => Some("H19"),
            Self::GarageWithoutTrees => Some("H21"),
            Self::CarportWithTrees => Some("H26"),
            Self::CarportWithoutTrees => Some("H28"),
            Self::BulkDiscountRow => None,
        }
    }

    /// True for raw form answers copied into the template unchanged.
    pub const fn is_echo(self) -> bool {
        matches!(
            self,
            Self::BuildingCount
                | Self::UnitCount
                | Self::GarageWithTrees
                | Self::GarageWithoutTrees
                | Self::CarportWithTrees
                | Self::CarportWithoutTrees
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(i64),
    Text(String),
}

/// One value the template writer should place at `cell`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellAssignment {
    pub field: &'static str,
    pub cell: String,
    pub value: CellValue,
}

impl CellAssignment {
    fn number(field: OutputField, cell: impl Into<String>, value: i64) -> Self {
        Self {
            field: field.key(),
            cell: cell.into(),
            value: CellValue::Number(value),
        }
    }
}

impl MarkupOutcome {
    pub fn value_of(&self, field: OutputField) -> Option<i64> {
        let value = match field {
            OutputField::BaseRateTier => self.base_rate_tier as i64,
            OutputField::TreeCoverageCode => self.tree_coverage_code as i64,
            OutputField::TreeTypeCode => self.tree_type_code as i64,
            OutputField::StoryCode => self.story_code as i64,
            OutputField::ComplexityCode => self.complexity_code as i64,
            OutputField::WalkabilityCode => self.walkability_code as i64,
            OutputField::ObstacleCode => self.obstacle_code as i64,
            OutputField::CompanyDiscountFlag => self.company_discount_flag as i64,
            OutputField::GarageTotal => self.garage_total,
            OutputField::CarportTotal => self.carport_total,
            OutputField::BulkDiscountRow => return self.bulk_discount_row.as_ref().map(|_| 1),
            _ => return None,
        };
        Some(value)
    }

    /// Computed values keyed by template coordinate, in field order.
    ///
    /// The bulk-discount flag is only present when a schedule row matched.
    pub fn cell_assignments(&self) -> Vec<CellAssignment> {
        let mut assignments = Vec::new();
        for field in OutputField::ordered() {
            if field.is_echo() {
                continue;
            }
            let Some(value) = self.value_of(field) else {
                continue;
            };
            match (field.cell(), &self.bulk_discount_row) {
                (Some(cell), _) => assignments.push(CellAssignment::number(field, cell, value)),
                (None, Some(row)) => assignments.push(CellAssignment::number(
                    field,
                    format!("{BULK_DISCOUNT_FLAG_COLUMN}{row}"),
                    value,
                )),
                (None, None) => {}
            }
        }
        assignments
    }
}

pub(crate) fn echo_value(submission: &PropertySubmission, field: OutputField) -> Option<i64> {
    match field {
        OutputField::BuildingCount => Some(submission.building_count),
        OutputField::UnitCount => Some(submission.unit_count),
        OutputField::GarageWithTrees => Some(submission.parking.garage_with_trees),
        OutputField::GarageWithoutTrees => Some(submission.parking.garage_without_trees),
        OutputField::CarportWithTrees => Some(submission.parking.carport_with_trees),
        OutputField::CarportWithoutTrees => Some(submission.parking.carport_without_trees),
        _ => None,
    }
}
