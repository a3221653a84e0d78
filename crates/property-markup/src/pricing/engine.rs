use super::codes::{
    CodeTable, Complexity, ObstacleLevel, StoryCategory, TreeCoverage, TreeType, Walkability,
};
use super::discount::{DiscountSchedule, ScheduleRowId};
use super::submission::PropertySubmission;
use super::tier::tier_for_counts;
use super::PricingError;
use serde::Serialize;
use tracing::debug;

/// Stateless engine that applies the code tables and a discount schedule to
/// a submission. The schedule is fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    schedule: DiscountSchedule,
}

impl RuleEngine {
    pub fn new(schedule: DiscountSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &DiscountSchedule {
        &self.schedule
    }

    pub fn compute(&self, submission: &PropertySubmission) -> Result<MarkupOutcome, PricingError> {
        submission.validate()?;

        let tree_coverage_code = TreeCoverage::from_label(&submission.tree_coverage)?.code();
        let tree_type_code = TreeType::from_label(&submission.tree_type)?.code();
        let story_code = StoryCategory::from_label(&submission.story_category)?.code();
        let complexity_code = Complexity::from_label(&submission.complexity)?.code();
        let walkability_code = Walkability::from_label(&submission.walkability)?.code();
        let obstacle_code = ObstacleLevel::from_label(&submission.obstacle_level)?.code();

        let base_rate_tier = tier_for_counts(submission.unit_count, submission.building_count);
        let garage_total = submission
            .parking
            .garage_total()
            .ok_or_else(|| total_overflow("garage"))?;
        let carport_total = submission
            .parking
            .carport_total()
            .ok_or_else(|| total_overflow("carport"))?;
        let company_discount_flag = submission.company_discount_flag();
        let bulk_discount_row = self.schedule.match_key(submission.bulk_unit_key)?;

        let outcome = MarkupOutcome {
            base_rate_tier,
            tree_coverage_code,
            tree_type_code,
            story_code,
            complexity_code,
            walkability_code,
            obstacle_code,
            garage_total,
            carport_total,
            company_discount_flag,
            bulk_discount_row,
        };

        debug!(
            tier = outcome.base_rate_tier,
            garage_total, carport_total,
            bulk_row = ?outcome.bulk_discount_row,
            "mark-up computed"
        );

        Ok(outcome)
    }
}

fn total_overflow(structure: &str) -> PricingError {
    PricingError::InvalidInput(format!("{structure} counts are too large to prorate"))
}

/// Values destined for the pricing template, produced once per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkupOutcome {
    pub base_rate_tier: u8,
    pub tree_coverage_code: u8,
    pub tree_type_code: u8,
    pub story_code: u8,
    pub complexity_code: u8,
    pub walkability_code: u8,
    pub obstacle_code: u8,
    pub garage_total: i64,
    pub carport_total: i64,
    pub company_discount_flag: u8,
    pub bulk_discount_row: Option<ScheduleRowId>,
}
