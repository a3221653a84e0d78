//! Encoding of intake-form answers into pricing-template values.
//!
//! The [`RuleEngine`] resolves categorical codes, the base-rate tier, prorated
//! parking totals, the management-company flag and the bulk-discount row. The
//! [`TemplatePlan`] then places those values at their template coordinates for
//! whichever collaborator writes the workbook.

pub mod codes;
pub mod companies;
pub mod discount;
pub mod engine;
pub mod fields;
pub mod parking;
pub mod router;
pub mod submission;
pub mod template;
pub mod tier;

pub use codes::{
    lookup, CodeTable, CodeTableName, Complexity, ObstacleLevel, StoryCategory, TreeCoverage,
    TreeType, Walkability,
};
pub use companies::{is_known_company, management_companies, NO_COMPANY};
pub use discount::{
    DescriptorError, DiscountRange, DiscountSchedule, ScheduleLoadError, ScheduleOverlap,
    ScheduleRow, ScheduleRowId,
};
pub use engine::{MarkupOutcome, RuleEngine};
pub use fields::{CellAssignment, CellValue, OutputField, BULK_DISCOUNT_FLAG_COLUMN};
pub use parking::{prorate, ParkingCounts};
pub use router::markup_router;
pub use submission::PropertySubmission;
pub use template::TemplatePlan;
pub use tier::classify_tier;

/// Failures raised while computing a mark-up. None of them yield partial output.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("'{label}' is not a recognised {table} option")]
    UnknownLabel { table: CodeTableName, label: String },
    #[error("discount schedule row {row} has malformed range '{descriptor}': {source}")]
    ScheduleFormat {
        row: ScheduleRowId,
        descriptor: String,
        #[source]
        source: DescriptorError,
    },
    #[error("invalid submission: {0}")]
    InvalidInput(String),
}
