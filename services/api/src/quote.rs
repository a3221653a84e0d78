use crate::infra::{load_engine, parse_bulk_key, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use property_markup::config::AppConfig;
use property_markup::error::AppError;
use property_markup::pricing::{
    is_known_company, management_companies, CellValue, MarkupOutcome, OutputField,
    ParkingCounts, PropertySubmission, TemplatePlan, BULK_DISCOUNT_FLAG_COLUMN, NO_COMPANY,
};
use serde_json::json;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Number of buildings on the property
    #[arg(long)]
    pub(crate) buildings: i64,
    /// Number of units across all buildings
    #[arg(long)]
    pub(crate) units: i64,
    /// Tree coverage: No, Light, Moderate or Heavy
    #[arg(long, default_value = "No")]
    pub(crate) tree_coverage: String,
    /// Tree type: Broadleaf, Conifer or Mixed
    #[arg(long, default_value = "Broadleaf")]
    pub(crate) tree_type: String,
    /// Story category label, e.g. "3" or "High-rise (anything 3+ with roof access)"
    #[arg(long, default_value = "1")]
    pub(crate) stories: String,
    /// Complexity: Regular, Irregular, Complex or Very Complex
    #[arg(long, default_value = "Regular")]
    pub(crate) complexity: String,
    /// Walkability: Walkable, Partially or Unwalkable
    #[arg(long, default_value = "Walkable")]
    pub(crate) walkability: String,
    /// Balcony/patio obstacles for unwalkable roofs
    #[arg(long, default_value = "No Obstacles")]
    pub(crate) obstacles: String,
    #[arg(long, default_value_t = 0)]
    pub(crate) garages_with_trees: i64,
    #[arg(long, default_value_t = 0)]
    pub(crate) garages_without_trees: i64,
    #[arg(long, default_value_t = 0)]
    pub(crate) carports_with_trees: i64,
    #[arg(long, default_value_t = 0)]
    pub(crate) carports_without_trees: i64,
    /// Management company, or "none"
    #[arg(long)]
    pub(crate) company: Option<String>,
    /// Unit count used for the bulk discount lookup; non-numeric values are ignored
    #[arg(long)]
    pub(crate) bulk_key: Option<String>,
    /// Discount schedule CSV (defaults to APP_DISCOUNT_SCHEDULE)
    #[arg(long)]
    pub(crate) schedule: Option<PathBuf>,
    /// Name of the person preparing the quote
    #[arg(long)]
    pub(crate) preparer: Option<String>,
    /// Property name and address
    #[arg(long)]
    pub(crate) property: Option<String>,
    /// Date printed on the template (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the outcome and template plan as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl QuoteArgs {
    fn submission(&self) -> PropertySubmission {
        PropertySubmission {
            preparer_name: self.preparer.clone(),
            property_name: self.property.clone(),
            building_count: self.buildings,
            unit_count: self.units,
            tree_coverage: self.tree_coverage.clone(),
            tree_type: self.tree_type.clone(),
            story_category: self.stories.clone(),
            complexity: self.complexity.clone(),
            walkability: self.walkability.clone(),
            obstacle_level: self.obstacles.clone(),
            parking: ParkingCounts {
                garage_with_trees: self.garages_with_trees,
                garage_without_trees: self.garages_without_trees,
                carport_with_trees: self.carports_with_trees,
                carport_without_trees: self.carports_without_trees,
            },
            selected_company: self.company.clone(),
            bulk_unit_key: parse_bulk_key(self.bulk_key.as_deref()),
        }
    }
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let submission = args.submission();
    let engine = load_engine(&config.pricing, args.schedule.clone())?;

    let outcome = engine.compute(&submission)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let plan = TemplatePlan::build(&submission, &outcome, today);

    if args.json {
        let payload = json!({ "outcome": outcome, "plan": plan });
        match serde_json::to_string_pretty(&payload) {
            Ok(text) => println!("{text}"),
            Err(err) => println!("Quote payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_quote(&submission, &outcome, &plan);
    Ok(())
}

fn render_quote(submission: &PropertySubmission, outcome: &MarkupOutcome, plan: &TemplatePlan) {
    println!("Property mark-up");
    println!(
        "{} buildings, {} units -> base rate tier {}",
        submission.building_count, submission.unit_count, outcome.base_rate_tier
    );

    println!("\nCodes");
    println!("- Tree coverage: {}", outcome.tree_coverage_code);
    println!("- Tree type: {}", outcome.tree_type_code);
    println!("- Stories: {}", outcome.story_code);
    println!("- Complexity: {}", outcome.complexity_code);
    println!("- Walkability: {}", outcome.walkability_code);
    println!("- Obstacles: {}", outcome.obstacle_code);

    println!("\nParking");
    println!("- Garage total: {}", outcome.garage_total);
    println!("- Carport total: {}", outcome.carport_total);

    println!("\nDiscounts");
    match submission.selected_company.as_deref() {
        Some(company) if outcome.company_discount_flag == 1 => {
            if is_known_company(company) {
                println!("- Company discount: {company}");
            } else {
                println!("- Company discount: {company} (not on the roster)");
            }
        }
        _ => println!("- Company discount: none"),
    }
    match &outcome.bulk_discount_row {
        Some(row) => println!("- Bulk discount: row {row}"),
        None => println!("- Bulk discount: none"),
    }

    println!("\nTemplate cells ({})", plan.file_name);
    for assignment in &plan.cells {
        let value = match &assignment.value {
            CellValue::Number(number) => number.to_string(),
            CellValue::Text(text) => text.clone(),
        };
        println!("- {} = {} ({})", assignment.cell, value, assignment.field);
    }
}

pub(crate) fn run_companies() {
    println!("Management companies (use \"{NO_COMPANY}\" for no discount)");
    for company in management_companies() {
        println!("- {company}");
    }
}

pub(crate) fn run_fields() {
    println!("Template field mapping");
    for field in OutputField::ordered() {
        let cell = field
            .cell()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{BULK_DISCOUNT_FLAG_COLUMN}<matched row>"));
        let origin = if field.is_echo() { "input" } else { "computed" };
        println!("- {:<24} {:<18} {}", field.key(), cell, origin);
    }
}
