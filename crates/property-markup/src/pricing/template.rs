use super::engine::MarkupOutcome;
use super::fields::{echo_value, CellAssignment, CellValue, OutputField};
use super::submission::PropertySubmission;
use chrono::NaiveDate;
use serde::Serialize;

const REPORT_DATE_CELL: &str = "C1";
const DISPLAY_TEXT_CELL: &str = "C3";
const DEFAULT_FILE_NAME: &str = "Updated_Calculator.xlsx";
const FORBIDDEN_FILE_NAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Everything a template writer needs to produce the marked-up workbook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplatePlan {
    pub file_name: String,
    pub cells: Vec<CellAssignment>,
}

impl TemplatePlan {
    pub fn build(
        submission: &PropertySubmission,
        outcome: &MarkupOutcome,
        today: NaiveDate,
    ) -> Self {
        let mut cells = vec![CellAssignment {
            field: "report_date",
            cell: REPORT_DATE_CELL.to_string(),
            value: CellValue::Text(today.format("%A, %B %d, %Y").to_string()),
        }];

        if let Some(text) = display_text(
            submission.property_name.as_deref(),
            submission.preparer_name.as_deref(),
        ) {
            cells.push(CellAssignment {
                field: "display_text",
                cell: DISPLAY_TEXT_CELL.to_string(),
                value: CellValue::Text(text),
            });
        }

        for field in OutputField::ordered() {
            if let (Some(cell), Some(value)) = (field.cell(), echo_value(submission, field)) {
                cells.push(CellAssignment {
                    field: field.key(),
                    cell: cell.to_string(),
                    value: CellValue::Number(value),
                });
            }
        }

        cells.extend(outcome.cell_assignments());

        Self {
            file_name: file_name(submission.property_name.as_deref()),
            cells,
        }
    }

    pub fn cell(&self, coordinate: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|assignment| assignment.cell == coordinate)
            .map(|assignment| &assignment.value)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

fn display_text(property: Option<&str>, preparer: Option<&str>) -> Option<String> {
    match (non_blank(property), non_blank(preparer)) {
        (Some(property), Some(preparer)) => Some(format!("{property} ({preparer})")),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    }
}

fn file_name(property: Option<&str>) -> String {
    let Some(property) = non_blank(property) else {
        return DEFAULT_FILE_NAME.to_string();
    };

    let safe: String = property
        .chars()
        .filter(|ch| !FORBIDDEN_FILE_NAME_CHARS.contains(ch))
        .collect();
    format!("{}.xlsx", safe.trim())
}
