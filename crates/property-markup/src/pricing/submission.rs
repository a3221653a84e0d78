use super::companies::NO_COMPANY;
use super::parking::ParkingCounts;
use super::PricingError;
use serde::{Deserialize, Deserializer, Serialize};

/// One intake-form submission. Categorical answers stay as the labels the
/// collector captured; the engine resolves them against the code tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySubmission {
    #[serde(default)]
    pub preparer_name: Option<String>,
    #[serde(default)]
    pub property_name: Option<String>,
    pub building_count: i64,
    pub unit_count: i64,
    pub tree_coverage: String,
    pub tree_type: String,
    pub story_category: String,
    pub complexity: String,
    pub walkability: String,
    pub obstacle_level: String,
    #[serde(default)]
    pub parking: ParkingCounts,
    #[serde(default)]
    pub selected_company: Option<String>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub bulk_unit_key: Option<f64>,
}

impl PropertySubmission {
    pub(crate) fn validate(&self) -> Result<(), PricingError> {
        if self.building_count < 1 {
            return Err(PricingError::InvalidInput(format!(
                "building_count must be at least 1, got {}",
                self.building_count
            )));
        }

        if self.unit_count < 1 {
            return Err(PricingError::InvalidInput(format!(
                "unit_count must be at least 1, got {}",
                self.unit_count
            )));
        }

        for (name, count) in self.parking.named() {
            if count < 0 {
                return Err(PricingError::InvalidInput(format!(
                    "{name} must not be negative, got {count}"
                )));
            }
        }

        Ok(())
    }

    /// 1 when a real management company was chosen, 0 for no choice or the
    /// exact `"none"` sentinel.
    pub fn company_discount_flag(&self) -> u8 {
        match self.selected_company.as_deref().map(str::trim) {
            Some(company) if !company.is_empty() && company != NO_COMPANY => 1,
            _ => 0,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Other(serde::de::IgnoredAny),
}

// Collectors forward whatever sat in the bulk-key cell; only numbers count.
fn number_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = LenientNumber::deserialize(deserializer)?;
    Ok(match value {
        LenientNumber::Number(number) if number.is_finite() => Some(number),
        _ => None,
    })
}
