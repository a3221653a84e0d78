use super::PricingError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names the categorical tables so lookups can be dispatched from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeTableName {
    TreeCoverage,
    TreeType,
    Stories,
    Complexity,
    Walkability,
    Obstacles,
}

impl CodeTableName {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::TreeCoverage,
            Self::TreeType,
            Self::Stories,
            Self::Complexity,
            Self::Walkability,
            Self::Obstacles,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TreeCoverage => "Tree Coverage",
            Self::TreeType => "Tree Type",
            Self::Stories => "Number of Stories",
            Self::Complexity => "Complexity",
            Self::Walkability => "Walkability",
            Self::Obstacles => "Balconies/patios for unwalkable",
        }
    }

    /// Labels accepted by the table, in code order.
    pub fn labels(self) -> Vec<&'static str> {
        match self {
            Self::TreeCoverage => labels_of::<TreeCoverage>(),
            Self::TreeType => labels_of::<TreeType>(),
            Self::Stories => labels_of::<StoryCategory>(),
            Self::Complexity => labels_of::<Complexity>(),
            Self::Walkability => labels_of::<Walkability>(),
            Self::Obstacles => labels_of::<ObstacleLevel>(),
        }
    }
}

impl fmt::Display for CodeTableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A closed enumeration whose variants carry a dense, 1-based integer code.
///
/// Codes are positional: the first variant returned by [`CodeTable::ordered`]
/// is code 1, the second code 2, and so on.
pub trait CodeTable: Copy + PartialEq + Sized + 'static {
    const TABLE: CodeTableName;

    fn ordered() -> &'static [Self];

    fn label(self) -> &'static str;

    fn accepts(self, label: &str) -> bool {
        self.label() == label
    }

    fn code(self) -> u8 {
        let index = Self::ordered()
            .iter()
            .position(|candidate| *candidate == self)
            .unwrap_or_default();
        index as u8 + 1
    }

    fn from_label(label: &str) -> Result<Self, PricingError> {
        let trimmed = label.trim();
        Self::ordered()
            .iter()
            .copied()
            .find(|candidate| candidate.accepts(trimmed))
            .ok_or_else(|| PricingError::UnknownLabel {
                table: Self::TABLE,
                label: label.to_string(),
            })
    }
}

fn labels_of<T: CodeTable>() -> Vec<&'static str> {
    T::ordered().iter().map(|entry| entry.label()).collect()
}

/// Resolve a free-text label against the named table.
pub fn lookup(table: CodeTableName, label: &str) -> Result<u8, PricingError> {
    match table {
        CodeTableName::TreeCoverage => TreeCoverage::from_label(label).map(CodeTable::code),
        CodeTableName::TreeType => TreeType::from_label(label).map(CodeTable::code),
        CodeTableName::Stories => StoryCategory::from_label(label).map(CodeTable::code),
        CodeTableName::Complexity => Complexity::from_label(label).map(CodeTable::code),
        CodeTableName::Walkability => Walkability::from_label(label).map(CodeTable::code),
        CodeTableName::Obstacles => ObstacleLevel::from_label(label).map(CodeTable::code),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeCoverage {
    NoTrees,
    Light,
    Moderate,
    Heavy,
}

impl CodeTable for TreeCoverage {
    const TABLE: CodeTableName = CodeTableName::TreeCoverage;

    fn ordered() -> &'static [Self] {
        &[Self::NoTrees, Self::Light, Self::Moderate, Self::Heavy]
    }

    fn label(self) -> &'static str {
        match self {
            Self::NoTrees => "No",
            Self::Light => "Light",
            Self::Moderate => "Moderate",
            Self::Heavy => "Heavy",
        }
    }

    // Older intake forms wrote "None" for the first choice.
    fn accepts(self, label: &str) -> bool {
        self.label() == label || (self == Self::NoTrees && label == "None")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeType {
    Broadleaf,
    Conifer,
    Mixed,
}

impl CodeTable for TreeType {
    const TABLE: CodeTableName = CodeTableName::TreeType;

    fn ordered() -> &'static [Self] {
        &[Self::Broadleaf, Self::Conifer, Self::Mixed]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Broadleaf => "Broadleaf",
            Self::Conifer => "Conifer",
            Self::Mixed => "Mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryCategory {
    One,
    Two,
    Three,
    FourPlusNoRoofAccess,
    HighRise,
}

impl CodeTable for StoryCategory {
    const TABLE: CodeTableName = CodeTableName::Stories;

    fn ordered() -> &'static [Self] {
        &[
            Self::One,
            Self::Two,
            Self::Three,
            Self::FourPlusNoRoofAccess,
            Self::HighRise,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::FourPlusNoRoofAccess => "4+ with no roof access (lift/ScyVac)",
            Self::HighRise => "High-rise (anything 3+ with roof access)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Regular,
    Irregular,
    Complex,
    VeryComplex,
}

impl CodeTable for Complexity {
    const TABLE: CodeTableName = CodeTableName::Complexity;

    fn ordered() -> &'static [Self] {
        &[
            Self::Regular,
            Self::Irregular,
            Self::Complex,
            Self::VeryComplex,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Irregular => "Irregular",
            Self::Complex => "Complex",
            Self::VeryComplex => "Very Complex",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Walkability {
    Walkable,
    Partially,
    Unwalkable,
}

impl CodeTable for Walkability {
    const TABLE: CodeTableName = CodeTableName::Walkability;

    fn ordered() -> &'static [Self] {
        &[Self::Walkable, Self::Partially, Self::Unwalkable]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Walkable => "Walkable",
            Self::Partially => "Partially",
            Self::Unwalkable => "Unwalkable",
        }
    }
}

/// Balcony and patio obstruction level, relevant for unwalkable roofs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleLevel {
    NoObstacles,
    SomeObstacles,
    ManyObstacles,
    VeryComplex,
}

impl CodeTable for ObstacleLevel {
    const TABLE: CodeTableName = CodeTableName::Obstacles;

    fn ordered() -> &'static [Self] {
        &[
            Self::NoObstacles,
            Self::SomeObstacles,
            Self::ManyObstacles,
            Self::VeryComplex,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::NoObstacles => "No Obstacles",
            Self::SomeObstacles => "Some obstacles",
            Self::ManyObstacles => "Many obstacles",
            Self::VeryComplex => "Very Complex",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_dense<T: CodeTable>() {
        let codes: Vec<u8> = T::ordered().iter().map(|entry| entry.code()).collect();
        let expected: Vec<u8> = (1..=T::ordered().len() as u8).collect();
        assert_eq!(codes, expected, "{} codes are not dense", T::TABLE);
    }

    #[test]
    fn every_table_has_dense_one_based_codes() {
        assert_dense::<TreeCoverage>();
        assert_dense::<TreeType>();
        assert_dense::<StoryCategory>();
        assert_dense::<Complexity>();
        assert_dense::<Walkability>();
        assert_dense::<ObstacleLevel>();
    }

    #[test]
    fn every_label_round_trips_through_lookup() {
        for table in CodeTableName::ordered() {
            for (index, label) in table.labels().into_iter().enumerate() {
                let code = lookup(table, label).expect("label resolves");
                assert_eq!(code as usize, index + 1, "{table}: {label}");
            }
        }
    }

    #[test]
    fn unknown_label_reports_table_and_label() {
        let err = lookup(CodeTableName::Walkability, "Sometimes").expect_err("unknown label");
        match err {
            PricingError::UnknownLabel { table, label } => {
                assert_eq!(table, CodeTableName::Walkability);
                assert_eq!(label, "Sometimes");
            }
            other => panic!("expected unknown label, got {other:?}"),
        }
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert!(Complexity::from_label("very complex").is_err());
        assert_eq!(
            Complexity::from_label("Very Complex").expect("exact label"),
            Complexity::VeryComplex
        );
    }

    #[test]
    fn tree_coverage_accepts_none_alias() {
        assert_eq!(
            TreeCoverage::from_label("None").expect("alias"),
            TreeCoverage::NoTrees
        );
        assert_eq!(TreeCoverage::from_label(" No ").expect("trimmed").code(), 1);
    }

    #[test]
    fn shared_labels_resolve_per_table() {
        assert_eq!(lookup(CodeTableName::Complexity, "Very Complex").unwrap(), 4);
        assert_eq!(lookup(CodeTableName::Obstacles, "Very Complex").unwrap(), 4);
        assert_eq!(
            lookup(
                CodeTableName::Stories,
                "High-rise (anything 3+ with roof access)"
            )
            .unwrap(),
            5
        );
    }
}
