use serde::{Deserialize, Serialize};

/// Raw parking structure counts captured on the intake form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingCounts {
    #[serde(default)]
    pub garage_with_trees: i64,
    #[serde(default)]
    pub garage_without_trees: i64,
    #[serde(default)]
    pub carport_with_trees: i64,
    #[serde(default)]
    pub carport_without_trees: i64,
}

impl ParkingCounts {
    pub fn garage_total(&self) -> Option<i64> {
        prorate(self.garage_with_trees, self.garage_without_trees)
    }

    pub fn carport_total(&self) -> Option<i64> {
        prorate(self.carport_with_trees, self.carport_without_trees)
    }

    pub(crate) fn named(&self) -> [(&'static str, i64); 4] {
        [
            ("garage_with_trees", self.garage_with_trees),
            ("garage_without_trees", self.garage_without_trees),
            ("carport_with_trees", self.carport_with_trees),
            ("carport_without_trees", self.carport_without_trees),
        ]
    }
}

/// `ceil(with_trees + without_trees / 4)`.
///
/// Structures shaded by trees count in full; open structures count a quarter
/// each. Returns `None` when the total does not fit in an `i64`.
pub fn prorate(with_trees: i64, without_trees: i64) -> Option<i64> {
    let quarters = without_trees.div_euclid(4) + i64::from(without_trees.rem_euclid(4) != 0);
    with_trees.checked_add(quarters)
}
