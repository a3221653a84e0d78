/// Inclusive upper bounds for tiers 1 through 4; anything above is tier 5.
const TIER_CEILINGS: [(f64, u8); 4] = [(1.99, 1), (3.99, 2), (9.99, 3), (19.99, 4)];

const TOP_TIER: u8 = 5;

/// Base-rate tier for a units-per-building ratio.
///
/// Whole-number ratios sit in the higher tier: 2.0 is tier 2, 4.0 is tier 3,
/// 10.0 is tier 4 and 20.0 is tier 5. Ratios between a ceiling and the next
/// whole number (e.g. 1.995) also fall into the higher tier.
pub fn classify_tier(units_per_building: f64) -> u8 {
    TIER_CEILINGS
        .iter()
        .find(|(ceiling, _)| units_per_building <= *ceiling)
        .map(|(_, tier)| *tier)
        .unwrap_or(TOP_TIER)
}

/// Convenience wrapper dividing units by buildings before classifying.
pub fn tier_for_counts(unit_count: i64, building_count: i64) -> u8 {
    classify_tier(unit_count as f64 / building_count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_match_rate_sheet() {
        let cases = [
            (1.0, 1),
            (1.99, 1),
            (2.0, 2),
            (3.99, 2),
            (4.0, 3),
            (9.99, 3),
            (10.0, 4),
            (19.99, 4),
            (20.0, 5),
            (250.0, 5),
        ];

        for (ratio, expected) in cases {
            assert_eq!(classify_tier(ratio), expected, "ratio {ratio}");
        }
    }

    #[test]
    fn gap_above_ceiling_belongs_to_next_tier() {
        assert_eq!(classify_tier(1.995), 2);
        assert_eq!(classify_tier(19.995), 5);
    }

    #[test]
    fn computed_ratios_hit_the_same_boundaries() {
        assert_eq!(tier_for_counts(199, 100), 1);
        assert_eq!(tier_for_counts(4, 2), 2);
        assert_eq!(tier_for_counts(399, 100), 2);
        assert_eq!(tier_for_counts(12, 3), 3);
        assert_eq!(tier_for_counts(999, 100), 3);
        assert_eq!(tier_for_counts(30, 3), 4);
        assert_eq!(tier_for_counts(1999, 100), 4);
        assert_eq!(tier_for_counts(40, 2), 5);
    }

    #[test]
    fn every_positive_count_pair_yields_a_known_tier() {
        for buildings in 1..=25 {
            for units in 1..=600 {
                let tier = tier_for_counts(units, buildings);
                assert!((1..=5).contains(&tier), "{units}/{buildings} -> {tier}");
            }
        }
    }
}
