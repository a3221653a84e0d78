use serde::Serialize;

/// Inclusive numeric interval parsed from a schedule descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountRange {
    pub low: i64,
    /// `None` for open-ended descriptors such as "500 and up" or "500+".
    pub high: Option<i64>,
}

impl DiscountRange {
    pub fn contains(&self, key: f64) -> bool {
        key >= self.low as f64 && self.high.map_or(true, |high| key <= high as f64)
    }

    pub fn intersects(&self, other: &DiscountRange) -> bool {
        let below_other = self.high.is_some_and(|high| high < other.low);
        let above_other = other.high.is_some_and(|high| high < self.low);
        !below_other && !above_other
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    #[error("missing {side} bound")]
    MissingBound { side: &'static str },
    #[error("'{token}' is not an integer bound")]
    InvalidBound { token: String },
}

/// Parse a descriptor into a range.
///
/// Returns `Ok(None)` for text that does not describe a range at all, such as
/// a heading or a blank cell.
pub(crate) fn parse_descriptor(raw: &str) -> Result<Option<DiscountRange>, DescriptorError> {
    let text = raw.replace(',', "");
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    if let Some(split) = find_to(text) {
        let low = parse_bound(&text[..split], "lower")?;
        let high = parse_bound(&text[split + 2..], "upper")?;
        return Ok(Some(DiscountRange {
            low,
            high: Some(high),
        }));
    }

    let leading = match text.find("and up") {
        Some(index) => &text[..index],
        None => match text.strip_suffix('+') {
            Some(leading) => leading,
            None => return Ok(None),
        },
    };
    let low = parse_bound(leading, "lower")?;
    Ok(Some(DiscountRange { low, high: None }))
}

// First "to" not glued to other letters, so "1to10" splits but "Custom" does not.
fn find_to(text: &str) -> Option<usize> {
    text.match_indices("to").map(|(index, _)| index).find(|&index| {
        let before = text[..index].chars().next_back();
        let after = text[index + 2..].chars().next();
        !before.is_some_and(char::is_alphabetic) && !after.is_some_and(char::is_alphabetic)
    })
}

fn parse_bound(token: &str, side: &'static str) -> Result<i64, DescriptorError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(DescriptorError::MissingBound { side });
    }

    token
        .parse::<i64>()
        .map_err(|_| DescriptorError::InvalidBound {
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed(low: i64, high: i64) -> Option<DiscountRange> {
        Some(DiscountRange {
            low,
            high: Some(high),
        })
    }

    fn open(low: i64) -> Option<DiscountRange> {
        Some(DiscountRange { low, high: None })
    }

    #[test]
    fn parses_closed_ranges_with_thousands_separators() {
        assert_eq!(parse_descriptor("1 to 10").unwrap(), closed(1, 10));
        assert_eq!(parse_descriptor(" 1,000 to 2,499 ").unwrap(), closed(1000, 2499));
    }

    #[test]
    fn parses_open_ended_ranges() {
        assert_eq!(parse_descriptor("21 and up").unwrap(), open(21));
        assert_eq!(parse_descriptor("5,000+").unwrap(), open(5000));
        assert_eq!(parse_descriptor("500 +").unwrap(), open(500));
    }

    #[test]
    fn skips_text_without_a_range() {
        assert_eq!(parse_descriptor("abc").unwrap(), None);
        assert_eq!(parse_descriptor("").unwrap(), None);
        assert_eq!(parse_descriptor("Custom quote").unwrap(), None);
        assert_eq!(parse_descriptor("10-20").unwrap(), None);
    }

    #[test]
    fn rejects_non_integer_bounds() {
        assert_eq!(
            parse_descriptor("1 to x").unwrap_err(),
            DescriptorError::InvalidBound {
                token: "x".to_string()
            }
        );
        assert_eq!(
            parse_descriptor("to 10").unwrap_err(),
            DescriptorError::MissingBound { side: "lower" }
        );
        assert!(parse_descriptor("many and up").is_err());
        assert!(parse_descriptor("1.5 to 3").is_err());
    }

    #[test]
    fn bounds_are_parsed_whole_around_the_first_to() {
        assert_eq!(
            parse_descriptor("1 2 to 50").unwrap_err(),
            DescriptorError::InvalidBound {
                token: "1 2".to_string()
            }
        );
        assert_eq!(parse_descriptor("10 to20").unwrap(), closed(10, 20));
        assert_eq!(parse_descriptor("1,000to1,499").unwrap(), closed(1000, 1499));
        assert_eq!(
            parse_descriptor("1 to 5 to 7").unwrap_err(),
            DescriptorError::InvalidBound {
                token: "5 to 7".to_string()
            }
        );
        assert!(parse_descriptor("1 2 and up").is_err());
    }

    #[test]
    fn containment_is_inclusive() {
        let range = DiscountRange {
            low: 1,
            high: Some(10),
        };
        assert!(range.contains(1.0));
        assert!(range.contains(10.0));
        assert!(!range.contains(10.5));
        assert!(!range.contains(0.0));
        assert!(DiscountRange { low: 21, high: None }.contains(1e9));
    }

    #[test]
    fn intersection_handles_open_ranges() {
        let first = DiscountRange {
            low: 1,
            high: Some(10),
        };
        let touching = DiscountRange {
            low: 10,
            high: Some(20),
        };
        let disjoint = DiscountRange {
            low: 11,
            high: Some(20),
        };
        let open_tail = DiscountRange { low: 15, high: None };

        assert!(first.intersects(&touching));
        assert!(!first.intersects(&disjoint));
        assert!(open_tail.intersects(&disjoint));
        assert!(!open_tail.intersects(&first));
    }
}
