use crate::error::{Result, ToolError};
use std::collections::BTreeSet;

/// A validated set of split points: unique, ascending, each strictly between
/// the first and the last page boundary of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPoints(Vec<u32>);

impl SplitPoints {
    /// Parse a comma-separated list of 1-based split points like "3,5,8"
    /// against a document of `page_count` pages.
    ///
    /// Tokens that are not plain non-negative integers are ignored, so
    /// "3, x, 5" yields [3, 5]. The result is rejected if nothing usable is
    /// left or if any point falls outside 1..=page_count-1.
    pub fn parse(s: &str, page_count: u32) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ToolError::EmptySplitInput);
        }

        let invalid = || ToolError::InvalidPageNumbers { page_count };

        let mut points = BTreeSet::new();
        for token in s.split(',').map(str::trim) {
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }
            // All digits but too large for u32 is past the last page anyway
            let point = token.parse::<u32>().map_err(|_| invalid())?;
            points.insert(point);
        }

        if points.is_empty() {
            return Err(invalid());
        }
        if points.iter().any(|&p| p < 1 || p >= page_count) {
            return Err(invalid());
        }

        Ok(SplitPoints(points.into_iter().collect()))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A half-open range of 0-based page indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    pub fn len(&self) -> u32 {
        self.end - self.start
    }
}

/// Partition `[0, page_count)` into contiguous ranges that break at each
/// split point. `k` points always give `k + 1` non-empty ranges.
pub fn partition(page_count: u32, points: &SplitPoints) -> Vec<PageRange> {
    let mut ranges = Vec::with_capacity(points.len() + 1);
    let mut prev = 0;
    for &point in points.as_slice() {
        ranges.push(PageRange {
            start: prev,
            end: point,
        });
        prev = point;
    }
    ranges.push(PageRange {
        start: prev,
        end: page_count,
    });
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ranges(pairs: &[(u32, u32)]) -> Vec<PageRange> {
        pairs
            .iter()
            .map(|&(start, end)| PageRange { start, end })
            .collect()
    }

    #[test]
    fn test_simple_points() {
        let points = SplitPoints::parse("3,5,8", 10).unwrap();
        assert_eq!(points.as_slice(), &[3, 5, 8]);
    }

    #[test]
    fn test_points_are_sorted_and_deduplicated() {
        let points = SplitPoints::parse(" 8, 3 ,5,3,, 8 ", 10).unwrap();
        assert_eq!(points.as_slice(), &[3, 5, 8]);
    }

    #[test]
    fn test_non_numeric_tokens_are_ignored() {
        let points = SplitPoints::parse("3, abc, -2, 4.5, 7", 10).unwrap();
        assert_eq!(points.as_slice(), &[3, 7]);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            SplitPoints::parse("   ", 10),
            Err(ToolError::EmptySplitInput)
        ));
    }

    #[test]
    fn test_only_non_numeric_tokens() {
        assert!(matches!(
            SplitPoints::parse("a, b, ,", 10),
            Err(ToolError::InvalidPageNumbers { page_count: 10 })
        ));
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(SplitPoints::parse("0", 10).is_err());
        assert!(SplitPoints::parse("0,4", 5).is_err());
    }

    #[test]
    fn test_last_page_is_rejected() {
        assert!(SplitPoints::parse("10", 10).is_err());
        assert!(SplitPoints::parse("11", 10).is_err());
        assert!(SplitPoints::parse("99999999999999999999", 10).is_err());
    }

    #[test]
    fn test_second_to_last_page_is_accepted() {
        let points = SplitPoints::parse("4", 5).unwrap();
        assert_eq!(points.as_slice(), &[4]);
    }

    #[test]
    fn test_single_page_document_has_no_valid_points() {
        assert!(SplitPoints::parse("1", 1).is_err());
        assert!(SplitPoints::parse("1", 0).is_err());
    }

    #[test]
    fn test_partition_example() {
        let points = SplitPoints::parse("3,5,8", 10).unwrap();
        let parts = partition(10, &points);
        assert_eq!(parts, ranges(&[(0, 3), (3, 5), (5, 8), (8, 10)]));
        let sizes: Vec<u32> = parts.iter().map(PageRange::len).collect();
        assert_eq!(sizes, vec![3, 2, 3, 2]);
    }

    proptest! {
        #[test]
        fn partition_covers_every_page_once(
            (page_count, raw) in (2u32..200).prop_flat_map(|n| {
                (Just(n), proptest::collection::btree_set(1..n, 1..(n as usize).min(16)))
            })
        ) {
            let text = raw.iter().map(u32::to_string).collect::<Vec<_>>().join(",");
            let points = SplitPoints::parse(&text, page_count).unwrap();
            let parts = partition(page_count, &points);

            prop_assert_eq!(parts.len(), raw.len() + 1);
            prop_assert_eq!(parts[0].start, 0);
            prop_assert_eq!(parts[parts.len() - 1].end, page_count);
            for pair in parts.windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].start);
            }
            prop_assert!(parts.iter().all(|r| r.len() >= 1));

            let pages: Vec<u32> = parts.iter().flat_map(|r| r.start..r.end).collect();
            prop_assert_eq!(pages, (0..page_count).collect::<Vec<_>>());
        }
    }
}
