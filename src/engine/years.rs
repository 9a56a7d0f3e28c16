use serde::Serialize;

use crate::error::{IndicatorError, RangeDefect, Result};

pub const DEFAULT_FIRST_YEAR: i32 = 2000;
pub const DEFAULT_LAST_YEAR: i32 = 2027;

/// Inclusive, contiguous year span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_FIRST_YEAR,
            end: DEFAULT_LAST_YEAR,
        }
    }
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start > end {
            return Err(IndicatorError::InvalidYearBounds { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn len(&self) -> usize {
        (i64::from(self.end) - i64::from(self.start) + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    pub fn years(&self) -> Vec<i32> {
        (self.start..=self.end).collect()
    }
}

/// Check that `years` is non-empty and steps by exactly one.
pub fn validate_years(years: &[i32]) -> std::result::Result<(), RangeDefect> {
    if years.is_empty() {
        return Err(RangeDefect::Empty);
    }
    for pair in years.windows(2) {
        let (previous, year) = (pair[0], pair[1]);
        if year <= previous {
            return Err(RangeDefect::NotIncreasing { previous, year });
        }
        if i64::from(year) - i64::from(previous) != 1 {
            return Err(RangeDefect::Gap { previous, year });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_covers_twenty_eight_years() {
        let range = YearRange::default();
        assert_eq!(range.len(), 28);
        assert_eq!(range.years().first(), Some(&2000));
        assert_eq!(range.years().last(), Some(&2027));
    }

    #[test]
    fn reversed_bounds_are_rejected() {
        assert!(matches!(
            YearRange::new(2010, 2000),
            Err(IndicatorError::InvalidYearBounds {
                start: 2010,
                end: 2000,
            })
        ));
        assert_eq!(YearRange::new(2010, 2010).map(|r| r.len()).ok(), Some(1));
    }

    #[test]
    fn validation_reports_first_defect() {
        assert_eq!(validate_years(&[]), Err(RangeDefect::Empty));
        assert_eq!(
            validate_years(&[2000, 2002]),
            Err(RangeDefect::Gap {
                previous: 2000,
                year: 2002,
            })
        );
        assert_eq!(
            validate_years(&[2001, 2000]),
            Err(RangeDefect::NotIncreasing {
                previous: 2001,
                year: 2000,
            })
        );
        assert_eq!(
            validate_years(&[2000, 2000]),
            Err(RangeDefect::NotIncreasing {
                previous: 2000,
                year: 2000,
            })
        );
        assert_eq!(validate_years(&[1999]), Ok(()));
    }
}
