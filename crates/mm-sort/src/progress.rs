//! How far through the pool a session is.

use std::fmt;

/// Placed items out of the full item set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Items already in a bin.
    pub placed: usize,
    /// Size of the full item set.
    pub total: usize,
}

impl Progress {
    /// Fraction placed, 0.0 to 1.0. An empty set counts as complete.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.placed as f64 / self.total as f64
    }

    /// Whole-number percentage placed, rounded down.
    pub fn percent(&self) -> u16 {
        if self.total == 0 {
            return 100;
        }
        u16::try_from(self.placed.saturating_mul(100) / self.total).unwrap_or(100)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.placed, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_and_percent() {
        let p = Progress {
            placed: 3,
            total: 6,
        };
        assert!((p.fraction() - 0.5).abs() < f64::EPSILON);
        assert_eq!(p.percent(), 50);
        assert_eq!(p.to_string(), "3 / 6");
    }

    #[test]
    fn percent_rounds_down() {
        let p = Progress {
            placed: 1,
            total: 3,
        };
        assert_eq!(p.percent(), 33);
    }

    #[test]
    fn empty_set_is_complete() {
        let p = Progress {
            placed: 0,
            total: 0,
        };
        assert!((p.fraction() - 1.0).abs() < f64::EPSILON);
        assert_eq!(p.percent(), 100);
    }
}
