//! Final quiz rating.
//!
//! The rating is a pure function of the final score and the number of
//! questions. Thresholds are compared in integer arithmetic, so exactly
//! 7 of 10 correct is 70% and earns "Great!".

use std::fmt;

use mm_core::POINTS_PER_CORRECT;

/// Rating tier awarded at the end of a quiz. Stars equal the tier number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    /// Below 60%.
    KeepLearning,
    /// At least 60%.
    Good,
    /// At least 70%.
    Great,
    /// At least 80%.
    Excellent,
    /// At least 90%.
    Amazing,
}

impl Rating {
    /// Maximum number of stars any rating shows.
    pub const MAX_STARS: u8 = 5;

    /// Derive the rating from a final score over `question_count` questions.
    ///
    /// A quiz with no questions rates as [`Rating::KeepLearning`].
    pub fn from_score(score: u32, question_count: usize) -> Self {
        let max = u64::try_from(question_count)
            .unwrap_or(u64::MAX)
            .saturating_mul(u64::from(POINTS_PER_CORRECT));
        if max == 0 {
            return Self::KeepLearning;
        }
        let scaled = u64::from(score).saturating_mul(100);
        let at_least = |percent: u64| scaled >= max.saturating_mul(percent);

        if at_least(90) {
            Self::Amazing
        } else if at_least(80) {
            Self::Excellent
        } else if at_least(70) {
            Self::Great
        } else if at_least(60) {
            Self::Good
        } else {
            Self::KeepLearning
        }
    }

    /// Tier number, 1 (lowest) to 5 (highest).
    pub fn tier(self) -> u8 {
        match self {
            Self::KeepLearning => 1,
            Self::Good => 2,
            Self::Great => 3,
            Self::Excellent => 4,
            Self::Amazing => 5,
        }
    }

    /// Number of filled stars.
    pub fn stars(self) -> u8 {
        self.tier()
    }

    /// Label shown on the results screen.
    pub fn label(self) -> &'static str {
        match self {
            Self::KeepLearning => "Keep Learning!",
            Self::Good => "Good!",
            Self::Great => "Great!",
            Self::Excellent => "Excellent!",
            Self::Amazing => "Amazing!",
        }
    }

    /// Emoji shown above the label.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::KeepLearning => "\u{1f4da}",
            Self::Good => "\u{1f44d}",
            Self::Great => "\u{2b50}",
            Self::Excellent => "\u{1f31f}",
            Self::Amazing => "\u{1f3c6}",
        }
    }

    /// Filled and empty stars, e.g. `★★★☆☆`.
    pub fn star_bar(self) -> String {
        let filled = usize::from(self.stars());
        let empty = usize::from(Self::MAX_STARS) - filled;
        format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(empty))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.star_bar())
    }
}
