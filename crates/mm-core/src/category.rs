use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two classes every element and sorting item belongs to.
///
/// Also used as the target bin of the sorting activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Shiny, conductive, malleable elements.
    #[serde(rename = "metal")]
    Metal,
    /// Everything else: gases, brittle solids, poor conductors.
    #[serde(rename = "non-metal")]
    NonMetal,
}

impl Category {
    /// Both categories in display order.
    pub const ALL: [Category; 2] = [Category::Metal, Category::NonMetal];

    /// The opposite category.
    pub fn other(self) -> Self {
        match self {
            Self::Metal => Self::NonMetal,
            Self::NonMetal => Self::Metal,
        }
    }

    /// Plural heading used for bins and browser sections.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Metal => "Metals",
            Self::NonMetal => "Non-Metals",
        }
    }

    /// Emoji badge shown next to the heading.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Metal => "\u{1fa99}",
            Self::NonMetal => "\u{1f32c}\u{fe0f}",
        }
    }

    /// One-line tagline for the learn browser.
    pub fn tagline(self) -> &'static str {
        match self {
            Self::Metal => "Shiny, strong, and conductive elements",
            Self::NonMetal => "Diverse elements with unique properties",
        }
    }

    /// Try to parse a category from user input.
    ///
    /// Accepts `metal`, `non-metal`, `nonmetal`, `non_metal` and the short
    /// forms `m` / `n`, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metal" | "metals" | "m" => Some(Self::Metal),
            "non-metal" | "non-metals" | "nonmetal" | "nonmetals" | "non_metal" | "n" => {
                Some(Self::NonMetal)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metal => write!(f, "metal"),
            Self::NonMetal => write!(f, "non-metal"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown category: {s} (expected metal or non-metal)"))
    }
}
