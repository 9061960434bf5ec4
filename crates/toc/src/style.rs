use crate::anchor::SlugStrategy;
use serde::{Deserialize, Serialize};

/// How a heading's marker count maps to its indentation depth in a TOC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelConvention {
    /// Depth equals the marker count (`#` is depth 1).
    #[default]
    MarkerCount,
    /// Depth is one less than the marker count (`#` is depth 0).
    MarkerCountMinusOne,
}

impl LevelConvention {
    pub fn depth(self, level: u8) -> usize {
        match self {
            LevelConvention::MarkerCount => usize::from(level),
            LevelConvention::MarkerCountMinusOne => usize::from(level).saturating_sub(1),
        }
    }
}

/// A slug rule paired with a level convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TocStyle {
    pub levels: LevelConvention,
    pub slug: SlugStrategy,
}

impl TocStyle {
    /// Anchored HTML links, fine slugs, depth = marker count.
    pub const ANCHORED: TocStyle = TocStyle {
        levels: LevelConvention::MarkerCount,
        slug: SlugStrategy::Fine,
    };

    /// Plain markdown links, coarse slugs, depth = marker count - 1.
    pub const PLAIN: TocStyle = TocStyle {
        levels: LevelConvention::MarkerCountMinusOne,
        slug: SlugStrategy::Coarse,
    };

    /// Indentation prefix for a heading of `level`, `per_depth` spaces per step.
    pub fn indent(&self, level: u8, per_depth: usize) -> String {
        " ".repeat(per_depth * self.levels.depth(level))
    }
}
