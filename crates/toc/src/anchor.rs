//! Anchor slug strategies.
//!
//! Different renderers derive anchors from heading titles with different
//! rules, and a TOC link only works if it uses the same rule as the renderer
//! that produced the visible heading. The rules are therefore kept apart and
//! selected explicitly.

use serde::{Deserialize, Serialize};
use storm_types::AnchorId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugStrategy {
    /// Transliterate to ASCII, lowercase, turn every run of non-alphanumeric
    /// characters into a single `-`, trim leading/trailing `-`.
    ///
    /// `"Héllo World!"` becomes `"hello-world"`.
    #[default]
    Fine,
    /// Drop everything except ASCII alphanumerics, whitespace and `-`, then
    /// lowercase and replace each space with `-`.
    ///
    /// `"Héllo World!"` becomes `"hllo-world"`.
    Coarse,
    /// Lowercase, replace each space with `-`, remove `.`.
    Minimal,
}

impl SlugStrategy {
    /// Derives the anchor slug for `title`. Pure and deterministic.
    pub fn slugify(self, title: &str) -> String {
        match self {
            SlugStrategy::Fine => slug::slugify(title),
            SlugStrategy::Coarse => coarse_slug(title),
            SlugStrategy::Minimal => title.to_lowercase().replace(' ', "-").replace('.', ""),
        }
    }

    pub fn anchor(self, title: &str) -> AnchorId {
        AnchorId::from(self.slugify(title))
    }
}

fn coarse_slug(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect::<String>()
        .to_lowercase()
        .replace(' ', "-")
}
