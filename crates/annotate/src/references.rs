//! Reference-list cleanup.

use regex::Regex;
use std::sync::LazyLock;

static QUOTED_REFERENCE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\]:\s+"(.*?)"\s+http"#).expect("BUG: invalid QUOTED_REFERENCE_TITLE regex literal")
});

/// Rewrites reference lines `[n]: "Title" http...` to `[n]: http...`.
pub fn normalize_reference_lines(text: &str) -> String {
    QUOTED_REFERENCE_TITLE.replace_all(text, "]: http").into_owned()
}
