/// Characters the downstream markdown renderer treats as formula delimiters.
pub const FORMULA_DELIMITER: char = '$';

/// Prefixes every `$` with a backslash so it renders literally.
///
/// Run this after citation linking: URLs inserted by the linker are escaped
/// too, which may over-escape them.
pub fn escape_for_render(text: &str) -> String {
    text.replace(FORMULA_DELIMITER, "\\$")
}
