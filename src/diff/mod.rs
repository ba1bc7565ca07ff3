use similar::TextDiff;
use std::path::Path;

/// Render a unified diff of `old` against `new` with three lines of context.
///
/// Returns an empty string when the texts are identical.
pub fn render_unified(old: &str, new: &str, path: &Path) -> String {
    if old == new {
        return String::new();
    }

    let name = path.display().to_string();
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", name), &format!("b/{}", name))
        .to_string()
}
