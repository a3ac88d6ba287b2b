//! Rendering of the index row printed after a successful scaffold.

use crate::core::args::Invocation;

/// Placeholder title left for the author to fill in.
pub const TITLE_PLACEHOLDER: &str = "TODO ADD TITLE";

/// Render the `<tr>` fragment linking the new exercise's files.
///
/// Links are relative to the project root (`./<level>/<name>/...`). The
/// returned string has no trailing newline.
pub fn readme_entry(invocation: &Invocation, solution_file: &str) -> String {
    let base = format!("./{}/{}", invocation.level.as_str(), invocation.name);
    [
        "<tr>".to_string(),
        "<td></td>".to_string(),
        format!("<td><a href=\"{base}/README.md\"><b>{TITLE_PLACEHOLDER}</b></a></td>"),
        format!("<td><a href=\"{base}/notes.md\">notes</a></td>"),
        format!("<td><a href=\"{base}/{solution_file}\">solution</a></td>"),
        "</tr>".to_string(),
    ]
    .join("\n")
}
