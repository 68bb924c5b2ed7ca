//! Text edits: Bundler declarations and anchored splices

use crate::models::{Anchor, GemSource, Require};

/// Render one Bundler declaration line (without trailing newline)
pub fn render_gem(
    name: &str,
    source: Option<&GemSource>,
    require: Option<&Require>,
    groups: &[String],
) -> String {
    let mut line = format!("gem \"{}\"", name);

    if let Some(src) = source {
        line.push_str(&format!(", git: \"{}\"", src.git));
        if let Some(branch) = &src.branch {
            line.push_str(&format!(", branch: \"{}\"", branch));
        }
    }

    match require {
        Some(Require::Disabled) => line.push_str(", require: false"),
        Some(Require::Path(path)) => line.push_str(&format!(", require: \"{}\"", path)),
        None => {}
    }

    if !groups.is_empty() {
        let symbols: Vec<String> = groups.iter().map(|g| format!(":{}", g)).collect();
        line.push_str(&format!(", group: [{}]", symbols.join(", ")));
    }

    line
}

/// Append a declaration to Gemfile contents, keeping a trailing newline
pub fn append_gem(contents: &str, line: &str) -> String {
    let mut out = contents.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(line);
    out.push('\n');
    out
}

/// Splice `text` into `contents` at `anchor`.
///
/// Returns `None` when the anchor marker does not occur in `contents`.
pub fn splice(contents: &str, anchor: &Anchor, text: &str) -> Option<String> {
    let mut out = String::with_capacity(contents.len() + text.len());
    match anchor {
        Anchor::Before(marker) => {
            let at = contents.find(marker.as_str())?;
            out.push_str(&contents[..at]);
            out.push_str(text);
            out.push_str(&contents[at..]);
        }
        Anchor::After(marker) => {
            let at = contents.find(marker.as_str())? + marker.len();
            out.push_str(&contents[..at]);
            out.push_str(text);
            out.push_str(&contents[at..]);
        }
        Anchor::End => {
            out.push_str(contents);
            out.push_str(text);
        }
    }
    Some(out)
}
