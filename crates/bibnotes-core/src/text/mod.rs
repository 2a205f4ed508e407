//! Text processing utilities for extracted text and file names

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

/// A word wrapped onto the next line: non-whitespace, spaces, newline,
/// spaces, non-whitespace
static LINE_BREAK_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn get_line_break_re() -> Option<&'static Regex> {
    LINE_BREAK_RE
        .get_or_init(|| match Regex::new(r"([^\s]) *\n *([^\s])") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile line break regex");
                None
            }
        })
        .as_ref()
}

/// Join lines that were hard-wrapped in the middle of a paragraph.
///
/// A single newline between two non-whitespace characters, together with any
/// spaces around it, becomes one space. Blank lines (paragraph breaks) are
/// left alone. Matches never overlap, so in `"a\nb\nc"` only the first break
/// is joined.
pub fn normalize_line_breaks(text: &str) -> String {
    match get_line_break_re() {
        Some(re) => re.replace_all(text, "${1} ${2}").into_owned(),
        None => text.to_string(),
    }
}

/// Turn an arbitrary (possibly formatted) name into a safe file name.
///
/// Only the last path component is kept. Each dot-separated part is
/// slugified, so extensions survive: `"My Notes.tex"` becomes
/// `"my-notes.tex"`. Returns an empty string if nothing usable remains.
pub fn clean_file_name(name: &str) -> String {
    let basename = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    let cleaned = basename
        .split('.')
        .map(slug::slugify)
        .collect::<Vec<_>>()
        .join(".");

    if cleaned.chars().all(|c| c == '.') {
        String::new()
    } else {
        cleaned
    }
}
