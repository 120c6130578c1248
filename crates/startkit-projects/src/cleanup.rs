//! Text cleanup applied to rendered template output
//!
//! Conditional blocks in templates leave behind orphan comment markers and runs
//! of blank lines when they evaluate false. The passes here make the generated
//! files read as if they were written by hand for the chosen configuration.

use camino::Utf8Path;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Dependency list file name; its lines are deduplicated and sorted
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Lines holding nothing but a `#`
static BLANK_COMMENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^ *# *\n").expect("blank comment regex is valid"));

/// A blank comment on the last line of the text
static TRAILING_BLANK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n *# *$").expect("trailing comment regex is valid"));

/// More than two empty lines in a row
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{4,}").expect("newline run regex is valid"));

/// How a rendered file is post-processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `requirements.txt`
    Requirements,
    /// `.py` source
    PythonSource,
    /// Anything else, written as rendered
    Other,
}

impl FileKind {
    /// Classify a template file by its name and extension
    pub fn of(path: &Utf8Path) -> Self {
        if path.file_name() == Some(REQUIREMENTS_FILE) {
            Self::Requirements
        } else if path.extension() == Some("py") {
            Self::PythonSource
        } else {
            Self::Other
        }
    }
}

/// Strip surrounding spaces, tabs and newlines from rendered output
pub fn strip_rendered(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\n'))
}

/// Deduplicate and sort package lines, dropping blanks
pub fn normalize_requirements(text: &str) -> String {
    let packages: BTreeSet<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    packages.into_iter().collect::<Vec<_>>().join("\n")
}

/// Remove lines that are only a comment marker
pub fn remove_blank_comment_lines(text: &str) -> String {
    BLANK_COMMENT_LINE.replace_all(text, "").into_owned()
}

/// Remove a comment-only line at the end of the text
pub fn remove_trailing_blank_comment(text: &str) -> String {
    TRAILING_BLANK_COMMENT.replace(text, "").into_owned()
}

/// Collapse runs of four or more newlines to three
pub fn collapse_blank_lines(text: &str) -> String {
    EXCESS_NEWLINES.replace_all(text, "\n\n\n").into_owned()
}

/// Python source passes, applied in order
const PYTHON_PASSES: [fn(&str) -> String; 3] = [
    remove_blank_comment_lines,
    remove_trailing_blank_comment,
    collapse_blank_lines,
];

/// Run every Python cleanup pass over the text
pub fn clean_python_source(text: &str) -> String {
    PYTHON_PASSES
        .iter()
        .fold(text.to_string(), |acc, pass| pass(&acc))
}

/// End the text with exactly one newline
pub fn ensure_trailing_newline(text: &str) -> String {
    format!("{}\n", text.trim_end_matches('\n'))
}

/// Apply the kind-specific cleanup and the final newline normalization
pub fn postprocess(kind: FileKind, text: &str) -> String {
    let text = match kind {
        FileKind::Requirements => normalize_requirements(text),
        FileKind::PythonSource => clean_python_source(text),
        FileKind::Other => text.to_string(),
    };
    ensure_trailing_newline(&text)
}
