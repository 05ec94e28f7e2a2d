//! Documentation pipeline
//!
//! Pure helpers over C# XML documentation blocks (`///` lines). Blocks
//! travel through the model verbatim; these functions reformat or prune
//! them at render time.

use once_cell::sync::Lazy;
use regex::Regex;

static SUMMARY_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<summary>(.*?)</summary>").unwrap());

static DOC_MARKER_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"///|<br\s*/?>").unwrap());

static WHITESPACE_RUN_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Extract the free text of the `<summary>` tag from a documentation
/// block: first match, markers and explicit line breaks stripped,
/// whitespace collapsed. `None` when the block has no usable summary.
pub fn summarize(doc: Option<&str>) -> Option<String> {
    let doc = doc?;
    let captures = SUMMARY_REGEXP.captures(doc)?;
    let body = captures.get(1).map(|m| m.as_str()).unwrap_or("");
    let stripped = DOC_MARKER_REGEXP.replace_all(body, " ");
    let collapsed = WHITESPACE_RUN_REGEXP.replace_all(&stripped, " ");
    let text = collapsed.trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Remove every `<param name="X">...</param>` entry whose name is in
/// `names`, including its doc-comment markers and a trailing newline.
/// Used when constructor arguments are dropped from the emitted signature
/// so their parameter documentation does not dangle.
pub fn prune_params(doc: &str, names: &[&str]) -> String {
    let mut result = doc.to_string();
    for name in names {
        let pattern = format!(
            r#"(?s)[^\S\n]*///[^\S\n]*<param name="{}">.*?</param>\n?"#,
            regex::escape(name)
        );
        // The pattern is built from a fixed template; escaping keeps the
        // name literal, so compilation cannot fail on user input.
        if let Ok(re) = Regex::new(&pattern) {
            result = re.replace_all(&result, "").to_string();
        }
    }
    result
}

/// Split a documentation block into its lines for re-emission at the
/// current indentation.
pub fn doc_lines(doc: &str) -> impl Iterator<Item = &str> {
    doc.lines().map(|line| line.trim_start())
}
