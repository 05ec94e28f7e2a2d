//! Convention engine
//!
//! Pure, stateless transforms mapping C# identifiers, type expressions,
//! and object-construction expressions to their TypeScript equivalents.
//! Rules are checked in a fixed precedence order and fall through to the
//! unchanged input, so every transform is total: unfamiliar syntax passes
//! through for manual completion instead of being rejected.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Reactive backing fields drop this suffix in the target naming idiom.
const SUBJECT_SUFFIX: &str = "Subject";

/// One historically misspelled member name, corrected on the way out.
const LEGACY_NAME: &str = "seperator";
const LEGACY_NAME_FIXED: &str = "separator";

/// Wrapper emitted for reactive-subject types.
const OBSERVABLE_WRAPPER: &str = "Observable";

pub use crate::model::INTERFACE_MARKER;

/// Closed synonym table for basic types. Unmatched types fall through.
static BASIC_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("int", "number");
    m.insert("double", "number");
    m.insert("bool", "boolean");
    m.insert("object", "any");
    m
});

static LIST_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^List<(.+)>$").unwrap());

static SUBJECT_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Subject<(.+)>$").unwrap());

static GENERIC_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z][A-Za-z0-9_]*)<(.+)>$").unwrap());

static NEW_EXPRESSION_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^new\s+([^(]+?)\s*\((.*)\)\s*$").unwrap());

/// Map a C# member name to the target naming idiom: leading underscores
/// stripped, first character lower-cased, a single underscore restored
/// for private members, then the two fixed overrides.
pub fn convert_name(name: &str, is_private: bool) -> String {
    let stripped = name.trim_start_matches('_');
    let mut result = lower_first(stripped);
    if is_private {
        result.insert(0, '_');
    }
    if let Some(unsuffixed) = result.strip_suffix(SUBJECT_SUFFIX) {
        if !unsuffixed.is_empty() && unsuffixed != "_" {
            result = unsuffixed.to_string();
        }
    }
    if result == LEGACY_NAME {
        result = LEGACY_NAME_FIXED.to_string();
    }
    result
}

/// Map a C# type expression to TypeScript, with the interface marker
/// applied to generated observable wrappers.
pub fn convert_type(ty: &str) -> String {
    convert_type_with(ty, true)
}

/// Recursive type conversion. Precedence: basic-type synonym, `List<T>`
/// array form, `Subject<T>` observable wrapper, lower-case generic head,
/// pass-through.
pub fn convert_type_with(ty: &str, use_interface_marker: bool) -> String {
    let ty = ty.trim();

    if let Some(mapped) = BASIC_TYPES.get(ty) {
        return (*mapped).to_string();
    }

    if let Some(captures) = LIST_REGEXP.captures(ty) {
        return format!("{}[]", convert_type_with(&captures[1], use_interface_marker));
    }

    if let Some(captures) = SUBJECT_REGEXP.captures(ty) {
        let wrapper = if use_interface_marker {
            format!("{}{}", INTERFACE_MARKER, OBSERVABLE_WRAPPER)
        } else {
            OBSERVABLE_WRAPPER.to_string()
        };
        return format!(
            "{}<{}>",
            wrapper,
            convert_type_with(&captures[1], use_interface_marker)
        );
    }

    if let Some(captures) = GENERIC_REGEXP.captures(ty) {
        return format!(
            "{}<{}>",
            convert_type_with(&captures[1], use_interface_marker),
            convert_type_with(&captures[2], use_interface_marker)
        );
    }

    ty.to_string()
}

/// True for raw C# types of the reactive-subject wrapper shape.
pub fn is_subject_type(ty: &str) -> bool {
    SUBJECT_REGEXP.is_match(ty.trim())
}

/// Rewrite a `new Type(args)` initializer expression: only the
/// constructed type name is translated, the argument text is untouched.
/// Anything that is not a construction expression passes through.
pub fn convert_initializer(expr: &str) -> String {
    match NEW_EXPRESSION_REGEXP.captures(expr.trim()) {
        Some(captures) => format!("new {}({})", convert_type(&captures[1]), &captures[2]),
        None => expr.to_string(),
    }
}

fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
