//! Class model
//!
//! Immutable snapshot of a single class declaration, built once per
//! translation by the structural extractor and only read by the renderer.
//! Types and initializer expressions are kept as raw C# source text; the
//! convention engine rewrites them at render time.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Base-list entries whose name starts with this prefix are interfaces.
pub const INTERFACE_MARKER: &str = "I";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassModel {
    pub name: String,
    /// The single non-interface base, if any.
    pub base_type: Option<String>,
    /// Interface names in declaration order.
    pub interfaces: IndexSet<String>,
    pub comment: Option<String>,
    pub constructor: Option<ConstructorModel>,
    pub fields: Vec<FieldModel>,
    pub properties: Vec<PropertyModel>,
    pub methods: Vec<MethodModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldModel {
    pub name: String,
    /// Raw C# type expression.
    pub ty: String,
    /// Raw default-value source text, if any.
    pub initializer: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyModel {
    pub name: String,
    pub ty: String,
    /// True iff an explicit setter accessor is declared.
    pub has_setter: bool,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodModel {
    pub name: String,
    pub return_type: String,
    pub is_private: bool,
    pub arguments: Vec<ArgumentModel>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorModel {
    pub arguments: Vec<ArgumentModel>,
    /// Arguments of the `: base(...)` call; `name` holds the raw
    /// expression text and `ty` stays empty. `None` when the constructor
    /// declares no base call.
    pub base_call_arguments: Option<Vec<ArgumentModel>>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgumentModel {
    pub name: String,
    pub ty: String,
    /// Raw default-value source text, if any.
    pub initializer: Option<String>,
}

impl ArgumentModel {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        ArgumentModel {
            name: name.into(),
            ty: ty.into(),
            initializer: None,
        }
    }

    /// A base-call argument: raw expression text in `name`, no type.
    pub fn raw_expression(text: impl Into<String>) -> Self {
        ArgumentModel {
            name: text.into(),
            ty: String::new(),
            initializer: None,
        }
    }
}

impl ClassModel {
    /// JSON snapshot of the model, used by tests to assert extraction
    /// results in one comparison.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
