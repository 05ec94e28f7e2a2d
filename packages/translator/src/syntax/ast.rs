//! Declaration tree produced by the C# declaration parser
//!
//! Only the shape the structural extractor consumes is modeled: class
//! declarations with their base list, documentation trivia, and nested
//! field/property/method/constructor declarations. Method and accessor
//! bodies are never represented.

use serde::{Deserialize, Serialize};

/// A parsed compilation unit: the top-level class declarations found in
/// the source, in declaration order. Namespace wrappers are transparent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceUnit {
    pub classes: Vec<ClassDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    /// Raw base-list type texts, in declaration order.
    pub base_list: Vec<String>,
    pub doc: Option<String>,
    pub members: Vec<MemberDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MemberDecl {
    Field(FieldDecl),
    Property(PropertyDecl),
    Method(MethodDecl),
    Ctor(CtorDecl),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDecl {
    pub modifiers: Vec<String>,
    pub ty: String,
    pub name: String,
    /// Raw default-value source text, if any.
    pub initializer: Option<String>,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub modifiers: Vec<String>,
    pub ty: String,
    pub name: String,
    pub has_getter: bool,
    pub has_setter: bool,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDecl {
    pub modifiers: Vec<String>,
    pub return_type: String,
    pub name: String,
    pub params: Vec<ParamDecl>,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtorDecl {
    pub modifiers: Vec<String>,
    pub params: Vec<ParamDecl>,
    /// Raw argument-expression texts of the `: base(...)` initializer,
    /// or `None` when the constructor declares no base call.
    pub base_call: Option<Vec<String>>,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamDecl {
    pub ty: String,
    pub name: String,
    /// Raw default-value source text, if any.
    pub default: Option<String>,
}

impl ClassDecl {
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|m| match m {
            MemberDecl::Field(f) => Some(f),
            _ => None,
        })
    }

    pub fn properties(&self) -> impl Iterator<Item = &PropertyDecl> {
        self.members.iter().filter_map(|m| match m {
            MemberDecl::Property(p) => Some(p),
            _ => None,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|m| match m {
            MemberDecl::Method(m) => Some(m),
            _ => None,
        })
    }

    pub fn constructor(&self) -> Option<&CtorDecl> {
        self.members.iter().find_map(|m| match m {
            MemberDecl::Ctor(c) => Some(c),
            _ => None,
        })
    }
}

impl MethodDecl {
    pub fn is_private(&self) -> bool {
        self.modifiers.iter().any(|m| m == "private")
    }
}
