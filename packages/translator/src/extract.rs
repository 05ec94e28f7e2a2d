//! Structural extractor
//!
//! Walks a parsed declaration tree and produces the class model. Fails
//! when the tree does not contain exactly one top-level class; everything
//! else is collected as-is, in declaration order, with no knowledge of
//! output conventions.

use crate::error::{Result, TranslateError};
use crate::model::*;
use crate::syntax::{ClassDecl, CtorDecl, SourceUnit};
use indexmap::IndexSet;

/// Build the class model for the single class declared in `unit`.
pub fn extract_class(unit: &SourceUnit) -> Result<ClassModel> {
    if unit.classes.len() != 1 {
        return Err(TranslateError::MalformedInput {
            found: unit.classes.len(),
        });
    }
    Ok(extract_from_decl(&unit.classes[0]))
}

fn extract_from_decl(decl: &ClassDecl) -> ClassModel {
    let (base_type, interfaces) = split_base_list(&decl.base_list);

    let fields = decl
        .fields()
        .map(|f| FieldModel {
            name: f.name.clone(),
            ty: f.ty.clone(),
            initializer: f.initializer.clone(),
            comment: f.doc.clone(),
        })
        .collect();

    let properties = decl
        .properties()
        .map(|p| PropertyModel {
            name: p.name.clone(),
            ty: p.ty.clone(),
            has_setter: p.has_setter,
            comment: p.doc.clone(),
        })
        .collect();

    let methods = decl
        .methods()
        .map(|m| MethodModel {
            name: m.name.clone(),
            return_type: m.return_type.clone(),
            is_private: m.is_private(),
            arguments: m
                .params
                .iter()
                .map(|p| ArgumentModel {
                    name: p.name.clone(),
                    ty: p.ty.clone(),
                    initializer: p.default.clone(),
                })
                .collect(),
            comment: m.doc.clone(),
        })
        .collect();

    ClassModel {
        name: decl.name.clone(),
        base_type,
        interfaces,
        comment: decl.doc.clone(),
        constructor: decl.constructor().map(extract_constructor),
        fields,
        properties,
        methods,
    }
}

/// Interface membership is decided purely by the `I` naming convention:
/// the first base-list entry not starting with the marker becomes the base
/// type, every marker-prefixed entry lands in the interface set.
fn split_base_list(base_list: &[String]) -> (Option<String>, IndexSet<String>) {
    let mut base_type = None;
    let mut interfaces = IndexSet::new();
    for entry in base_list {
        if entry.starts_with(INTERFACE_MARKER) {
            interfaces.insert(entry.clone());
        } else if base_type.is_none() {
            base_type = Some(entry.clone());
        }
    }
    (base_type, interfaces)
}

fn extract_constructor(ctor: &CtorDecl) -> ConstructorModel {
    ConstructorModel {
        arguments: ctor
            .params
            .iter()
            .map(|p| ArgumentModel {
                name: p.name.clone(),
                ty: p.ty.clone(),
                initializer: p.default.clone(),
            })
            .collect(),
        base_call_arguments: ctor.base_call.as_ref().map(|args| {
            args.iter()
                .map(|expr| ArgumentModel::raw_expression(expr.clone()))
                .collect()
        }),
        comment: ctor.doc.clone(),
    }
}
