#![deny(clippy::all)]

/**
 * C#-to-TypeScript class skeleton compiler
 *
 * Converts a single C# class declaration into a TypeScript skeleton:
 * structure, names, types, and documentation are preserved and rewritten
 * to the target idiom, method bodies are left as placeholders for manual
 * completion.
 */
// Core modules
pub mod chars;
pub mod convention;
pub mod docs;
pub mod emitter;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

// Source-language parsing
pub mod syntax;

pub use error::{Result, TranslateError};
pub use model::ClassModel;

/// Translate C# class-declaration source into a TypeScript skeleton.
///
/// Pure and synchronous: the whole pipeline (parse, extract, render) runs
/// before returning, and a failure produces no partial output. The source
/// must contain exactly one top-level class declaration.
pub fn translate(source: &str) -> Result<String> {
    let unit = syntax::Parser::new().parse(source)?;
    let model = extract::extract_class(&unit)?;
    Ok(render::render(&model))
}

/// Parse and extract only, returning the intermediate class model.
/// Useful for inspecting what the renderer will consume.
pub fn extract_model(source: &str) -> Result<ClassModel> {
    let unit = syntax::Parser::new().parse(source)?;
    extract::extract_class(&unit)
}
