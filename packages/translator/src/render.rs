//! Skeleton renderer
//!
//! Reassembles the class model into TypeScript skeleton text: grouped,
//! ordered sections driven through the structured writer, with the
//! convention engine applied to every name, type, and initializer and the
//! documentation pipeline applied to every comment. Method bodies are
//! never translated; placeholders mark where hand-written logic belongs.

use crate::convention;
use crate::docs;
use crate::emitter::SkeletonWriter;
use crate::model::*;
use once_cell::sync::Lazy;
use regex::Regex;

/// Logging-service collaborator: never a field, never a constructor
/// argument in the emitted skeleton.
const LOGGER_TYPE: &str = "ILogger";

/// Interface whose presence triggers the disposal boilerplate.
const DISPOSAL_INTERFACE: &str = "IDisposable";

/// Interface-name prefix that triggers the (stubbed) equality block.
const EQUATABLE_MARKER: &str = "IEquatable";

/// Composite type released wholesale inside `dispose()`.
const COMPOSITE_DISPOSABLE: &str = "CompositeDisposable";

/// Converted-type prefix of reactive fields released inside `dispose()`.
const OBSERVABLE_MARKER: &str = "IObservable";

/// Internal disposal-flag field; synthesized by the disposal block and
/// therefore excluded from the fields section.
const DISPOSED_FLAG: &str = "_isDisposed";

const BODY_PLACEHOLDER: &str = "// TODO: implement";
const CTOR_PLACEHOLDER: &str = "// TODO: complete constructor logic";

static HANDLER_NAME_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^on[A-Z]").unwrap());

/// Conjunction of exclusion predicates over an ordered sequence.
fn exclude_if<T>(items: Vec<T>, predicates: &[&dyn Fn(&T) -> bool]) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| !predicates.iter().any(|p| p(item)))
        .collect()
}

/// A field ready for emission: final name, converted type, raw
/// initializer, and its one-line summary.
struct EmittedField {
    name: String,
    ty: String,
    initializer: Option<String>,
    summary: Option<String>,
}

pub struct SkeletonRenderer<'a> {
    model: &'a ClassModel,
    fields: Vec<EmittedField>,
}

impl<'a> SkeletonRenderer<'a> {
    pub fn new(model: &'a ClassModel) -> Self {
        let fields = build_emitted_fields(model);
        SkeletonRenderer { model, fields }
    }

    pub fn render(&self) -> String {
        let mut w = SkeletonWriter::new();
        self.emit_class_header(&mut w);

        // Fixed section order; a section with no items emits nothing.
        let mut emitted_any = false;
        self.emit_fields(&mut w, &mut emitted_any);
        self.emit_constructor(&mut w, &mut emitted_any);
        self.emit_accessors(&mut w, &mut emitted_any);
        self.emit_event_handlers(&mut w, &mut emitted_any);
        self.emit_methods(&mut w, &mut emitted_any);
        self.emit_disposal(&mut w, &mut emitted_any);
        self.emit_equality(&mut w, &mut emitted_any);

        w.close_block();
        w.to_source()
    }

    fn section(&self, w: &mut SkeletonWriter, label: &str, emitted_any: &mut bool) {
        if *emitted_any {
            w.blank_line();
        }
        w.section(label);
        *emitted_any = true;
    }

    // ----- class header -----

    fn emit_class_header(&self, w: &mut SkeletonWriter) {
        if let Some(doc) = &self.model.comment {
            for line in docs::doc_lines(doc) {
                w.println(line);
            }
        }
        w.print("export class ", false);
        w.print(&self.model.name, false);
        if let Some(base) = &self.model.base_type {
            w.print(" extends ", false);
            w.print(base, false);
        }
        if !self.model.interfaces.is_empty() {
            w.print(" implements ", false);
            let joined = self
                .model
                .interfaces
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            w.print(&joined, false);
        }
        w.open_block();
    }

    // ----- fields -----

    fn emit_fields(&self, w: &mut SkeletonWriter, emitted_any: &mut bool) {
        if self.fields.is_empty() {
            return;
        }
        self.section(w, "Fields", emitted_any);
        for field in &self.fields {
            if let Some(summary) = &field.summary {
                w.println(&format!("// {}", summary));
            }
            w.println(&format!("private {}: {};", field.name, field.ty));
        }
    }

    // ----- constructor -----

    fn emit_constructor(&self, w: &mut SkeletonWriter, emitted_any: &mut bool) {
        let ctor = match &self.model.constructor {
            Some(c) => c,
            None => return,
        };
        self.section(w, "Constructor", emitted_any);

        let dropped: Vec<&str> = ctor
            .arguments
            .iter()
            .filter(|a| a.ty == LOGGER_TYPE)
            .map(|a| a.name.as_str())
            .collect();
        let is_logger = |a: &&ArgumentModel| a.ty == LOGGER_TYPE;
        let retained = exclude_if(ctor.arguments.iter().collect::<Vec<_>>(), &[&is_logger]);

        if let Some(doc) = &ctor.comment {
            let pruned = docs::prune_params(doc, &dropped);
            for line in docs::doc_lines(&pruned) {
                w.println(line);
            }
        }

        w.print("constructor(", false);
        for (i, arg) in retained.iter().enumerate() {
            if i > 0 {
                w.print(", ", false);
            }
            self.emit_argument(w, arg);
        }
        w.print(")", false);
        w.open_block();

        self.emit_super_call(w, ctor);

        for field in &self.fields {
            if let Some(init) = &field.initializer {
                w.println(&format!(
                    "this.{} = {};",
                    field.name,
                    convention::convert_initializer(init)
                ));
            }
        }

        for arg in &retained {
            let target = convention::convert_name(&arg.name, true);
            if self.fields.iter().any(|f| f.name == target) {
                w.println(&format!(
                    "this.{} = {};",
                    target,
                    convention::convert_name(&arg.name, false)
                ));
            }
        }

        w.println(CTOR_PLACEHOLDER);
        w.close_block();
    }

    /// Base-call policy: a captured `: base(...)` is re-emitted verbatim
    /// as a positional `super(...)`; without one, a derived class still
    /// gets the bare `super();` TypeScript requires.
    fn emit_super_call(&self, w: &mut SkeletonWriter, ctor: &ConstructorModel) {
        match &ctor.base_call_arguments {
            Some(args) => {
                let exprs: Vec<&str> = args.iter().map(|a| a.name.as_str()).collect();
                w.println(&format!("super({});", exprs.join(", ")));
            }
            None => {
                if self.model.base_type.is_some() {
                    w.println("super();");
                }
            }
        }
    }

    fn emit_argument(&self, w: &mut SkeletonWriter, arg: &ArgumentModel) {
        w.print(&convention::convert_name(&arg.name, false), false);
        w.print(": ", false);
        w.print(&convention::convert_type(&arg.ty), false);
        if let Some(default) = &arg.initializer {
            w.print(" = ", false);
            w.print(&convention::convert_initializer(default), false);
        }
    }

    // ----- accessors -----

    fn accessor_properties(&self) -> Vec<&PropertyModel> {
        let is_subject = |p: &&PropertyModel| convention::is_subject_type(&p.ty);
        let is_handler = |p: &&PropertyModel| is_handler_name(&convention::convert_name(&p.name, false));
        exclude_if(
            self.model.properties.iter().collect(),
            &[&is_subject, &is_handler],
        )
    }

    fn handler_properties(&self) -> Vec<&PropertyModel> {
        let is_subject = |p: &&PropertyModel| convention::is_subject_type(&p.ty);
        let not_handler =
            |p: &&PropertyModel| !is_handler_name(&convention::convert_name(&p.name, false));
        exclude_if(
            self.model.properties.iter().collect(),
            &[&is_subject, &not_handler],
        )
    }

    fn emit_accessors(&self, w: &mut SkeletonWriter, emitted_any: &mut bool) {
        let properties = self.accessor_properties();
        if properties.is_empty() {
            return;
        }
        self.section(w, "Properties", emitted_any);
        for (i, property) in properties.iter().enumerate() {
            if i > 0 {
                w.blank_line();
            }
            self.emit_getter(w, *property);
        }
    }

    fn emit_getter(&self, w: &mut SkeletonWriter, property: &PropertyModel) {
        if let Some(doc) = &property.comment {
            for line in docs::doc_lines(doc) {
                w.println(line);
            }
        }
        let name = convention::convert_name(&property.name, false);
        let backing = convention::convert_name(&property.name, true);
        w.print(&format!("get {}(): ", name), false);
        w.print(&convention::convert_type(&property.ty), false);
        w.open_block();
        w.println(&format!("return this.{};", backing));
        w.close_block();
    }

    // ----- methods -----

    fn handler_methods(&self) -> Vec<&MethodModel> {
        let not_handler = |m: &&MethodModel| !is_handler_method(m);
        exclude_if(self.model.methods.iter().collect(), &[&not_handler])
    }

    fn plain_methods(&self) -> Vec<&MethodModel> {
        let is_handler = |m: &&MethodModel| is_handler_method(m);
        exclude_if(self.model.methods.iter().collect(), &[&is_handler])
    }

    fn emit_event_handlers(&self, w: &mut SkeletonWriter, emitted_any: &mut bool) {
        let properties = self.handler_properties();
        let methods = self.handler_methods();
        if properties.is_empty() && methods.is_empty() {
            return;
        }
        self.section(w, "Event handlers", emitted_any);
        let mut first = true;
        for property in properties {
            if !first {
                w.blank_line();
            }
            first = false;
            self.emit_getter(w, property);
        }
        for method in methods {
            if !first {
                w.blank_line();
            }
            first = false;
            self.emit_method(w, method);
        }
    }

    fn emit_methods(&self, w: &mut SkeletonWriter, emitted_any: &mut bool) {
        let methods = self.plain_methods();
        if methods.is_empty() {
            return;
        }
        self.section(w, "Methods", emitted_any);
        for (i, method) in methods.iter().enumerate() {
            if i > 0 {
                w.blank_line();
            }
            self.emit_method(w, *method);
        }
    }

    fn emit_method(&self, w: &mut SkeletonWriter, method: &MethodModel) {
        if let Some(doc) = &method.comment {
            for line in docs::doc_lines(doc) {
                w.println(line);
            }
        }
        if method.is_private {
            w.print("private ", false);
        }
        w.print(
            &convention::convert_name(&method.name, method.is_private),
            false,
        );
        w.print("(", false);
        for (i, arg) in method.arguments.iter().enumerate() {
            if i > 0 {
                w.print(", ", false);
            }
            self.emit_argument(w, arg);
        }
        w.print("): ", false);
        w.print(&convention::convert_type(&method.return_type), false);
        w.open_block();
        w.println(BODY_PLACEHOLDER);
        w.close_block();
    }

    // ----- well-known interface boilerplate -----

    fn emit_disposal(&self, w: &mut SkeletonWriter, emitted_any: &mut bool) {
        if !self.model.interfaces.contains(DISPOSAL_INTERFACE) {
            return;
        }
        self.section(w, DISPOSAL_INTERFACE, emitted_any);
        w.println(&format!("private {}: boolean = false;", DISPOSED_FLAG));
        w.blank_line();
        w.print("dispose(): void", false);
        w.open_block();
        w.print(&format!("if (this.{})", DISPOSED_FLAG), false);
        w.open_block();
        w.println("return;");
        w.close_block();
        for field in &self.fields {
            if field.ty == COMPOSITE_DISPOSABLE || field.ty.starts_with(OBSERVABLE_MARKER) {
                w.println(&format!("this.{}.dispose();", field.name));
            }
        }
        w.println("// TODO: release owned resources");
        w.println(&format!("this.{} = true;", DISPOSED_FLAG));
        w.close_block();
    }

    /// Deliberate stub: generated equality logic is always hand-written.
    fn emit_equality(&self, w: &mut SkeletonWriter, emitted_any: &mut bool) {
        let triggered = self
            .model
            .interfaces
            .iter()
            .any(|i| i.starts_with(EQUATABLE_MARKER));
        if !triggered {
            return;
        }
        self.section(w, EQUATABLE_MARKER, emitted_any);
        w.println("// equality members are intentionally hand-written");
    }
}

/// Render the class model to TypeScript skeleton text.
pub fn render(model: &ClassModel) -> String {
    SkeletonRenderer::new(model).render()
}

/// Union of declared fields and synthesized property backing fields,
/// keyed by final (private-convention) name, minus the disposal flag and
/// logging-service collaborators, alphabetically ordered by final name.
fn build_emitted_fields(model: &ClassModel) -> Vec<EmittedField> {
    let mut fields: Vec<EmittedField> = Vec::new();
    for f in &model.fields {
        let name = convention::convert_name(&f.name, true);
        // Declarations that normalize to the same final name collapse to
        // the first one.
        if fields.iter().any(|e| e.name == name) {
            continue;
        }
        fields.push(EmittedField {
            name,
            ty: convention::convert_type(&f.ty),
            initializer: f.initializer.clone(),
            summary: docs::summarize(f.comment.as_deref()),
        });
    }

    for property in &model.properties {
        let name = convention::convert_name(&property.name, true);
        if fields.iter().any(|f| f.name == name) {
            continue;
        }
        fields.push(EmittedField {
            name,
            ty: convention::convert_type(&property.ty),
            initializer: None,
            summary: docs::summarize(property.comment.as_deref()),
        });
    }

    let is_disposed_flag = |f: &EmittedField| f.name == DISPOSED_FLAG;
    let is_logger = |f: &EmittedField| f.ty == LOGGER_TYPE;
    let mut fields = exclude_if(fields, &[&is_disposed_flag, &is_logger]);
    fields.sort_by(|a, b| a.name.cmp(&b.name));
    fields
}

fn is_handler_name(name: &str) -> bool {
    HANDLER_NAME_REGEXP.is_match(name)
}

fn is_handler_method(method: &MethodModel) -> bool {
    method.is_private && method.return_type == "void" && method.arguments.len() == 1
}
