//! C# declaration parser
//!
//! Recursive descent over the token stream. Only declaration structure is
//! parsed; method and accessor bodies are skipped by brace matching, and
//! type/initializer/base-call expressions are captured as raw source
//! slices for the convention engine to rewrite later. Constructs this
//! parser does not recognize are skipped, not rejected.

use super::ast::*;
use super::lexer::{Lexer, Token};
use crate::error::{Result, TranslateError};

/// Parameter passing modifiers that never belong to the type text
const PARAM_MODIFIERS: &[&str] = &["ref", "out", "in", "params"];

/// Parser facade for C# declaration source
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            lexer: Lexer::new(),
        }
    }

    pub fn parse(&self, input: &str) -> Result<SourceUnit> {
        let tokens = self.lexer.tokenize(input);
        ParseCursor::new(input, tokens).parse_unit()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Cursor over the token stream with raw-slice capture
struct ParseCursor<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    index: usize,
}

impl<'a> ParseCursor<'a> {
    fn new(input: &'a str, tokens: Vec<Token>) -> Self {
        ParseCursor {
            input,
            tokens,
            index: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn at_character(&self, code: char) -> bool {
        self.peek().map(|t| t.is_character(code)).unwrap_or(false)
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        self.peek().map(|t| t.is_keyword(keyword)).unwrap_or(false)
    }

    fn expect_character(&mut self, code: char) -> Result<()> {
        if self.at_character(code) {
            self.advance();
            Ok(())
        } else {
            Err(TranslateError::parse(format!(
                "expected '{}', found {}",
                code,
                self.describe_current()
            )))
        }
    }

    fn expect_identifier(&mut self) -> Result<String> {
        match self.peek() {
            Some(t) if t.is_identifier() => {
                let name = t.str_value.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(TranslateError::parse(format!(
                "expected identifier, found {}",
                self.describe_current()
            ))),
        }
    }

    fn describe_current(&self) -> String {
        match self.peek() {
            Some(t) => format!("'{}'", t.str_value),
            None => "end of input".to_string(),
        }
    }

    /// Raw source text spanned by tokens `[from, to)`.
    fn raw_slice(&self, from: usize, to: usize) -> String {
        if from >= to {
            return String::new();
        }
        let start = self.tokens[from].index;
        let end = self.tokens[to - 1].end;
        self.input[start..end].to_string()
    }

    fn check_error_token(&self) -> Result<()> {
        if let Some(t) = self.peek() {
            if t.is_error() {
                return Err(TranslateError::parse(t.str_value.clone()));
            }
        }
        Ok(())
    }

    // ----- top level -----

    fn parse_unit(mut self) -> Result<SourceUnit> {
        let mut classes = Vec::new();
        let mut pending_doc: Vec<String> = Vec::new();

        while let Some(token) = self.peek() {
            self.check_error_token()?;
            if token.is_doc_comment() {
                pending_doc.push(token.str_value.clone());
                self.advance();
                continue;
            }
            if token.is_keyword("using") {
                self.skip_to_semicolon();
                pending_doc.clear();
                continue;
            }
            if token.is_keyword("namespace") {
                // Transparent: enter the namespace body and keep scanning;
                // its closing brace is skipped as a stray token below.
                self.advance();
                while !self.at_character('{') && self.peek().is_some() {
                    self.advance();
                }
                if self.at_character('{') {
                    self.advance();
                }
                continue;
            }
            if token.is_character('[') {
                self.skip_balanced('[', ']')?;
                continue;
            }
            if token.is_modifier() || token.is_keyword("partial") {
                self.advance();
                continue;
            }
            if token.is_keyword("class") {
                self.advance();
                let doc = take_doc(&mut pending_doc);
                let class = self.parse_class(doc)?;
                classes.push(class);
                continue;
            }
            self.advance();
            pending_doc.clear();
        }

        Ok(SourceUnit { classes })
    }

    fn parse_class(&mut self, doc: Option<String>) -> Result<ClassDecl> {
        let name = self.expect_identifier()?;
        if self.at_character('<') {
            self.skip_balanced_angles()?;
        }

        let mut base_list = Vec::new();
        if self.at_character(':') {
            self.advance();
            loop {
                base_list.push(self.parse_type_text()?);
                if self.at_character(',') {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        self.expect_character('{')?;
        let members = self.parse_members(&name)?;

        Ok(ClassDecl {
            name,
            base_list,
            doc,
            members,
        })
    }

    // ----- class members -----

    fn parse_members(&mut self, class_name: &str) -> Result<Vec<MemberDecl>> {
        let mut members = Vec::new();
        let mut pending_doc: Vec<String> = Vec::new();

        loop {
            self.check_error_token()?;
            let token = match self.peek() {
                Some(t) => t,
                None => {
                    return Err(TranslateError::parse(format!(
                        "unterminated class body in '{}'",
                        class_name
                    )))
                }
            };

            if token.is_character('}') {
                self.advance();
                return Ok(members);
            }
            if token.is_doc_comment() {
                pending_doc.push(token.str_value.clone());
                self.advance();
                continue;
            }
            if token.is_character('[') {
                self.skip_balanced('[', ']')?;
                continue;
            }

            let mut modifiers = Vec::new();
            while let Some(t) = self.peek() {
                if t.is_modifier() {
                    modifiers.push(t.str_value.clone());
                    self.advance();
                } else {
                    break;
                }
            }

            if self.at_keyword("class") {
                // Nested classes are out of scope; skip the whole declaration.
                self.advance();
                while !self.at_character('{') && self.peek().is_some() {
                    self.advance();
                }
                self.skip_balanced('{', '}')?;
                pending_doc.clear();
                continue;
            }

            let doc = take_doc(&mut pending_doc);
            if let Some(member) = self.parse_member(class_name, modifiers, doc)? {
                members.push(member);
            }
        }
    }

    fn parse_member(
        &mut self,
        class_name: &str,
        modifiers: Vec<String>,
        doc: Option<String>,
    ) -> Result<Option<MemberDecl>> {
        // Constructor: the class name directly followed by a parameter list
        let is_ctor = match (self.peek(), self.tokens.get(self.index + 1)) {
            (Some(t), Some(next)) => {
                t.is_identifier() && t.str_value == class_name && next.is_character('(')
            }
            _ => false,
        };
        if is_ctor {
            self.advance();
            let params = self.parse_params()?;
            let base_call = self.parse_base_call()?;
            self.skip_body()?;
            return Ok(Some(MemberDecl::Ctor(CtorDecl {
                modifiers,
                params,
                base_call,
                doc,
            })));
        }

        let ty = match self.parse_type_text() {
            Ok(ty) => ty,
            Err(_) => {
                // Not a declaration we understand; skip to the next member.
                self.skip_unrecognized()?;
                return Ok(None);
            }
        };
        let name = self.expect_identifier()?;

        if self.at_character('(') {
            let params = self.parse_params()?;
            self.skip_body()?;
            return Ok(Some(MemberDecl::Method(MethodDecl {
                modifiers,
                return_type: ty,
                name,
                params,
                doc,
            })));
        }

        if self.at_character('{') {
            let (has_getter, has_setter) = self.parse_accessor_list()?;
            if self.at_character('=') {
                // Property initializer; not part of the model.
                self.skip_to_semicolon();
            }
            return Ok(Some(MemberDecl::Property(PropertyDecl {
                modifiers,
                ty,
                name,
                has_getter,
                has_setter,
                doc,
            })));
        }

        // Expression-bodied property: `public int X => _x;`
        let arrow = self.at_character('=')
            && self
                .tokens
                .get(self.index + 1)
                .map(|t| t.is_character('>'))
                .unwrap_or(false);
        if arrow {
            self.skip_to_semicolon();
            return Ok(Some(MemberDecl::Property(PropertyDecl {
                modifiers,
                ty,
                name,
                has_getter: true,
                has_setter: false,
                doc,
            })));
        }

        let initializer = if self.at_character('=') {
            self.advance();
            Some(self.capture_expression(&[';'])?)
        } else {
            None
        };
        self.expect_character(';')?;
        Ok(Some(MemberDecl::Field(FieldDecl {
            modifiers,
            ty,
            name,
            initializer,
            doc,
        })))
    }

    /// Scan a `{ get; set; }` accessor list, tolerating accessor bodies.
    fn parse_accessor_list(&mut self) -> Result<(bool, bool)> {
        self.expect_character('{')?;
        let mut depth = 1usize;
        let mut has_getter = false;
        let mut has_setter = false;
        loop {
            let token = self
                .peek()
                .ok_or_else(|| TranslateError::parse("unterminated accessor list"))?;
            if token.is_character('{') {
                depth += 1;
            } else if token.is_character('}') {
                depth -= 1;
                if depth == 0 {
                    self.advance();
                    return Ok((has_getter, has_setter));
                }
            } else if depth == 1 && token.is_keyword("get") {
                has_getter = true;
            } else if depth == 1 && token.is_keyword("set") {
                has_setter = true;
            }
            self.advance();
        }
    }

    fn parse_params(&mut self) -> Result<Vec<ParamDecl>> {
        self.expect_character('(')?;
        let mut params = Vec::new();
        loop {
            if self.at_character(')') {
                self.advance();
                return Ok(params);
            }
            if self.at_character('[') {
                self.skip_balanced('[', ']')?;
                continue;
            }
            while let Some(t) = self.peek() {
                let is_passing_modifier = (t.is_identifier() || t.is_any_keyword())
                    && PARAM_MODIFIERS.contains(&t.str_value.as_str());
                let next_is_type = self
                    .tokens
                    .get(self.index + 1)
                    .map(|n| n.is_type_start())
                    .unwrap_or(false);
                if is_passing_modifier && next_is_type {
                    self.advance();
                } else {
                    break;
                }
            }
            let ty = self.parse_type_text()?;
            let name = self.expect_identifier()?;
            let default = if self.at_character('=') {
                self.advance();
                Some(self.capture_expression(&[',', ')'])?)
            } else {
                None
            };
            params.push(ParamDecl { ty, name, default });
            if self.at_character(',') {
                self.advance();
            }
        }
    }

    /// Parse `: base(...)` after a constructor's parameter list. A missing
    /// initializer, or a `: this(...)` delegation, yields `None`.
    fn parse_base_call(&mut self) -> Result<Option<Vec<String>>> {
        if !self.at_character(':') {
            return Ok(None);
        }
        self.advance();
        if self.at_keyword("this") {
            self.advance();
            self.skip_balanced('(', ')')?;
            return Ok(None);
        }
        if !self.at_keyword("base") {
            return Err(TranslateError::parse(format!(
                "expected 'base' or 'this' in constructor initializer, found {}",
                self.describe_current()
            )));
        }
        self.advance();
        self.expect_character('(')?;
        let mut args = Vec::new();
        loop {
            if self.at_character(')') {
                self.advance();
                return Ok(Some(args));
            }
            args.push(self.capture_expression(&[',', ')'])?);
            if self.at_character(',') {
                self.advance();
            }
        }
    }

    // ----- raw text capture -----

    /// A type expression: qualified name, balanced generic arguments,
    /// array suffixes, and nullable marker, captured as raw source text.
    fn parse_type_text(&mut self) -> Result<String> {
        let start = self.index;
        match self.peek() {
            Some(t) if t.is_type_start() => self.advance(),
            _ => {
                return Err(TranslateError::parse(format!(
                    "expected type, found {}",
                    self.describe_current()
                )))
            }
        }
        loop {
            if self.at_character('.') {
                let next_is_name = self
                    .tokens
                    .get(self.index + 1)
                    .map(|t| t.is_identifier())
                    .unwrap_or(false);
                if next_is_name {
                    self.advance();
                    self.advance();
                    continue;
                }
                break;
            }
            if self.at_character('<') {
                self.skip_balanced_angles()?;
                continue;
            }
            if self.at_character('[') {
                let next_closes = self
                    .tokens
                    .get(self.index + 1)
                    .map(|t| t.is_character(']'))
                    .unwrap_or(false);
                if next_closes {
                    self.advance();
                    self.advance();
                    continue;
                }
                break;
            }
            if self.at_character('?') {
                self.advance();
                continue;
            }
            break;
        }
        Ok(self.raw_slice(start, self.index))
    }

    /// Capture raw expression text up to an unnested stop character.
    /// Angle brackets are tracked separately from the other bracket kinds:
    /// a `>` with no pending `<` is a comparison operator, not a close.
    fn capture_expression(&mut self, stops: &[char]) -> Result<String> {
        let start = self.index;
        let mut depth = 0i32;
        let mut angle_depth = 0usize;
        while let Some(token) = self.peek() {
            if depth == 0 && angle_depth == 0 && stops.iter().any(|&s| token.is_character(s)) {
                break;
            }
            if token.is_character('(') || token.is_character('[') || token.is_character('{') {
                depth += 1;
            } else if token.is_character(')') || token.is_character(']') || token.is_character('}')
            {
                depth -= 1;
            } else if token.is_character('<') {
                angle_depth += 1;
            } else if token.is_character('>') {
                angle_depth = angle_depth.saturating_sub(1);
            }
            self.advance();
        }
        if self.index == start {
            return Err(TranslateError::parse("expected expression"));
        }
        Ok(self.raw_slice(start, self.index))
    }

    // ----- skipping -----

    fn skip_to_semicolon(&mut self) {
        while let Some(token) = self.peek() {
            let done = token.is_character(';');
            self.advance();
            if done {
                return;
            }
        }
    }

    /// Skip a method or constructor body: `{ ... }`, `=> expr;`, or a bare
    /// `;` for abstract declarations.
    fn skip_body(&mut self) -> Result<()> {
        if self.at_character(';') {
            self.advance();
            return Ok(());
        }
        if self.at_character('=') {
            self.skip_to_semicolon();
            return Ok(());
        }
        self.skip_balanced('{', '}')
    }

    fn skip_balanced(&mut self, open: char, close: char) -> Result<()> {
        if !self.at_character(open) {
            return Err(TranslateError::parse(format!(
                "expected '{}', found {}",
                open,
                self.describe_current()
            )));
        }
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            if token.is_character(open) {
                depth += 1;
            } else if token.is_character(close) {
                depth -= 1;
                if depth == 0 {
                    self.advance();
                    return Ok(());
                }
            }
            self.advance();
        }
        Err(TranslateError::parse(format!(
            "unbalanced '{}...{}'",
            open, close
        )))
    }

    fn skip_balanced_angles(&mut self) -> Result<()> {
        self.skip_balanced('<', '>')
    }

    /// Recovery for member-position tokens that do not start a declaration:
    /// drop everything through the next `;` or balanced `{ }`.
    fn skip_unrecognized(&mut self) -> Result<()> {
        while let Some(token) = self.peek() {
            if token.is_character(';') {
                self.advance();
                return Ok(());
            }
            if token.is_character('{') {
                return self.skip_balanced('{', '}');
            }
            if token.is_character('}') {
                return Ok(());
            }
            self.advance();
        }
        Ok(())
    }
}

fn take_doc(pending: &mut Vec<String>) -> Option<String> {
    if pending.is_empty() {
        None
    } else {
        let doc = pending.join("\n");
        pending.clear();
        Some(doc)
    }
}
