//! C# declaration lexer
//!
//! Tokenizes C# class-declaration source into tokens for the declaration
//! parser. Bodies and expressions are not interpreted here; every token
//! carries its byte span so the parser can capture raw source slices.

use crate::chars;
use serde::{Deserialize, Serialize};

/// Token types in C# declaration source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TokenType {
    Character = 0,
    Identifier = 1,
    Keyword = 2,
    String = 3,
    Number = 4,
    DocComment = 5,
    Error = 6,
}

/// Token representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub index: usize,
    pub end: usize,
    pub token_type: TokenType,
    pub str_value: String,
}

impl Token {
    pub fn new(index: usize, end: usize, token_type: TokenType, str_value: String) -> Self {
        Token {
            index,
            end,
            token_type,
            str_value,
        }
    }

    pub fn is_character(&self, code: char) -> bool {
        self.token_type == TokenType::Character && self.str_value.chars().next() == Some(code)
    }

    pub fn is_identifier(&self) -> bool {
        self.token_type == TokenType::Identifier
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.token_type == TokenType::Keyword && self.str_value == keyword
    }

    pub fn is_any_keyword(&self) -> bool {
        self.token_type == TokenType::Keyword
    }

    pub fn is_modifier(&self) -> bool {
        self.token_type == TokenType::Keyword && MODIFIERS.contains(&self.str_value.as_str())
    }

    pub fn is_doc_comment(&self) -> bool {
        self.token_type == TokenType::DocComment
    }

    pub fn is_error(&self) -> bool {
        self.token_type == TokenType::Error
    }

    /// True for tokens that can start a type expression.
    pub fn is_type_start(&self) -> bool {
        self.is_identifier() || self.is_keyword("void")
    }
}

/// Keywords recognized in declaration position
const KEYWORDS: &[&str] = &[
    "using", "namespace", "class", "public", "private", "protected", "internal", "static",
    "readonly", "const", "override", "virtual", "abstract", "sealed", "partial", "async", "event",
    "get", "set", "base", "this", "new", "void", "null", "true", "false",
];

/// Member access / declaration modifiers. `event` is deliberately not a
/// modifier: an event declaration is not a field and is skipped whole.
const MODIFIERS: &[&str] = &[
    "public", "private", "protected", "internal", "static", "readonly", "const", "override",
    "virtual", "abstract", "sealed", "async",
];

/// C# declaration lexer
pub struct Lexer;

impl Lexer {
    pub fn new() -> Self {
        Lexer
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        Scanner::new(text).scan()
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Scanner for tokenizing input
struct Scanner {
    input: String,
    length: usize,
    index: usize,
    peek: char,
    tokens: Vec<Token>,
}

impl Scanner {
    fn new(input: &str) -> Self {
        let peek = input.chars().next().unwrap_or(chars::EOF);
        Scanner {
            input: input.to_string(),
            length: input.len(),
            index: 0,
            peek,
            tokens: Vec::new(),
        }
    }

    fn scan(mut self) -> Vec<Token> {
        while let Some(token) = self.scan_token() {
            self.tokens.push(token);
        }
        self.tokens
    }

    fn advance(&mut self) {
        self.index += self.peek.len_utf8();
        self.peek = if self.index < self.length {
            self.input[self.index..].chars().next().unwrap_or(chars::EOF)
        } else {
            chars::EOF
        };
    }

    fn peek_ahead(&self, offset: usize) -> char {
        self.input[self.index..]
            .chars()
            .nth(offset)
            .unwrap_or(chars::EOF)
    }

    fn scan_token(&mut self) -> Option<Token> {
        loop {
            // Skip whitespace
            while self.index < self.length && chars::is_whitespace(self.peek) {
                self.advance();
            }

            if self.index >= self.length {
                return None;
            }

            if self.peek == chars::SLASH {
                match self.peek_ahead(1) {
                    chars::SLASH => {
                        if self.peek_ahead(2) == chars::SLASH {
                            return Some(self.scan_doc_comment());
                        }
                        self.skip_line_comment();
                        continue;
                    }
                    chars::STAR => {
                        self.skip_block_comment();
                        continue;
                    }
                    _ => {}
                }
            }

            break;
        }

        let start = self.index;
        let ch = self.peek;

        if chars::is_identifier_start(ch) {
            return Some(self.scan_identifier());
        }

        if chars::is_digit(ch) {
            return Some(self.scan_number(start));
        }

        match ch {
            chars::DQ => Some(self.scan_string(start)),
            chars::SQ => Some(self.scan_char_literal(start)),
            _ => {
                self.advance();
                Some(Token::new(
                    start,
                    self.index,
                    TokenType::Character,
                    ch.to_string(),
                ))
            }
        }
    }

    /// A `///` doc line; the marker is kept so documentation blocks can be
    /// re-emitted verbatim.
    fn scan_doc_comment(&mut self) -> Token {
        let start = self.index;
        while self.index < self.length && self.peek != chars::NEWLINE {
            self.advance();
        }
        let text = self.input[start..self.index].trim_end().to_string();
        Token::new(start, self.index, TokenType::DocComment, text)
    }

    fn skip_line_comment(&mut self) {
        while self.index < self.length && self.peek != chars::NEWLINE {
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) {
        self.advance(); // consume /
        self.advance(); // consume *
        while self.index < self.length {
            if self.peek == chars::STAR && self.peek_ahead(1) == chars::SLASH {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.index;
        // '@' escapes a keyword into a plain identifier
        if self.peek == '@' {
            self.advance();
        }
        while self.index < self.length && chars::is_identifier_part(self.peek) {
            self.advance();
        }
        let text = &self.input[start..self.index];
        let token_type = if KEYWORDS.contains(&text) {
            TokenType::Keyword
        } else {
            TokenType::Identifier
        };
        Token::new(start, self.index, token_type, text.to_string())
    }

    fn scan_number(&mut self, start: usize) -> Token {
        while self.index < self.length
            && (chars::is_digit(self.peek)
                || self.peek == '.'
                || self.peek == 'x'
                || self.peek.is_ascii_hexdigit()
                || matches!(self.peek, 'f' | 'F' | 'd' | 'D' | 'm' | 'M' | 'l' | 'L' | 'u' | 'U'))
        {
            self.advance();
        }
        let text = self.input[start..self.index].to_string();
        Token::new(start, self.index, TokenType::Number, text)
    }

    fn scan_string(&mut self, start: usize) -> Token {
        self.advance(); // consume opening quote
        while self.index < self.length && self.peek != chars::DQ {
            if self.peek == chars::BACKSLASH {
                self.advance();
            }
            self.advance();
        }
        if self.index >= self.length {
            return Token::new(
                start,
                self.index,
                TokenType::Error,
                "Unterminated string literal".to_string(),
            );
        }
        self.advance(); // consume closing quote
        let text = self.input[start..self.index].to_string();
        Token::new(start, self.index, TokenType::String, text)
    }

    fn scan_char_literal(&mut self, start: usize) -> Token {
        self.advance(); // consume opening quote
        while self.index < self.length && self.peek != chars::SQ {
            if self.peek == chars::BACKSLASH {
                self.advance();
            }
            self.advance();
        }
        if self.index >= self.length {
            return Token::new(
                start,
                self.index,
                TokenType::Error,
                "Unterminated character literal".to_string(),
            );
        }
        self.advance(); // consume closing quote
        let text = self.input[start..self.index].to_string();
        Token::new(start, self.index, TokenType::String, text)
    }
}
