//! Character constants and predicates used by the declaration lexer

pub const EOF: char = '\0';
pub const TAB: char = '\t';
pub const NEWLINE: char = '\n';
pub const RETURN: char = '\r';
pub const SPACE: char = ' ';

pub const DQ: char = '"';
pub const SQ: char = '\'';
pub const LPAREN: char = '(';
pub const RPAREN: char = ')';
pub const COMMA: char = ',';
pub const SLASH: char = '/';
pub const COLON: char = ':';
pub const SEMICOLON: char = ';';
pub const LT: char = '<';
pub const EQ: char = '=';
pub const GT: char = '>';
pub const STAR: char = '*';
pub const LBRACKET: char = '[';
pub const RBRACKET: char = ']';
pub const BACKSLASH: char = '\\';
pub const UNDERSCORE: char = '_';
pub const LBRACE: char = '{';
pub const RBRACE: char = '}';

pub fn is_whitespace(code: char) -> bool {
    code == SPACE || code == TAB || code == NEWLINE || code == RETURN || code == '\x0C'
}

pub fn is_digit(code: char) -> bool {
    code.is_ascii_digit()
}

pub fn is_identifier_start(code: char) -> bool {
    code.is_ascii_alphabetic() || code == UNDERSCORE || code == '@'
}

pub fn is_identifier_part(code: char) -> bool {
    code.is_ascii_alphanumeric() || code == UNDERSCORE
}
