//! C# declaration syntax: lexer, declaration tree, and parser

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenType};
pub use parser::Parser;
