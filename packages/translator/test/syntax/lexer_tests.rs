/**
 * Declaration Lexer Tests
 *
 * Token-level coverage for the C# declaration lexer
 */

#[cfg(test)]
mod tests {
    use cs2ts::syntax::lexer::{Lexer, Token, TokenType};

    fn lex(text: &str) -> Vec<Token> {
        Lexer::new().tokenize(text)
    }

    fn expect_identifier(token: &Token, text: &str) {
        assert_eq!(
            token.token_type,
            TokenType::Identifier,
            "expected identifier token for '{}'",
            text
        );
        assert_eq!(token.str_value, text);
    }

    fn expect_keyword(token: &Token, text: &str) {
        assert!(token.is_keyword(text), "expected keyword token '{}'", text);
    }

    fn expect_character(token: &Token, code: char) {
        assert!(
            token.is_character(code),
            "expected character token '{}', got '{}'",
            code,
            token.str_value
        );
    }

    #[test]
    fn should_tokenize_a_simple_identifier() {
        let tokens = lex("amount");
        assert_eq!(tokens.len(), 1);
        expect_identifier(&tokens[0], "amount");
    }

    #[test]
    fn should_tokenize_declaration_keywords() {
        let tokens = lex("public class private");
        expect_keyword(&tokens[0], "public");
        expect_keyword(&tokens[1], "class");
        expect_keyword(&tokens[2], "private");
    }

    #[test]
    fn should_keep_token_spans() {
        let tokens = lex("int x;");
        assert_eq!((tokens[0].index, tokens[0].end), (0, 3));
        assert_eq!((tokens[1].index, tokens[1].end), (4, 5));
        assert_eq!((tokens[2].index, tokens[2].end), (5, 6));
    }

    #[test]
    fn should_tokenize_underscore_identifiers() {
        let tokens = lex("_amountSubject");
        expect_identifier(&tokens[0], "_amountSubject");
    }

    #[test]
    fn should_tokenize_punctuation() {
        let tokens = lex("<int>[]");
        expect_character(&tokens[0], '<');
        expect_keyword(&tokens[1], "int");
        expect_character(&tokens[2], '>');
        expect_character(&tokens[3], '[');
        expect_character(&tokens[4], ']');
    }

    #[test]
    fn should_emit_doc_comment_tokens_with_marker_kept() {
        let tokens = lex("    /// <summary>Hi</summary>\nint x;");
        assert!(tokens[0].is_doc_comment());
        assert_eq!(tokens[0].str_value, "/// <summary>Hi</summary>");
        expect_keyword(&tokens[1], "int");
    }

    #[test]
    fn should_skip_regular_line_comments() {
        let tokens = lex("// nothing to see\nint x;");
        expect_keyword(&tokens[0], "int");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn should_skip_block_comments() {
        let tokens = lex("/* a\n b */ int x;");
        expect_keyword(&tokens[0], "int");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn should_tokenize_string_literals_verbatim() {
        let tokens = lex(r#"x = "a \" b";"#);
        assert_eq!(tokens[2].token_type, TokenType::String);
        assert_eq!(tokens[2].str_value, r#""a \" b""#);
    }

    #[test]
    fn should_tokenize_numbers_with_suffixes() {
        let tokens = lex("x = 3.5f;");
        assert_eq!(tokens[2].token_type, TokenType::Number);
        assert_eq!(tokens[2].str_value, "3.5f");
    }

    #[test]
    fn should_report_unterminated_strings_as_error_tokens() {
        let tokens = lex(r#""oops"#);
        assert!(tokens[0].is_error());
    }
}
