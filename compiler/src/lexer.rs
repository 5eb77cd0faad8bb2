use tracing::{trace, warn};

use crate::{
    pos::{BytePos, TokenMetadata},
    scanner::Scanner,
    token::{Lexeme, LexemeKind},
};

pub struct Lexer<'a> {
    buf: &'a str,
    scanner: Scanner<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(buf: &'a str) -> Lexer<'a> {
        Lexer {
            buf,
            scanner: Scanner::new(buf),
        }
    }

    /// Scans the whole buffer. The result always ends with an `End` lexeme.
    pub fn tokenize(&mut self) -> Vec<Lexeme> {
        let mut lexemes: Vec<Lexeme> = Vec::new();

        loop {
            let start = self.scanner.pos;
            let line = self.scanner.line;
            let column = self.scanner.column;

            let c = match self.scanner.next() {
                Some(c) => c,
                None => break,
            };

            if let Some(kind) = self.match_lexeme(c, start) {
                let end = self.scanner.pos;
                let text = &self.buf[start.0 as usize..end.0 as usize];

                if kind == LexemeKind::Unknown {
                    warn!(text, line, column, "unknown character");
                } else {
                    trace!(?kind, text, line, column, "lexeme");
                }

                lexemes.push(Lexeme::new(
                    text,
                    kind,
                    TokenMetadata::new(start, BytePos(end.0 - 1), line, column),
                ));
            }
        }

        let end = self.scanner.pos;
        lexemes.push(Lexeme::end(TokenMetadata::new(
            end,
            end,
            self.scanner.line,
            self.scanner.column,
        )));

        lexemes
    }

    fn match_lexeme(&mut self, c: char, start: BytePos) -> Option<LexemeKind> {
        let kind = match c {
            '+' => LexemeKind::Plus,
            '-' => LexemeKind::Minus,
            '*' => LexemeKind::Multiply,
            '%' => LexemeKind::Modulo,
            '(' => LexemeKind::LeftParen,
            ')' => LexemeKind::RightParen,
            '[' => LexemeKind::LeftBracket,
            ']' => LexemeKind::RightBracket,
            '{' => LexemeKind::LeftBrace,
            '}' => LexemeKind::RightBrace,
            ',' => LexemeKind::Comma,
            '.' => LexemeKind::Dot,
            ';' => LexemeKind::Semicolon,
            ':' => LexemeKind::Colon,
            '/' => {
                if self.scanner.consume_if(|c| c == '/') {
                    self.scanner.skip_while(|c| c != '\n');
                    return None;
                }
                LexemeKind::Divide
            }
            '=' => {
                if self.scanner.consume_if(|c| c == '>') {
                    LexemeKind::Lambda
                } else if self.scanner.consume_if(|c| c == '=') {
                    LexemeKind::Equal
                } else {
                    LexemeKind::Assign
                }
            }
            '!' => self.either('=', LexemeKind::NotEqual, LexemeKind::Bang),
            '<' => self.either('=', LexemeKind::LessEqual, LexemeKind::Less),
            '>' => self.either('=', LexemeKind::GreaterEqual, LexemeKind::Greater),
            '$' => self.either('$', LexemeKind::Macro, LexemeKind::Unknown),
            '"' => self.tokenize_string(),
            c if c.is_whitespace() => {
                self.scanner.skip_while(|c| c.is_whitespace());
                return None;
            }
            c if c.is_ascii_digit() => self.tokenize_number(),
            c if c.is_alphabetic() => self.tokenize_ident(start),
            _ => LexemeKind::Unknown,
        };

        Some(kind)
    }

    fn either(&mut self, next: char, matched: LexemeKind, single: LexemeKind) -> LexemeKind {
        if self.scanner.consume_if(|c| c == next) {
            matched
        } else {
            single
        }
    }

    /// The opening quote has been consumed. No escape sequences.
    fn tokenize_string(&mut self) -> LexemeKind {
        self.scanner.skip_while(|c| c != '"');

        if self.scanner.consume_if(|c| c == '"') {
            LexemeKind::String
        } else {
            LexemeKind::Unknown
        }
    }

    /// Commas are swallowed as digit separators without validation. The first
    /// decimal point makes the literal a float; later points are plain text.
    fn tokenize_number(&mut self) -> LexemeKind {
        let mut is_float = false;

        while let Some(c) = self.scanner.peek() {
            match c {
                '.' => is_float = true,
                ',' => {}
                c if c.is_ascii_digit() => {}
                _ => break,
            }
            self.scanner.next();
        }

        if is_float {
            LexemeKind::Float
        } else {
            LexemeKind::Number
        }
    }

    fn tokenize_ident(&mut self, start: BytePos) -> LexemeKind {
        self.scanner.skip_while(|c| c.is_alphanumeric());
        let word = &self.buf[start.0 as usize..self.scanner.pos.0 as usize];

        LexemeKind::keyword(word).unwrap_or(LexemeKind::Identifier)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Lexeme, LexemeKind};

    use super::Lexer;

    fn get_kinds(str: &str) -> Vec<LexemeKind> {
        Lexer::new(str).tokenize().iter().map(|l| l.kind).collect()
    }

    fn get_lexemes(str: &str) -> Vec<Lexeme> {
        Lexer::new(str).tokenize()
    }

    #[test]
    fn test_lexer() {
        assert_eq!(get_kinds("("), vec![LexemeKind::LeftParen, LexemeKind::End]);
        assert_eq!(get_kinds(")"), vec![LexemeKind::RightParen, LexemeKind::End]);
        assert_eq!(get_kinds("["), vec![LexemeKind::LeftBracket, LexemeKind::End]);
        assert_eq!(get_kinds("]"), vec![LexemeKind::RightBracket, LexemeKind::End]);
        assert_eq!(get_kinds("{"), vec![LexemeKind::LeftBrace, LexemeKind::End]);
        assert_eq!(get_kinds("}"), vec![LexemeKind::RightBrace, LexemeKind::End]);
        assert_eq!(get_kinds(","), vec![LexemeKind::Comma, LexemeKind::End]);
        assert_eq!(get_kinds("."), vec![LexemeKind::Dot, LexemeKind::End]);
        assert_eq!(get_kinds(";"), vec![LexemeKind::Semicolon, LexemeKind::End]);
        assert_eq!(get_kinds(":"), vec![LexemeKind::Colon, LexemeKind::End]);
        assert_eq!(get_kinds("+"), vec![LexemeKind::Plus, LexemeKind::End]);
        assert_eq!(get_kinds("-"), vec![LexemeKind::Minus, LexemeKind::End]);
        assert_eq!(get_kinds("*"), vec![LexemeKind::Multiply, LexemeKind::End]);
        assert_eq!(get_kinds("/"), vec![LexemeKind::Divide, LexemeKind::End]);
        assert_eq!(get_kinds("%"), vec![LexemeKind::Modulo, LexemeKind::End]);
        assert_eq!(get_kinds("!"), vec![LexemeKind::Bang, LexemeKind::End]);
        assert_eq!(get_kinds("!="), vec![LexemeKind::NotEqual, LexemeKind::End]);
        assert_eq!(get_kinds("="), vec![LexemeKind::Assign, LexemeKind::End]);
        assert_eq!(get_kinds("=="), vec![LexemeKind::Equal, LexemeKind::End]);
        assert_eq!(get_kinds("=>"), vec![LexemeKind::Lambda, LexemeKind::End]);
        assert_eq!(get_kinds("<"), vec![LexemeKind::Less, LexemeKind::End]);
        assert_eq!(get_kinds("<="), vec![LexemeKind::LessEqual, LexemeKind::End]);
        assert_eq!(get_kinds(">"), vec![LexemeKind::Greater, LexemeKind::End]);
        assert_eq!(get_kinds(">="), vec![LexemeKind::GreaterEqual, LexemeKind::End]);
        assert_eq!(get_kinds("$$"), vec![LexemeKind::Macro, LexemeKind::End]);
        assert_eq!(get_kinds("// this is just a comment"), vec![LexemeKind::End]);
        assert_eq!(get_kinds(" "), vec![LexemeKind::End]);
        assert_eq!(get_kinds("\r"), vec![LexemeKind::End]);
        assert_eq!(get_kinds("\t"), vec![LexemeKind::End]);
        assert_eq!(get_kinds("\n"), vec![LexemeKind::End]);
        assert_eq!(get_kinds(""), vec![LexemeKind::End]);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(
            get_kinds("1 + 2 * 3 / (145 - 23)"),
            vec![
                LexemeKind::Number,
                LexemeKind::Plus,
                LexemeKind::Number,
                LexemeKind::Multiply,
                LexemeKind::Number,
                LexemeKind::Divide,
                LexemeKind::LeftParen,
                LexemeKind::Number,
                LexemeKind::Minus,
                LexemeKind::Number,
                LexemeKind::RightParen,
                LexemeKind::End,
            ]
        );
    }

    #[test]
    fn test_number_with_separators() {
        let lexemes = get_lexemes("1,200,300,400");

        assert_eq!(lexemes.len(), 2);
        assert_eq!(lexemes[0].kind, LexemeKind::Number);
        assert_eq!(lexemes[0].text, "1,200,300,400");
        assert_eq!(lexemes[1].kind, LexemeKind::End);
    }

    #[test]
    fn test_float() {
        let lexemes = get_lexemes("1.200300400");

        assert_eq!(lexemes.len(), 2);
        assert_eq!(lexemes[0].kind, LexemeKind::Float);
        assert_eq!(lexemes[0].text, "1.200300400");
    }

    #[test]
    fn test_float_second_point_is_text() {
        let lexemes = get_lexemes("1.2.3");

        assert_eq!(lexemes.len(), 2);
        assert_eq!(lexemes[0].kind, LexemeKind::Float);
        assert_eq!(lexemes[0].text, "1.2.3");
    }

    #[test]
    fn test_number_trailing_comma_is_swallowed() {
        let lexemes = get_lexemes("f(1, 2)");

        assert_eq!(lexemes[2].kind, LexemeKind::Number);
        assert_eq!(lexemes[2].text, "1,");
        assert_eq!(lexemes[3].kind, LexemeKind::Number);
        assert_eq!(lexemes[3].text, "2");
    }

    #[test]
    fn test_string_keeps_quotes() {
        let lexemes = get_lexemes("\"hello // world\"");

        assert_eq!(lexemes.len(), 2);
        assert_eq!(lexemes[0].kind, LexemeKind::String);
        assert_eq!(lexemes[0].text, "\"hello // world\"");
    }

    #[test]
    fn test_string_spans_lines() {
        let lexemes = get_lexemes("\"hello\n\" x");

        assert_eq!(lexemes[0].kind, LexemeKind::String);
        assert_eq!(lexemes[0].text, "\"hello\n\"");
        assert_eq!(lexemes[1].kind, LexemeKind::Identifier);
        assert_eq!(lexemes[1].pos.line, 2);
    }

    #[test]
    fn test_unterminated_string_is_unknown() {
        let lexemes = get_lexemes("\"hello");

        assert_eq!(lexemes.len(), 2);
        assert_eq!(lexemes[0].kind, LexemeKind::Unknown);
        assert_eq!(lexemes[0].text, "\"hello");
        assert_eq!(lexemes[1].kind, LexemeKind::End);
    }

    #[test]
    fn test_unknown_char_does_not_abort() {
        let lexemes = get_lexemes("a | b");

        assert_eq!(
            lexemes.iter().map(|l| l.kind).collect::<Vec<_>>(),
            vec![
                LexemeKind::Identifier,
                LexemeKind::Unknown,
                LexemeKind::Identifier,
                LexemeKind::End,
            ]
        );
        assert_eq!(lexemes[1].text, "|");
    }

    #[test]
    fn test_single_dollar_is_unknown() {
        let lexemes = get_lexemes("$x");

        assert_eq!(lexemes[0].kind, LexemeKind::Unknown);
        assert_eq!(lexemes[0].text, "$");
        assert_eq!(lexemes[1].kind, LexemeKind::Identifier);
    }

    #[test]
    fn test_unknown_multibyte_char() {
        let lexemes = get_lexemes("🗿1");

        assert_eq!(lexemes[0].kind, LexemeKind::Unknown);
        assert_eq!(lexemes[0].text, "🗿");
        assert_eq!(lexemes[0].pos.start_inclusive.0, 0);
        assert_eq!(lexemes[0].pos.end_inclusive.0, 3);
        assert_eq!(lexemes[1].kind, LexemeKind::Number);
        assert_eq!(lexemes[1].pos.column, 2);
    }

    #[test]
    fn test_identifiers_and_keywords() {
        assert_eq!(
            get_kinds("val const if else elseif interface struct of return"),
            vec![
                LexemeKind::Val,
                LexemeKind::Const,
                LexemeKind::If,
                LexemeKind::Else,
                LexemeKind::ElseIf,
                LexemeKind::Interface,
                LexemeKind::Struct,
                LexemeKind::Of,
                LexemeKind::Return,
                LexemeKind::End,
            ]
        );
        assert_eq!(
            get_kinds("and or nand nor xor xand xnor xnand"),
            vec![
                LexemeKind::And,
                LexemeKind::Or,
                LexemeKind::Nand,
                LexemeKind::Nor,
                LexemeKind::Xor,
                LexemeKind::Xand,
                LexemeKind::Xnor,
                LexemeKind::Xnand,
                LexemeKind::End,
            ]
        );
        assert_eq!(
            get_kinds("true false True a20 valx"),
            vec![
                LexemeKind::True,
                LexemeKind::False,
                LexemeKind::Identifier,
                LexemeKind::Identifier,
                LexemeKind::Identifier,
                LexemeKind::End,
            ]
        );
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        assert_eq!(
            get_kinds("a // b c\nd"),
            vec![
                LexemeKind::Identifier,
                LexemeKind::Identifier,
                LexemeKind::End
            ]
        );
    }

    #[test]
    fn test_function_literal() {
        assert_eq!(
            get_kinds("val f = (a) => { return a; };"),
            vec![
                LexemeKind::Val,
                LexemeKind::Identifier,
                LexemeKind::Assign,
                LexemeKind::LeftParen,
                LexemeKind::Identifier,
                LexemeKind::RightParen,
                LexemeKind::Lambda,
                LexemeKind::LeftBrace,
                LexemeKind::Return,
                LexemeKind::Identifier,
                LexemeKind::Semicolon,
                LexemeKind::RightBrace,
                LexemeKind::Semicolon,
                LexemeKind::End,
            ]
        );
    }

    #[test]
    fn test_position() {
        let lexemes = Lexer::new("hello\nhello\nhello\n\t\t9\nand\n").tokenize();

        let lexeme = &lexemes[0];
        assert_eq!(lexeme.pos.start_inclusive.0, 0);
        assert_eq!(lexeme.pos.end_inclusive.0, 4);
        assert_eq!(lexeme.pos.line, 1);
        assert_eq!(lexeme.pos.column, 1);

        let lexeme = &lexemes[1];
        assert_eq!(lexeme.pos.start_inclusive.0, 6);
        assert_eq!(lexeme.pos.end_inclusive.0, 10);
        assert_eq!(lexeme.pos.line, 2);

        let lexeme = &lexemes[2];
        assert_eq!(lexeme.pos.start_inclusive.0, 12);
        assert_eq!(lexeme.pos.end_inclusive.0, 16);
        assert_eq!(lexeme.pos.line, 3);

        let lexeme = &lexemes[3];
        assert_eq!(lexeme.pos.start_inclusive.0, 20);
        assert_eq!(lexeme.pos.end_inclusive.0, 20);
        assert_eq!(lexeme.pos.line, 4);
        assert_eq!(lexeme.pos.column, 3);

        let lexeme = &lexemes[4];
        assert_eq!(lexeme.pos.start_inclusive.0, 22);
        assert_eq!(lexeme.pos.end_inclusive.0, 24);
        assert_eq!(lexeme.pos.line, 5);

        let lexeme = &lexemes[5];
        assert_eq!(lexeme.kind, LexemeKind::End);
        assert_eq!(lexeme.pos.line, 6);
        assert_eq!(lexeme.pos.column, 1);
    }
}
