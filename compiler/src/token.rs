use std::fmt::Display;

use crate::{expr::LiteralKind, pos::TokenMetadata};

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum LexemeKind {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,

    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    Bang,
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Xand,
    Xnor,
    Xnand,

    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,

    Number,
    Float,
    String,
    True,
    False,

    Identifier,

    Const,
    Val,
    If,
    Else,
    ElseIf,
    Interface,
    Struct,
    Of,
    Return,

    Comma,
    Dot,
    Semicolon,
    Colon,
    Assign,

    Lambda,
    Macro,

    Unknown,
    End,
}

impl LexemeKind {
    /// Keyword table lookup. Case-sensitive, exact match only.
    pub fn keyword(text: &str) -> Option<LexemeKind> {
        Some(match text {
            "const" => LexemeKind::Const,
            "val" => LexemeKind::Val,
            "if" => LexemeKind::If,
            "else" => LexemeKind::Else,
            "elseif" => LexemeKind::ElseIf,
            "interface" => LexemeKind::Interface,
            "struct" => LexemeKind::Struct,
            "of" => LexemeKind::Of,
            "return" => LexemeKind::Return,
            "true" => LexemeKind::True,
            "false" => LexemeKind::False,
            "and" => LexemeKind::And,
            "or" => LexemeKind::Or,
            "nand" => LexemeKind::Nand,
            "nor" => LexemeKind::Nor,
            "xor" => LexemeKind::Xor,
            "xand" => LexemeKind::Xand,
            "xnor" => LexemeKind::Xnor,
            "xnand" => LexemeKind::Xnand,
            _ => return None,
        })
    }
}

impl Display for LexemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LexemeKind::Plus => "'+'",
            LexemeKind::Minus => "'-'",
            LexemeKind::Multiply => "'*'",
            LexemeKind::Divide => "'/'",
            LexemeKind::Modulo => "'%'",
            LexemeKind::Equal => "'=='",
            LexemeKind::NotEqual => "'!='",
            LexemeKind::Less => "'<'",
            LexemeKind::LessEqual => "'<='",
            LexemeKind::Greater => "'>'",
            LexemeKind::GreaterEqual => "'>='",
            LexemeKind::Bang => "'!'",
            LexemeKind::And => "'and'",
            LexemeKind::Or => "'or'",
            LexemeKind::Nand => "'nand'",
            LexemeKind::Nor => "'nor'",
            LexemeKind::Xor => "'xor'",
            LexemeKind::Xand => "'xand'",
            LexemeKind::Xnor => "'xnor'",
            LexemeKind::Xnand => "'xnand'",
            LexemeKind::LeftParen => "'('",
            LexemeKind::RightParen => "')'",
            LexemeKind::LeftBracket => "'['",
            LexemeKind::RightBracket => "']'",
            LexemeKind::LeftBrace => "'{'",
            LexemeKind::RightBrace => "'}'",
            LexemeKind::Number => "number",
            LexemeKind::Float => "float",
            LexemeKind::String => "string",
            LexemeKind::True => "'true'",
            LexemeKind::False => "'false'",
            LexemeKind::Identifier => "identifier",
            LexemeKind::Const => "'const'",
            LexemeKind::Val => "'val'",
            LexemeKind::If => "'if'",
            LexemeKind::Else => "'else'",
            LexemeKind::ElseIf => "'elseif'",
            LexemeKind::Interface => "'interface'",
            LexemeKind::Struct => "'struct'",
            LexemeKind::Of => "'of'",
            LexemeKind::Return => "'return'",
            LexemeKind::Comma => "','",
            LexemeKind::Dot => "'.'",
            LexemeKind::Semicolon => "';'",
            LexemeKind::Colon => "':'",
            LexemeKind::Assign => "'='",
            LexemeKind::Lambda => "'=>'",
            LexemeKind::Macro => "'$$'",
            LexemeKind::Unknown => "unknown character",
            LexemeKind::End => "end of input",
        };

        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub text: String,
    pub kind: LexemeKind,
    pub pos: TokenMetadata,
}

impl Lexeme {
    pub fn new(text: impl Into<String>, kind: LexemeKind, pos: TokenMetadata) -> Lexeme {
        Lexeme {
            text: text.into(),
            kind,
            pos,
        }
    }

    pub const fn end(pos: TokenMetadata) -> Lexeme {
        Lexeme {
            text: String::new(),
            kind: LexemeKind::End,
            pos,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Xand,
    Xnor,
    Xnand,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOperator {
    Not,
    Negate,
}

impl BinaryOperator {
    pub fn label(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "ADD",
            BinaryOperator::Subtract => "SUBTRACT",
            BinaryOperator::Multiply => "MULTIPLY",
            BinaryOperator::Divide => "DIVIDE",
            BinaryOperator::Modulo => "MODULO",
            BinaryOperator::Equal => "EQUALS",
            BinaryOperator::NotEqual => "NOT EQUALS",
            BinaryOperator::Less => "LESS THAN",
            BinaryOperator::LessEqual => "LESS EQUAL",
            BinaryOperator::Greater => "GREATER THAN",
            BinaryOperator::GreaterEqual => "GREATER EQUAL",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
            BinaryOperator::Nand => "NAND",
            BinaryOperator::Nor => "NOR",
            BinaryOperator::Xor => "XOR",
            BinaryOperator::Xand => "XAND",
            BinaryOperator::Xnor => "XNOR",
            BinaryOperator::Xnand => "XNAND",
        }
    }
}

impl UnaryOperator {
    pub fn label(&self) -> &'static str {
        match self {
            UnaryOperator::Not => "NOT",
            UnaryOperator::Negate => "NEGATE",
        }
    }
}

impl TryFrom<LexemeKind> for LiteralKind {
    type Error = String;

    fn try_from(kind: LexemeKind) -> Result<Self, Self::Error> {
        match kind {
            LexemeKind::Number => Ok(LiteralKind::Number),
            LexemeKind::Float => Ok(LiteralKind::Float),
            LexemeKind::String => Ok(LiteralKind::String),
            LexemeKind::True | LexemeKind::False => Ok(LiteralKind::Boolean),
            _ => Err("Expected a valid literal".to_owned()),
        }
    }
}
