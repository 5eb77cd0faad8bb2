use crate::token::{BinaryOperator, UnaryOperator};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Binary(Binary),
    Unary(Unary),
    Literal(Literal),
    Identifier(Identifier),
    Group(Group),
    Call(Call),
    MemberAccess(MemberAccess),
    Sequence(Sequence),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub lhs: Box<Expression>,
    pub operator: BinaryOperator,
    pub rhs: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    pub operator: UnaryOperator,
    pub rhs: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    Float,
    String,
    Boolean,
}

impl LiteralKind {
    pub fn label(&self) -> &'static str {
        match self {
            LiteralKind::Number => "number",
            LiteralKind::Float => "float",
            LiteralKind::String => "string",
            LiteralKind::Boolean => "bool",
        }
    }
}

/// Literal source text, kept verbatim. String literals keep their quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub text: String,
    pub kind: LiteralKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub inner: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: String,
    pub args: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberAccess {
    pub target: Box<Expression>,
    pub member: Box<Expression>,
}

/// Comma-joined expressions, nested to the right: `a, b, c` is
/// `Sequence(a, Sequence(b, c))`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    pub head: Box<Expression>,
    pub tail: Box<Expression>,
}

impl Expression {
    /// Depth-first, left-to-right search for the first literal in the tree.
    pub fn first_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Literal(l) => Some(l),
            Expression::Identifier(_) => None,
            Expression::Binary(b) => b.lhs.first_literal().or_else(|| b.rhs.first_literal()),
            Expression::Unary(u) => u.rhs.first_literal(),
            Expression::Group(g) => g.inner.first_literal(),
            Expression::Call(c) => c.args.iter().find_map(|a| a.first_literal()),
            Expression::MemberAccess(m) => m
                .target
                .first_literal()
                .or_else(|| m.member.first_literal()),
            Expression::Sequence(s) => s.head.first_literal().or_else(|| s.tail.first_literal()),
        }
    }
}
