use crate::expr::Expression;

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Val,
    Const,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Block(Vec<Statement>),
    Expression(Expression),
    FunctionDecl(FunctionDecl),
    VarDecl(VarDecl),
    If(IfStatement),
    Return(Expression),
    StructDecl(StructDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub binding: Binding,
    pub name: String,
    pub params: Vec<String>,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub binding: Binding,
    pub name: String,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub body: Vec<Statement>,
}

/// Members are not parsed yet; only the name is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name: String,
}
