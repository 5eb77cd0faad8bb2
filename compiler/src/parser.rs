use tracing::{debug, trace};

use crate::{
    error::CompilerError,
    expr::{
        Binary, Call, Expression, Group, Identifier, Literal, LiteralKind, MemberAccess,
        Sequence, Unary,
    },
    pos::TokenMetadata,
    stmt::{Binding, FunctionDecl, IfStatement, Program, Statement, StructDecl, VarDecl},
    token::{BinaryOperator, Lexeme, LexemeKind, UnaryOperator},
};

static END_LEXEME: Lexeme = Lexeme::end(TokenMetadata::empty());

/// Bounds both recursion and the depth of the resulting tree.
const MAX_NESTING: usize = 128;

static OR_OPERATORS: [(LexemeKind, BinaryOperator); 4] = [
    (LexemeKind::Or, BinaryOperator::Or),
    (LexemeKind::Nor, BinaryOperator::Nor),
    (LexemeKind::Xor, BinaryOperator::Xor),
    (LexemeKind::Xnor, BinaryOperator::Xnor),
];
static AND_OPERATORS: [(LexemeKind, BinaryOperator); 4] = [
    (LexemeKind::And, BinaryOperator::And),
    (LexemeKind::Nand, BinaryOperator::Nand),
    (LexemeKind::Xand, BinaryOperator::Xand),
    (LexemeKind::Xnand, BinaryOperator::Xnand),
];
static EQUALITY_OPERATORS: [(LexemeKind, BinaryOperator); 2] = [
    (LexemeKind::Equal, BinaryOperator::Equal),
    (LexemeKind::NotEqual, BinaryOperator::NotEqual),
];
static COMPARISON_OPERATORS: [(LexemeKind, BinaryOperator); 4] = [
    (LexemeKind::LessEqual, BinaryOperator::LessEqual),
    (LexemeKind::GreaterEqual, BinaryOperator::GreaterEqual),
    (LexemeKind::Less, BinaryOperator::Less),
    (LexemeKind::Greater, BinaryOperator::Greater),
];
static TERM_OPERATORS: [(LexemeKind, BinaryOperator); 2] = [
    (LexemeKind::Plus, BinaryOperator::Add),
    (LexemeKind::Minus, BinaryOperator::Subtract),
];
static FACTOR_OPERATORS: [(LexemeKind, BinaryOperator); 3] = [
    (LexemeKind::Multiply, BinaryOperator::Multiply),
    (LexemeKind::Divide, BinaryOperator::Divide),
    (LexemeKind::Modulo, BinaryOperator::Modulo),
];
static UNARY_OPERATORS: [(LexemeKind, UnaryOperator); 2] = [
    (LexemeKind::Bang, UnaryOperator::Not),
    (LexemeKind::Minus, UnaryOperator::Negate),
];

type ParseFn = fn(&mut Parser) -> Result<Expression, CompilerError>;

pub struct Parser {
    lexemes: Vec<Lexeme>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    pub fn new(mut lexemes: Vec<Lexeme>) -> Parser {
        if lexemes.last().map(|l| l.kind) != Some(LexemeKind::End) {
            let pos = lexemes
                .last()
                .map(|l| l.pos)
                .unwrap_or(TokenMetadata::empty());
            lexemes.push(Lexeme::end(pos));
        }

        Parser {
            lexemes,
            cursor: 0,
            depth: 0,
        }
    }

    pub fn parse(&mut self) -> Result<Program, CompilerError> {
        let mut statements: Vec<Statement> = Vec::new();

        while !self.check(LexemeKind::End) {
            statements.push(self.parse_statement()?);
        }

        Ok(Program { statements })
    }

    fn peek(&self) -> &Lexeme {
        self.lexemes.get(self.cursor).unwrap_or(&END_LEXEME)
    }

    fn previous(&self) -> &Lexeme {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.lexemes.get(i))
            .unwrap_or(&END_LEXEME)
    }

    /// Moves past the current lexeme. The cursor never leaves the terminator.
    fn advance(&mut self) {
        if !self.check(LexemeKind::End) {
            self.cursor += 1;
        }
    }

    fn check(&self, kind: LexemeKind) -> bool {
        self.peek().kind == kind
    }

    fn accept(&mut self, kind: LexemeKind) -> bool {
        if self.check(kind) {
            trace!(%kind, "accepted");
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: LexemeKind) -> Result<&Lexeme, CompilerError> {
        if self.accept(kind) {
            return Ok(self.previous());
        }

        let found = self.peek();
        Err(CompilerError::UnexpectedSymbol {
            expected: kind,
            found: found.kind,
            text: found.text.clone(),
            pos: found.pos,
        })
    }

    /// Paired with `ascend` on success only; a failed parse is never resumed.
    fn descend(&mut self) -> Result<(), CompilerError> {
        if self.depth >= MAX_NESTING {
            return Err(CompilerError::NestingTooDeep {
                limit: MAX_NESTING,
                pos: self.peek().pos,
            });
        }

        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn accept_operator<T: Copy>(&mut self, operators: &[(LexemeKind, T)]) -> Option<T> {
        let kind = self.peek().kind;
        let (_, operator) = operators.iter().find(|(k, _)| *k == kind)?;
        self.accept(kind);

        Some(*operator)
    }

    fn parse_statement(&mut self) -> Result<Statement, CompilerError> {
        let line = self.peek().pos.line;
        self.descend()?;

        let statement = if self.accept(LexemeKind::Val) {
            self.parse_declaration(Binding::Val)
        } else if self.accept(LexemeKind::Const) {
            self.parse_declaration(Binding::Const)
        } else if self.accept(LexemeKind::If) {
            self.parse_if()
        } else if self.accept(LexemeKind::Return) {
            self.parse_return()
        } else if self.accept(LexemeKind::Struct) {
            self.parse_struct()
        } else {
            let expr = self.parse_expression()?;
            self.expect(LexemeKind::Semicolon)?;
            Ok(Statement::Expression(expr))
        }?;

        self.ascend();
        debug!(line, "parsed statement");
        Ok(statement)
    }

    /// `val`/`const` has been consumed. A `(` right after `=` commits to a
    /// function literal.
    fn parse_declaration(&mut self, binding: Binding) -> Result<Statement, CompilerError> {
        let name = self.expect(LexemeKind::Identifier)?.text.clone();
        self.expect(LexemeKind::Assign)?;

        if self.accept(LexemeKind::LeftParen) {
            return self.parse_function(binding, name);
        }

        let value = self.parse_expression()?;
        self.expect(LexemeKind::Semicolon)?;

        Ok(Statement::VarDecl(VarDecl {
            binding,
            name,
            value,
        }))
    }

    fn parse_function(&mut self, binding: Binding, name: String) -> Result<Statement, CompilerError> {
        let mut params: Vec<String> = Vec::new();

        if !self.check(LexemeKind::RightParen) {
            loop {
                params.push(self.expect(LexemeKind::Identifier)?.text.clone());
                if !self.accept(LexemeKind::Comma) {
                    break;
                }
            }
        }

        self.expect(LexemeKind::RightParen)?;
        self.expect(LexemeKind::Lambda)?;

        let body = if self.accept(LexemeKind::LeftBrace) {
            Statement::Block(self.parse_block()?)
        } else {
            // the body statement consumes its own `;` before the declaration's
            self.parse_statement()?
        };
        self.expect(LexemeKind::Semicolon)?;

        Ok(Statement::FunctionDecl(FunctionDecl {
            binding,
            name,
            params,
            body: Box::new(body),
        }))
    }

    /// `{` has been consumed; reads statements through the closing `}`.
    fn parse_block(&mut self) -> Result<Vec<Statement>, CompilerError> {
        let mut statements: Vec<Statement> = Vec::new();

        while !self.check(LexemeKind::RightBrace) && !self.check(LexemeKind::End) {
            statements.push(self.parse_statement()?);
        }
        self.expect(LexemeKind::RightBrace)?;

        Ok(statements)
    }

    fn parse_if(&mut self) -> Result<Statement, CompilerError> {
        self.expect(LexemeKind::LeftParen)?;
        let condition = self.parse_expression()?;
        self.expect(LexemeKind::RightParen)?;

        self.expect(LexemeKind::LeftBrace)?;
        let body = self.parse_block()?;

        Ok(Statement::If(IfStatement { condition, body }))
    }

    fn parse_return(&mut self) -> Result<Statement, CompilerError> {
        let value = self.parse_expression()?;
        self.expect(LexemeKind::Semicolon)?;

        Ok(Statement::Return(value))
    }

    fn parse_struct(&mut self) -> Result<Statement, CompilerError> {
        let name = self.expect(LexemeKind::Identifier)?.text.clone();
        self.expect(LexemeKind::LeftBrace)?;
        self.expect(LexemeKind::RightBrace)?;

        Ok(Statement::StructDecl(StructDecl { name }))
    }

    fn parse_expression(&mut self) -> Result<Expression, CompilerError> {
        let head = self.parse_or()?;

        if self.accept(LexemeKind::Comma) {
            self.descend()?;
            let tail = self.parse_expression()?;
            self.ascend();
            return Ok(Expression::Sequence(Sequence {
                head: Box::new(head),
                tail: Box::new(tail),
            }));
        }

        Ok(head)
    }

    fn parse_binary(
        &mut self,
        operators: &[(LexemeKind, BinaryOperator)],
        next: ParseFn,
    ) -> Result<Expression, CompilerError> {
        let depth = self.depth;
        let mut expr = next(self)?;

        // each fold deepens the left spine
        while let Some(operator) = self.accept_operator(operators) {
            self.descend()?;
            let rhs = next(self)?;
            expr = Expression::Binary(Binary {
                lhs: Box::new(expr),
                operator,
                rhs: Box::new(rhs),
            });
        }

        self.depth = depth;
        Ok(expr)
    }

    fn parse_or(&mut self) -> Result<Expression, CompilerError> {
        self.parse_binary(&OR_OPERATORS, Parser::parse_and)
    }

    fn parse_and(&mut self) -> Result<Expression, CompilerError> {
        self.parse_binary(&AND_OPERATORS, Parser::parse_eq)
    }

    fn parse_eq(&mut self) -> Result<Expression, CompilerError> {
        self.parse_binary(&EQUALITY_OPERATORS, Parser::parse_comparison)
    }

    fn parse_comparison(&mut self) -> Result<Expression, CompilerError> {
        self.parse_binary(&COMPARISON_OPERATORS, Parser::parse_term)
    }

    fn parse_term(&mut self) -> Result<Expression, CompilerError> {
        self.parse_binary(&TERM_OPERATORS, Parser::parse_factor)
    }

    fn parse_factor(&mut self) -> Result<Expression, CompilerError> {
        self.parse_binary(&FACTOR_OPERATORS, Parser::parse_unary)
    }

    fn parse_unary(&mut self) -> Result<Expression, CompilerError> {
        if let Some(operator) = self.accept_operator(&UNARY_OPERATORS) {
            self.descend()?;
            let rhs = self.parse_unary()?;
            self.ascend();
            return Ok(Expression::Unary(Unary {
                operator,
                rhs: Box::new(rhs),
            }));
        }

        self.parse_member_access()
    }

    fn parse_member_access(&mut self) -> Result<Expression, CompilerError> {
        let depth = self.depth;
        let mut expr = self.parse_primary()?;

        while self.accept(LexemeKind::Dot) {
            self.descend()?;
            let member = self.parse_primary()?;
            expr = Expression::MemberAccess(MemberAccess {
                target: Box::new(expr),
                member: Box::new(member),
            });
        }

        self.depth = depth;
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expression, CompilerError> {
        let current = self.peek();

        if let Ok(kind) = LiteralKind::try_from(current.kind) {
            let text = current.text.clone();
            self.advance();
            return Ok(Expression::Literal(Literal { text, kind }));
        }

        if self.accept(LexemeKind::Identifier) {
            let name = self.previous().text.clone();

            if self.accept(LexemeKind::LeftParen) {
                self.descend()?;
                let args = self.parse_arguments()?;
                self.ascend();
                return Ok(Expression::Call(Call { name, args }));
            }

            return Ok(Expression::Identifier(Identifier { name }));
        }

        if self.accept(LexemeKind::LeftParen) {
            self.descend()?;
            let inner = self.parse_expression()?;
            self.ascend();
            self.expect(LexemeKind::RightParen)?;
            return Ok(Expression::Group(Group {
                inner: Box::new(inner),
            }));
        }

        let current = self.peek();
        Err(CompilerError::UnexpectedPrimary {
            found: current.kind,
            text: current.text.clone(),
            pos: current.pos,
        })
    }

    /// `(` has been consumed. Arguments are parsed below the comma level so
    /// they never fold into a `Sequence`.
    fn parse_arguments(&mut self) -> Result<Vec<Expression>, CompilerError> {
        let mut args: Vec<Expression> = Vec::new();

        if self.accept(LexemeKind::RightParen) {
            return Ok(args);
        }

        loop {
            args.push(self.parse_or()?);
            if !self.accept(LexemeKind::Comma) {
                break;
            }
        }
        self.expect(LexemeKind::RightParen)?;

        Ok(args)
    }
}
