//! Debug rendering of lexeme streams and syntax trees.
//!
//! Output is an indented tree, two spaces per level. Nodes print as
//! `[ Name ]`, fields as `- Key: value` and field headers as `- Key`.

use crate::{
    expr::Expression,
    stmt::{Binding, Program, Statement},
    token::Lexeme,
};

const INDENT: &str = "  ";

pub fn print_program(program: &Program) -> String {
    let mut out = String::new();

    group(&mut out, 0, "Program");
    for statement in &program.statements {
        print_statement(&mut out, 1, statement);
    }

    out
}

pub fn print_lexemes(lexemes: &[Lexeme]) -> String {
    let mut out = String::new();

    for lexeme in lexemes {
        out.push_str(&format!(
            "{}:{}\t{}\t{}\n",
            lexeme.pos.line, lexeme.pos.column, lexeme.kind, lexeme.text
        ));
    }

    out
}

fn prefix(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn group(out: &mut String, depth: usize, name: &str) {
    prefix(out, depth);
    out.push_str(&format!("[ {} ]\n", name));
}

fn value(out: &mut String, depth: usize, name: &str, value: &str) {
    prefix(out, depth + 1);
    out.push_str(&format!("- {}: {}\n", name, value));
}

fn info(out: &mut String, depth: usize, description: &str) {
    prefix(out, depth + 1);
    out.push_str(&format!("- {}\n", description));
}

fn print_statement(out: &mut String, depth: usize, statement: &Statement) {
    match statement {
        Statement::Block(statements) => {
            group(out, depth, "Block");
            for s in statements {
                print_statement(out, depth + 1, s);
            }
        }
        Statement::Expression(expr) => print_expression(out, depth, expr),
        Statement::FunctionDecl(function) => {
            group(out, depth, "Function");
            value(out, depth, "Name", &function.name);
            value(out, depth, "Binding", binding_label(function.binding));
            info(out, depth, "Args");
            for param in &function.params {
                info(out, depth + 1, param);
            }
            info(out, depth, "Body");
            print_statement(out, depth + 2, &function.body);
        }
        Statement::VarDecl(declaration) => {
            group(out, depth, "Declaration");
            value(out, depth, "Name", &declaration.name);
            value(out, depth, "Binding", binding_label(declaration.binding));
            info(out, depth, "Value");
            print_expression(out, depth + 2, &declaration.value);
        }
        Statement::If(statement) => {
            group(out, depth, "If");
            info(out, depth, "Condition");
            print_expression(out, depth + 2, &statement.condition);
            info(out, depth, "Body");
            for s in &statement.body {
                print_statement(out, depth + 2, s);
            }
        }
        Statement::Return(expr) => {
            group(out, depth, "Return");
            info(out, depth, "Value");
            print_expression(out, depth + 2, expr);
        }
        Statement::StructDecl(declaration) => {
            group(out, depth, "Struct");
            value(out, depth, "Name", &declaration.name);
        }
    }
}

fn print_expression(out: &mut String, depth: usize, expr: &Expression) {
    match expr {
        Expression::Binary(binary) => {
            group(out, depth, binary.operator.label());
            print_expression(out, depth + 1, &binary.lhs);
            print_expression(out, depth + 1, &binary.rhs);
        }
        Expression::Unary(unary) => {
            group(out, depth, unary.operator.label());
            print_expression(out, depth + 1, &unary.rhs);
        }
        Expression::Literal(literal) => {
            group(out, depth, "Literal");
            value(out, depth, "Value", &literal.text);
            value(out, depth, "Type", literal.kind.label());
        }
        Expression::Identifier(identifier) => {
            group(out, depth, "Identifier");
            value(out, depth, "Name", &identifier.name);
        }
        Expression::Group(g) => {
            group(out, depth, "Group");
            print_expression(out, depth + 1, &g.inner);
        }
        Expression::Call(call) => {
            group(out, depth, "Call");
            value(out, depth, "Name", &call.name);
            info(out, depth, "Args");
            for (index, arg) in call.args.iter().enumerate() {
                info(out, depth + 1, &index.to_string());
                print_expression(out, depth + 3, arg);
            }
        }
        Expression::MemberAccess(access) => {
            group(out, depth, "Member");
            print_expression(out, depth + 1, &access.target);
            print_expression(out, depth + 1, &access.member);
        }
        Expression::Sequence(sequence) => {
            group(out, depth, "Expressions");
            print_expression(out, depth + 1, &sequence.head);
            print_expression(out, depth + 1, &sequence.tail);
        }
    }
}

fn binding_label(binding: Binding) -> &'static str {
    match binding {
        Binding::Val => "val",
        Binding::Const => "const",
    }
}
