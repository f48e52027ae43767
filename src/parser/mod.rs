mod cursor;
mod parse_error;

use crate::ast::*;
use crate::lexer::{TokenBuffer, TokenKind};
pub use cursor::{Cursor, MAX_LOOKAHEAD};
use cursor::unexpected;
pub use parse_error::{Expected, ParseError, Result};

/// Deepest `+` chain accepted in one expression.
///
/// Derived `Clone`, `Debug` and `PartialEq` on [`Expression`] recurse once
/// per operator.
pub const MAX_EXPRESSION_DEPTH: usize = 1024;

fn parse_type_specifier(cursor: &mut Cursor) -> Result<TypeSpecifier> {
    let next = cursor.peek_or_error(&[Expected::TypeSpecifier])?;
    match next.kind {
        TokenKind::Int => {
            cursor.get();
            Ok(TypeSpecifier::Int)
        }
        _ => Err(unexpected(vec![Expected::TypeSpecifier], next)),
    }
}

fn parse_parameter(cursor: &mut Cursor) -> Result<FunctionParameter> {
    let type_specifier = parse_type_specifier(cursor)?;
    let name = cursor.expect_identifier()?;
    Ok(FunctionParameter::new(type_specifier, name))
}

fn parse_parameter_list(cursor: &mut Cursor) -> Result<Vec<FunctionParameter>> {
    let mut parameters = Vec::new();

    let empty = cursor.peek_is(&TokenKind::CloseParanth);
    if empty {
        return Ok(parameters);
    }

    loop {
        let parameter = parse_parameter(cursor)?;
        parameters.push(parameter);
        if !cursor.bump_if(&TokenKind::Comma) {
            break;
        }
    }

    Ok(parameters)
}

fn parse_expression(cursor: &mut Cursor) -> Result<Expression> {
    let first = cursor.expect_identifier()?;
    let mut left = Expression::identifier(first);
    let mut depth = 0;

    while let Some(plus) = cursor.peek().filter(|t| t.kind == TokenKind::Plus) {
        if depth == MAX_EXPRESSION_DEPTH {
            return Err(ParseError::ExpressionTooDeep {
                limit: MAX_EXPRESSION_DEPTH,
                position: plus.position.clone(),
            });
        }
        cursor.get();
        let right = cursor.expect_identifier().map(Expression::identifier)?;
        left = Expression::plus(left, right);
        depth += 1;
    }

    Ok(left)
}

fn parse_return(cursor: &mut Cursor) -> Result<Statement> {
    cursor.expect(&TokenKind::Return)?;
    let exp = parse_expression(cursor)?;
    cursor.expect(&TokenKind::Semicolon)?;
    Ok(Statement::Return(exp))
}

fn parse_statement(cursor: &mut Cursor) -> Result<Statement> {
    let expected = [Expected::Statement, Expected::Token(TokenKind::CloseCurly)];
    let peek = cursor.peek_or_error(&expected)?;
    match peek.kind {
        TokenKind::Return => parse_return(cursor),
        _ => Err(unexpected(expected.to_vec(), peek)),
    }
}

fn parse_block(cursor: &mut Cursor) -> Result<Vec<Statement>> {
    let mut statements = Vec::new();

    cursor.expect(&TokenKind::OpenCurly)?;

    while !cursor.bump_if(&TokenKind::CloseCurly) {
        let statement = parse_statement(cursor)?;
        statements.push(statement);
    }

    Ok(statements)
}

fn parse_function_decl_or_def(cursor: &mut Cursor) -> Result<FunctionDefinition> {
    let return_type = parse_type_specifier(cursor)?;
    let name = cursor.expect_identifier()?.to_owned();
    cursor.expect(&TokenKind::OpenParanth)?;
    let parameters = parse_parameter_list(cursor)?;
    let close = [
        Expected::Token(TokenKind::Comma),
        Expected::Token(TokenKind::CloseParanth),
    ];
    let next = cursor.peek_or_error(&close)?;
    if next.kind != TokenKind::CloseParanth {
        return Err(unexpected(close.to_vec(), next));
    }
    cursor.get();

    let terminator = [
        Expected::Token(TokenKind::Semicolon),
        Expected::Token(TokenKind::OpenCurly),
    ];
    let next = cursor.peek_or_error(&terminator)?;
    let body = match next.kind {
        TokenKind::Semicolon => {
            cursor.get();
            None
        }
        TokenKind::OpenCurly => Some(parse_block(cursor)?),
        _ => return Err(unexpected(terminator.to_vec(), next)),
    };

    let prototype = FunctionPrototype {
        name,
        return_type,
        parameters,
    };
    Ok(FunctionDefinition { prototype, body })
}

/// Checks `type IDENTIFIER '('` without consuming anything.
///
/// Only functions exist at the top level so far; a type and a name followed
/// by anything else is reported at the third token.
fn should_parse_function(cursor: &Cursor) -> Result<bool> {
    let Some(first) = cursor.peek_nth(0)? else {
        return Ok(false);
    };
    if !first.is_type_specifier() {
        return Ok(false);
    }
    let second = cursor.peek_nth(1)?;
    if !second.is_some_and(|t| t.is_identifier()) {
        // leave the error to parse_function_decl_or_def
        return Ok(true);
    }
    match cursor.peek_nth(2)? {
        Some(third) if third.kind != TokenKind::OpenParanth => Err(unexpected(
            vec![Expected::Token(TokenKind::OpenParanth)],
            third,
        )),
        _ => Ok(true),
    }
}

fn parse_toplevel(cursor: &mut Cursor) -> Result<Toplevel> {
    if should_parse_function(cursor)? {
        tracing::trace!("parsing function at {}", cursor.current_position());
        parse_function_decl_or_def(cursor).map(Toplevel::FunctionDefinition)
    } else {
        let next = cursor.peek_or_error(&[Expected::TypeSpecifier])?;
        Err(unexpected(vec![Expected::TypeSpecifier], next))
    }
}

pub fn parse(tokens: &TokenBuffer) -> Result<TranslationUnit> {
    let mut items = Vec::new();
    let mut cursor = Cursor::new(tokens);

    while !cursor.at_end() {
        let item = parse_toplevel(&mut cursor)?;
        items.push(item);
    }

    tracing::debug!(
        "parsed {} toplevel items from {}",
        items.len(),
        tokens.end_position().file
    );
    Ok(TranslationUnit::new(items))
}
