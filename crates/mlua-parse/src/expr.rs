//! Expressions, including the lambda extension.
//!
//! Binary operators are handled by precedence climbing. Each operator has a left and right binding
//! power, and a right-associative operator binds tighter on its left than on its right.

use crate::internal::{at_n, block, expr_list, func_body, par_list};
use crate::{ErrorKind, Expected, Parser};
use event_parse::Exited;
use mlua_syntax::kind::SyntaxKind as SK;

/// binding power for the operand of a unary operator. only `^` binds tighter.
const UNARY_BP: u8 = 12;

/// errors but does not advance iff no expr
pub(crate) fn expr_must(p: &mut Parser<'_>) {
  expr_bp_must(p, 0);
}

fn expr_bp_must(p: &mut Parser<'_>, min_bp: u8) {
  if expr_bp(p, min_bp).is_none() {
    p.error(ErrorKind::Expected(Expected::Expr));
  }
}

/// returns `Some(_)` iff this consumed something because we could start parsing an expression.
fn expr_bp(p: &mut Parser<'_>, min_bp: u8) -> Option<Exited> {
  let mut lhs = if p.peek().is_some_and(|tok| is_unary_op(tok.kind)) {
    let en = p.enter();
    p.bump();
    expr_bp_must(p, UNARY_BP);
    p.exit(en, SK::ExprUnary)
  } else {
    simple_expr(p)?
  };
  while let Some((left, right)) = p.peek().and_then(|tok| binary_bp(tok.kind)) {
    if left <= min_bp {
      break;
    }
    let en = p.precede(lhs);
    p.bump();
    expr_bp_must(p, right);
    lhs = p.exit(en, SK::ExprBinary);
  }
  Some(lhs)
}

fn is_unary_op(kind: SK) -> bool {
  matches!(kind, SK::NotKw | SK::Minus | SK::Hash | SK::Tilde)
}

/// the left and right binding powers of a binary operator.
fn binary_bp(kind: SK) -> Option<(u8, u8)> {
  let ret = match kind {
    SK::OrKw => (1, 1),
    SK::AndKw => (2, 2),
    SK::Lt | SK::Gt | SK::LtEq | SK::GtEq | SK::TildeEq | SK::EqEq => (3, 3),
    SK::Bar => (4, 4),
    SK::Tilde => (5, 5),
    SK::Amp => (6, 6),
    SK::LtLt | SK::GtGt => (7, 7),
    SK::DotDot => (9, 8),
    SK::Plus | SK::Minus => (10, 10),
    SK::Star | SK::Slash | SK::SlashSlash | SK::Percent => (11, 11),
    SK::Caret => (14, 13),
    _ => return None,
  };
  Some(ret)
}

fn simple_expr(p: &mut Parser<'_>) -> Option<Exited> {
  let cur = p.peek()?;
  let kind = match cur.kind {
    SK::NilKw => SK::ExprNil,
    SK::TrueKw => SK::ExprTrue,
    SK::FalseKw => SK::ExprFalse,
    SK::Number => SK::ExprNumber,
    SK::String | SK::LongString => SK::ExprString,
    SK::DotDotDot => SK::ExprVararg,
    SK::FunctionKw => {
      let en = p.enter();
      p.bump();
      func_body(p);
      return Some(p.exit(en, SK::ExprFunction));
    }
    SK::LCurly => return Some(table(p)),
    SK::LRound if at_lambda(p) => return Some(lambda(p)),
    _ => return suffixed_expr(p),
  };
  let en = p.enter();
  p.bump();
  Some(p.exit(en, kind))
}

/// a primary expression followed by any number of field accesses, indexes, and calls.
pub(crate) fn suffixed_expr(p: &mut Parser<'_>) -> Option<Exited> {
  suffixed_expr_kind(p).map(|(ex, _)| ex)
}

/// like [`suffixed_expr`], but also returns the kind of the outermost node.
pub(crate) fn suffixed_expr_kind(p: &mut Parser<'_>) -> Option<(Exited, SK)> {
  let (mut ex, mut ex_kind) = primary_expr(p)?;
  loop {
    let kind = match p.peek().map(|tok| tok.kind) {
      Some(SK::Dot) => {
        let en = p.precede(ex);
        p.bump();
        p.eat(SK::Name);
        (en, SK::ExprFieldGet)
      }
      Some(SK::LSquare) => {
        let en = p.precede(ex);
        p.bump();
        expr_must(p);
        p.eat(SK::RSquare);
        (en, SK::ExprIndex)
      }
      Some(SK::Colon) => {
        let en = p.precede(ex);
        p.bump();
        p.eat(SK::Name);
        args(p);
        (en, SK::ExprMethodCall)
      }
      Some(SK::LRound | SK::String | SK::LongString | SK::LCurly) => {
        let en = p.precede(ex);
        args(p);
        (en, SK::ExprCall)
      }
      _ => break,
    };
    ex = p.exit(kind.0, kind.1);
    ex_kind = kind.1;
  }
  Some((ex, ex_kind))
}

fn primary_expr(p: &mut Parser<'_>) -> Option<(Exited, SK)> {
  let en = p.enter();
  let kind = if p.at(SK::Name) {
    p.bump();
    SK::ExprName
  } else if p.at(SK::LRound) {
    p.bump();
    expr_must(p);
    p.eat(SK::RRound);
    SK::ExprParen
  } else {
    p.abandon(en);
    return None;
  };
  Some((p.exit(en, kind), kind))
}

fn args(p: &mut Parser<'_>) {
  let en = p.enter();
  match p.peek().map(|tok| tok.kind) {
    Some(SK::LRound) => {
      p.bump();
      if !p.at(SK::RRound) {
        expr_list(p);
      }
      p.eat(SK::RRound);
    }
    Some(SK::LCurly) => {
      table(p);
    }
    Some(SK::String | SK::LongString) => {
      p.bump();
    }
    _ => {
      p.error(ErrorKind::Expected(Expected::Kind(SK::LRound)));
    }
  }
  p.exit(en, SK::Args);
}

/// `'{' [field {sep field} [sep]] '}'`. the caller has checked that we are at `{`.
fn table(p: &mut Parser<'_>) -> Exited {
  let en = p.enter();
  p.bump();
  while p.peek().is_some() && !p.at(SK::RCurly) {
    table_field(p);
    if p.at(SK::Comma) || p.at(SK::Semicolon) {
      p.bump();
    } else {
      break;
    }
  }
  p.eat(SK::RCurly);
  p.exit(en, SK::ExprTable)
}

fn table_field(p: &mut Parser<'_>) {
  let en = p.enter();
  if p.at(SK::LSquare) {
    p.bump();
    expr_must(p);
    p.eat(SK::RSquare);
    p.eat(SK::Eq);
  } else if p.at(SK::Name) && at_n(p, 1, SK::Eq) {
    p.bump();
    p.bump();
  }
  expr_must(p);
  p.exit(en, SK::TableField);
}

/// returns whether we are at the start of a lambda: a parenthesized list of names, possibly ending
/// with `...`, followed by `->` or `=>`. consumes nothing.
pub(crate) fn at_lambda(p: &mut Parser<'_>) -> bool {
  if !p.at(SK::LRound) {
    return false;
  }
  let mut n = 1usize;
  if at_n(p, n, SK::Name) || at_n(p, n, SK::DotDotDot) {
    loop {
      if at_n(p, n, SK::DotDotDot) {
        n += 1;
        break;
      }
      if !at_n(p, n, SK::Name) {
        return false;
      }
      n += 1;
      if at_n(p, n, SK::Comma) {
        n += 1;
      } else {
        break;
      }
    }
  }
  at_n(p, n, SK::RRound) && (at_n(p, n + 1, SK::MinusGt) || at_n(p, n + 1, SK::EqGt))
}

/// `'(' [parlist] ')' '->' exp` or `'(' [parlist] ')' '=>' block end`. the caller has checked
/// [`at_lambda`].
pub(crate) fn lambda(p: &mut Parser<'_>) -> Exited {
  let en = p.enter();
  p.bump();
  if p.at(SK::Name) || p.at(SK::DotDotDot) {
    par_list(p);
  }
  p.eat(SK::RRound);
  let kind = if p.at(SK::MinusGt) {
    p.bump();
    expr_must(p);
    SK::ExprLambda
  } else {
    p.eat(SK::EqGt);
    block(p);
    p.eat(SK::EndKw);
    SK::ExprBlockLambda
  };
  p.exit(en, kind)
}
