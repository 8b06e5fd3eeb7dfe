//! Statements, blocks, and class definitions.

use crate::expr::{self, expr_must};
use crate::{ErrorKind, Expected, Parser};
use event_parse::Exited;
use mlua_syntax::kind::SyntaxKind as SK;

pub(crate) fn at_n(p: &mut Parser<'_>, n: usize, kind: SK) -> bool {
  p.peek_n(n).is_some_and(|tok| tok.kind == kind)
}

/// returns whether the `n`th token is a name spelled `word`.
fn at_word(p: &mut Parser<'_>, n: usize, word: &str) -> bool {
  p.peek_n(n).is_some_and(|tok| tok.kind == SK::Name && tok.text == word)
}

/// records the error and wraps the current token in an error node, so the caller makes progress.
fn error_bump(p: &mut Parser<'_>, kind: ErrorKind) {
  let en = p.enter();
  p.error(kind);
  if p.peek().is_some() {
    p.bump();
  }
  p.exit(en, SK::Error);
}

/// always makes a node, possibly an empty one.
pub(crate) fn block(p: &mut Parser<'_>) {
  let en = p.enter();
  loop {
    if at_block_end(p) {
      break;
    }
    if p.at(SK::ReturnKw) {
      stmt_return(p);
      break;
    }
    if stmt(p).is_none() {
      error_bump(p, ErrorKind::Expected(Expected::Stmt));
    }
  }
  p.exit(en, SK::Block);
}

fn at_block_end(p: &mut Parser<'_>) -> bool {
  p.peek().is_none_or(|tok| matches!(tok.kind, SK::EndKw | SK::ElseKw | SK::ElseifKw | SK::UntilKw))
}

fn stmt_return(p: &mut Parser<'_>) {
  let en = p.enter();
  p.bump();
  if !at_block_end(p) && !p.at(SK::Semicolon) {
    expr_list(p);
  }
  if p.at(SK::Semicolon) {
    p.bump();
  }
  p.exit(en, SK::StmtReturn);
}

/// returns `None` iff nothing was consumed because no statement starts here.
#[allow(clippy::too_many_lines)]
fn stmt(p: &mut Parser<'_>) -> Option<Exited> {
  let cur = p.peek()?;
  let en = p.enter();
  let kind = match cur.kind {
    SK::Semicolon => {
      p.bump();
      SK::StmtEmpty
    }
    SK::ColonColon => {
      p.bump();
      p.eat(SK::Name);
      p.eat(SK::ColonColon);
      SK::StmtLabel
    }
    SK::BreakKw => {
      p.bump();
      SK::StmtBreak
    }
    SK::GotoKw => {
      p.bump();
      p.eat(SK::Name);
      SK::StmtGoto
    }
    SK::DoKw => {
      p.bump();
      block(p);
      p.eat(SK::EndKw);
      SK::StmtDo
    }
    SK::WhileKw => {
      p.bump();
      expr_must(p);
      p.eat(SK::DoKw);
      block(p);
      p.eat(SK::EndKw);
      SK::StmtWhile
    }
    SK::RepeatKw => {
      p.bump();
      block(p);
      p.eat(SK::UntilKw);
      expr_must(p);
      SK::StmtRepeat
    }
    SK::IfKw => {
      p.bump();
      expr_must(p);
      p.eat(SK::ThenKw);
      block(p);
      while p.at(SK::ElseifKw) {
        let en = p.enter();
        p.bump();
        expr_must(p);
        p.eat(SK::ThenKw);
        block(p);
        p.exit(en, SK::ElseifClause);
      }
      if p.at(SK::ElseKw) {
        let en = p.enter();
        p.bump();
        block(p);
        p.exit(en, SK::ElseClause);
      }
      p.eat(SK::EndKw);
      SK::StmtIf
    }
    SK::ForKw => {
      p.bump();
      let kind = if at_n(p, 1, SK::Eq) {
        p.eat(SK::Name);
        p.bump();
        expr_must(p);
        p.eat(SK::Comma);
        expr_must(p);
        if p.at(SK::Comma) {
          p.bump();
          expr_must(p);
        }
        SK::StmtNumericFor
      } else {
        name_list(p);
        p.eat(SK::InKw);
        expr_list(p);
        SK::StmtGenericFor
      };
      p.eat(SK::DoKw);
      block(p);
      p.eat(SK::EndKw);
      kind
    }
    SK::FunctionKw => {
      p.bump();
      func_name(p);
      func_body(p);
      SK::StmtFunction
    }
    SK::LocalKw => {
      p.bump();
      if p.at(SK::FunctionKw) {
        p.bump();
        p.eat(SK::Name);
        func_body(p);
        SK::StmtLocalFunction
      } else {
        attrib_name_list(p);
        if p.at(SK::Eq) {
          p.bump();
          expr_list(p);
        }
        SK::StmtLocal
      }
    }
    SK::Name if at_word(p, 0, "class") && at_n(p, 1, SK::Name) => {
      class_def(p);
      SK::StmtClass
    }
    SK::LRound if expr::at_lambda(p) => {
      expr::lambda(p);
      SK::StmtLambda
    }
    _ => {
      let Some((ex, ex_kind)) = expr::suffixed_expr_kind(p) else {
        p.abandon(en);
        return None;
      };
      if p.at(SK::Eq) || p.at(SK::Comma) {
        let vl = p.precede(ex);
        while p.at(SK::Comma) {
          p.bump();
          if expr::suffixed_expr(p).is_none() {
            p.error(ErrorKind::Expected(Expected::Expr));
          }
        }
        p.exit(vl, SK::VarList);
        p.eat(SK::Eq);
        expr_list(p);
        SK::StmtAssign
      } else {
        if !matches!(ex_kind, SK::ExprCall | SK::ExprMethodCall) {
          p.error(ErrorKind::NotCall);
        }
        SK::StmtCall
      }
    }
  };
  Some(p.exit(en, kind))
}

/// `class Name [extends Name] {item} end`. the caller has checked that we are at `class Name`.
fn class_def(p: &mut Parser<'_>) {
  p.bump();
  p.eat(SK::Name);
  if at_word(p, 0, "extends") {
    let en = p.enter();
    p.bump();
    p.eat(SK::Name);
    p.exit(en, SK::ExtendsClause);
  }
  while p.peek().is_some() && !p.at(SK::EndKw) {
    if class_item(p).is_none() {
      error_bump(p, ErrorKind::Expected(Expected::ClassItem));
    }
  }
  p.eat(SK::EndKw);
}

fn class_item(p: &mut Parser<'_>) -> Option<Exited> {
  if at_word(p, 0, "constructor") && at_n(p, 1, SK::LRound) {
    let en = p.enter();
    p.bump();
    func_body(p);
    return Some(p.exit(en, SK::ClassConstructor));
  }
  let is_static = at_word(p, 0, "static") && (at_n(p, 1, SK::FunctionKw) || at_n(p, 1, SK::Name));
  if !is_static && !p.at(SK::FunctionKw) && !p.at(SK::Name) {
    return None;
  }
  let en = p.enter();
  if is_static {
    p.bump();
  }
  let kind = if p.at(SK::FunctionKw) {
    p.bump();
    p.eat(SK::Name);
    func_body(p);
    SK::ClassMethod
  } else {
    p.eat(SK::Name);
    p.eat(SK::Eq);
    expr_must(p);
    SK::ClassField
  };
  Some(p.exit(en, kind))
}

/// `Name {'.' Name} [':' Name]`
fn func_name(p: &mut Parser<'_>) {
  let en = p.enter();
  p.eat(SK::Name);
  while p.at(SK::Dot) {
    p.bump();
    p.eat(SK::Name);
  }
  if p.at(SK::Colon) {
    p.bump();
    p.eat(SK::Name);
  }
  p.exit(en, SK::FuncName);
}

/// `'(' [parlist] ')' block end`
pub(crate) fn func_body(p: &mut Parser<'_>) {
  let en = p.enter();
  p.eat(SK::LRound);
  if p.at(SK::Name) || p.at(SK::DotDotDot) {
    par_list(p);
  }
  p.eat(SK::RRound);
  block(p);
  p.eat(SK::EndKw);
  p.exit(en, SK::FuncBody);
}

/// the caller has checked that we are at a name or `...`.
pub(crate) fn par_list(p: &mut Parser<'_>) {
  let en = p.enter();
  loop {
    if p.at(SK::DotDotDot) {
      p.bump();
      break;
    }
    p.eat(SK::Name);
    if p.at(SK::Comma) {
      p.bump();
    } else {
      break;
    }
  }
  p.exit(en, SK::ParList);
}

fn name_list(p: &mut Parser<'_>) {
  let en = p.enter();
  p.eat(SK::Name);
  while p.at(SK::Comma) {
    p.bump();
    p.eat(SK::Name);
  }
  p.exit(en, SK::NameList);
}

/// like [`name_list`], but each name may have an attribute like `<const>`.
fn attrib_name_list(p: &mut Parser<'_>) {
  let en = p.enter();
  loop {
    let name = p.enter();
    p.eat(SK::Name);
    if p.at(SK::Lt) {
      let attrib = p.enter();
      p.bump();
      p.eat(SK::Name);
      p.eat(SK::Gt);
      p.exit(attrib, SK::Attrib);
    }
    p.exit(name, SK::AttribName);
    if p.at(SK::Comma) {
      p.bump();
    } else {
      break;
    }
  }
  p.exit(en, SK::NameList);
}

pub(crate) fn expr_list(p: &mut Parser<'_>) {
  let en = p.enter();
  expr_must(p);
  while p.at(SK::Comma) {
    p.bump();
    expr_must(p);
  }
  p.exit(en, SK::ExprList);
}
