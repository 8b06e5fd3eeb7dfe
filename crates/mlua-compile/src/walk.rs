//! The single walk over the tree that drives the rules.

use crate::st::St;
use crate::{class, lambda};
use mlua_syntax::ast::{self, AstNode as _};
use mlua_syntax::kind::{SyntaxKind as SK, SyntaxNode};
use rowan::WalkEvent;

pub(crate) fn get(st: &mut St<'_>, root: &SyntaxNode) {
  for event in root.preorder() {
    match event {
      WalkEvent::Enter(node) => enter(st, node),
      WalkEvent::Leave(node) => {
        if let Some(class) = ast::StmtClass::cast(node) {
          class::exit(st, &class);
        }
      }
    }
  }
}

fn enter(st: &mut St<'_>, node: SyntaxNode) {
  match node.kind() {
    SK::StmtClass => {
      if let Some(class) = ast::StmtClass::cast(node) {
        class::enter(st, &class);
      }
    }
    SK::ClassMethod => {
      if let Some(method) = ast::ClassMethod::cast(node) {
        class::method(st, &method);
      }
    }
    SK::ClassField => {
      if let Some(field) = ast::ClassField::cast(node) {
        class::field(st, &field);
      }
    }
    SK::ClassConstructor => {
      if let Some(constructor) = ast::ClassConstructor::cast(node) {
        class::constructor(st, &constructor);
      }
    }
    SK::ExprLambda => {
      if let Some(lambda) = ast::ExprLambda::cast(node) {
        lambda::expr(st, &lambda);
      }
    }
    SK::ExprBlockLambda => {
      if let Some(lambda) = ast::ExprBlockLambda::cast(node) {
        lambda::block(st, &lambda);
      }
    }
    _ => {}
  }
}
