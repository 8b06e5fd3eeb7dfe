//! Lowering lambdas to anonymous functions.

use crate::st::St;
use mlua_rewrite::Piece;
use mlua_syntax::ast::{self, AstNode as _};
use mlua_syntax::kind::SyntaxToken;

/// `(<params>) -> <expr>` becomes `function(<params>)return <expr> end`.
pub(crate) fn expr(st: &mut St<'_>, lambda: &ast::ExprLambda) {
  let Some(r_round) = head(st, lambda.l_round(), lambda.par_list(), lambda.r_round()) else {
    return;
  };
  let Some(body) = lambda.expr() else { return };
  let first = ast::first_significant(body.syntax()).and_then(|tok| st.idx(&tok));
  let last = ast::last_significant(body.syntax()).and_then(|tok| st.idx(&tok));
  let (Some(first), Some(last)) = (first, last) else { return };
  log::debug!("expression lambda at token {r_round}");
  st.rw.replace(r_round..first, vec![Piece::text(")return ")]);
  st.rw.insert_after(last, " end");
}

/// `(<params>) => <block> end` becomes `function(<params>)<block> end`.
pub(crate) fn block(st: &mut St<'_>, lambda: &ast::ExprBlockLambda) {
  let Some(r_round) = head(st, lambda.l_round(), lambda.par_list(), lambda.r_round()) else {
    return;
  };
  let first = lambda.block().and_then(|b| ast::first_significant(b.syntax()));
  let Some(next) = first.or_else(|| lambda.end_kw()).and_then(|tok| st.idx(&tok)) else {
    return;
  };
  log::debug!("block lambda at token {r_round}");
  st.rw.replace(r_round..next, vec![Piece::text(")")]);
}

/// Replaces everything from `(` up to the first parameter, or up to `)` if there are none, with
/// `function(`. Returns the index of `)`.
fn head(
  st: &mut St<'_>,
  l_round: Option<SyntaxToken>,
  par_list: Option<ast::ParList>,
  r_round: Option<SyntaxToken>,
) -> Option<usize> {
  let l_round = st.idx(&l_round?)?;
  let r_round = st.idx(&r_round?)?;
  let first_param = par_list.and_then(|p| ast::first_significant(p.syntax()));
  let end = match first_param {
    Some(tok) => st.idx(&tok)?,
    None => r_round,
  };
  st.rw.replace(l_round..end, vec![Piece::text("function(")]);
  Some(r_round)
}
