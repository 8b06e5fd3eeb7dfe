//! The state threaded through the walk.

use crate::Options;
use crate::descriptor::ClassDescriptor;
use always::always;
use mlua_rewrite::Rewriter;
use mlua_syntax::kind::{SyntaxKind as SK, SyntaxNode, SyntaxToken};
use std::ops::Range;
use text_size::TextSize;

pub(crate) struct St<'a> {
  pub(crate) rw: Rewriter<'a, SK>,
  /// innermost last
  pub(crate) classes: Vec<ClassDescriptor>,
  pub(crate) options: Options,
  starts: Vec<TextSize>,
}

impl<'a> St<'a> {
  pub(crate) fn new(tokens: &'a [token::Token<'a, SK>], options: Options) -> Self {
    let mut starts = Vec::with_capacity(tokens.len());
    let mut end = TextSize::default();
    for tok in tokens {
      starts.push(end);
      end += TextSize::of(tok.text);
    }
    Self { rw: Rewriter::new(tokens), classes: Vec::new(), options, starts }
  }

  /// The index of the tree token in the token sequence. The tree holds exactly the lexed tokens,
  /// in order, and no token is empty, so start offsets identify tokens.
  pub(crate) fn idx(&self, tok: &SyntaxToken) -> Option<usize> {
    let ret = self.starts.binary_search(&tok.text_range().start()).ok();
    always!(ret.is_some(), "no token starts at {:?}", tok.text_range());
    ret
  }

  /// The tokens from the first to the last non-trivia token of the node, as a half-open range.
  pub(crate) fn span(&self, node: &SyntaxNode) -> Option<Range<usize>> {
    let first = mlua_syntax::ast::first_significant(node)?;
    let last = mlua_syntax::ast::last_significant(node)?;
    Some(self.idx(&first)?..self.idx(&last)? + 1)
  }

  pub(crate) fn finish(self) -> String {
    always!(self.classes.is_empty(), "class stack not empty at end of walk");
    self.rw.render()
  }
}
