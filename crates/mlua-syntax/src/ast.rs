//! Typed views over the nodes the compiler inspects.
//!
//! Only constructs that the desugaring rules read get a wrapper. Everything else is reachable
//! through [`AstNode::syntax`].

use crate::kind::{SyntaxKind as SK, SyntaxNode, SyntaxToken};

/// A typed view over a syntax node.
pub trait AstNode: Sized {
  /// Returns whether a node of this kind can be viewed as `Self`.
  fn can_cast(kind: SK) -> bool;

  /// Views the node as `Self`, if it has the right kind.
  fn cast(node: SyntaxNode) -> Option<Self>;

  /// The underlying node.
  fn syntax(&self) -> &SyntaxNode;
}

macro_rules! node {
  ($name:ident) => {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct $name(SyntaxNode);

    impl AstNode for $name {
      fn can_cast(kind: SK) -> bool {
        kind == SK::$name
      }

      fn cast(node: SyntaxNode) -> Option<Self> {
        Self::can_cast(node.kind()).then(|| Self(node))
      }

      fn syntax(&self) -> &SyntaxNode {
        &self.0
      }
    }
  };
}

node!(Root);
node!(Block);
node!(StmtClass);
node!(ExtendsClause);
node!(ClassMethod);
node!(ClassField);
node!(ClassConstructor);
node!(FuncBody);
node!(ParList);
node!(ExprLambda);
node!(ExprBlockLambda);

/// Any expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr(SyntaxNode);

impl AstNode for Expr {
  fn can_cast(kind: SK) -> bool {
    kind.is_expr()
  }

  fn cast(node: SyntaxNode) -> Option<Self> {
    Self::can_cast(node.kind()).then(|| Self(node))
  }

  fn syntax(&self) -> &SyntaxNode {
    &self.0
  }
}

/// An item in a class body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassItem {
  Method(ClassMethod),
  Field(ClassField),
  Constructor(ClassConstructor),
}

impl AstNode for ClassItem {
  fn can_cast(kind: SK) -> bool {
    matches!(kind, SK::ClassMethod | SK::ClassField | SK::ClassConstructor)
  }

  fn cast(node: SyntaxNode) -> Option<Self> {
    let ret = match node.kind() {
      SK::ClassMethod => ClassItem::Method(ClassMethod(node)),
      SK::ClassField => ClassItem::Field(ClassField(node)),
      SK::ClassConstructor => ClassItem::Constructor(ClassConstructor(node)),
      _ => return None,
    };
    Some(ret)
  }

  fn syntax(&self) -> &SyntaxNode {
    match self {
      ClassItem::Method(x) => x.syntax(),
      ClassItem::Field(x) => x.syntax(),
      ClassItem::Constructor(x) => x.syntax(),
    }
  }
}

fn tokens(node: &SyntaxNode, kind: SK) -> impl Iterator<Item = SyntaxToken> {
  node.children_with_tokens().filter_map(rowan::NodeOrToken::into_token).filter(move |t| t.kind() == kind)
}

fn token(node: &SyntaxNode, kind: SK) -> Option<SyntaxToken> {
  tokens(node, kind).next()
}

/// The word that starts the node, if it is a name token spelled `word`.
fn leading_word(node: &SyntaxNode, word: &str) -> Option<SyntaxToken> {
  let tok = node
    .children_with_tokens()
    .filter_map(rowan::NodeOrToken::into_token)
    .find(|t| !t.kind().is_trivia())?;
  (tok.kind() == SK::Name && tok.text() == word).then_some(tok)
}

fn child<N: AstNode>(node: &SyntaxNode) -> Option<N> {
  node.children().find_map(N::cast)
}

fn children<N: AstNode>(node: &SyntaxNode) -> impl Iterator<Item = N> {
  node.children().filter_map(N::cast)
}

/// The non-trivia tokens in the node, in order.
pub fn significant_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> {
  node
    .descendants_with_tokens()
    .filter_map(rowan::NodeOrToken::into_token)
    .filter(|t| !t.kind().is_trivia())
}

/// The first non-trivia token in the node.
#[must_use]
pub fn first_significant(node: &SyntaxNode) -> Option<SyntaxToken> {
  significant_tokens(node).next()
}

/// The last non-trivia token in the node.
#[must_use]
pub fn last_significant(node: &SyntaxNode) -> Option<SyntaxToken> {
  significant_tokens(node).last()
}

impl Root {
  #[must_use]
  pub fn block(&self) -> Option<Block> {
    child(&self.0)
  }
}

impl StmtClass {
  #[must_use]
  pub fn class_kw(&self) -> Option<SyntaxToken> {
    leading_word(&self.0, "class")
  }

  /// The name of the class, which is the name after `class`.
  #[must_use]
  pub fn name(&self) -> Option<SyntaxToken> {
    tokens(&self.0, SK::Name).nth(1)
  }

  #[must_use]
  pub fn extends_clause(&self) -> Option<ExtendsClause> {
    child(&self.0)
  }

  pub fn items(&self) -> impl Iterator<Item = ClassItem> {
    children(&self.0)
  }

  #[must_use]
  pub fn end_kw(&self) -> Option<SyntaxToken> {
    token(&self.0, SK::EndKw)
  }
}

impl ExtendsClause {
  #[must_use]
  pub fn extends_kw(&self) -> Option<SyntaxToken> {
    leading_word(&self.0, "extends")
  }

  /// The name of the superclass.
  #[must_use]
  pub fn name(&self) -> Option<SyntaxToken> {
    tokens(&self.0, SK::Name).nth(1)
  }
}

impl ClassMethod {
  #[must_use]
  pub fn static_kw(&self) -> Option<SyntaxToken> {
    leading_word(&self.0, "static")
  }

  /// The name after `function`.
  #[must_use]
  pub fn name(&self) -> Option<SyntaxToken> {
    self
      .0
      .children_with_tokens()
      .filter_map(rowan::NodeOrToken::into_token)
      .skip_while(|t| t.kind() != SK::FunctionKw)
      .find(|t| t.kind() == SK::Name)
  }

  #[must_use]
  pub fn func_body(&self) -> Option<FuncBody> {
    child(&self.0)
  }
}

impl ClassField {
  /// Present iff the field has two names before its `=`, the first being `static`.
  #[must_use]
  pub fn static_kw(&self) -> Option<SyntaxToken> {
    let fst = leading_word(&self.0, "static")?;
    (tokens(&self.0, SK::Name).count() == 2).then_some(fst)
  }

  #[must_use]
  pub fn name(&self) -> Option<SyntaxToken> {
    tokens(&self.0, SK::Name).last()
  }

  #[must_use]
  pub fn expr(&self) -> Option<Expr> {
    child(&self.0)
  }
}

impl ClassConstructor {
  #[must_use]
  pub fn constructor_kw(&self) -> Option<SyntaxToken> {
    leading_word(&self.0, "constructor")
  }

  #[must_use]
  pub fn func_body(&self) -> Option<FuncBody> {
    child(&self.0)
  }
}

impl FuncBody {
  #[must_use]
  pub fn par_list(&self) -> Option<ParList> {
    child(&self.0)
  }

  #[must_use]
  pub fn r_round(&self) -> Option<SyntaxToken> {
    token(&self.0, SK::RRound)
  }

  #[must_use]
  pub fn block(&self) -> Option<Block> {
    child(&self.0)
  }

  #[must_use]
  pub fn end_kw(&self) -> Option<SyntaxToken> {
    token(&self.0, SK::EndKw)
  }
}

impl ExprLambda {
  #[must_use]
  pub fn l_round(&self) -> Option<SyntaxToken> {
    token(&self.0, SK::LRound)
  }

  #[must_use]
  pub fn par_list(&self) -> Option<ParList> {
    child(&self.0)
  }

  #[must_use]
  pub fn r_round(&self) -> Option<SyntaxToken> {
    token(&self.0, SK::RRound)
  }

  /// The body.
  #[must_use]
  pub fn expr(&self) -> Option<Expr> {
    child(&self.0)
  }
}

impl ExprBlockLambda {
  #[must_use]
  pub fn l_round(&self) -> Option<SyntaxToken> {
    token(&self.0, SK::LRound)
  }

  #[must_use]
  pub fn par_list(&self) -> Option<ParList> {
    child(&self.0)
  }

  #[must_use]
  pub fn r_round(&self) -> Option<SyntaxToken> {
    token(&self.0, SK::RRound)
  }

  #[must_use]
  pub fn block(&self) -> Option<Block> {
    child(&self.0)
  }

  #[must_use]
  pub fn end_kw(&self) -> Option<SyntaxToken> {
    token(&self.0, SK::EndKw)
  }
}
