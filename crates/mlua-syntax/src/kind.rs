//! Kinds of tokens and nodes.

macro_rules! kinds {
  ($($name:ident,)*) => {
    /// A kind of token or node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[repr(u16)]
    pub enum SyntaxKind {
      $($name,)*
    }

    impl SyntaxKind {
      const ALL: &'static [SyntaxKind] = &[$(SyntaxKind::$name,)*];
    }
  };
}

kinds! {
  // trivia
  Whitespace,
  LineComment,
  BlockComment,
  Shebang,
  Invalid,
  // literals and names
  Name,
  Number,
  String,
  LongString,
  // reserved words
  AndKw,
  BreakKw,
  DoKw,
  ElseKw,
  ElseifKw,
  EndKw,
  FalseKw,
  ForKw,
  FunctionKw,
  GotoKw,
  IfKw,
  InKw,
  LocalKw,
  NilKw,
  NotKw,
  OrKw,
  RepeatKw,
  ReturnKw,
  ThenKw,
  TrueKw,
  UntilKw,
  WhileKw,
  // punctuation
  DotDotDot,
  DotDot,
  Dot,
  ColonColon,
  Colon,
  Semicolon,
  Comma,
  LRound,
  RRound,
  LCurly,
  RCurly,
  LSquare,
  RSquare,
  EqEq,
  EqGt,
  Eq,
  TildeEq,
  Tilde,
  LtLt,
  LtEq,
  Lt,
  GtGt,
  GtEq,
  Gt,
  Plus,
  MinusGt,
  Minus,
  Star,
  SlashSlash,
  Slash,
  Percent,
  Caret,
  Hash,
  Amp,
  Bar,
  // nodes
  Root,
  Block,
  StmtEmpty,
  StmtAssign,
  StmtCall,
  StmtLabel,
  StmtBreak,
  StmtGoto,
  StmtDo,
  StmtWhile,
  StmtRepeat,
  StmtIf,
  ElseifClause,
  ElseClause,
  StmtNumericFor,
  StmtGenericFor,
  StmtFunction,
  StmtLocalFunction,
  StmtLocal,
  StmtReturn,
  StmtClass,
  StmtLambda,
  FuncName,
  FuncBody,
  ParList,
  NameList,
  AttribName,
  Attrib,
  ExprList,
  VarList,
  ExtendsClause,
  ClassMethod,
  ClassField,
  ClassConstructor,
  ExprNil,
  ExprTrue,
  ExprFalse,
  ExprNumber,
  ExprString,
  ExprVararg,
  ExprFunction,
  ExprTable,
  TableField,
  ExprBinary,
  ExprUnary,
  ExprParen,
  ExprName,
  ExprIndex,
  ExprFieldGet,
  ExprMethodCall,
  ExprCall,
  Args,
  ExprLambda,
  ExprBlockLambda,
  Error,
}

impl SyntaxKind {
  /// Punctuation, longest first among those sharing a prefix.
  pub const PUNCTUATION: [(&'static [u8], SyntaxKind); 35] = [
    (b"...", SyntaxKind::DotDotDot),
    (b"..", SyntaxKind::DotDot),
    (b".", SyntaxKind::Dot),
    (b"::", SyntaxKind::ColonColon),
    (b":", SyntaxKind::Colon),
    (b";", SyntaxKind::Semicolon),
    (b",", SyntaxKind::Comma),
    (b"(", SyntaxKind::LRound),
    (b")", SyntaxKind::RRound),
    (b"{", SyntaxKind::LCurly),
    (b"}", SyntaxKind::RCurly),
    (b"[", SyntaxKind::LSquare),
    (b"]", SyntaxKind::RSquare),
    (b"==", SyntaxKind::EqEq),
    (b"=>", SyntaxKind::EqGt),
    (b"=", SyntaxKind::Eq),
    (b"~=", SyntaxKind::TildeEq),
    (b"~", SyntaxKind::Tilde),
    (b"<<", SyntaxKind::LtLt),
    (b"<=", SyntaxKind::LtEq),
    (b"<", SyntaxKind::Lt),
    (b">>", SyntaxKind::GtGt),
    (b">=", SyntaxKind::GtEq),
    (b">", SyntaxKind::Gt),
    (b"+", SyntaxKind::Plus),
    (b"->", SyntaxKind::MinusGt),
    (b"-", SyntaxKind::Minus),
    (b"*", SyntaxKind::Star),
    (b"//", SyntaxKind::SlashSlash),
    (b"/", SyntaxKind::Slash),
    (b"%", SyntaxKind::Percent),
    (b"^", SyntaxKind::Caret),
    (b"#", SyntaxKind::Hash),
    (b"&", SyntaxKind::Amp),
    (b"|", SyntaxKind::Bar),
  ];

  /// The reserved words of Lua.
  pub const KEYWORDS: [(&'static [u8], SyntaxKind); 22] = [
    (b"and", SyntaxKind::AndKw),
    (b"break", SyntaxKind::BreakKw),
    (b"do", SyntaxKind::DoKw),
    (b"else", SyntaxKind::ElseKw),
    (b"elseif", SyntaxKind::ElseifKw),
    (b"end", SyntaxKind::EndKw),
    (b"false", SyntaxKind::FalseKw),
    (b"for", SyntaxKind::ForKw),
    (b"function", SyntaxKind::FunctionKw),
    (b"goto", SyntaxKind::GotoKw),
    (b"if", SyntaxKind::IfKw),
    (b"in", SyntaxKind::InKw),
    (b"local", SyntaxKind::LocalKw),
    (b"nil", SyntaxKind::NilKw),
    (b"not", SyntaxKind::NotKw),
    (b"or", SyntaxKind::OrKw),
    (b"repeat", SyntaxKind::RepeatKw),
    (b"return", SyntaxKind::ReturnKw),
    (b"then", SyntaxKind::ThenKw),
    (b"true", SyntaxKind::TrueKw),
    (b"until", SyntaxKind::UntilKw),
    (b"while", SyntaxKind::WhileKw),
  ];

  /// Returns the reserved word kind for these bytes, if any.
  #[must_use]
  pub fn keyword(bs: &[u8]) -> Option<Self> {
    Self::KEYWORDS.iter().find_map(|&(kw, sk)| (kw == bs).then_some(sk))
  }

  /// Returns whether this is whitespace, a comment, or otherwise insignificant.
  #[must_use]
  pub fn is_trivia(self) -> bool {
    matches!(
      self,
      SyntaxKind::Whitespace
        | SyntaxKind::LineComment
        | SyntaxKind::BlockComment
        | SyntaxKind::Shebang
        | SyntaxKind::Invalid
    )
  }

  /// Returns whether this is the kind of an expression node.
  #[must_use]
  pub fn is_expr(self) -> bool {
    matches!(
      self,
      SyntaxKind::ExprNil
        | SyntaxKind::ExprTrue
        | SyntaxKind::ExprFalse
        | SyntaxKind::ExprNumber
        | SyntaxKind::ExprString
        | SyntaxKind::ExprVararg
        | SyntaxKind::ExprFunction
        | SyntaxKind::ExprTable
        | SyntaxKind::ExprBinary
        | SyntaxKind::ExprUnary
        | SyntaxKind::ExprParen
        | SyntaxKind::ExprName
        | SyntaxKind::ExprIndex
        | SyntaxKind::ExprFieldGet
        | SyntaxKind::ExprMethodCall
        | SyntaxKind::ExprCall
        | SyntaxKind::ExprLambda
        | SyntaxKind::ExprBlockLambda
    )
  }

  /// The fixed text of this kind of token, if it has one.
  #[must_use]
  pub fn token_text(self) -> Option<&'static str> {
    let &(bs, _) =
      Self::PUNCTUATION.iter().chain(Self::KEYWORDS.iter()).find(|&&(_, sk)| sk == self)?;
    std::str::from_utf8(bs).ok()
  }

  /// A short description, for error messages.
  #[must_use]
  pub fn desc(self) -> &'static str {
    match self {
      SyntaxKind::Name => "a name",
      SyntaxKind::Number => "a number",
      SyntaxKind::String | SyntaxKind::LongString => "a string",
      SyntaxKind::Whitespace => "whitespace",
      SyntaxKind::LineComment | SyntaxKind::BlockComment | SyntaxKind::Shebang => "a comment",
      SyntaxKind::Invalid => "invalid bytes",
      _ => "a syntax construct",
    }
  }
}

impl token::Triviable for SyntaxKind {
  fn is_trivia(&self) -> bool {
    SyntaxKind::is_trivia(*self)
  }
}

/// The MLua language, for `rowan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MLua {}

impl rowan::Language for MLua {
  type Kind = SyntaxKind;

  fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
    SyntaxKind::ALL[usize::from(raw.0)]
  }

  fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
    rowan::SyntaxKind(kind as u16)
  }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
  fn from(kind: SyntaxKind) -> Self {
    rowan::SyntaxKind(kind as u16)
  }
}

pub type SyntaxNode = rowan::SyntaxNode<MLua>;
pub type SyntaxToken = rowan::SyntaxToken<MLua>;
pub type SyntaxElement = rowan::SyntaxElement<MLua>;
