//! Records edits against a token sequence, then renders the edited text.
//!
//! The tokens themselves are never modified. Edits are addressed by token index and are recorded
//! as insertions before or after a token, replacements of a run of tokens, and cuts. A cut removes
//! a run of tokens from where it is and returns a [`Piece`] that renders it, edits within it
//! included, wherever the piece is placed.
//!
//! Replacements may not overlap each other. A replacement may lie wholly inside a cut but may not
//! straddle its boundary, and cuts may not overlap anything but replacements they wholly contain.
//! An edit that breaks these rules is reported and dropped.

#![deny(clippy::pedantic, missing_debug_implementations, rust_2018_idioms)]

#[cfg(test)]
mod tests;

use always::always;
use rustc_hash::FxHashMap;
use std::ops::Range;

/// Something to render in place of, or next to, some tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece(Repr);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Repr {
  Text(String),
  Span(Range<usize>),
}

impl Piece {
  /// A piece of literal text.
  #[must_use]
  pub fn text<S: Into<String>>(s: S) -> Self {
    Self(Repr::Text(s.into()))
  }
}

impl From<String> for Piece {
  fn from(s: String) -> Self {
    Self::text(s)
  }
}

impl From<&str> for Piece {
  fn from(s: &str) -> Self {
    Self::text(s)
  }
}

#[derive(Debug)]
struct Replace {
  end: usize,
  pieces: Vec<Piece>,
}

/// A buffer of edits against a token sequence.
#[derive(Debug)]
pub struct Rewriter<'a, K> {
  tokens: &'a [token::Token<'a, K>],
  before: FxHashMap<usize, Vec<Piece>>,
  after: FxHashMap<usize, Vec<Piece>>,
  replaces: FxHashMap<usize, Replace>,
  /// start to end
  cuts: FxHashMap<usize, usize>,
  /// for each token, the start of the replacement covering it
  replaced_by: Vec<Option<usize>>,
  /// for each token, the start of the cut covering it
  cut_by: Vec<Option<usize>>,
}

impl<'a, K> Rewriter<'a, K> {
  /// Returns a new rewriter with no edits.
  #[must_use]
  pub fn new(tokens: &'a [token::Token<'a, K>]) -> Self {
    Self {
      tokens,
      before: FxHashMap::default(),
      after: FxHashMap::default(),
      replaces: FxHashMap::default(),
      cuts: FxHashMap::default(),
      replaced_by: vec![None; tokens.len()],
      cut_by: vec![None; tokens.len()],
    }
  }

  /// Inserts the piece before the token. Successive insertions at the same token render in the
  /// order they were made.
  pub fn insert_before<P: Into<Piece>>(&mut self, idx: usize, piece: P) {
    if self.in_bounds(idx..idx + 1) {
      self.before.entry(idx).or_default().push(piece.into());
    }
  }

  /// Inserts the piece after the token. Successive insertions at the same token render in the
  /// order they were made.
  pub fn insert_after<P: Into<Piece>>(&mut self, idx: usize, piece: P) {
    if self.in_bounds(idx..idx + 1) {
      self.after.entry(idx).or_default().push(piece.into());
    }
  }

  /// Removes the tokens in the range.
  pub fn delete(&mut self, range: Range<usize>) {
    self.replace(range, Vec::new());
  }

  /// Replaces the tokens in the range with the pieces.
  ///
  /// Insertions before the first token and after the last token of the range are kept. Other
  /// insertions inside the range are dropped with it. An empty range is an insertion before its
  /// start.
  pub fn replace(&mut self, range: Range<usize>, pieces: Vec<Piece>) {
    if range.is_empty() {
      if range.start == self.tokens.len() {
        always!(false, "cannot insert at the end of the tokens");
        return;
      }
      for piece in pieces {
        self.insert_before(range.start, piece);
      }
      return;
    }
    if !self.in_bounds(range.clone()) {
      return;
    }
    let cut = self.cut_by[range.start];
    let ok = range.clone().all(|i| self.replaced_by[i].is_none() && self.cut_by[i] == cut);
    always!(ok, "replace of {range:?} conflicts with an earlier edit");
    if !ok {
      return;
    }
    for i in range.clone() {
      self.replaced_by[i] = Some(range.start);
    }
    self.replaces.insert(range.start, Replace { end: range.end, pieces });
  }

  /// Removes the tokens in the range, returning a piece that renders them, with any edits inside
  /// them applied.
  #[must_use]
  pub fn cut(&mut self, range: Range<usize>) -> Piece {
    let ret = Piece(Repr::Span(range.clone()));
    if range.is_empty() || !self.in_bounds(range.clone()) {
      return Piece::text(String::new());
    }
    let ok = range.clone().all(|i| {
      self.cut_by[i].is_none()
        && self.replaced_by[i].is_none_or(|start| {
          start >= range.start && self.replaces.get(&start).is_some_and(|r| r.end <= range.end)
        })
    });
    always!(ok, "cut of {range:?} conflicts with an earlier edit");
    if !ok {
      return Piece::text(String::new());
    }
    for i in range.clone() {
      self.cut_by[i] = Some(range.start);
    }
    self.cuts.insert(range.start, range.end);
    ret
  }

  /// Renders the tokens with all edits applied.
  #[must_use]
  pub fn render(&self) -> String {
    let mut buf = String::new();
    self.write(&mut buf, 0..self.tokens.len(), None);
    buf
  }

  fn in_bounds(&self, range: Range<usize>) -> bool {
    let ok = range.start <= range.end && range.end <= self.tokens.len();
    always!(ok, "{range:?} is out of bounds for {} tokens", self.tokens.len());
    ok
  }

  /// `cut_start` is the start of the cut being rendered as a piece, if any. that cut is rendered
  /// rather than skipped.
  fn write(&self, buf: &mut String, range: Range<usize>, cut_start: Option<usize>) {
    let mut i = range.start;
    while i < range.end {
      if cut_start != Some(i) {
        if let Some(&end) = self.cuts.get(&i) {
          i = end;
          continue;
        }
      }
      self.write_pieces(buf, self.before.get(&i));
      if let Some(replace) = self.replaces.get(&i) {
        for piece in &replace.pieces {
          self.write_piece(buf, piece);
        }
        self.write_pieces(buf, self.after.get(&(replace.end - 1)));
        i = replace.end;
        continue;
      }
      buf.push_str(self.tokens[i].text);
      self.write_pieces(buf, self.after.get(&i));
      i += 1;
    }
  }

  fn write_pieces(&self, buf: &mut String, pieces: Option<&Vec<Piece>>) {
    for piece in pieces.into_iter().flatten() {
      self.write_piece(buf, piece);
    }
  }

  fn write_piece(&self, buf: &mut String, piece: &Piece) {
    match &piece.0 {
      Repr::Text(s) => buf.push_str(s),
      Repr::Span(range) => self.write(buf, range.clone(), Some(range.start)),
    }
  }
}
