//! The internal impl.

use crate::error::Kind;
use crate::st::St;
use mlua_syntax::kind::SyntaxKind as SK;

pub(crate) fn token(st: &mut St<'_>, b: u8) -> SK {
  if is_ws(b) {
    st.bump();
    st.bump_while(is_ws);
    return SK::Whitespace;
  }
  if b == b'#' && st.cur_idx() == 0 && st.nth(1) == Some(b'!') {
    st.bump_while(|b| b != b'\n');
    return SK::Shebang;
  }
  if st.eat_prefix(b"--") {
    if let Some(level) = long_bracket_open(st) {
      long_bracket_body(st, level, Kind::UnclosedComment);
      return SK::BlockComment;
    }
    st.bump_while(|b| b != b'\n');
    return SK::LineComment;
  }
  // put this before PUNCTUATION since that contains [
  if b == b'[' {
    if let Some(level) = long_bracket_open(st) {
      long_bracket_body(st, level, Kind::UnclosedLongString);
      return SK::LongString;
    }
    if st.nth(1) == Some(b'=') {
      st.err(Kind::InvalidLongBracket);
      st.bump();
      st.bump_while(|b| b == b'=');
      return SK::Invalid;
    }
  }
  // put this before PUNCTUATION since that contains .
  if b.is_ascii_digit() || (b == b'.' && st.nth(1).is_some_and(|b| b.is_ascii_digit())) {
    numeral(st, b);
    return SK::Number;
  }
  if let Some(&(_, sk)) = SK::PUNCTUATION.iter().find(|&(bs, _)| st.eat_prefix(bs)) {
    return sk;
  }
  if is_name_start(b) {
    let start = st.mark();
    st.bump();
    st.bump_while(is_name_continue);
    return SK::keyword(st.non_empty_since(start)).unwrap_or(SK::Name);
  }
  if b == b'"' || b == b'\'' {
    st.bump();
    short_string(st, b);
    return SK::String;
  }
  st.err(Kind::InvalidBytes);
  st.next_str();
  SK::Invalid
}

/// If at `[` followed by zero or more `=` and another `[`, consumes all that and returns the number
/// of `=`. Else consumes nothing.
fn long_bracket_open(st: &mut St<'_>) -> Option<usize> {
  if st.cur() != Some(b'[') {
    return None;
  }
  let mut n = 1usize;
  while st.nth(n) == Some(b'=') {
    n += 1;
  }
  if st.nth(n) != Some(b'[') {
    return None;
  }
  for _ in 0..=n {
    st.bump();
  }
  Some(n - 1)
}

/// Consumes up to and including the closing bracket with the given level.
fn long_bracket_body(st: &mut St<'_>, level: usize, unclosed: Kind) {
  while let Some(b) = st.cur() {
    if b == b']' && (1..=level).all(|n| st.nth(n) == Some(b'=')) && st.nth(level + 1) == Some(b']')
    {
      for _ in 0..level + 2 {
        st.bump();
      }
      return;
    }
    st.bump();
  }
  st.err(unclosed);
}

/// Consumes a numeral the way Lua does: greedily take anything that could continue a number, and
/// let a sign follow an exponent marker.
fn numeral(st: &mut St<'_>, first: u8) {
  let hex = first == b'0' && matches!(st.nth(1), Some(b'x' | b'X'));
  let exp: &[u8] = if hex { b"pP" } else { b"eE" };
  if hex {
    st.bump();
  }
  st.bump();
  while let Some(b) = st.cur() {
    if exp.contains(&b) {
      st.bump();
      if let Some(b'+' | b'-') = st.cur() {
        st.bump();
      }
    } else if is_name_continue(b) || b == b'.' {
      st.bump();
    } else {
      break;
    }
  }
}

/// Before this function, we have already consumed the opening quote.
fn short_string(st: &mut St<'_>, delim: u8) {
  while let Some(b) = st.cur() {
    if b == delim {
      st.bump();
      return;
    }
    match b {
      b'\\' => {
        st.bump();
        if st.cur().is_some() {
          st.bump();
        }
      }
      b'\n' | b'\r' => break,
      _ => st.bump(),
    }
  }
  st.err(Kind::UnclosedString);
}

fn is_name_start(b: u8) -> bool {
  b.is_ascii_alphabetic() || b == b'_'
}

fn is_name_continue(b: u8) -> bool {
  b.is_ascii_alphanumeric() || b == b'_'
}

fn is_ws(b: u8) -> bool {
  matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}
