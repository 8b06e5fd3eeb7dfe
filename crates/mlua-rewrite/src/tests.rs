use crate::{Piece, Rewriter};

fn toks<'a>(texts: &[&'a str]) -> Vec<token::Token<'a, ()>> {
  texts.iter().map(|&text| token::Token { kind: (), text }).collect()
}

#[test]
fn no_edits() {
  let ts = toks(&["local", " ", "x", " ", "=", " ", "1"]);
  let rw = Rewriter::new(&ts);
  assert_eq!(rw.render(), "local x = 1");
}

#[test]
fn insert_order() {
  let ts = toks(&["a", "b"]);
  let mut rw = Rewriter::new(&ts);
  rw.insert_before(1, "1");
  rw.insert_before(1, "2");
  rw.insert_after(0, "3");
  rw.insert_after(1, "4");
  assert_eq!(rw.render(), "a312b4");
}

#[test]
fn replace_keeps_outer_insertions() {
  let ts = toks(&["a", "b", "c", "d"]);
  let mut rw = Rewriter::new(&ts);
  rw.insert_before(1, "<");
  rw.insert_after(2, ">");
  rw.insert_after(1, "dropped");
  rw.replace(1..3, vec![Piece::text("X"), Piece::text("Y")]);
  assert_eq!(rw.render(), "a<XY>d");
}

#[test]
fn delete() {
  let ts = toks(&["a", " ", "static", " ", "b"]);
  let mut rw = Rewriter::new(&ts);
  rw.delete(2..4);
  assert_eq!(rw.render(), "a b");
}

#[test]
fn empty_replace_is_insert() {
  let ts = toks(&["a", "b"]);
  let mut rw = Rewriter::new(&ts);
  rw.replace(1..1, vec![Piece::text("-")]);
  assert_eq!(rw.render(), "a-b");
}

#[test]
fn cut_and_place() {
  let ts = toks(&["x", "=", "1", ";", "f", "(", ")"]);
  let mut rw = Rewriter::new(&ts);
  let piece = rw.cut(0..4);
  rw.insert_after(5, "self.");
  rw.insert_after(5, piece);
  assert_eq!(rw.render(), "f(self.x=1;)");
}

#[test]
fn cut_carries_inner_edits() {
  let ts = toks(&["g", "=", "(", "x", ")", "->", "x", "|", "body"]);
  let mut rw = Rewriter::new(&ts);
  rw.replace(2..3, vec![Piece::text("function(")]);
  rw.replace(4..6, vec![Piece::text(")return ")]);
  rw.insert_after(6, " end");
  let piece = rw.cut(0..7);
  rw.insert_before(8, piece);
  rw.insert_before(8, " ");
  assert_eq!(rw.render(), "|g=function(x)return x end body");
}

#[test]
fn cut_then_inner_edit() {
  let ts = toks(&["a", "b", "c", "d"]);
  let mut rw = Rewriter::new(&ts);
  let piece = rw.cut(1..3);
  rw.replace(2..3, vec![Piece::text("C")]);
  rw.insert_after(3, piece);
  assert_eq!(rw.render(), "adbC");
}

#[test]
fn cuts_reordered() {
  let ts = toks(&["1", "2", "3", "|"]);
  let mut rw = Rewriter::new(&ts);
  let pieces: Vec<_> = (0..3).map(|i| rw.cut(i..i + 1)).collect();
  for piece in pieces.into_iter().rev() {
    rw.insert_after(3, piece);
  }
  assert_eq!(rw.render(), "|321");
}

#[test]
#[should_panic = "conflicts with an earlier edit"]
fn overlapping_replaces() {
  let ts = toks(&["a", "b", "c", "d"]);
  let mut rw = Rewriter::new(&ts);
  rw.replace(0..2, vec![Piece::text("X")]);
  rw.replace(1..3, vec![Piece::text("Y")]);
}

#[test]
#[should_panic = "conflicts with an earlier edit"]
fn replace_straddles_cut() {
  let ts = toks(&["a", "b", "c", "d"]);
  let mut rw = Rewriter::new(&ts);
  let _piece = rw.cut(1..3);
  rw.replace(2..4, vec![Piece::text("Y")]);
}

#[test]
#[should_panic = "conflicts with an earlier edit"]
fn overlapping_cuts() {
  let ts = toks(&["a", "b", "c", "d"]);
  let mut rw = Rewriter::new(&ts);
  let _piece = rw.cut(0..2);
  let _piece = rw.cut(1..3);
}
