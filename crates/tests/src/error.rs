//! Inputs that do not compile.

use crate::check::fail;

#[test]
fn expected_name() {
  assert_eq!(fail("local = 1"), "1:7: expected a name");
}

#[test]
fn position_on_later_line() {
  let got = fail("local x = 1\nlocal y = = 2\n");
  assert_eq!(got.lines().next(), Some("2:11: expected an expression"));
}

#[test]
fn not_a_call() {
  assert_eq!(fail("x\n"), "2:1: expression statement must be a call or an assignment");
}

#[test]
fn unclosed_class() {
  assert_eq!(fail("class A\n  function f() end\n"), "3:1: expected `end`");
}

#[test]
fn unclosed_string() {
  let got = fail("local s = \"abc\n");
  assert!(got.contains("unclosed string"), "{got}");
}

#[test]
fn lambda_without_body() {
  let got = fail("local f = (x) ->");
  assert!(got.contains("expected an expression"), "{got}");
}

#[test]
fn bad_class_item() {
  let got = fail("class A\n  1\nend\n");
  assert!(got.contains("expected a method, field, or constructor"), "{got}");
}

#[test]
fn trailing_end() {
  let got = fail("print(1)\nend\n");
  assert!(got.contains("trailing token"), "{got}");
}
