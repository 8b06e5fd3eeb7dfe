//! Lambdas.

use crate::check::check;

#[test]
fn expr() {
  check("local f = (x, y) -> x + y", "local f = function(x, y)return x + y end");
}

#[test]
fn block() {
  check("(x, y) => print(x+y) end", "function(x, y)print(x+y) end");
}

#[test]
fn no_params() {
  check("local f = () -> 1", "local f = function()return 1 end");
}

#[test]
fn no_params_spaced() {
  check("local f = ( ) -> 1", "local f = function()return 1 end");
}

#[test]
fn vararg() {
  check("local f = (...) -> select('#', ...)", "local f = function(...)return select('#', ...) end");
}

#[test]
fn named_and_vararg() {
  check("local f = (a, ...) -> a", "local f = function(a, ...)return a end");
}

#[test]
fn argument() {
  check("table.sort(t, (a, b) -> a > b)", "table.sort(t, function(a, b)return a > b end)");
}

#[test]
fn block_argument() {
  check("t:each((v) => print(v) end)", "t:each(function(v)print(v) end)");
}

#[test]
fn block_empty() {
  check("local f = (x) => end", "local f = function(x)end");
}

#[test]
fn block_multi_line() {
  check(
    "local f = (a) =>\n  local b = a * 2\n  return b\nend\n",
    "local f = function(a)local b = a * 2\n  return b\nend\n",
  );
}

#[test]
fn nested() {
  check("local add = (a) -> (b) -> a + b", "local add = function(a)return function(b)return a + b end end");
}

#[test]
fn in_block_lambda() {
  check("run((x) => return (y) -> x end)", "run(function(x)return function(y)return x end end)");
}

#[test]
fn table_body() {
  check("local mk = (k) -> { [k] = true }", "local mk = function(k)return { [k] = true } end");
}

#[test]
fn paren_not_lambda() {
  check("local x = (a) + (b)\nprint((f))", "local x = (a) + (b)\nprint((f))");
}
