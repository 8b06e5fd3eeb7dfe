//! Properties of compilation as a whole.

use crate::check::{check, check_unchanged};
use indoc::indoc;

const PLAIN: &str = indoc! {r#"
  #!/usr/bin/env lua
  -- a comment
  --[==[ long
  comment ]==]
  local t = { 1, 2.5e3, 0x1p4, .5, [[long
  string]], key = "v", ["k"] = 'w\'s'; }
  local function f(a, ...)
    for i = 1, #t do
      if t[i] ~= nil and not false then
        goto continue
      elseif a then
        break
      else
        a = a .. "x"
      end
      ::continue::
    end
    for k, v in pairs(t) do print(k, v) end
    repeat a = a // 2 until a < 1
    while a do a = nil end
    do local x <const> = 1 end
    return a, ...
  end
  function t.m:meth() return self end
  print(f(1):len(), t.key, -2 ^ 2, 1 << 2 | 3 & ~4, ("s"):rep(2))
"#};

#[test]
fn plain_lua_unchanged() {
  check_unchanged(PLAIN);
}

#[test]
fn empty() {
  check_unchanged("");
}

#[test]
fn only_trivia() {
  check_unchanged("  -- nothing here\n\n");
}

#[test]
fn deterministic() {
  let input = indoc! {"
    class A extends B
      x = (v) -> v
      y = 2
      constructor(a)
      end
    end
  "};
  let fst = mlua_compile::compile(input).expect("should compile");
  let snd = mlua_compile::compile(input).expect("should compile");
  pretty_assertions::assert_eq!(fst, snd);
}

#[test]
fn comments_kept() {
  check(
    "-- before\nlocal f = (x) -> x -- after\n--[[ block ]] print(f)\n",
    "-- before\nlocal f = function(x)return x end -- after\n--[[ block ]] print(f)\n",
  );
}

#[test]
fn unicode_kept() {
  check("local s = \"héllo\" -- ✓\nlocal f = () -> s\n", "local s = \"héllo\" -- ✓\nlocal f = function()return s end\n");
}
