//! Helpers for checking compilation.

use mlua_compile::Options;

/// Compiles `input` with the options and asserts the output is `want`.
#[track_caller]
pub(crate) fn check_with(input: &str, options: Options, want: &str) {
  match mlua_compile::compile_with(input, options) {
    Ok(got) => pretty_assertions::assert_eq!(want, got),
    Err(e) => panic!("syntax error:\n{}", e.display(input)),
  }
}

/// Like [`check_with`] with the default options.
#[track_caller]
pub(crate) fn check(input: &str, want: &str) {
  check_with(input, Options::default(), want);
}

/// Asserts that `input` compiles to itself.
#[track_caller]
pub(crate) fn check_unchanged(input: &str) {
  check(input, input);
}

/// Asserts that `input` fails to compile and returns the displayed errors.
#[track_caller]
pub(crate) fn fail(input: &str) -> String {
  match mlua_compile::compile(input) {
    Ok(got) => panic!("unexpectedly compiled to:\n{got}"),
    Err(e) => e.display(input).to_string(),
  }
}

/// The code a class header becomes.
pub(crate) fn preamble(name: &str, link: &str) -> String {
  format!(
    "{name}={{}};{name}.__index={name};setmetatable({name},{{__index={link},__call=function(cls,...)local self=setmetatable({{}},cls)self:init(...)return self;end}})"
  )
}
