//! The lexer and parser keep every byte.

use indoc::indoc;
use mlua_syntax::ast::{self, AstNode as _};
use mlua_syntax::kind::SyntaxKind as SK;

#[track_caller]
fn check_lossless(s: &str) {
  let lex = mlua_lex::get(s);
  let joined: String = lex.tokens.iter().map(|tok| tok.text).collect();
  pretty_assertions::assert_eq!(s, joined);
  let parse = mlua_parse::get(&lex.tokens);
  pretty_assertions::assert_eq!(s, parse.root.syntax().text().to_string());
}

#[test]
fn lossless_ok() {
  check_lossless(indoc! {"
    class A extends B
      static n = 0
      x = (a, b) -> a .. b
      constructor(...)
        -- hi
      end
      static function make() return A() end
    end
    (x) => print(x) end
  "});
}

#[test]
fn lossless_errors() {
  check_lossless("local = = end ) class ( --[[ unclosed");
  check_lossless("\"unclosed\nx = [==[ also unclosed");
  check_lossless("local s = 'a' \u{1}\u{ff} @ $");
}

#[test]
fn contextual_keywords() {
  let lex = mlua_lex::get("class A extends B static x = 1 constructor() end end");
  let words = ["class", "extends", "static", "constructor"];
  assert!(lex.tokens.iter().filter(|tok| words.contains(&tok.text)).all(|tok| tok.kind == SK::Name));
  let parse = mlua_parse::get(&lex.tokens);
  assert!(parse.errors.is_empty(), "{:?}", parse.errors.iter().map(ToString::to_string).collect::<Vec<_>>());
  let block = parse.root.block().unwrap();
  let class = block.syntax().children().find_map(ast::StmtClass::cast).unwrap();
  assert_eq!(class.class_kw().unwrap().text(), "class");
  assert_eq!(class.name().unwrap().text(), "A");
  let extends = class.extends_clause().unwrap();
  assert_eq!(extends.extends_kw().unwrap().text(), "extends");
  assert_eq!(extends.name().unwrap().text(), "B");
  let items: Vec<_> = class.items().collect();
  let [ast::ClassItem::Field(field), ast::ClassItem::Constructor(ctor)] = items.as_slice() else {
    panic!("wrong items: {items:?}");
  };
  assert_eq!(field.static_kw().unwrap().text(), "static");
  assert_eq!(field.name().unwrap().text(), "x");
  assert_eq!(ctor.constructor_kw().unwrap().text(), "constructor");
}

#[test]
fn contextual_words_as_names() {
  let lex = mlua_lex::get("local class, static = 1, 2 print(class.x, static)");
  let parse = mlua_parse::get(&lex.tokens);
  assert!(parse.errors.is_empty());
  let lex = mlua_lex::get("class C static = 1 end");
  let parse = mlua_parse::get(&lex.tokens);
  assert!(parse.errors.is_empty());
  let class = parse.root.block().unwrap().syntax().children().find_map(ast::StmtClass::cast).unwrap();
  let Some(ast::ClassItem::Field(field)) = class.items().next() else { panic!("no field") };
  assert!(field.static_kw().is_none());
  assert_eq!(field.name().unwrap().text(), "static");
}

#[test]
fn arrows() {
  let lex = mlua_lex::get("a->b=>c - > d = > e");
  let kinds: Vec<_> =
    lex.tokens.iter().filter(|tok| !tok.kind.is_trivia()).map(|tok| tok.kind).collect();
  assert_eq!(
    kinds,
    [
      SK::Name,
      SK::MinusGt,
      SK::Name,
      SK::EqGt,
      SK::Name,
      SK::Minus,
      SK::Gt,
      SK::Name,
      SK::Eq,
      SK::Gt,
      SK::Name
    ]
  );
}

#[test]
fn numbers() {
  let lex = mlua_lex::get("3 3.0 3.1416 314.16e-2 0.31416E1 34e1 0x0.1E 0xA23p-4 0X1.921FB54442D18P+1 .5");
  assert!(lex.errors.is_empty());
  let n = lex.tokens.iter().filter(|tok| tok.kind == SK::Number).count();
  assert_eq!(n, 10);
}

#[test]
fn long_brackets() {
  let lex = mlua_lex::get("[==[ a ]] ]=] ]==] --[[ c ]] [=");
  let kinds: Vec<_> =
    lex.tokens.iter().filter(|tok| tok.kind != SK::Whitespace).map(|tok| tok.kind).collect();
  assert_eq!(kinds, [SK::LongString, SK::BlockComment, SK::Invalid]);
  assert_eq!(lex.errors.len(), 1);
  assert_eq!(lex.errors[0].to_string(), "invalid long bracket");
}

#[test]
fn invalid_multibyte_char() {
  let lex = mlua_lex::get("a é b");
  let invalid: Vec<_> = lex.tokens.iter().filter(|tok| tok.kind == SK::Invalid).map(|tok| tok.text).collect();
  assert_eq!(invalid, ["é"]);
  assert_eq!(lex.errors.len(), 1);
}
