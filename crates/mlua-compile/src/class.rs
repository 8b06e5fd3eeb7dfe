//! Lowering class declarations.
//!
//! A class becomes a table whose metatable makes it callable. Methods become functions stored in
//! that table, static fields become assignments to it, and instance fields move into the
//! constructor, which becomes the `init` method.

use crate::FieldOrder;
use crate::descriptor::ClassDescriptor;
use crate::st::St;
use always::always;
use mlua_rewrite::Piece;
use mlua_syntax::ast::{self, AstNode as _};

/// ends each statement put at the top of a constructor. the `;` keeps a body statement that starts
/// with `(` from being read as a call on the statement before it.
const STMT_END: &str = "; ";

pub(crate) fn enter(st: &mut St<'_>, class: &ast::StmtClass) {
  let (Some(class_kw), Some(name)) = (class.class_kw(), class.name()) else {
    always!(false, "class without a header");
    return;
  };
  let parent = class.extends_clause().and_then(|e| e.name());
  let mut fields = Vec::<ast::ClassField>::new();
  let mut has_constructor = false;
  for item in class.items() {
    match item {
      ast::ClassItem::Field(field) if field.static_kw().is_none() => fields.push(field),
      ast::ClassItem::Constructor(_) => has_constructor = true,
      ast::ClassItem::Field(_) | ast::ClassItem::Method(_) => {}
    }
  }
  let desc = ClassDescriptor {
    name: name.text().to_owned(),
    parent: parent.as_ref().map(|p| p.text().to_owned()),
    fields,
    has_constructor,
    constructors: 0,
  };
  log::debug!("enter class {} (parent {:?})", desc.name, desc.parent);
  let header_end = parent.as_ref().unwrap_or(&name);
  if let (Some(start), Some(end)) = (st.idx(&class_kw), st.idx(header_end)) {
    st.rw.replace(start..end + 1, vec![Piece::text(desc.preamble())]);
  }
  st.classes.push(desc);
}

pub(crate) fn exit(st: &mut St<'_>, class: &ast::StmtClass) {
  let desc = st.classes.pop();
  always!(desc.is_some(), "exit class with empty class stack");
  if let Some(desc) = desc {
    log::debug!("exit class {}", desc.name);
  }
  if let Some(end) = class.end_kw().and_then(|tok| st.idx(&tok)) {
    st.rw.delete(end..end + 1);
  }
}

pub(crate) fn method(st: &mut St<'_>, method: &ast::ClassMethod) {
  let Some(desc) = st.classes.last() else {
    always!(false, "method outside of a class");
    return;
  };
  let prefix = if let Some(kw) = method.static_kw() {
    if let Some(idx) = st.idx(&kw) {
      st.rw.delete(idx..idx + 1);
    }
    desc.static_prefix()
  } else {
    desc.method_prefix()
  };
  if let Some(name) = method.name().and_then(|tok| st.idx(&tok)) {
    st.rw.insert_before(name, prefix);
  }
}

pub(crate) fn field(st: &mut St<'_>, field: &ast::ClassField) {
  let Some(desc) = st.classes.last() else {
    always!(false, "field outside of a class");
    return;
  };
  let Some(kw) = field.static_kw() else {
    if !desc.has_constructor {
      let name = field.name();
      let name = name.as_ref().map_or("", |tok| tok.text());
      log::warn!("instance field `{name}` of class `{}` has no constructor to go in", desc.name);
    }
    return;
  };
  let prefix = desc.static_prefix();
  if let Some(idx) = st.idx(&kw) {
    st.rw.delete(idx..idx + 1);
  }
  if let Some(name) = field.name().and_then(|tok| st.idx(&tok)) {
    st.rw.insert_before(name, prefix);
  }
}

pub(crate) fn constructor(st: &mut St<'_>, constructor: &ast::ClassConstructor) {
  let Some(desc) = st.classes.last_mut() else {
    always!(false, "constructor outside of a class");
    return;
  };
  desc.constructors += 1;
  let first = desc.constructors == 1;
  let header = desc.init_header();
  let body = constructor.func_body();
  let params = body.as_ref().and_then(ast::FuncBody::par_list).map(|p| p.syntax().text().to_string());
  let super_call = desc.super_call(params.as_deref());
  let fields = if first {
    desc.fields.clone()
  } else {
    if !desc.fields.is_empty() {
      log::warn!("class `{}` has more than one constructor, fields go in the first", desc.name);
    }
    Vec::new()
  };
  if let Some(kw) = constructor.constructor_kw().and_then(|tok| st.idx(&tok)) {
    st.rw.replace(kw..kw + 1, vec![Piece::text(header)]);
  }
  let mut pieces = Vec::<Piece>::new();
  if let Some(call) = super_call {
    pieces.push(Piece::text(call));
    pieces.push(Piece::text(STMT_END));
  }
  let mut fields = fields;
  if st.options.field_order == FieldOrder::Reverse {
    fields.reverse();
  }
  for field in &fields {
    let Some(span) = st.span(field.syntax()) else { continue };
    pieces.push(Piece::text("self."));
    pieces.push(st.rw.cut(span));
    pieces.push(Piece::text(STMT_END));
  }
  if pieces.is_empty() {
    return;
  }
  let anchor = body.as_ref().and_then(|body| {
    let first = body.block().and_then(|b| ast::first_significant(b.syntax()));
    first.or_else(|| body.end_kw())
  });
  let Some(anchor) = anchor.and_then(|tok| st.idx(&tok)) else {
    always!(false, "constructor without a body");
    return;
  };
  for piece in pieces {
    st.rw.insert_before(anchor, piece);
  }
}
