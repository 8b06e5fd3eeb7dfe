//! What the class rules know about the class being lowered.

use mlua_syntax::ast;

/// One entry in the stack of enclosing classes.
pub(crate) struct ClassDescriptor {
  pub(crate) name: String,
  pub(crate) parent: Option<String>,
  /// the instance fields, in declaration order.
  pub(crate) fields: Vec<ast::ClassField>,
  pub(crate) has_constructor: bool,
  /// how many constructors we have lowered so far.
  pub(crate) constructors: usize,
}

impl ClassDescriptor {
  /// The table that lookups missing on the class fall back to. A class with no superclass links
  /// to itself.
  fn link(&self) -> &str {
    self.parent.as_deref().unwrap_or(&self.name)
  }

  /// Creates the class table, makes it the metatable of its instances, and makes calling it
  /// construct an instance via `init`.
  pub(crate) fn preamble(&self) -> String {
    let c = &self.name;
    let p = self.link();
    format!(
      "{c}={{}};{c}.__index={c};setmetatable({c},{{__index={p},__call=function(cls,...)local self=setmetatable({{}},cls)self:init(...)return self;end}})"
    )
  }

  pub(crate) fn static_prefix(&self) -> String {
    format!("{}.", self.name)
  }

  pub(crate) fn method_prefix(&self) -> String {
    format!("{}:", self.name)
  }

  pub(crate) fn init_header(&self) -> String {
    format!("function {}:init", self.name)
  }

  /// The call to the superclass initializer, forwarding the parameters, if there is a superclass.
  pub(crate) fn super_call(&self, params: Option<&str>) -> Option<String> {
    let p = self.parent.as_deref()?;
    let ret = match params {
      None => format!("{p}.init(self)"),
      Some(params) => format!("{p}.init(self, {params})"),
    };
    Some(ret)
  }
}
