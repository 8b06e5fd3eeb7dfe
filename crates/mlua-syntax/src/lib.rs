//! Concrete syntax for MLua, which is Lua with classes and lambdas.

#![allow(missing_debug_implementations, missing_docs)]

#[allow(clippy::pedantic, missing_debug_implementations, missing_docs)]
pub mod ast;

#[allow(clippy::pedantic, missing_debug_implementations, missing_docs)]
pub mod kind;
