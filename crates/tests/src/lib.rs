//! End-to-end tests.

#![cfg(test)]
#![allow(clippy::disallowed_methods, clippy::needless_raw_string_hashes)]

mod check;
mod class;
mod error;
mod lambda;
mod misc;
mod syntax;
