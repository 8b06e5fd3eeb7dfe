//! A task runner for the repo based on the [xtask spec](https://github.com/matklad/cargo-xtask).

use pico_args::Arguments;
use std::path::Path;
use std::{env, process::Command};

#[derive(Debug, Clone, Copy)]
enum Cmd {
  Help,
  Ci,
}

struct CmdSpec {
  name: &'static str,
  desc: &'static str,
}

impl Cmd {
  const VALUES: [Cmd; 2] = [Cmd::Help, Cmd::Ci];

  fn spec(self) -> CmdSpec {
    match self {
      Cmd::Help => CmdSpec { name: "help", desc: "show this help" },
      Cmd::Ci => CmdSpec { name: "ci", desc: "check formatting, lint, and test" },
    }
  }
}

impl std::str::FromStr for Cmd {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Cmd::VALUES.iter().find(|c| c.spec().name == s).copied().ok_or(())
  }
}

fn show_help() {
  println!("usage:");
  println!("  cargo xtask <command>");
  println!();
  println!("commands:");
  for c in Cmd::VALUES {
    let spec = c.spec();
    println!("  {}", spec.name);
    println!("    {}", spec.desc);
  }
}

fn finish_args(args: Arguments) {
  let args = args.finish();
  assert!(args.is_empty(), "unused args: {args:?}");
}

fn run(c: &mut Command) {
  let mut sp = c.spawn().expect("spawn cmd");
  let w = sp.wait().expect("wait for cmd");
  assert!(w.success());
}

fn run_ci() {
  run(Command::new("cargo").args(["build", "--locked"]));
  run(Command::new("cargo").args(["fmt", "--", "--check"]));
  run(Command::new("cargo").args(["clippy", "--locked"]));
  run(Command::new("cargo").args(["clippy", "--locked", "--tests"]));
  run(Command::new("cargo").args(["test", "--locked"]));
}

fn main() {
  let mut args = Arguments::from_env();
  if args.contains(["-h", "--help"]) {
    show_help();
    return;
  }
  let Some(cmd) = args.subcommand().expect("subcommand") else {
    show_help();
    return;
  };
  let cmd = cmd.parse::<Cmd>().expect("parse cmd");
  let dir = Path::new(env!("CARGO_MANIFEST_DIR")).parent().expect("parent");
  env::set_current_dir(dir).expect("set dir");
  finish_args(args);
  match cmd {
    Cmd::Help => show_help(),
    Cmd::Ci => run_ci(),
  }
}
