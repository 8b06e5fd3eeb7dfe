//! The command-line interface to the MLua compiler.

mod args;


use args::{ArgsError, Input, output_path};
use mlua_compile::{FieldOrder, Options};
use std::io::{Read as _, Write as _};
use std::path::Path;
use std::process::ExitCode;

const USAGE: &str = "\
usage:
  mlua [<option>...] <file>...

each <file> is compiled to a sibling file with the extension .lua

options:
  -h, --help
    show this help
  -e, --encoding <name>
    the text encoding of input and output files, like utf-8, latin1, or shift_jis
    defaults to utf-8
  -p, --piping
    read a source from stdin and write the result to stdout, instead of using files
  --field-order <order>
    the order of the instance field assignments added to constructors
    <order> may be 'reverse' or 'declaration'
    defaults to 'reverse'
";

fn main() -> ExitCode {
  let args = match get_args() {
    Err(e) => {
      eprintln!("error parsing args: {e}");
      eprintln!();
      eprint!("{USAGE}");
      return ExitCode::FAILURE;
    }
    Ok(None) => return ExitCode::SUCCESS,
    Ok(Some(x)) => x,
  };
  let n = match &args.input {
    Input::Piping => usize::from(!pipe(&args)),
    Input::Files(files) => files.iter().filter(|file| !compile_file(&args, Path::new(file))).count(),
  };
  if n == 0 {
    ExitCode::SUCCESS
  } else {
    let s = if n == 1 { "" } else { "s" };
    eprintln!("{n} failure{s}");
    ExitCode::FAILURE
  }
}

struct Args {
  encoding: &'static encoding_rs::Encoding,
  options: Options,
  input: Input,
}

fn get_args() -> Result<Option<Args>, ArgsError> {
  env_logger::init();
  let mut args = pico_args::Arguments::from_env();
  if args.contains(["-h", "--help"]) {
    print!("{USAGE}");
    return Ok(None);
  }
  let piping = args.contains(["-p", "--piping"]);
  let encoding: Option<String> = args.opt_value_from_str(["-e", "--encoding"])?;
  let encoding = match encoding {
    None => encoding_rs::UTF_8,
    Some(label) => {
      encoding_rs::Encoding::for_label(label.as_bytes()).ok_or(ArgsError::Encoding(label))?
    }
  };
  let field_order = args.opt_value_from_str::<_, FieldOrder>("--field-order")?;
  let options = Options { field_order: field_order.unwrap_or_default() };
  let input = Input::new(piping, args.finish())?;
  Ok(Some(Args { encoding, options, input }))
}

/// Decodes, compiles, and encodes. Reports errors against `name`, returning `None` on error.
fn compile_bytes(args: &Args, name: &str, bytes: &[u8]) -> Option<Vec<u8>> {
  let (src, had_errors) = args.encoding.decode_with_bom_removal(bytes);
  if had_errors {
    log::warn!("{name}: malformed {} replaced", args.encoding.name());
  }
  match mlua_compile::compile_with(&src, args.options) {
    Ok(out) => {
      let (bytes, _, had_errors) = args.encoding.encode(&out);
      if had_errors {
        log::warn!("{name}: characters not representable in {} replaced", args.encoding.name());
      }
      Some(bytes.into_owned())
    }
    Err(e) => {
      for line in e.display(&src).to_string().lines() {
        eprintln!("{name}:{line}");
      }
      None
    }
  }
}

/// Returns whether it succeeded.
fn pipe(args: &Args) -> bool {
  let mut bytes = Vec::new();
  if let Err(e) = std::io::stdin().read_to_end(&mut bytes) {
    log::error!("couldn't read stdin: {e}");
    return false;
  }
  let Some(out) = compile_bytes(args, "<stdin>", &bytes) else { return false };
  let mut stdout = std::io::stdout().lock();
  if let Err(e) = stdout.write_all(&out).and_then(|()| stdout.flush()) {
    log::error!("couldn't write stdout: {e}");
    return false;
  }
  true
}

/// Returns whether it succeeded.
fn compile_file(args: &Args, path: &Path) -> bool {
  let name = path.display().to_string();
  let Some(out_path) = output_path(path) else {
    log::error!("{name}: already has the .lua extension, refusing to overwrite it");
    return false;
  };
  let bytes = match std::fs::read(path) {
    Ok(x) => x,
    Err(e) => {
      log::error!("{name}: couldn't read: {e}");
      return false;
    }
  };
  let Some(out) = compile_bytes(args, &name, &bytes) else { return false };
  if let Err(e) = std::fs::write(&out_path, out) {
    log::error!("{}: couldn't write: {e}", out_path.display());
    return false;
  }
  log::info!("{name} -> {}", out_path.display());
  true
}
