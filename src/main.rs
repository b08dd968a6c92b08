// SPDX-License-Identifier: MPL-2.0
use interior_gallery::app::{self, paths, Flags};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
interior_gallery - browse interior design projects

USAGE:
  interior_gallery [OPTIONS] [SOURCE]

ARGS:
  SOURCE                  JSON file or http(s) endpoint listing the interiors

OPTIONS:
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml
  --api-key <KEY>         API key sent with remote requests
  --diagnostics-out <FILE>
                          Write an activity report there on exit
  -h, --help              Print this help
";

fn parse_args() -> Result<Option<(Flags, Option<String>)>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let api_key: Option<String> = args.opt_value_from_str("--api-key")?;
    let diagnostics_out: Option<PathBuf> = args.opt_value_from_str("--diagnostics-out")?;
    let source = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some((
        Flags {
            lang,
            source,
            api_key,
            diagnostics_out,
        },
        config_dir,
    )))
}

fn main() -> ExitCode {
    let (flags, config_dir) = match parse_args() {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(config_dir);

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
