// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use iced_folio::logging;

const HELP: &str = "\
Usage: iced_folio [OPTIONS]

Options:
  --data <PATH|URL>       Project list to load (default: assets/projects.json)
  --assets <DIR|URL>      Location of images and the CV (default: assets)
  --config-dir <DIR>      Directory holding settings.toml
  --log-level <LEVEL>     error, warn, info, debug or trace
  -h, --help              Print this help
";

struct Args {
    flags: Flags,
    config_dir: Option<String>,
    log_level: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        flags: Flags {
            data: args.opt_value_from_str("--data")?,
            assets: args.opt_value_from_str("--assets")?,
        },
        config_dir: args.opt_value_from_str("--config-dir")?,
        log_level: args.opt_value_from_str("--log-level")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some(parsed))
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init(args.log_level.as_deref());
    paths::init_cli_override(args.config_dir);

    app::run(args.flags)
}
