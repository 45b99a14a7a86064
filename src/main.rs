// SPDX-License-Identifier: MPL-2.0
use terra_compare::app::{self, paths, Flags};
use terra_compare::ui::compare::CompareArgs;

const HELP: &str = "\
terra_compare: before/after image comparison

USAGE:
  terra_compare [OPTIONS]

OPTIONS:
  --before SRC          Image shown as the \"before\" layer (path or URL)
  --after SRC           Image shown as the \"after\" layer (path or URL)
  --alt TEXT            Accessible description of both images
  --accent HEX          Divider accent color, e.g. #22c55e
  --theme NAME          satellite, forest or ocean
  --before-label TEXT   Badge text of the before layer
  --after-label TEXT    Badge text of the after layer
  --lang LANG           UI language, e.g. en-US or fr
  --config-dir DIR      Directory holding settings.toml
  --data-dir DIR        Directory holding the session state
  -h, --help            Print this help
";

fn init_logging() {
    let default_level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // RUST_LOG, when set, overrides the default level
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        compare: CompareArgs {
            before: args.opt_value_from_str("--before")?,
            after: args.opt_value_from_str("--after")?,
            alt: args.opt_value_from_str("--alt")?,
            accent: args.opt_value_from_str("--accent")?,
            theme: args.opt_value_from_str("--theme")?,
            before_label: args.opt_value_from_str("--before-label")?,
            after_label: args.opt_value_from_str("--after-label")?,
        },
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
