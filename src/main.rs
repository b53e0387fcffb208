// SPDX-License-Identifier: MPL-2.0
use codecast::app::{cli, paths};
use codecast::config;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match cli::parse(pico_args::Arguments::from_env()) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}\n\n{}", cli::HELP);
            return ExitCode::FAILURE;
        }
    };

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    paths::init_cli_overrides(args.data_dir.clone(), args.config_dir.clone());
    let (config, _warning) = config::load();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli::run(&args, &config, None, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
