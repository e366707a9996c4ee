mod cli;
mod commands;

use cli::{CheckParams, GenerateParams, PlatformParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            init_logging(params.verbose);
            commands::generate::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            init_logging(params.verbose);
            commands::check::run(params.into());
        }
        Some(("platform", m)) => {
            let params = PlatformParams::from_matches(m);
            init_logging(0);
            commands::platform::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `RUST_LOG` wins; otherwise `-v` and `-vv` raise the default level.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
