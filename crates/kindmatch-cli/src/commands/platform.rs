use std::fs;
use std::path::PathBuf;

use kindmatch_lib::Platform;

use super::fail;

pub struct PlatformArgs {
    pub output: Option<PathBuf>,
    pub compact: bool,
}

pub fn run(args: PlatformArgs) {
    let json = render(&Platform::host(), args.compact).unwrap_or_else(|e| fail(e));

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, format!("{json}\n")) {
                fail(format!("failed to write '{}': {e}", path.display()));
            }
        }
        None => println!("{json}"),
    }
}

pub fn render(platform: &Platform, compact: bool) -> serde_json::Result<String> {
    if compact {
        platform.to_json()
    } else {
        platform.to_json_pretty()
    }
}
