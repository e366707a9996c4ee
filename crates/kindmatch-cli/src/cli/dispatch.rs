//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::platform::PlatformArgs;

pub struct GenerateParams {
    pub platform: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub native_file: Option<String>,
    pub foreign_file: Option<String>,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            platform: m.get_one::<PathBuf>("platform").cloned(),
            out_dir: m
                .get_one::<PathBuf>("out_dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            native_file: m.get_one::<String>("native_file").cloned(),
            foreign_file: m.get_one::<String>("foreign_file").cloned(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            platform: p.platform,
            out_dir: p.out_dir,
            native_file: p.native_file,
            foreign_file: p.foreign_file,
        }
    }
}

pub struct CheckParams {
    pub platform: Option<PathBuf>,
    pub verbose: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            platform: m.get_one::<PathBuf>("platform").cloned(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            platform: p.platform,
            report: p.verbose > 0,
        }
    }
}

pub struct PlatformParams {
    pub output: Option<PathBuf>,
    pub compact: bool,
}

impl PlatformParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            output: m.get_one::<PathBuf>("output").cloned(),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<PlatformParams> for PlatformArgs {
    fn from(p: PlatformParams) -> Self {
        Self {
            output: p.output,
            compact: p.compact,
        }
    }
}
