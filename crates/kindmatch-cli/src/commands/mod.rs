pub mod check;
pub mod generate;
pub mod platform;

use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use kindmatch_lib::{Advisory, Platform};

/// Failure to obtain a platform description.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read platform file '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid platform file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The platform described by `path`, or the host when absent.
pub fn load_platform(path: Option<&Path>) -> Result<Platform, LoadError> {
    let Some(path) = path else {
        log::info!("using host platform");
        return Ok(Platform::host());
    };
    let json = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("using platform file {}", path.display());
    Platform::from_json(&json).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn report_advisories(advisories: &[Advisory]) {
    for advisory in advisories {
        println!("warning: {advisory}");
    }
}

/// Print `message` and stop with status 1.
pub fn fail(message: impl Display) -> ! {
    println!("error: {message}");
    println!("Quitting....");
    std::process::exit(1);
}

#[cfg(test)]
mod test_fixtures;
