use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use kindmatch_lib::{Advisory, Config, GenerationDriver, Platform};

use super::{fail, load_platform, report_advisories};

pub struct GenerateArgs {
    pub platform: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub native_file: Option<String>,
    pub foreign_file: Option<String>,
}

impl GenerateArgs {
    fn config(&self) -> Config {
        let mut config = Config::new();
        if let Some(name) = &self.native_file {
            config = config.native_file(name.clone());
        }
        if let Some(name) = &self.foreign_file {
            config = config.foreign_file(name.clone());
        }
        config
    }
}

pub fn run(args: GenerateArgs) {
    let platform = load_platform(args.platform.as_deref()).unwrap_or_else(|e| fail(e));

    let (advisories, result) = generate(&args, &platform);
    report_advisories(&advisories);
    match result {
        Ok(records) => log::info!(
            "wrote {records} definitions to {}",
            args.out_dir.display()
        ),
        Err(e) => fail(e),
    }
}

/// Write both files into `args.out_dir`. Advisories come back even on failure.
pub fn generate(
    args: &GenerateArgs,
    platform: &Platform,
) -> (Vec<Advisory>, kindmatch_lib::Result<usize>) {
    let config = args.config();
    let native_path = args.out_dir.join(config.native_file_name());
    let foreign_path = args.out_dir.join(config.foreign_file_name());

    // Creating the files truncates them, so a bad platform must fail first
    let driver = GenerationDriver::new(platform, config);
    if let Err(e) = driver.validate() {
        return (Vec::new(), Err(e));
    }

    let open = || -> std::io::Result<(File, File)> {
        fs::create_dir_all(&args.out_dir)?;
        Ok((File::create(&native_path)?, File::create(&foreign_path)?))
    };
    let (native, foreign) = match open() {
        Ok(files) => files,
        Err(e) => return (Vec::new(), Err(e.into())),
    };

    let outcome = driver.run(BufWriter::new(native), BufWriter::new(foreign));
    (
        outcome.advisories,
        outcome.result.map(|generation| generation.records()),
    )
}
