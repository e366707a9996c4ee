//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Platform description file (--platform).
pub fn platform_arg() -> Arg {
    Arg::new("platform")
        .long("platform")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Platform description JSON (default: the host)")
}

/// Output directory for generated files (-o/--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .short('o')
        .long("out-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .default_value(".")
        .help("Directory to write both files into")
}

/// Native header file name (--native-file).
pub fn native_file_arg() -> Arg {
    Arg::new("native_file")
        .long("native-file")
        .value_name("NAME")
        .help("File name of the C header [default: H5f90i_gen.h]")
}

/// Foreign module file name (--foreign-file).
pub fn foreign_file_arg() -> Arg {
    Arg::new("foreign_file")
        .long("foreign-file")
        .value_name("NAME")
        .help("File name of the Fortran module [default: H5fortran_types.f90]")
}

/// Output file (-o/--output), stdout when absent.
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write to FILE instead of stdout")
}

/// Compact JSON output (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}
