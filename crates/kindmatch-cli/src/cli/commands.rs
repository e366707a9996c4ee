//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("kindmatch")
        .about("Match native C numeric types to Fortran kinds")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(check_command())
        .subcommand(platform_command())
}

/// Write the C header and the Fortran module.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate the C header and the Fortran module")
        .after_help(
            r#"EXAMPLES:
  kindmatch generate                          # host platform, current directory
  kindmatch generate -o build/fortran         # write into build/fortran
  kindmatch generate --platform cross.json    # describe another target"#,
        )
        .arg(platform_arg())
        .arg(out_dir_arg())
        .arg(native_file_arg())
        .arg(foreign_file_arg())
        .arg(verbose_arg())
}

/// Resolve everything without writing files.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Resolve all widths and tags without writing files")
        .after_help(
            r#"EXAMPLES:
  kindmatch check                             # silent on success
  kindmatch check -v                          # print slots and bindings
  kindmatch check --platform cross.json"#,
        )
        .arg(platform_arg())
        .arg(verbose_arg())
}

/// Print the host platform description.
pub fn platform_command() -> Command {
    Command::new("platform")
        .about("Print the host platform description as JSON")
        .after_help(
            r#"EXAMPLES:
  kindmatch platform                          # pretty JSON to stdout
  kindmatch platform -o cross.json            # edit, then pass to --platform"#,
        )
        .arg(output_arg())
        .arg(compact_arg())
}
