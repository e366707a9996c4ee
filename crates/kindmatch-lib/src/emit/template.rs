//! Fixed boilerplate around the generated definitions.

use super::record::FOREIGN_INDENT;
use crate::config::Config;

const NOTICE: &str = "This file is automatically generated by kindmatch at build time.";

pub(super) fn native_header(config: &Config) -> String {
    let guard = config.include_guard();
    let mut out = format!("/* {NOTICE} */\n\n#ifndef {guard}\n#define {guard}\n\n");
    if let Some(header) = config.included_header() {
        out.push_str(&format!("#include \"{header}\"\n\n"));
    }
    out
}

pub(super) fn native_footer(config: &Config) -> String {
    format!("\n#endif /* {} */\n", config.include_guard())
}

pub(super) fn foreign_header(config: &Config) -> String {
    format!(
        "! {NOTICE}\n\
         ! Kind parameters matching the typedefs of {native}.\n\
         !\n\
         {FOREIGN_INDENT}MODULE {module}\n\n",
        native = config.native_file_name(),
        module = config.module_name(),
    )
}

pub(super) fn foreign_footer(config: &Config) -> String {
    format!(
        "\n{FOREIGN_INDENT}INTEGER(SIZE_T), PARAMETER :: OBJECT_NAMELEN_DEFAULT_F = -1\n\
         \n\
         {FOREIGN_INDENT}END MODULE {}\n",
        config.module_name(),
    )
}
