//! Configuration for a generation run.

use std::path::Path;

/// Default name of the native definitions file.
pub const DEFAULT_NATIVE_FILE: &str = "H5f90i_gen.h";
/// Default name of the foreign module file.
pub const DEFAULT_FOREIGN_FILE: &str = "H5fortran_types.f90";
/// Header the native file includes before its definitions.
pub const DEFAULT_INCLUDE: &str = "H5public.h";

/// Configuration for a generation run.
#[derive(Clone, Debug)]
pub struct Config {
    /// File name of the native header; drives the include guard
    pub(crate) native_file: String,
    /// File name of the foreign module; drives the module name
    pub(crate) foreign_file: String,
    /// Header included by the native file, if any
    pub(crate) include: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            native_file: DEFAULT_NATIVE_FILE.to_owned(),
            foreign_file: DEFAULT_FOREIGN_FILE.to_owned(),
            include: Some(DEFAULT_INCLUDE.to_owned()),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the native header file name.
    pub fn native_file(mut self, name: impl Into<String>) -> Self {
        self.native_file = name.into();
        self
    }

    /// Set the foreign module file name.
    pub fn foreign_file(mut self, name: impl Into<String>) -> Self {
        self.foreign_file = name.into();
        self
    }

    /// Set the header included by the native file, or `None` for no include.
    pub fn include(mut self, header: Option<String>) -> Self {
        self.include = header;
        self
    }

    pub fn native_file_name(&self) -> &str {
        &self.native_file
    }

    pub fn foreign_file_name(&self) -> &str {
        &self.foreign_file
    }

    pub fn included_header(&self) -> Option<&str> {
        self.include.as_deref()
    }

    /// Include guard of the native header: `H5f90i_gen.h` becomes `_H5f90i_gen_H`.
    pub fn include_guard(&self) -> String {
        let stem = file_stem(&self.native_file);
        let sanitized: String = stem
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("_{sanitized}_H")
    }

    /// Foreign module name: the upper-cased stem of the foreign file name.
    pub fn module_name(&self) -> String {
        file_stem(&self.foreign_file)
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}

fn file_stem(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
