//! Single lines written to the output files.

use crate::catalog::TagBinding;

/// Indentation of every statement inside the foreign module.
pub(super) const FOREIGN_INDENT: &str = "        ";

/// A bound tag as written to both files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmissionRecord<'a> {
    pub foreign_name: &'a str,
    pub native_name: &'a str,
    /// Native width symbol, e.g. `c_int_8`.
    pub symbol: &'a str,
    pub kind: u32,
}

impl<'a> From<&'a TagBinding> for EmissionRecord<'a> {
    fn from(binding: &'a TagBinding) -> Self {
        Self {
            foreign_name: &binding.foreign_name,
            native_name: &binding.native_name,
            symbol: &binding.symbol,
            kind: binding.kind,
        }
    }
}

impl EmissionRecord<'_> {
    /// `typedef c_int_8 haddr_t_f;`
    pub fn native_line(&self) -> String {
        format!("typedef {} {};\n", self.symbol, self.native_name)
    }

    /// `INTEGER, PARAMETER :: HADDR_T = 8`
    pub fn foreign_line(&self) -> String {
        parameter_line(self.foreign_name, i64::from(self.kind))
    }
}

pub(super) fn parameter_line(name: &str, value: i64) -> String {
    format!("{FOREIGN_INDENT}INTEGER, PARAMETER :: {name} = {value}\n")
}

/// A native width symbol defined ahead of the typedefs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NativeDefine {
    /// `#define c_int_4 int`
    Alias { symbol: String, native_type: String },
    /// A width with no native type, spelled as two halves.
    Composite { symbol: String, half: String },
}

impl NativeDefine {
    pub fn symbol(&self) -> &str {
        match self {
            Self::Alias { symbol, .. } | Self::Composite { symbol, .. } => symbol,
        }
    }

    pub fn line(&self) -> String {
        match self {
            Self::Alias {
                symbol,
                native_type,
            } => format!("#define {symbol} {native_type}\n"),
            Self::Composite { symbol, half } => {
                format!("typedef struct {{{half} a; {half} b;}} {symbol};\n")
            }
        }
    }
}
