#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for kindmatch.
//!
//! Two layers:
//! - **Width layer**: numeric families and their canonical byte widths
//! - **Capability layer**: the [`Platform`] description the generator runs against
//!
//! Everything here is plain data. Resolution and emission live in `kindmatch-lib`.

use std::fmt;

mod platform;

pub use platform::{CandidateType, ForeignKinds, LibrarySizes, NativeTypes, Platform};

// ============================================================================
// Width Layer
// ============================================================================

/// Canonical integer widths, ascending.
pub const INTEGER_WIDTHS: [u32; 4] = [1, 2, 4, 8];

/// Canonical floating-point widths, ascending.
pub const FLOAT_WIDTHS: [u32; 3] = [4, 8, 16];

/// The extended-precision float width. Its slot may be disabled for a run.
pub const EXTENDED_FLOAT_WIDTH: u32 = 16;

/// Numeric type family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    Integer,
    Float,
}

impl Family {
    /// Both families in generation order.
    pub const ALL: [Family; 2] = [Family::Integer, Family::Float];

    /// Canonical widths for this family, ascending.
    pub fn canonical_widths(self) -> &'static [u32] {
        match self {
            Family::Integer => &INTEGER_WIDTHS,
            Family::Float => &FLOAT_WIDTHS,
        }
    }

    pub fn is_canonical(self, width: u32) -> bool {
        self.canonical_widths().contains(&width)
    }

    /// Prefix of the native width symbols (`c_int_4`, `c_float_8`).
    pub fn symbol_prefix(self) -> &'static str {
        match self {
            Family::Integer => "int",
            Family::Float => "float",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Integer => f.write_str("integer"),
            Family::Float => f.write_str("float"),
        }
    }
}
