//! Non-fatal notices raised during a run.

use std::fmt;

/// A condition worth reporting that does not stop generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advisory {
    /// The foreign runtime declares an extended-precision REAL the native
    /// side cannot represent, so that width is dropped from both files.
    ExtendedFloatDisabled { width: u32 },
    /// A tag found nothing at least `requested` bytes wide and took the
    /// nearest narrower slot instead.
    TagNarrowed {
        tag: String,
        requested: u32,
        bound: u32,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtendedFloatDisabled { width } => write!(
                f,
                "foreign REAL is {width} bytes, no corresponding native floating type; \
                 disabling {width}-byte REALs"
            ),
            Self::TagNarrowed {
                tag,
                requested,
                bound,
            } => write!(
                f,
                "{tag}: no {requested}-byte kind available, using {bound} bytes"
            ),
        }
    }
}
