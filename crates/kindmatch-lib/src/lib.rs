//! kindmatch: match native C numeric types to Fortran kinds.
//!
//! A run probes which native types back each canonical width, fills missing
//! widths with the nearest available one, binds a fixed catalog of semantic
//! tags, and writes a C header and a Fortran module that agree line for line.
//!
//! # Example
//!
//! ```
//! use kindmatch_lib::{Config, GenerationDriver, Platform};
//!
//! let platform = Platform::host();
//! let mut header = Vec::new();
//! let mut module = Vec::new();
//!
//! let driver = GenerationDriver::new(&platform, Config::default());
//! let outcome = driver.run(&mut header, &mut module);
//! let generation = outcome.result.expect("host platform resolves");
//! assert!(generation.binding("HID_T").is_some());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod advisory;
pub mod catalog;
pub mod config;
pub mod driver;
pub mod emit;
pub mod probe;
pub mod resolve;
mod validate;

#[cfg(test)]
pub mod test_utils;

pub use advisory::Advisory;
pub use catalog::{Requirement, SemanticTag, TagBinding};
pub use config::Config;
pub use driver::{Generation, GenerationDriver, Outcome, Phase};
pub use emit::{DualFileEmitter, EmissionRecord, NativeDefine};
pub use kindmatch_core::{CandidateType, Family, Platform};
pub use probe::{Discovery, WidthProbe};
pub use resolve::{Direction, FallbackResolver, SlotTable, WidthSlot};

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The platform declares a width outside the canonical set.
    #[error("{field}: {width} is not a canonical {family} width")]
    NonCanonicalWidth {
        field: &'static str,
        family: Family,
        width: u32,
    },

    /// A native candidate reports a zero size.
    #[error("native {family} candidate `{name}` has zero size")]
    EmptyCandidate { family: Family, name: String },

    /// No width of the family is available, even through fallback.
    #[error("{width}-byte {family} has no corresponding native type and no fallback")]
    FamilyExhausted { family: Family, width: u32 },

    /// A semantic tag found no slot wide enough.
    #[error("{tag}: no {family} kind of at least {min_width} bytes")]
    UnresolvedTag {
        tag: String,
        family: Family,
        min_width: u32,
    },

    #[error("failed to write definitions: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;
