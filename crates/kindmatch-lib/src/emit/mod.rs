//! Paired output of the native header and the foreign module.
//!
//! Every definition goes through [`DualFileEmitter`], so the n-th typedef in
//! the header and the n-th parameter in the module always describe the same tag.

mod emitter;
mod record;
mod template;

pub use emitter::DualFileEmitter;
pub use record::{EmissionRecord, NativeDefine};
