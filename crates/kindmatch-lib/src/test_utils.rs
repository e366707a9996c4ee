//! Synthetic platforms for tests.

use std::collections::BTreeMap;

use kindmatch_core::{CandidateType, ForeignKinds, LibrarySizes, NativeTypes, Platform};

/// Default float candidates: x86-64 Linux.
pub const LINUX_REALS: &[(&str, u32)] = &[("long double", 16), ("double", 8), ("float", 4)];

/// Every canonical integer width with a distinct backing type.
pub const ILP32_INTS: &[(&str, u32)] = &[
    ("long long", 8),
    ("long", 4),
    ("int", 4),
    ("short", 2),
    ("char", 1),
];

/// Platform with the given integer candidates and x86-64 Linux floats.
pub fn platform(ints: &[(&str, u32)]) -> Platform {
    platform_with_floats(ints, LINUX_REALS)
}

/// Platform with explicit candidate lists, 8-byte library types and a foreign
/// runtime whose kind identifiers equal byte widths.
pub fn platform_with_floats(ints: &[(&str, u32)], reals: &[(&str, u32)]) -> Platform {
    let candidates = |list: &[(&str, u32)]| -> Vec<CandidateType> {
        list.iter()
            .map(|&(name, size)| CandidateType::new(name, size))
            .collect()
    };
    Platform {
        native: NativeTypes {
            integers: candidates(ints),
            reals: candidates(reals),
        },
        sizes: LibrarySizes {
            size_t: 8,
            hsize_t: 8,
            hssize_t: 8,
            haddr_t: 8,
            off_t: 8,
            hid_t: 8,
        },
        foreign: ForeignKinds {
            integer_kinds: identity_kinds(&[1, 2, 4, 8]),
            real_kinds: identity_kinds(&[4, 8, 16]),
            native_integer: 4,
            native_real: 4,
            native_double: 8,
        },
    }
}

pub fn identity_kinds(widths: &[u32]) -> BTreeMap<u32, u32> {
    widths.iter().map(|&w| (w, w)).collect()
}

/// Text after the first line that starts with `marker`.
pub fn body_after<'a>(text: &'a str, marker: &str) -> &'a str {
    let start = text
        .find(marker)
        .unwrap_or_else(|| panic!("marker `{marker}` not found in:\n{text}"));
    let rest = &text[start..];
    match rest.find('\n') {
        Some(end) => &rest[end + 1..],
        None => "",
    }
}

/// Route library logs through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
