//! Platform capability description.
//!
//! A [`Platform`] is supplied before a generation run begins. It lists the
//! native candidate types in preference order, the byte sizes of the native
//! library's semantic types, and the widths the foreign runtime declares kinds
//! for. Nothing in here is probed lazily: a run is a pure function of this value.

use std::collections::BTreeMap;
use std::mem::size_of;

use serde::{Deserialize, Serialize};

use crate::Family;

/// A native type that may back a canonical width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateType {
    /// Native spelling, e.g. `long long`.
    pub name: String,
    /// Byte width as reported by `sizeof`.
    pub size: u32,
}

impl CandidateType {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Candidate lists for both families, widest-first preference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeTypes {
    pub integers: Vec<CandidateType>,
    pub reals: Vec<CandidateType>,
}

/// Byte sizes of the native library's semantic types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySizes {
    pub size_t: u32,
    pub hsize_t: u32,
    pub hssize_t: u32,
    pub haddr_t: u32,
    pub off_t: u32,
    pub hid_t: u32,
}

/// What the foreign runtime declares support for.
///
/// Kind maps are keyed by byte width; a width missing from a map is not declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKinds {
    pub integer_kinds: BTreeMap<u32, u32>,
    pub real_kinds: BTreeMap<u32, u32>,
    /// Width of the default INTEGER.
    pub native_integer: u32,
    /// Width of the default REAL.
    pub native_real: u32,
    /// Width of DOUBLE PRECISION.
    pub native_double: u32,
}

impl ForeignKinds {
    pub fn kinds(&self, family: Family) -> &BTreeMap<u32, u32> {
        match family {
            Family::Integer => &self.integer_kinds,
            Family::Float => &self.real_kinds,
        }
    }

    pub fn declares(&self, family: Family, width: u32) -> bool {
        self.kinds(family).contains_key(&width)
    }
}

/// Complete capability set for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub native: NativeTypes,
    pub sizes: LibrarySizes,
    pub foreign: ForeignKinds,
}

impl Platform {
    /// Parse a platform description from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Candidate list for a family in preference order.
    pub fn candidates(&self, family: Family) -> &[CandidateType] {
        match family {
            Family::Integer => &self.native.integers,
            Family::Float => &self.native.reals,
        }
    }

    /// Capabilities of the machine running the generator.
    ///
    /// Native sizes come from the `std::ffi` C type aliases. `long double` has no
    /// Rust counterpart and is derived from the target. Foreign kinds follow the
    /// common convention where a kind identifier equals its byte width.
    pub fn host() -> Self {
        use std::ffi::{c_char, c_double, c_float, c_int, c_long, c_longlong, c_short};

        let integers = vec![
            CandidateType::new("long long", size_of::<c_longlong>() as u32),
            CandidateType::new("long", size_of::<c_long>() as u32),
            CandidateType::new("int", size_of::<c_int>() as u32),
            CandidateType::new("short", size_of::<c_short>() as u32),
            CandidateType::new("char", size_of::<c_char>() as u32),
        ];
        let reals = vec![
            CandidateType::new("long double", host_long_double_size()),
            CandidateType::new("double", size_of::<c_double>() as u32),
            CandidateType::new("float", size_of::<c_float>() as u32),
        ];

        let sizes = LibrarySizes {
            size_t: size_of::<usize>() as u32,
            hsize_t: 8,
            hssize_t: 8,
            haddr_t: 8,
            off_t: if cfg!(windows) { 4 } else { 8 },
            hid_t: 8,
        };

        let identity = |widths: &[u32]| -> BTreeMap<u32, u32> {
            widths.iter().map(|&w| (w, w)).collect()
        };
        let foreign = ForeignKinds {
            integer_kinds: identity(Family::Integer.canonical_widths()),
            real_kinds: identity(Family::Float.canonical_widths()),
            native_integer: 4,
            native_real: 4,
            native_double: 8,
        };

        Self {
            native: NativeTypes { integers, reals },
            sizes,
            foreign,
        }
    }
}

fn host_long_double_size() -> u32 {
    if cfg!(any(
        all(target_os = "windows", target_env = "msvc"),
        all(target_vendor = "apple", target_arch = "aarch64"),
        target_arch = "arm",
    )) {
        8
    } else if cfg!(target_arch = "x86") {
        12
    } else {
        16
    }
}
