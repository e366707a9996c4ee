//! Platform descriptions shared by command tests.

use kindmatch_lib::Platform;

/// LP64 without a 2-byte integer or an extended float.
pub const SPARSE_LP64: &str = r#"{
  "native": {
    "integers": [
      {"name": "long", "size": 8},
      {"name": "int", "size": 4},
      {"name": "char", "size": 1}
    ],
    "reals": [
      {"name": "double", "size": 8},
      {"name": "float", "size": 4}
    ]
  },
  "sizes": {"size_t": 8, "hsize_t": 8, "hssize_t": 8, "haddr_t": 8, "off_t": 8, "hid_t": 8},
  "foreign": {
    "integer_kinds": {"1": 1, "2": 2, "4": 4, "8": 8},
    "real_kinds": {"4": 4, "8": 8, "16": 16},
    "native_integer": 4,
    "native_real": 4,
    "native_double": 8
  }
}"#;

pub fn sparse_lp64() -> Platform {
    Platform::from_json(SPARSE_LP64).unwrap()
}
