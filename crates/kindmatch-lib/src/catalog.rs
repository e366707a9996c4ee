//! The fixed catalog of semantic tags and how each binds to a slot.
//!
//! Catalog order is emission order. Both output files list the tags in the
//! sequence [`SemanticTag::catalog`] returns them.

use kindmatch_core::{Family, Platform};

use crate::resolve::{SlotTable, WidthSlot};
use crate::{Error, Result};

/// How a tag picks its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Smallest directly bound slot at least this many bytes wide.
    AtLeast(u32),
    /// Like `AtLeast`, but settles for the nearest narrower slot when nothing
    /// is wide enough.
    Narrowing(u32),
    /// The canonical slot of exactly this width, fallback included.
    Slot(u32),
}

impl Requirement {
    pub fn width(self) -> u32 {
        match self {
            Self::AtLeast(w) | Self::Narrowing(w) | Self::Slot(w) => w,
        }
    }
}

/// A named cross-language type requirement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SemanticTag {
    /// Parameter name in the foreign module, e.g. `HADDR_T`.
    pub foreign_name: String,
    /// Typedef name in the native header, e.g. `haddr_t_f`.
    pub native_name: String,
    pub family: Family,
    pub requirement: Requirement,
    /// Library type whose own width symbol is used when its size matches the
    /// bound width (`c_hsize_t_8` instead of `c_int_8`).
    pub library_alias: Option<(&'static str, u32)>,
}

impl SemanticTag {
    fn new(
        foreign_name: impl Into<String>,
        native_name: impl Into<String>,
        family: Family,
        requirement: Requirement,
    ) -> Self {
        Self {
            foreign_name: foreign_name.into(),
            native_name: native_name.into(),
            family,
            requirement,
            library_alias: None,
        }
    }

    fn aliased(mut self, prefix: &'static str, size: u32) -> Self {
        self.library_alias = Some((prefix, size));
        self
    }

    /// All tags for `platform`, in emission order.
    pub fn catalog(platform: &Platform) -> Vec<SemanticTag> {
        use Family::{Float, Integer};
        use Requirement::{AtLeast, Narrowing, Slot};

        let sizes = &platform.sizes;
        let foreign = &platform.foreign;

        let mut tags = vec![
            Self::new("HADDR_T", "haddr_t_f", Integer, AtLeast(sizes.haddr_t)),
            Self::new("HSIZE_T", "hsize_t_f", Integer, AtLeast(sizes.hsize_t))
                .aliased("hsize_t", sizes.hsize_t),
            Self::new("HSSIZE_T", "hssize_t_f", Integer, AtLeast(sizes.hssize_t)),
            Self::new("OFF_T", "off_t_f", Integer, AtLeast(sizes.off_t)),
            Self::new("SIZE_T", "size_t_f", Integer, AtLeast(sizes.size_t))
                .aliased("size_t", sizes.size_t),
            Self::new(
                "Fortran_INTEGER",
                "int_f",
                Integer,
                AtLeast(foreign.native_integer),
            ),
        ];
        for &w in Integer.canonical_widths() {
            tags.push(Self::new(
                format!("Fortran_INTEGER_{w}"),
                format!("int_{w}_f"),
                Integer,
                Slot(w),
            ));
        }
        for &w in Float.canonical_widths() {
            tags.push(Self::new(
                format!("Fortran_REAL_{w}"),
                format!("real_{w}_f"),
                Float,
                Slot(w),
            ));
        }
        tags.extend([
            Self::new("HID_T", "hid_t_f", Integer, AtLeast(sizes.hid_t)),
            Self::new("Fortran_REAL", "real_f", Float, Narrowing(foreign.native_real)),
            Self::new(
                "Fortran_DOUBLE",
                "double_f",
                Float,
                Narrowing(foreign.native_double),
            ),
        ]);
        tags
    }

    /// Bind this tag against its family's slot table.
    ///
    /// `Ok(None)` means the tag names a disabled slot and is skipped.
    pub fn bind(&self, table: &SlotTable<'_>) -> Result<Option<TagBinding>> {
        debug_assert_eq!(table.family(), self.family);

        let (slot, narrowed) = match self.requirement {
            Requirement::Slot(width) => {
                if table.is_disabled(width) {
                    return Ok(None);
                }
                (table.get(width), false)
            }
            Requirement::AtLeast(min) => (self.at_least(table, min), false),
            Requirement::Narrowing(min) => match self.at_least(table, min) {
                Some(slot) => (Some(slot), false),
                None => (table.largest_below(min), true),
            },
        };

        let slot = slot.ok_or_else(|| Error::UnresolvedTag {
            tag: self.foreign_name.clone(),
            family: self.family,
            min_width: self.requirement.width(),
        })?;
        Ok(Some(self.binding(slot, narrowed)))
    }

    fn at_least<'t, 'p>(&self, table: &'t SlotTable<'p>, min: u32) -> Option<&'t WidthSlot<'p>> {
        if min == 0 {
            return None;
        }
        table.smallest_at_least(min)
    }

    fn binding(&self, slot: &WidthSlot<'_>, narrowed: bool) -> TagBinding {
        let width = slot.resolved_width;
        let prefix = match self.library_alias {
            Some((prefix, size)) if size == width => prefix,
            _ => self.family.symbol_prefix(),
        };
        TagBinding {
            foreign_name: self.foreign_name.clone(),
            native_name: self.native_name.clone(),
            family: self.family,
            requested_width: self.requirement.width(),
            width,
            kind: slot.kind,
            symbol: format!("c_{prefix}_{width}"),
            native_type: slot.bound_type.name.clone(),
            narrowed,
        }
    }
}

/// A tag fixed to a concrete width. Never changes once emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagBinding {
    pub foreign_name: String,
    pub native_name: String,
    pub family: Family,
    /// Minimum width, or the slot width for per-width tags.
    pub requested_width: u32,
    /// Width of the bound native type.
    pub width: u32,
    /// Foreign kind identifier of `width`.
    pub kind: u32,
    /// Native width symbol the typedef refers to, e.g. `c_int_8`.
    pub symbol: String,
    pub native_type: String,
    /// Bound below `requested_width` because nothing wider existed.
    pub narrowed: bool,
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
