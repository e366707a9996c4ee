//! Fallback resolution of canonical widths.
//!
//! A width is *directly bound* when the foreign runtime declares a kind for it
//! and a native type of exactly that size exists. Every other canonical width
//! borrows the nearest directly bound one: the next larger first, the next
//! smaller only when nothing larger exists.

use std::collections::BTreeMap;

use kindmatch_core::{CandidateType, Family};

use crate::probe::Discovery;
use crate::{Error, Result};

/// Scan direction for [`nearest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Increasing widths above the target.
    Up,
    /// Decreasing widths below the target.
    Down,
}

/// Nearest key of `bound` strictly above or below `target`.
pub fn nearest<V>(bound: &BTreeMap<u32, V>, target: u32, direction: Direction) -> Option<u32> {
    match direction {
        Direction::Up => bound.range(target.saturating_add(1)..).next(),
        Direction::Down => bound.range(..target).next_back(),
    }
    .map(|(&width, _)| width)
}

/// A canonical width with the native type and kind it ended up bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidthSlot<'p> {
    pub family: Family,
    pub requested_width: u32,
    /// Equals `requested_width` unless `is_fallback`.
    pub resolved_width: u32,
    pub bound_type: &'p CandidateType,
    /// Foreign kind identifier of `resolved_width`.
    pub kind: u32,
    pub is_fallback: bool,
}

/// Resolved slots of one family, ascending by requested width.
#[derive(Clone, Debug)]
pub struct SlotTable<'p> {
    family: Family,
    slots: Vec<WidthSlot<'p>>,
    disabled: Option<u32>,
}

impl<'p> SlotTable<'p> {
    pub fn family(&self) -> Family {
        self.family
    }

    pub fn get(&self, width: u32) -> Option<&WidthSlot<'p>> {
        self.slots.iter().find(|s| s.requested_width == width)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WidthSlot<'p>> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_disabled(&self, width: u32) -> bool {
        self.disabled == Some(width)
    }

    fn direct(&self) -> impl DoubleEndedIterator<Item = &WidthSlot<'p>> {
        self.slots.iter().filter(|s| !s.is_fallback)
    }

    /// Smallest directly bound slot at least `min_width` bytes wide.
    pub fn smallest_at_least(&self, min_width: u32) -> Option<&WidthSlot<'p>> {
        self.direct().find(|s| s.resolved_width >= min_width)
    }

    /// Largest directly bound slot narrower than `width`.
    pub fn largest_below(&self, width: u32) -> Option<&WidthSlot<'p>> {
        self.direct().rev().find(|s| s.resolved_width < width)
    }
}

/// Binds every canonical width of one family.
#[derive(Clone, Copy, Debug)]
pub struct FallbackResolver {
    family: Family,
    disabled: Option<u32>,
}

impl FallbackResolver {
    pub fn new(family: Family) -> Self {
        Self {
            family,
            disabled: None,
        }
    }

    /// Exclude `width` from the run: it gets no slot and is never a fallback target.
    pub fn disable(mut self, width: u32) -> Self {
        debug_assert!(self.family.is_canonical(width));
        self.disabled = Some(width);
        self
    }

    /// Resolve all canonical widths from probe results and declared kinds.
    pub fn resolve<'p>(
        &self,
        discovery: &Discovery<'p>,
        kinds: &BTreeMap<u32, u32>,
    ) -> Result<SlotTable<'p>> {
        debug_assert_eq!(discovery.family(), self.family);

        let bound: BTreeMap<u32, (&'p CandidateType, u32)> = discovery
            .widths()
            .filter(|&w| Some(w) != self.disabled)
            .filter_map(|w| {
                let kind = *kinds.get(&w)?;
                Some((w, (discovery.get(w)?, kind)))
            })
            .collect();

        let mut slots = Vec::new();
        for &width in self.family.canonical_widths() {
            if Some(width) == self.disabled {
                continue;
            }
            if let Some(&(candidate, kind)) = bound.get(&width) {
                slots.push(WidthSlot {
                    family: self.family,
                    requested_width: width,
                    resolved_width: width,
                    bound_type: candidate,
                    kind,
                    is_fallback: false,
                });
                continue;
            }

            let resolved = nearest(&bound, width, Direction::Up)
                .or_else(|| nearest(&bound, width, Direction::Down))
                .ok_or(Error::FamilyExhausted {
                    family: self.family,
                    width,
                })?;
            let (candidate, kind) = bound[&resolved];
            log::info!(
                "{} width {width} falls back to {resolved} (`{}`, kind {kind})",
                self.family,
                candidate.name
            );
            slots.push(WidthSlot {
                family: self.family,
                requested_width: width,
                resolved_width: resolved,
                bound_type: candidate,
                kind,
                is_fallback: true,
            });
        }

        Ok(SlotTable {
            family: self.family,
            slots,
            disabled: self.disabled,
        })
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod resolve_tests;
