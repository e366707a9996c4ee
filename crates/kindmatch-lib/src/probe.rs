//! Width probing against the platform's candidate lists.

use std::collections::BTreeMap;

use kindmatch_core::{CandidateType, EXTENDED_FLOAT_WIDTH, Family, Platform};

/// Finds the native type backing a canonical width.
#[derive(Clone, Copy, Debug)]
pub struct WidthProbe<'p> {
    platform: &'p Platform,
}

impl<'p> WidthProbe<'p> {
    pub fn new(platform: &'p Platform) -> Self {
        Self { platform }
    }

    /// First candidate of `family` whose size is exactly `width`.
    ///
    /// Candidates are scanned in the platform's preference order, so with two
    /// same-sized types (`long` and `long long` on LP64) the earlier one wins.
    pub fn probe(&self, family: Family, width: u32) -> Option<&'p CandidateType> {
        debug_assert!(
            family.is_canonical(width),
            "probe: {width} is not a canonical {family} width"
        );
        let found = self
            .platform
            .candidates(family)
            .iter()
            .find(|candidate| candidate.size == width);
        match found {
            Some(candidate) => log::debug!("{family} width {width}: `{}`", candidate.name),
            None => log::debug!("{family} width {width}: no native type"),
        }
        found
    }

    /// Probe every canonical width of `family`.
    pub fn discover(&self, family: Family) -> Discovery<'p> {
        let found = family
            .canonical_widths()
            .iter()
            .filter_map(|&width| self.probe(family, width).map(|c| (width, c)))
            .collect();
        Discovery { family, found }
    }
}

/// Probe results for one family: canonical width to native type.
#[derive(Clone, Debug)]
pub struct Discovery<'p> {
    family: Family,
    found: BTreeMap<u32, &'p CandidateType>,
}

impl<'p> Discovery<'p> {
    pub fn family(&self) -> Family {
        self.family
    }

    pub fn get(&self, width: u32) -> Option<&'p CandidateType> {
        self.found.get(&width).copied()
    }

    pub fn contains(&self, width: u32) -> bool {
        self.found.contains_key(&width)
    }

    /// Discovered widths, ascending.
    pub fn widths(&self) -> impl Iterator<Item = u32> + '_ {
        self.found.keys().copied()
    }

    /// Whether the extended-precision float slot must be disabled for the run.
    pub fn lacks_extended_float(&self) -> bool {
        self.family == Family::Float && !self.contains(EXTENDED_FLOAT_WIDTH)
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod probe_tests;
