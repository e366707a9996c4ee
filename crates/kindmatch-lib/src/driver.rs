//! One generation run, start to finish.
//!
//! The driver walks a fixed sequence of phases and never re-enters one:
//!
//! ```text
//! Init → ProbeIntegers → ProbeFloats → ResolveFallbacks → EmitAll → Finalize → Success
//!                                              └──────────────┴──────────→ Failed
//! ```
//!
//! Both families are probed and resolved before anything past the headers is
//! written, so an exhausted family leaves no tag bindings in either file.
//! A failure during emission leaves what was already written in place.

use std::collections::BTreeSet;
use std::io::Write;

use indexmap::IndexMap;
use kindmatch_core::{EXTENDED_FLOAT_WIDTH, Family, Platform};

use crate::advisory::Advisory;
use crate::catalog::{SemanticTag, TagBinding};
use crate::config::Config;
use crate::emit::{DualFileEmitter, EmissionRecord, NativeDefine};
use crate::probe::{Discovery, WidthProbe};
use crate::resolve::{FallbackResolver, SlotTable};
use crate::validate::validate;
use crate::Result;

/// Name of the trailing foreign constant derived from the address width.
pub const REFERENCE_BUFFER_CONSTANT: &str = "H5R_DSET_REG_REF_BUF_SIZE_F";

/// Bytes the reference buffer carries beyond the address itself.
const REFERENCE_BUFFER_EXTRA: u32 = 4;

/// Tag whose bound width sizes the reference buffer.
const ADDRESS_TAG: &str = "HADDR_T";

/// Run state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Init,
    ProbeIntegers,
    ProbeFloats,
    ResolveFallbacks,
    EmitAll,
    Finalize,
    Success,
    Failed,
}

/// Drives probing, resolution and emission for one platform.
///
/// [`run`](Self::run) consumes the driver, so a driver generates once.
pub struct GenerationDriver<'p> {
    platform: &'p Platform,
    config: Config,
    phase: Phase,
    advisories: Vec<Advisory>,
}

/// What a run leaves behind, on success and on failure alike.
#[derive(Debug)]
pub struct Outcome<'p> {
    /// `Success` or `Failed`.
    pub phase: Phase,
    /// Advisories raised before the run ended.
    pub advisories: Vec<Advisory>,
    pub result: Result<Generation<'p>>,
}

impl<'p> GenerationDriver<'p> {
    pub fn new(platform: &'p Platform, config: Config) -> Self {
        Self {
            platform,
            config,
            phase: Phase::Init,
            advisories: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check the platform without producing output.
    ///
    /// Callers that create their sinks on disk run this first, so a bad
    /// platform never truncates existing files.
    pub fn validate(&self) -> Result<()> {
        validate(self.platform)
    }

    /// Generate both files into `native` and `foreign`.
    ///
    /// The sinks are owned by the emitter for the duration of the run and
    /// released exactly once, on success and on failure alike.
    pub fn run<N: Write, F: Write>(mut self, native: N, foreign: F) -> Outcome<'p> {
        let result = self.drive(native, foreign);
        Outcome {
            phase: self.phase,
            advisories: self.advisories,
            result,
        }
    }

    fn drive<N: Write, F: Write>(&mut self, native: N, foreign: F) -> Result<Generation<'p>> {
        if let Err(e) = self.validate() {
            self.enter(Phase::Failed);
            return Err(e);
        }

        let mut emitter = match DualFileEmitter::open(native, foreign, &self.config) {
            Ok(emitter) => emitter,
            Err(e) => {
                self.enter(Phase::Failed);
                return Err(e.into());
            }
        };

        let generation = match self.generate(&mut emitter) {
            Ok(generation) => generation,
            Err(e) => {
                if let Err(io) = emitter.abandon() {
                    log::warn!("failed to flush partial output: {io}");
                }
                self.enter(Phase::Failed);
                return Err(e);
            }
        };

        self.enter(Phase::Finalize);
        if let Err(e) = emitter.finalize() {
            self.enter(Phase::Failed);
            return Err(e.into());
        }
        self.enter(Phase::Success);
        Ok(generation)
    }

    fn generate<N: Write, F: Write>(
        &mut self,
        emitter: &mut DualFileEmitter<N, F>,
    ) -> Result<Generation<'p>> {
        let platform = self.platform;
        let probe = WidthProbe::new(platform);

        self.enter(Phase::ProbeIntegers);
        let int_discovery = probe.discover(Family::Integer);

        self.enter(Phase::ProbeFloats);
        let float_discovery = probe.discover(Family::Float);
        let mut float_resolver = FallbackResolver::new(Family::Float);
        if float_discovery.lacks_extended_float() {
            float_resolver = float_resolver.disable(EXTENDED_FLOAT_WIDTH);
            if platform
                .foreign
                .declares(Family::Float, EXTENDED_FLOAT_WIDTH)
            {
                self.advise(Advisory::ExtendedFloatDisabled {
                    width: EXTENDED_FLOAT_WIDTH,
                });
            }
        }

        self.enter(Phase::ResolveFallbacks);
        let integers = FallbackResolver::new(Family::Integer)
            .resolve(&int_discovery, &platform.foreign.integer_kinds)?;
        let floats = float_resolver.resolve(&float_discovery, &platform.foreign.real_kinds)?;
        log::info!(
            "resolved {} integer and {} float slots",
            integers.len(),
            floats.len()
        );

        self.enter(Phase::EmitAll);
        for define in native_defines(platform, &int_discovery, &float_discovery) {
            emitter.define(&define)?;
        }
        emitter.separate()?;

        let mut bindings = IndexMap::new();
        for tag in SemanticTag::catalog(platform) {
            let table = match tag.family {
                Family::Integer => &integers,
                Family::Float => &floats,
            };
            let Some(binding) = tag.bind(table)? else {
                log::debug!("{}: slot disabled, skipped", tag.foreign_name);
                continue;
            };
            emitter.emit_both(&EmissionRecord::from(&binding))?;
            if binding.narrowed {
                self.advise(Advisory::TagNarrowed {
                    tag: binding.foreign_name.clone(),
                    requested: binding.requested_width,
                    bound: binding.width,
                });
            }
            bindings.insert(binding.foreign_name.clone(), binding);
        }

        let reference_buffer_size = bindings
            .get(ADDRESS_TAG)
            .map(|b| b.width + REFERENCE_BUFFER_EXTRA)
            .unwrap_or(REFERENCE_BUFFER_EXTRA);
        emitter.foreign_constant(REFERENCE_BUFFER_CONSTANT, i64::from(reference_buffer_size))?;

        Ok(Generation {
            integers,
            floats,
            bindings,
            records: emitter.records(),
            reference_buffer_size,
        })
    }

    fn enter(&mut self, phase: Phase) {
        log::debug!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn advise(&mut self, advisory: Advisory) {
        log::warn!("{advisory}");
        self.advisories.push(advisory);
    }
}

/// Native width symbols, in the order they are defined.
///
/// Each declared integer width gets its candidate, or a composite of two
/// halves when the half width is already defined. Library size types get
/// their own symbol at their width.
fn native_defines(
    platform: &Platform,
    integers: &Discovery<'_>,
    floats: &Discovery<'_>,
) -> Vec<NativeDefine> {
    let sizes = &platform.sizes;
    let mut defines = Vec::new();
    let mut defined = BTreeSet::new();

    for &w in platform.foreign.integer_kinds.keys() {
        let symbol = format!("c_int_{w}");
        if let Some(candidate) = integers.get(w) {
            defines.push(NativeDefine::Alias {
                symbol,
                native_type: candidate.name.clone(),
            });
            defined.insert(w);
        } else if w > 1 && defined.contains(&(w / 2)) {
            defines.push(NativeDefine::Composite {
                symbol,
                half: format!("c_int_{}", w / 2),
            });
            defined.insert(w);
        }

        for (prefix, size) in [("size_t", sizes.size_t), ("hsize_t", sizes.hsize_t)] {
            if size == w {
                defines.push(NativeDefine::Alias {
                    symbol: format!("c_{prefix}_{w}"),
                    native_type: prefix.to_owned(),
                });
            }
        }
    }

    for &w in platform.foreign.real_kinds.keys() {
        if let Some(candidate) = floats.get(w) {
            defines.push(NativeDefine::Alias {
                symbol: format!("c_float_{w}"),
                native_type: candidate.name.clone(),
            });
        }
    }

    defines
}

/// Everything a successful run bound.
#[derive(Clone, Debug)]
pub struct Generation<'p> {
    integers: SlotTable<'p>,
    floats: SlotTable<'p>,
    bindings: IndexMap<String, TagBinding>,
    records: usize,
    reference_buffer_size: u32,
}

impl<'p> Generation<'p> {
    pub fn slots(&self, family: Family) -> &SlotTable<'p> {
        match family {
            Family::Integer => &self.integers,
            Family::Float => &self.floats,
        }
    }

    /// Binding of the tag with this foreign name.
    pub fn binding(&self, foreign_name: &str) -> Option<&TagBinding> {
        self.bindings.get(foreign_name)
    }

    /// All bindings in emission order.
    pub fn bindings(&self) -> impl Iterator<Item = &TagBinding> {
        self.bindings.values()
    }

    /// Records written to both files.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn reference_buffer_size(&self) -> u32 {
        self.reference_buffer_size
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod driver_tests;
