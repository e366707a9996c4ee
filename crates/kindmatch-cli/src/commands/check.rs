use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

use kindmatch_lib::{Config, Family, Generation, GenerationDriver};

use super::{fail, load_platform, report_advisories};

pub struct CheckArgs {
    pub platform: Option<PathBuf>,
    pub report: bool,
}

pub fn run(args: CheckArgs) {
    let platform = load_platform(args.platform.as_deref()).unwrap_or_else(|e| fail(e));

    let outcome = GenerationDriver::new(&platform, Config::default()).run(io::sink(), io::sink());
    report_advisories(&outcome.advisories);

    match outcome.result {
        // Silent on success unless asked
        Ok(generation) if args.report => print!("{}", render_report(&generation)),
        Ok(_) => {}
        Err(e) => fail(e),
    }
}

/// Slot table of both families followed by the tag bindings.
pub fn render_report(generation: &Generation<'_>) -> String {
    let mut out = String::new();

    for family in Family::ALL {
        let table = generation.slots(family);
        writeln!(out, "{family} slots:").unwrap();
        for &width in family.canonical_widths() {
            match table.get(width) {
                Some(slot) if slot.is_fallback => {
                    writeln!(
                        out,
                        "  {width:>2} -> {:<2}  {} (fallback)",
                        slot.resolved_width, slot.bound_type.name
                    )
                    .unwrap();
                }
                Some(slot) => {
                    writeln!(out, "  {width:>2}        {}", slot.bound_type.name).unwrap();
                }
                None => {
                    writeln!(out, "  {width:>2}        disabled").unwrap();
                }
            }
        }
    }

    writeln!(out, "bindings:").unwrap();
    for binding in generation.bindings() {
        writeln!(
            out,
            "  {:<18} {:<12} kind {}",
            binding.foreign_name, binding.symbol, binding.kind
        )
        .unwrap();
    }
    out
}
