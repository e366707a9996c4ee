//! Platform checks run before any output is opened.

use kindmatch_core::{Family, Platform};

use crate::{Error, Result};

pub fn validate(platform: &Platform) -> Result<()> {
    for family in Family::ALL {
        for candidate in platform.candidates(family) {
            if candidate.size == 0 {
                return Err(Error::EmptyCandidate {
                    family,
                    name: candidate.name.clone(),
                });
            }
        }
    }

    let foreign = &platform.foreign;
    check_widths(
        "foreign.integer_kinds",
        Family::Integer,
        foreign.integer_kinds.keys().copied(),
    )?;
    check_widths(
        "foreign.real_kinds",
        Family::Float,
        foreign.real_kinds.keys().copied(),
    )?;
    check_widths(
        "foreign.native_integer",
        Family::Integer,
        [foreign.native_integer],
    )?;
    check_widths("foreign.native_real", Family::Float, [foreign.native_real])?;
    check_widths(
        "foreign.native_double",
        Family::Float,
        [foreign.native_double],
    )?;

    Ok(())
}

fn check_widths(
    field: &'static str,
    family: Family,
    widths: impl IntoIterator<Item = u32>,
) -> Result<()> {
    match widths.into_iter().find(|&w| !family.is_canonical(w)) {
        Some(width) => Err(Error::NonCanonicalWidth {
            field,
            family,
            width,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod validate_tests;
