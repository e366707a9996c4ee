use kindmatch_core::{Family, Platform};

use super::{Requirement, SemanticTag};
use crate::Error;
use crate::probe::WidthProbe;
use crate::resolve::{FallbackResolver, SlotTable};
use crate::test_utils::{ILP32_INTS, platform, platform_with_floats};

fn table<'p>(platform: &'p Platform, family: Family) -> SlotTable<'p> {
    let discovery = WidthProbe::new(platform).discover(family);
    let mut resolver = FallbackResolver::new(family);
    if discovery.lacks_extended_float() {
        resolver = resolver.disable(16);
    }
    resolver
        .resolve(&discovery, platform.foreign.kinds(family))
        .unwrap()
}

fn tag<'c>(catalog: &'c [SemanticTag], name: &str) -> &'c SemanticTag {
    catalog.iter().find(|t| t.foreign_name == name).unwrap()
}

#[test]
fn catalog_order() {
    let catalog = SemanticTag::catalog(&platform(ILP32_INTS));
    let names: Vec<_> = catalog.iter().map(|t| t.foreign_name.as_str()).collect();

    insta::assert_snapshot!(names.join("\n"), @r"
    HADDR_T
    HSIZE_T
    HSSIZE_T
    OFF_T
    SIZE_T
    Fortran_INTEGER
    Fortran_INTEGER_1
    Fortran_INTEGER_2
    Fortran_INTEGER_4
    Fortran_INTEGER_8
    Fortran_REAL_4
    Fortran_REAL_8
    Fortran_REAL_16
    HID_T
    Fortran_REAL
    Fortran_DOUBLE
    ");
}

#[test]
fn minimums_come_from_platform() {
    let mut platform = platform(ILP32_INTS);
    platform.sizes.hid_t = 4;
    platform.foreign.native_double = 16;
    let catalog = SemanticTag::catalog(&platform);

    assert_eq!(tag(&catalog, "HID_T").requirement, Requirement::AtLeast(4));
    assert_eq!(
        tag(&catalog, "Fortran_DOUBLE").requirement,
        Requirement::Narrowing(16)
    );
    assert_eq!(
        tag(&catalog, "Fortran_INTEGER_2").requirement,
        Requirement::Slot(2)
    );
}

#[test]
fn at_least_picks_smallest_wide_enough() {
    let mut platform = platform(ILP32_INTS);
    platform.sizes.off_t = 3;
    let catalog = SemanticTag::catalog(&platform);
    let ints = table(&platform, Family::Integer);

    let binding = tag(&catalog, "OFF_T").bind(&ints).unwrap().unwrap();
    assert_eq!(binding.width, 4);
    assert_eq!(binding.symbol, "c_int_4");
    assert_eq!(binding.native_name, "off_t_f");
}

#[test]
fn hid_escalates_to_only_populated_slot() {
    // 4-byte minimum, but the only directly bound integer width is 8
    let mut platform = platform(&[("long long", 8)]);
    platform.sizes.hid_t = 4;
    let catalog = SemanticTag::catalog(&platform);
    let ints = table(&platform, Family::Integer);

    let binding = tag(&catalog, "HID_T").bind(&ints).unwrap().unwrap();
    assert_eq!(binding.width, 8);
    assert_eq!(binding.kind, 8);
    assert!(!binding.narrowed);
}

#[test]
fn library_alias_only_when_sizes_match() {
    let mut platform = platform(ILP32_INTS);
    platform.sizes.size_t = 4;
    platform.sizes.hsize_t = 3;
    let catalog = SemanticTag::catalog(&platform);
    let ints = table(&platform, Family::Integer);

    let size = tag(&catalog, "SIZE_T").bind(&ints).unwrap().unwrap();
    let hsize = tag(&catalog, "HSIZE_T").bind(&ints).unwrap().unwrap();
    assert_eq!(size.symbol, "c_size_t_4");
    assert_eq!(hsize.symbol, "c_int_4");
}

#[test]
fn slot_tag_follows_fallback() {
    let platform = platform(&[("long long", 8), ("int", 4)]);
    let catalog = SemanticTag::catalog(&platform);
    let ints = table(&platform, Family::Integer);

    let binding = tag(&catalog, "Fortran_INTEGER_1")
        .bind(&ints)
        .unwrap()
        .unwrap();
    assert_eq!(binding.requested_width, 1);
    assert_eq!(binding.width, 4);
    assert_eq!(binding.symbol, "c_int_4");
    assert_eq!(binding.native_name, "int_1_f");
}

#[test]
fn disabled_slot_tag_is_skipped() {
    let platform = platform_with_floats(ILP32_INTS, &[("double", 8), ("float", 4)]);
    let catalog = SemanticTag::catalog(&platform);
    let floats = table(&platform, Family::Float);

    assert!(
        tag(&catalog, "Fortran_REAL_16")
            .bind(&floats)
            .unwrap()
            .is_none()
    );
}

#[test]
fn narrowing_tag_takes_nearest_smaller() {
    let mut platform = platform_with_floats(ILP32_INTS, &[("double", 8), ("float", 4)]);
    platform.foreign.native_double = 16;
    let catalog = SemanticTag::catalog(&platform);
    let floats = table(&platform, Family::Float);

    let binding = tag(&catalog, "Fortran_DOUBLE")
        .bind(&floats)
        .unwrap()
        .unwrap();
    assert_eq!(binding.width, 8);
    assert!(binding.narrowed);
}

#[test]
fn double_prefers_exact_width() {
    let platform = platform_with_floats(ILP32_INTS, &[("double", 8), ("float", 4)]);
    let catalog = SemanticTag::catalog(&platform);
    let floats = table(&platform, Family::Float);

    let binding = tag(&catalog, "Fortran_DOUBLE")
        .bind(&floats)
        .unwrap()
        .unwrap();
    assert_eq!(binding.width, 8);
    assert_eq!(binding.symbol, "c_float_8");
    assert_eq!(binding.native_type, "double");
    assert!(!binding.narrowed);
}

#[test]
fn nothing_wide_enough_is_unresolved() {
    let mut platform = platform(&[("int", 4), ("short", 2)]);
    platform.sizes.haddr_t = 8;
    let catalog = SemanticTag::catalog(&platform);
    let ints = table(&platform, Family::Integer);

    let err = tag(&catalog, "HADDR_T").bind(&ints).unwrap_err();
    assert!(matches!(err, Error::UnresolvedTag { min_width: 8, .. }));
    insta::assert_snapshot!(err, @"HADDR_T: no integer kind of at least 8 bytes");
}

#[test]
fn zero_minimum_is_unresolved() {
    let mut platform = platform(ILP32_INTS);
    platform.sizes.hssize_t = 0;
    let catalog = SemanticTag::catalog(&platform);
    let ints = table(&platform, Family::Integer);

    let err = tag(&catalog, "HSSIZE_T").bind(&ints).unwrap_err();
    assert!(matches!(err, Error::UnresolvedTag { min_width: 0, .. }));
}
