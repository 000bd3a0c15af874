//! Exercises the public file-level API against real files.
//!
//! Values come from variables that cargo sets for every test binary, so the
//! process environment is never mutated here.

use std::collections::BTreeMap;

use crate::harness::TestContext;
use set_property::{
    AppError, ResolutionRule, ResolutionRuleSet, set_properties_in_file, set_single_property,
};

const PKG_NAME: &str = env!("CARGO_PKG_NAME");
const UNSET: &str = "SET_PROPERTY_LIBRARY_TEST_UNSET";

#[test]
fn single_property_creates_file() {
    let ctx = TestContext::new();

    let result = set_single_property(
        &ctx.properties_path(),
        "name",
        "CARGO_PKG_NAME",
        None,
        None,
        Some(ctx.scratch_dir()),
    )
    .unwrap();

    assert!(result.is_modified());
    assert_eq!(ctx.read_properties(), format!("name={}\n", PKG_NAME));
    ctx.assert_scratch_empty();
}

#[test]
fn mapping_and_allow_list_apply_to_real_files() {
    let ctx = TestContext::new();
    let mappings = BTreeMap::from([(PKG_NAME.to_string(), "mapped".to_string())]);

    set_single_property(
        &ctx.properties_path(),
        "name",
        "CARGO_PKG_NAME",
        Some(mappings),
        Some(vec!["other".to_string(), "mapped".to_string()]),
        Some(ctx.scratch_dir()),
    )
    .unwrap();

    assert_eq!(ctx.read_properties(), "name=mapped\n");
}

#[test]
fn rejection_keeps_file_and_scratch_clean() {
    let ctx = TestContext::new();
    ctx.write_properties("name = original # keep\n");
    let digest = ctx.properties_digest();
    let mtime = ctx.properties_mtime();

    let err = set_single_property(
        &ctx.properties_path(),
        "name",
        "CARGO_PKG_NAME",
        None,
        Some(vec!["legal".to_string(), "beagle".to_string()]),
        Some(ctx.scratch_dir()),
    )
    .unwrap_err();

    match err {
        AppError::ValueNotAllowed { property, value, allowed } => {
            assert_eq!(property, "name");
            assert_eq!(value, PKG_NAME);
            assert_eq!(allowed, ["legal", "beagle"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(ctx.properties_digest(), digest);
    assert_eq!(ctx.properties_mtime(), mtime);
    ctx.assert_scratch_empty();
}

#[test]
fn rerun_is_idempotent_and_skips_write() {
    let ctx = TestContext::new();
    ctx.write_properties("# header\n\nname = old\nversion=0\n");
    let mut rules = ResolutionRuleSet::new();
    rules.insert("name", ResolutionRule::new("CARGO_PKG_NAME"));
    rules.insert("version", ResolutionRule::new("CARGO_PKG_VERSION"));
    rules.insert("missing", ResolutionRule::new(UNSET));

    let first = set_properties_in_file(&ctx.properties_path(), &rules, Some(ctx.scratch_dir()))
        .unwrap();
    let content = ctx.read_properties();
    let mtime = ctx.properties_mtime();
    let second = set_properties_in_file(&ctx.properties_path(), &rules, Some(ctx.scratch_dir()))
        .unwrap();

    assert!(first.is_modified());
    assert!(!second.is_modified());
    assert_eq!(
        content,
        format!("# header\n\nname={}\nversion={}\n", PKG_NAME, env!("CARGO_PKG_VERSION"))
    );
    assert_eq!(ctx.read_properties(), content);
    assert_eq!(ctx.properties_mtime(), mtime);
    ctx.assert_scratch_empty();
}

#[test]
fn unreadable_target_is_an_io_error() {
    let ctx = TestContext::new();
    let target = ctx.work_dir().join("is-a-directory");
    std::fs::create_dir_all(&target).unwrap();

    let rules = ResolutionRuleSet::single("name", ResolutionRule::new("CARGO_PKG_NAME"));
    let err = set_properties_in_file(&target, &rules, Some(ctx.scratch_dir())).unwrap_err();

    assert!(matches!(err, AppError::PropertyIo { action: "read", .. }));
    ctx.assert_scratch_empty();
}
