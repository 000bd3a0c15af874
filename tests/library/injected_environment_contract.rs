//! Drives the command layer with an injected environment and the real filesystem store.

use std::collections::HashMap;

use crate::harness::TestContext;
use set_property::adapters::FilesystemPropertiesStore;
use set_property::app::commands::set_properties;
use set_property::{AppContext, ChangeKind, EnvLookup, ResolutionRule, ResolutionRuleSet};

struct MapEnv(HashMap<&'static str, &'static str>);

impl EnvLookup for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.0.get(name).map(|v| v.to_string())
    }
}

fn context(
    ctx: &TestContext,
    vars: &[(&'static str, &'static str)],
) -> AppContext<MapEnv, FilesystemPropertiesStore> {
    let store = FilesystemPropertiesStore::new(ctx.properties_path())
        .with_scratch_dir(Some(ctx.scratch_dir().to_path_buf()));
    AppContext::new(MapEnv(vars.iter().copied().collect()), store)
}

#[test]
fn reports_updates_and_appends() {
    let ctx = TestContext::new();
    ctx.write_properties("prop1 = value1 # touch this line\n");
    let mut rules = ResolutionRuleSet::new();
    rules.insert("prop1", ResolutionRule::new("P1"));
    rules.insert("prop2", ResolutionRule::new("P2"));

    let app = context(&ctx, &[("P1", "value2"), ("P2", "valueB")]);
    let result = set_properties::execute(&app, &rules).unwrap();

    let kinds: Vec<_> = result.changes().iter().map(|c| (c.property.as_str(), c.kind)).collect();
    assert_eq!(kinds, [("prop1", ChangeKind::Updated), ("prop2", ChangeKind::Appended)]);
    assert_eq!(ctx.read_properties(), "prop1=value2\nprop2=valueB\n");
    ctx.assert_scratch_empty();
}

#[test]
fn later_duplicate_lines_are_left_alone() {
    let ctx = TestContext::new();
    ctx.write_properties("prop1=a\nprop1=b\n");
    let rules = ResolutionRuleSet::single("prop1", ResolutionRule::new("P1"));

    set_properties::execute(&context(&ctx, &[("P1", "c")]), &rules).unwrap();

    assert_eq!(ctx.read_properties(), "prop1=c\nprop1=b\n");
}

#[test]
fn empty_mapped_value_is_not_written() {
    let ctx = TestContext::new();
    ctx.write_properties("prop1=keep\n");
    let rule = ResolutionRule::new("P1")
        .with_mappings([("blank".to_string(), String::new())].into_iter().collect());
    let rules = ResolutionRuleSet::single("prop1", rule);

    let result = set_properties::execute(&context(&ctx, &[("P1", "blank")]), &rules).unwrap();

    assert!(!result.is_modified());
    assert_eq!(ctx.read_properties(), "prop1=keep\n");
}
