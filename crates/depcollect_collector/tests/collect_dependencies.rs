mod common;

use common::{default_config, run};
use depcollect_collector::{CollectDependenciesConfig, DynamicRequiresBehavior};

#[test]
fn dedups_repeated_sync_requires_by_name() {
  let source = r#"
    const a = require('b/lib/a');
    exports.do = () => require("do");
    if (!x) { require("setup/something") }
    require('do');
  "#;
  let result = run(source, default_config()).expect("pass should succeed");

  let names: Vec<&str> = result.dependencies.iter().map(|d| d.name.as_str()).collect();
  assert_eq!(names, vec!["b/lib/a", "do", "setup/something"]);
  assert!(result.dependencies.iter().all(|d| !d.data.is_async));

  let do_dep = result.dependencies.iter().find(|d| d.name == "do").unwrap();
  assert_eq!(do_dep.data.locs.len(), 2);

  let indexed = format!("{}[{}]", result.dependency_map_name, do_dep.index);
  assert!(
    result.code.matches(&indexed).count() == 2,
    "both `do` sites should rewrite to the same index, got:\n{}",
    result.code
  );
}

#[test]
fn async_import_then_sync_require_converges_to_sync() {
  let source = r#"
    import("m").then(f => {});
    const a = require("m");
  "#;
  let result = run(source, default_config()).expect("pass should succeed");

  let names: Vec<&str> = result.dependencies.iter().map(|d| d.name.as_str()).collect();
  assert_eq!(names, vec!["m", "metro-runtime/src/modules/asyncRequire"]);

  let m = &result.dependencies[0];
  assert!(!m.data.is_async, "sync use must win over async use");
  assert!(!m.data.is_prefetch_only);
}

#[test]
fn prefetch_only_is_downgraded_by_a_later_non_prefetch_site() {
  let source = r#"
    __prefetchImport("m");
    import("m").then(() => {});
  "#;
  let result = run(source, default_config()).expect("pass should succeed");

  let m = result.dependencies.iter().find(|d| d.name == "m").unwrap();
  assert!(m.data.is_async);
  assert!(!m.data.is_prefetch_only);
}

#[test]
fn folds_string_concatenation_against_a_const_binding() {
  let source = r#"
    const v = "my";
    require("foo_" + v);
  "#;
  let result = run(source, default_config()).expect("pass should succeed");

  assert_eq!(result.dependencies.len(), 1);
  assert_eq!(result.dependencies[0].name, "foo_my");
  assert!(!result.dependencies[0].data.is_async);
}

#[test]
fn rejects_a_dynamic_template_interpolation_by_default() {
  let source = r#"
    let foo;
    require(`left${foo}pad`);
  "#;
  let err = run(source, default_config()).expect_err("an unfoldable interpolation must fail");
  assert!(err.contains("interpolation"));
}

#[test]
fn throw_at_runtime_policy_rewrites_instead_of_failing() {
  let mut config = default_config();
  config.dynamic_requires = DynamicRequiresBehavior::ThrowAtRuntime;

  let source = "require(1);";
  let result = run(source, config).expect("throwAtRuntime must not abort the pass");

  assert!(result.dependencies.is_empty());
  assert!(result.code.contains("not supported by Metro"));
  assert!(result.code.contains("1"));
}

#[test]
fn a_shadowing_local_binding_suppresses_collection_in_its_scope() {
  let source = r#"
    function outer() {
      const require = (x) => x;
      require("shadowed");
    }
    require("real");
  "#;
  let result = run(source, default_config()).expect("pass should succeed");

  let names: Vec<&str> = result.dependencies.iter().map(|d| d.name.as_str()).collect();
  assert_eq!(names, vec!["real"]);
}

#[test]
fn records_one_location_per_shape_and_none_for_the_loader() {
  let source = r#"
    require("a");
    import("b");
    __jsResource("c");
    __conditionallySplitJSResource("d", {});
    __prefetchImport("e");
  "#;
  let result = run(source, default_config()).expect("pass should succeed");

  let loader = result
    .dependencies
    .iter()
    .find(|d| d.name == "metro-runtime/src/modules/asyncRequire")
    .expect("async loader should be registered");
  assert!(loader.data.locs.is_empty());

  for name in ["a", "b", "c", "d", "e"] {
    let dep = result.dependencies.iter().find(|d| d.name == name).unwrap();
    assert_eq!(dep.data.locs.len(), 1, "{name} should have exactly one loc");
  }
}

#[test]
fn static_import_and_reexport_declarations_register_but_are_not_rewritten() {
  let source = r#"
    import type { T } from "types";
    export { x } from "reexported";
    export * from "star";
  "#;
  let result = run(source, default_config()).expect("pass should succeed");

  let names: Vec<&str> = result.dependencies.iter().map(|d| d.name.as_str()).collect();
  assert_eq!(names, vec!["types", "reexported", "star"]);
  assert!(result.dependencies.iter().all(|d| !d.data.is_async));
  assert!(result.code.contains("from \"types\""));
}

#[test]
fn keep_require_names_preserves_the_specifier_as_a_second_argument() {
  let mut config = default_config();
  config.keep_require_names = true;

  let result = run("require('pkg');", config).expect("pass should succeed");
  assert!(result.code.contains("\"pkg\""));
}

#[test]
fn config_deserializes_from_camel_case_json() {
  let json = r#"{
    "asyncRequireModulePath": "metro-runtime/src/modules/asyncRequire",
    "dynamicRequires": "throwAtRuntime",
    "keepRequireNames": true
  }"#;
  let config: CollectDependenciesConfig =
    serde_json::from_str(json).expect("config should deserialize");

  assert_eq!(config.dynamic_requires, DynamicRequiresBehavior::ThrowAtRuntime);
  assert!(config.keep_require_names);
  assert_eq!(config.async_require_module_path, "metro-runtime/src/modules/asyncRequire");
}
