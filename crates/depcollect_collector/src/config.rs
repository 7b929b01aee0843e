use derivative::Derivative;
use rustc_hash::FxHashSet;
use serde::Deserialize;

/// How an unfoldable `require(...)` specifier is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DynamicRequiresBehavior {
  /// Raise `InvalidRequireCallError` and abort the pass.
  Reject,
  /// Rewrite the call to an IIFE that throws at runtime instead of failing
  /// the pass. Only applies to the non-string-argument failure on a
  /// synchronous `require` site; every other failure still aborts.
  ThrowAtRuntime,
}

impl Default for DynamicRequiresBehavior {
  fn default() -> Self {
    Self::Reject
  }
}

#[derive(Derivative, Deserialize)]
#[derivative(Debug)]
#[serde(rename_all = "camelCase")]
pub struct CollectDependenciesConfig {
  /// Required: the specifier the synthetic async loader is registered and
  /// referred to under. Unlike the fields below, this has no sane default.
  pub async_require_module_path: String,
  #[serde(default)]
  pub dynamic_requires: DynamicRequiresBehavior,
  #[serde(default)]
  pub inlineable_calls: FxHashSet<String>,
  #[serde(default)]
  pub keep_require_names: bool,
}

impl CollectDependenciesConfig {
  pub fn new(async_require_module_path: impl Into<String>) -> Self {
    Self {
      async_require_module_path: async_require_module_path.into(),
      dynamic_requires: DynamicRequiresBehavior::default(),
      inlineable_calls: FxHashSet::default(),
      keep_require_names: false,
    }
  }
}
