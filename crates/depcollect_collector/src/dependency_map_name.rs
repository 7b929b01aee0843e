use rustc_hash::FxHashSet;
use swc_core::ecma::ast::{Ident, Program};
use swc_core::ecma::atoms::JsWord;
use swc_core::ecma::visit::{Visit, VisitWith};

struct IdentCollector<'a> {
  names: &'a mut FxHashSet<JsWord>,
}

impl Visit for IdentCollector<'_> {
  fn visit_ident(&mut self, ident: &Ident) {
    self.names.insert(ident.sym.clone());
  }
}

/// Picks an identifier guaranteed not to collide with any binding or
/// reference visible anywhere in the module, by scanning every symbol that
/// occurs in it and walking a fixed prefix plus a numeric disambiguator
/// until one is free.
pub(crate) fn fresh_dependency_map_name(program: &Program) -> String {
  let mut names = FxHashSet::default();
  let mut collector = IdentCollector { names: &mut names };
  program.visit_with(&mut collector);

  let mut candidate = "_dependencyMap".to_string();
  let mut suffix = 0u32;
  while names.contains(&JsWord::from(candidate.as_str())) {
    suffix += 1;
    candidate = format!("_dependencyMap{suffix}");
  }
  candidate
}
