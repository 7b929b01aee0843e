//! Answers the one predicate the recognizer needs: "is this bare reference
//! shadowed by something the module itself declares?" — plus the narrow
//! const-folding lookup the evaluator needs for identifier specifiers.
//!
//! Both are derived from a single `resolver` pass the driver runs up front:
//! that pass assigns every binding and every reference a `SyntaxContext`
//! such that references sharing a declaration share its context, and
//! references to nothing declared in the module keep the reserved
//! "unresolved" context. So "shadowed" reduces to a context inequality, and
//! "bound to this const declarator" reduces to a `(symbol, context)` lookup
//! — no hand-maintained frame stack required.

use rustc_hash::FxHashMap;
use swc_core::ecma::ast::{Expr, Ident, Program, VarDecl, VarDeclKind};
use swc_core::ecma::atoms::JsWord;
use swc_core::ecma::visit::{Visit, VisitWith};

use swc_core::common::SyntaxContext;

#[derive(Default)]
pub(crate) struct ConstBindings {
  inits: FxHashMap<(JsWord, SyntaxContext), Expr>,
}

impl ConstBindings {
  fn get(&self, ident: &Ident) -> Option<&Expr> {
    self.inits.get(&(ident.sym.clone(), ident.span.ctxt))
  }
}

struct ConstCollector<'a> {
  bindings: &'a mut ConstBindings,
}

impl Visit for ConstCollector<'_> {
  fn visit_var_decl(&mut self, decl: &VarDecl) {
    if decl.kind == VarDeclKind::Const {
      for declarator in &decl.decls {
        if let (swc_core::ecma::ast::Pat::Ident(binding), Some(init)) =
          (&declarator.name, &declarator.init)
        {
          self.bindings.inits.insert(
            (binding.id.sym.clone(), binding.id.span.ctxt),
            (**init).clone(),
          );
        }
      }
    }
    decl.visit_children_with(self);
  }
}

pub(crate) fn collect_const_bindings(program: &Program) -> ConstBindings {
  let mut bindings = ConstBindings::default();
  let mut collector = ConstCollector {
    bindings: &mut bindings,
  };
  program.visit_with(&mut collector);
  bindings
}

pub(crate) struct ScopeInfo {
  pub(crate) unresolved_ctxt: SyntaxContext,
  pub(crate) const_bindings: ConstBindings,
}

impl ScopeInfo {
  /// True iff nothing declared in the module shadows this reference — i.e.
  /// it genuinely refers to the module-level built-in.
  pub(crate) fn is_builtin(&self, ident: &Ident) -> bool {
    ident.span.ctxt == self.unresolved_ctxt
  }

  /// The initializer of the `const` this identifier is bound to, if any.
  pub(crate) fn resolve_const(&self, ident: &Ident) -> Option<&Expr> {
    self.const_bindings.get(ident)
  }
}
