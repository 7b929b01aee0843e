use depcollect_common::{Dependency, SourceLocation};
use depcollect_error::{InvalidRequireCallError, Result};
use swc_core::common::{Globals, Mark, Span, SourceMap, SyntaxContext, GLOBALS};
use swc_core::ecma::ast::{ExportAll, Expr, ImportDecl, NamedExport, Program, Script};
use swc_core::ecma::transforms::base::resolver;
use swc_core::ecma::visit::{FoldWith, VisitMut, VisitMutWith};
use tracing::instrument;

use crate::config::{CollectDependenciesConfig, DynamicRequiresBehavior};
use crate::dependency_map_name::fresh_dependency_map_name;
use crate::evaluate::{fold_specifier, FoldFailureKind};
use crate::recognize::{classify, SiteKind};
use crate::registry::DependencyRegistry;
use crate::rewrite::{rewrite_async_site, rewrite_require};
use crate::scope::{collect_const_bindings, ScopeInfo};

/// The pass's return value: the dependencies discovered, in first-discovery
/// order, and the fresh identifier every rewritten site now indexes into.
#[derive(Debug, Clone)]
pub struct CollectDependenciesResult {
  pub dependencies: Vec<Dependency>,
  pub dependency_map_name: String,
}

/// Walks `program`, rewriting every recognized dependency site in place and
/// returning a summary of what was found. A pure function of
/// `(program, source_map, config)` except for the in-place AST mutation: no
/// I/O, no shared state across calls, a fresh `Globals` per invocation.
#[instrument(skip_all)]
pub fn collect_dependencies(
  program: &mut Program,
  cm: &SourceMap,
  config: &CollectDependenciesConfig,
) -> Result<CollectDependenciesResult> {
  let globals = Globals::new();
  GLOBALS.set(&globals, || {
    let unresolved_mark = Mark::new();
    let top_level_mark = Mark::new();

    let placeholder = Program::Script(Script {
      span: Default::default(),
      body: Vec::new(),
      shebang: None,
    });
    let taken = std::mem::replace(program, placeholder);
    *program = taken.fold_with(&mut resolver(unresolved_mark, top_level_mark, false));

    let unresolved_ctxt = SyntaxContext::empty().apply_mark(unresolved_mark);
    let dependency_map_name = fresh_dependency_map_name(program);
    let const_bindings = collect_const_bindings(program);
    let scope = ScopeInfo {
      unresolved_ctxt,
      const_bindings,
    };

    let mut collector = Collector {
      cm,
      scope,
      config,
      registry: DependencyRegistry::default(),
      dependency_map_name: dependency_map_name.clone(),
      error: None,
    };
    program.visit_mut_with(&mut collector);

    if let Some(error) = collector.error {
      tracing::debug!(?error, "dependency collection aborted");
      return Err(error);
    }

    Ok(CollectDependenciesResult {
      dependencies: collector.registry.snapshot(),
      dependency_map_name,
    })
  })
}

struct Collector<'a> {
  cm: &'a SourceMap,
  scope: ScopeInfo,
  config: &'a CollectDependenciesConfig,
  registry: DependencyRegistry,
  dependency_map_name: String,
  error: Option<InvalidRequireCallError>,
}

impl Collector<'_> {
  fn loc(&self, span: Span) -> SourceLocation {
    SourceLocation::from_span(self.cm, span)
  }

  fn fail(&mut self, kind: FoldFailureKind, span: Span) {
    if self.error.is_some() {
      return;
    }
    let loc = self.loc(span);
    self.error = Some(match kind {
      FoldFailureKind::DynamicInterpolation => InvalidRequireCallError::dynamic_interpolation(loc),
      FoldFailureKind::TaggedTemplate => InvalidRequireCallError::tagged_template(loc),
      FoldFailureKind::NonStringArgument => InvalidRequireCallError::non_string_argument(loc),
    });
  }

  /// Returns `true` if `expr` was a recognized call site (whether it was
  /// successfully rewritten or turned into a fatal error) — in both cases
  /// the caller must not recurse into what used to be its children.
  fn handle_call(&mut self, expr: &mut Expr) -> bool {
    if self.error.is_some() {
      return false;
    }

    let call = match expr {
      Expr::Call(call) => call,
      _ => return false,
    };

    let Some(kind) = classify(call, &self.scope) else {
      return false;
    };

    let span = call.span;
    let expected_argc = kind.expected_argc();

    if call.args.len() != expected_argc || call.args[0].spread.is_some() {
      self.fail(FoldFailureKind::NonStringArgument, span);
      return true;
    }

    let first_arg_expr = (*call.args[0].expr).clone();

    match fold_specifier(&first_arg_expr, &self.scope) {
      Ok(specifier) => {
        let loc = self.loc(span);
        let dep_index = self.registry.register(
          &specifier,
          kind.is_async(),
          kind.is_prefetch_only(),
          Some(loc),
        );

        if kind == SiteKind::SyncRequire {
          let Expr::Call(call) = expr else {
            unreachable!("classified as a call above")
          };
          rewrite_require(
            call,
            &self.dependency_map_name,
            dep_index,
            &specifier,
            self.config.keep_require_names,
          );
        } else {
          let loader_index = self
            .registry
            .register_async_loader(&self.config.async_require_module_path);
          rewrite_async_site(
            expr,
            kind,
            &self.dependency_map_name,
            loader_index,
            dep_index,
            &specifier,
            self.config.keep_require_names,
          );
        }
        true
      }
      Err(failure) => {
        if kind == SiteKind::SyncRequire
          && self.config.dynamic_requires == DynamicRequiresBehavior::ThrowAtRuntime
          && failure.kind == FoldFailureKind::NonStringArgument
        {
          *expr = depcollect_swc_utils::throw_at_runtime_iife(span, first_arg_expr);
        } else {
          self.fail(failure.kind, failure.span);
        }
        true
      }
    }
  }

  fn register_static(&mut self, name: &str, span: Span) {
    if self.error.is_some() {
      return;
    }
    let loc = self.loc(span);
    self.registry.register(name, false, false, Some(loc));
  }
}

impl VisitMut for Collector<'_> {
  fn visit_mut_expr(&mut self, expr: &mut Expr) {
    if self.handle_call(expr) {
      return;
    }
    expr.visit_mut_children_with(self);
  }

  fn visit_mut_import_decl(&mut self, decl: &mut ImportDecl) {
    let span = decl.span;
    let src = decl.src.value.to_string();
    self.register_static(&src, span);
  }

  fn visit_mut_named_export(&mut self, export: &mut NamedExport) {
    let span = export.span;
    if let Some(src) = export.src.clone() {
      self.register_static(&src.value, span);
    }
  }

  fn visit_mut_export_all(&mut self, export: &mut ExportAll) {
    let span = export.span;
    let src = export.src.value.to_string();
    self.register_static(&src, span);
  }
}
