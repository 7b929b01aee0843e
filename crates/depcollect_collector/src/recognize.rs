use swc_core::ecma::ast::{Callee, CallExpr, Expr};

use crate::scope::ScopeInfo;

const REQUIRE: &str = "require";
const JS_RESOURCE: &str = "__jsResource";
const CONDITIONAL_SPLIT: &str = "__conditionallySplitJSResource";
const PREFETCH_IMPORT: &str = "__prefetchImport";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SiteKind {
  SyncRequire,
  AsyncImport,
  JsResource,
  ConditionalSplit,
  PrefetchImport,
}

impl SiteKind {
  pub(crate) fn is_async(self) -> bool {
    !matches!(self, Self::SyncRequire)
  }

  pub(crate) fn is_prefetch_only(self) -> bool {
    matches!(self, Self::PrefetchImport)
  }

  /// `None` for a plain `require`/dynamic-import call (no `.resource`/
  /// `.prefetch` hop on the loader), `Some` naming the loader method the
  /// rewriter should hang the call off of otherwise.
  pub(crate) fn loader_method(self) -> Option<&'static str> {
    match self {
      Self::JsResource | Self::ConditionalSplit => Some("resource"),
      Self::PrefetchImport => Some("prefetch"),
      Self::AsyncImport | Self::SyncRequire => None,
    }
  }

  /// The number of arguments the shape is syntactically allowed to carry.
  pub(crate) fn expected_argc(self) -> usize {
    match self {
      Self::ConditionalSplit => 2,
      _ => 1,
    }
  }
}

/// Classifies a call expression as one of the recognized dependency shapes,
/// or returns `None` if it isn't one — including when the bare callee name
/// would match but is shadowed by a local declaration.
pub(crate) fn classify(call: &CallExpr, scope: &ScopeInfo) -> Option<SiteKind> {
  match &call.callee {
    Callee::Import(_) => Some(SiteKind::AsyncImport),
    Callee::Super(_) => None,
    Callee::Expr(expr) => {
      let Expr::Ident(ident) = &**expr else {
        return None;
      };
      if !scope.is_builtin(ident) {
        return None;
      }
      match ident.sym.as_ref() {
        REQUIRE => Some(SiteKind::SyncRequire),
        JS_RESOURCE => Some(SiteKind::JsResource),
        CONDITIONAL_SPLIT => Some(SiteKind::ConditionalSplit),
        PREFETCH_IMPORT => Some(SiteKind::PrefetchImport),
        _ => None,
      }
    }
  }
}
