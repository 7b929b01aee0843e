use swc_core::common::Spanned;
use swc_core::ecma::ast::{CallExpr, Expr, ExprOrSpread};

use crate::recognize::SiteKind;

fn args_from(exprs: Vec<Expr>) -> Vec<ExprOrSpread> {
  exprs
    .into_iter()
    .map(|expr| ExprOrSpread {
      spread: None,
      expr: Box::new(expr),
    })
    .collect()
}

/// `require(x)` -> `require(M[i], s)`. The callee identifier is left alone:
/// it already refers to the module-level built-in, only its arguments
/// change.
pub(crate) fn rewrite_require(
  call: &mut CallExpr,
  map_name: &str,
  dep_index: u32,
  specifier: &str,
  keep_names: bool,
) {
  let span = call.span;
  let mut args = vec![depcollect_swc_utils::computed_member(
    span,
    depcollect_swc_utils::ident_expr(span, map_name),
    dep_index,
  )];
  if keep_names {
    args.push(depcollect_swc_utils::str_lit(span, specifier));
  }
  call.args = args_from(args);
}

/// Replaces the whole recognized expression (dynamic `import()`,
/// `__jsResource`, `__conditionallySplitJSResource`, `__prefetchImport`)
/// with a call against the async loader: `require(M[j], "asyncRequire")`,
/// optionally hung off a `.resource`/`.prefetch` member, then called with
/// `(M[i], s)`. The surrounding expression context (e.g. a `.then(...)`
/// hung off the original node) lives one level up in the tree and is
/// untouched by replacing only this node.
pub(crate) fn rewrite_async_site(
  expr: &mut Expr,
  kind: SiteKind,
  map_name: &str,
  loader_index: u32,
  dep_index: u32,
  specifier: &str,
  keep_names: bool,
) {
  let span = expr.span();

  let loader = depcollect_swc_utils::call(
    span,
    depcollect_swc_utils::ident_expr(span, "require"),
    vec![
      depcollect_swc_utils::computed_member(
        span,
        depcollect_swc_utils::ident_expr(span, map_name),
        loader_index,
      ),
      depcollect_swc_utils::str_lit(span, "asyncRequire"),
    ],
  );

  let callee = match kind.loader_method() {
    Some(method) => depcollect_swc_utils::member(span, loader, method),
    None => loader,
  };

  let mut args = vec![depcollect_swc_utils::computed_member(
    span,
    depcollect_swc_utils::ident_expr(span, map_name),
    dep_index,
  )];
  if keep_names {
    args.push(depcollect_swc_utils::str_lit(span, specifier));
  }

  *expr = depcollect_swc_utils::call(span, callee, args);
}
