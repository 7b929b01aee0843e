//! The constant-expression language the specifier position of every
//! recognized call is folded against. Deliberately tiny: no side effects, no
//! control flow, no reassignable bindings. Anything outside this grammar is
//! a failure, never a best-effort guess.

use swc_core::common::{Span, Spanned};
use swc_core::ecma::ast::{BinaryOp, Expr, Lit, Tpl};

use crate::scope::ScopeInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FoldFailureKind {
  DynamicInterpolation,
  TaggedTemplate,
  NonStringArgument,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FoldFailure {
  pub(crate) span: Span,
  pub(crate) kind: FoldFailureKind,
}

pub(crate) fn fold_specifier(expr: &Expr, scope: &ScopeInfo) -> Result<String, FoldFailure> {
  match expr {
    Expr::Lit(Lit::Str(s)) => Ok(s.value.to_string()),
    Expr::Paren(paren) => fold_specifier(&paren.expr, scope),
    Expr::Tpl(tpl) => fold_template(tpl, scope),
    Expr::TaggedTpl(tagged) => Err(FoldFailure {
      span: tagged.span,
      kind: FoldFailureKind::TaggedTemplate,
    }),
    Expr::Bin(bin) if bin.op == BinaryOp::Add => {
      let left = fold_specifier(&bin.left, scope)?;
      let right = fold_specifier(&bin.right, scope)?;
      Ok(left + &right)
    }
    Expr::Ident(ident) => match scope.resolve_const(ident) {
      Some(init) => fold_specifier(init, scope),
      None => Err(FoldFailure {
        span: ident.span,
        kind: FoldFailureKind::NonStringArgument,
      }),
    },
    other => Err(FoldFailure {
      span: other.span(),
      kind: FoldFailureKind::NonStringArgument,
    }),
  }
}

fn fold_template(tpl: &Tpl, scope: &ScopeInfo) -> Result<String, FoldFailure> {
  if tpl.exprs.is_empty() {
    let cooked = tpl
      .quasis
      .first()
      .and_then(|quasi| quasi.cooked.as_ref())
      .map(|cooked| cooked.to_string())
      .unwrap_or_default();
    return Ok(cooked);
  }

  let mut out = String::new();
  for (index, quasi) in tpl.quasis.iter().enumerate() {
    out.push_str(quasi.cooked.as_deref().unwrap_or(""));
    if let Some(expr) = tpl.exprs.get(index) {
      match fold_specifier(expr, scope) {
        Ok(value) => out.push_str(&value),
        Err(_) => {
          return Err(FoldFailure {
            span: expr.span(),
            kind: FoldFailureKind::DynamicInterpolation,
          })
        }
      }
    }
  }
  Ok(out)
}
