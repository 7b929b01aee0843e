//! Small, self-contained `swc_core` AST builders shared by the rewriter.
//!
//! Nothing here inspects or mutates existing nodes — it only constructs new
//! ones, so every node built carries the `Span` it is handed verbatim.

use swc_core::ecma::ast::{
  BinExpr, BinaryOp, BindingIdent, BlockStmt, CallExpr, Callee, ComputedPropName, Expr,
  ExprOrSpread, FnExpr, Function, Ident, Lit, MemberExpr, MemberProp, NewExpr, Number, Param,
  ParenExpr, Pat, Stmt, Str, ThrowStmt,
};
use swc_core::ecma::atoms::JsWord;

use swc_core::common::Span;

pub fn ident(span: Span, sym: &str) -> Ident {
  Ident::new(JsWord::from(sym), span)
}

pub fn ident_expr(span: Span, sym: &str) -> Expr {
  Expr::Ident(ident(span, sym))
}

pub fn num_lit(span: Span, value: u32) -> Expr {
  Expr::Lit(Lit::Num(Number {
    span,
    value: f64::from(value),
    raw: None,
  }))
}

pub fn str_lit(span: Span, value: &str) -> Expr {
  Expr::Lit(Lit::Str(Str {
    span,
    value: JsWord::from(value),
    raw: None,
  }))
}

/// Builds `obj[index]`.
pub fn computed_member(span: Span, obj: Expr, index: u32) -> Expr {
  Expr::Member(MemberExpr {
    span,
    obj: Box::new(obj),
    prop: MemberProp::Computed(ComputedPropName {
      span,
      expr: Box::new(num_lit(span, index)),
    }),
  })
}

/// Builds `obj.prop_name`.
pub fn member(span: Span, obj: Expr, prop_name: &str) -> Expr {
  Expr::Member(MemberExpr {
    span,
    obj: Box::new(obj),
    prop: MemberProp::Ident(ident(span, prop_name)),
  })
}

/// Builds `callee(args...)`.
pub fn call(span: Span, callee: Expr, args: Vec<Expr>) -> Expr {
  Expr::Call(CallExpr {
    span,
    callee: Callee::Expr(Box::new(callee)),
    args: args_from(args),
    type_args: None,
  })
}

pub fn paren(span: Span, expr: Expr) -> Expr {
  Expr::Paren(ParenExpr {
    span,
    expr: Box::new(expr),
  })
}

fn args_from(exprs: Vec<Expr>) -> Vec<ExprOrSpread> {
  exprs
    .into_iter()
    .map(|expr| ExprOrSpread {
      spread: None,
      expr: Box::new(expr),
    })
    .collect()
}

/// Builds the canonical `(function (line) { throw new Error(...) })(arg)`
/// shape a `require` call with an unfoldable specifier is rewritten to under
/// the `throwAtRuntime` policy.
pub fn throw_at_runtime_iife(span: Span, original_arg: Expr) -> Expr {
  let param_ident = ident(span, "line");

  let message = Expr::Bin(BinExpr {
    span,
    op: BinaryOp::Add,
    left: Box::new(str_lit(span, "Dynamic require defined at line ")),
    right: Box::new(Expr::Bin(BinExpr {
      span,
      op: BinaryOp::Add,
      left: Box::new(Expr::Ident(param_ident.clone())),
      right: Box::new(str_lit(span, "; not supported by Metro")),
    })),
  });

  let throw_stmt = Stmt::Throw(ThrowStmt {
    span,
    arg: Box::new(Expr::New(NewExpr {
      span,
      callee: Box::new(ident_expr(span, "Error")),
      args: Some(args_from(vec![message])),
      type_args: None,
    })),
  });

  let function = Function {
    params: vec![Param {
      span,
      decorators: vec![],
      pat: Pat::Ident(BindingIdent {
        id: param_ident,
        type_ann: None,
      }),
    }],
    decorators: vec![],
    span,
    body: Some(BlockStmt {
      span,
      stmts: vec![throw_stmt],
    }),
    is_generator: false,
    is_async: false,
    type_params: None,
    return_type: None,
  };

  let fn_expr = Expr::Fn(FnExpr {
    ident: None,
    function: Box::new(function),
  });

  call(span, paren(span, fn_expr), vec![original_arg])
}
