use swc_core::common::{SourceMap, Span};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
  pub line: u32,
  pub column: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceLocation {
  pub start: Position,
  pub end: Position,
}

impl SourceLocation {
  pub fn from_span(cm: &SourceMap, span: Span) -> Self {
    let lo = cm.lookup_char_pos(span.lo);
    let hi = cm.lookup_char_pos(span.hi);
    Self {
      start: Position {
        line: lo.line as u32,
        column: lo.col.0 as u32,
      },
      end: Position {
        line: hi.line as u32,
        column: hi.col.0 as u32,
      },
    }
  }
}
