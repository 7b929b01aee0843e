use std::fmt;

use depcollect_common::SourceLocation;

/// The single error kind the dependency collector raises: a call or
/// declaration whose specifier position could not be resolved to a constant
/// string at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRequireCallError {
  pub kind: InvalidRequireCallKind,
  pub loc: SourceLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRequireCallKind {
  DynamicInterpolation,
  TaggedTemplate,
  NonStringArgument,
}

impl InvalidRequireCallError {
  pub fn dynamic_interpolation(loc: SourceLocation) -> Self {
    Self {
      kind: InvalidRequireCallKind::DynamicInterpolation,
      loc,
    }
  }

  pub fn tagged_template(loc: SourceLocation) -> Self {
    Self {
      kind: InvalidRequireCallKind::TaggedTemplate,
      loc,
    }
  }

  pub fn non_string_argument(loc: SourceLocation) -> Self {
    Self {
      kind: InvalidRequireCallKind::NonStringArgument,
      loc,
    }
  }
}

impl fmt::Display for InvalidRequireCallError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let reason = match self.kind {
      InvalidRequireCallKind::DynamicInterpolation => {
        "a template interpolation could not be resolved to a string at build time"
      }
      InvalidRequireCallKind::TaggedTemplate => "tagged templates are not supported here",
      InvalidRequireCallKind::NonStringArgument => {
        "the first argument is not a string, a concatenation of strings, or a const bound to one"
      }
    };
    write!(
      f,
      "Invalid call at line {}: {reason}",
      self.loc.start.line
    )
  }
}

impl std::error::Error for InvalidRequireCallError {}

pub type Result<T> = std::result::Result<T, InvalidRequireCallError>;
