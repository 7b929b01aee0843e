mod location;

pub use location::{Position, SourceLocation};

/// One statically discovered module dependency.
///
/// `index` mirrors the dependency's position in a [`Vec<Dependency>`]
/// snapshot taken from the registry; it is carried on the value itself so a
/// `Dependency` remains meaningful after being cloned out of that list.
#[derive(Debug, Clone, PartialEq)]
pub struct Dependency {
  pub name: String,
  pub index: u32,
  pub data: DependencyData,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyData {
  pub is_async: bool,
  pub is_prefetch_only: bool,
  pub locs: Vec<SourceLocation>,
}
