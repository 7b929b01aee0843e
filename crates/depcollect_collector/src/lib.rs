mod config;
mod dependency_map_name;
mod driver;
mod evaluate;
mod recognize;
mod registry;
mod rewrite;
mod scope;

pub use config::{CollectDependenciesConfig, DynamicRequiresBehavior};
pub use driver::{collect_dependencies, CollectDependenciesResult};

pub use depcollect_common::{Dependency, DependencyData, Position, SourceLocation};
pub use depcollect_error::{InvalidRequireCallError, InvalidRequireCallKind};
