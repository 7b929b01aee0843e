use depcollect_common::{Dependency, DependencyData, SourceLocation};
use rustc_hash::FxHashMap;

/// Interns dependencies by name, merges repeated discoveries, and assigns
/// stable, dense indices in first-discovery order.
#[derive(Debug, Default)]
pub(crate) struct DependencyRegistry {
  entries: Vec<(String, DependencyData)>,
  index_by_name: FxHashMap<String, u32>,
}

impl DependencyRegistry {
  pub(crate) fn register(
    &mut self,
    name: &str,
    is_async: bool,
    is_prefetch_only: bool,
    loc: Option<SourceLocation>,
  ) -> u32 {
    if let Some(&index) = self.index_by_name.get(name) {
      let data = &mut self.entries[index as usize].1;
      data.is_async &= is_async;
      data.is_prefetch_only &= is_prefetch_only;
      if let Some(loc) = loc {
        data.locs.push(loc);
      }
      index
    } else {
      let index = self.entries.len() as u32;
      let mut data = DependencyData {
        is_async,
        is_prefetch_only,
        locs: Vec::new(),
      };
      if let Some(loc) = loc {
        data.locs.push(loc);
      }
      self.entries.push((name.to_string(), data));
      self.index_by_name.insert(name.to_string(), index);
      index
    }
  }

  /// Idempotent registration of the synthetic async-loader dependency. Goes
  /// through `register` like everything else, so if a real import of the
  /// same specifier is later seen it merges into this entry rather than
  /// creating a second one — and because the loader's own flags are always
  /// `false`, that shared entry can never regain `isPrefetchOnly`.
  pub(crate) fn register_async_loader(&mut self, name: &str) -> u32 {
    self.register(name, false, false, None)
  }

  pub(crate) fn snapshot(&self) -> Vec<Dependency> {
    self
      .entries
      .iter()
      .enumerate()
      .map(|(index, (name, data))| Dependency {
        name: name.clone(),
        index: index as u32,
        data: data.clone(),
      })
      .collect()
  }
}
