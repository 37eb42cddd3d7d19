use super::*;

/// The set of nodes that must survive text stripping.
///
/// Computed once per transform before anything is removed, so membership
/// never changes while the strip stage consults it.
#[derive(Debug, Default)]
pub(crate) struct Classification {
  preserved: HashSet<NodeId>,
}

impl Classification {
  pub(crate) fn contains(&self, id: NodeId) -> bool {
    self.preserved.contains(&id)
  }

  pub(crate) fn insert(&mut self, id: NodeId) {
    self.preserved.insert(id);
  }

  pub(crate) fn len(&self) -> usize {
    self.preserved.len()
  }
}
