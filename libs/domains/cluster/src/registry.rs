use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{Job, Node};

/// The Repository's authoritative set of Live Nodes, plus the dispatcher's
/// least-loaded selection logic.
///
/// Order of registration is tracked separately from the map so that
/// dispatcher tie-breaks are first-seen, matching the reference behavior,
/// without requiring an ordered-map dependency.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: HashMap<Uuid, Node>,
    order: Vec<Uuid>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a newly-registered Node. A Node removed by [`Self::evict`] never
    /// reappears with the same identifier, so re-insertion always means a
    /// fresh registration.
    pub fn insert(&mut self, node: Node) {
        let id = node.id;
        if self.nodes.insert(id, node).is_none() {
            self.order.push(id);
        }
    }

    /// Remove a Node from the registry. Returns the removed Node, if present.
    pub fn evict(&mut self, id: Uuid) -> Option<Node> {
        self.order.retain(|n| *n != id);
        self.nodes.remove(&id)
    }

    pub fn get(&self, id: Uuid) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn set_jobs_count(&mut self, id: Uuid, jobs_count: i32) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.jobs_count = jobs_count;
        }
    }

    pub fn replace_jobs(&mut self, id: Uuid, jobs: Vec<Job>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.jobs = jobs;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Snapshot every Live Node, in registration order.
    pub fn snapshot(&self) -> Vec<Node> {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id).cloned())
            .collect()
    }

    /// Registration-order identifiers, used by the sweep loop so each tick
    /// probes Nodes in a stable order.
    pub fn ids_in_order(&self) -> Vec<Uuid> {
        self.order.clone()
    }

    /// Select the least-loaded Node for dispatch: short-circuits on the
    /// first Node seen with `jobs_count == 0`, otherwise picks the minimum
    /// `jobs_count`, ties broken by first-seen order.
    pub fn select_least_loaded(&self) -> Option<Uuid> {
        let mut best: Option<(Uuid, i32)> = None;

        for id in &self.order {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };

            if node.jobs_count == 0 {
                return Some(*id);
            }

            match best {
                Some((_, best_count)) if node.jobs_count >= best_count => {}
                _ => best = Some((*id, node.jobs_count)),
            }
        }

        best.map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn node(id: Uuid, jobs_count: i32) -> Node {
        let mut n = Node::new(id, "w".into(), "127.0.0.1".into(), "9000".into());
        n.jobs_count = jobs_count;
        n
    }

    #[test]
    fn empty_registry_selects_nothing() {
        let registry = NodeRegistry::new();
        assert!(registry.select_least_loaded().is_none());
    }

    #[test]
    fn short_circuits_on_first_idle_node() {
        let mut registry = NodeRegistry::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        registry.insert(node(a, 3));
        registry.insert(node(b, 0));

        assert_eq!(registry.select_least_loaded(), Some(b));
    }

    #[test]
    fn picks_minimum_jobs_count_with_first_seen_tiebreak() {
        let mut registry = NodeRegistry::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        registry.insert(node(a, 5));
        registry.insert(node(b, 2));
        registry.insert(node(c, 2));

        assert_eq!(registry.select_least_loaded(), Some(b));
    }

    #[test]
    fn evicted_node_never_reappears() {
        let mut registry = NodeRegistry::new();
        let a = Uuid::new_v4();
        registry.insert(node(a, 0));
        registry.evict(a);

        assert!(registry.is_empty());
        assert_eq!(registry.select_least_loaded(), None);
    }
}
