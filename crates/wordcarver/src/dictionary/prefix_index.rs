//! # Byte Prefix Index

use crate::types::{WCHashMap, hash_map_new};

/// A node in a [`PrefixIndex`].
pub type NodeId = u32;

/// A byte-keyed trie mapping keys to slot indices.
///
/// Edges are stored flat as ``{ (node, byte) -> node }``, so a walk can be
/// resumed from any node with [`PrefixIndex::jump`].
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    edges: WCHashMap<(NodeId, u8), NodeId>,
    values: Vec<Option<usize>>,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    /// The root node; the walk start for every key.
    pub const ROOT: NodeId = 0;

    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            edges: hash_map_new(),
            values: vec![None],
        }
    }

    /// The number of trie nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.values.len()
    }

    /// Insert `key`, replacing any prior value.
    ///
    /// ## Returns
    /// The previous value for `key`, if any.
    pub fn insert(
        &mut self,
        key: &[u8],
        value: usize,
    ) -> Option<usize> {
        let mut node = Self::ROOT;
        for &b in key {
            node = match self.edges.get(&(node, b)) {
                Some(&child) => child,
                None => {
                    let child = self.values.len() as NodeId;
                    self.values.push(None);
                    self.edges.insert((node, b), child);
                    child
                }
            };
        }
        self.values[node as usize].replace(value)
    }

    /// Look up the value stored at exactly `key`.
    pub fn get(
        &self,
        key: &[u8],
    ) -> Option<usize> {
        self.jump(Self::ROOT, key).and_then(|node| self.value(node))
    }

    /// Walk `bytes` down from `from`.
    ///
    /// ## Returns
    /// The node reached, or `None` if some byte has no continuation.
    pub fn jump(
        &self,
        from: NodeId,
        bytes: &[u8],
    ) -> Option<NodeId> {
        let mut node = from;
        for &b in bytes {
            node = *self.edges.get(&(node, b))?;
        }
        Some(node)
    }

    /// The value stored at `node`, if a key ends there.
    pub fn value(
        &self,
        node: NodeId,
    ) -> Option<usize> {
        self.values.get(node as usize).copied().flatten()
    }
}
