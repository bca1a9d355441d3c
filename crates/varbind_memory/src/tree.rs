//! Node tree storage

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use varbind_core::{NodeId, SceneNode};

new_key_type! {
    pub struct NodeKey;
}

/// Scene nodes stored in a slot map, addressed by their host ids
#[derive(Default)]
pub struct NodeTree {
    nodes: SlotMap<NodeKey, SceneNode>,
    index: FxHashMap<NodeId, NodeKey>,
    roots: Vec<NodeId>,
}

impl NodeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node; children are attached with [`NodeTree::add_child`].
    /// A node with an existing id replaces it and keeps its children.
    pub fn insert(&mut self, mut node: SceneNode) -> NodeKey {
        if let Some(&key) = self.index.get(&node.id) {
            node.children = std::mem::take(&mut self.nodes[key].children);
            self.nodes[key] = node;
            return key;
        }
        node.children.clear();
        let id = node.id.clone();
        let key = self.nodes.insert(node);
        self.index.insert(id, key);
        key
    }

    /// Insert a top-level node
    pub fn insert_root(&mut self, node: SceneNode) -> NodeKey {
        let id = node.id.clone();
        let key = self.insert(node);
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
        key
    }

    /// Append a child to a parent node
    pub fn add_child(&mut self, parent: &NodeId, child: &NodeId) {
        if !self.index.contains_key(child) {
            return;
        }
        if let Some(&parent_key) = self.index.get(parent) {
            self.nodes[parent_key].children.push(child.clone());
        }
    }

    pub fn get(&self, id: &NodeId) -> Option<&SceneNode> {
        self.index.get(id).and_then(|&key| self.nodes.get(key))
    }

    pub fn get_mut(&mut self, id: &NodeId) -> Option<&mut SceneNode> {
        let key = *self.index.get(id)?;
        self.nodes.get_mut(key)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove a node and its whole subtree
    pub fn remove_node(&mut self, id: &NodeId) {
        let Some(key) = self.index.remove(id) else {
            return;
        };
        if let Some(node) = self.nodes.remove(key) {
            for child in &node.children {
                self.remove_node(child);
            }
        }
        self.roots.retain(|root| root != id);
        for node in self.nodes.values_mut() {
            node.children.retain(|child| child != id);
        }
    }
}
