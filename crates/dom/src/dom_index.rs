//! A minimal DOM index for element references (`#header`, `.footer`, `header`).
//!
//! The index subscribes to DOMUpdate values and only tracks what limit
//! resolution needs: parent/child links, ids and class tokens.

use crate::{DOMSubscriber, DOMUpdate, NodeKey};
use anyhow::Result;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct DomIndex {
    /// Map node -> current id attribute (if any).
    id_by_key: HashMap<NodeKey, String>,
    /// Map node -> current class tokens (lowercase).
    classes_by_key: HashMap<NodeKey, HashSet<String>>,
    children_by_parent: HashMap<NodeKey, Vec<NodeKey>>,
    parent_by_child: HashMap<NodeKey, NodeKey>,
    /// Every node carrying an id; lookups pick the first in document order.
    id_index: HashMap<String, Vec<NodeKey>>,
}

impl DomIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a node (and its descendants) from all indices.
    fn remove_recursively(&mut self, node: NodeKey) {
        if let Some(children) = self.children_by_parent.remove(&node) {
            for child in children {
                self.remove_recursively(child);
            }
        }
        if let Some(parent) = self.parent_by_child.remove(&node) {
            if let Some(siblings) = self.children_by_parent.get_mut(&parent) {
                siblings.retain(|sibling| *sibling != node);
            }
        }
        self.release_id(node);
        self.classes_by_key.remove(&node);
    }

    /// Drop this node from the reverse id mapping, keeping other holders.
    fn release_id(&mut self, node: NodeKey) {
        if let Some(id) = self.id_by_key.remove(&node) {
            if let Some(holders) = self.id_index.get_mut(&id) {
                holders.retain(|holder| *holder != node);
                if holders.is_empty() {
                    self.id_index.remove(&id);
                }
            }
        }
    }

    fn set_id_for(&mut self, node: NodeKey, value: String) {
        self.release_id(node);
        if !value.is_empty() {
            self.id_by_key.insert(node, value.clone());
            self.id_index.entry(value).or_default().push(node);
        }
    }

    /// First node in document order (depth-first from the root) matching `hit`.
    fn first_in_document_order(&self, hit: impl Fn(NodeKey) -> bool) -> Option<NodeKey> {
        fn walk(
            index: &DomIndex,
            node: NodeKey,
            hit: &dyn Fn(NodeKey) -> bool,
        ) -> Option<NodeKey> {
            if hit(node) {
                return Some(node);
            }
            index
                .children_by_parent
                .get(&node)?
                .iter()
                .find_map(|child| walk(index, *child, hit))
        }
        walk(self, NodeKey::ROOT, &hit)
    }

    fn set_classes_for(&mut self, node: NodeKey, class_attr: &str) {
        let tokens: HashSet<String> = class_attr
            .split_whitespace()
            .map(str::to_ascii_lowercase)
            .collect();
        if tokens.is_empty() {
            self.classes_by_key.remove(&node);
        } else {
            self.classes_by_key.insert(node, tokens);
        }
    }

    /// Return the NodeKey for the element with the given id (case-sensitive).
    /// Duplicate ids resolve to the first holder in document order.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeKey> {
        match self.id_index.get(id)?.as_slice() {
            [] => None,
            [only] => Some(*only),
            holders => self.first_in_document_order(|node| holders.contains(&node)),
        }
    }

    /// First element in document order carrying the class token.
    pub fn first_element_by_class_name(&self, class: &str) -> Option<NodeKey> {
        let needle = class.to_ascii_lowercase();
        self.first_in_document_order(|node| {
            self.classes_by_key
                .get(&node)
                .is_some_and(|classes| classes.contains(&needle))
        })
    }

    /// Resolve an element reference: `#id`, `.class`, or a bare id.
    pub fn resolve(&self, target: &str) -> Option<NodeKey> {
        let target = target.trim();
        if let Some(class) = target.strip_prefix('.') {
            self.first_element_by_class_name(class)
        } else {
            self.get_element_by_id(target.strip_prefix('#').unwrap_or(target))
        }
    }
}

impl DOMSubscriber for DomIndex {
    fn apply_update(&mut self, update: DOMUpdate) -> Result<()> {
        use DOMUpdate::*;
        match update {
            InsertElement {
                parent,
                node,
                pos,
                ..
            } => {
                self.parent_by_child.insert(node, parent);
                let siblings = self.children_by_parent.entry(parent).or_default();
                if !siblings.contains(&node) {
                    siblings.insert(pos.min(siblings.len()), node);
                }
            }
            SetAttr { node, name, value } => {
                let name_lc = name.to_ascii_lowercase();
                if name_lc == "id" {
                    self.set_id_for(node, value);
                } else if name_lc == "class" {
                    self.set_classes_for(node, &value);
                }
            }
            RemoveNode { node } => self.remove_recursively(node),
            SetLayout { .. } | EndOfDocument => {}
        }
        Ok(())
    }
}
