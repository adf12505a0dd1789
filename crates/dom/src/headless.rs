use crate::dom_index::DomIndex;
use crate::transform::parse_translate;
use crate::{DOMSubscriber, DOMUpdate, HostSettings, LayoutHost, NodeKey, Rect, ViewportMetrics};
use anyhow::{Result, anyhow, bail};
use indextree::{Arena, NodeId};
use log::{trace, warn};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct HeadlessNode {
    pub key: NodeKey,
    pub tag: String,
    pub attrs: SmallVec<[(String, String); 4]>,
    /// Border box in document coordinates (scroll position not applied).
    pub layout: Rect,
    pub styles: SmallVec<[(String, String); 4]>,
}

impl HeadlessNode {
    fn style(&self, name: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(prop, _)| prop == name)
            .map(|(_, value)| value.as_str())
    }

    fn set_style(&mut self, name: &str, value: &str) {
        match self.styles.iter_mut().find(|(prop, _)| prop == name) {
            Some(slot) => slot.1 = value.to_owned(),
            None => self.styles.push((name.to_owned(), value.to_owned())),
        }
    }

    fn set_attr(&mut self, name: String, value: String) {
        match self.attrs.iter_mut().find(|(attr, _)| *attr == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Vertical component of the inline `transform`, if it is a translate.
    fn translate_y(&self) -> f64 {
        self.style("transform")
            .and_then(parse_translate)
            .map_or(0.0, |(_, y)| y)
    }
}

#[derive(Debug)]
struct HeadlessState {
    arena: Arena<HeadlessNode>,
    root: NodeId,
    ids: HashMap<NodeKey, NodeId>,
    index: DomIndex,
    scroll_y: f64,
    viewport: ViewportMetrics,
}

impl HeadlessState {
    fn node_id(&self, key: NodeKey) -> Result<NodeId> {
        self.ids
            .get(&key)
            .copied()
            .ok_or_else(|| anyhow!("unknown node {key:?}"))
    }

    fn apply(&mut self, update: DOMUpdate) -> Result<()> {
        use DOMUpdate::*;
        match &update {
            InsertElement {
                parent,
                node,
                tag,
                pos,
            } => {
                if self.ids.contains_key(node) {
                    bail!("node {node:?} already exists");
                }
                let parent_id = self.node_id(*parent)?;
                let id = self.arena.new_node(HeadlessNode {
                    key: *node,
                    tag: tag.to_ascii_lowercase(),
                    ..HeadlessNode::default()
                });
                let sibling = parent_id.children(&self.arena).nth(*pos);
                match sibling {
                    Some(sibling) => sibling.insert_before(id, &mut self.arena),
                    None => parent_id.append(id, &mut self.arena),
                }
                self.ids.insert(*node, id);
            }
            SetAttr { node, name, value } => {
                let id = self.node_id(*node)?;
                self.node_mut(id)?.set_attr(name.clone(), value.clone());
            }
            SetLayout { node, rect } => {
                let id = self.node_id(*node)?;
                self.node_mut(id)?.layout = *rect;
            }
            RemoveNode { node } => {
                if *node == NodeKey::ROOT {
                    bail!("the document root cannot be removed");
                }
                let id = self.node_id(*node)?;
                let removed: Vec<NodeKey> = id
                    .descendants(&self.arena)
                    .filter_map(|desc| self.arena.get(desc).map(|n| n.get().key))
                    .collect();
                for key in removed {
                    self.ids.remove(&key);
                }
                id.remove_subtree(&mut self.arena);
            }
            EndOfDocument => {}
        }
        self.index.apply_update(update)
    }

    fn node(&self, key: NodeKey) -> Option<&HeadlessNode> {
        let id = self.ids.get(&key)?;
        self.arena.get(*id).map(indextree::Node::get)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut HeadlessNode> {
        self.arena
            .get_mut(id)
            .map(indextree::Node::get_mut)
            .ok_or_else(|| anyhow!("node was removed from the arena"))
    }
}

/// An in-memory [`LayoutHost`].
///
/// Layout boxes are set explicitly through [`DOMUpdate::SetLayout`] in
/// document coordinates. `bounding_rect` shifts them by the scroll position
/// and by any inline `translate(...)` on the node or its ancestors, which is
/// what a browser reports for a transformed element.
#[derive(Debug)]
pub struct HeadlessDom {
    inner: RefCell<HeadlessState>,
}

impl Default for HeadlessDom {
    fn default() -> Self {
        Self::new(HostSettings::default())
    }
}

impl HeadlessDom {
    pub fn new(settings: HostSettings) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(HeadlessNode {
            key: NodeKey::ROOT,
            tag: "#document".to_owned(),
            ..HeadlessNode::default()
        });
        let mut ids = HashMap::new();
        ids.insert(NodeKey::ROOT, root);
        Self {
            inner: RefCell::new(HeadlessState {
                arena,
                root,
                ids,
                index: DomIndex::new(),
                scroll_y: 0.0,
                viewport: settings.viewport(),
            }),
        }
    }

    /// Apply a DOM update through a shared reference.
    pub fn apply(&self, update: DOMUpdate) -> Result<()> {
        trace!("headless dom update: {update:?}");
        self.inner.borrow_mut().apply(update)
    }

    /// Apply a batch of updates, stopping at the first failure.
    pub fn apply_all(&self, updates: impl IntoIterator<Item = DOMUpdate>) -> Result<()> {
        updates.into_iter().try_for_each(|update| self.apply(update))
    }

    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.inner.borrow_mut().scroll_y = scroll_y;
    }

    pub fn set_viewport(&self, viewport: ViewportMetrics) {
        self.inner.borrow_mut().viewport = viewport;
    }

    /// Convenience for setting every width source at once.
    pub fn set_viewport_width(&self, width: f64) {
        let mut state = self.inner.borrow_mut();
        let height = state.viewport.height;
        state.viewport = ViewportMetrics::uniform(width, height);
    }

    pub fn contains(&self, node: NodeKey) -> bool {
        self.inner.borrow().ids.contains_key(&node)
    }

    pub fn attr(&self, node: NodeKey, name: &str) -> Option<String> {
        let state = self.inner.borrow();
        state
            .node(node)?
            .attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.clone())
    }

    /// Keys of the direct children of `node`, in document order.
    pub fn children(&self, node: NodeKey) -> Vec<NodeKey> {
        let state = self.inner.borrow();
        let Ok(id) = state.node_id(node) else {
            return Vec::new();
        };
        id.children(&state.arena)
            .filter_map(|child| state.arena.get(child).map(|n| n.get().key))
            .collect()
    }

    pub fn root(&self) -> NodeKey {
        let state = self.inner.borrow();
        state
            .arena
            .get(state.root)
            .map_or(NodeKey::ROOT, |node| node.get().key)
    }
}

impl DOMSubscriber for HeadlessDom {
    fn apply_update(&mut self, update: DOMUpdate) -> Result<()> {
        self.inner.get_mut().apply(update)
    }
}

impl LayoutHost for HeadlessDom {
    fn bounding_rect(&self, node: NodeKey) -> Rect {
        let state = self.inner.borrow();
        let Some(&id) = state.ids.get(&node) else {
            warn!("bounding rect requested for unknown node {node:?}");
            return Rect::default();
        };
        let translated: f64 = id
            .ancestors(&state.arena)
            .filter_map(|ancestor| state.arena.get(ancestor))
            .map(|ancestor| ancestor.get().translate_y())
            .sum();
        let layout = state.arena.get(id).map_or_else(Rect::default, |n| n.get().layout);
        layout.shifted(translated - state.scroll_y)
    }

    fn viewport(&self) -> ViewportMetrics {
        self.inner.borrow().viewport
    }

    fn scroll_y(&self) -> f64 {
        self.inner.borrow().scroll_y
    }

    fn set_styles(&self, node: NodeKey, declarations: &[(&str, &str)]) {
        let mut state = self.inner.borrow_mut();
        let Some(&id) = state.ids.get(&node) else {
            warn!("style write for unknown node {node:?} ignored");
            return;
        };
        if let Ok(target) = state.node_mut(id) {
            for (name, value) in declarations {
                target.set_style(name, value);
            }
        }
    }

    fn style(&self, node: NodeKey, name: &str) -> Option<String> {
        let state = self.inner.borrow();
        state.node(node)?.style(name).map(str::to_owned)
    }

    fn find(&self, target: &str) -> Option<NodeKey> {
        self.inner.borrow().index.resolve(target)
    }
}
